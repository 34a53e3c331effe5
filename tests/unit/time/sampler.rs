use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn midday_sample_is_all_zero_rotation() {
    let s = TimeSample::from_hms_micro(12, 0, 0, 0).unwrap();
    assert_eq!(s.hour, 12);
    assert_eq!(s.second_value, 0.0);
    assert_eq!(s.minute_value, 0.0);
    assert_eq!(s.seconds_rotation(), 0.0);
    assert_eq!(s.minutes_rotation(), 0.0);
    assert_eq!(s.hour_label(), "12");
}

#[test]
fn fractional_seconds_feed_minutes() {
    let s = TimeSample::from_hms_micro(0, 30, 15, 500_000).unwrap();
    assert!(approx(s.second_value, 15.5));
    assert!(approx(s.seconds_rotation(), 93.0));
    assert!(approx(s.minute_value, 30.0 + 15.5 / 60.0));
    assert_eq!(s.hour_label(), "00");
}

#[test]
fn second_value_is_monotone_within_a_minute_and_wraps() {
    let mut prev = -1.0;
    for sec in 0..60 {
        for micro in [0, 250_000, 999_999] {
            let s = TimeSample::from_hms_micro(7, 41, sec, micro).unwrap();
            assert!(s.second_value >= prev);
            assert!(s.second_value < 60.0);
            prev = s.second_value;
        }
    }
    let next = TimeSample::from_hms_micro(7, 42, 0, 0).unwrap();
    assert_eq!(next.second_value, 0.0);
    assert_eq!(next.minute_value, 42.0);
}

#[test]
fn minute_fraction_tracks_seconds_without_double_counting() {
    for (sec, micro) in [(0, 0), (15, 500_000), (59, 999_999)] {
        let s = TimeSample::from_hms_micro(3, 59, sec, micro).unwrap();
        assert!(approx(s.minute_value.fract(), s.second_value / 60.0));
        assert_eq!(s.minute_value.trunc(), 59.0);
    }
    let rolled = TimeSample::from_hms_micro(4, 0, 0, 0).unwrap();
    assert_eq!(rolled.minute_value, 0.0);
    assert_eq!(rolled.hour, 4);
}

#[test]
fn leap_second_nanos_are_clamped_below_sixty() {
    let t = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
    let s = TimeSample::from_time(&t);
    assert!(s.second_value < 60.0);
    assert!(approx(s.second_value, 59.999999));
}

#[test]
fn invalid_components_are_rejected() {
    let err = TimeSample::from_hms_micro(24, 0, 0, 0).unwrap_err();
    assert!(matches!(err, RingclockError::Other(_)));
    assert!(!err.is_fatal());
}

#[test]
fn fixed_source_parses_fractional_times() {
    let mut src = FixedTimeSource::parse("00:30:15.5").unwrap();
    let s = src.sample().unwrap();
    assert!(approx(s.second_value, 15.5));
    assert!(FixedTimeSource::parse("not a time").is_err());
}

#[test]
fn unparsable_fixed_time_is_not_a_clock_failure() {
    let err = FixedTimeSource::parse("25:00:00").unwrap_err();
    assert!(matches!(err, RingclockError::Other(_)));
    assert!(err.to_string().contains("cannot parse time '25:00:00'"));
}

#[test]
fn system_source_reads_a_valid_sample() {
    let s = SystemTimeSource.sample().unwrap();
    assert!(s.hour < 24);
    assert!((0.0..60.0).contains(&s.second_value));
    assert!((0.0..60.0).contains(&s.minute_value));
}
