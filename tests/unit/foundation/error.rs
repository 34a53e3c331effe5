use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RingclockError::clock_unavailable("x")
            .to_string()
            .contains("clock unavailable:")
    );
    assert!(
        RingclockError::invalid_geometry("x")
            .to_string()
            .contains("invalid geometry:")
    );
    assert!(
        RingclockError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = RingclockError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn only_clock_and_geometry_errors_are_fatal() {
    assert!(RingclockError::clock_unavailable("x").is_fatal());
    assert!(RingclockError::invalid_geometry("x").is_fatal());
    assert!(!RingclockError::render("x").is_fatal());
    assert!(!RingclockError::Other(anyhow::anyhow!("io")).is_fatal());
}
