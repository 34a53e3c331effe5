use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

fn texts(plan: &FramePlan) -> Vec<(&str, Rgba8)> {
    plan.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text { text, color, .. } => Some((text.as_str(), *color)),
            _ => None,
        })
        .collect()
}

#[test]
fn layout_radii_follow_shorter_side() {
    let l = FaceLayout::for_canvas(canvas(1920, 1080)).unwrap();
    assert_eq!(l.center, Point::new(960.0, 540.0));
    assert_eq!(l.seconds_radius, 449.0);
    assert_eq!(l.minutes_radius, 329.0);
    assert_eq!(l.hour_font_px, 113.0);
}

#[test]
fn tiny_canvas_is_rejected() {
    let err = FaceLayout::for_canvas(canvas(2, 2)).unwrap_err();
    assert!(matches!(err, RingclockError::InvalidGeometry(_)));
}

#[test]
fn op_order_is_rings_then_box_then_hour() {
    let sample = TimeSample::from_hms_micro(9, 15, 30, 0).unwrap();
    let plan = compile_frame(canvas(800, 600), &sample).unwrap();
    assert!(plan.clear_to_transparent);
    assert_eq!(plan.ops.len(), 2 * (60 + 12) + 2);

    assert!(matches!(plan.ops[0], DrawOp::Line { .. }));
    assert!(matches!(
        plan.ops[plan.ops.len() - 2],
        DrawOp::RoundedRectStroke { .. }
    ));
    match plan.ops.last().unwrap() {
        DrawOp::Text {
            text,
            anchor,
            size_px,
            ..
        } => {
            assert_eq!(text, "09");
            assert_eq!(*anchor, TextAnchor::Center(Point::new(400.0, 300.0)));
            assert_eq!(*size_px, 63.0);
        }
        other => panic!("expected hour text, got {other:?}"),
    }
}

#[test]
fn noon_highlights_zero_on_both_rings() {
    let sample = TimeSample::from_hms_micro(12, 0, 0, 0).unwrap();
    let plan = compile_frame(canvas(1000, 1000), &sample).unwrap();
    let labels = texts(&plan);

    let (hour, ticks) = labels.split_last().unwrap();
    let hot: Vec<&str> = ticks
        .iter()
        .filter(|(_, c)| *c == Rgba8::gray(255))
        .map(|(t, _)| *t)
        .collect();
    assert_eq!(hot, vec!["00", "00"]);
    assert_eq!(hour.0, "12");
}

#[test]
fn minutes_ring_is_dimmed() {
    let sample = TimeSample::from_hms_micro(12, 0, 0, 0).unwrap();
    let plan = compile_frame(canvas(1000, 1000), &sample).unwrap();
    let line_colors: Vec<Rgba8> = plan
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Line { color, .. } => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(line_colors.len(), 120);
    assert_eq!(line_colors[30], Rgba8::gray(110));
    assert_eq!(line_colors[90], Rgba8::gray(60));
}

#[test]
fn indicator_box_ignores_time() {
    let a = compile_frame(
        canvas(640, 480),
        &TimeSample::from_hms_micro(1, 2, 3, 4).unwrap(),
    )
    .unwrap();
    let b = compile_frame(
        canvas(640, 480),
        &TimeSample::from_hms_micro(23, 59, 59, 999_999).unwrap(),
    )
    .unwrap();
    let boxes = |p: &FramePlan| {
        p.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::RoundedRectStroke { .. }))
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(boxes(&a), boxes(&b));
    assert_eq!(boxes(&a).len(), 1);
}

#[test]
fn compile_is_deterministic_and_serializable() {
    let sample = TimeSample::from_hms_micro(0, 30, 15, 500_000).unwrap();
    let a = compile_frame(canvas(320, 240), &sample).unwrap();
    let b = compile_frame(canvas(320, 240), &sample).unwrap();
    assert_eq!(a, b);

    let json = serde_json::to_string(&a).unwrap();
    let back: FramePlan = serde_json::from_str(&json).unwrap();
    assert_eq!(back.ops.len(), a.ops.len());
}
