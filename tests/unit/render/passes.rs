use super::*;
use crate::{
    compile::plan::TextAnchor,
    foundation::core::{Point, Rgba8},
};

#[derive(Default)]
struct MockBackend {
    calls: Vec<&'static str>,
    canvas: Option<Canvas>,
    wrong_size: bool,
}

impl RenderBackend for MockBackend {
    fn begin_frame(&mut self, canvas: Canvas, clear: bool) -> RingclockResult<()> {
        self.calls.push(if clear { "clear" } else { "begin" });
        self.canvas = Some(canvas);
        Ok(())
    }

    fn draw_op(&mut self, op: &DrawOp) -> RingclockResult<()> {
        self.calls.push(match op {
            DrawOp::Line { .. } => "line",
            DrawOp::RoundedRectStroke { .. } => "rounded_rect",
            DrawOp::Text { .. } => "text",
        });
        Ok(())
    }

    fn readback_rgba8(&mut self) -> RingclockResult<FrameRGBA> {
        self.calls.push("readback_rgba8");
        let c = self.canvas.expect("begin_frame first");
        let width = if self.wrong_size { c.width + 1 } else { c.width };
        Ok(FrameRGBA {
            width,
            height: c.height,
            data: vec![0; (width * c.height * 4) as usize],
            premultiplied: true,
        })
    }
}

fn small_plan() -> FramePlan {
    FramePlan {
        canvas: Canvas::new(4, 3).unwrap(),
        clear_to_transparent: true,
        ops: vec![
            DrawOp::Line {
                from: Point::new(0.0, 0.0),
                to: Point::new(3.0, 2.0),
                width: 1.0,
                color: Rgba8::gray(110),
            },
            DrawOp::Text {
                text: "07".to_string(),
                anchor: TextAnchor::Center(Point::new(2.0, 1.0)),
                size_px: 2.0,
                color: Rgba8::gray(255),
            },
        ],
    }
}

#[test]
fn execute_plan_calls_in_expected_order() {
    let mut backend = MockBackend::default();
    let frame = execute_plan(&mut backend, &small_plan()).unwrap();
    assert_eq!(backend.calls, vec!["clear", "line", "text", "readback_rgba8"]);
    assert_eq!((frame.width, frame.height), (4, 3));
}

#[test]
fn execute_plan_rejects_mismatched_readback() {
    let mut backend = MockBackend {
        wrong_size: true,
        ..MockBackend::default()
    };
    let err = execute_plan(&mut backend, &small_plan()).unwrap_err();
    assert!(matches!(err, RingclockError::Render(_)));
}

#[test]
fn straight_alpha_conversion_unpremultiplies() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![64, 32, 0, 128, 10, 20, 30, 255],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight_rgba8(), vec![128, 64, 0, 128, 10, 20, 30, 255]);
    assert_eq!(frame.pixel(1, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(2, 0), None);
}
