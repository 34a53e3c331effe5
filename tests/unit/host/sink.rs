use super::*;

fn frame() -> FrameRGBA {
    FrameRGBA {
        width: 2,
        height: 2,
        data: vec![
            0, 0, 0, 0, //
            64, 64, 64, 128, //
            255, 255, 255, 255, //
            0, 0, 0, 0,
        ],
        premultiplied: true,
    }
}

#[test]
fn png_sink_replaces_target_atomically() {
    let dir = PathBuf::from("target").join("unit_png_sink");
    let _ = std::fs::remove_dir_all(&dir);
    let out = dir.join("nested").join("face.png");

    let mut sink = PngFrameSink::new(&out);
    sink.publish(&frame()).unwrap();
    sink.publish(&frame()).unwrap();

    assert!(out.exists());
    assert!(!dir.join("nested").join("face.png.tmp").exists());

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (2, 2));
    assert_eq!(img.get_pixel(1, 0).0, [128, 128, 128, 128]);
    assert_eq!(img.get_pixel(0, 1).0, [255, 255, 255, 255]);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn unwritable_target_is_a_non_fatal_error() {
    let dir = PathBuf::from("target").join("unit_png_sink_blocked");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let blocker = dir.join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let mut sink = PngFrameSink::new(blocker.join("face.png"));
    let err = sink.publish(&frame()).unwrap_err();
    assert!(!err.is_fatal());
}
