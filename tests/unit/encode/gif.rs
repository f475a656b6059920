use std::io::BufReader;

use image::AnimationDecoder as _;

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_gif");
    std::fs::create_dir_all(&dir).unwrap();
    let p = dir.join(name);
    let _ = std::fs::remove_file(&p);
    p
}

fn cfg(width: u32, height: u32, frame_count: usize) -> SinkConfig {
    SinkConfig {
        width,
        height,
        frame_delay_ms: 100,
        frame_count,
    }
}

#[test]
fn writes_every_frame() {
    let out = scratch("three.gif");
    let mut sink = GifSink::new(GifSinkOpts::new(&out));
    sink.begin(cfg(8, 6, 3)).unwrap();
    for i in 0..3u64 {
        let v = i as f32 / 2.0;
        let frame = Raster::from_pixel(8, 6, image::Rgb([v, v, v]));
        sink.push_frame(FrameIndex(i), &frame).unwrap();
    }
    sink.end().unwrap();

    let file = BufReader::new(File::open(&out).unwrap());
    let frames = image::codecs::gif::GifDecoder::new(file)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[0].buffer().dimensions(), (8, 6));
}

#[test]
fn rejects_non_gif_extensions() {
    assert!(ensure_gif_path(Path::new("out.gif")).is_ok());
    assert!(ensure_gif_path(Path::new("dir/out.GIF")).is_ok());
    assert!(ensure_gif_path(Path::new("out.png")).is_err());
    assert!(ensure_gif_path(Path::new("out")).is_err());

    let mut sink = GifSink::new(GifSinkOpts::new(scratch("frames.png")));
    assert!(sink.begin(cfg(4, 4, 1)).is_err());
}

#[test]
fn rejects_shape_mismatch_and_out_of_order_frames() {
    let mut sink = GifSink::new(GifSinkOpts::new(scratch("bad.gif")));
    let frame = Raster::new(4, 4);
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());

    sink.begin(cfg(4, 4, 2)).unwrap();
    assert!(sink.push_frame(FrameIndex(0), &Raster::new(5, 4)).is_err());
    sink.push_frame(FrameIndex(1), &frame).unwrap();
    assert!(sink.push_frame(FrameIndex(1), &frame).is_err());
    sink.end().unwrap();
    assert!(sink.end().is_err());
}

#[test]
fn overwrite_false_keeps_existing_file() {
    let out = scratch("keep.gif");
    std::fs::write(&out, b"x").unwrap();
    let mut sink = GifSink::new(GifSinkOpts {
        out_path: out.clone(),
        overwrite: false,
    });
    let err = sink.begin(cfg(2, 2, 1)).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(std::fs::read(&out).unwrap(), b"x");
}

#[test]
fn rgba_conversion_is_opaque_and_scaled() {
    let frame = Raster::from_pixel(1, 1, image::Rgb([1.0, 0.0, 0.5]));
    let px = raster_to_rgba8(&frame).get_pixel(0, 0).0;
    assert_eq!(px[0], 255);
    assert_eq!(px[1], 0);
    assert!((127..=128).contains(&px[2]));
    assert_eq!(px[3], 255);
}
