use super::*;

#[test]
fn over_with_opaque_source_replaces_destination() {
    assert_eq!(
        over([10, 20, 30, 255], [200, 100, 50, 255], 1.0),
        [200, 100, 50, 255]
    );
}

#[test]
fn over_with_transparent_source_keeps_destination() {
    assert_eq!(over([10, 20, 30, 255], [0, 0, 0, 0], 1.0), [10, 20, 30, 255]);
    assert_eq!(
        over([10, 20, 30, 255], [200, 100, 50, 255], 0.0),
        [10, 20, 30, 255]
    );
}

#[test]
fn flatten_blends_half_covered_pixels_with_background() {
    // One transparent pixel, one half-alpha premultiplied red pixel.
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![0, 0, 0, 0, 128, 0, 0, 128],
        premultiplied: true,
    };
    let rgb = flatten_over(&frame, Rgb::gray(1.0)).unwrap();
    assert_eq!(rgb.len(), 6);
    assert_eq!(&rgb[..3], &[255, 255, 255]);
    assert_eq!(rgb[3], 255);
    assert!((126..=128).contains(&rgb[4]));
    assert_eq!(rgb[4], rgb[5]);
}

#[test]
fn flatten_rejects_malformed_frames() {
    let short = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 7],
        premultiplied: true,
    };
    assert!(flatten_over(&short, Rgb::gray(0.0)).is_err());

    let straight = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![0; 4],
        premultiplied: false,
    };
    assert!(flatten_over(&straight, Rgb::gray(0.0)).is_err());
}
