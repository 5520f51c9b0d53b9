use super::*;
use serde_json::json;

fn approx(a: Rgb, b: Rgb) -> bool {
    (a.r - b.r).abs() < 1e-9 && (a.g - b.g).abs() < 1e-9 && (a.b - b.b).abs() < 1e-9
}

#[test]
fn hsv_primaries() {
    assert!(approx(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::new(1.0, 0.0, 0.0)));
    assert!(approx(
        Rgb::from_hsv(1.0 / 3.0, 1.0, 1.0),
        Rgb::new(0.0, 1.0, 0.0)
    ));
    assert!(approx(
        Rgb::from_hsv(2.0 / 3.0, 1.0, 1.0),
        Rgb::new(0.0, 0.0, 1.0)
    ));
    // Hue 1.0 wraps back to red.
    assert!(approx(Rgb::from_hsv(1.0, 1.0, 1.0), Rgb::new(1.0, 0.0, 0.0)));
}

#[test]
fn hsv_zero_saturation_is_gray() {
    assert_eq!(Rgb::from_hsv(0.42, 0.0, 0.7), Rgb::gray(0.7));
}

#[test]
fn hsv_output_is_normalized_over_a_grid() {
    for hi in 0..=20 {
        for si in 0..=4 {
            for vi in 0..=4 {
                let c = Rgb::from_hsv(hi as f64 / 20.0, si as f64 / 4.0, vi as f64 / 4.0);
                assert!(c.is_normalized(), "{c:?}");
            }
        }
    }
}

#[test]
fn parses_hex_with_and_without_hash() {
    let c = Rgb::from_hex("#FFB3BA").unwrap();
    assert_eq!(c.to_rgb8(), [0xff, 0xb3, 0xba]);
    let c = Rgb::from_hex("4d96ff").unwrap();
    assert_eq!(c.to_rgb8(), [0x4d, 0x96, 0xff]);
    assert!(Rgb::from_hex("#abc").is_err());
    assert!(Rgb::from_hex("#zzzzzz").is_err());
}

#[test]
fn deserializes_hex_object_and_array() {
    let c: Rgb = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Rgb::new(1.0, 0.0, 0.0));

    let c: Rgb = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Rgb::new(0.25, 0.5, 0.75));

    let c: Rgb = serde_json::from_value(json!([0.1, 0.3, 0.8])).unwrap();
    assert_eq!(c, Rgb::new(0.1, 0.3, 0.8));

    assert!(serde_json::from_value::<Rgb>(json!([0.1, 0.3])).is_err());
}

#[test]
fn premultiplied_conversion_scales_by_alpha() {
    assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_rgba8_premul(1.0), [255, 128, 0, 255]);
    assert_eq!(Rgb::new(1.0, 1.0, 1.0).to_rgba8_premul(0.0), [0, 0, 0, 0]);
    // Out-of-range table values are clamped.
    assert_eq!(Rgb::new(1.4, -0.2, 0.5).to_rgb8(), [255, 0, 128]);
}
