use super::*;
use serde_json::json;

#[test]
fn span_rejects_inverted_and_non_finite_bounds() {
    assert!(Span::new(0.1, 0.4).is_ok());
    assert!(Span::new(0.4, 0.1).is_err());
    assert!(Span::new(f64::NAN, 1.0).is_err());
    assert!(Span::new(0.0, f64::INFINITY).is_err());
}

#[test]
fn constant_span_consumes_no_randomness() {
    let mut a = RandomStreams::seed_all(7);
    let mut b = RandomStreams::seed_all(7);

    assert_eq!(Span::constant(0.15).sample(&mut a), 0.15);
    // `a` must still be in lockstep with a fresh stream.
    assert_eq!(a.unit(), b.unit());
}

#[test]
fn sampled_values_stay_inside_the_span() {
    let mut rng = RandomStreams::seed_all(3);
    let span = Span::new(0.25, 0.6).unwrap();
    for _ in 0..500 {
        let v = span.sample(&mut rng);
        assert!(span.contains(v), "{v} outside {span:?}");
    }
}

#[test]
fn span_deserializes_from_number_array_and_object() {
    let s: Span = serde_json::from_value(json!(0.5)).unwrap();
    assert_eq!(s, Span::constant(0.5));

    let s: Span = serde_json::from_value(json!([0.1, 0.4])).unwrap();
    assert_eq!(s, Span { min: 0.1, max: 0.4 });

    let s: Span = serde_json::from_value(json!({"min": 0.2, "max": 0.3})).unwrap();
    assert_eq!(s, Span { min: 0.2, max: 0.3 });
}

#[test]
fn unit_square_spans_zero_to_one() {
    let r = unit_square();
    assert_eq!((r.x0, r.y0, r.x1, r.y1), (0.0, 0.0, 1.0, 1.0));
}
