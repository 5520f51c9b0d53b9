use super::*;

#[test]
fn sphere_is_a_closed_clean_circle() {
    let center = Point::new(0.5, 0.5);
    let pts = sphere(center, 0.1, 100);
    assert_eq!(pts.len(), 100);

    for p in &pts {
        let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
        assert!((d - 0.1).abs() < 1e-12);
    }
    let (first, last) = (pts[0], pts[99]);
    assert!((first.x - last.x).abs() < 1e-12 && (first.y - last.y).abs() < 1e-12);
}

#[test]
fn shadow_offsets_shrink_towards_the_front() {
    let outline = sphere(Point::new(0.3, 0.3), 0.05, 12);
    let (layers, s) = (5usize, 0.02);
    let stack = shadow_stack(&outline, layers, s);
    assert_eq!(stack.len(), layers);

    for (i, copy) in stack.iter().enumerate() {
        let expected = s * (layers - i) as f64;
        for (shifted, base) in copy.iter().zip(&outline) {
            assert!((shifted.x - base.x - expected).abs() < 1e-12);
            assert!((shifted.y - base.y + expected).abs() < 1e-12);
        }
    }
}

#[test]
fn zero_layer_shadow_stack_is_empty() {
    let outline = sphere(Point::ZERO, 1.0, 8);
    assert!(shadow_stack(&outline, 0, 0.02).is_empty());
}
