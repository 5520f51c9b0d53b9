use super::*;

fn square(x: f64, y: f64, s: f64) -> PointSeq {
    vec![
        Point::new(x, y),
        Point::new(x + s, y),
        Point::new(x + s, y + s),
        Point::new(x, y + s),
    ]
}

#[test]
fn empty_scene_has_no_bounds() {
    let scene = Scene::new(Rgb::gray(1.0));
    assert_eq!(scene.view, unit_square());
    assert!(scene.content_bounds().is_none());
    assert_eq!(scene.fill_count(), 0);
}

#[test]
fn counts_and_bounds_cover_every_op() {
    let red = Rgb::new(1.0, 0.0, 0.0);
    let mut scene = Scene::new(Rgb::gray(1.0));
    scene.layers.push(SceneLayer {
        center: Point::new(0.0, 0.0),
        color: red,
        alpha: 0.5,
        ops: vec![
            DrawOp::fill(square(-0.2, 0.1, 0.1), Rgb::gray(0.5), 0.2),
            DrawOp::fill(square(0.0, 0.0, 0.1), red, 0.5),
        ],
    });
    scene.layers.push(SceneLayer {
        center: Point::new(1.0, 1.0),
        color: red,
        alpha: 0.5,
        ops: vec![DrawOp::stroke(square(1.0, 1.0, 0.3), 2.0, red, 0.5)],
    });

    assert_eq!(scene.fill_count(), 2);
    assert_eq!(scene.stroke_count(), 1);
    assert_eq!(scene.draw_ops().count(), 3);

    let b = scene.content_bounds().unwrap();
    assert!((b.x0 + 0.2).abs() < 1e-12);
    assert!((b.y0 - 0.0).abs() < 1e-12);
    assert!((b.x1 - 1.3).abs() < 1e-12);
    assert!((b.y1 - 1.3).abs() < 1e-12);
}
