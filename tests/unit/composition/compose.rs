use super::*;
use crate::composition::model::{ConcentricRings, PetalSpan};
use crate::composition::scene::OpKind;
use crate::foundation::core::Span;

fn palette() -> Vec<Rgb> {
    vec![
        Rgb::new(0.9, 0.5, 0.5),
        Rgb::new(0.5, 0.9, 0.5),
        Rgb::new(0.5, 0.5, 0.9),
    ]
}

fn bg() -> Rgb {
    Rgb::new(0.98, 0.98, 0.97)
}

#[test]
fn blob_poster_has_one_fill_per_layer() {
    let mut rng = RandomStreams::seed_all(42);
    let pal = palette();
    let scene = compose(&ComposeParams::default(), &pal, bg(), &mut rng).unwrap();

    assert_eq!(scene.layers.len(), 8);
    assert_eq!(scene.fill_count(), 8);
    assert_eq!(scene.stroke_count(), 0);
    for layer in &scene.layers {
        assert!(pal.contains(&layer.color));
        assert!((0.3..=0.6).contains(&layer.alpha));
        assert!((0.0..1.0).contains(&layer.center.x));
        assert!((0.0..1.0).contains(&layer.center.y));
        assert_eq!(layer.ops[0].points.len(), 200);
        assert_eq!(layer.ops[0].color, layer.color);
    }
}

#[test]
fn same_seed_same_scene() {
    let params = ComposeParams::default();
    let a = compose(&params, &palette(), bg(), &mut RandomStreams::seed_all(7)).unwrap();
    let b = compose(&params, &palette(), bg(), &mut RandomStreams::seed_all(7)).unwrap();
    let c = compose(&params, &palette(), bg(), &mut RandomStreams::seed_all(8)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn fixed_placement_uses_given_centers_in_order() {
    let centers = vec![Point::new(0.2, 0.8), Point::new(0.7, 0.3)];
    let params = ComposeParams {
        layers: 2,
        placement: Placement::Fixed {
            centers: centers.clone(),
        },
        ..ComposeParams::default()
    };
    let scene = compose(&params, &palette(), bg(), &mut RandomStreams::seed_all(1)).unwrap();
    let got: Vec<Point> = scene.layers.iter().map(|l| l.center).collect();
    assert_eq!(got, centers);
}

#[test]
fn flower_layers_stroke_every_petal_of_every_strand() {
    let params = ComposeParams {
        layers: 3,
        shape: ShapeFamily::Flower(FlowerParams {
            petals: PetalSpan { min: 6, max: 6 },
            strands: 3,
            strand_jitter: 0.005,
            line_width: 1.5,
            ..FlowerParams::default()
        }),
        ..ComposeParams::default()
    };
    let scene = compose(&params, &palette(), bg(), &mut RandomStreams::seed_all(3)).unwrap();
    assert_eq!(scene.fill_count(), 0);
    assert_eq!(scene.stroke_count(), 3 * 6 * 3);

    let widths: Vec<f64> = scene.layers[0]
        .ops
        .iter()
        .map(|op| match op.kind {
            OpKind::Stroke { width_pt } => width_pt,
            OpKind::Fill => panic!("flower layers only stroke"),
        })
        .collect();
    assert_eq!(&widths[..6], &[3.5; 6]);
    assert_eq!(&widths[6..12], &[2.5; 6]);
    assert_eq!(&widths[12..], &[1.5; 6]);
    assert!(scene.layers[0].ops.iter().all(|op| op.points.len() == 50));
}

#[test]
fn sphere_layers_draw_shadows_then_the_solid_fill() {
    let params = ComposeParams {
        layers: 2,
        shape: ShapeFamily::Sphere(SphereParams::default()),
        ..ComposeParams::default()
    };
    let scene = compose(&params, &palette(), bg(), &mut RandomStreams::seed_all(11)).unwrap();
    assert_eq!(scene.fill_count(), 2 * 6);
    for layer in &scene.layers {
        let (solid, shadows) = layer.ops.split_last().unwrap();
        assert_eq!(shadows.len(), 5);
        assert!(shadows
            .iter()
            .all(|op| op.color == SHADOW_GRAY && op.alpha == SHADOW_ALPHA));
        assert_eq!(solid.color, layer.color);
        assert_eq!(solid.alpha, layer.alpha);
    }
}

#[test]
fn constant_alpha_is_used_verbatim() {
    let params = ComposeParams {
        alpha: Span::constant(0.45),
        ..ComposeParams::default()
    };
    let scene = compose(&params, &palette(), bg(), &mut RandomStreams::seed_all(2)).unwrap();
    assert!(scene.layers.iter().all(|l| l.alpha == 0.45));
}

#[test]
fn failures_leave_the_streams_untouched() {
    let mut rng = RandomStreams::seed_all(5);
    let mut fresh = RandomStreams::seed_all(5);

    let err = compose(&ComposeParams::default(), &[], bg(), &mut rng).unwrap_err();
    assert!(matches!(err, PosterError::Palette(_)));

    let zero = ComposeParams {
        layers: 0,
        ..ComposeParams::default()
    };
    let err = compose(&zero, &palette(), bg(), &mut rng).unwrap_err();
    assert!(matches!(err, PosterError::Validation(_)));

    assert_eq!(rng.unit(), fresh.unit());
    assert_eq!(rng.unit_array(3), fresh.unit_array(3));
}

#[test]
fn single_color_palette_colors_every_layer() {
    let only = [Rgb::new(0.1, 0.2, 0.3)];
    let scene = compose(
        &ComposeParams::default(),
        &only,
        bg(),
        &mut RandomStreams::seed_all(0),
    )
    .unwrap();
    assert!(scene.layers.iter().all(|l| l.color == only[0]));
}

#[test]
fn flowers_can_recolor_every_stroke() {
    let pal = [
        Rgb::new(1.0, 0.0, 0.0),
        Rgb::new(0.0, 1.0, 0.0),
        Rgb::new(0.0, 0.0, 1.0),
        Rgb::new(1.0, 1.0, 0.0),
        Rgb::new(0.0, 1.0, 1.0),
    ];
    let flower = FlowerParams {
        petals: PetalSpan { min: 8, max: 8 },
        strands: 2,
        strand_jitter: 0.004,
        color_per_stroke: true,
        ..FlowerParams::default()
    };
    let params = ComposeParams {
        layers: 1,
        shape: ShapeFamily::Flower(flower),
        alpha: Span::constant(0.6),
        ..ComposeParams::default()
    };
    let scene = compose(&params, &pal, bg(), &mut RandomStreams::seed_all(4)).unwrap();
    let layer = &scene.layers[0];
    assert_eq!(layer.ops.len(), 16);
    assert_eq!(layer.ops[0].color, layer.color);
    assert!(layer.ops.iter().all(|op| pal.contains(&op.color) && op.alpha == 0.6));
    assert!(layer.ops.iter().any(|op| op.color != layer.color));

    let again = compose(&params, &pal, bg(), &mut RandomStreams::seed_all(4)).unwrap();
    assert_eq!(scene, again);
}

#[test]
fn concentric_rings_shrink_and_cycle_the_palette() {
    let params = ComposeParams {
        layers: 5,
        shape: ShapeFamily::Blob(BlobParams {
            wobble: Span::constant(0.0),
            ..BlobParams::default()
        }),
        placement: Placement::Concentric(ConcentricRings::default()),
        ..ComposeParams::default()
    };
    let pal = palette();
    let scene = compose(&params, &pal, bg(), &mut RandomStreams::seed_all(9)).unwrap();

    for (i, layer) in scene.layers.iter().enumerate() {
        assert_eq!(layer.center, Point::new(0.5, 0.5));
        assert_eq!(layer.color, pal[i % pal.len()]);
        assert!((layer.alpha - (0.4 + i as f64 * 0.05)).abs() < 1e-12);
        let first = layer.ops[0].points[0];
        let r = (first - layer.center).hypot();
        assert!((r - (1.2 - i as f64 * 0.08)).abs() < 1e-9, "layer {i}: r={r}");
    }
}

#[test]
fn concentric_alpha_saturates_at_one() {
    let rings = ConcentricRings {
        alpha_step: 0.3,
        ..ConcentricRings::default()
    };
    assert_eq!(rings.alpha(0), 0.4);
    assert_eq!(rings.alpha(3), 1.0);
}
