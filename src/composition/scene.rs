use crate::foundation::color::Rgb;
use crate::foundation::core::{Point, PointSeq, Rect, unit_square};

/// How a point sequence is painted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpKind {
    /// Fill the closed polygon.
    Fill,
    /// Stroke the open polyline.
    Stroke {
        /// Width in points (1/72 in).
        width_pt: f64,
    },
}

/// One paint operation, in scene coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawOp {
    /// Fill or stroke.
    pub kind: OpKind,
    /// Outline or polyline.
    pub points: PointSeq,
    /// Paint color.
    pub color: Rgb,
    /// Opacity in `[0, 1]`.
    pub alpha: f64,
}

impl DrawOp {
    /// A filled polygon.
    pub fn fill(points: PointSeq, color: Rgb, alpha: f64) -> Self {
        Self {
            kind: OpKind::Fill,
            points,
            color,
            alpha,
        }
    }

    /// A stroked polyline.
    pub fn stroke(points: PointSeq, width_pt: f64, color: Rgb, alpha: f64) -> Self {
        Self {
            kind: OpKind::Stroke { width_pt },
            points,
            color,
            alpha,
        }
    }
}

/// One shape instance and the operations it contributed.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneLayer {
    /// Shape center.
    pub center: Point,
    /// Palette color of the shape.
    pub color: Rgb,
    /// Opacity of the shape.
    pub alpha: f64,
    /// Operations in draw order.
    pub ops: Vec<DrawOp>,
}

/// An ordered stack of layers over a background.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Color behind every layer.
    pub background: Rgb,
    /// Nominal drawing area, y pointing up.
    pub view: Rect,
    /// Layers in draw order.
    pub layers: Vec<SceneLayer>,
}

impl Scene {
    /// An empty scene over the unit square.
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            view: unit_square(),
            layers: Vec::new(),
        }
    }

    /// Every operation in draw order.
    pub fn draw_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.layers.iter().flat_map(|l| l.ops.iter())
    }

    /// Number of fill operations.
    pub fn fill_count(&self) -> usize {
        self.draw_ops()
            .filter(|op| matches!(op.kind, OpKind::Fill))
            .count()
    }

    /// Number of stroke operations.
    pub fn stroke_count(&self) -> usize {
        self.draw_ops()
            .filter(|op| matches!(op.kind, OpKind::Stroke { .. }))
            .count()
    }

    /// Bounding box of every drawn point, or `None` for an empty scene.
    ///
    /// Stroke widths are not included.
    pub fn content_bounds(&self) -> Option<Rect> {
        let mut points = self.draw_ops().flat_map(|op| op.points.iter());
        let first = points.next()?;
        let init = Rect::from_points(*first, *first);
        Some(points.fold(init, |r, p| r.union_pt(*p)))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/scene.rs"]
mod tests;
