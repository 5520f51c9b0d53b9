//! Composition pipeline: turns parameters, a palette and the random streams into an
//! ordered [`Scene`](crate::Scene) of layers.

pub(crate) mod compose;
pub(crate) mod model;
pub(crate) mod scene;
pub(crate) mod swatch;
