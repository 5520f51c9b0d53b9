//! Parametric point generators for the three shape families.
//!
//! Every generator is a pure function of its arguments and the current state of the
//! [`RandomStreams`](crate::RandomStreams) it is handed; none keep state between calls
//! and none validate their inputs (degenerate counts yield degenerate point data).

pub(crate) mod blob;
pub(crate) mod flower;
pub(crate) mod sphere;
