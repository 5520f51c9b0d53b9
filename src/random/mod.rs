//! Seeded random streams shared by palette, shape and composition code.

pub(crate) mod streams;
