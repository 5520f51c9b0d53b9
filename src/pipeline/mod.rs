//! One-shot orchestration from a [`PosterRequest`](crate::PosterRequest) to a scene.

pub(crate) mod request;
pub(crate) mod run;
