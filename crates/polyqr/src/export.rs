//! Rendering backends for outline polygons.

pub(crate) mod path;
pub(crate) mod svg;
pub(crate) mod tikz;
