//! Geometry-processing passes built on the spatial indexes.

pub use self::weld::{weld_quads, weld_triangles, weld_vertices};

mod weld;
