pub mod geometry;

pub use geometry::{BoxGeometry, Edge, Edges, Size};
