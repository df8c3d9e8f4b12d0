//! Value types shared by the layout engine and its hosts.

mod address;
mod element;
mod geometry;
mod grouping;

pub use address::*;
pub use element::*;
pub use geometry::*;
pub use grouping::*;
