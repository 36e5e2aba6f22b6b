//! Grid pathfinding built around Rectangle-Expansion A*.
//!
//! The crate searches colored grids: every cell carries a color and a
//! search moves across cells sharing the target's color. The main entry
//! points are:
//!
//! - [`rectangle_expansion_astar`]: Rectangle-Expansion A*, which expands
//!   maximal single-color rectangles and relaxes only their perimeters.
//! - [`astar`]: classical A* over weighted cells, the budgeted fallback.
//! - [`flood_fill`]: breadth-first recoloring of a connected region.
//! - [`StandardStrategy`] / [`LoopingStrategy`]: path-following policies
//!   that decide when to recompute as targets move and maps change.
//!
//! Grids come either from the bundled [`SquareGrid`] / [`ColorGrid`]
//! types or from custom implementations of the [`Graph`], [`Colored`] and
//! [`Weighted`] traits.

mod astar;
mod distance;
mod flood;
mod grid;
mod rea;
mod strategy;
mod traits;

pub use astar::astar;
pub use distance::{chebyshev, euclidean, manhattan, octile, SQRT_2};
pub use flood::flood_fill;
pub use grid::{Adjacency, ColorGrid, SquareGrid, Weighting};
pub use rea::rectangle_expansion_astar;
pub use strategy::{FollowStrategy, Locate, LoopingStrategy, StandardStrategy};
pub use traits::{Colored, ColoredMut, Graph, Weighted};
