//! Grid geometry and container primitives for rectangle-expansion
//! pathfinding.
//!
//! This crate holds the dependency-light building blocks shared by the
//! search algorithms in `rexa-paths`:
//!
//! - [`Point`], [`Size`] and [`Cardinal`] — integer grid geometry
//! - [`Interval`] — a contiguous row/column run with an expansion direction
//! - [`Rect`] — an inclusive axis-aligned rectangle with flood expansion
//! - [`Deque`] — a double-ended queue (work list and path container)
//! - [`PairingHeap`] — a mergeable min-heap under a caller-supplied relation
//!
//! Geometry operations that need cell state take `impl Fn(Point) -> bool`
//! predicates, so this crate knows nothing about graphs or coloring; the
//! predicate must return `false` outside the grid.

mod deque;
mod geom;
mod heap;
mod interval;
mod rect;

pub use deque::Deque;
pub use geom::{Cardinal, Point, Size};
pub use heap::PairingHeap;
pub use interval::Interval;
pub use rect::Rect;
