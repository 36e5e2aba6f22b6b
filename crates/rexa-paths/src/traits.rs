//! Graph contracts consumed by the search algorithms.

use rexa_core::{Point, Size};

use crate::distance::octile;

/// Minimal grid graph interface: bounds and neighbor enumeration.
pub trait Graph {
    /// Grid dimensions.
    fn size(&self) -> Size;

    /// Append the neighbors of `p` into `buf`, bounds-filtered. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` lies inside the grid.
    #[inline]
    fn contains(&self, p: Point) -> bool {
        self.size().contains(p)
    }

    /// Stable flat identity of a point (`x + y * width`), or `None` when
    /// the point is outside the grid.
    #[inline]
    fn id(&self, p: Point) -> Option<usize> {
        self.size().id(p)
    }
}

/// A graph whose cells carry a passability class ("color").
///
/// Searches only ever read colors; the write half lives in [`ColoredMut`]
/// so a search can hold the graph through a shared borrow while an
/// external owner keeps the mutable one between searches.
pub trait Colored: Graph {
    /// The cell classification domain. Searches only compare colors for
    /// equality.
    type Color: Copy + PartialEq;

    /// The color of `p`, or `None` when `p` is outside the grid.
    fn color(&self, p: Point) -> Option<Self::Color>;
}

/// The write half of [`Colored`], for non-search collaborators such as
/// flood fill and the external map owner.
pub trait ColoredMut: Colored {
    /// Set the color of `p`. Points outside the grid are ignored.
    fn set_color(&mut self, p: Point, color: Self::Color);
}

/// A graph with weighted (positive-cost) edges between adjacent cells.
///
/// The default weight is the octile distance, the exact cost model for
/// 8-direction movement.
pub trait Weighted: Graph {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    #[inline]
    fn weight(&self, from: Point, to: Point) -> f64 {
        octile(from, to)
    }
}

// Shared borrows of a graph are graphs themselves, so searches and
// decorators can hold `&G` without a dedicated wrapper.

impl<T: Graph + ?Sized> Graph for &T {
    #[inline]
    fn size(&self) -> Size {
        (**self).size()
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        (**self).neighbors(p, buf);
    }
}

impl<T: Colored + ?Sized> Colored for &T {
    type Color = T::Color;

    #[inline]
    fn color(&self, p: Point) -> Option<Self::Color> {
        (**self).color(p)
    }
}

impl<T: Weighted + ?Sized> Weighted for &T {
    #[inline]
    fn weight(&self, from: Point, to: Point) -> f64 {
        (**self).weight(from, to)
    }
}
