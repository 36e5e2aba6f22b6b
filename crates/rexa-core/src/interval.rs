//! Maximal contiguous runs of grid points on one row or column.

use crate::geom::{Cardinal, Point, Size};
use crate::rect::Rect;

/// A contiguous run of points sharing one fixed coordinate, together with
/// the cardinal direction in which subsequent growth proceeds.
///
/// North/South intervals are horizontal runs (a piece of a row) expanding
/// vertically; East/West intervals are vertical runs (a piece of a column)
/// expanding horizontally. `lo ≤ hi` always holds, so `len ≥ 1`.
///
/// Methods probing cell state take an `impl Fn(Point) -> bool` predicate.
/// The predicate must return `false` for points outside the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Expansion direction.
    pub cardinal: Cardinal,
    /// Fixed coordinate: the row for North/South, the column for East/West.
    pub fixed: i32,
    /// Minimum coordinate along the run.
    pub lo: i32,
    /// Maximum coordinate along the run (inclusive).
    pub hi: i32,
}

impl Interval {
    /// Create an interval. `lo` and `hi` are inclusive; `lo ≤ hi` must hold.
    #[inline]
    pub fn new(cardinal: Cardinal, fixed: i32, lo: i32, hi: i32) -> Self {
        debug_assert!(lo <= hi, "interval endpoints out of order");
        Self {
            cardinal,
            fixed,
            lo,
            hi,
        }
    }

    /// Number of points in the interval.
    #[inline]
    pub fn len(self) -> usize {
        (self.hi - self.lo + 1) as usize
    }

    /// Always `false`: an interval holds at least one point.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// The point at `index`, counting from `lo`.
    ///
    /// Monotonic in the free coordinate. `index` must be `< len()`.
    #[inline]
    pub fn at(self, index: usize) -> Point {
        let c = self.lo + index as i32;
        debug_assert!(c <= self.hi, "interval index out of bounds");
        if self.cardinal.is_horizontal() {
            Point::new(self.fixed, c)
        } else {
            Point::new(c, self.fixed)
        }
    }

    /// Whether `p` lies on the interval.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        if self.cardinal.is_horizontal() {
            p.x == self.fixed && self.lo <= p.y && p.y <= self.hi
        } else {
            p.y == self.fixed && self.lo <= p.x && p.x <= self.hi
        }
    }

    /// The sub-interval spanning indices `start..=end`.
    #[inline]
    pub fn subinterval(self, start: usize, end: usize) -> Interval {
        debug_assert!(start <= end && end < self.len());
        Interval::new(
            self.cardinal,
            self.fixed,
            self.lo + start as i32,
            self.lo + end as i32,
        )
    }

    /// The interval one unit further along the expansion cardinal.
    #[inline]
    pub fn step(self) -> Interval {
        let d = self.cardinal.delta();
        Interval {
            fixed: self.fixed + d.x + d.y,
            ..self
        }
    }

    /// The interval one unit behind this one — the inverse of [`step`].
    ///
    /// [`step`]: Interval::step
    #[inline]
    pub fn parent(self) -> Interval {
        let d = self.cardinal.opposite().delta();
        Interval {
            fixed: self.fixed + d.x + d.y,
            ..self
        }
    }

    /// Whether the interval's grid line exists on a grid of the given size.
    ///
    /// Only the fixed coordinate is checked: points overhanging the line's
    /// ends are rejected by cell-state predicates instead.
    #[inline]
    pub fn is_valid(self, size: Size) -> bool {
        if self.cardinal.is_horizontal() {
            0 <= self.fixed && self.fixed < size.width
        } else {
            0 <= self.fixed && self.fixed < size.height
        }
    }

    /// Whether every point of the interval satisfies `free`.
    pub fn is_free(self, free: impl Fn(Point) -> bool) -> bool {
        (0..self.len()).all(|i| free(self.at(i)))
    }

    /// The maximal sub-intervals whose points all satisfy `free`, in
    /// interval order.
    pub fn free_sub_intervals(self, free: impl Fn(Point) -> bool) -> Vec<Interval> {
        let mut subs = Vec::new();
        let n = self.len();

        let mut start = 0;
        while start < n {
            if !free(self.at(start)) {
                start += 1;
                continue;
            }
            let mut end = start;
            while end + 1 < n && free(self.at(end + 1)) {
                end += 1;
            }
            subs.push(self.subinterval(start, end));
            start = end + 1;
        }

        subs
    }

    /// Flood-expand a rectangle from this interval along its cardinal,
    /// stopping at the last line whose points all satisfy `free`.
    ///
    /// If the interval itself is not free, the result collapses to the
    /// interval's own line.
    pub fn expand_rect(self, free: impl Fn(Point) -> bool) -> Rect {
        let mut last = self;
        let mut next = self;
        while next.is_free(&free) {
            last = next;
            next = last.step();
        }
        Rect::between(self, last)
    }

    /// A degenerate rectangle overlapping exactly this interval.
    #[inline]
    pub fn to_rect(self) -> Rect {
        if self.cardinal.is_horizontal() {
            Rect::new(self.fixed, self.lo, self.fixed, self.hi)
        } else {
            Rect::new(self.lo, self.fixed, self.hi, self.fixed)
        }
    }
}
