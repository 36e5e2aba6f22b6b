//! Axis-aligned rectangles of grid cells, with inclusive bounds.

use crate::geom::{Cardinal, Point};
use crate::interval::Interval;

/// An axis-aligned rectangle described by inclusive bounds.
///
/// `left ≤ right` and `top ≤ bottom` always hold, so a rectangle covers at
/// least one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from inclusive bounds.
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        debug_assert!(left <= right && top <= bottom, "rect bounds out of order");
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Flood-expand the maximal rectangle around `seed` whose cells all
    /// satisfy `same`.
    ///
    /// The seed row grows left and right first, then the column span grows
    /// up and down one full line at a time. `same` must return `false` for
    /// points outside the grid.
    pub fn expand(seed: Point, same: impl Fn(Point) -> bool) -> Rect {
        let (mut left, mut right) = (seed.x, seed.x);
        let (mut top, mut bottom) = (seed.y, seed.y);

        while same(Point::new(right + 1, seed.y)) {
            right += 1;
        }
        while same(Point::new(left - 1, seed.y)) {
            left -= 1;
        }

        'south: loop {
            for x in left..=right {
                if !same(Point::new(x, bottom + 1)) {
                    break 'south;
                }
            }
            bottom += 1;
        }

        'north: loop {
            for x in left..=right {
                if !same(Point::new(x, top - 1)) {
                    break 'north;
                }
            }
            top -= 1;
        }

        Rect::new(left, top, right, bottom)
    }

    /// The bounding box of two rectangles.
    #[inline]
    pub fn merge(a: Rect, b: Rect) -> Rect {
        Rect::new(
            a.left.min(b.left),
            a.top.min(b.top),
            a.right.max(b.right),
            a.bottom.max(b.bottom),
        )
    }

    /// The bounding box of two intervals.
    #[inline]
    pub fn between(a: Interval, b: Interval) -> Rect {
        Rect::merge(a.to_rect(), b.to_rect())
    }

    /// Width in cells.
    #[inline]
    pub fn width(self) -> i32 {
        self.right - self.left + 1
    }

    /// Height in cells.
    #[inline]
    pub fn height(self) -> i32 {
        self.bottom - self.top + 1
    }

    /// Whether `p` lies inside the rectangle.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }

    /// Every point on the rectangle's perimeter, each exactly once.
    pub fn boundary(self) -> Vec<Point> {
        let mut points = Vec::with_capacity((2 * (self.width() + self.height())) as usize);

        for x in self.left..=self.right {
            points.push(Point::new(x, self.top));
            if self.bottom != self.top {
                points.push(Point::new(x, self.bottom));
            }
        }
        for y in self.top + 1..self.bottom {
            points.push(Point::new(self.left, y));
            if self.right != self.left {
                points.push(Point::new(self.right, y));
            }
        }

        points
    }

    /// The interval lying on the rectangle's own edge towards `cardinal`,
    /// expanding outwards.
    #[inline]
    pub fn edge(self, cardinal: Cardinal) -> Interval {
        match cardinal {
            Cardinal::North => Interval::new(cardinal, self.top, self.left, self.right),
            Cardinal::South => Interval::new(cardinal, self.bottom, self.left, self.right),
            Cardinal::East => Interval::new(cardinal, self.right, self.top, self.bottom),
            Cardinal::West => Interval::new(cardinal, self.left, self.top, self.bottom),
        }
    }

    /// The interval one unit beyond the given edge, including the one-cell
    /// wing overhang on each side that captures diagonal adjacency at the
    /// rectangle's corners.
    ///
    /// The result may fall outside the grid; check [`Interval::is_valid`]
    /// before use.
    pub fn extend_neighbor_interval(self, cardinal: Cardinal) -> Interval {
        match cardinal {
            Cardinal::North => {
                Interval::new(cardinal, self.top - 1, self.left - 1, self.right + 1)
            }
            Cardinal::South => {
                Interval::new(cardinal, self.bottom + 1, self.left - 1, self.right + 1)
            }
            Cardinal::East => {
                Interval::new(cardinal, self.right + 1, self.top - 1, self.bottom + 1)
            }
            Cardinal::West => {
                Interval::new(cardinal, self.left - 1, self.top - 1, self.bottom + 1)
            }
        }
    }

    /// The two edges perpendicular to the given expansion cardinal.
    #[inline]
    pub fn perpendicular(self, cardinal: Cardinal) -> [Interval; 2] {
        match cardinal {
            Cardinal::North | Cardinal::South => [self.edge(Cardinal::West), self.edge(Cardinal::East)],
            Cardinal::East | Cardinal::West => [self.edge(Cardinal::North), self.edge(Cardinal::South)],
        }
    }

    /// The far edge parallel to the given expansion cardinal.
    #[inline]
    pub fn parallel(self, cardinal: Cardinal) -> Interval {
        self.edge(cardinal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn expand_fills_free_block() {
        // Free block: x in 1..=3, y in 1..=2.
        let same = |p: Point| (1..=3).contains(&p.x) && (1..=2).contains(&p.y);
        let rect = Rect::expand(Point::new(2, 1), same);
        assert_eq!(rect, Rect::new(1, 1, 3, 2));
    }

    #[test]
    fn expand_single_cell() {
        let seed = Point::new(4, 4);
        let rect = Rect::expand(seed, |p| p == seed);
        assert_eq!(rect, Rect::new(4, 4, 4, 4));
        assert!(rect.contains(seed));
    }

    #[test]
    fn expand_stops_on_ragged_row() {
        // Row y=0 free on x 0..=4, row y=1 free only on x 0..=2: the column
        // growth requires the full span, so the rect stays one row tall.
        let same = |p: Point| {
            (p.y == 0 && (0..=4).contains(&p.x)) || (p.y == 1 && (0..=2).contains(&p.x))
        };
        let rect = Rect::expand(Point::new(1, 0), same);
        assert_eq!(rect, Rect::new(0, 0, 4, 0));
    }

    #[test]
    fn merge_is_bounding_box() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(4, 1, 5, 6);
        assert_eq!(Rect::merge(a, b), Rect::new(0, 0, 5, 6));
    }

    #[test]
    fn boundary_has_no_duplicates() {
        let rect = Rect::new(1, 1, 4, 3);
        let points = rect.boundary();
        let unique: HashSet<_> = points.iter().copied().collect();
        assert_eq!(points.len(), unique.len());
        // Perimeter of a 4x3 rect.
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|&p| rect.contains(p)));
    }

    #[test]
    fn boundary_degenerate_line() {
        let rect = Rect::new(2, 5, 6, 5);
        let points = rect.boundary();
        assert_eq!(points.len(), 5);
        let unique: HashSet<_> = points.iter().copied().collect();
        assert_eq!(unique.len(), 5);
    }

    #[test]
    fn boundary_single_cell() {
        assert_eq!(Rect::new(3, 3, 3, 3).boundary(), vec![Point::new(3, 3)]);
    }

    #[test]
    fn extend_neighbor_interval_wings() {
        let rect = Rect::new(2, 2, 4, 5);

        let north = rect.extend_neighbor_interval(Cardinal::North);
        assert_eq!(north.fixed, 1);
        assert_eq!((north.lo, north.hi), (1, 5));

        let east = rect.extend_neighbor_interval(Cardinal::East);
        assert_eq!(east.fixed, 5);
        assert_eq!((east.lo, east.hi), (1, 6));

        // Wings capture diagonal adjacency at the corners.
        assert!(north.contains(Point::new(1, 1)));
        assert!(north.contains(Point::new(5, 1)));
    }

    #[test]
    fn perpendicular_and_parallel_edges() {
        let rect = Rect::new(1, 2, 5, 6);

        let [west, east] = rect.perpendicular(Cardinal::North);
        assert_eq!(west.cardinal, Cardinal::West);
        assert_eq!(west.fixed, 1);
        assert_eq!(east.cardinal, Cardinal::East);
        assert_eq!(east.fixed, 5);

        let parallel = rect.parallel(Cardinal::North);
        assert_eq!(parallel.cardinal, Cardinal::North);
        assert_eq!(parallel.fixed, 2);
        assert_eq!((parallel.lo, parallel.hi), (1, 5));

        let [north, south] = rect.perpendicular(Cardinal::West);
        assert_eq!(north.cardinal, Cardinal::North);
        assert_eq!(south.cardinal, Cardinal::South);
    }

    #[test]
    fn between_intervals() {
        let a = Interval::new(Cardinal::South, 1, 0, 3);
        let b = Interval::new(Cardinal::South, 4, 0, 3);
        assert_eq!(Rect::between(a, b), Rect::new(0, 1, 3, 4));
    }
}
