//! Rectangle-Expansion A* over colored grids.
//!
//! Instead of relaxing cells one at a time, the search flood-expands
//! maximal single-color rectangles and only touches their perimeters, so
//! each expansion costs O(perimeter) rather than O(area). The open set
//! holds boundary intervals ordered by their minimum f-value. Paths come
//! back as waypoint corridors: consecutive points may be far apart, but
//! the straight octile walk between them stays on the target's color.

use std::collections::HashMap;

use rexa_core::{Cardinal, Deque, Interval, PairingHeap, Point, Rect, Size};

use crate::distance::octile;
use crate::traits::Colored;

/// Per-cell search state. `f` stays infinite until the heuristic is known.
#[derive(Clone, Copy)]
struct ReaNode {
    g: f64,
    h: f64,
    f: f64,
}

impl Default for ReaNode {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            h: f64::INFINITY,
            f: f64::INFINITY,
        }
    }
}

/// An open-set entry: a boundary interval keyed by the best f-value among
/// its points, with that point kept for parent linking on expansion.
struct SearchNode {
    interval: Interval,
    min_f: f64,
    p_min: Point,
}

fn min_f_less(a: &SearchNode, b: &SearchNode) -> bool {
    a.min_f < b.min_f
}

/// Find a path from `source` to `target` across cells sharing the target's
/// color, using Rectangle-Expansion A*.
///
/// `budget` bounds the number of interval expansions. Returns a waypoint
/// path including both endpoints, or `None` when the target is
/// unreachable, either endpoint is out of bounds, or the budget runs out.
pub fn rectangle_expansion_astar<G: Colored>(
    source: Point,
    target: Point,
    graph: &G,
    budget: usize,
) -> Option<Deque<Point>> {
    ReaStar::new(source, target, graph, budget)?.find_path()
}

struct ReaStar<'a, G: Colored> {
    source: Point,
    target: Point,
    graph: &'a G,
    color: G::Color,
    size: Size,
    nodes: Vec<ReaNode>,
    came_from: HashMap<usize, Point>,
    open: PairingHeap<SearchNode, fn(&SearchNode, &SearchNode) -> bool>,
    budget: usize,
    expansions: usize,
}

impl<'a, G: Colored> ReaStar<'a, G> {
    fn new(source: Point, target: Point, graph: &'a G, budget: usize) -> Option<Self> {
        graph.color(source)?;
        let color = graph.color(target)?;
        let size = graph.size();
        Some(Self {
            source,
            target,
            graph,
            color,
            size,
            nodes: vec![ReaNode::default(); size.len()],
            came_from: HashMap::new(),
            open: PairingHeap::new(min_f_less as fn(&SearchNode, &SearchNode) -> bool),
            budget,
            expansions: 0,
        })
    }

    fn find_path(mut self) -> Option<Deque<Point>> {
        if self.source == self.target {
            return Some(Deque::from([self.source]));
        }

        if let Some(path) = self.insert_start() {
            return Some(path);
        }

        while let Some(node) = self.open.pop() {
            self.expansions += 1;
            if self.expansions > self.budget {
                return None;
            }
            if let Some(path) = self.expand(node) {
                return Some(path);
            }
        }

        None
    }

    // ------------------------------------------------------------------
    // Cell state
    // ------------------------------------------------------------------

    #[inline]
    fn is_free(&self, p: Point) -> bool {
        self.graph.color(p) == Some(self.color)
    }

    #[inline]
    fn gvalue(&self, p: Point) -> f64 {
        match self.size.id(p) {
            Some(i) => self.nodes[i].g,
            None => f64::INFINITY,
        }
    }

    /// Record a g-value, refreshing f only when the heuristic is already
    /// known for the cell.
    fn set_g(&mut self, p: Point, g: f64) {
        if let Some(i) = self.size.id(p) {
            self.nodes[i].g = g;
            if self.nodes[i].h.is_finite() {
                self.nodes[i].f = g + self.nodes[i].h;
            }
        }
    }

    fn set_gh(&mut self, p: Point, g: f64, h: f64) {
        if let Some(i) = self.size.id(p) {
            self.nodes[i].g = g;
            self.nodes[i].h = h;
            self.nodes[i].f = g + h;
        }
    }

    fn set_parent(&mut self, p: Point, parent: Point) {
        if let Some(i) = self.size.id(p) {
            self.came_from.insert(i, parent);
        }
    }

    // ------------------------------------------------------------------
    // Search phases
    // ------------------------------------------------------------------

    /// Expand the source's own rectangle and seed the open set with its
    /// four outward neighbor intervals.
    fn insert_start(&mut self) -> Option<Deque<Point>> {
        let seed_color = self.graph.color(self.source);
        let rect = Rect::expand(self.source, |p| self.graph.color(p) == seed_color);

        if rect.contains(self.target) {
            self.set_parent(self.target, self.source);
            return Some(self.build_path());
        }

        self.set_g(self.source, 0.0);
        for p in rect.boundary() {
            if p == self.source {
                continue;
            }
            self.set_parent(p, self.source);
            self.set_g(p, octile(self.source, p));
        }

        for cardinal in Cardinal::ALL {
            let interval = rect.extend_neighbor_interval(cardinal);
            if interval.is_valid(self.size) {
                if let Some(path) = self.successor(interval) {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Split a neighbor interval into its free runs and relax each.
    fn successor(&mut self, interval: Interval) -> Option<Deque<Point>> {
        let subs = interval.free_sub_intervals(|p| self.is_free(p));
        for sub in subs {
            if let Some(path) = self.free_successor(sub) {
                return Some(path);
            }
        }
        None
    }

    /// Relax every point of a free interval from its three geometric
    /// predecessors on the line behind it, then queue the interval if any
    /// point improved.
    fn free_successor(&mut self, interval: Interval) -> Option<Deque<Point>> {
        let lateral = if interval.cardinal.is_horizontal() {
            Point::new(0, 1)
        } else {
            Point::new(1, 0)
        };
        let behind = interval.cardinal.opposite().delta();

        let mut updated = false;
        for i in 0..interval.len() {
            let p = interval.at(i);
            let anchor = p + behind;

            let mut best_g = f64::INFINITY;
            let mut best_parent = anchor;
            for q in [anchor - lateral, anchor, anchor + lateral] {
                let cand = self.gvalue(q) + octile(q, p);
                if cand < best_g {
                    best_g = cand;
                    best_parent = q;
                }
            }

            if best_g < self.gvalue(p) {
                self.set_parent(p, best_parent);
                self.set_gh(p, best_g, octile(p, self.target));
                updated = true;
            }
        }

        if interval.contains(self.target) {
            return Some(self.build_path());
        }

        if updated {
            let (min_f, p_min) = self.min_fvalue(interval);
            self.open.push(SearchNode {
                interval,
                min_f,
                p_min,
            });
        }

        None
    }

    /// Expand the rectangle seeded by an open interval and relax its three
    /// far walls, then queue each wall's outward neighbor interval.
    fn expand(&mut self, node: SearchNode) -> Option<Deque<Point>> {
        if node.interval.contains(self.target) {
            return Some(self.build_path());
        }

        let rect = node.interval.expand_rect(|p| self.is_free(p));
        if rect.contains(self.target) {
            self.set_parent(self.target, node.p_min);
            return Some(self.build_path());
        }

        let [side_a, side_b] = rect.perpendicular(node.interval.cardinal);
        let walls = [side_a, side_b, rect.parallel(node.interval.cardinal)];

        for wall in walls {
            // The rectangle is free and convex, so the octile distance
            // between any interval point and any wall point is exact.
            for wi in 0..wall.len() {
                let wp = wall.at(wi);
                for ii in 0..node.interval.len() {
                    let ip = node.interval.at(ii);
                    let cand = self.gvalue(ip) + octile(ip, wp);
                    if cand < self.gvalue(wp) {
                        self.set_parent(wp, ip);
                        self.set_g(wp, cand);
                    }
                }
            }

            let next = rect.extend_neighbor_interval(wall.cardinal);
            if next.is_valid(self.size) {
                if let Some(path) = self.successor(next) {
                    return Some(path);
                }
            }
        }

        None
    }

    /// Minimum f-value over an interval's points, with its location.
    fn min_fvalue(&self, interval: Interval) -> (f64, Point) {
        let mut p_min = interval.at(0);
        let mut min_f = self.fvalue(p_min);
        for i in 1..interval.len() {
            let p = interval.at(i);
            let f = self.fvalue(p);
            if f < min_f {
                min_f = f;
                p_min = p;
            }
        }
        (min_f, p_min)
    }

    #[inline]
    fn fvalue(&self, p: Point) -> f64 {
        match self.size.id(p) {
            Some(i) => self.nodes[i].f,
            None => f64::INFINITY,
        }
    }

    /// Walk parent links back from the target. The source never appears as
    /// a key, so the walk terminates there.
    fn build_path(&self) -> Deque<Point> {
        let mut path = Deque::new();
        let mut current = self.target;
        path.unshift(current);
        while let Some(&parent) = self.size.id(current).and_then(|i| self.came_from.get(&i)) {
            path.unshift(parent);
            current = parent;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    use crate::astar::astar;
    use crate::grid::{Adjacency, ColorGrid, SquareGrid, Weighting};
    use crate::traits::ColoredMut;

    fn open_map(width: i32, height: i32) -> ColorGrid<bool> {
        ColorGrid::new(SquareGrid::new(width, height, Adjacency::Eight), true)
    }

    /// Cost of a waypoint path under octile movement.
    fn path_cost(path: &Deque<Point>) -> f64 {
        let points: Vec<_> = path.iter().copied().collect();
        points.windows(2).map(|w| octile(w[0], w[1])).sum()
    }

    /// A* restricted to the free cells of `map`, for cost comparison.
    fn astar_cost(map: &ColorGrid<bool>, source: Point, target: Point) -> Option<f64> {
        let graph = Weighting::new(map, |from, to| {
            if map.color(to) == Some(true) {
                octile(from, to)
            } else {
                f64::INFINITY
            }
        });
        astar(source, target, &graph, octile, 100_000).map(|p| path_cost(&p))
    }

    #[test]
    fn open_grid_is_one_rectangle() {
        let map = open_map(5, 5);
        let path = rectangle_expansion_astar(Point::ZERO, Point::new(4, 4), &map, 100).unwrap();
        assert_eq!(
            path.iter().copied().collect::<Vec<_>>(),
            vec![Point::ZERO, Point::new(4, 4)]
        );
    }

    #[test]
    fn source_equals_target() {
        let map = open_map(3, 3);
        let p = Point::new(1, 2);
        let path = rectangle_expansion_astar(p, p, &map, 100).unwrap();
        assert_eq!(path.iter().copied().collect::<Vec<_>>(), vec![p]);
    }

    #[test]
    fn wall_with_gap_matches_astar_cost() {
        // Wall at x=2, gap only at (2, 4).
        let mut map = open_map(5, 5);
        map.fill(2, 0, 2, 3, false);

        let source = Point::ZERO;
        let target = Point::new(4, 0);
        let path = rectangle_expansion_astar(source, target, &map, 1000).unwrap();

        assert_eq!(path.bottom(), Some(&source));
        assert_eq!(path.top(), Some(&target));
        assert!(path.iter().all(|&p| map.color(p) == Some(true)));

        let expected = astar_cost(&map, source, target).unwrap();
        assert!((path_cost(&path) - expected).abs() < 1e-6);
    }

    #[test]
    fn enclosed_target_is_unreachable() {
        let mut map = open_map(6, 6);
        map.fill(2, 2, 4, 4, false);
        map.set_color(Point::new(3, 3), true);

        assert!(rectangle_expansion_astar(Point::ZERO, Point::new(3, 3), &map, 1000).is_none());
        assert!(astar_cost(&map, Point::ZERO, Point::new(3, 3)).is_none());
    }

    #[test]
    fn diagonal_squeeze_is_passable() {
        // (1, 0) and (0, 1) blocked: only the corner-cutting diagonal
        // connects (0, 0) to (1, 1).
        let mut map = open_map(3, 3);
        map.set_color(Point::new(1, 0), false);
        map.set_color(Point::new(0, 1), false);

        let path = rectangle_expansion_astar(Point::ZERO, Point::new(2, 2), &map, 1000).unwrap();
        assert!(path.iter().all(|&p| map.color(p) == Some(true)));
        let expected = astar_cost(&map, Point::ZERO, Point::new(2, 2)).unwrap();
        assert!((path_cost(&path) - expected).abs() < 1e-6);
    }

    #[test]
    fn out_of_bounds_endpoints_report_no_path() {
        let map = open_map(4, 4);
        assert!(rectangle_expansion_astar(Point::new(-1, 0), Point::ZERO, &map, 100).is_none());
        assert!(rectangle_expansion_astar(Point::ZERO, Point::new(4, 4), &map, 100).is_none());
    }

    #[test]
    fn budget_exhaustion_reports_no_path() {
        // A serpentine of walls forces many interval expansions.
        let mut map = open_map(13, 12);
        for x in (1..12).step_by(2) {
            let gap = if (x / 2) % 2 == 0 { 11 } else { 0 };
            for y in 0..12 {
                if y != gap {
                    map.set_color(Point::new(x, y), false);
                }
            }
        }
        let target = Point::new(12, 11);
        assert!(rectangle_expansion_astar(Point::ZERO, target, &map, 1).is_none());
        assert!(rectangle_expansion_astar(Point::ZERO, target, &map, 10_000).is_some());
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let mut map = open_map(6, 6);
        map.fill(3, 0, 3, 3, false);
        let a = rectangle_expansion_astar(Point::ZERO, Point::new(5, 5), &map, 1000);
        let b = rectangle_expansion_astar(Point::ZERO, Point::new(5, 5), &map, 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn matches_astar_on_random_maps() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..40 {
            let mut map = open_map(6, 6);
            for y in 0..6 {
                for x in 0..6 {
                    if rng.random_bool(0.25) {
                        map.set_color(Point::new(x, y), false);
                    }
                }
            }
            let source = Point::ZERO;
            let target = Point::new(5, 5);
            map.set_color(source, true);
            map.set_color(target, true);

            let rea = rectangle_expansion_astar(source, target, &map, 10_000);
            let expected = astar_cost(&map, source, target);

            match (rea, expected) {
                (Some(path), Some(cost)) => {
                    assert!(path.iter().all(|&p| map.color(p) == Some(true)));
                    assert!(
                        (path_cost(&path) - cost).abs() < 1e-6,
                        "cost mismatch: rea {} vs astar {}",
                        path_cost(&path),
                        cost
                    );
                }
                (None, None) => {}
                (rea, expected) => panic!(
                    "reachability disagreement: rea {:?} vs astar cost {:?}",
                    rea, expected
                ),
            }
        }
    }
}
