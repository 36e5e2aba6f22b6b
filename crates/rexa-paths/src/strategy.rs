//! Path-following strategies for agents chasing possibly moving targets.
//!
//! A strategy owns the cached waypoint path between two [`Locate`]
//! endpoints and decides when to recompute it: on target movement, on a
//! blocked step, or when the path runs out. Rectangle-Expansion A* runs
//! first under a generous budget; plain A* takes over under a tight one
//! when REA* gives up.

use std::cell::Cell;
use std::rc::Rc;

use rexa_core::{Deque, Point};

use crate::astar::astar;
use crate::distance::octile;
use crate::grid::Weighting;
use crate::rea::rectangle_expansion_astar;
use crate::traits::Colored;

/// Default interval-expansion budget for the REA* attempt.
const REA_BUDGET: usize = 128;
/// Default node-expansion budget for the A* fallback.
const ASTAR_BUDGET: usize = 32;

/// Anything with a current grid position. Interior-mutable and shared
/// holders qualify, so a strategy can observe an endpoint that moves
/// between calls.
pub trait Locate {
    /// The current position.
    fn locate(&self) -> Point;
}

impl Locate for Point {
    #[inline]
    fn locate(&self) -> Point {
        *self
    }
}

impl Locate for Cell<Point> {
    #[inline]
    fn locate(&self) -> Point {
        self.get()
    }
}

impl<T: Locate + ?Sized> Locate for &T {
    #[inline]
    fn locate(&self) -> Point {
        (**self).locate()
    }
}

impl<T: Locate + ?Sized> Locate for Rc<T> {
    #[inline]
    fn locate(&self) -> Point {
        (**self).locate()
    }
}

/// Drives path recomputation for an agent following a path on `G`.
///
/// The follower consumes waypoints through [`path_mut`], calls [`update`]
/// every step, [`on_fail`] when a step turned out impassable, and
/// [`on_finish`] when the path is exhausted.
///
/// [`path_mut`]: FollowStrategy::path_mut
/// [`update`]: FollowStrategy::update
/// [`on_fail`]: FollowStrategy::on_fail
/// [`on_finish`]: FollowStrategy::on_finish
pub trait FollowStrategy<G: Colored> {
    /// The cached path, if one is currently held.
    fn path_mut(&mut self) -> Option<&mut Deque<Point>>;

    /// Recompute the path if the target moved since the last search (or
    /// this is the first call). Called every tick, so anything else keeps
    /// the cached path, even a cleared one.
    fn update(&mut self, graph: &G);

    /// The next step was impassable: recompute from scratch.
    fn on_fail(&mut self, graph: &G);

    /// The path ran out. Returns `true` when following is complete,
    /// `false` when a new path was started instead.
    fn on_finish(&mut self, graph: &G) -> bool;
}

/// The default strategy: recompute whenever the target has moved, try
/// REA* first and fall back to budgeted A* on the same colored grid.
pub struct StandardStrategy<S, T> {
    source: S,
    target: T,
    last_target: Option<Point>,
    cached: Option<Deque<Point>>,
    rea_budget: usize,
    astar_budget: usize,
}

impl<S: Locate, T: Locate> StandardStrategy<S, T> {
    /// Create a strategy with the default search budgets.
    pub fn new(source: S, target: T) -> Self {
        Self::with_budgets(source, target, REA_BUDGET, ASTAR_BUDGET)
    }

    /// Create a strategy with explicit REA* and A* budgets.
    pub fn with_budgets(source: S, target: T, rea_budget: usize, astar_budget: usize) -> Self {
        Self {
            source,
            target,
            last_target: None,
            cached: None,
            rea_budget,
            astar_budget,
        }
    }

    /// The cached path, if one is currently held.
    #[inline]
    pub fn path(&self) -> Option<&Deque<Point>> {
        self.cached.as_ref()
    }

    /// Mutable access to the cached path, for consuming waypoints.
    #[inline]
    pub fn path_mut(&mut self) -> Option<&mut Deque<Point>> {
        self.cached.as_mut()
    }

    fn target_moved(&self) -> bool {
        self.last_target != Some(self.target.locate())
    }

    fn refresh<G: Colored>(&mut self, graph: &G) {
        let source = self.source.locate();
        let target = self.target.locate();
        self.last_target = Some(target);

        let path = rectangle_expansion_astar(source, target, graph, self.rea_budget)
            .or_else(|| {
                let color = graph.color(target);
                let costs = Weighting::new(graph, |from, to| {
                    if graph.color(to) == color {
                        octile(from, to)
                    } else {
                        f64::INFINITY
                    }
                });
                astar(source, target, &costs, octile, self.astar_budget)
            });

        match &path {
            Some(p) => log::debug!(
                "path refreshed: {} waypoints from {} to {}",
                p.len(),
                source,
                target
            ),
            None => log::debug!("no path from {} to {}", source, target),
        }
        self.cached = path;
    }
}

impl<G: Colored, S: Locate, T: Locate> FollowStrategy<G> for StandardStrategy<S, T> {
    fn path_mut(&mut self) -> Option<&mut Deque<Point>> {
        self.cached.as_mut()
    }

    fn update(&mut self, graph: &G) {
        // target_moved covers the first call: last_target starts None.
        if self.target_moved() {
            self.refresh(graph);
        }
    }

    fn on_fail(&mut self, graph: &G) {
        self.refresh(graph);
    }

    fn on_finish(&mut self, graph: &G) -> bool {
        if self.target_moved() {
            self.refresh(graph);
            false
        } else {
            self.cached = None;
            true
        }
    }
}

/// Decorator that restarts the inner strategy's path every time it
/// finishes, so the agent patrols the route indefinitely.
pub struct LoopingStrategy<S> {
    inner: S,
}

impl<S> LoopingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// The wrapped strategy.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<G: Colored, S: FollowStrategy<G>> FollowStrategy<G> for LoopingStrategy<S> {
    fn path_mut(&mut self) -> Option<&mut Deque<Point>> {
        self.inner.path_mut()
    }

    fn update(&mut self, graph: &G) {
        self.inner.update(graph);
    }

    fn on_fail(&mut self, graph: &G) {
        self.inner.on_fail(graph);
    }

    fn on_finish(&mut self, graph: &G) -> bool {
        self.inner.on_finish(graph);
        // The restart must not wait for target movement.
        self.inner.on_fail(graph);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Adjacency, ColorGrid, SquareGrid};

    fn open_map(width: i32, height: i32) -> ColorGrid<bool> {
        ColorGrid::new(SquareGrid::new(width, height, Adjacency::Eight), true)
    }

    #[test]
    fn update_recomputes_only_on_target_move() {
        let map = open_map(8, 8);
        let target = Cell::new(Point::new(7, 7));
        let mut strategy = StandardStrategy::new(Point::ZERO, &target);

        strategy.update(&map);
        assert_eq!(strategy.path().unwrap().top(), Some(&Point::new(7, 7)));

        // Scar the cached path; a stationary target must not recompute.
        strategy.path_mut().unwrap().shift();
        let scarred_len = strategy.path().unwrap().len();
        strategy.update(&map);
        assert_eq!(strategy.path().unwrap().len(), scarred_len);

        target.set(Point::new(0, 7));
        strategy.update(&map);
        assert_eq!(strategy.path().unwrap().top(), Some(&Point::new(0, 7)));
    }

    #[test]
    fn on_finish_completes_or_restarts() {
        let map = open_map(8, 8);
        let target = Cell::new(Point::new(7, 0));
        let mut strategy = StandardStrategy::new(Point::ZERO, &target);

        strategy.update(&map);
        assert!(strategy.on_finish(&map));
        assert!(strategy.path().is_none());

        strategy.update(&map);
        target.set(Point::new(0, 7));
        assert!(!strategy.on_finish(&map));
        assert_eq!(strategy.path().unwrap().top(), Some(&Point::new(0, 7)));
    }

    #[test]
    fn update_defers_recompute_until_target_moves() {
        let map = open_map(6, 6);
        let target = Cell::new(Point::new(5, 5));
        let mut strategy = StandardStrategy::new(Point::ZERO, &target);

        strategy.update(&map);
        assert!(strategy.path().is_some());
        assert!(strategy.on_finish(&map));
        assert!(strategy.path().is_none());

        // Ticks with a stationary target leave the finished follow alone.
        strategy.update(&map);
        strategy.update(&map);
        assert!(strategy.path().is_none());

        target.set(Point::new(0, 5));
        strategy.update(&map);
        assert_eq!(strategy.path().unwrap().top(), Some(&Point::new(0, 5)));
    }

    #[test]
    fn on_fail_recomputes_around_new_obstacles() {
        let mut map = open_map(5, 5);
        let mut strategy = StandardStrategy::new(Point::ZERO, Point::new(4, 0));

        strategy.update(&map);
        assert!(strategy.path().is_some());

        // Wall at x=2 with a gap at (2, 4) appears under the agent.
        map.fill(2, 0, 2, 3, false);
        strategy.on_fail(&map);

        let path = strategy.path().unwrap();
        assert!(path.iter().all(|&p| map.color(p) == Some(true)));
        assert!(path.iter().any(|&p| p == Point::new(2, 4)));
    }

    #[test]
    fn astar_fallback_kicks_in_when_rea_budget_is_zero() {
        // The wall keeps the target out of the source's seed rectangle, so
        // a zero REA* budget fails before the first expansion.
        let mut map = open_map(6, 6);
        map.fill(2, 0, 2, 4, false);
        let mut strategy =
            StandardStrategy::with_budgets(Point::ZERO, Point::new(5, 0), 0, 1000);
        strategy.update(&map);

        let path = strategy.path().unwrap();
        assert_eq!(path.bottom(), Some(&Point::ZERO));
        assert_eq!(path.top(), Some(&Point::new(5, 0)));
        assert!(path.iter().all(|&p| map.color(p) == Some(true)));
    }

    #[test]
    fn looping_strategy_never_finishes() {
        let map = open_map(6, 6);
        let inner = StandardStrategy::new(Point::ZERO, Point::new(5, 0));
        let mut strategy = LoopingStrategy::new(inner);

        strategy.update(&map);
        assert!(!strategy.on_finish(&map));
        // A fresh path is already in place.
        assert_eq!(strategy.inner().path().unwrap().top(), Some(&Point::new(5, 0)));
    }
}
