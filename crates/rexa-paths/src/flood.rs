//! Breadth-first flood fill over colored grids.

use rexa_core::{Deque, Point};

use crate::traits::ColoredMut;

/// Recolor the connected region of `start`'s color to `color`, calling
/// `visit` on every recolored cell.
///
/// Connectivity follows the graph's own adjacency. Returns the number of
/// recolored cells; a `start` outside the grid or already painted `color`
/// recolors nothing.
pub fn flood_fill<G: ColoredMut>(
    start: Point,
    color: G::Color,
    graph: &mut G,
    mut visit: impl FnMut(Point),
) -> usize {
    let Some(from) = graph.color(start) else {
        return 0;
    };
    if from == color {
        return 0;
    }

    let mut work = Deque::new();
    let mut nbuf: Vec<Point> = Vec::with_capacity(8);
    let mut count = 0;

    graph.set_color(start, color);
    work.push(start);

    while let Some(p) = work.shift() {
        visit(p);
        count += 1;

        nbuf.clear();
        graph.neighbors(p, &mut nbuf);
        for &n in nbuf.iter() {
            if graph.color(n) == Some(from) {
                graph.set_color(n, color);
                work.push(n);
            }
        }
    }

    count
}
