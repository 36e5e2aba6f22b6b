//! Classical A* shortest-path search, the fallback for cases REA* cannot
//! resolve within its budget.

use rexa_core::{Deque, PairingHeap, Point};

use crate::traits::Weighted;

const NO_PARENT: usize = usize::MAX;

#[derive(Clone, Copy)]
struct Node {
    g: f64,
    parent: usize,
    visited: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: NO_PARENT,
            visited: false,
        }
    }
}

struct OpenEntry {
    id: usize,
    f: f64,
}

/// Compute the shortest path from `source` to `target` using A* with the
/// given heuristic.
///
/// `budget` bounds the number of node expansions; when it is exhausted the
/// search reports "no path" rather than continuing. Returns the full path
/// (both endpoints included) as a deque, or `None` when the target is
/// unreachable, out of bounds, or out of budget.
///
/// The heuristic must never overestimate the true cost (admissible).
pub fn astar<G: Weighted>(
    source: Point,
    target: Point,
    graph: &G,
    heuristic: impl Fn(Point, Point) -> f64,
    budget: usize,
) -> Option<Deque<Point>> {
    let size = graph.size();
    let source_id = size.id(source)?;
    let target_id = size.id(target)?;

    if source_id == target_id {
        return Some(Deque::from([source]));
    }

    let mut nodes = vec![Node::default(); size.len()];
    nodes[source_id].g = 0.0;

    let mut open = PairingHeap::new(|a: &OpenEntry, b: &OpenEntry| a.f < b.f);
    open.push(OpenEntry {
        id: source_id,
        f: heuristic(source, target),
    });

    let mut nbuf: Vec<Point> = Vec::with_capacity(8);
    let mut expanded = 0usize;

    while let Some(entry) = open.pop() {
        let ci = entry.id;
        // Skip stale duplicates left behind by re-pushes on improvement.
        if nodes[ci].visited {
            continue;
        }
        nodes[ci].visited = true;

        if ci == target_id {
            return Some(build_path(&nodes, size, target_id));
        }

        expanded += 1;
        if expanded > budget {
            return None;
        }

        let cp = size.point(ci);
        let current_g = nodes[ci].g;

        nbuf.clear();
        graph.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = size.id(np) else {
                continue;
            };
            if nodes[ni].visited {
                continue;
            }
            let tentative = current_g + graph.weight(cp, np);
            if tentative >= nodes[ni].g {
                continue;
            }
            nodes[ni].g = tentative;
            nodes[ni].parent = ci;
            open.push(OpenEntry {
                id: ni,
                f: tentative + heuristic(np, target),
            });
        }
    }

    None
}

fn build_path(nodes: &[Node], size: rexa_core::Size, target_id: usize) -> Deque<Point> {
    let mut path = Deque::new();
    let mut ci = target_id;
    loop {
        path.unshift(size.point(ci));
        let pi = nodes[ci].parent;
        if pi == NO_PARENT {
            break;
        }
        ci = pi;
    }
    path
}
