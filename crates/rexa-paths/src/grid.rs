//! Concrete grid graphs: adjacency, dense coloring and weighting
//! decorators.

use rexa_core::{Point, Size};

use crate::traits::{Colored, ColoredMut, Graph, Weighted};

/// Neighbor topology of a [`SquareGrid`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// Cardinal moves only.
    Four,
    /// Cardinal and diagonal moves.
    #[default]
    Eight,
}

/// A rectangular grid graph: dimensions plus neighbor topology.
///
/// Carries no cell state; compose it with [`ColorGrid`] for passability
/// and [`Weighting`] for custom edge weights.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareGrid {
    size: Size,
    adjacency: Adjacency,
}

impl SquareGrid {
    /// Create a grid with the given dimensions and topology.
    pub fn new(width: i32, height: i32, adjacency: Adjacency) -> Self {
        Self {
            size: Size::new(width, height),
            adjacency,
        }
    }

    /// The grid's neighbor topology.
    #[inline]
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }
}

impl Graph for SquareGrid {
    #[inline]
    fn size(&self) -> Size {
        self.size
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        match self.adjacency {
            Adjacency::Four => {
                buf.extend(p.neighbors_4().into_iter().filter(|&n| self.size.contains(n)));
            }
            Adjacency::Eight => {
                buf.extend(p.neighbors_8().into_iter().filter(|&n| self.size.contains(n)));
            }
        }
    }
}

/// A [`SquareGrid`] with one color per cell, stored densely.
///
/// The external owner mutates colors through [`ColoredMut`]; searches
/// read them through [`Colored`].
#[derive(Clone, Debug)]
pub struct ColorGrid<C> {
    grid: SquareGrid,
    cells: Vec<C>,
}

impl<C: Copy + PartialEq> ColorGrid<C> {
    /// Create a grid with every cell set to `default`.
    pub fn new(grid: SquareGrid, default: C) -> Self {
        let cells = vec![default; grid.size().len()];
        Self { grid, cells }
    }

    /// The underlying topology-only grid.
    #[inline]
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    /// Recolor every cell inside the rectangle `(x0, y0)..=(x1, y1)`.
    pub fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: C) {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_color(Point::new(x, y), color);
            }
        }
    }
}

impl<C: Copy + PartialEq> Graph for ColorGrid<C> {
    #[inline]
    fn size(&self) -> Size {
        self.grid.size()
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.grid.neighbors(p, buf);
    }
}

impl<C: Copy + PartialEq> Colored for ColorGrid<C> {
    type Color = C;

    #[inline]
    fn color(&self, p: Point) -> Option<C> {
        self.grid.size().id(p).map(|i| self.cells[i])
    }
}

impl<C: Copy + PartialEq> ColoredMut for ColorGrid<C> {
    #[inline]
    fn set_color(&mut self, p: Point, color: C) {
        if let Some(i) = self.grid.size().id(p) {
            self.cells[i] = color;
        }
    }
}

impl<C: Copy + PartialEq> Weighted for ColorGrid<C> {}

/// Edge-weight decorator: a graph plus a custom weight function.
///
/// Composition replaces ad-hoc mutation of a base grid: a `ColorGrid`
/// wrapped in a `Weighting` satisfies every graph trait at once.
#[derive(Clone, Debug)]
pub struct Weighting<G, F> {
    graph: G,
    weight: F,
}

impl<G: Graph, F: Fn(Point, Point) -> f64> Weighting<G, F> {
    /// Wrap `graph` with the edge-weight function `weight`.
    pub fn new(graph: G, weight: F) -> Self {
        Self { graph, weight }
    }

    /// The wrapped graph.
    #[inline]
    pub fn graph(&self) -> &G {
        &self.graph
    }
}

impl<G: Graph, F: Fn(Point, Point) -> f64> Graph for Weighting<G, F> {
    #[inline]
    fn size(&self) -> Size {
        self.graph.size()
    }

    #[inline]
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.graph.neighbors(p, buf);
    }
}

impl<G: Colored, F: Fn(Point, Point) -> f64> Colored for Weighting<G, F> {
    type Color = G::Color;

    #[inline]
    fn color(&self, p: Point) -> Option<Self::Color> {
        self.graph.color(p)
    }
}

impl<G: ColoredMut, F: Fn(Point, Point) -> f64> ColoredMut for Weighting<G, F> {
    #[inline]
    fn set_color(&mut self, p: Point, color: Self::Color) {
        self.graph.set_color(p, color);
    }
}

impl<G: Graph, F: Fn(Point, Point) -> f64> Weighted for Weighting<G, F> {
    #[inline]
    fn weight(&self, from: Point, to: Point) -> f64 {
        (self.weight)(from, to)
    }
}
