//! Random graph construction over a fixed vertex count
//!
//! Graphs hold a vertex count fixed at construction and an edge list in
//! insertion order. Random edge generation draws endpoints independently, so
//! self-loops and parallel edges are permitted by design; callers wanting a
//! simple graph can deduplicate the edge list they read back. The undirected
//! variant can guarantee full connectivity by spanning its components with a
//! minimal set of extra edges, driven by a union-find over the vertices.

use std::fmt;

use log::debug;
use rand::Rng;

use crate::error::{GraphGenError, Result};
use crate::sample;
use crate::union_find::UnionFind;

fn check_vertex(v: usize, n: usize) -> Result<()> {
    if v >= n {
        return Err(GraphGenError::OutOfRange { index: v, len: n });
    }
    Ok(())
}

fn render(n: usize, edges: &[(usize, usize)], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{} {}", n, edges.len())?;
    for &(u, v) in edges {
        writeln!(f, "{u} {v}")?;
    }
    Ok(())
}

/// Undirected graph under construction: `(u, v)` and `(v, u)` are the same
/// edge, stored in the orientation it was inserted.
pub struct UndirectedGraph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl UndirectedGraph {
    /// Create an empty graph on `n` vertices
    pub fn new(n: usize) -> Self {
        UndirectedGraph { n, edges: Vec::new() }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Append the edge `{u, v}`
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_vertex(u, self.n)?;
        check_vertex(v, self.n)?;
        self.edges.push((u, v));
        Ok(())
    }

    /// Append `m` edges with endpoints drawn independently and uniformly from
    /// `[0, n)`. Self-loops and parallel edges are not filtered.
    pub fn add_random_edges<R: Rng>(&mut self, rng: &mut R, m: usize) -> Result<()> {
        add_random_edges(rng, self.n, m, &mut self.edges)
    }

    /// Add edges until the graph is a single connected component.
    ///
    /// Folds the current edges into a fresh union-find, picks one
    /// representative per component by scanning the vertices in random order,
    /// then spans the representatives with a random tree. Adds exactly
    /// `components - 1` edges; a no-op when already connected or `n <= 1`.
    /// Returns the number of edges added.
    pub fn connect<R: Rng>(&mut self, rng: &mut R) -> Result<usize> {
        if self.n <= 1 {
            return Ok(0);
        }

        let mut components = UnionFind::new(self.n);
        for &(u, v) in &self.edges {
            components.merge(u, v)?;
        }

        // One representative per component, chosen uniformly: the first
        // vertex of each component met on a random scan order is a uniform
        // pick within it.
        let order = sample::permutation(rng, self.n);
        let anchor = order[0];
        let mut representatives = vec![anchor];
        for &v in &order[1..] {
            if !components.connected(anchor, v)? {
                representatives.push(v);
                components.merge(anchor, v)?;
            }
        }

        debug!(
            "connect: {} vertices, {} components, adding {} edges",
            self.n,
            representatives.len(),
            representatives.len() - 1
        );

        // Random tree spanning the representatives
        for i in 1..representatives.len() {
            let parent = representatives[rng.gen_range(0..i)];
            self.edges.push((parent, representatives[i]));
        }

        Ok(representatives.len() - 1)
    }

    /// Path `0 - 1 - ... - (n-1)`
    pub fn build_path(&mut self) {
        build_path_edges(self.n, &mut self.edges);
    }

    /// Cycle through all vertices in index order.
    ///
    /// Fails with `InvalidArgument` for `n < 3`: an undirected cycle needs at
    /// least a triangle.
    pub fn build_cycle(&mut self) -> Result<()> {
        if self.n < 3 {
            return Err(GraphGenError::InvalidArgument(format!(
                "undirected cycle needs at least 3 vertices, got {}",
                self.n
            )));
        }
        build_path_edges(self.n, &mut self.edges);
        self.edges.push((self.n - 1, 0));
        Ok(())
    }

    /// Star with vertex 0 at the center
    pub fn build_star(&mut self) {
        for i in 1..self.n {
            self.edges.push((0, i));
        }
    }

    /// Wheel: vertex 0 is the hub, vertices `1..n` form the rim cycle, with a
    /// spoke from the hub to every rim vertex.
    ///
    /// Fails with `InvalidArgument` for `n < 4`: the rim needs at least a
    /// triangle.
    pub fn build_wheel(&mut self) -> Result<()> {
        if self.n < 4 {
            return Err(GraphGenError::InvalidArgument(format!(
                "wheel needs at least 4 vertices, got {}",
                self.n
            )));
        }
        for i in 1..self.n {
            if i > 1 {
                self.edges.push((i - 1, i));
            }
            self.edges.push((0, i));
        }
        self.edges.push((self.n - 1, 1));
        Ok(())
    }

    /// Complete graph: one edge for every pair `i < j`
    pub fn build_clique(&mut self) {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                self.edges.push((i, j));
            }
        }
    }

    /// Random forest with exactly `m` edges (hence `n - m` trees).
    ///
    /// Samples `m` distinct vertices `v` from `[0, n-1)` and attaches `v + 1`
    /// to a uniformly chosen earlier vertex, so no cycle can form. Fails with
    /// `InvalidArgument` when `m > n - 1`.
    pub fn build_random_forest<R: Rng>(&mut self, rng: &mut R, m: usize) -> Result<()> {
        let slots = self.n.saturating_sub(1);
        if m > slots {
            return Err(GraphGenError::InvalidArgument(format!(
                "a forest on {} vertices admits at most {} edges, got {}",
                self.n, slots, m
            )));
        }
        for v in sample::sample(rng, slots, m)? {
            let parent = rng.gen_range(0..=v);
            self.edges.push((parent, v + 1));
        }
        Ok(())
    }

    /// Uniformly random spanning tree shape on all `n` vertices
    pub fn build_random_tree<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        self.build_random_forest(rng, self.n.saturating_sub(1))
    }
}

impl fmt::Display for UndirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.n, &self.edges, f)
    }
}

/// Directed graph under construction; each edge `(u, v)` points `u -> v`.
pub struct DirectedGraph {
    n: usize,
    edges: Vec<(usize, usize)>,
}

impl DirectedGraph {
    /// Create an empty graph on `n` vertices
    pub fn new(n: usize) -> Self {
        DirectedGraph { n, edges: Vec::new() }
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Append the edge `u -> v`
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_vertex(u, self.n)?;
        check_vertex(v, self.n)?;
        self.edges.push((u, v));
        Ok(())
    }

    /// Append `m` edges with endpoints drawn independently and uniformly from
    /// `[0, n)`. Self-loops and parallel edges are not filtered.
    pub fn add_random_edges<R: Rng>(&mut self, rng: &mut R, m: usize) -> Result<()> {
        add_random_edges(rng, self.n, m, &mut self.edges)
    }

    /// Path `0 -> 1 -> ... -> (n-1)`
    pub fn build_path(&mut self) {
        build_path_edges(self.n, &mut self.edges);
    }

    /// Directed cycle through all vertices in index order (a self-loop when
    /// `n == 1`). Fails with `InvalidArgument` for `n == 0`.
    pub fn build_cycle(&mut self) -> Result<()> {
        if self.n == 0 {
            return Err(GraphGenError::InvalidArgument(
                "cycle needs at least one vertex".to_string(),
            ));
        }
        build_path_edges(self.n, &mut self.edges);
        self.edges.push((self.n - 1, 0));
        Ok(())
    }
}

impl fmt::Display for DirectedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self.n, &self.edges, f)
    }
}

fn add_random_edges<R: Rng>(
    rng: &mut R,
    n: usize,
    m: usize,
    edges: &mut Vec<(usize, usize)>,
) -> Result<()> {
    if m == 0 {
        return Ok(());
    }
    if n == 0 {
        return Err(GraphGenError::InvalidArgument(
            "cannot add edges to a graph with no vertices".to_string(),
        ));
    }

    debug!("adding {m} random edges over {n} vertices");

    edges.reserve(m);
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        edges.push((u, v));
    }
    Ok(())
}

fn build_path_edges(n: usize, edges: &mut Vec<(usize, usize)>) {
    for i in 1..n {
        edges.push((i - 1, i));
    }
}
