//! Random graph generation with union-find connectivity guarantees
//!
//! Building blocks for generating random test graphs: a union-find structure
//! for connectivity tracking, distinct-value sampling without replacement, and
//! directed/undirected graph builders that add random edges and can guarantee
//! a single connected component. All randomness flows through an explicit
//! `rand::Rng` supplied by the caller; see [`rng`] for seeding entry points.
//!
//! ```
//! use graphgen::{rng, UndirectedGraph};
//!
//! let mut r = rng::seeded(1);
//! let mut g = UndirectedGraph::new(10);
//! g.add_random_edges(&mut r, 5)?;
//! g.connect(&mut r)?;
//! print!("{g}");
//! # Ok::<(), graphgen::GraphGenError>(())
//! ```

pub mod error;
pub mod graph;
pub mod rng;
pub mod sample;
pub mod union_find;

pub use error::{GraphGenError, Result};
pub use graph::{DirectedGraph, UndirectedGraph};
pub use sample::{permutation, sample};
pub use union_find::UnionFind;
