//! Union-Find (Disjoint Sets) data structure for connectivity tracking

use crate::error::{GraphGenError, Result};

/// Union-Find over `n` elements with path compression and union by rank.
///
/// Elements are plain indices into flat `parent`/`rank` vectors; the structure
/// never grows or shrinks after construction. `find` and `merge` run in
/// effectively constant amortized time.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    num_sets: usize,
}

impl UnionFind {
    /// Create a new UnionFind with `n` singleton sets
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let rank = vec![0; n];
        UnionFind {
            parent,
            rank,
            num_sets: n,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently remaining
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    fn check_index(&self, x: usize) -> Result<()> {
        if x >= self.parent.len() {
            return Err(GraphGenError::OutOfRange {
                index: x,
                len: self.parent.len(),
            });
        }
        Ok(())
    }

    /// Find the root of element `x` with path compression.
    ///
    /// Iterative two-pass walk: locate the root, then re-point every node on
    /// the path directly at it. No recursion, so deep trees on large `n` are
    /// safe.
    pub fn find(&mut self, x: usize) -> Result<usize> {
        self.check_index(x)?;

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        Ok(root)
    }

    /// Union the sets containing `x` and `y`.
    ///
    /// Returns `true` if a merge happened, `false` if the two elements were
    /// already in the same set (in which case nothing is mutated beyond path
    /// compression).
    pub fn merge(&mut self, x: usize, y: usize) -> Result<bool> {
        let root_x = self.find(x)?;
        let root_y = self.find(y)?;

        if root_x == root_y {
            return Ok(false);
        }

        // Union by rank: shallower tree goes under the deeper one
        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        self.num_sets -= 1;
        Ok(true)
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
        Ok(self.find(x)? == self.find(y)?)
    }

    /// Get all sets as groups of element indices
    pub fn sets(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut root_to_group: std::collections::HashMap<usize, Vec<usize>> =
            std::collections::HashMap::new();

        for i in 0..n {
            // In-range by construction
            let root = self.find(i).unwrap_or(i);
            root_to_group.entry(root).or_default().push(i);
        }

        root_to_group.into_values().collect()
    }
}
