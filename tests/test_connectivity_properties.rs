/// Property-based tests for union-find and connect()
///
/// Union-find answers are checked against a brute-force transitive closure
/// over the merge history, and connect() is checked against its postcondition:
/// a union-find rebuilt from the final edge set connects every vertex pair.
use proptest::prelude::*;

use graphgen::{rng, UndirectedGraph, UnionFind};

/// Reference connectivity: transitive closure over merged pairs, O(n^3)-ish
/// but unarguably correct.
fn closure(n: usize, pairs: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut reach = vec![vec![false; n]; n];
    for (i, row) in reach.iter_mut().enumerate() {
        row[i] = true;
    }
    for &(x, y) in pairs {
        reach[x][y] = true;
        reach[y][x] = true;
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if reach[i][k] && reach[k][j] {
                    reach[i][j] = true;
                }
            }
        }
    }
    reach
}

#[test]
fn prop_union_find_matches_reference_closure() {
    proptest!(|(
        n in 1usize..24,
        raw_pairs in prop::collection::vec((0usize..24, 0usize..24), 0..40)
    )| {
        let pairs: Vec<(usize, usize)> = raw_pairs
            .into_iter()
            .map(|(x, y)| (x % n, y % n))
            .collect();

        let mut uf = UnionFind::new(n);
        for &(x, y) in &pairs {
            uf.merge(x, y).unwrap();
        }
        let reach = closure(n, &pairs);

        for x in 0..n {
            for y in 0..n {
                prop_assert_eq!(
                    uf.connected(x, y).unwrap(),
                    reach[x][y],
                    "connectivity mismatch for ({}, {})", x, y
                );
            }
        }
    });
}

#[test]
fn prop_merge_reports_new_connections_exactly() {
    proptest!(|(
        n in 1usize..20,
        raw_pairs in prop::collection::vec((0usize..20, 0usize..20), 0..30)
    )| {
        let mut uf = UnionFind::new(n);
        for (x, y) in raw_pairs.into_iter().map(|(x, y)| (x % n, y % n)) {
            let before = uf.connected(x, y).unwrap();
            let merged = uf.merge(x, y).unwrap();
            prop_assert_eq!(merged, !before);
            prop_assert!(uf.connected(x, y).unwrap());
        }
    });
}

#[test]
fn prop_connect_yields_single_component() {
    proptest!(|(
        seed in any::<u64>(),
        n in 1usize..40,
        raw_edges in prop::collection::vec((0usize..40, 0usize..40), 0..60)
    )| {
        let mut r = rng::seeded(seed);
        let mut g = UndirectedGraph::new(n);
        for (u, v) in raw_edges.into_iter().map(|(u, v)| (u % n, v % n)) {
            g.add_edge(u, v).unwrap();
        }

        let initial_edges = g.edge_count();
        let mut before = UnionFind::new(n);
        for &(u, v) in g.edges() {
            before.merge(u, v).unwrap();
        }
        let components = before.num_sets();

        let added = g.connect(&mut r).unwrap();

        // Minimal-edge strategy: exactly one bridge per extra component
        prop_assert_eq!(added, components - 1);
        prop_assert_eq!(g.edge_count(), initial_edges + added);
        prop_assert!(added <= n.saturating_sub(1));

        let mut after = UnionFind::new(n);
        for &(u, v) in g.edges() {
            after.merge(u, v).unwrap();
        }
        for x in 0..n {
            prop_assert!(after.connected(0, x).unwrap(), "vertex {} left disconnected", x);
        }
    });
}

#[test]
fn prop_connect_is_idempotent() {
    proptest!(|(seed in any::<u64>(), n in 1usize..30)| {
        let mut r = rng::seeded(seed);
        let mut g = UndirectedGraph::new(n);
        g.connect(&mut r).unwrap();
        let edges_after_first = g.edge_count();
        prop_assert_eq!(g.connect(&mut r).unwrap(), 0);
        prop_assert_eq!(g.edge_count(), edges_after_first);
    });
}

#[test]
fn prop_sample_distinct_in_range() {
    proptest!(|(seed in any::<u64>(), n in 0usize..200, frac in 0.0f64..=1.0)| {
        let k = ((n as f64) * frac) as usize;
        let s = graphgen::sample(&mut rng::seeded(seed), n, k).unwrap();
        prop_assert_eq!(s.len(), k);
        prop_assert!(s.iter().all(|&v| v < n));
        let mut sorted = s.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), k, "sample contained duplicates");
    });
}
