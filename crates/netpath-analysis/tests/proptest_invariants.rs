use std::collections::{HashSet, VecDeque};

use netpath_analysis::{
    Strategy as PartitionStrategy, calculate_centrality, detect_communities, find_shortest_path,
    partition,
};
use netpath_core::NetworkGraph;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Up to 14 nodes `n0..`, edges drawn as index pairs (self-loops and
/// repeats included on purpose).
fn arb_graph() -> impl Strategy<Value = NetworkGraph> {
    (0usize..14)
        .prop_flat_map(|n| {
            let edges = if n == 0 {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec((0..n, 0..n), 0..(n * 2)).boxed()
            };
            (Just(n), edges)
        })
        .prop_map(|(n, edges)| {
            let ids: Vec<String> = (0..n).map(|i| format!("n{i}")).collect();
            let nodes: Vec<(&str, &str)> = ids.iter().map(|id| (id.as_str(), id.as_str())).collect();
            let edges: Vec<(&str, &str)> = edges
                .iter()
                .map(|&(a, b)| (ids[a].as_str(), ids[b].as_str()))
                .collect();
            NetworkGraph::from_pairs(&nodes, &edges).expect("generated graph is valid")
        })
}

fn arb_graph_and_pair() -> impl Strategy<Value = (NetworkGraph, String, String)> {
    arb_graph().prop_flat_map(|g| {
        let n = g.node_count().max(1);
        (Just(g), 0..n + 1, 0..n + 1)
            .prop_map(|(g, s, t)| (g, format!("n{s}"), format!("n{t}")))
    })
}

// ---------------------------------------------------------------------------
// Reference implementations
// ---------------------------------------------------------------------------

fn reference_distance(g: &NetworkGraph, s: &str, t: &str) -> Option<usize> {
    if !g.contains(s) || !g.contains(t) {
        return None;
    }
    let mut seen: HashSet<&str> = HashSet::from([s]);
    let mut queue: VecDeque<(&str, usize)> = VecDeque::from([(s, 0)]);
    while let Some((v, d)) = queue.pop_front() {
        if v == t {
            return Some(d);
        }
        for e in g.edges() {
            let next = if e.source == v {
                e.target.as_str()
            } else if e.target == v {
                e.source.as_str()
            } else {
                continue;
            };
            if seen.insert(next) {
                queue.push_back((next, d + 1));
            }
        }
    }
    None
}

fn same_component(g: &NetworkGraph, a: &str, b: &str) -> bool {
    reference_distance(g, a, b).is_some()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    #[test]
    fn same_endpoints_give_empty_path(g in arb_graph()) {
        for node in g.nodes() {
            prop_assert!(find_shortest_path(&g, &node.id, &node.id).is_empty());
        }
    }

    #[test]
    fn path_is_shortest_and_walkable((g, s, t) in arb_graph_and_pair()) {
        let path = find_shortest_path(&g, &s, &t);
        let expected = if s == t { None } else { reference_distance(&g, &s, &t) };

        match expected {
            None => prop_assert!(path.is_empty()),
            Some(d) => {
                prop_assert_eq!(path.hop_count(), d);
                prop_assert_eq!(path.source(), Some(s.as_str()));
                prop_assert_eq!(path.target(), Some(t.as_str()));
                for (a, b) in path.edges() {
                    prop_assert!(g.has_edge(a, b), "{} -- {} is not an edge", a, b);
                }
                let unique: HashSet<&String> = path.nodes().iter().collect();
                prop_assert_eq!(unique.len(), path.len());
            }
        }
    }

    #[test]
    fn centrality_is_normalized(g in arb_graph()) {
        let c = calculate_centrality(&g);
        prop_assert_eq!(c.len(), g.node_count());
        let max = g.max_degree();
        for node in g.nodes() {
            let score = c[&node.id];
            prop_assert!((0.0..=1.0).contains(&score));
            if max > 0 && node.connections == max {
                prop_assert!((score - 1.0).abs() < f64::EPSILON);
            }
            if max == 0 {
                prop_assert!(score.abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn communities_respect_components(g in arb_graph()) {
        let m = detect_communities(&g);
        prop_assert_eq!(m.len(), g.node_count());

        let p = partition(&g);
        if p.strategy == PartitionStrategy::ConnectedComponents {
            for a in g.nodes() {
                for b in g.nodes() {
                    let together = same_component(&g, &a.id, &b.id);
                    prop_assert_eq!(m[&a.id] == m[&b.id], together);
                }
            }
        } else {
            // Fallback only fires on a single component.
            let first = &g.nodes()[0].id;
            for node in g.nodes() {
                prop_assert!(same_component(&g, first, &node.id));
            }
            let labels: HashSet<usize> = m.values().copied().collect();
            prop_assert_eq!(labels.len(), p.community_count);
        }
    }

    #[test]
    fn analysis_is_idempotent((g, s, t) in arb_graph_and_pair()) {
        let before = g.clone();
        prop_assert_eq!(find_shortest_path(&g, &s, &t), find_shortest_path(&g, &s, &t));
        prop_assert_eq!(calculate_centrality(&g), calculate_centrality(&g));
        prop_assert_eq!(detect_communities(&g), detect_communities(&g));
        prop_assert_eq!(g, before);
    }
}
