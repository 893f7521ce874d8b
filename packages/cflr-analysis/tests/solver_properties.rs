//! Property-based tests for the saturation engine
//!
//! Random pointer programs over a small node universe; the solver must
//! uphold the universal properties of the closure on every one of them:
//! monotone growth, grammar closure, bar symmetry, set semantics,
//! determinism, and worklist accounting.

use std::collections::BTreeSet;

use proptest::prelude::*;

use cflr_analysis::{CflrSolver, EdgeLabel, Grammar, LabeledEdge, LabeledGraph};

const NODES: u32 = 8;

/// A pointer statement between nodes of the universe
#[derive(Debug, Clone, Copy)]
enum Stmt {
    /// p = &a
    AddressOf(u32, u32),
    /// dst = src
    Copy(u32, u32),
    /// *p = v
    Store(u32, u32),
    /// dst = *p
    Load(u32, u32),
}

fn stmt() -> impl Strategy<Value = Stmt> {
    prop_oneof![
        (0..NODES, 0..NODES).prop_map(|(p, a)| Stmt::AddressOf(p, a)),
        (0..NODES, 0..NODES).prop_map(|(d, s)| Stmt::Copy(d, s)),
        (0..NODES, 0..NODES).prop_map(|(p, v)| Stmt::Store(p, v)),
        (0..NODES, 0..NODES).prop_map(|(d, p)| Stmt::Load(d, p)),
    ]
}

fn program() -> impl Strategy<Value = Vec<Stmt>> {
    prop::collection::vec(stmt(), 0..40)
}

/// Build the initial graph the way a well-behaved frontend would:
/// terminal edges plus the required bar twins.
fn build(stmts: &[Stmt]) -> LabeledGraph {
    let mut graph = LabeledGraph::new();
    for &s in stmts {
        match s {
            Stmt::AddressOf(p, a) => {
                graph.add_edge(a, p, EdgeLabel::Addr);
                graph.add_edge(p, a, EdgeLabel::AddrBar);
            }
            Stmt::Copy(dst, src) => {
                graph.add_edge(src, dst, EdgeLabel::Copy);
                graph.add_edge(dst, src, EdgeLabel::CopyBar);
            }
            Stmt::Store(p, v) => {
                graph.add_edge(v, p, EdgeLabel::Store);
            }
            Stmt::Load(dst, p) => {
                graph.add_edge(p, dst, EdgeLabel::Load);
            }
        }
    }
    graph
}

fn edge_set(graph: &LabeledGraph) -> BTreeSet<LabeledEdge> {
    graph.iter_edges().collect()
}

proptest! {
    /// Every initial edge survives saturation (monotone growth)
    #[test]
    fn prop_monotone(stmts in program()) {
        let mut graph = build(&stmts);
        let initial = edge_set(&graph);

        CflrSolver::default().solve(&mut graph);

        let saturated = edge_set(&graph);
        prop_assert!(initial.is_subset(&saturated));
    }

    /// At quiescence no production can add an edge
    #[test]
    fn prop_closure(stmts in program()) {
        let mut graph = build(&stmts);
        CflrSolver::default().solve(&mut graph);

        for &(input, output) in Grammar::UNARY {
            for (u, v) in graph.edges_with_label(input) {
                prop_assert!(
                    graph.has_edge(u, v, output),
                    "unary {input} -> {output} open at ({u}, {v})"
                );
            }
        }

        for production in Grammar::BINARY {
            let left_edges: Vec<_> = graph.edges_with_label(production.left).collect();
            for (u, v) in left_edges {
                let Some(partners) = graph.targets(v, production.right) else {
                    continue;
                };
                for &w in partners {
                    prop_assert!(
                        graph.has_edge(u, w, production.output),
                        "{} . {} -> {} open at ({u}, {v}, {w})",
                        production.left,
                        production.right,
                        production.output
                    );
                }
            }
        }
    }

    /// PointsTo/PointsToBar and Copy/CopyBar stay in lock-step
    #[test]
    fn prop_bar_symmetry(stmts in program()) {
        let mut graph = build(&stmts);
        CflrSolver::default().solve(&mut graph);

        for label in [EdgeLabel::PointsTo, EdgeLabel::PointsToBar, EdgeLabel::Copy, EdgeLabel::CopyBar] {
            let twin = label.inverse().unwrap();
            for (u, v) in graph.edges_with_label(label) {
                prop_assert!(
                    graph.has_edge(v, u, twin),
                    "missing {twin} twin of ({u}, {v}, {label})"
                );
            }
        }
    }

    /// No triple appears twice in any enumeration
    #[test]
    fn prop_set_semantics(stmts in program()) {
        let mut graph = build(&stmts);
        CflrSolver::default().solve(&mut graph);

        let edges: Vec<LabeledEdge> = graph.iter_edges().collect();
        let distinct: BTreeSet<LabeledEdge> = edges.iter().copied().collect();
        prop_assert_eq!(edges.len(), distinct.len());
        prop_assert_eq!(edges.len(), graph.edge_count());
    }

    /// Two independent runs on the same program reach the same fixpoint
    #[test]
    fn prop_deterministic(stmts in program()) {
        let mut first = build(&stmts);
        let mut second = build(&stmts);

        CflrSolver::default().solve(&mut first);
        CflrSolver::default().solve(&mut second);

        prop_assert_eq!(edge_set(&first), edge_set(&second));
    }

    /// Every edge ever added is enqueued (and hence popped) exactly once
    #[test]
    fn prop_worklist_accounting(stmts in program()) {
        let mut graph = build(&stmts);
        let stats = CflrSolver::default().solve(&mut graph);

        prop_assert_eq!(stats.pops, stats.edges_total);
        prop_assert_eq!(stats.edges_total, stats.edges_initial + stats.edges_derived);
    }
}
