//! Run graph visualization.
//!
//! Converts a run graph into a petgraph `DiGraph` for ad-hoc analysis and
//! renders it as Graphviz DOT for debugging generated runs.

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};

use crate::graph::RunGraph;

/// `"<room id> (<type>)"`
fn node_label(graph: &RunGraph, index: usize) -> String {
    let node = &graph.nodes()[index];
    format!("{} ({})", node.room().id(), node.room_type())
}

/// Copy nodes (insertion order) and every in-graph edge, including duplicates
/// and loops
pub fn to_petgraph(graph: &RunGraph) -> DiGraph<String, ()> {
    let mut out = DiGraph::with_capacity(graph.node_count(), graph.node_count());
    let indices: Vec<NodeIndex> = (0..graph.node_count())
        .map(|i| out.add_node(node_label(graph, i)))
        .collect();

    for id in graph.node_ids() {
        for next in graph.local_successors(id) {
            out.add_edge(indices[id.index()], indices[next.index()], ());
        }
    }
    out
}

pub fn to_dot(graph: &RunGraph) -> String {
    let exported = to_petgraph(graph);
    format!("{:?}", Dot::with_config(&exported, &[Config::EdgeNoLabel]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomType;
    use petgraph::algo::is_cyclic_directed;

    fn chain() -> RunGraph {
        let mut graph = RunGraph::new();
        let a = graph.add_room("room_1", RoomType::Combat).unwrap();
        let b = graph.add_room("room_2", RoomType::Shop).unwrap();
        let c = graph.add_room("room_3", RoomType::Boss).unwrap();
        graph.set_start_node(a);
        graph.connect(a, b);
        graph.connect(b, c);
        graph
    }

    #[test]
    fn test_petgraph_preserves_structure() {
        let exported = to_petgraph(&chain());
        assert_eq!(exported.node_count(), 3);
        assert_eq!(exported.edge_count(), 2);
        assert_eq!(exported[NodeIndex::new(1)], "room_2 (Shop)");
        assert!(!is_cyclic_directed(&exported));
    }

    #[test]
    fn test_petgraph_keeps_loops_and_multi_edges() {
        let mut graph = chain();
        let a = graph.find_by_room_id("room_1").unwrap();
        let c = graph.find_by_room_id("room_3").unwrap();
        graph.connect(a, a);
        graph.connect(c, a);
        graph.connect(c, a);

        let exported = to_petgraph(&graph);
        assert_eq!(exported.edge_count(), 5);
        assert!(is_cyclic_directed(&exported));
    }

    #[test]
    fn test_dot_output() {
        let dot = to_dot(&chain());
        assert!(dot.starts_with("digraph"));
        assert!(dot.contains("room_1 (Combat)"));
        assert!(dot.contains("room_3 (Boss)"));
        assert!(dot.contains("->"));
    }
}
