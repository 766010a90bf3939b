//! Structural validation of a completed run graph.
//!
//! Every check runs and every defect is collected. The only short circuit is a
//! missing start node: traversal has nowhere to begin, so that defect is
//! reported alone.

use serde::{Deserialize, Serialize};

use super::{NodeId, RunGraph};

/// Kind of structural defect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectKind {
    NoStartNode,
    NoBossRoom,
    DisconnectedNode,
    CycleDetected,
    /// Non-boss room with no outgoing edge
    DeadEnd,
}

impl DefectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoStartNode => "NoStartNode",
            Self::NoBossRoom => "NoBossRoom",
            Self::DisconnectedNode => "DisconnectedNode",
            Self::CycleDetected => "CycleDetected",
            Self::DeadEnd => "DeadEnd",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defect {
    pub kind: DefectKind,
    pub message: String,
}

/// Outcome of one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    defects: Vec<Defect>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.defects.is_empty()
    }

    pub fn has_error(&self, kind: DefectKind) -> bool {
        self.defects.iter().any(|d| d.kind == kind)
    }

    /// Defect kinds in detection order
    pub fn errors(&self) -> Vec<DefectKind> {
        self.defects.iter().map(|d| d.kind).collect()
    }

    pub fn error_messages(&self) -> Vec<&str> {
        self.defects.iter().map(|d| d.message.as_str()).collect()
    }

    pub fn defects(&self) -> &[Defect] {
        &self.defects
    }

    fn add(&mut self, kind: DefectKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(kind = kind.as_str(), %message, "graph defect");
        self.defects.push(Defect { kind, message });
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphValidator;

impl GraphValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, graph: &RunGraph) -> ValidationResult {
        let mut result = ValidationResult::default();

        let Some(start) = graph.start_node() else {
            result.add(DefectKind::NoStartNode, "Graph has no start node");
            return result;
        };

        if !has_boss_room(graph) {
            result.add(DefectKind::NoBossRoom, "Graph has no boss room");
        }

        if has_cycle_from(graph, start) {
            result.add(DefectKind::CycleDetected, "Graph contains cycles");
        }

        let unreachable = unreachable_nodes(graph, start);
        if !unreachable.is_empty() {
            result.add(
                DefectKind::DisconnectedNode,
                format!(
                    "Some nodes are not reachable from the start: {}",
                    room_ids(graph, &unreachable)
                ),
            );
        }

        let dead_ends = dead_ends(graph);
        if !dead_ends.is_empty() {
            result.add(
                DefectKind::DeadEnd,
                format!(
                    "Found dead-end rooms (non-boss with no exits): {}",
                    room_ids(graph, &dead_ends)
                ),
            );
        }

        result
    }
}

fn has_boss_room(graph: &RunGraph) -> bool {
    graph.nodes().iter().any(|n| n.room().is_boss())
}

/// Three-color DFS from `start`; a successor that is still gray closes a cycle.
fn has_cycle_from(graph: &RunGraph, start: NodeId) -> bool {
    let mut color = vec![Color::White; graph.node_count()];
    // (node, index of the next successor to explore)
    let mut stack: Vec<(NodeId, usize)> = vec![(start, 0)];
    color[start.index()] = Color::Gray;

    while let Some(top) = stack.last_mut() {
        let (node, cursor) = *top;
        match graph.successors(node).get(cursor) {
            Some(&next) => {
                top.1 += 1;
                if !graph.contains(next) {
                    continue;
                }
                match color[next.index()] {
                    Color::Gray => return true,
                    Color::White => {
                        color[next.index()] = Color::Gray;
                        stack.push((next, 0));
                    }
                    Color::Black => {}
                }
            }
            None => {
                color[node.index()] = Color::Black;
                stack.pop();
            }
        }
    }

    false
}

/// Nodes not reachable from `start`, in insertion order
fn unreachable_nodes(graph: &RunGraph, start: NodeId) -> Vec<NodeId> {
    let mut reached = vec![false; graph.node_count()];
    let mut to_visit = vec![start];

    while let Some(current) = to_visit.pop() {
        if std::mem::replace(&mut reached[current.index()], true) {
            continue;
        }
        to_visit.extend(
            graph
                .local_successors(current)
                .filter(|next| !reached[next.index()]),
        );
    }

    graph.node_ids().filter(|id| !reached[id.index()]).collect()
}

fn dead_ends(graph: &RunGraph) -> Vec<NodeId> {
    graph
        .node_ids()
        .filter(|&id| {
            graph
                .node(id)
                .is_some_and(|n| !n.room().is_boss() && n.next_rooms().is_empty())
        })
        .collect()
}

fn room_ids(graph: &RunGraph, ids: &[NodeId]) -> String {
    ids.iter()
        .filter_map(|&id| graph.node(id))
        .map(|n| n.room().id())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomType;

    fn validate(graph: &RunGraph) -> ValidationResult {
        GraphValidator::new().validate(graph)
    }

    #[test]
    fn test_empty_graph_reports_only_missing_start() {
        let result = validate(&RunGraph::new());
        assert!(!result.is_valid());
        assert_eq!(result.errors(), vec![DefectKind::NoStartNode]);
        assert_eq!(result.error_messages(), vec!["Graph has no start node"]);
    }

    #[test]
    fn test_nodes_without_start_short_circuit() {
        let mut graph = RunGraph::new();
        let a = graph.add_room("a", RoomType::Combat).unwrap();
        let b = graph.add_room("b", RoomType::Combat).unwrap();
        graph.connect(a, b);
        graph.connect(b, a);

        let result = validate(&graph);
        assert_eq!(result.errors(), vec![DefectKind::NoStartNode]);
    }

    #[test]
    fn test_simple_valid_graph() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(start);
        graph.connect(start, boss);

        let result = validate(&graph);
        assert!(result.is_valid(), "{:?}", result.error_messages());
        assert!(result.defects().is_empty());
    }

    #[test]
    fn test_single_boss_room_is_valid() {
        let mut graph = RunGraph::new();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(boss);
        assert!(validate(&graph).is_valid());
    }

    #[test]
    fn test_missing_boss() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        let end = graph.add_room("end", RoomType::Combat).unwrap();
        graph.set_start_node(start);
        graph.connect(start, end);

        let result = validate(&graph);
        assert!(result.has_error(DefectKind::NoBossRoom));
        // `end` is also a dead end
        assert!(result.has_error(DefectKind::DeadEnd));
        assert!(!result.has_error(DefectKind::CycleDetected));
    }

    #[test]
    fn test_boss_counts_even_when_unreachable() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        let mid = graph.add_room("mid", RoomType::Combat).unwrap();
        graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(start);
        graph.connect(start, mid);
        graph.connect(mid, start);

        let result = validate(&graph);
        assert!(!result.has_error(DefectKind::NoBossRoom));
        assert!(result.has_error(DefectKind::DisconnectedNode));
        assert!(result.has_error(DefectKind::CycleDetected));
    }

    #[test]
    fn test_three_node_cycle() {
        let mut graph = RunGraph::new();
        let n1 = graph.add_room("node1", RoomType::Combat).unwrap();
        let n2 = graph.add_room("node2", RoomType::Combat).unwrap();
        let n3 = graph.add_room("node3", RoomType::Combat).unwrap();
        graph.set_start_node(n1);
        graph.connect(n1, n2);
        graph.connect(n2, n3);
        graph.connect(n3, n1);

        let result = validate(&graph);
        assert!(result.has_error(DefectKind::CycleDetected));
        assert!(result.has_error(DefectKind::NoBossRoom));
        assert!(!result.has_error(DefectKind::DisconnectedNode));
        assert!(!result.has_error(DefectKind::DeadEnd));
    }

    #[test]
    fn test_self_loop_is_cycle() {
        let mut graph = RunGraph::new();
        let a = graph.add_room("a", RoomType::Combat).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(a);
        graph.connect(a, a);
        graph.connect(a, boss);

        let result = validate(&graph);
        assert_eq!(result.errors(), vec![DefectKind::CycleDetected]);
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        let branch1 = graph.add_room("branch1", RoomType::Combat).unwrap();
        let branch2 = graph.add_room("branch2", RoomType::Treasure).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(start);
        graph.connect(start, branch1);
        graph.connect(start, branch2);
        graph.connect(branch1, boss);
        graph.connect(branch2, boss);

        assert!(validate(&graph).is_valid(), "branching paths should be valid");
    }

    #[test]
    fn test_duplicate_edges_are_not_a_cycle() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(start);
        graph.connect(start, boss);
        graph.connect(start, boss);

        assert!(validate(&graph).is_valid());
    }

    #[test]
    fn test_unreachable_cycle_reported_as_disconnected() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        let x = graph.add_room("x", RoomType::Combat).unwrap();
        let y = graph.add_room("y", RoomType::Combat).unwrap();
        graph.set_start_node(start);
        graph.connect(start, boss);
        graph.connect(x, y);
        graph.connect(y, x);

        let result = validate(&graph);
        assert_eq!(result.errors(), vec![DefectKind::DisconnectedNode]);
        assert!(result.error_messages()[0].ends_with("x, y"));
    }

    #[test]
    fn test_disconnected_node() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        graph.add_room("isolated", RoomType::Combat).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(start);
        graph.connect(start, boss);

        let result = validate(&graph);
        assert!(result.has_error(DefectKind::DisconnectedNode));
        // isolated has no exits either
        assert!(result.has_error(DefectKind::DeadEnd));
        assert!(result.error_messages()[0].contains("isolated"));
    }

    #[test]
    fn test_dead_end() {
        let mut graph = RunGraph::new();
        let start = graph.add_room("start", RoomType::Combat).unwrap();
        let dead_end = graph.add_room("dead_end", RoomType::Combat).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(start);
        graph.connect(start, dead_end);
        graph.connect(start, boss);

        let result = validate(&graph);
        assert_eq!(result.errors(), vec![DefectKind::DeadEnd]);
        assert!(result.error_messages()[0].contains("dead_end"));
    }

    #[test]
    fn test_defects_accumulate_in_check_order() {
        let mut graph = RunGraph::new();
        let a = graph.add_room("a", RoomType::Combat).unwrap();
        let b = graph.add_room("b", RoomType::Combat).unwrap();
        graph.add_room("c", RoomType::Shop).unwrap();
        graph.set_start_node(a);
        graph.connect(a, b);
        graph.connect(b, a);

        let result = validate(&graph);
        assert_eq!(
            result.errors(),
            vec![
                DefectKind::NoBossRoom,
                DefectKind::CycleDetected,
                DefectKind::DisconnectedNode,
                DefectKind::DeadEnd,
            ]
        );
        assert_eq!(result.error_messages().len(), 4);
    }

    #[test]
    fn test_foreign_successor_is_skipped() {
        let mut other = RunGraph::new();
        let far: Vec<NodeId> = (0..5)
            .map(|i| other.add_room(format!("other_{i}"), RoomType::Combat).unwrap())
            .collect();
        other.connect(far[0], far[4]);

        let mut graph = RunGraph::new();
        let a = graph.add_room("a", RoomType::Combat).unwrap();
        let boss = graph.add_room("boss", RoomType::Boss).unwrap();
        graph.set_start_node(a);
        graph.connect(a, boss);
        graph.nodes_mut()[a.index()].add_connection(far[4]);

        let result = validate(&graph);
        assert!(result.is_valid(), "defects: {:?}", result.error_messages());
        assert_eq!(graph.local_successors(a).collect::<Vec<_>>(), vec![boss]);
    }

    #[test]
    fn test_long_chain_does_not_overflow() {
        let mut graph = RunGraph::new();
        let mut prev = graph.add_room("room_0", RoomType::Combat).unwrap();
        graph.set_start_node(prev);
        for i in 1..100_000 {
            let room_type = if i == 99_999 {
                RoomType::Boss
            } else {
                RoomType::Combat
            };
            let next = graph.add_room(format!("room_{i}"), room_type).unwrap();
            graph.connect(prev, next);
            prev = next;
        }

        assert!(validate(&graph).is_valid());
    }
}
