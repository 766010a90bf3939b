//! Run graph: an arena of nodes wrapping rooms, joined by directed edges.
//!
//! The graph owns every node. Edges and the start designation are `NodeId`
//! handles into the arena, so nodes never own each other and the whole graph
//! can be moved freely. Nothing here enforces acyclicity or connectivity;
//! those are properties checked by [`validator::GraphValidator`].

pub mod validator;

use crate::room::{Room, RoomError, RoomType};

pub use validator::{Defect, DefectKind, GraphValidator, ValidationResult};

/// Handle to a node inside one `RunGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Graph vertex: one room plus generation metadata
#[derive(Debug)]
pub struct Node {
    room: Room,
    next: Vec<NodeId>,
    depth: u32,
    on_critical_path: bool,
}

impl Node {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            next: Vec::new(),
            depth: 0,
            on_critical_path: false,
        }
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    pub fn room_type(&self) -> RoomType {
        self.room.room_type()
    }

    /// Successors in connection order
    pub fn next_rooms(&self) -> &[NodeId] {
        &self.next
    }

    /// Edges are added through [`RunGraph::connect`], which checks the target
    pub(crate) fn add_connection(&mut self, next: NodeId) {
        self.next.push(next);
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u32) {
        self.depth = depth;
    }

    /// Maintained by downstream systems
    pub fn is_on_critical_path(&self) -> bool {
        self.on_critical_path
    }

    pub fn set_on_critical_path(&mut self, on_path: bool) {
        self.on_critical_path = on_path;
    }
}

/// Directed room graph for a single run
#[derive(Debug, Default)]
pub struct RunGraph {
    nodes: Vec<Node>,
    start: Option<NodeId>,
}

impl RunGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a room and add it as a new node
    pub fn add_room(
        &mut self,
        id: impl Into<String>,
        room_type: RoomType,
    ) -> Result<NodeId, RoomError> {
        let room = Room::new(id, room_type)?;
        Ok(self.insert_room(room))
    }

    /// Take ownership of an already built room
    pub fn insert_room(&mut self, room: Room) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(room));
        id
    }

    /// Add `to` as a successor of `from`. Ids that do not belong to this
    /// graph are ignored. Multi-edges and self-loops are accepted as-is.
    pub fn connect(&mut self, from: NodeId, to: NodeId) {
        if !self.contains(to) {
            tracing::trace!(?from, ?to, "connect ignored: unknown target");
            return;
        }
        match self.nodes.get_mut(from.0) {
            Some(node) => node.add_connection(to),
            None => tracing::trace!(?from, ?to, "connect ignored: unknown source"),
        }
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start_node(&self) -> Option<NodeId> {
        self.start
    }

    /// Designate the start node, replacing any previous one.
    /// Ids outside this graph are ignored.
    pub fn set_start_node(&mut self, id: NodeId) {
        if self.contains(id) {
            self.start = Some(id);
        }
    }

    pub fn start(&self) -> Option<&Node> {
        self.start.and_then(|id| self.node(id))
    }

    pub fn successors(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::next_rooms).unwrap_or(&[])
    }

    /// Successors that resolve to a node of this graph. A node moved in from
    /// another graph through `nodes_mut` can carry handles that do not.
    pub fn local_successors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.successors(id)
            .iter()
            .copied()
            .filter(move |&next| self.contains(next))
    }

    pub fn find_by_room_id(&self, room_id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.room.id() == room_id)
            .map(NodeId)
    }
}
