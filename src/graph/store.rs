/// In-memory graph store: the reference `GraphHost` used by demos, tests,
/// and embedders that run headless.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::core::types::{Edge, Node};
use crate::graph::host::{GraphHost, SharedHost};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphStore {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Wrap the store into the handle type the scheduler takes.
    pub fn into_shared(self) -> SharedHost {
        Arc::new(Mutex::new(self))
    }
}

impl GraphHost for GraphStore {
    fn find_node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    fn find_edge_mut(&mut self, id: &str) -> Option<&mut Edge> {
        self.edges.iter_mut().find(|e| e.id == id)
    }

    fn create_edge(&mut self, id: &str, source_id: &str, target_id: &str) -> &mut Edge {
        self.edges.push(Edge::new(id, source_id, target_id));
        self.edges.last_mut().unwrap()
    }

    fn request_redraw(&mut self) {
        log::trace!("redraw requested");
    }
}
