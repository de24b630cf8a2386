/// Abstract host graph interface.
///
/// The effects layer never owns the graph. The embedding view implements
/// this trait and hands the scheduler a shared handle; all lookups and
/// mutations go through it.

use std::sync::{Arc, Mutex};

use crate::core::types::{Edge, Node};

pub trait GraphHost {
    fn find_node_mut(&mut self, id: &str) -> Option<&mut Node>;
    fn find_edge_mut(&mut self, id: &str) -> Option<&mut Edge>;

    /// Create an edge between two existing nodes and return it.
    fn create_edge(&mut self, id: &str, source_id: &str, target_id: &str) -> &mut Edge;

    /// Ask the host to repaint. Must not block.
    fn request_redraw(&mut self);
}

/// Shared handle to the host graph view.
pub type SharedHost = Arc<Mutex<dyn GraphHost + Send>>;
