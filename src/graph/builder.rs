//! 图构建器
//!
//! 先插入全部节点（包括孤立节点），再逐条添加边

use crate::core::GraphResult;

use super::{Edge, Graph, ParsedGraph};

/// Collects nodes and edges, then builds a `Graph`.
///
/// Edges are applied only after every node is registered, so the order in
/// which `node` and `edge` are called does not matter. An edge whose
/// endpoint was never registered fails the build with `MissingNode`.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parsed(parsed: ParsedGraph) -> Self {
        Self {
            nodes: parsed.nodes,
            edges: parsed.edges,
        }
    }

    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn edge(mut self, origin: impl Into<String>, destination: impl Into<String>) -> Self {
        self.edges.push(Edge::new(origin, destination));
        self
    }

    pub fn build(self) -> GraphResult<Graph> {
        let mut graph = Graph::new();

        for node in &self.nodes {
            graph.add_node(node);
        }
        for edge in &self.edges {
            graph.add_edge(edge)?;
        }

        log::debug!(
            "图构建完成: {} 个节点, {} 条边 (自环 {} 条)",
            graph.len(),
            self.edges.len(),
            self.edges.iter().filter(|edge| edge.is_self_loop()).count()
        );
        Ok(graph)
    }
}
