//! 图结构模块
//!
//! 包含无向图的邻接表表示，以及从文本描述构建它所需的解析器和构建器

pub mod builder;
pub mod parser;

pub use builder::GraphBuilder;
pub use parser::{EmptySegmentPolicy, ParsedGraph, Parser, ParserConfig};

use crate::core::NodeColor;
use std::collections::HashMap;

/// An undirected edge between two node tokens. `(u, u)` is a self-loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub origin: String,
    pub destination: String,
}

impl Edge {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }
}

/// 邻接表中的单个节点记录
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphNode {
    /// Adjacent tokens in insertion order; duplicates are kept.
    pub neighbours: Vec<String>,
    pub color: NodeColor,
}

/// Adjacency-list graph keyed by node token.
///
/// Iteration follows insertion order so that results which name a node
/// (for example the first unreached one) are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<String, GraphNode>,
    order: Vec<String>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an isolated node. Returns `false` if the token was already present.
    pub fn add_node(&mut self, node: &str) -> bool {
        if self.nodes.contains_key(node) {
            return false;
        }
        self.nodes.insert(node.to_string(), GraphNode::default());
        self.order.push(node.to_string());
        true
    }

    /// Appends each endpoint to the other's neighbour list.
    ///
    /// Both endpoints must already be present; on error the graph is unchanged.
    pub fn add_edge(&mut self, edge: &Edge) -> crate::core::GraphResult<()> {
        for endpoint in [&edge.origin, &edge.destination] {
            if !self.nodes.contains_key(endpoint) {
                return Err(crate::core::GraphError::MissingNode(endpoint.clone()));
            }
        }

        if let Some(node) = self.nodes.get_mut(&edge.origin) {
            node.neighbours.push(edge.destination.clone());
        }
        if let Some(node) = self.nodes.get_mut(&edge.destination) {
            node.neighbours.push(edge.origin.clone());
        }
        Ok(())
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn get(&self, node: &str) -> Option<&GraphNode> {
        self.nodes.get(node)
    }

    pub fn neighbours(&self, node: &str) -> Option<&[String]> {
        self.nodes.get(node).map(|n| n.neighbours.as_slice())
    }

    pub fn color_of(&self, node: &str) -> Option<NodeColor> {
        self.nodes.get(node).map(|n| n.color)
    }

    /// Sets the color of an existing node. Returns `false` for an unknown token.
    pub fn set_color(&mut self, node: &str, color: NodeColor) -> bool {
        match self.nodes.get_mut(node) {
            Some(entry) => {
                entry.color = color;
                true
            }
            None => false,
        }
    }

    /// 将所有节点颜色重置为 Unset，以便重新检查
    pub fn reset_colors(&mut self) {
        for node in self.nodes.values_mut() {
            node.color = NodeColor::Unset;
        }
    }

    /// Nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &GraphNode)> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.nodes.get(name).map(|node| (name.as_str(), node)))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
