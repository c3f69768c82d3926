//! 二分图与连通性检测模块
//!
//! 用一次BFS同时完成二着色和可达性检查

use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::NodeColor;
use crate::graph::Graph;

/// 检测结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Connected and properly two-colored.
    Colorable,
    /// Two adjacent nodes ended up with the same color (odd cycle or self-loop).
    Conflict { node: String, neighbour: String },
    /// Traversal finished but this node was never reached.
    Unreached { node: String },
    /// The start token is not a node of the graph.
    UnknownStart(String),
}

impl Verdict {
    pub fn is_colorable(&self) -> bool {
        matches!(self, Verdict::Colorable)
    }
}

/// BFS二着色算法结构体
pub struct BipartiteCheck;

impl BipartiteCheck {
    pub const START_COLOR: NodeColor = NodeColor::Red;

    /// 从起点开始BFS着色，然后确认所有节点都已着色
    pub fn run(graph: &mut Graph, start: &str) -> Verdict {
        if !graph.set_color(start, Self::START_COLOR) {
            return Verdict::UnknownStart(start.to_string());
        }

        if let Some(conflict) = Self::color_from(graph, start) {
            log::debug!("着色冲突: {:?}", conflict);
            return conflict;
        }

        let unreached = graph
            .iter()
            .find(|(_, node)| !node.color.is_set())
            .map(|(name, _)| name.to_string());

        match unreached {
            Some(node) => {
                log::debug!("节点 {} 不可达，图不连通", node);
                Verdict::Unreached { node }
            }
            None => Verdict::Colorable,
        }
    }

    /// BFS phase. Returns the first conflict found, if any.
    fn color_from(graph: &mut Graph, start: &str) -> Option<Verdict> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::new();
        queue.push_back(start.to_string());

        while let Some(current) = queue.pop_front() {
            let Some(entry) = graph.get(&current) else {
                continue;
            };
            let color = entry.color;
            let neighbours = entry.neighbours.clone();

            for neighbour in neighbours {
                let Some(mut neighbour_color) = graph.color_of(&neighbour) else {
                    continue;
                };
                if !neighbour_color.is_set() {
                    neighbour_color = color.opposite();
                    graph.set_color(&neighbour, neighbour_color);
                }

                if neighbour_color == color {
                    return Some(Verdict::Conflict {
                        node: current,
                        neighbour,
                    });
                }

                if visited.insert(neighbour.clone()) {
                    queue.push_back(neighbour);
                }
            }
        }

        None
    }

    /// Final node colors, or `None` when the graph is not colorable from `start`.
    pub fn coloring(graph: &mut Graph, start: &str) -> Option<HashMap<String, NodeColor>> {
        graph.reset_colors();
        if !Self::run(graph, start).is_colorable() {
            return None;
        }
        Some(
            graph
                .iter()
                .map(|(name, node)| (name.to_string(), node.color))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn build(nodes: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut builder = GraphBuilder::new();
        for node in nodes {
            builder = builder.node(*node);
        }
        for (origin, destination) in edges {
            builder = builder.edge(*origin, *destination);
        }
        builder.build().expect("Build should succeed in test")
    }

    #[test]
    fn test_single_node() {
        let mut graph = build(&["a"], &[]);
        assert_eq!(BipartiteCheck::run(&mut graph, "a"), Verdict::Colorable);
        assert_eq!(graph.color_of("a"), Some(NodeColor::Red));
    }

    #[test]
    fn test_path_alternates_colors() {
        let mut graph = build(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert!(BipartiteCheck::run(&mut graph, "a").is_colorable());
        assert_eq!(graph.color_of("a"), Some(NodeColor::Red));
        assert_eq!(graph.color_of("b"), Some(NodeColor::Green));
        assert_eq!(graph.color_of("c"), Some(NodeColor::Red));
    }

    #[test]
    fn test_even_cycle() {
        let mut graph = build(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("c", "d"), ("b", "c"), ("a", "d")],
        );
        assert!(BipartiteCheck::run(&mut graph, "a").is_colorable());
    }

    #[test]
    fn test_odd_cycle_conflict() {
        let mut graph = build(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        let verdict = BipartiteCheck::run(&mut graph, "a");
        assert!(matches!(verdict, Verdict::Conflict { .. }));
    }

    #[test]
    fn test_self_loop_conflicts_with_itself() {
        let mut graph = build(&["a"], &[("a", "a")]);
        assert_eq!(
            BipartiteCheck::run(&mut graph, "a"),
            Verdict::Conflict {
                node: "a".to_string(),
                neighbour: "a".to_string()
            }
        );
    }

    #[test]
    fn test_disconnected_reports_first_unreached() {
        let mut graph = build(&["a", "b", "f", "g"], &[("a", "b"), ("f", "g")]);
        assert_eq!(
            BipartiteCheck::run(&mut graph, "a"),
            Verdict::Unreached {
                node: "f".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_start() {
        let mut graph = build(&["a"], &[]);
        assert_eq!(
            BipartiteCheck::run(&mut graph, "z"),
            Verdict::UnknownStart("z".to_string())
        );
    }

    #[test]
    fn test_duplicate_edges_do_not_change_result() {
        let mut graph = build(&["a", "b"], &[("a", "b"), ("a", "b"), ("b", "a")]);
        assert!(BipartiteCheck::run(&mut graph, "a").is_colorable());
    }

    #[test]
    fn test_coloring() {
        let mut graph = build(&["a", "b"], &[("a", "b")]);
        let coloring = BipartiteCheck::coloring(&mut graph, "a")
            .expect("Graph should be colorable in test");
        assert_eq!(coloring.get("a"), Some(&NodeColor::Red));
        assert_eq!(coloring.get("b"), Some(&NodeColor::Green));

        let mut odd = build(&["a", "b", "c"], &[("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(BipartiteCheck::coloring(&mut odd, "a").is_none());
    }
}
