//! 图描述文本解析器
//!
//! 输入形如 `a - b - c, d - e`：路径段之间用 `,`、`\n` 或 `\r` 分隔，
//! 段内节点之间用 `-` 分隔，空白字符一律忽略。

use crate::core::{GraphError, GraphResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Edge;

const SEGMENT_SEPARATOR: char = ',';
const NODE_SEPARATOR: char = '-';

/// How empty path segments (`"a-b,,c-d"`, trailing `,`) are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptySegmentPolicy {
    /// Skip the segment silently.
    #[default]
    Ignore,
    /// Fail with `GraphError::EmptySegment`.
    Reject,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    pub empty_segments: EmptySegmentPolicy,
}

/// 解析结果：去重后的节点（按首次出现顺序）和边列表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

impl ParsedGraph {
    /// First node seen in the input; the traversal starts here.
    pub fn first_node(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parses a graph description into unique nodes and edges.
    ///
    /// Fails with `InvalidInput` for blank input and for input that names no
    /// node at all (for example `",,,"`).
    pub fn parse(&self, input: &str) -> GraphResult<ParsedGraph> {
        if input.trim().is_empty() {
            return Err(GraphError::InvalidInput);
        }

        let normalized = Self::normalize(input.trim());
        let mut parsed = ParsedGraph::default();
        let mut seen: HashSet<String> = HashSet::new();
        let mut segment_count = 0usize;

        for (index, segment) in Self::segments(&normalized).enumerate() {
            if segment.is_empty() {
                match self.config.empty_segments {
                    EmptySegmentPolicy::Ignore => continue,
                    EmptySegmentPolicy::Reject => {
                        return Err(GraphError::EmptySegment { index });
                    }
                }
            }
            segment_count += 1;

            let tokens: Vec<&str> = segment.split(NODE_SEPARATOR).collect();
            for run in Self::runs(&tokens) {
                for token in run {
                    if seen.insert(token.to_string()) {
                        parsed.nodes.push(token.to_string());
                    }
                }
                parsed
                    .edges
                    .extend(run.windows(2).map(|pair| Edge::new(pair[0], pair[1])));
            }
        }

        if parsed.nodes.is_empty() {
            return Err(GraphError::InvalidInput);
        }

        log::debug!(
            "解析完成: {} 个路径段, {} 个节点, {} 条边",
            segment_count,
            parsed.nodes.len(),
            parsed.edges.len()
        );
        Ok(parsed)
    }

    /// Treats newlines and carriage returns as segment separators.
    ///
    /// A `\r\n` pair counts as a single separator.
    fn normalize(input: &str) -> String {
        input
            .replace("\r\n", "\n")
            .chars()
            .map(|c| match c {
                '\n' | '\r' => SEGMENT_SEPARATOR,
                other => other,
            })
            .collect()
    }

    /// Splits on the segment separator and strips all whitespace from each segment.
    fn segments(normalized: &str) -> impl Iterator<Item = String> + '_ {
        normalized
            .split(SEGMENT_SEPARATOR)
            .map(|segment| segment.chars().filter(|c| !c.is_whitespace()).collect())
    }

    /// Runs of adjacent non-empty tokens.
    ///
    /// An empty token (`"a--b"`, `"a-"`) breaks the chain: no edge is drawn
    /// across it, so `"a--b"` declares two unconnected nodes.
    fn runs<'a>(tokens: &'a [&'a str]) -> impl Iterator<Item = &'a [&'a str]> + 'a {
        tokens
            .split(|token| token.is_empty())
            .filter(|run| !run.is_empty())
    }
}
