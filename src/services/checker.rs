//! 二色连通图检查入口
//!
//! 文本 → (节点, 边) → 邻接表 → 布尔结果。每次调用独立构建图，不保留任何状态。

use serde_json::Value;

use crate::core::{GraphError, GraphResult};
use crate::graph::{GraphBuilder, Parser, ParserConfig};
use crate::services::algorithm::{BipartiteCheck, Verdict};

/// Configured checker. Holds only parser settings, never graph state.
#[derive(Debug, Clone, Default)]
pub struct TwoColorChecker {
    parser: Parser,
}

impl TwoColorChecker {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            parser: Parser::new(config),
        }
    }

    /// Runs all three stages and returns the detailed verdict.
    pub fn analyze(&self, input: &str) -> GraphResult<Verdict> {
        let parsed = self.parser.parse(input)?;
        let start = parsed
            .first_node()
            .map(str::to_string)
            .ok_or(GraphError::InvalidInput)?;

        let mut graph = GraphBuilder::from_parsed(parsed).build()?;
        let verdict = BipartiteCheck::run(&mut graph, &start);
        log::debug!("检查结果: {:?}", verdict);
        Ok(verdict)
    }

    /// `true` iff the described graph is connected and properly two-colorable.
    pub fn check(&self, input: &str) -> GraphResult<bool> {
        self.analyze(input).map(|verdict| verdict.is_colorable())
    }

    /// Dynamic entry point: anything but a JSON string is `InvalidInput`.
    pub fn check_value(&self, input: &Value) -> GraphResult<bool> {
        match input {
            Value::String(s) => self.check(s),
            _ => Err(GraphError::InvalidInput),
        }
    }
}

/// Checks a graph description with the default (lenient) parser.
pub fn check_two_colored(input: &str) -> GraphResult<bool> {
    TwoColorChecker::default().check(input)
}

/// Same as [`check_two_colored`] for an untyped value such as parsed JSON.
pub fn check_value(input: &Value) -> GraphResult<bool> {
    TwoColorChecker::default().check_value(input)
}
