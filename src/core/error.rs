//! 统一错误处理 for two-color-graph
//!
//! 默认的检查路径只会产生 `InvalidInput`，其余变体来自独立使用的
//! 图构建器、严格解析模式和配置加载。

use thiserror::Error;

/// 输入校验失败时的固定错误消息
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid parameter passed. Input must be string and can not be empty.";

/// 统一的图检查错误类型
#[derive(Error, Debug)]
pub enum GraphError {
    /// Input is not a string, or is empty once trimmed.
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,

    /// An edge names a node that was never registered with the builder.
    #[error("节点未找到: {0}")]
    MissingNode(String),

    /// Only raised under `EmptySegmentPolicy::Reject`.
    #[error("空路径段: 第 {index} 段")]
    EmptySegment { index: usize },

    #[error("配置错误: {0}")]
    Config(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GraphError::InvalidInput)
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(e: toml::de::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for GraphError {
    fn from(e: toml::ser::Error) -> Self {
        GraphError::Config(e.to_string())
    }
}

/// 统一的结果类型
pub type GraphResult<T> = Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = GraphError::InvalidInput;
        assert_eq!(
            err.to_string(),
            "Invalid parameter passed. Input must be string and can not be empty."
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_missing_node_names_token() {
        let err = GraphError::MissingNode("x".to_string());
        assert!(err.to_string().contains('x'));
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: Result<toml::Value, _> = toml::from_str("not = [valid");
        let err: GraphError = parsed.expect_err("Parse should fail in test").into();
        assert!(matches!(err, GraphError::Config(_)));
    }
}
