pub mod color;
pub mod error;

// 错误和结果类型
pub use error::{GraphError, GraphResult, INVALID_INPUT_MESSAGE};

// 核心数据类型
pub use color::NodeColor;
