//! 算法模块
//!
//! 包含图相关算法实现

pub mod bipartite;

// 重新导出常用算法结构体
pub use bipartite::{BipartiteCheck, Verdict};
