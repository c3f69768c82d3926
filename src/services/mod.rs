//! 服务层模块
//!
//! 把解析、构建和检测串联成对外的检查入口

pub mod algorithm;
pub mod checker;

// 重新导出常用服务
pub use algorithm::*;
pub use checker::*;
