//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use two_color_graph::{check_two_colored, GraphError, INVALID_INPUT_MESSAGE};

/// 断言检查成功并返回期望的布尔值
pub fn assert_colorable(input: &str, expected: bool) {
    let result = check_two_colored(input)
        .unwrap_or_else(|e| panic!("检查应该成功: {:?} -> {}", input, e));
    assert_eq!(result, expected, "结果不匹配: {:?}", input);
}

/// 断言结果是 InvalidInput 且消息完全一致
pub fn assert_invalid_input<T: std::fmt::Debug>(result: Result<T, GraphError>) {
    let err = result.expect_err("操作应该失败");
    assert!(err.is_invalid_input(), "错误类型不匹配: {:?}", err);
    assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
}
