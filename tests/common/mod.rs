//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;

/// 把逗号分隔的描述改写成其他分隔符形式
///
/// 返回 `\n`、`\r` 以及两者交替混用的三种变体
pub fn separator_variants(input: &str) -> Vec<String> {
    let newline = input.replace(',', "\n");
    let carriage = input.replace(',', "\r");
    let mixed = input
        .split(',')
        .enumerate()
        .fold(String::new(), |mut acc, (idx, segment)| {
            if idx > 0 {
                acc.push(match idx % 3 {
                    0 => ',',
                    1 => '\n',
                    _ => '\r',
                });
            }
            acc.push_str(segment);
            acc
        });
    vec![newline, carriage, mixed]
}
