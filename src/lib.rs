//! two-color-graph - checks whether a textual undirected graph is connected
//! and two-colorable (bipartite)
//!
//! The input is a list of hyphen-delimited paths such as `a - b - c, c - d`.
//! Each call parses the text, builds a fresh adjacency list and runs one
//! breadth-first coloring pass over it; nothing is shared between calls.

pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod utils;

pub use crate::core::{GraphError, GraphResult, NodeColor, INVALID_INPUT_MESSAGE};
pub use services::{check_two_colored, check_value, TwoColorChecker, Verdict};
