//! 节点颜色
//!
//! 两种颜色本身没有语义，只是一个二元交替。

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NodeColor {
    #[default]
    Unset,
    Red,
    Green,
}

impl NodeColor {
    /// The color a neighbour must take. `Unset` has no opposite.
    pub fn opposite(self) -> NodeColor {
        match self {
            NodeColor::Red => NodeColor::Green,
            NodeColor::Green => NodeColor::Red,
            NodeColor::Unset => NodeColor::Unset,
        }
    }

    pub fn is_set(self) -> bool {
        self != NodeColor::Unset
    }
}

impl fmt::Display for NodeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeColor::Unset => write!(f, "unset"),
            NodeColor::Red => write!(f, "red"),
            NodeColor::Green => write!(f, "green"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_alternates() {
        assert_eq!(NodeColor::Red.opposite(), NodeColor::Green);
        assert_eq!(NodeColor::Green.opposite(), NodeColor::Red);
        assert_eq!(NodeColor::Red.opposite().opposite(), NodeColor::Red);
    }

    #[test]
    fn test_unset_is_default() {
        assert_eq!(NodeColor::default(), NodeColor::Unset);
        assert!(!NodeColor::Unset.is_set());
        assert!(NodeColor::Green.is_set());
        assert_eq!(NodeColor::Unset.opposite(), NodeColor::Unset);
    }
}
