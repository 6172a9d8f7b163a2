//! 数据模型层

pub mod tree_node;

pub use tree_node::{NodeIcon, NodeKind, OpenAction, TreeItem, TreeNode};
