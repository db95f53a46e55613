#![forbid(unsafe_code)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/", env!("CARGO_PKG_README")))]

pub mod node;
pub mod tree;

pub use node::TreeNode;
pub use tree::PrefixTree;
