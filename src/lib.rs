#![deny(unsafe_code)]

//! An AVL tree: a binary search tree that rebalances itself with rotations on every
//! insert and delete, so the heights of sibling subtrees never differ by more than one.

mod invariants;
mod node;
mod rebalance;
mod tree;

pub mod logging;

pub use invariants::InvariantViolation;
pub use logging::LoggingError;
pub use node::{height, Node};
pub use rebalance::{LogRebalances, Phase, RebalanceObserver, Rotation};
pub use tree::{AvlTree, Tree};
