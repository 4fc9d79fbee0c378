use thiserror::Error;

use crate::node::Node;

/// A broken AVL invariant, reported by [`AvlTree::check_invariants`](crate::AvlTree::check_invariants).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("in-order value #{position} is not greater than its predecessor")]
    OutOfOrder { position: usize },
    #[error("node at depth {depth} caches height {cached} but its subtree has height {actual}")]
    StaleHeight { depth: usize, cached: i32, actual: i32 },
    #[error("node at depth {depth} has balance factor {balance}")]
    Unbalanced { depth: usize, balance: i32 },
}

/// Checks search order, cached heights and balance factors of the subtree under `root`.
pub(crate) fn check<T: Ord>(root: Option<&Node<T>>) -> Result<(), InvariantViolation> {
    check_shape(root, 0)?;
    
    let mut previous: Option<&T> = None;
    let mut position = 0;
    let mut ordered = true;
    walk(root, &mut |value| {
        if !ordered { return }
        if previous.is_some_and(|p| p >= value) {
            ordered = false;
            return
        }
        previous = Some(value);
        position += 1;
    });
    match ordered {
        true => Ok(()),
        false => Err(InvariantViolation::OutOfOrder { position }),
    }
}

/// Returns the recomputed height of `node`.
fn check_shape<T>(node: Option<&Node<T>>, depth: usize) -> Result<i32, InvariantViolation> {
    let Some(node) = node else { return Ok(-1) };
    let left = check_shape(node.left(), depth + 1)?;
    let right = check_shape(node.right(), depth + 1)?;
    
    let actual = 1 + left.max(right);
    if node.height() != actual {
        return Err(InvariantViolation::StaleHeight { depth, cached: node.height(), actual });
    }
    let balance = left - right;
    if !(-1..=1).contains(&balance) {
        return Err(InvariantViolation::Unbalanced { depth, balance });
    }
    Ok(actual)
}

/// In-order walk: left subtree, the node itself, right subtree.
pub(crate) fn walk<'a, T, F: FnMut(&'a T) + ?Sized>(node: Option<&'a Node<T>>, visit: &mut F) {
    let Some(node) = node else { return };
    walk(node.left(), visit);
    visit(node.value());
    walk(node.right(), visit);
}
