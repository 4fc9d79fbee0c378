use std::fmt;

use log::debug;

use crate::node::Node;

type Link<T> = Box<Node<T>>;

/// Which child a value descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// The four imbalance shapes, named by the direction of the two heaviest nested subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// single right rotation
    LeftLeft,
    /// right rotation at the right child, then left rotation
    RightLeft,
    /// single left rotation
    RightRight,
    /// left rotation at the left child, then right rotation
    LeftRight,
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Rotation::LeftLeft => "LL",
            Rotation::RightLeft => "RL",
            Rotation::RightRight => "RR",
            Rotation::LeftRight => "LR",
        })
    }
}

/// The mutation during which a rebalance happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Insert,
    Delete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Insert => "insert",
            Phase::Delete => "delete",
        })
    }
}

/// Hook invoked once for every rebalance a tree performs.
pub trait RebalanceObserver {
    fn on_rebalance(&mut self, case: Rotation, phase: Phase);
}

/// Reports rebalances through the `log` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogRebalances;

impl RebalanceObserver for LogRebalances {
    fn on_rebalance(&mut self, case: Rotation, phase: Phase) {
        debug!("{case} rotation during {phase}");
    }
}

impl<F: FnMut(Rotation, Phase)> RebalanceObserver for F {
    fn on_rebalance(&mut self, case: Rotation, phase: Phase) {
        self(case, phase)
    }
}

/// Rotates right at `node`, returning the new subtree root (`node`'s old left child).
///
/// A node without a left child is returned unchanged.
pub(crate) fn rotate_right<T>(mut node: Link<T>) -> Link<T> {
    let Some(mut pivot) = node.left.take() else { return node };
    node.left = pivot.right.take();
    // `node` is now below `pivot`, so its height has to be fixed first
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Mirror of [`rotate_right`].
pub(crate) fn rotate_left<T>(mut node: Link<T>) -> Link<T> {
    let Some(mut pivot) = node.right.take() else { return node };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

fn double_right<T>(mut node: Link<T>) -> Link<T> {
    node.left = node.left.take().map(rotate_left);
    rotate_right(node)
}

fn double_left<T>(mut node: Link<T>) -> Link<T> {
    node.right = node.right.take().map(rotate_right);
    rotate_left(node)
}

fn apply<T>(node: Link<T>, case: Rotation) -> Link<T> {
    match case {
        Rotation::LeftLeft => rotate_right(node),
        Rotation::RightLeft => double_left(node),
        Rotation::RightRight => rotate_left(node),
        Rotation::LeftRight => double_right(node),
    }
}

/// Restores balance at `node` after an insertion below it.
///
/// `landed` is the side of the heavy child the new value descended into. Heights of
/// `node` must already be current.
pub(crate) fn settle_insertion<T, O: RebalanceObserver>(
    node: Link<T>,
    landed: Option<Side>,
    observer: &mut O,
) -> Link<T> {
    let balance = node.balance();
    let case = match landed {
        Some(Side::Left) if balance > 1 => Rotation::LeftLeft,
        Some(Side::Left) if balance < -1 => Rotation::RightLeft,
        Some(Side::Right) if balance < -1 => Rotation::RightRight,
        Some(Side::Right) if balance > 1 => Rotation::LeftRight,
        _ => return node,
    };
    observer.on_rebalance(case, Phase::Insert);
    apply(node, case)
}

/// Restores balance at `node` after a deletion below it, choosing the rotation from the
/// surviving heavy child's own balance.
pub(crate) fn settle_deletion<T, O: RebalanceObserver>(node: Link<T>, observer: &mut O) -> Link<T> {
    let balance = node.balance();
    let case = if balance > 1 {
        match node.left() {
            Some(left) if left.balance() < 0 => Rotation::LeftRight,
            _ => Rotation::LeftLeft,
        }
    } else if balance < -1 {
        match node.right() {
            Some(right) if right.balance() > 0 => Rotation::RightLeft,
            _ => Rotation::RightRight,
        }
    } else {
        return node;
    };
    observer.on_rebalance(case, Phase::Delete);
    apply(node, case)
}
