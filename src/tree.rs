use std::cmp::Ordering;

use log::trace;

use crate::invariants::{self, InvariantViolation};
use crate::node::{self, Node};
use crate::rebalance::{settle_deletion, settle_insertion, LogRebalances, RebalanceObserver, Side};

type Link<T> = Box<Node<T>>;

/// An ordered set of values.
pub trait Tree<T> {
    /// Adds `value`. Inserting a value that is already present does nothing.
    fn insert(&mut self, value: T);
    
    /// Removes `value`. Deleting a value that is not present does nothing.
    fn delete(&mut self, value: &T);
    
    /// Visits every value in ascending order.
    fn traverse(&self, visit: &mut dyn FnMut(&T));
}

/// Self-balancing binary search tree.
///
/// After every insert or delete, the heights of the two subtrees of any node differ by at
/// most one. Every rotation performed to keep it that way is reported to the observer `O`.
///
/// Not meant for concurrent use: wrap the whole tree in a single lock if it has to be shared.
pub struct AvlTree<T, O = LogRebalances> {
    root: Option<Link<T>>,
    observer: O,
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self::with_observer(LogRebalances)
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord, O: RebalanceObserver> AvlTree<T, O> {
    pub fn with_observer(observer: O) -> Self {
        Self { root: None, observer }
    }
    
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
    
    pub fn observer(&self) -> &O {
        &self.observer
    }
    
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    
    /// Height of the root, or -1 for an empty tree.
    pub fn height(&self) -> i32 {
        node::height(self.root())
    }
    
    /// All values in ascending order.
    pub fn values(&self) -> Vec<&T> {
        let mut values = Vec::new();
        invariants::walk(self.root(), &mut |value| values.push(value));
        values
    }
    
    /// Verifies search order, cached heights and balance of every node.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        invariants::check(self.root())
    }
}

impl<T: Ord, O: RebalanceObserver> Tree<T> for AvlTree<T, O> {
    fn insert(&mut self, value: T) {
        let (root, _) = insert_node(self.root.take(), value, &mut self.observer);
        self.root = Some(root);
    }
    
    fn delete(&mut self, value: &T) {
        self.root = delete_node(self.root.take(), value, &mut self.observer);
    }
    
    fn traverse(&self, visit: &mut dyn FnMut(&T)) {
        invariants::walk(self.root(), visit);
    }
}

/// Inserts `value` below `node` and returns the new subtree root, along with the side of
/// the old root the value descended into (`None` if it became the root or was a duplicate).
fn insert_node<T: Ord, O: RebalanceObserver>(
    node: Option<Link<T>>,
    value: T,
    observer: &mut O,
) -> (Link<T>, Option<Side>) {
    let Some(mut node) = node else {
        trace!("inserting new leaf");
        return (Node::leaf(value), None);
    };
    
    let (descended, landed) = match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, landed) = insert_node(node.left.take(), value, observer);
            node.left = Some(left);
            (Side::Left, landed)
        }
        Ordering::Greater => {
            let (right, landed) = insert_node(node.right.take(), value, observer);
            node.right = Some(right);
            (Side::Right, landed)
        }
        Ordering::Equal => {
            trace!("ignoring duplicate value");
            return (node, None);
        }
    };
    
    node.update_height();
    (settle_insertion(node, landed, observer), Some(descended))
}

fn delete_node<T: Ord, O: RebalanceObserver>(
    node: Option<Link<T>>,
    value: &T,
    observer: &mut O,
) -> Option<Link<T>> {
    let Some(mut node) = node else {
        trace!("value to delete is not present");
        return None;
    };
    
    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete_node(node.left.take(), value, observer),
        Ordering::Greater => node.right = delete_node(node.right.take(), value, observer),
        Ordering::Equal => return remove(node, observer),
    }
    
    node.update_height();
    Some(settle_deletion(node, observer))
}

/// Unlinks `node` from the tree, returning whatever replaces it.
fn remove<T, O: RebalanceObserver>(mut node: Link<T>, observer: &mut O) -> Option<Link<T>> {
    trace!("removing node of height {}", node.height);
    if node.is_leaf() {
        return None;
    }
    match (node.left.take(), node.right.take()) {
        // in a balanced tree a missing child means the other one is a leaf
        (None, right) => right,
        (left, None) => left,
        (Some(left), Some(right)) => {
            let (left, predecessor) = take_max(left, observer);
            node.value = predecessor;
            node.left = left;
            node.right = Some(right);
            node.update_height();
            Some(settle_deletion(node, observer))
        }
    }
}

/// Detaches the rightmost node under `node`, returning the rebalanced remainder and the
/// detached value.
fn take_max<T, O: RebalanceObserver>(mut node: Link<T>, observer: &mut O) -> (Option<Link<T>>, T) {
    match node.right.take() {
        None => {
            let Node { value, left, .. } = *node;
            (left, value)
        }
        Some(right) => {
            let (right, max) = take_max(right, observer);
            node.right = right;
            node.update_height();
            (Some(settle_deletion(node, observer)), max)
        }
    }
}
