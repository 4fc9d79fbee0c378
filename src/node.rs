/// A vertex of an [`AvlTree`](crate::AvlTree).
///
/// Each node exclusively owns its children, so the structure is always a strict tree:
/// no parent pointers, no sharing.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) height: i32,
    pub(crate) left: Option<Box<Node<T>>>,
    pub(crate) right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    pub(crate) fn leaf(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            height: 0,
            left: None,
            right: None,
        })
    }
    
    pub fn value(&self) -> &T {
        &self.value
    }
    
    /// Cached height of the subtree rooted here. A leaf has height 0.
    pub fn height(&self) -> i32 {
        self.height
    }
    
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }
    
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
    
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    
    /// `height(left) - height(right)`
    pub fn balance(&self) -> i32 {
        height(self.left()) - height(self.right())
    }
    
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }
}

/// Height of a possibly absent subtree; an absent subtree has height -1.
pub fn height<T>(node: Option<&Node<T>>) -> i32 {
    node.map_or(-1, |n| n.height)
}
