use crate::arena::{Arena, Handle};
use crate::error::{Error, Result};
use std::fmt;

struct Node<T> {
    value: T,
    parent: Option<Handle>,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<Handle>) -> Self {
        Node {
            value,
            parent,
            left: None,
            right: None,
        }
    }
}

/// A binary tree whose nodes live in an `Arena` and are linked to their parent and children by
/// `Handle`s.
///
/// Every node is addressed by the handle returned when it was added. Methods that take a handle
/// panic if the handle does not refer to a node of this tree, and a handle must not be used after
/// its node is removed. Structural mistakes, such as adding a second left child, return an
/// `Error` and leave the tree unchanged.
///
/// # Examples
///
/// ```
/// use keyed_collections::tree::LinkedBinaryTree;
///
/// let mut tree = LinkedBinaryTree::new();
/// let root = tree.add_root('a').unwrap();
/// let left = tree.add_left(root, 'b').unwrap();
/// let right = tree.add_right(root, 'c').unwrap();
///
/// assert_eq!(tree.parent(left), Some(root));
/// assert_eq!(tree.num_children(root), 2);
/// assert!(tree.is_external(right));
/// assert_eq!(tree.height(), 1);
///
/// assert_eq!(tree.replace(left, 'd'), 'b');
/// assert_eq!(tree.remove(left), Ok('d'));
/// assert_eq!(tree.len(), 2);
/// ```
pub struct LinkedBinaryTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Handle>,
}

impl<T> LinkedBinaryTree<T> {
    /// Constructs a new, empty `LinkedBinaryTree<T>`.
    pub fn new() -> Self {
        LinkedBinaryTree {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Constructs a new `LinkedBinaryTree<T>` holding a single root node.
    pub fn with_root(value: T) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.allocate(Node::new(value, None));
        LinkedBinaryTree {
            nodes,
            root: Some(root),
        }
    }

    /// Adds a root to an empty tree and returns its handle. Returns `Error::RootExists` if the
    /// tree is not empty.
    pub fn add_root(&mut self, value: T) -> Result<Handle> {
        if self.root.is_some() {
            return Err(Error::RootExists);
        }
        let root = self.nodes.allocate(Node::new(value, None));
        self.root = Some(root);
        Ok(root)
    }

    /// Adds a left child to `parent` and returns its handle. Returns `Error::ChildExists` if
    /// `parent` already has a left child.
    pub fn add_left(&mut self, parent: Handle, value: T) -> Result<Handle> {
        if self.nodes[parent].left.is_some() {
            return Err(Error::ChildExists);
        }
        let child = self.nodes.allocate(Node::new(value, Some(parent)));
        self.nodes[parent].left = Some(child);
        Ok(child)
    }

    /// Adds a right child to `parent` and returns its handle. Returns `Error::ChildExists` if
    /// `parent` already has a right child.
    pub fn add_right(&mut self, parent: Handle, value: T) -> Result<Handle> {
        if self.nodes[parent].right.is_some() {
            return Err(Error::ChildExists);
        }
        let child = self.nodes.allocate(Node::new(value, Some(parent)));
        self.nodes[parent].right = Some(child);
        Ok(child)
    }

    /// Replaces the value at `handle` and returns the previous value.
    pub fn replace(&mut self, handle: Handle, value: T) -> T {
        std::mem::replace(&mut self.nodes[handle].value, value)
    }

    /// Removes the node at `handle` and returns its value. A node with a single child is replaced
    /// by that child. Returns `Error::TwoChildren` if the node has two children.
    pub fn remove(&mut self, handle: Handle) -> Result<T> {
        let (parent, left, right) = {
            let node = &self.nodes[handle];
            (node.parent, node.left, node.right)
        };
        if left.is_some() && right.is_some() {
            return Err(Error::TwoChildren);
        }

        let child = left.or(right);
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }
        match parent {
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                if parent.left == Some(handle) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            },
            None => self.root = child,
        }
        Ok(self.nodes.free(handle).value)
    }

    pub fn root(&self) -> Option<Handle> {
        self.root
    }

    pub fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes[handle].parent
    }

    pub fn left_child(&self, handle: Handle) -> Option<Handle> {
        self.nodes[handle].left
    }

    pub fn right_child(&self, handle: Handle) -> Option<Handle> {
        self.nodes[handle].right
    }

    /// Returns a reference to the value at `handle`, or `None` if `handle` refers to no node.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.nodes.get(handle).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.nodes.get_mut(handle).map(|node| &mut node.value)
    }

    /// Returns the number of children of the node at `handle`: 0, 1 or 2.
    pub fn num_children(&self, handle: Handle) -> usize {
        let node = &self.nodes[handle];
        node.left.iter().count() + node.right.iter().count()
    }

    /// Returns `true` if the node at `handle` has at least one child.
    pub fn is_internal(&self, handle: Handle) -> bool {
        self.num_children(handle) > 0
    }

    /// Returns `true` if the node at `handle` has no children.
    pub fn is_external(&self, handle: Handle) -> bool {
        self.num_children(handle) == 0
    }

    pub fn is_root(&self, handle: Handle) -> bool {
        self.root == Some(handle)
    }

    /// Returns the number of ancestors of the node at `handle`.
    pub fn depth(&self, handle: Handle) -> usize {
        let mut depth = 0;
        let mut curr = self.nodes[handle].parent;
        while let Some(parent) = curr {
            depth += 1;
            curr = self.nodes[parent].parent;
        }
        depth
    }

    /// Returns the greatest number of ancestors of any node in the tree. Both an empty tree and a
    /// tree with a single node have height 0.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(Handle, usize)> = self.root.iter().map(|&root| (root, 0)).collect();
        while let Some((handle, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[handle];
            for &child in node.left.iter().chain(node.right.iter()) {
                stack.push((child, depth + 1));
            }
        }
        height
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Returns an iterator over the values of the tree in preorder.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }
}

impl<T> Default for LinkedBinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for LinkedBinaryTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// An iterator for `LinkedBinaryTree<T>`.
///
/// This iterator visits each node before its left subtree and its left subtree before its right
/// subtree, yielding immutable references to the values.
pub struct Iter<'a, T> {
    tree: &'a LinkedBinaryTree<T>,
    stack: Vec<Handle>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = &tree.nodes[self.stack.pop()?];
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.value)
    }
}
