//! A linked binary tree whose nodes are addressed by arena handles.

mod linked_binary_tree;

pub use self::linked_binary_tree::LinkedBinaryTree;
