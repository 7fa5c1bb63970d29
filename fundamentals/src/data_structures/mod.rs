pub mod bst;
pub mod linked_list;
pub mod node;
pub mod queue;
pub mod stack;

pub use bst::BinarySearchTree;
pub use linked_list::{CursorMut, LinkedList};
pub use node::{ListNode, TreeNode};
pub use queue::Queue;
pub use stack::Stack;
