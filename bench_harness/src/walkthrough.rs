//! Scripted tour of the fundamentals structures. Lines are returned rather
//! than printed so the tour can be checked.

use fundamentals::data_structures::{BinarySearchTree, LinkedList, Queue, Stack};

pub fn structures() -> Vec<String> {
    let mut lines = Vec::new();

    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    lines.push(format!("Stack size: {}", stack.size()));
    lines.push(format!("Popped from stack: {}", show(stack.pop())));
    lines.push(format!("Stack top element: {}", show(stack.peek().copied())));

    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);
    lines.push(format!("Queue size: {}", queue.size()));
    lines.push(format!("Dequeued from queue: {}", show(queue.dequeue())));

    let mut list = LinkedList::new();
    list.append(1);
    list.append(2);
    list.append(3);
    lines.push(format!("Linked List search 2: {}", list.search(&2)));
    list.delete_node(&2);
    lines.push(format!("Linked List search 2 after deletion: {}", list.search(&2)));

    let mut tree = BinarySearchTree::new();
    for value in [5, 3, 7, 2, 4, 6, 8] {
        tree.insert(value);
    }
    let inorder: Vec<String> = tree.inorder().map(|v| v.to_string()).collect();
    lines.push(format!("BST Inorder Traversal: {}", inorder.join(" ")));
    lines.push(format!("BST find 4: {}", tree.find(&4).is_some()));
    lines.push(format!("BST find 10: {}", tree.find(&10).is_some()));

    lines
}

fn show(value: Option<i32>) -> String {
    value.map_or_else(|| "empty".to_string(), |v| v.to_string())
}
