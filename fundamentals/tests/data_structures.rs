use fundamentals::data_structures::{BinarySearchTree, LinkedList, Queue, Stack};

#[test]
fn stack_pops_last_pushed_first() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.size(), 3);
    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.peek(), Some(&2));
    assert_eq!(stack.size(), 2);
}

#[test]
fn empty_stack_answers_with_sentinel() {
    let mut stack: Stack<i32> = Stack::default();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.size(), 0);
}

#[test]
fn queue_dequeues_first_enqueued() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);
    assert_eq!(queue.size(), 3);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.size(), 2);
}

#[test]
fn queue_keeps_fifo_order_across_interleaving() {
    let mut queue = Queue::new();
    let mut seen = Vec::new();
    for round in 0..100 {
        queue.enqueue(round);
        queue.enqueue(round + 1000);
        seen.extend(queue.dequeue());
    }
    seen.extend(std::iter::from_fn(|| queue.dequeue()));
    let mut expected: Vec<i32> = Vec::new();
    for round in 0..100 {
        expected.push(round);
        expected.push(round + 1000);
    }
    assert_eq!(seen, expected);
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn linked_list_search_and_delete() {
    let mut list = LinkedList::new();
    list.append(1);
    list.append(2);
    list.append(3);
    assert!(list.search(&2));
    assert_eq!(list.delete_node(&2), Some(2));
    assert!(!list.search(&2));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn linked_list_delete_missing_key_is_noop() {
    let mut list: LinkedList<i32> = (1..=3).collect();
    assert_eq!(list.delete_node(&42), None);
    assert_eq!(list.len(), 3);

    let mut empty: LinkedList<i32> = LinkedList::new();
    assert_eq!(empty.delete_node(&1), None);
    assert!(empty.is_empty());
}

#[test]
fn linked_list_delete_removes_only_first_match() {
    let mut list: LinkedList<i32> = [4, 7, 4, 7].into_iter().collect();
    assert_eq!(list.delete_node(&7), Some(7));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 4, 7]);
}

#[test]
fn linked_list_insert_splices_after_named_node() {
    let mut list: LinkedList<&str> = ["a", "c"].into_iter().collect();
    assert!(list.insert_after(&"a", "b"));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c"]);

    assert!(list.insert_after(&"c", "d"));
    list.append("e");
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(list.len(), 5);
}

#[test]
fn linked_list_insert_with_absent_reference_is_noop() {
    let mut list: LinkedList<i32> = (1..=3).collect();
    assert!(!list.insert_after(&99, 9));
    assert!(list.cursor_mut(&99).is_none());
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn linked_list_insert_after_deleting_earlier_node_targets_same_value() {
    let mut list: LinkedList<i32> = (1..=3).collect();
    list.delete_node(&1);
    let mut cursor = list.cursor_mut(&2).expect("2 survives the delete");
    cursor.insert_after(9);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 9, 3]);
}

#[test]
fn linked_list_nodes_are_walkable() {
    let list: LinkedList<i32> = (1..=3).collect();
    let head = list.head().expect("list is non-empty");
    assert_eq!(head.data(), &1);
    let second = head.next().expect("second node");
    assert_eq!(second.data(), &2);
    assert!(second.next().and_then(|n| n.next()).is_none());
}

#[test]
fn long_linked_list_drops_without_overflow() {
    let mut list = LinkedList::new();
    for i in 0..200_000 {
        list.push_front(i);
    }
    assert_eq!(list.len(), 200_000);
    assert_eq!(list.pop_front(), Some(199_999));
    drop(list);
}

#[test]
fn bst_inorder_is_ascending() {
    let mut tree = BinarySearchTree::new();
    for v in [5, 3, 7, 2, 4, 6, 8] {
        tree.insert(v);
    }
    assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6, 7, 8]);
    assert!(tree.find(&4).is_some());
    assert!(tree.find(&10).is_none());
    assert_eq!(tree.find(&7).map(|n| *n.data()), Some(7));
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), 3);
}

#[test]
fn bst_inorder_restarts_on_each_call() {
    let tree: BinarySearchTree<i32> = [2, 1, 3].into_iter().collect();
    let mut first = tree.inorder();
    assert_eq!(first.next(), Some(&1));
    let second: Vec<i32> = tree.inorder().copied().collect();
    assert_eq!(second, vec![1, 2, 3]);
    assert_eq!(first.next(), Some(&2));
}

#[test]
fn bst_keeps_duplicates() {
    let tree: BinarySearchTree<i32> = [3, 1, 3, 2, 3].into_iter().collect();
    assert_eq!((&tree).into_iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 3, 3]);
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.min(), Some(&1));
    assert_eq!(tree.max(), Some(&3));
}

#[test]
fn bst_find_returns_node_with_children() {
    let tree: BinarySearchTree<i32> = [5, 3, 7, 2, 4].into_iter().collect();
    let node = tree.find(&3).expect("3 was inserted");
    assert_eq!(node.left().map(|n| *n.data()), Some(2));
    assert_eq!(node.right().map(|n| *n.data()), Some(4));
    assert!(!node.is_leaf());
}

#[test]
fn degenerate_bst_stays_iterative() {
    let tree: BinarySearchTree<u32> = (0..10_000).collect();
    assert_eq!(tree.height(), 10_000);
    assert!(tree.contains(&9_999));
    assert!(!tree.contains(&10_000));
    assert!(tree.inorder().copied().eq(0..10_000));
    drop(tree);
}
