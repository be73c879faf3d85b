//! Behavioral tests across every container

mod common;

use ark_collections::{
    CollectionError, Deque, HashMap, Heap, LinkedList, Queue, Set, Stack, Tuning, Value,
};
use common::{numbers, Colliding};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_stack_scenario() {
    let mut stack = Stack::new();
    for n in numbers(&[10.0, 20.0, 30.0]) {
        stack.push(n);
    }
    assert_eq!(stack.pop(), Some(Value::Number(30.0)));
    assert_eq!(stack.size(), 2);
}

#[test]
fn test_queue_scenario() {
    let mut queue = Queue::new();
    queue.enqueue(Value::from("first"));
    queue.enqueue(Value::from("second"));
    queue.enqueue(Value::from("third"));
    assert_eq!(queue.dequeue(), Some(Value::from("first")));
    assert_eq!(queue.front(), Some(&Value::from("second")));
}

#[test]
fn test_set_scenario() {
    let mut set = Set::new();
    for n in numbers(&[5.0, 10.0, 15.0]) {
        set.add(n);
    }
    set.add(Value::Number(5.0));
    assert_eq!(set.size(), 3);
}

#[test]
fn test_empty_containers_return_none() {
    assert_eq!(Stack::<Value>::new().pop(), None);
    assert_eq!(Queue::<Value>::new().dequeue(), None);
    assert_eq!(Deque::<Value>::new().pop_back(), None);
    assert_eq!(LinkedList::<Value>::new().remove_first(), None);
    assert_eq!(Heap::<Value>::new().pop(), None);
    assert_eq!(HashMap::<Value, Value>::new().get(&Value::Null), None);
    assert!(!Set::<Value>::new().remove(&Value::Null));
}

// ============================================================================
// Growth across the default capacity
// ============================================================================

#[rstest]
#[case(17)]
#[case(64)]
#[case(1000)]
fn test_growth_is_transparent(#[case] count: i32) {
    let mut stack = Stack::new();
    let mut queue = Queue::new();
    let mut deque = Deque::new();
    let mut heap = Heap::max();
    for i in 0..count {
        stack.push(i);
        queue.enqueue(i);
        deque.push_front(i);
        heap.push(i);
    }

    for i in (0..count).rev() {
        assert_eq!(stack.pop(), Some(i));
        assert_eq!(deque.pop_front(), Some(i));
        assert_eq!(heap.pop(), Some(i));
    }
    for i in 0..count {
        assert_eq!(queue.dequeue(), Some(i));
    }
}

#[rstest]
#[case(13)]
#[case(100)]
fn test_hash_containers_across_rehash(#[case] count: i32) {
    let mut set = Set::new();
    let mut map = HashMap::new();
    for i in 0..count {
        assert!(set.add(Value::from(i)));
        assert_eq!(map.put(Value::from(i), i * 2), None);
    }
    assert!(set.capacity() > 16);
    for i in 0..count {
        assert!(set.contains(&Value::from(i)));
        assert_eq!(map.get(&Value::from(i)), Some(&(i * 2)));
    }
}

// ============================================================================
// Collision chains
// ============================================================================

#[rstest]
#[case::head_of_chain(0)]
#[case::middle_of_chain(5)]
#[case::tail_of_chain(9)]
fn test_removal_never_strands_colliding_keys(#[case] victim: u32) {
    let mut map = HashMap::new();
    for id in 0..10 {
        map.put(Colliding(id), id);
    }

    assert_eq!(map.remove(&Colliding(victim)), Some(victim));
    assert_eq!(map.len(), 9);
    for id in (0..10).filter(|id| *id != victim) {
        assert_eq!(map.get(&Colliding(id)), Some(&id), "lost {}", id);
    }
    assert_eq!(map.get(&Colliding(victim)), None);
}

#[test]
fn test_repeated_churn_on_one_chain() {
    let mut set = Set::with_capacity(8);
    for round in 0..20u32 {
        set.add(Colliding(round));
        set.add(Colliding(round + 100));
        assert!(set.remove(&Colliding(round)));
    }
    assert_eq!(set.len(), 20);
    assert!((100..120).all(|id| set.contains(&Colliding(id))));
}

// ============================================================================
// Tuning
// ============================================================================

#[test]
fn test_tuned_containers_respect_capacity() {
    let tuning = Tuning::new(4, 0.5).unwrap();
    let mut set = Set::with_tuning(tuning);
    set.add(1);
    set.add(2);
    assert_eq!(set.capacity(), 4);
    set.add(3);
    assert_eq!(set.capacity(), 8);

    assert_eq!(Stack::<u8>::with_tuning(tuning).capacity(), 4);
    assert_eq!(Deque::<u8>::with_tuning(tuning).capacity(), 4);
}

#[rstest]
#[case(0, 0.5, CollectionError::InvalidCapacity(0))]
#[case(8, 0.0, CollectionError::InvalidLoadFactor(0.0))]
#[case(16, 1e-300, CollectionError::InvalidLoadFactor(1e-300))]
#[case(8, 1.5, CollectionError::InvalidLoadFactor(1.5))]
fn test_invalid_tuning(
    #[case] capacity: usize,
    #[case] load: f64,
    #[case] expected: CollectionError,
) {
    assert_eq!(Tuning::new(capacity, load), Err(expected));
}

#[test]
fn test_list_index_errors_report_length() {
    let mut list: LinkedList<i32> = (0..3).collect();
    let err = list.remove_at(7).unwrap_err();
    assert_eq!(err.to_string(), "Index 7 out of bounds for length 3");
}

// ============================================================================
// Handles
// ============================================================================

#[test]
fn test_handles_are_shared_not_owned() {
    let handle = Value::handle("file", 3);
    let mut stack = Stack::new();
    stack.push(handle.clone());
    drop(stack);
    assert_eq!(handle.to_string(), "<file #3>");

    let mut set = Set::new();
    set.add(Value::handle("file", 3));
    assert!(set.contains(&handle));
    assert!(!set.contains(&Value::handle("socket", 3)));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_display_sequences() {
    let stack: Stack<Value> = numbers(&[10.0, 20.0, 30.0]).into_iter().collect();
    insta::assert_snapshot!(stack.to_string(), @"Stack[10, 20, 30]");

    let queue: Queue<Value> = vec![Value::from("a"), Value::Null, Value::from(true)]
        .into_iter()
        .collect();
    insta::assert_snapshot!(queue.to_string(), @"Queue[a, null, true]");

    let mut deque = Deque::new();
    deque.push_back(2.5);
    deque.push_front(1.5);
    insta::assert_snapshot!(deque.to_string(), @"Deque[1.5, 2.5]");

    let list: LinkedList<&str> = vec!["x", "y"].into_iter().collect();
    insta::assert_snapshot!(list.to_string(), @"LinkedList[x, y]");
}

#[test]
fn test_display_heap_array_order() {
    let heap: Heap<i32> = vec![4, 1, 3, 2].into_iter().collect();
    insta::assert_snapshot!(heap.to_string(), @"Heap[1, 2, 3, 4]");
}

#[test]
fn test_display_single_entry_maps() {
    let mut set = Set::new();
    set.add(Value::from("only"));
    insta::assert_snapshot!(set.to_string(), @"Set{only}");

    let mut map = HashMap::new();
    map.put(Value::from("answer"), Value::from(42));
    insta::assert_snapshot!(map.to_string(), @"HashMap{answer: 42}");
}
