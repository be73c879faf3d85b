//! Container walkthroughs
//!
//! Exercises each container with a short, fixed script and prints every step
//! through the containers' `Display` output.

use anyhow::Result;
use ark_collections::{
    reverse_compare, Deque, HashMap, Heap, LinkedList, Queue, Set, Stack, Tuning, Value,
};
use clap::ValueEnum;
use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::debug;

/// Which walkthrough to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DemoTarget {
    Stack,
    Queue,
    Deque,
    Set,
    Map,
    List,
    Heap,
    All,
}

/// Run the walkthrough for `target` on stdout
pub fn run(target: DemoTarget, tuning: Tuning) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_walkthrough(&mut out, target, tuning)?;
    out.flush()?;
    Ok(())
}

pub fn write_walkthrough<W: Write>(
    out: &mut W,
    target: DemoTarget,
    tuning: Tuning,
) -> io::Result<()> {
    debug!(
        ?target,
        initial_capacity = tuning.initial_capacity(),
        max_load_factor = tuning.max_load_factor(),
        "starting walkthrough"
    );

    let steps: &[(DemoTarget, &str, Walkthrough<W>)] = &[
        (DemoTarget::Stack, "stack", stack),
        (DemoTarget::Queue, "queue", queue),
        (DemoTarget::Deque, "deque", deque),
        (DemoTarget::Set, "set", set),
        (DemoTarget::Map, "hashmap", map),
        (DemoTarget::List, "linkedlist", list),
        (DemoTarget::Heap, "heap", heap),
    ];

    let mut final_sizes = HashMap::with_tuning(tuning);
    for &(kind, name, walk) in steps {
        if target == DemoTarget::All || target == kind {
            let size = walk(&mut *out, tuning)?;
            final_sizes.put(name, size);
        }
    }

    if target == DemoTarget::All {
        writeln!(out)?;
        heading(out, "Summary")?;
        writeln!(out, "Final sizes: {}", final_sizes)?;
    }
    Ok(())
}

/// A walkthrough prints its steps and returns the container's final size
type Walkthrough<W> = fn(&mut W, Tuning) -> io::Result<usize>;

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("--- {} ---", title).bold())
}

/// `none` for an empty result
fn show<T: Display>(item: Option<T>) -> String {
    match item {
        Some(item) => item.to_string(),
        None => "none".to_string(),
    }
}

fn stack<W: Write>(out: &mut W, tuning: Tuning) -> io::Result<usize> {
    heading(out, "Stack")?;
    let mut stack = Stack::with_tuning(tuning);
    writeln!(out, "Empty: {}", stack.is_empty())?;

    for item in [Value::from(10), Value::from(20), Value::from(30), Value::from("hello")] {
        stack.push(item);
    }
    writeln!(out, "After pushes: {}", stack)?;
    writeln!(out, "Size: {}", stack.size())?;
    writeln!(out, "Peek: {}", show(stack.peek()))?;
    writeln!(out, "Popped: {}", show(stack.pop()))?;
    writeln!(out, "Size after pop: {}", stack.size())?;
    Ok(stack.size())
}

fn queue<W: Write>(out: &mut W, tuning: Tuning) -> io::Result<usize> {
    heading(out, "Queue")?;
    let mut queue = Queue::with_tuning(tuning);
    writeln!(out, "Empty: {}", queue.is_empty())?;

    for item in [
        Value::from("first"),
        Value::from("second"),
        Value::from("third"),
        Value::from(100),
    ] {
        queue.enqueue(item);
    }
    writeln!(out, "After enqueues: {}", queue)?;
    writeln!(out, "Size: {}", queue.size())?;
    writeln!(out, "Front: {}", show(queue.front()))?;
    writeln!(out, "Dequeued: {}", show(queue.dequeue()))?;
    writeln!(out, "Size after dequeue: {}", queue.size())?;
    Ok(queue.size())
}

fn deque<W: Write>(out: &mut W, tuning: Tuning) -> io::Result<usize> {
    heading(out, "Deque")?;
    let mut deque = Deque::with_tuning(tuning);
    writeln!(out, "Empty: {}", deque.is_empty())?;

    deque.push_front(Value::from(1));
    deque.push_back(Value::from(2));
    deque.push_front(Value::from(0));
    deque.push_back(Value::from("middle"));
    writeln!(out, "After pushes: {}", deque)?;
    writeln!(out, "Size: {}", deque.size())?;
    writeln!(out, "Front: {}, Back: {}", show(deque.front()), show(deque.back()))?;

    let front = deque.pop_front();
    let back = deque.pop_back();
    writeln!(out, "Popped front: {}, Popped back: {}", show(front), show(back))?;
    writeln!(out, "Remaining: {}", deque)?;
    Ok(deque.size())
}

fn set<W: Write>(out: &mut W, tuning: Tuning) -> io::Result<usize> {
    heading(out, "Set")?;
    let mut set = Set::with_tuning(tuning);

    for item in [Value::from(5), Value::from(10), Value::from(5), Value::from("apple")] {
        let added = set.add(item.clone());
        writeln!(out, "Add {}: {}", item, if added { "added" } else { "already present" })?;
    }
    writeln!(out, "Size: {}", set.size())?;
    writeln!(out, "Contains 5: {}", set.contains(&Value::from(5)))?;
    writeln!(out, "Contains 15: {}", set.contains(&Value::from(15)))?;

    set.remove(&Value::from(5));
    writeln!(out, "Size after removing 5: {}", set.size())?;
    Ok(set.size())
}

fn map<W: Write>(out: &mut W, tuning: Tuning) -> io::Result<usize> {
    heading(out, "HashMap")?;
    let mut map = HashMap::with_tuning(tuning);

    map.put(Value::from("name"), Value::from("John"));
    map.put(Value::from("age"), Value::from(30));
    map.put(Value::from("city"), Value::from("NYC"));
    writeln!(out, "Size: {}", map.size())?;
    writeln!(out, "Name: {}", show(map.get(&Value::from("name"))))?;
    writeln!(out, "Contains key 'age': {}", map.contains_key(&Value::from("age")))?;

    let previous = map.put(Value::from("age"), Value::from(31));
    writeln!(out, "Updated age (was {}): size stays {}", show(previous), map.size())?;

    map.remove(&Value::from("city"));
    writeln!(out, "Size after removing 'city': {}", map.size())?;
    Ok(map.size())
}

fn list<W: Write>(out: &mut W, tuning: Tuning) -> io::Result<usize> {
    heading(out, "LinkedList")?;
    let mut list = LinkedList::with_tuning(tuning);

    list.add_first(Value::from("first"));
    list.add_last(Value::from("second"));
    list.add_last(Value::from("third"));
    writeln!(out, "After adds: {}", list)?;
    writeln!(out, "Size: {}", list.size())?;

    if list.add_at(1, Value::from("inserted")).is_ok() {
        writeln!(out, "After add_at(1): {}", list)?;
    }
    writeln!(out, "Index 2: {}", show(list.get(2)))?;
    writeln!(out, "Removed first: {}", show(list.remove_first()))?;
    writeln!(out, "Size after removal: {}", list.size())?;
    Ok(list.size())
}

fn heap<W: Write>(out: &mut W, tuning: Tuning) -> io::Result<usize> {
    heading(out, "Heap")?;
    let mut min = Heap::with_tuning(tuning);
    let mut max = Heap::with_comparator_and_tuning(reverse_compare, tuning);
    for n in [5, 3, 8, 1, 9, 2] {
        min.push(Value::from(n));
        max.push(Value::from(n));
    }
    writeln!(out, "Min-heap: {}", min)?;
    writeln!(out, "Peek min: {}", show(min.peek()))?;
    writeln!(out, "Popped min: {}", show(min.pop()))?;
    writeln!(out, "Popped max: {}", show(max.pop()))?;
    writeln!(out, "Size after pop: {}", min.size())?;
    Ok(min.size())
}
