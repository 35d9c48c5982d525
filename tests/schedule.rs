//! Tests for the deferred task queue.

use std::cell::RefCell;
use std::rc::Rc;

use purlin::schedule::TaskQueue;

#[test]
fn test_deferred_task_runs_once() {
    let queue = TaskQueue::new();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    queue.defer(move || *sink.borrow_mut() += 1);

    queue.run_pending();
    queue.run_pending();
    assert_eq!(*count.borrow(), 1);
    assert!(queue.is_empty());
}

#[test]
fn test_canceled_task_is_skipped() {
    let queue = TaskQueue::new();
    let ran = Rc::new(RefCell::new(false));
    let sink = Rc::clone(&ran);
    let handle = queue.defer(move || *sink.borrow_mut() = true);

    handle.cancel();
    assert!(handle.is_canceled());
    queue.run_pending();
    assert!(!*ran.borrow());
}

#[test]
fn test_cancel_all_drops_everything() {
    let queue = TaskQueue::new();
    let count = Rc::new(RefCell::new(0));
    for _ in 0..3 {
        let sink = Rc::clone(&count);
        queue.defer(move || *sink.borrow_mut() += 1);
    }
    queue.cancel_all();
    assert!(queue.is_empty());
    queue.run_pending();
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_task_scheduled_during_drain_waits_for_next_drain() {
    let queue = TaskQueue::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let outer_log = Rc::clone(&log);
    let requeue = queue.clone();
    queue.defer(move || {
        outer_log.borrow_mut().push("first");
        let inner_log = Rc::clone(&outer_log);
        requeue.defer(move || inner_log.borrow_mut().push("second"));
    });

    queue.run_pending();
    assert_eq!(*log.borrow(), vec!["first"]);
    queue.run_pending();
    assert_eq!(*log.borrow(), vec!["first", "second"]);
}

#[test]
fn test_drain_preserves_order() {
    let queue = TaskQueue::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for i in 0..3 {
        let sink = Rc::clone(&log);
        queue.defer(move || sink.borrow_mut().push(i));
    }
    queue.run_pending();
    assert_eq!(*log.borrow(), vec![0, 1, 2]);
}
