// Host-side tests for timer bookkeeping used by teardown.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/model/mod.rs"]
mod model;

use model::*;
use std::rc::Rc;

#[test]
fn fired_timeout_hands_back_its_payload() {
    let mut book = TimerBook::new();
    let cb = Rc::new(());
    assert!(book.add_timeout(7, cb.clone()).is_ok());
    assert_eq!(book.pending(), 1);

    let spent = book.fired(7);
    assert!(spent.is_some());
    drop(spent);
    assert_eq!(Rc::strong_count(&cb), 1);
    assert_eq!(book.pending(), 0);
    assert!(book.fired(7).is_none());
}

#[test]
fn close_releases_cancelled_callbacks() {
    let mut book = TimerBook::new();
    let cb = Rc::new(());
    for handle in 1..=5 {
        assert!(book.add_timeout(handle, cb.clone()).is_ok());
    }
    assert!(book.add_interval(99, cb.clone()).is_ok());
    assert_eq!(Rc::strong_count(&cb), 7);

    let closed = book.close();
    let mut handles: Vec<i32> = closed.timeouts.iter().map(|(h, _)| *h).collect();
    handles.sort_unstable();
    assert_eq!(handles, vec![1, 2, 3, 4, 5]);
    assert_eq!(closed.intervals.len(), 1);
    assert_eq!(closed.intervals[0].0, 99);

    drop(closed);
    assert_eq!(Rc::strong_count(&cb), 1, "every cancelled callback freed");
    assert_eq!(book.pending(), 0);
}

#[test]
fn closed_book_refuses_new_timers() {
    let mut book = TimerBook::new();
    assert!(!book.is_closed());
    let _ = book.close();
    assert!(book.is_closed());

    let cb = Rc::new(());
    let refused = book.add_timeout(1, cb.clone());
    assert!(refused.is_err());
    assert!(book.add_interval(2, cb.clone()).is_err());
    drop(refused);
    assert_eq!(Rc::strong_count(&cb), 1);
    assert_eq!(book.pending(), 0);
}

#[test]
fn nothing_is_attached_after_close() {
    // callers add a node only once its removal timer is accepted
    let mut book: TimerBook<&str> = TimerBook::new();
    let mut attached = Vec::new();
    for (i, node) in ["a", "b", "c"].into_iter().enumerate() {
        if i == 2 {
            let _ = book.close();
        }
        if book.add_timeout(i as i32, node).is_ok() {
            attached.push(node);
        }
    }
    assert_eq!(attached, vec!["a", "b"]);
    assert!(book.close().timeouts.is_empty(), "second close is empty");
}
