//! Tests for the FIFO queue adapter.
//!
//! These tests verify the queue's two-ended discipline over the list
//! engine, including:
//! - FIFO ordering of enqueue/dequeue
//! - Front and rear inspection
//! - Empty-structure safety
//! - Seeding and export order
//!
//! ## Test Organization
//!
//! 1. **Ordering** - enqueue/dequeue discipline
//! 2. **Inspection** - peek, rear, len, is_empty, to_vec
//! 3. **Lifecycle** - seeding, clear

use chainlist::prelude::*;

// ============================================================================
// Ordering Tests
// ============================================================================

/// Test FIFO order with rear tracking.
///
/// Verifies that dequeues return values in enqueue order while the rear
/// tracks the latest enqueue.
#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    queue.enqueue(10);
    queue.enqueue(20);
    queue.enqueue(30);

    assert_eq!(queue.dequeue(), Some(10));
    assert_eq!(queue.dequeue(), Some(20));
    assert_eq!(queue.rear(), Some(&30));
    assert_eq!(queue.dequeue(), Some(30));
    assert_eq!(queue.dequeue(), None);
}

/// Test interleaved enqueue and dequeue.
///
/// Verifies that the front always tracks the oldest surviving value.
#[test]
fn test_interleaved_enqueue_dequeue() {
    let mut queue = Queue::new();
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue(), Some(1));
    queue.enqueue(3);
    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.dequeue(), Some(2));
    assert_eq!(queue.dequeue(), Some(3));
    assert!(queue.is_empty());
}

// ============================================================================
// Inspection Tests
// ============================================================================

/// Test front and rear peeks.
///
/// Verifies that peek and rear borrow the respective ends without removal.
#[test]
fn test_peek_and_rear() {
    let mut queue = Queue::new();
    queue.enqueue(5);
    assert_eq!(queue.peek(), Some(&5));
    assert_eq!(queue.rear(), Some(&5));

    queue.enqueue(6);
    assert_eq!(queue.peek(), Some(&5));
    assert_eq!(queue.rear(), Some(&6));
    assert_eq!(queue.len(), 2);
}

/// Test export order.
///
/// Verifies that to_vec lists values front to back.
#[test]
fn test_to_vec_front_first() {
    let mut queue = Queue::new();
    queue.enqueue(10);
    queue.enqueue(20);
    queue.enqueue(30);
    assert_eq!(queue.to_vec(), vec![10, 20, 30]);
}

/// Test empty-structure safety.
///
/// Verifies that dequeue, peek, and rear on an empty queue return `None`
/// without raising a fault.
#[test]
fn test_empty_safety() {
    let mut queue: Queue<i32> = Queue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.rear(), None);
}

// ============================================================================
// Lifecycle Tests
// ============================================================================

/// Test seeding.
///
/// Verifies that the first seed value stands at the front.
#[test]
fn test_from_values() {
    let mut queue = Queue::from_values([10, 20, 30]);
    assert_eq!(queue.peek(), Some(&10));
    assert_eq!(queue.rear(), Some(&30));
    assert_eq!(queue.dequeue(), Some(10));
}

/// Test clear.
///
/// Verifies that clear swaps in a fresh empty list and the queue remains
/// usable.
#[test]
fn test_clear() {
    let mut queue = Queue::from_values([1, 2, 3]);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.rear(), None);

    queue.enqueue(4);
    assert_eq!(queue.peek(), Some(&4));
    assert_eq!(queue.rear(), Some(&4));
}
