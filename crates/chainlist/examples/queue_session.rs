//! chainlist Queue Examples
//!
//! This example demonstrates the FIFO adapter:
//! - Enqueue/dequeue discipline
//! - Front and rear inspection
//! - Seeding through the fluent builder

use chainlist::prelude::*;

fn main() -> Result<(), ChainError> {
    println!("{}", "=".repeat(80));
    println!("chainlist Queue Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_fifo_discipline()?;
    example_2_builder_seeding()?;

    Ok(())
}

/// Example 1: FIFO Discipline
/// Values leave in arrival order while the rear tracks the newest
fn example_1_fifo_discipline() -> Result<(), ChainError> {
    println!("Example 1: FIFO Discipline");
    println!("{}", "-".repeat(80));

    let mut queue = Queue::new();
    queue.enqueue(10);
    queue.enqueue(20);
    queue.enqueue(30);

    println!("Front:    {:?}", queue.peek());
    println!("Rear:     {:?}", queue.rear());
    println!("Contents: {:?} (front first)", queue.to_vec());

    while let Some(value) = queue.dequeue() {
        println!("Dequeued: {value}");
    }
    println!("Empty:    {}", queue.is_empty());

    println!();
    Ok(())
}

/// Example 2: Builder Seeding
/// The first seed value stands at the front
fn example_2_builder_seeding() -> Result<(), ChainError> {
    println!("Example 2: Builder Seeding");
    println!("{}", "-".repeat(80));

    let mut queue = Chain::new().seed(vec![1, 2, 3]).shape(Fifo).build()?;
    println!("Seeded:   {:?}", queue.to_vec());

    queue.enqueue(4);
    println!("Enqueued 4: rear is {:?}", queue.rear());

    println!();
    Ok(())
}
