//! chainlist Stack Examples
//!
//! This example demonstrates the LIFO adapter:
//! - Push/pop discipline
//! - Peeking without removal
//! - Seeding through the fluent builder

use chainlist::prelude::*;

fn main() -> Result<(), ChainError> {
    println!("{}", "=".repeat(80));
    println!("chainlist Stack Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_lifo_discipline()?;
    example_2_builder_seeding()?;

    Ok(())
}

/// Example 1: LIFO Discipline
/// The most recent push is always the next pop
fn example_1_lifo_discipline() -> Result<(), ChainError> {
    println!("Example 1: LIFO Discipline");
    println!("{}", "-".repeat(80));

    let mut stack = Stack::new();
    stack.push(10);
    stack.push(20);
    stack.push(30);

    println!("Top:      {:?}", stack.peek());
    println!("Contents: {:?} (top first)", stack.to_vec());

    while let Some(value) = stack.pop() {
        println!("Popped:   {value}");
    }
    println!("Empty:    {}", stack.is_empty());

    println!();
    Ok(())
}

/// Example 2: Builder Seeding
/// The first seed value sits on top
fn example_2_builder_seeding() -> Result<(), ChainError> {
    println!("Example 2: Builder Seeding");
    println!("{}", "-".repeat(80));

    let mut stack = Chain::new().seed(vec![3, 2, 1]).shape(Lifo).build()?;
    println!("Seeded:   {:?}", stack.to_vec());

    stack.push(4);
    println!("Pushed 4: top is {:?}", stack.peek());

    println!();
    Ok(())
}
