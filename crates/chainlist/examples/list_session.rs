//! chainlist List Engine Examples
//!
//! This example demonstrates the list engine directly:
//! - End insertion and positional splicing
//! - Sweeping delete-by-value
//! - Search by value and by predicate
//! - In-place reversal and export

use chainlist::prelude::*;

fn main() -> Result<(), ChainError> {
    println!("{}", "=".repeat(80));
    println!("chainlist List Engine Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_insertion()?;
    example_2_sweeping_remove()?;
    example_3_search()?;
    example_4_reversal()?;

    Ok(())
}

/// Example 1: Insertion
/// End insertion plus the degrading positional insert
fn example_1_insertion() -> Result<(), ChainError> {
    println!("Example 1: Insertion");
    println!("{}", "-".repeat(80));

    let mut list = LinkedList::new();
    list.push_back(2);
    list.push_front(1);
    list.push_back(4);
    list.insert(3, 2); // splice between 2 and 4
    list.insert(5, 99); // past the end: degrades to append

    println!("Contents: {:?}", list);
    println!("Length:   {}", list.len());

    println!();
    Ok(())
}

/// Example 2: Sweeping Remove
/// One sweep removes every matching node and recomputes the tail
fn example_2_sweeping_remove() -> Result<(), ChainError> {
    println!("Example 2: Sweeping Remove");
    println!("{}", "-".repeat(80));

    let mut list = LinkedList::from_values([1, 2, 1, 3, 1]);
    println!("Before:  {:?}", list);

    let removed = list.remove(&1)?;
    println!("Removed: {} node(s), last value {:?}", removed.count, removed.value);
    println!("After:   {:?}", list);
    println!("Tail:    {:?}", list.back());

    println!();
    Ok(())
}

/// Example 3: Search
/// Tagged queries make value-vs-predicate an explicit caller decision
fn example_3_search() -> Result<(), ChainError> {
    println!("Example 3: Search");
    println!("{}", "-".repeat(80));

    let list = LinkedList::from_values([10, 25, 30, 45]);

    let by_value = list.find(Query::Value(&30))?;
    println!("Query::Value(30)      -> {:?}", by_value);

    let over_20 = |v: &i32| *v > 20;
    let by_predicate = list.find(Query::Predicate(&over_20))?;
    println!("Query::Predicate(>20) -> {:?}", by_predicate);

    println!();
    Ok(())
}

/// Example 4: Reversal and Export
/// In-place reversal, then the render-ready export views
fn example_4_reversal() -> Result<(), ChainError> {
    println!("Example 4: Reversal and Export");
    println!("{}", "-".repeat(80));

    let mut list = LinkedList::from_values(["a", "b", "c"]);
    list.reverse();

    for entry in list.entries() {
        let arrow = if entry.has_next { " -> " } else { "" };
        print!("{}{}", entry.value, arrow);
    }
    println!();

    println!();
    Ok(())
}
