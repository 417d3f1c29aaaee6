//! Default datasets and random inputs.

use algotrace_generators::{
    graph::{Edge, Node},
    greedy::Activity,
    memo::KnapsackItem,
};
use rand::Rng;

/// Default linear search array.
pub const LINEAR_SEARCH_ARRAY: [i64; 7] = [15, 7, 22, 9, 30, 12, 18];

/// Default linear search target.
pub const LINEAR_SEARCH_TARGET: i64 = 12;

/// Default binary search array, ascending.
pub const BINARY_SEARCH_ARRAY: [i64; 10] = [2, 5, 8, 12, 16, 23, 38, 56, 72, 91];

/// Default binary search target.
pub const BINARY_SEARCH_TARGET: i64 = 23;

/// Default heap sort array.
pub const HEAP_SORT_ARRAY: [i64; 10] = [4, 10, 3, 5, 1, 9, 2, 8, 7, 6];

/// Default bubble sort array.
pub const BUBBLE_SORT_ARRAY: [i64; 8] = [7, 2, 8, 1, 4, 6, 3, 5];

/// Default insertion sort array.
pub const INSERTION_SORT_ARRAY: [i64; 9] = [5, 3, 9, 1, 4, 6, 2, 8, 7];

/// Default selection sort array.
pub const SELECTION_SORT_ARRAY: [i64; 8] = [6, 1, 7, 3, 5, 2, 4, 8];

/// Default merge sort array.
pub const MERGE_SORT_ARRAY: [i64; 9] = [8, 3, 5, 1, 9, 2, 7, 4, 6];

/// Default knapsack capacity.
pub const KNAPSACK_CAPACITY: usize = 7;

/// Default Fibonacci argument.
pub const FIBONACCI_N: u32 = 5;

/// Start node of the sample graph.
pub const GRAPH_START: &str = "A";

/// The six-node directed sample graph, laid out for a 500x300 canvas.
#[must_use]
pub fn graph() -> (Vec<Node>, Vec<Edge>) {
    let nodes = [
        ("A", 100.0, 100.0),
        ("B", 250.0, 70.0),
        ("C", 280.0, 200.0),
        ("D", 100.0, 250.0),
        ("E", 400.0, 150.0),
        ("F", 450.0, 280.0),
    ]
    .into_iter()
    .map(|(id, x, y)| Node::new(id, x, y))
    .collect();

    let edges = [
        ("A", "B"),
        ("A", "D"),
        ("B", "C"),
        ("B", "E"),
        ("D", "C"),
        ("C", "E"),
        ("C", "F"),
        ("E", "F"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (from, to))| Edge::new(format!("e{}", i + 1), from, to))
    .collect();

    (nodes, edges)
}

/// The four sample knapsack items, `item1` through `item4`.
#[must_use]
pub fn knapsack_items() -> Vec<KnapsackItem> {
    [(2, 3), (3, 4), (4, 5), (5, 6)]
        .into_iter()
        .enumerate()
        .map(|(i, (weight, value))| KnapsackItem::new(format!("item{}", i + 1), weight, value))
        .collect()
}

/// The eleven-activity sample schedule, named `A1` through `A11`.
#[must_use]
pub fn activities() -> Vec<Activity> {
    [
        (1, 4),
        (3, 5),
        (0, 6),
        (5, 7),
        (3, 9),
        (5, 9),
        (6, 10),
        (8, 11),
        (8, 12),
        (2, 14),
        (12, 16),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (start, finish))| {
        Activity::new(format!("a{}", i + 1), start, finish).with_name(format!("A{}", i + 1))
    })
    .collect()
}

/// Draws `len` values uniformly from `1..=max`.
///
/// A `max` below 1 is treated as 1.
pub fn random_array<R: Rng>(rng: &mut R, len: usize, max: i64) -> Vec<i64> {
    let max = max.max(1);
    (0..len).map(|_| rng.random_range(1..=max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn binary_search_sample_is_ascending() {
        assert!(BINARY_SEARCH_ARRAY.windows(2).all(|w| w[0] < w[1]));
        assert!(BINARY_SEARCH_ARRAY.contains(&BINARY_SEARCH_TARGET));
    }

    #[test]
    fn graph_edges_reference_declared_nodes() {
        let (nodes, edges) = graph();
        assert_eq!(nodes.len(), 6);
        assert_eq!(edges.len(), 8);
        for edge in &edges {
            assert!(nodes.iter().any(|n| n.id == edge.from));
            assert!(nodes.iter().any(|n| n.id == edge.to));
        }
        assert!(nodes.iter().any(|n| n.id == GRAPH_START));
    }

    #[test]
    fn knapsack_items_fit_the_default_capacity_one_at_a_time() {
        let items = knapsack_items();

        assert_eq!(items.len(), 4);
        assert!(items.iter().all(|item| item.weight <= KNAPSACK_CAPACITY));
        assert_eq!(items[0].id, "item1");
    }

    #[test]
    fn activities_are_valid_intervals() {
        let activities = activities();
        assert_eq!(activities.len(), 11);
        assert_eq!(activities[10].label(), "A11");
        assert!(activities.iter().all(|a| a.start >= 0 && a.finish > a.start));
    }

    #[test]
    fn random_array_is_seeded_and_bounded() {
        let a = random_array(&mut StdRng::seed_from_u64(7), 20, 30);
        let b = random_array(&mut StdRng::seed_from_u64(7), 20, 30);

        assert_eq!(a, b);
        assert_eq!(a.len(), 20);
        assert!(a.iter().all(|v| (1..=30).contains(v)));
    }

    #[test]
    fn random_array_clamps_max() {
        let values = random_array(&mut StdRng::seed_from_u64(1), 5, 0);
        assert_eq!(values, vec![1; 5]);
    }
}
