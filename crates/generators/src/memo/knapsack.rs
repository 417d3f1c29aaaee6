//! 0/1 knapsack trace generator.
//!
//! Bottom-up tabulation: `dp[i][w]` is the best value reachable with the
//! first `i` items and capacity `w`. Row `0` and column `0` stay zero. Each
//! cell is announced, then resolved as "cannot fit", "include" or "exclude".
//! Excluding wins ties, so an item is only taken when it strictly improves
//! the value.
//!
//! Once the table is full, backtracking from `dp[n][capacity]` recovers the
//! chosen items: item `i` was taken exactly when `dp[i][w] != dp[i - 1][w]`.

use algotrace_core::{Recorder, Trace, TraceStep};

/// An item with an integer weight and value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackItem {
    /// Unique identifier.
    pub id: String,

    /// Capacity the item uses.
    pub weight: usize,

    /// Value the item adds.
    pub value: u64,
}

impl KnapsackItem {
    /// Creates an item.
    #[must_use]
    pub fn new(id: impl Into<String>, weight: usize, value: u64) -> Self {
        Self {
            id: id.into(),
            weight,
            value,
        }
    }
}

/// The phase of the knapsack computation a step belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KnapsackPhase {
    /// The zeroed table.
    Init,

    /// Resolving one cell at a time, row by row.
    FillingTable,

    /// Walking back from the last cell to find the chosen items.
    Backtracking,

    /// Items recovered.
    Complete,
}

/// Snapshot of 0/1 knapsack.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct KnapsackStep {
    /// What happened at this step.
    pub description: String,

    /// `items.len() + 1` rows of `capacity + 1` cells.
    pub dp_table: Vec<Vec<u64>>,

    /// The items, in input order.
    pub items: Vec<KnapsackItem>,

    /// Total capacity.
    pub capacity: usize,

    /// Index into `items` of the item being considered.
    pub current_item_index: Option<usize>,

    /// Capacity column being considered.
    pub current_weight: Option<usize>,

    /// Whether the current item is taken at this cell, once decided.
    pub included_item: Option<bool>,

    /// `dp[n][capacity]`, known once the table is full.
    pub max_value: Option<u64>,

    /// Items recovered so far, in input order.
    pub selected_items: Vec<KnapsackItem>,

    pub phase: KnapsackPhase,
}

impl TraceStep for KnapsackStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of solving 0/1 knapsack for `items` and `capacity`.
///
/// Every step holds a copy of the whole table, so the trace grows with
/// `items.len()² × capacity`. Keep inputs small.
#[must_use]
pub fn generate(items: &[KnapsackItem], capacity: usize) -> Trace<KnapsackStep> {
    let n = items.len();
    let mut dp = vec![vec![0_u64; capacity + 1]; n + 1];

    let snapshot = |dp: &[Vec<u64>], phase: KnapsackPhase, description: String| KnapsackStep {
        description,
        dp_table: dp.to_vec(),
        items: items.to_vec(),
        capacity,
        current_item_index: None,
        current_weight: None,
        included_item: None,
        max_value: None,
        selected_items: Vec::new(),
        phase,
    };

    let mut recorder = Recorder::new(snapshot(
        &dp,
        KnapsackPhase::Init,
        format!(
            "Initializing DP table for {n} items and capacity {capacity}. \
             dp[i][w] = max value using first i items with capacity w."
        ),
    ));

    for i in 1..=n {
        let item = &items[i - 1];
        let cell = |dp: &[Vec<u64>], w: usize, included: Option<bool>, description: String| {
            KnapsackStep {
                current_item_index: Some(i - 1),
                current_weight: Some(w),
                included_item: included,
                ..snapshot(dp, KnapsackPhase::FillingTable, description)
            }
        };

        for w in 0..=capacity {
            recorder.record(cell(
                &dp,
                w,
                None,
                format!(
                    "Considering item {i} ({}w, {}v) for capacity {w}.",
                    item.weight, item.value
                ),
            ));

            if item.weight <= w {
                let with = item.value.saturating_add(dp[i - 1][w - item.weight]);
                let without = dp[i - 1][w];

                if with > without {
                    dp[i][w] = with;
                    recorder.record(cell(
                        &dp,
                        w,
                        Some(true),
                        format!("Including item {i} is better ({with} > {without}). dp[{i}][{w}] = {with}."),
                    ));
                } else {
                    dp[i][w] = without;
                    recorder.record(cell(
                        &dp,
                        w,
                        Some(false),
                        format!(
                            "Excluding item {i} is better or equal ({without} >= {with}). \
                             dp[{i}][{w}] = {without}."
                        ),
                    ));
                }
            } else {
                dp[i][w] = dp[i - 1][w];
                recorder.record(cell(
                    &dp,
                    w,
                    Some(false),
                    format!(
                        "Item {i} ({}w) cannot fit in capacity {w}. dp[{i}][{w}] = dp[{}][{w}] = {}.",
                        item.weight,
                        i - 1,
                        dp[i][w]
                    ),
                ));
            }
        }
    }

    let max_value = dp[n][capacity];
    recorder.record(KnapsackStep {
        max_value: Some(max_value),
        ..snapshot(
            &dp,
            KnapsackPhase::Backtracking,
            format!("DP table filled. Maximum value is {max_value}. Now backtracking to find items."),
        )
    });

    let mut selected: Vec<KnapsackItem> = Vec::new();
    let mut remaining = capacity;
    for i in (1..=n).rev() {
        if remaining == 0 {
            break;
        }

        let backtracking = |dp: &[Vec<u64>],
                            selected: &[KnapsackItem],
                            weight: usize,
                            included: Option<bool>,
                            description: String| KnapsackStep {
            current_item_index: Some(i - 1),
            current_weight: Some(weight),
            included_item: included,
            max_value: Some(max_value),
            selected_items: selected.to_vec(),
            ..snapshot(dp, KnapsackPhase::Backtracking, description)
        };

        recorder.record(backtracking(
            &dp,
            &selected,
            remaining,
            None,
            format!(
                "Backtracking: Checking item {i}. Current max value for capacity {remaining} is {}. \
                 Value without item {i} is {}.",
                dp[i][remaining],
                dp[i - 1][remaining]
            ),
        ));

        if dp[i][remaining] == dp[i - 1][remaining] {
            recorder.record(backtracking(
                &dp,
                &selected,
                remaining,
                Some(false),
                format!("Item {i} was not included."),
            ));
        } else {
            let item = &items[i - 1];
            selected.insert(0, item.clone());
            let before = remaining;
            remaining -= item.weight;
            log::trace!("knapsack takes item {i} at capacity {before}");
            recorder.record(backtracking(
                &dp,
                &selected,
                before,
                Some(true),
                format!(
                    "Item {i} ({}w, {}v) was included. Remaining capacity: {remaining}.",
                    item.weight, item.value
                ),
            ));
        }
    }

    let chosen: Vec<String> = selected
        .iter()
        .map(|item| format!("(w:{}, v:{})", item.weight, item.value))
        .collect();
    recorder.record(KnapsackStep {
        max_value: Some(max_value),
        selected_items: selected.clone(),
        ..snapshot(
            &dp,
            KnapsackPhase::Complete,
            format!(
                "0/1 Knapsack complete. Max value: {max_value}. Selected items: {}.",
                chosen.join(", ")
            ),
        )
    });

    let trace = recorder.finish();
    log::debug!(
        "knapsack over {n} items with capacity {capacity} = {max_value} produced {} steps",
        trace.step_count()
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Test fixtures ---

    fn sample_items() -> Vec<KnapsackItem> {
        vec![
            KnapsackItem::new("item1", 2, 3),
            KnapsackItem::new("item2", 3, 4),
            KnapsackItem::new("item3", 4, 5),
            KnapsackItem::new("item4", 5, 6),
        ]
    }

    fn ids(items: &[KnapsackItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    // --- Tests ---

    #[test]
    fn solves_sample_instance() {
        let trace = generate(&sample_items(), 7);

        let terminal = trace.terminal();
        assert_eq!(terminal.phase, KnapsackPhase::Complete);
        assert_eq!(terminal.max_value, Some(9));
        // dp[4][7] ties with dp[3][7], so item 4 is skipped on the way back.
        assert_eq!(ids(&terminal.selected_items), vec!["item2", "item3"]);
        assert_eq!(
            terminal.description,
            "0/1 Knapsack complete. Max value: 9. Selected items: (w:3, v:4), (w:4, v:5)."
        );
    }

    #[test]
    fn table_matches_the_recurrence() {
        let items = sample_items();
        let trace = generate(&items, 7);

        let dp = &trace.terminal().dp_table;
        assert_eq!(dp.len(), items.len() + 1);
        assert!(dp.iter().all(|row| row.len() == 8));
        assert!(dp[0].iter().all(|&v| v == 0));
        assert_eq!(dp[1], vec![0, 0, 3, 3, 3, 3, 3, 3]);
        assert_eq!(dp[2], vec![0, 0, 3, 4, 4, 7, 7, 7]);
        assert_eq!(dp[4][7], 9);
    }

    #[test]
    fn selected_items_fit_and_sum_to_max_value() {
        let items = vec![
            KnapsackItem::new("a", 1, 1),
            KnapsackItem::new("b", 3, 4),
            KnapsackItem::new("c", 4, 5),
            KnapsackItem::new("d", 5, 7),
        ];
        let trace = generate(&items, 7);

        let terminal = trace.terminal();
        let weight: usize = terminal.selected_items.iter().map(|item| item.weight).sum();
        let value: u64 = terminal.selected_items.iter().map(|item| item.value).sum();
        assert!(weight <= 7);
        assert_eq!(Some(value), terminal.max_value);
        assert_eq!(value, 9);
    }

    #[test]
    fn phases_run_in_order() {
        let trace = generate(&sample_items(), 5);

        let phases: Vec<KnapsackPhase> = trace.iter().map(|step| step.phase).collect();
        assert_eq!(phases[0], KnapsackPhase::Init);
        assert_eq!(phases.last(), Some(&KnapsackPhase::Complete));
        let rank = |phase: &KnapsackPhase| *phase as u8;
        assert!(phases.windows(2).all(|w| rank(&w[0]) <= rank(&w[1])));
    }

    #[test]
    fn each_cell_is_announced_then_resolved() {
        let items = sample_items();
        let trace = generate(&items, 3);

        let filling = trace
            .iter()
            .filter(|step| step.phase == KnapsackPhase::FillingTable)
            .count();
        assert_eq!(filling, 2 * items.len() * 4);
    }

    #[test]
    fn ties_exclude_the_item() {
        let items = vec![KnapsackItem::new("a", 1, 2), KnapsackItem::new("b", 1, 2)];
        let trace = generate(&items, 1);

        assert!(
            trace
                .descriptions()
                .any(|d| d == "Excluding item 2 is better or equal (2 >= 2). dp[2][1] = 2.")
        );
        assert_eq!(ids(&trace.terminal().selected_items), vec!["a"]);
    }

    #[test]
    fn empty_inputs_complete_without_selection() {
        let trace = generate(&[], 4);
        assert_eq!(trace.step_count(), 3);
        assert_eq!(trace.terminal().max_value, Some(0));
        assert!(trace.terminal().selected_items.is_empty());

        let zero_capacity = generate(&sample_items(), 0);
        assert_eq!(zero_capacity.terminal().max_value, Some(0));
        assert!(
            zero_capacity
                .iter()
                .all(|step| step.phase != KnapsackPhase::Backtracking
                    || step.current_item_index.is_none())
        );
    }
}
