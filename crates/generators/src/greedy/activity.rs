//! Activity selection trace generator.
//!
//! Activities are sorted by finish time once, up front, with ties kept in
//! input order. The earliest-finishing activity is always selected. Every
//! later activity is selected when it starts no earlier than the last
//! selected one finishes, so back-to-back activities are compatible.

use algotrace_core::{Recorder, Trace, TraceStep};

/// A half-open interval `[start, finish)` to schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Activity {
    /// Unique identifier.
    pub id: String,

    /// Optional display name.
    pub name: Option<String>,

    /// Start time.
    pub start: i64,

    /// Finish time.
    pub finish: i64,
}

impl Activity {
    /// Creates an unnamed activity.
    #[must_use]
    pub fn new(id: impl Into<String>, start: i64, finish: i64) -> Self {
        Self {
            id: id.into(),
            name: None,
            start,
            finish,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name if present, otherwise the id.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Snapshot of greedy activity selection.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ActivitySelectionStep {
    /// What happened at this step.
    pub description: String,

    /// All activities, sorted by finish time.
    pub activities: Vec<Activity>,

    /// Activities selected so far, in finish order.
    pub selected: Vec<Activity>,

    /// Index into `activities` of the activity being considered.
    pub current_index: Option<usize>,

    /// Finish time of the most recently selected activity.
    pub last_finish: Option<i64>,

    /// Outcome of the compatibility check, once made.
    pub is_compatible: Option<bool>,

    /// Whether this step commits a selection.
    pub is_final_selection: bool,
}

impl TraceStep for ActivitySelectionStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of greedy activity selection.
///
/// The terminal step's `selected` list is pairwise non-overlapping and is
/// non-empty whenever `activities` is.
#[must_use]
pub fn generate(activities: &[Activity]) -> Trace<ActivitySelectionStep> {
    let mut sorted = activities.to_vec();
    sorted.sort_by_key(|activity| activity.finish);
    let sorted = sorted;

    let mut selected: Vec<Activity> = Vec::new();

    let snapshot = |selected: &[Activity], description: String| ActivitySelectionStep {
        description,
        activities: sorted.clone(),
        selected: selected.to_vec(),
        current_index: None,
        last_finish: None,
        is_compatible: None,
        is_final_selection: false,
    };

    let listing: Vec<String> = sorted
        .iter()
        .map(|a| format!("{}({}-{})", a.label(), a.start, a.finish))
        .collect();
    let mut recorder = Recorder::new(snapshot(
        &selected,
        format!(
            "Initial activities, sorted by finish times: [{}]",
            listing.join(", ")
        ),
    ));

    let Some(first) = sorted.first() else {
        recorder.record(ActivitySelectionStep {
            is_final_selection: true,
            ..snapshot(&selected, "No activities to select.".to_owned())
        });
        return recorder.finish();
    };

    selected.push(first.clone());
    let mut last_finish = first.finish;
    recorder.record(ActivitySelectionStep {
        current_index: Some(0),
        last_finish: Some(last_finish),
        is_compatible: Some(true),
        is_final_selection: true,
        ..snapshot(
            &selected,
            format!(
                "Selected the first activity: {} (ends at {last_finish}).",
                first.label()
            ),
        )
    });

    for (i, current) in sorted.iter().enumerate().skip(1) {
        let label = current.label();
        recorder.record(ActivitySelectionStep {
            current_index: Some(i),
            last_finish: Some(last_finish),
            ..snapshot(
                &selected,
                format!(
                    "Considering activity {label} (starts {}, finishes {}). Last selected activity finished at {last_finish}.",
                    current.start, current.finish
                ),
            )
        });

        if current.start >= last_finish {
            let previous = last_finish;
            selected.push(current.clone());
            last_finish = current.finish;
            recorder.record(ActivitySelectionStep {
                current_index: Some(i),
                last_finish: Some(last_finish),
                is_compatible: Some(true),
                is_final_selection: true,
                ..snapshot(
                    &selected,
                    format!(
                        "Activity {label} is compatible (starts {} >= finishes {previous}). Selected it. New last finish time: {last_finish}.",
                        current.start
                    ),
                )
            });
        } else {
            recorder.record(ActivitySelectionStep {
                current_index: Some(i),
                last_finish: Some(last_finish),
                is_compatible: Some(false),
                ..snapshot(
                    &selected,
                    format!(
                        "Activity {label} is NOT compatible (starts {} < finishes {last_finish}). Skipped.",
                        current.start
                    ),
                )
            });
        }
    }

    let labels: Vec<&str> = selected.iter().map(Activity::label).collect();
    recorder.record(ActivitySelectionStep {
        last_finish: Some(last_finish),
        is_final_selection: true,
        ..snapshot(
            &selected,
            format!(
                "Activity selection complete. Selected activities: [{}]",
                labels.join(", ")
            ),
        )
    });

    let trace = recorder.finish();
    log::debug!(
        "activity selection chose {} of {} activities in {} steps",
        trace.terminal().selected.len(),
        activities.len(),
        trace.step_count()
    );
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Test fixtures ---

    fn four() -> Vec<Activity> {
        vec![
            Activity::new("a1", 1, 4),
            Activity::new("a2", 3, 5),
            Activity::new("a3", 0, 6),
            Activity::new("a4", 5, 7),
        ]
    }

    fn ids(activities: &[Activity]) -> Vec<&str> {
        activities.iter().map(|a| a.id.as_str()).collect()
    }

    // --- Tests ---

    #[test]
    fn selects_earliest_finishing_compatible_activities() {
        let trace = generate(&four());

        assert_eq!(ids(&trace.terminal().selected), vec!["a1", "a4"]);
        assert!(trace.terminal().is_final_selection);
    }

    #[test]
    fn incompatible_activities_are_skipped() {
        let trace = generate(&four());

        let skipped: Vec<_> = trace
            .iter()
            .filter(|step| step.is_compatible == Some(false))
            .filter_map(|step| step.current_index)
            .map(|i| trace.initial().activities[i].id.as_str())
            .collect();
        assert_eq!(skipped, vec!["a2", "a3"]);
    }

    #[test]
    fn sort_is_stable_on_equal_finish_times() {
        let activities = vec![
            Activity::new("late", 2, 5),
            Activity::new("early", 0, 5),
            Activity::new("first", 0, 1),
        ];
        let trace = generate(&activities);

        assert_eq!(ids(&trace.initial().activities), vec!["first", "late", "early"]);
        assert_eq!(ids(&trace.terminal().selected), vec!["first", "late"]);
    }

    #[test]
    fn back_to_back_activities_are_compatible() {
        let activities = vec![Activity::new("x", 0, 2), Activity::new("y", 2, 4)];
        let trace = generate(&activities);

        assert_eq!(ids(&trace.terminal().selected), vec!["x", "y"]);
    }

    #[test]
    fn selection_never_overlaps() {
        let activities = vec![
            Activity::new("1", 1, 4),
            Activity::new("2", 3, 5),
            Activity::new("3", 0, 6),
            Activity::new("4", 5, 7),
            Activity::new("5", 3, 9),
            Activity::new("6", 5, 9),
            Activity::new("7", 6, 10),
            Activity::new("8", 8, 11),
            Activity::new("9", 8, 12),
            Activity::new("10", 2, 14),
            Activity::new("11", 12, 16),
        ];
        let trace = generate(&activities);

        let selected = &trace.terminal().selected;
        assert_eq!(ids(selected), vec!["1", "4", "8", "11"]);
        assert!(selected.windows(2).all(|w| w[1].start >= w[0].finish));
    }

    #[test]
    fn descriptions_use_names_when_present() {
        let activities = vec![Activity::new("a1", 0, 3).with_name("Standup")];
        let trace = generate(&activities);

        assert!(trace.initial().description.contains("Standup(0-3)"));
        assert_eq!(
            trace.terminal().description,
            "Activity selection complete. Selected activities: [Standup]"
        );
    }

    #[test]
    fn empty_input_has_dedicated_terminal_step() {
        let trace = generate(&[]);

        assert_eq!(trace.step_count(), 2);
        assert_eq!(trace.terminal().description, "No activities to select.");
        assert!(trace.terminal().selected.is_empty());
    }
}
