//! Memoized Fibonacci trace generator.
//!
//! # Algorithm
//!
//! `fib(k)` is evaluated top-down. Each call is announced with its depth,
//! then resolves one of three ways:
//!
//! - **Cache hit**: the stored value is returned at once.
//! - **Base case** (`k <= 1`): `k` is returned directly and is not cached.
//! - **Composite**: `fib(k - 1)` then `fib(k - 2)` are evaluated, each
//!   followed by a composition step, and the sum is stored before returning.
//!
//! Values are `u64` and saturate at `u64::MAX`, so results are exact for
//! `n <= 93`. Pending calls are kept on an explicit frame stack rather than
//! the native one, so the depth of `n` is bounded only by memory.

use std::collections::BTreeMap;

use algotrace_core::{Recorder, Trace, TraceStep};

/// Snapshot of a memoized Fibonacci evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FibonacciStep {
    /// Argument of the call this step belongs to.
    pub n: u32,

    /// What happened at this step.
    pub description: String,

    /// Memoized results known so far.
    pub cache: BTreeMap<u32, u64>,

    /// Whether the call was answered from the cache.
    pub cache_hit: bool,

    /// Whether a result was just written to the cache.
    pub cache_store: bool,

    /// Value being returned, on returning steps.
    pub return_value: Option<u64>,

    /// Number of calls on the stack.
    pub call_depth: usize,

    /// Arguments of the pending calls, outermost first.
    pub call_stack: Vec<u32>,

    /// Whether the call is still being evaluated (as opposed to returning).
    pub is_active_call: bool,
}

impl TraceStep for FibonacciStep {
    fn description(&self) -> &str {
        &self.description
    }
}

/// Generates the trace of evaluating `fib(n)` with memoization.
///
/// The terminal step's cache always holds the entry for `n`, which is also
/// its `return_value`. Pending calls live on an explicit frame stack, so
/// large `n` costs memory for the snapshots but never native stack.
#[must_use]
pub fn generate(n: u32) -> Trace<FibonacciStep> {
    let mut evaluator = Evaluator {
        cache: BTreeMap::new(),
        call_stack: Vec::new(),
        frames: Vec::new(),
        recorder: Recorder::new(FibonacciStep {
            n,
            description: format!("Starting Fibonacci({n}) with memoization."),
            cache: BTreeMap::new(),
            cache_hit: false,
            cache_store: false,
            return_value: None,
            call_depth: 0,
            call_stack: Vec::new(),
            is_active_call: false,
        }),
    };

    let result = evaluator.evaluate(n);

    // Base cases bypass the cache during evaluation.
    evaluator.cache.entry(n).or_insert(result);

    let step = FibonacciStep {
        return_value: Some(result),
        ..evaluator.snapshot(
            n,
            format!("Fibonacci({n}) calculation complete. Final result: {result}."),
        )
    };
    evaluator.recorder.record(step);

    let trace = evaluator.recorder.finish();
    log::debug!(
        "fibonacci({n}) = {result} produced {} steps",
        trace.step_count()
    );
    trace
}

/// Where a composite call resumes once its pending sub-call returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    /// Waiting on `fib(k - 1)`.
    First,
    /// Waiting on `fib(k - 2)`, with `fib(k - 1)` already known.
    Second { first: u64 },
}

/// A composite call suspended on one of its sub-calls.
#[derive(Debug)]
struct Frame {
    k: u32,
    resume: Resume,
}

/// Evaluation state shared by every pending call.
struct Evaluator {
    cache: BTreeMap<u32, u64>,
    call_stack: Vec<u32>,
    frames: Vec<Frame>,
    recorder: Recorder<FibonacciStep>,
}

impl Evaluator {
    /// Runs `fib(n)` to completion and returns its value.
    fn evaluate(&mut self, n: u32) -> u64 {
        let mut returned = self.enter(n);

        loop {
            let Some(value) = returned else {
                // A composite call was just entered; descend into `fib(k - 1)`.
                let k = self.frames.last().map_or(n, |frame| frame.k);
                returned = self.enter(k - 1);
                continue;
            };

            let Some(frame) = self.frames.last_mut() else {
                return value;
            };
            let (k, resume) = (frame.k, frame.resume);

            match resume {
                Resume::First => {
                    frame.resume = Resume::Second { first: value };
                    let (a, b) = (k - 1, k - 2);
                    self.active(
                        k,
                        format!("fib({k}): fib({a}) returned {value}. Now calculating fib({b})."),
                    );
                    returned = self.enter(b);
                }
                Resume::Second { first } => {
                    self.frames.pop();
                    returned = Some(self.compose(k, first, value));
                }
            }
        }
    }

    /// Announces `fib(k)` and resolves it at once when it is cached or a base
    /// case. Otherwise pushes a frame and returns `None`.
    fn enter(&mut self, k: u32) -> Option<u64> {
        self.call_stack.push(k);
        let depth = self.call_stack.len();
        self.active(k, format!("Calling fib({k}). Current depth: {depth}."));

        if let Some(&cached) = self.cache.get(&k) {
            let step = FibonacciStep {
                cache_hit: true,
                return_value: Some(cached),
                ..self.snapshot(
                    k,
                    format!("fib({k}): Value {cached} found in cache (memoization)."),
                )
            };
            return Some(self.finish_call(step, cached));
        }

        if k <= 1 {
            let value = u64::from(k);
            let step = FibonacciStep {
                return_value: Some(value),
                ..self.snapshot(k, format!("fib({k}): Base case, returns {k}."))
            };
            return Some(self.finish_call(step, value));
        }

        let (a, b) = (k - 1, k - 2);
        self.active(k, format!("fib({k}): Calculating fib({a}) + fib({b})."));
        self.frames.push(Frame {
            k,
            resume: Resume::First,
        });
        None
    }

    /// Combines both sub-results of `fib(k)`, stores the sum and returns it.
    fn compose(&mut self, k: u32, first: u64, second: u64) -> u64 {
        let b = k - 2;
        let sum = first.saturating_add(second);
        self.active(
            k,
            format!("fib({k}): fib({b}) returned {second}. Result for fib({k}) is {sum}."),
        );

        self.cache.insert(k, sum);
        let step = FibonacciStep {
            cache_store: true,
            return_value: Some(sum),
            ..self.snapshot(
                k,
                format!("fib({k}): Storing result {sum} in cache. Returning {sum}."),
            )
        };
        self.finish_call(step, sum)
    }

    /// Records a step for a call that is still being evaluated.
    fn active(&mut self, k: u32, description: String) {
        let step = FibonacciStep {
            is_active_call: true,
            ..self.snapshot(k, description)
        };
        self.recorder.record(step);
    }

    /// Records the returning step of the innermost call and pops it.
    fn finish_call(&mut self, step: FibonacciStep, value: u64) -> u64 {
        self.recorder.record(step);
        self.call_stack.pop();
        value
    }

    fn snapshot(&self, k: u32, description: String) -> FibonacciStep {
        FibonacciStep {
            n: k,
            description,
            cache: self.cache.clone(),
            cache_hit: false,
            cache_store: false,
            return_value: None,
            call_depth: self.call_stack.len(),
            call_stack: self.call_stack.clone(),
            is_active_call: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_fib_five() {
        let trace = generate(5);

        let terminal = trace.terminal();
        assert_eq!(terminal.return_value, Some(5));
        assert_eq!(terminal.cache[&5], 5);
        assert_eq!(terminal.call_depth, 0);
        assert!(terminal.call_stack.is_empty());
    }

    #[test]
    fn cache_holds_every_composite_subproblem() {
        let trace = generate(6);

        let cache = &trace.terminal().cache;
        let expected: BTreeMap<u32, u64> = [(2, 1), (3, 2), (4, 3), (5, 5), (6, 8)].into();
        assert_eq!(cache, &expected);
    }

    #[test]
    fn cache_only_grows() {
        let trace = generate(8);

        for pair in trace.as_slice().windows(2) {
            let (before, after) = (&pair[0].cache, &pair[1].cache);
            for (k, v) in before {
                assert_eq!(after.get(k), Some(v), "{}", pair[1].description);
            }
            if pair[1].cache_store {
                assert_eq!(after.len(), before.len() + 1);
            }
        }
    }

    #[test]
    fn cache_hits_return_stored_values() {
        let trace = generate(5);

        let hits: Vec<_> = trace.iter().filter(|step| step.cache_hit).collect();
        // fib(3) is reused by fib(5), fib(2) by fib(4).
        assert_eq!(hits.len(), 2);
        for hit in hits {
            assert_eq!(hit.return_value, hit.cache.get(&hit.n).copied());
            assert!(!hit.is_active_call);
        }
    }

    #[test]
    fn depth_matches_the_call_stack() {
        let trace = generate(7);

        for step in &trace {
            assert_eq!(step.call_depth, step.call_stack.len());
        }
        let deepest = trace.iter().map(|step| step.call_depth).max().unwrap();
        // fib(7) down to fib(1) along the n - 1 chain.
        assert_eq!(deepest, 7);
    }

    #[test]
    fn base_cases_are_cached_at_the_end() {
        for n in [0, 1] {
            let trace = generate(n);
            // start, call, base case, complete
            assert_eq!(trace.step_count(), 4);
            assert_eq!(trace.terminal().cache[&n], u64::from(n));
            assert_eq!(trace.terminal().return_value, Some(u64::from(n)));
        }
    }

    #[test]
    fn step_order_for_fib_two() {
        let trace = generate(2);

        let descriptions: Vec<&str> = trace.descriptions().collect();
        assert_eq!(
            descriptions,
            vec![
                "Starting Fibonacci(2) with memoization.",
                "Calling fib(2). Current depth: 1.",
                "fib(2): Calculating fib(1) + fib(0).",
                "Calling fib(1). Current depth: 2.",
                "fib(1): Base case, returns 1.",
                "fib(2): fib(1) returned 1. Now calculating fib(0).",
                "Calling fib(0). Current depth: 2.",
                "fib(0): Base case, returns 0.",
                "fib(2): fib(0) returned 0. Result for fib(2) is 1.",
                "fib(2): Storing result 1 in cache. Returning 1.",
                "Fibonacci(2) calculation complete. Final result: 1.",
            ]
        );
    }

    #[test]
    fn deep_arguments_run_without_native_recursion() {
        let n: u32 = 2000;
        let trace = generate(n);

        let terminal = trace.terminal();
        assert_eq!(terminal.return_value, Some(u64::MAX));
        assert_eq!(terminal.cache.len(), usize::try_from(n).unwrap() - 1);
        assert!(terminal.call_stack.is_empty());
        let deepest = trace.iter().map(|step| step.call_depth).max().unwrap();
        assert_eq!(deepest, usize::try_from(n).unwrap());
    }

    #[test]
    fn large_arguments_stay_exact() {
        let trace = generate(93);
        assert_eq!(trace.terminal().return_value, Some(12_200_160_415_121_876_738));
    }
}
