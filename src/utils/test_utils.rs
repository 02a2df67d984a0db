use crate::trace::{ElementStatus, StepKind, Trace};
use crate::Algorithm;
use block_pseudorand::block_rand;
use std::collections::BTreeSet;

/// Small values so duplicates are common.
pub fn gen_inputs(n: usize) -> Vec<i64> {
    block_rand::<u32>(n)
        .into_iter()
        .map(|v| (v % 200) as i64 - 100)
        .collect()
}

pub fn gen_input_set() -> Vec<Vec<i64>> {
    let mut sorted = gen_inputs(40);
    sorted.sort_unstable();
    let mut reversed = sorted.clone();
    reversed.reverse();

    vec![
        vec![],
        vec![1],
        vec![2, 1],
        vec![1, 2],
        vec![5, 3, 8, 1, 9],
        vec![4, 4, 4],
        vec![3, 1, 3, 1, 3, 1],
        vec![0, -5, i64::MAX, i64::MIN, 7, -5],
        (0..32).collect(),
        (0..32).rev().collect(),
        sorted,
        reversed,
        gen_inputs(7),
        gen_inputs(33),
        gen_inputs(100),
    ]
}

/// Checks every structural property a trace must satisfy for `input`.
pub fn validate_trace(input: &[i64], trace: &Trace) {
    let n = input.len();
    let mut expected = input.to_vec();
    expected.sort_unstable();

    let first = trace.first().expect("trace has no steps");
    assert_eq!(first.kind, StepKind::Start);
    assert_eq!(first.values(), input, "initializer must show the raw input");

    let last = trace.last().expect("trace has no steps");
    assert_eq!(trace.final_values(), expected);
    assert_eq!(last.sorted, (0..n).collect::<Vec<_>>());

    if n > 0 {
        assert!(trace.len() >= 2);
        assert_eq!(last.kind, StepKind::Finish);
    }

    for step in trace.steps.iter() {
        assert_eq!(step.array.len(), n);

        if holds_every_value(trace.algorithm, step.kind) {
            let mut values = step.values();
            values.sort_unstable();
            assert_eq!(
                values, expected,
                "a step lost or invented a value at {:?}",
                step.description
            );
        }

        assert!(step.sorted.windows(2).all(|w| w[0] < w[1]));
        assert!(step
            .comparing
            .iter()
            .chain(step.swapping.iter())
            .chain(step.sorted.iter())
            .all(|i| *i < n));

        for (i, e) in step.array.iter().enumerate() {
            let expected_status = if step.is_sorted(i) {
                ElementStatus::Sorted
            } else if step.comparing.contains(&i) {
                ElementStatus::Comparing
            } else if step.swapping.contains(&i) {
                ElementStatus::Swapping
            } else {
                ElementStatus::Unsorted
            };

            assert_eq!(e.status, expected_status, "status of index {} in {:?}", i, step);
        }

        match step.kind {
            StepKind::Compare => {
                assert_eq!(step.comparing.len(), 2);
                assert!(step.swapping.is_empty());
            }
            StepKind::Highlight => {
                assert!(!step.comparing.is_empty());
                assert!(step.swapping.is_empty());
            }
            StepKind::Swap => {
                assert!(step.comparing.is_empty());
                assert!(!step.swapping.is_empty());
            }
            _ => {
                assert!(step.comparing.is_empty());
                assert!(step.swapping.is_empty());
            }
        }
    }

    for pair in trace.steps.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);

        // Values only move at the indices the earlier step announced as swapping
        for i in 0..n {
            if prev.array[i].value != next.array[i].value {
                assert!(
                    prev.swapping.contains(&i),
                    "index {} changed after {:?}",
                    i,
                    prev.description
                );
            }
        }

        // Shifting steps hide their pair from the sorted set; nothing else ever shrinks it
        let shown: BTreeSet<usize> = next
            .sorted
            .iter()
            .chain(next.comparing.iter())
            .chain(next.swapping.iter())
            .copied()
            .collect();
        assert!(prev.sorted.iter().all(|i| shown.contains(i)));

        if trace.algorithm != Algorithm::Insertion {
            let next_sorted: BTreeSet<usize> = next.sorted.iter().copied().collect();
            assert!(
                prev.sorted.iter().all(|i| next_sorted.contains(i)),
                "sorted set shrank at {:?}",
                next.description
            );
        }
    }

    assert_eq!(
        trace.stats.comparisons,
        trace.count_kind(StepKind::Compare) as u64
    );

    let swaps = if trace.algorithm == Algorithm::Merge {
        right_run_placements(trace)
    } else {
        trace.count_kind(StepKind::Swap) as u64
    };
    assert_eq!(trace.stats.swaps, swaps);
}

/// Exchange-based engines keep a permutation of the input in every snapshot. Insertion and
/// merge hold a duplicate while a key is lifted out or a run is being written back, so only
/// their boundary steps are whole.
fn holds_every_value(algorithm: Algorithm, kind: StepKind) -> bool {
    match algorithm {
        Algorithm::Bubble | Algorithm::Selection | Algorithm::Quick => true,
        Algorithm::Insertion | Algorithm::Merge => {
            matches!(kind, StepKind::Start | StepKind::Settle | StepKind::Finish)
        }
    }
}

/// Number of merge placements taken from the right run, read back from the step log.
fn right_run_placements(trace: &Trace) -> u64 {
    let mut count = 0;

    for step in trace.steps.iter() {
        match step.kind {
            // "Comparing {left} at index {i} with {right} at index {j}"
            StepKind::Compare => {
                let words: Vec<&str> = step.description.split_whitespace().collect();
                let left: i64 = words[1].parse().expect("left value");
                let right: i64 = words[6].parse().expect("right value");

                if left > right {
                    count += 1;
                }
            }
            StepKind::Swap
                if step
                    .description
                    .starts_with("Placing remaining right subarray element") =>
            {
                count += 1;
            }
            _ => {}
        }
    }

    count
}

pub fn trace_comparison_suite<F>(trace_fn: F)
where
    F: Fn(&[i64]) -> Trace,
{
    for input in gen_input_set() {
        let trace = trace_fn(&input);
        validate_trace(&input, &trace);
    }
}
