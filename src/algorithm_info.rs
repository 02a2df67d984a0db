//! Static descriptive metadata for each algorithm. Nothing here interacts with the engines.

use crate::error::Result;
use crate::Algorithm;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct TimeComplexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub time_complexity: TimeComplexity,
    pub space_complexity: &'static str,
    pub description: &'static str,
    pub is_stable: bool,
}

static BUBBLE: AlgorithmInfo = AlgorithmInfo {
    name: "Bubble Sort",
    time_complexity: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    description: "Bubble Sort repeatedly steps through the list, compares adjacent elements, and swaps them if they are in the wrong order. The process is repeated until no more swaps are needed.",
    is_stable: true,
};

static SELECTION: AlgorithmInfo = AlgorithmInfo {
    name: "Selection Sort",
    time_complexity: TimeComplexity {
        best: "O(n²)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    description: "Selection Sort divides the array into a sorted and an unsorted region. It repeatedly finds the minimum element from the unsorted region and moves it to the beginning of the unsorted region.",
    is_stable: false,
};

static INSERTION: AlgorithmInfo = AlgorithmInfo {
    name: "Insertion Sort",
    time_complexity: TimeComplexity {
        best: "O(n)",
        average: "O(n²)",
        worst: "O(n²)",
    },
    space_complexity: "O(1)",
    description: "Insertion Sort builds the final sorted array one item at a time. It works by taking each element from the unsorted part and inserting it into its correct position in the sorted part.",
    is_stable: true,
};

static MERGE: AlgorithmInfo = AlgorithmInfo {
    name: "Merge Sort",
    time_complexity: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n log n)",
    },
    space_complexity: "O(n)",
    description: "Merge Sort is a divide and conquer algorithm that divides the array into two halves, sorts each half, and then merges the sorted halves. It guarantees O(n log n) time complexity.",
    is_stable: true,
};

static QUICK: AlgorithmInfo = AlgorithmInfo {
    name: "Quick Sort",
    time_complexity: TimeComplexity {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
    },
    space_complexity: "O(log n)",
    description: "Quick Sort selects a \"pivot\" element and partitions the array around it, with elements less than the pivot to one side and elements greater than the pivot to the other. It then recursively sorts the sub-arrays.",
    is_stable: false,
};

impl Algorithm {
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            Algorithm::Bubble => &BUBBLE,
            Algorithm::Selection => &SELECTION,
            Algorithm::Insertion => &INSERTION,
            Algorithm::Merge => &MERGE,
            Algorithm::Quick => &QUICK,
        }
    }
}

/// Looks up metadata by algorithm name, e.g. `"quick"` or `"Quick Sort"`.
pub fn describe(name: &str) -> Result<&'static AlgorithmInfo> {
    Ok(name.parse::<Algorithm>()?.info())
}
