use colored::*;
use fundamentals::computation_map::ALGORITHMS_COMPUTATION_MAP;
use serde::Serialize;

use crate::config::HarnessConfig;
use crate::runner::Timing;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunKind {
    Sort,
    Search,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub kind: RunKind,
    pub size: usize,
    pub max_value: i64,
    pub seed: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<i64>,
    pub timings: Vec<Timing>,
}

impl Report {
    pub fn new(kind: RunKind, config: &HarnessConfig, seed: u64, timings: Vec<Timing>) -> Self {
        Self { kind, size: config.size, max_value: config.max_value, seed, target: None, timings }
    }

    pub fn with_target(mut self, target: i64) -> Self {
        self.target = Some(target);
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn print_table(&self) {
        let title = match self.kind {
            RunKind::Sort => "Sort timings",
            RunKind::Search => "Search timings",
        };
        println!("{}", title.bold());
        print!("{} elements in 1..={}, seed {}", self.size, self.max_value, self.seed);
        match self.target {
            Some(target) => println!(", target {target}"),
            None => println!(),
        }
        for timing in &self.timings {
            let line = format!("{:<22} {:.5} seconds", format!("{} Time:", timing.algorithm), timing.elapsed.as_secs_f64());
            match timing.found {
                Some(index) => println!("{line}  (index {index})"),
                None => println!("{line}"),
            }
        }
    }
}

pub fn print_catalog() {
    println!("{}", "=== Fundamentals Computation Map ===".bold());
    for (path, comp_type, complexity) in ALGORITHMS_COMPUTATION_MAP.iter() {
        println!("{:<36} | {:<24} | {}", path, comp_type, complexity);
    }
}
