use std::fs;
use std::path::Path;

use fundamentals::searching::SearchAlgorithm;
use fundamentals::sorting::SortAlgorithm;
use serde::{Deserialize, Serialize};

use crate::cli::InputArgs;
use crate::error::{HarnessError, Result};

pub const DEFAULT_SIZE: usize = 10_000;
pub const DEFAULT_MAX_VALUE: i64 = 10_000;

/// Shape of the random input every timing run works on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    pub size: usize,
    pub max_value: i64,
    pub seed: Option<u64>,
    /// Sorts to run when none are named on the command line; empty means all.
    pub sort_algorithms: Vec<SortAlgorithm>,
    /// Searches to run when none are named on the command line; empty means all.
    pub search_algorithms: Vec<SearchAlgorithm>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_value: DEFAULT_MAX_VALUE,
            seed: None,
            sort_algorithms: Vec::new(),
            search_algorithms: Vec::new(),
        }
    }
}

impl HarnessConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|source| HarnessError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| HarnessError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Config file (or defaults) with command-line flags applied on top.
    pub fn resolve(args: &InputArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(size) = args.size {
            config.size = size;
        }
        if let Some(max_value) = args.max_value {
            config.max_value = max_value;
        }
        if args.seed.is_some() {
            config.seed = args.seed;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn sorts(&self, requested: Vec<SortAlgorithm>) -> Vec<SortAlgorithm> {
        pick(requested, &self.sort_algorithms, &SortAlgorithm::ALL)
    }

    pub fn searches(&self, requested: Vec<SearchAlgorithm>) -> Vec<SearchAlgorithm> {
        pick(requested, &self.search_algorithms, &SearchAlgorithm::ALL)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(HarnessError::InvalidConfig("size must be at least 1".into()));
        }
        if self.max_value < 1 {
            return Err(HarnessError::InvalidConfig(format!(
                "max_value must be at least 1, got {}",
                self.max_value
            )));
        }
        Ok(())
    }
}

fn pick<A: Copy>(requested: Vec<A>, configured: &[A], all: &[A]) -> Vec<A> {
    if !requested.is_empty() {
        requested
    } else if !configured.is_empty() {
        configured.to_vec()
    } else {
        all.to_vec()
    }
}
