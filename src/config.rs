use crate::error::{LfResult, LineupError};
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Exhaustive assignment memoizes over a `2^N` slot mask, so N stays small.
pub const MAX_EXHAUSTIVE_SLOTS: usize = 20;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    #[serde(default)]
    pub search: SearchParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchParams {
    /// Skip a swap trial when the candidate's ceiling is below the
    /// starter's current total.
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub prune_by_ceiling: bool,

    /// Largest lineup the exhaustive assigner will accept.
    #[arg(long, default_value_t = 16)]
    pub max_slots: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            prune_by_ceiling: true,
            max_slots: 16,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.search.validate()?;
        Ok(config)
    }
}

impl SearchParams {
    pub fn validate(&self) -> LfResult<()> {
        if self.max_slots == 0 || self.max_slots > MAX_EXHAUSTIVE_SLOTS {
            return Err(LineupError::Config(format!(
                "max_slots must be between 1 and {}, got {}",
                MAX_EXHAUSTIVE_SLOTS, self.max_slots
            )));
        }
        Ok(())
    }

    /// Copies only the values the user typed on the command line, so file
    /// settings survive clap's defaults.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(prune_by_ceiling, "prune_by_ceiling");
        update_if_present!(max_slots, "max_slots");
    }
}
