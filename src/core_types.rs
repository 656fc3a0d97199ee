use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::Display;

/// A roster entry: a unique name plus integer stats in header order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub stats: Vec<(String, i64)>,
}

impl Player {
    pub fn new(name: impl Into<String>, stats: Vec<(String, i64)>) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }

    /// Case-insensitive stat lookup (ASCII folding only).
    pub fn stat(&self, name: &str) -> Option<i64> {
        self.stats
            .iter()
            .find(|(stat, _)| stat.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }

    pub fn has_stat(&self, name: &str) -> bool {
        self.stat(name).is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Side {
    Offence,
    Defence,
}

impl Side {
    /// Classifies a requirements-file prefix by its first letter.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix.trim().chars().next()? {
            'o' | 'O' => Some(Self::Offence),
            'd' | 'D' => Some(Self::Defence),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionRequirements {
    pub attacking: Vec<String>,
    pub defensive: Vec<String>,
    /// Position or alias name -> formula text. Names match exactly.
    #[serde(default)]
    pub formulas: HashMap<String, String>,
}

impl PositionRequirements {
    pub fn new(attacking: Vec<String>, defensive: Vec<String>) -> Self {
        Self {
            attacking,
            defensive,
            formulas: HashMap::new(),
        }
    }

    pub fn with_formula(mut self, name: impl Into<String>, formula: impl Into<String>) -> Self {
        self.formulas.insert(name.into(), formula.into());
        self
    }

    pub fn slot_count(&self) -> usize {
        self.attacking.len()
    }

    pub fn positions(&self, side: Side) -> &[String] {
        match side {
            Side::Offence => &self.attacking,
            Side::Defence => &self.defensive,
        }
    }

    /// The formula used to score `position`: its override, or the position
    /// name itself as an implicit stat reference.
    pub fn formula_for<'a>(&'a self, position: &'a str) -> &'a str {
        self.formulas
            .get(position)
            .map(String::as_str)
            .unwrap_or(position)
    }

    /// Positions with no override whose name is a stat of no player in
    /// `roster`. These score 0 for everyone.
    pub fn unresolved_positions(&self, roster: &[Player]) -> Vec<&str> {
        let mut missing: Vec<&str> = Vec::new();
        for position in self.attacking.iter().chain(self.defensive.iter()) {
            if self.formulas.contains_key(position) || missing.contains(&position.as_str()) {
                continue;
            }
            if !roster.iter().any(|player| player.has_stat(position)) {
                missing.push(position);
            }
        }
        missing
    }
}
