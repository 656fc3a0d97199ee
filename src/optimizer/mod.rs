pub mod assign;
pub mod runner;
pub mod seed;
pub mod swap;

pub use self::runner::{LineupOptimizer, OptimizationResult, SwapRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionPick {
    /// `PositionTable` id.
    pub position: usize,
    pub score: f64,
}

/// One starter: `member` indexes the optimizer's ceiling-sorted pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarterSlot {
    pub member: usize,
    pub offence: PositionPick,
    pub defence: PositionPick,
}

impl StarterSlot {
    #[inline(always)]
    pub fn total(&self) -> f64 {
        self.offence.score + self.defence.score
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Lineup {
    pub slots: Vec<StarterSlot>,
}

impl Lineup {
    pub fn total(&self) -> f64 {
        self.slots.iter().map(StarterSlot::total).sum()
    }

    pub fn offence_total(&self) -> f64 {
        self.slots.iter().map(|s| s.offence.score).sum()
    }

    pub fn defence_total(&self) -> f64 {
        self.slots.iter().map(|s| s.defence.score).sum()
    }

    pub fn contains(&self, member: usize) -> bool {
        self.slots.iter().any(|s| s.member == member)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// A starter as reported to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PickedPosition {
    pub player_name: String,
    pub offence_position: String,
    pub defence_position: String,
    pub offensive_score: f64,
    pub defensive_score: f64,
    pub total_score: f64,
}
