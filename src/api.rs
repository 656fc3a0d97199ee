use crate::config::SearchParams;
use crate::core_types::{Player, PositionRequirements};
use crate::error::LfResult;
use crate::optimizer::{LineupOptimizer, OptimizationResult};
use crate::scorer::loader::{load_requirements, load_roster};
use std::path::Path;

pub use crate::optimizer::PickedPosition;

/// Picks one starter per attacking position using default search settings.
pub fn pick_team(
    roster: &[Player],
    requirements: &PositionRequirements,
) -> LfResult<Vec<PickedPosition>> {
    pick_team_with(roster, requirements, SearchParams::default())
}

pub fn pick_team_with(
    roster: &[Player],
    requirements: &PositionRequirements,
    params: SearchParams,
) -> LfResult<Vec<PickedPosition>> {
    Ok(optimize(roster, requirements, params)?.picks)
}

pub fn optimize(
    roster: &[Player],
    requirements: &PositionRequirements,
    params: SearchParams,
) -> LfResult<OptimizationResult> {
    LineupOptimizer::new(roster, requirements, params)?.run()
}

/// Everything a caller needs after a file-driven run.
pub struct Session {
    pub roster: Vec<Player>,
    pub requirements: PositionRequirements,
}

impl Session {
    pub fn load<P1: AsRef<Path>, P2: AsRef<Path>>(
        roster_path: P1,
        requirements_path: P2,
    ) -> LfResult<Self> {
        Ok(Self {
            roster: load_roster(roster_path)?,
            requirements: load_requirements(requirements_path)?,
        })
    }

    pub fn optimize(&self, params: SearchParams) -> LfResult<OptimizationResult> {
        optimize(&self.roster, &self.requirements, params)
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.roster.iter().find(|p| p.name == name)
    }
}
