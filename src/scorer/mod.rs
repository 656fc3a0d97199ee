pub mod loader;

use crate::core_types::{Player, PositionRequirements, Side};
use crate::error::LfResult;
use crate::formula;
use rayon::prelude::*;
use tracing::debug;

/// Distinct position names, first-seen order across attacking then
/// defensive lists. Both lists are stored as indices into `names`.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTable {
    pub names: Vec<String>,
    pub attacking: Vec<usize>,
    pub defensive: Vec<usize>,
}

impl PositionTable {
    pub fn new(requirements: &PositionRequirements) -> Self {
        let mut names: Vec<String> = Vec::new();
        let mut intern = |position: &String| match names.iter().position(|n| n == position) {
            Some(id) => id,
            None => {
                names.push(position.clone());
                names.len() - 1
            }
        };

        let attacking = requirements.attacking.iter().map(&mut intern).collect();
        let defensive = requirements.defensive.iter().map(&mut intern).collect();

        Self {
            names,
            attacking,
            defensive,
        }
    }

    pub fn slots(&self, side: Side) -> &[usize] {
        match side {
            Side::Offence => &self.attacking,
            Side::Defence => &self.defensive,
        }
    }

    pub fn name(&self, id: usize) -> &str {
        &self.names[id]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ScoredPlayer<'a> {
    pub player: &'a Player,
    /// Indexed by `PositionTable` id.
    pub scores: Vec<f64>,
    pub best_offence: f64,
    pub best_defence: f64,
    /// `best_offence + best_defence`. The two maxima are taken
    /// independently, so no single lineup need achieve this.
    pub ceiling: f64,
}

impl<'a> ScoredPlayer<'a> {
    pub fn new(
        player: &'a Player,
        table: &PositionTable,
        requirements: &PositionRequirements,
    ) -> LfResult<Self> {
        let scores = table
            .names
            .iter()
            .map(|position| formula::evaluate(player, requirements.formula_for(position)))
            .collect::<LfResult<Vec<f64>>>()?;

        let best = |ids: &[usize]| {
            ids.iter()
                .map(|&id| scores[id])
                .fold(f64::NEG_INFINITY, f64::max)
        };
        let best_offence = best(&table.attacking);
        let best_defence = best(&table.defensive);

        Ok(Self {
            player,
            scores,
            best_offence,
            best_defence,
            ceiling: best_offence + best_defence,
        })
    }

    #[inline(always)]
    pub fn score(&self, position: usize) -> f64 {
        self.scores[position]
    }

    pub fn name(&self) -> &str {
        &self.player.name
    }
}

/// Scores every player once per distinct position. Output order is
/// roster order.
pub fn score_roster<'a>(
    roster: &'a [Player],
    table: &PositionTable,
    requirements: &PositionRequirements,
) -> LfResult<Vec<ScoredPlayer<'a>>> {
    let scored = roster
        .par_iter()
        .map(|player| ScoredPlayer::new(player, table, requirements))
        .collect::<LfResult<Vec<_>>>()?;

    debug!(
        "Scored {} players across {} distinct positions",
        scored.len(),
        table.len()
    );
    Ok(scored)
}
