use super::swap::{try_swap_in, Swap, SwapOutcome};
use super::{seed, Lineup, PickedPosition};
use crate::config::SearchParams;
use crate::core_types::{Player, PositionRequirements};
use crate::error::{LfResult, LineupError};
use crate::scorer::loader::validate_requirements;
use crate::scorer::{score_roster, PositionTable, ScoredPlayer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRecord {
    pub incoming: String,
    pub outgoing: String,
    pub slot: usize,
    pub delta: f64,
    pub total: f64,
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub picks: Vec<PickedPosition>,
    pub lineup: Lineup,
    pub initial_total: f64,
    pub total: f64,
    pub swaps: Vec<SwapRecord>,
    pub passes: usize,
}

pub struct LineupOptimizer<'a> {
    table: PositionTable,
    /// Scored roster, stable-sorted by descending ceiling.
    pool: Vec<ScoredPlayer<'a>>,
    params: SearchParams,
}

impl<'a> LineupOptimizer<'a> {
    /// Validates inputs and scores the roster. Fails before any search if
    /// the roster cannot fill every slot.
    pub fn new(
        roster: &'a [Player],
        requirements: &PositionRequirements,
        params: SearchParams,
    ) -> LfResult<Self> {
        params.validate()?;
        validate_requirements(requirements)?;

        let slots = requirements.slot_count();
        if slots > params.max_slots {
            return Err(LineupError::TooManySlots {
                slots,
                limit: params.max_slots,
            });
        }
        if roster.len() < slots {
            return Err(LineupError::InsufficientRoster {
                required: slots,
                available: roster.len(),
            });
        }

        let table = PositionTable::new(requirements);
        let mut pool = score_roster(roster, &table, requirements)?;
        pool.sort_by(|a, b| b.ceiling.total_cmp(&a.ceiling));

        Ok(Self {
            table,
            pool,
            params,
        })
    }

    pub fn pool(&self) -> &[ScoredPlayer<'a>] {
        &self.pool
    }

    pub fn table(&self) -> &PositionTable {
        &self.table
    }

    /// Seeds a lineup, then applies the first improving swap found in
    /// ceiling order and rescans from the top until a full pass finds none.
    pub fn run(&self) -> LfResult<OptimizationResult> {
        let mut lineup = seed::initial_lineup(&self.pool, &self.table)?;
        let initial_total = lineup.total();
        info!(
            "🚀 Seeded {} starters from {} players (total {:.2})",
            lineup.len(),
            self.pool.len(),
            initial_total
        );

        let mut swaps = Vec::new();
        let mut passes = 0;

        loop {
            passes += 1;
            let Some(swap) = self.first_improvement(&lineup)? else {
                break;
            };

            let record = SwapRecord {
                incoming: self.pool[swap.incoming].name().to_string(),
                outgoing: self.pool[swap.outgoing].name().to_string(),
                slot: swap.slot,
                delta: swap.delta,
                total: swap.lineup.total(),
            };
            debug!(
                "🔁 Pass {}: {} replaces {} in slot {} (+{:.3}, total {:.2})",
                passes, record.incoming, record.outgoing, record.slot, record.delta, record.total
            );
            swaps.push(record);
            lineup = swap.lineup;
        }

        let total = lineup.total();
        info!(
            "🏁 Local optimum after {} swaps over {} passes (total {:.2})",
            swaps.len(),
            passes,
            total
        );

        Ok(OptimizationResult {
            picks: self.resolve(&lineup),
            lineup,
            initial_total,
            total,
            swaps,
            passes,
        })
    }

    fn first_improvement(&self, lineup: &Lineup) -> LfResult<Option<Swap>> {
        for candidate in 0..self.pool.len() {
            let outcome = try_swap_in(
                candidate,
                &self.pool,
                lineup,
                &self.table,
                self.params.prune_by_ceiling,
            )?;
            if let SwapOutcome::Improved(swap) = outcome {
                return Ok(Some(swap));
            }
        }
        Ok(None)
    }

    pub fn resolve(&self, lineup: &Lineup) -> Vec<PickedPosition> {
        lineup
            .slots
            .iter()
            .map(|slot| PickedPosition {
                player_name: self.pool[slot.member].name().to_string(),
                offence_position: self.table.name(slot.offence.position).to_string(),
                defence_position: self.table.name(slot.defence.position).to_string(),
                offensive_score: slot.offence.score,
                defensive_score: slot.defence.score,
                total_score: slot.total(),
            })
            .collect()
    }
}
