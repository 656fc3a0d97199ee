use super::assign::{best_assignment, GroupAssignment};
use super::Lineup;
use crate::error::LfResult;
use crate::scorer::{PositionTable, ScoredPlayer};

#[derive(Debug, Clone, PartialEq)]
pub struct Swap {
    pub lineup: Lineup,
    pub slot: usize,
    pub incoming: usize,
    pub outgoing: usize,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwapOutcome {
    NoImprovement,
    Improved(Swap),
}

struct Trial {
    slot: usize,
    delta: f64,
    offence_score: f64,
    defence: GroupAssignment,
}

/// Tries `candidate` (a pool index) in place of each starter and keeps the
/// best strictly improving trial.
///
/// The candidate inherits the evicted starter's offensive position; only the
/// defence is re-solved across the whole modified group.
pub fn try_swap_in(
    candidate: usize,
    pool: &[ScoredPlayer<'_>],
    lineup: &Lineup,
    table: &PositionTable,
    prune_by_ceiling: bool,
) -> LfResult<SwapOutcome> {
    if lineup.contains(candidate) {
        return Ok(SwapOutcome::NoImprovement);
    }

    let incoming = &pool[candidate];
    let old_defence = lineup.defence_total();
    let mut group: Vec<&ScoredPlayer> = lineup.slots.iter().map(|s| &pool[s.member]).collect();
    let mut best: Option<Trial> = None;

    for (slot, starter) in lineup.slots.iter().enumerate() {
        if prune_by_ceiling && incoming.ceiling < starter.total() {
            continue;
        }

        let offence_score = incoming.score(starter.offence.position);
        group[slot] = incoming;
        let defence = best_assignment(&group, &table.defensive)?;
        group[slot] = &pool[starter.member];

        let delta = (offence_score - starter.offence.score) + (defence.total - old_defence);
        if delta > best.as_ref().map_or(0.0, |t| t.delta) {
            best = Some(Trial {
                slot,
                delta,
                offence_score,
                defence,
            });
        }
    }

    let Some(trial) = best else {
        return Ok(SwapOutcome::NoImprovement);
    };

    let mut next = lineup.clone();
    let outgoing = next.slots[trial.slot].member;
    next.slots[trial.slot].member = candidate;
    next.slots[trial.slot].offence.score = trial.offence_score;
    for (starter, pick) in next.slots.iter_mut().zip(trial.defence.picks) {
        starter.defence = pick;
    }

    // Rounding can turn a tiny positive delta into a non-increase.
    if next.total() <= lineup.total() {
        return Ok(SwapOutcome::NoImprovement);
    }

    Ok(SwapOutcome::Improved(Swap {
        lineup: next,
        slot: trial.slot,
        incoming: candidate,
        outgoing,
        delta: trial.delta,
    }))
}
