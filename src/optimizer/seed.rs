use super::assign::best_assignment;
use super::{Lineup, StarterSlot};
use crate::error::{LfResult, LineupError};
use crate::scorer::{PositionTable, ScoredPlayer};

/// Starting lineup from the first N players of a ceiling-sorted pool, each
/// side assigned exactly. Players outside the top N are never considered.
pub fn initial_lineup(pool: &[ScoredPlayer<'_>], table: &PositionTable) -> LfResult<Lineup> {
    let n = table.attacking.len();
    if pool.len() < n {
        return Err(LineupError::InsufficientRoster {
            required: n,
            available: pool.len(),
        });
    }

    let group: Vec<&ScoredPlayer> = pool[..n].iter().collect();
    let offence = best_assignment(&group, &table.attacking)?;
    let defence = best_assignment(&group, &table.defensive)?;

    let slots = offence
        .picks
        .into_iter()
        .zip(defence.picks)
        .enumerate()
        .map(|(member, (offence, defence))| StarterSlot {
            member,
            offence,
            defence,
        })
        .collect();

    Ok(Lineup { slots })
}
