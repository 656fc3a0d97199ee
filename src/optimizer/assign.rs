use super::PositionPick;
use crate::error::{LfResult, LineupError};
use crate::scorer::ScoredPlayer;

#[derive(Debug, Clone, PartialEq)]
pub struct GroupAssignment {
    /// One pick per group member, in group order.
    pub picks: Vec<PositionPick>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy)]
struct Branch {
    total: f64,
    slot: usize,
}

struct Search<'g, 'a> {
    group: &'g [&'g ScoredPlayer<'a>],
    slots: &'g [usize],
    memo: Vec<Option<Branch>>,
}

impl Search<'_, '_> {
    // Best total for the members not yet placed. Members are placed in
    // group order, so `used.count_ones()` is the next member's index and
    // the answer depends on `used` alone.
    fn best(&mut self, used: u32) -> f64 {
        let depth = used.count_ones() as usize;
        if depth == self.group.len() {
            return 0.0;
        }
        if let Some(branch) = self.memo[used as usize] {
            return branch.total;
        }

        let member = self.group[depth];
        let mut best: Option<Branch> = None;
        for slot in 0..self.slots.len() {
            if used & (1 << slot) != 0 {
                continue;
            }
            let position = self.slots[slot];
            // Repeated position names are interchangeable: try each once.
            if (0..slot).any(|prev| used & (1 << prev) == 0 && self.slots[prev] == position) {
                continue;
            }

            let total = member.score(position) + self.best(used | (1 << slot));
            if best.map_or(true, |b| total > b.total) {
                best = Some(Branch { total, slot });
            }
        }

        // At least one slot is free whenever depth < len.
        let branch = best.unwrap_or(Branch {
            total: f64::NEG_INFINITY,
            slot: usize::MAX,
        });
        self.memo[used as usize] = Some(branch);
        branch.total
    }
}

/// Exact best bijection of `group` onto `slots` (position ids, may repeat).
/// Ties go to the earliest slot tried.
pub fn best_assignment(group: &[&ScoredPlayer<'_>], slots: &[usize]) -> LfResult<GroupAssignment> {
    if group.len() != slots.len() {
        return Err(LineupError::Internal(format!(
            "assigning {} players to {} slots",
            group.len(),
            slots.len()
        )));
    }
    if slots.len() > u32::BITS as usize - 1 {
        return Err(LineupError::TooManySlots {
            slots: slots.len(),
            limit: u32::BITS as usize - 1,
        });
    }

    let mut search = Search {
        group,
        slots,
        memo: vec![None; 1 << slots.len()],
    };
    let total = search.best(0);

    let mut picks = Vec::with_capacity(group.len());
    let mut used = 0u32;
    for member in group {
        let branch = search.memo[used as usize].ok_or_else(|| {
            LineupError::Internal(format!("no assignment recorded for mask {:#b}", used))
        })?;
        let position = *slots.get(branch.slot).ok_or_else(|| {
            LineupError::Internal(format!("no free slot for '{}'", member.name()))
        })?;
        picks.push(PositionPick {
            position,
            score: member.score(position),
        });
        used |= 1 << branch.slot;
    }

    Ok(GroupAssignment { picks, total })
}
