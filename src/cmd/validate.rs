use crate::reports;
use clap::Args;
use lineforge::api::Session;
use lineforge::error::LfResult;
use lineforge::scorer::{score_roster, PositionTable};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Only show players whose name contains this text.
    #[arg(short = 'P', long)]
    pub player: Option<String>,
}

pub fn run(args: &ValidateArgs, session: &Session) -> LfResult<()> {
    let requirements = &session.requirements;
    let table = PositionTable::new(requirements);

    for position in requirements.unresolved_positions(&session.roster) {
        warn!(
            "⚠️  Position '{}' has no formula and no matching stat; it scores 0",
            position
        );
    }

    let slots = requirements.slot_count();
    if session.roster.len() < slots {
        warn!(
            "⚠️  Roster has {} players but {} starters are required",
            session.roster.len(),
            slots
        );
    }

    let mut scored = score_roster(&session.roster, &table, requirements)?;
    if let Some(ref filter) = args.player {
        let filter = filter.to_lowercase();
        scored.retain(|p| p.name().to_lowercase().contains(&filter));
    }
    scored.sort_by(|a, b| b.ceiling.total_cmp(&a.ceiling));

    info!(
        "🔎 {} formulas evaluated for {} players",
        table.len(),
        scored.len()
    );
    reports::print_score_matrix(&table, &scored);
    Ok(())
}
