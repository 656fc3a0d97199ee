use crate::reports;
use clap::Args;
use lineforge::api::Session;
use lineforge::config::Config;
use lineforge::error::LfResult;
use lineforge::optimizer::{PickedPosition, SwapRecord};
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct PickArgs {
    #[command(flatten)]
    pub config: Config,

    /// Print the lineup as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Append each starter's stats to the lineup table.
    #[arg(long, default_value_t = false)]
    pub show_stats: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PickReport<'a> {
    total_score: f64,
    lineup: &'a [PickedPosition],
    swaps: &'a [SwapRecord],
}

pub fn run(args: &PickArgs, session: &Session, config: Config) -> LfResult<()> {
    let result = session.optimize(config.search)?;

    if args.json {
        let report = PickReport {
            total_score: result.total,
            lineup: &result.picks,
            swaps: &result.swaps,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let stats: Vec<_> = if args.show_stats {
        result
            .picks
            .iter()
            .map(|pick| session.player(&pick.player_name))
            .collect()
    } else {
        Vec::new()
    };

    reports::print_lineup(&result.picks, &stats);
    reports::print_swaps(&result.swaps);
    println!(
        "\nTotal: {:.2} (seed {:.2}, {} swaps)",
        result.total,
        result.initial_total,
        result.swaps.len()
    );
    Ok(())
}
