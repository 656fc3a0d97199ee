use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lineforge::api::Session;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "team_data.txt")]
    roster: String,

    #[arg(global = true, short = 'p', long, default_value = "composition.txt")]
    composition: String,

    /// JSON file with search settings; explicit flags override it.
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Pick(cmd::pick::PickArgs),
    Validate(cmd::validate::ValidateArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("📂 Loading roster: {}", cli.roster);
    info!("📋 Loading composition: {}", cli.composition);
    let session = Session::load(&cli.roster, &cli.composition).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Pick(args) => {
            let sub_matches = matches.subcommand_matches("pick");
            cmd::resolve_config(cli.config.as_deref(), &args.config, sub_matches)
                .and_then(|config| cmd::pick::run(&args, &session, config))
        }
        Commands::Validate(args) => cmd::validate::run(&args, &session),
    };

    if let Err(e) = outcome {
        error!("❌ {}", e);
        process::exit(1);
    }
}
