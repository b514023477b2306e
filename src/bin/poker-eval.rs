use clap::Parser;
use log::{error, LevelFilter};
use poker_eval::api::{ApiError, EvaluateQuery, HandRankResponse};
use poker_eval::cards::format_cards;
use poker_eval::variants::{evaluate, Variant};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(version, about = "Evaluate a Texas Hold'em or Omaha hand.")]
struct Cli {
    /// Game variant: texas or omaha.
    variant: Variant,
    /// Hole cards, two characters per card (e.g. AsKd).
    hand: String,
    /// Five board cards (e.g. QhJhTh9h8h).
    board: String,
    /// Print the `{"handRank": ..}` response instead of the plain name.
    #[clap(long)]
    json: bool,
    /// More output; repeat for debug logging.
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let query = EvaluateQuery::new(cli.hand.as_str(), cli.board.as_str());
    let result = query
        .validate(cli.variant)
        .and_then(|(hand, board)| evaluate(cli.variant, hand, board).map_err(ApiError::from));
    let eval = match result {
        Ok(eval) => eval,
        Err(e) => {
            error!("{e}");
            return if e.status() >= 500 { ExitCode::from(1) } else { ExitCode::from(2) };
        }
    };

    if cli.json {
        let response = HandRankResponse { hand_rank: eval.name().to_string() };
        match serde_json::to_string(&response) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("{e}");
                return ExitCode::from(1);
            }
        }
    } else {
        println!("{}", eval.name());
    }

    if cli.verbose > 0 {
        println!("best five: {}", format_cards(&eval.best_five));
        println!("strength:  {:#x}", eval.value().raw());
    }

    ExitCode::SUCCESS
}
