use anyhow::Context;
use clap::Parser;
use reelspin_execution::{slot::rtp, SlotMachine};
use reelspin_simulator::Session;
use reelspin_types::slot::{MachineConfig, SlotConfig};
use std::{path::PathBuf, str::FromStr};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML machine configuration (stock machine if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, default_value_t = 100)]
    deposit: u64,

    #[arg(short, long, default_value_t = 1)]
    lines: usize,

    /// Bet per line
    #[arg(short, long, default_value_t = 1)]
    bet: u64,

    /// Stop after this many rounds even if the balance allows more
    #[arg(short, long)]
    rounds: Option<u64>,

    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Estimate return to player over this many rounds instead of playing a session
    #[arg(long)]
    rtp: Option<u64>,

    #[arg(long, default_value = "info")]
    log_level: String,

    /// Do not print each arrangement
    #[arg(short, long)]
    quiet: bool,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<MachineConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("could not read config file {}", path.display()))?;
            serde_yaml::from_str::<SlotConfig>(&raw)
                .with_context(|| format!("could not parse config file {}", path.display()))?
        }
        None => SlotConfig::default(),
    };
    config.validate().context("invalid machine configuration")
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Create logger
    let level = Level::from_str(&args.log_level)
        .with_context(|| format!("invalid log level: {}", args.log_level))?;
    tracing_subscriber::fmt().with_max_level(level).init();

    // Build machine
    let config = load_config(args.config.as_ref())?;
    info!(
        rows = config.rows(),
        columns = config.columns(),
        max_lines = config.max_lines(),
        "loaded machine"
    );
    let machine = SlotMachine::new(config);

    if let Some(rounds) = args.rtp {
        let bet = machine
            .policy()
            .bet_spec(args.lines, args.bet, u64::MAX)
            .context("invalid wager")?;
        let report = rtp::simulate(&machine, &bet, rounds, args.seed)
            .context("simulation failed")?;
        println!(
            "{} rounds: wagered ${}, won ${}, RTP {:.4}, hit rate {:.4}",
            report.rounds,
            report.wagered,
            report.won,
            report.rtp(),
            report.hit_rate()
        );
        for (line, hits) in report.line_hits.iter().enumerate() {
            println!("  line {}: {} wins", line + 1, hits);
        }
        return Ok(());
    }

    // Reject a wager the machine can never accept before opening a session
    machine
        .policy()
        .check_lines(args.lines)
        .context("invalid line count")?;
    machine
        .policy()
        .check_bet_per_line(args.bet)
        .context("invalid bet per line")?;

    // Play session
    let mut session =
        Session::open(machine, 0, args.seed, args.deposit).context("deposit rejected")?;
    while session.can_afford(args.lines, args.bet)
        && args.rounds.map_or(true, |limit| session.rounds() < limit)
    {
        println!("Your current balance is ${}", session.balance());
        let outcome = session
            .spin(args.lines, args.bet)
            .context("round failed")?;
        if !args.quiet {
            print!("{}", outcome.arrangement);
        }
        println!(
            "You won ${} on lines {:?}",
            outcome.result.total_winnings, outcome.result.winning_lines
        );
    }

    println!(
        "Session over after {} rounds: balance ${}, wagered ${}, won ${}, RTP {:.4}",
        session.rounds(),
        session.balance(),
        session.total_wagered(),
        session.total_won(),
        session.rtp()
    );
    Ok(())
}
