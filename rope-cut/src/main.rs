use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use rope_cut::Strategy;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Maximum product of segment lengths after cutting a rope at least once
#[derive(Parser, Debug)]
#[command(name = "rope-cut", version)]
struct Cli {
    /// table, closed-form or exhaustive
    #[arg(short, long, env = "ROPE_CUT_STRATEGY", default_value_t = Strategy::Table)]
    strategy: Strategy,

    /// also print the segments
    #[arg(long)]
    segments: bool,

    /// rope lengths, each at least 2
    #[arg(required = true, allow_negative_numbers = true)]
    lengths: Vec<i64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!(strategy = %cli.strategy, count = cli.lengths.len(), "cutting ropes");

    for n in cli.lengths {
        let cut = cli
            .strategy
            .solve(n)
            .with_context(|| format!("cutting rope of length {n} with {}", cli.strategy))?;
        if cli.segments {
            println!(
                "n={n} product={} segments={}",
                cut.product,
                cut.segments.iter().join("x")
            );
        } else {
            println!("n={n} product={}", cut.product);
        }
    }
    Ok(())
}
