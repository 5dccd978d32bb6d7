// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use clap::Parser;
use fixmatrix_bench::cases::{Inputs, CASES};
use fixmatrix_bench::{measure, InstantTiming, Report};
use fixmatrix_kernel::digest::StateDigest;
use std::hint::black_box;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fixmatrix-bench")]
#[command(about = "Times the fixed-point kernels and prints a determinism digest", long_about = None)]
struct Cli {
    /// Timed runs per benchmark; the fastest is reported.
    #[arg(long, short, default_value_t = 100)]
    iterations: u32,

    /// Only run benchmarks whose name contains this string.
    #[arg(long, short)]
    filter: Option<String>,

    /// Number of generated operands per benchmark.
    #[arg(long, default_value_t = 64)]
    inputs: usize,

    /// Seed for the operand generator.
    #[arg(long, default_value_t = 0x5EED)]
    seed: u64,

    /// Print JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "fixmatrix_bench=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let inputs = Inputs::generate(cli.inputs, cli.seed)?;

    let mut timer = InstantTiming::default();
    let mut report = Report::default();
    let mut digest = StateDigest::new();

    let selected = CASES.iter().filter(|case| match &cli.filter {
        Some(filter) => case.name.contains(filter.as_str()),
        None => true,
    });

    for case in selected {
        tracing::info!(name = case.name, "running benchmark");
        let cycles = measure(&mut timer, cli.iterations, || {
            black_box((case.run)(black_box(&inputs)));
        });
        report.print_timing(case.name, cycles, cli.iterations);
        (case.run)(&inputs).feed(&mut digest);
    }

    if report.records.is_empty() {
        anyhow::bail!("no benchmark matches filter {:?}", cli.filter);
    }

    report.set_digest(&digest.finalize());

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.to_table());
        println!("digest: {}", report.digest);
    }

    Ok(())
}
