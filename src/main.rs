use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use memsim::common::types::{DEFAULT_RANDOM_SEED, PAGE_OFFSET_BITS};
use memsim::simulator::{AccessEvent, AccessOutcome, SimulationConfig, Simulator};
use memsim::trace::{AccessKind, TraceReader};
use memsim::ReplacementPolicy;

#[derive(Parser)]
#[command(author, version, about = "Memsim - simulate page replacement over a memory trace")]
struct Cli {
    /// Trace file with one `<hex address> <R|W>` entry per line
    trace: PathBuf,

    /// Number of physical frames
    frames: usize,

    /// Replacement algorithm
    policy: ReplacementPolicy,

    /// Output mode
    mode: Mode,

    /// Seed for the random replacement policy
    #[arg(long, default_value_t = DEFAULT_RANDOM_SEED)]
    seed: u64,

    /// Page offset width in bits
    #[arg(long, default_value_t = PAGE_OFFSET_BITS)]
    page_bits: u32,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Quiet,
    Debug,
}

fn print_event(event: &AccessEvent) {
    match event.outcome {
        AccessOutcome::Hit(_) => {}
        AccessOutcome::Allocated(_) => println!("Page fault {:8} ", event.page_number),
        AccessOutcome::Evicted(victim) => {
            println!("Page fault {:8} ", event.page_number);
            if victim.dirty {
                println!("Disk write {:8} ", victim.page_number);
            } else {
                println!("Discard    {:8} ", victim.page_number);
            }
        }
    }

    match event.kind {
        AccessKind::Read => println!("reading    {:8} ", event.page_number),
        AccessKind::Write => println!("writing    {:8} ", event.page_number),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.frames < 1 {
        bail!("Frame number must be at least 1");
    }

    let config = SimulationConfig {
        frame_count: cli.frames,
        policy: cli.policy,
        page_offset_bits: cli.page_bits,
        seed: cli.seed,
    };

    let trace = TraceReader::open(&cli.trace)
        .with_context(|| format!("Cannot open trace file {}", cli.trace.display()))?;
    let mut simulator = Simulator::new(config).context("Cannot create MMU")?;

    let debug = cli.mode == Mode::Debug;
    let stats = simulator.run_with(trace, |event| {
        if debug {
            print_event(event);
        }
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{}", stats);
    }

    Ok(())
}
