use solarsim::{bench_step, ConsoleDisplay, DisplayInfo, Simulator};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Gravitational simulation of a small set of celestial bodies")]
struct Args {
    /// Scenario preset file
    #[arg(short, long, default_value = "scenarios/solar_system.yaml")]
    file: PathBuf,

    /// Simulation to load from the preset file
    #[arg(short, long, default_value = "default")]
    simulation: String,

    /// Stop after this many computed ticks
    #[arg(short, long)]
    max_iterations: Option<u64>,

    /// Print a frame every N ticks
    #[arg(short, long, default_value_t = 100)]
    report_every: u64,

    /// Show body names in frames
    #[arg(long)]
    names: bool,

    /// Show body positions in frames
    #[arg(long)]
    positions: bool,

    /// Show body velocities in frames
    #[arg(long)]
    velocities: bool,

    /// Store the loaded simulation under a new name and exit
    #[arg(long)]
    save_as: Option<String>,

    /// Time engine steps for growing body counts and exit
    #[arg(long)]
    bench: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.bench {
        bench_step();
        return Ok(());
    }

    let mut simulator = Simulator::load(&args.file, &args.simulation)
        .with_context(|| format!("failed to load simulation {:?} from {}", args.simulation, args.file.display()))?
        .with_max_iterations(args.max_iterations);

    if let Some(name) = args.save_as {
        simulator.save_as(&name).context("failed to save simulation")?;
        return Ok(());
    }

    let info = DisplayInfo {
        names: args.names,
        positions: args.positions,
        velocities: args.velocities,
    };
    let mut display = ConsoleDisplay::stdout(args.report_every).with_info(info);
    simulator.run(&mut display)?;

    Ok(())
}
