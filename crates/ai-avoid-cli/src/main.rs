//! Avoid CLI - threat-avoidance scenario runner.
//!
//! Single binary that provides:
//! - `avoid run` - simulate a scenario and log every avoidance decision
//! - `avoid probe` - classify the candidate set around the agent's start position
//! - `avoid init` - write a starter scenario

mod scenario;

use std::path::{Path, PathBuf};

use ai_avoid::{Avoider, CandidateProbe, TickOutcome};
use ai_core::{TickContext, Vec3};
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use scenario::Scenario;

#[derive(Parser)]
#[command(name = "avoid")]
#[command(about = "Threat-avoidance scenario runner", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a scenario
    Run {
        /// Scenario file (YAML)
        scenario: PathBuf,

        /// Override the simulated duration in seconds
        #[arg(long)]
        duration: Option<f32>,

        /// Override the fixed step in seconds
        #[arg(long)]
        dt: Option<f32>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify candidates around the agent's start position
    Probe {
        /// Scenario file (YAML)
        scenario: PathBuf,

        /// Print probes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a starter scenario
    Init {
        /// Output path
        #[arg(default_value = "scenario.yaml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Serialize)]
struct Decision {
    tick: u64,
    time: f32,
    #[serde(flatten)]
    outcome: TickOutcome,
}

#[derive(Debug, Default, Serialize)]
struct RunReport {
    checks: usize,
    redirects: usize,
    decisions: Vec<Decision>,
    final_position: Vec3,
    final_safe: Option<bool>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            scenario,
            duration,
            dt,
            json,
        } => run_scenario(&scenario, duration, dt, json),
        Commands::Probe { scenario, json } => probe_scenario(&scenario, json),
        Commands::Init { path, force } => init_scenario(&path, force),
    }
}

fn run_scenario(path: &Path, duration: Option<f32>, dt: Option<f32>, json: bool) -> Result<()> {
    let mut scenario = Scenario::load(path)?;
    if let Some(duration) = duration {
        scenario.duration = duration;
    }
    if let Some(dt) = dt {
        scenario.dt = dt;
    }
    if scenario.dt.is_nan() || scenario.dt <= 0.0 {
        bail!("dt must be > 0 (got {})", scenario.dt);
    }

    tracing::info!(
        scenario = %path.display(),
        duration = scenario.duration,
        dt = scenario.dt,
        "Starting scenario"
    );

    let mut scene = scenario.build_scene();
    let owner = scenario.agent.id;
    let mut avoider =
        Avoider::initialize(owner, Some(scenario.threat.id), scenario.config, &scene)?;
    avoider.start();

    let mut report = RunReport::default();
    let mut ctx = TickContext::new(0, scenario.dt);
    for _ in 0..scenario.steps() {
        if let Some(outcome) = avoider.update(&ctx, &mut scene) {
            report.checks += 1;
            if outcome.issued_command() {
                report.redirects += 1;
            }
            report.decisions.push(Decision {
                tick: ctx.tick,
                time: ctx.tick as f32 * ctx.dt_seconds,
                outcome,
            });
        }
        scene.step(ctx.dt_seconds);
        ctx = ctx.next();
    }
    avoider.stop();

    if let Some(agent) = scene.agent(owner) {
        report.final_position = agent.position;
        report.final_safe = avoider.is_position_safe(agent.position, &scene);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    for decision in report.decisions.iter().filter(|d| d.outcome.issued_command()) {
        if let TickOutcome::Redirected {
            candidate,
            destination,
        } = decision.outcome
        {
            println!(
                "t={:>6.2}s  candidate {:>3} -> ({:.2}, {:.2}, {:.2})",
                decision.time, candidate, destination.x, destination.y, destination.z
            );
        }
    }
    println!();
    println!("Checks:    {}", report.checks);
    println!("Redirects: {}", report.redirects);
    println!(
        "Final:     ({:.2}, {:.2}, {:.2}) {}",
        report.final_position.x,
        report.final_position.y,
        report.final_position.z,
        match report.final_safe {
            Some(true) => "covered",
            Some(false) => "exposed",
            None => "threat missing",
        }
    );
}

fn probe_scenario(path: &Path, json: bool) -> Result<()> {
    let mut scenario = Scenario::load(path)?;
    scenario.config.show_debug = true;

    let scene = scenario.build_scene();
    let mut avoider = Avoider::initialize(
        scenario.agent.id,
        Some(scenario.threat.id),
        scenario.config,
        &scene,
    )?;
    let probes = avoider.debug_probes(&scene);

    if json {
        println!("{}", serde_json::to_string_pretty(&probes)?);
    } else {
        print_probes(&probes);
    }
    Ok(())
}

fn print_probes(probes: &[CandidateProbe]) {
    for probe in probes {
        println!(
            "{:>3}  ({:>7.2}, {:>7.2}, {:>7.2})  {}",
            probe.index,
            probe.position.x,
            probe.position.y,
            probe.position.z,
            if probe.safe { "safe" } else { "exposed" }
        );
    }
    let safe = probes.iter().filter(|p| p.safe).count();
    println!();
    println!("{safe}/{} candidates safe", probes.len());
}

fn init_scenario(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Scenario::default().save(path)?;
    tracing::info!(path = %path.display(), "Wrote starter scenario");
    Ok(())
}
