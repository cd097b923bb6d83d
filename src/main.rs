use gravsim::{Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file name, looked up under scenarios/
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Override the number of steps to run (default: until t_end)
    #[arg(long)]
    steps: Option<u64>,

    /// Run the force/step benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        gravsim::bench_gravity();
        gravsim::bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build(scenario_cfg)?;

    info!(
        "loaded {}: {} bodies, h0 = {} s, t_end = {} s",
        args.file_name,
        scenario.system.len(),
        scenario.parameters.h0,
        scenario.parameters.t_end
    );

    let mut steps = 0u64;
    loop {
        match args.steps {
            Some(max) if steps >= max => break,
            None if scenario.finished() => break,
            _ => {}
        }
        scenario.step()?;
        steps += 1;
        if steps % 100 == 0 {
            debug!("t = {:.3e} s after {steps} steps", scenario.system.t);
        }
    }

    info!("done: {steps} steps, t = {:.6e} s", scenario.system.t);
    for body in scenario.snapshot() {
        println!(
            "{}  x = ({:+.6e}, {:+.6e}) m  v = ({:+.6e}, {:+.6e}) m/s  m = {:.4e} kg",
            body.id, body.x.x, body.x.y, body.v.x, body.v.y, body.m
        );
    }

    Ok(())
}
