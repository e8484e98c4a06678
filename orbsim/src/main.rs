use orbsim::{ScenarioConfig, Scenario, Trajectory};
use orbsim::{convergence_study, bench_rk4_step};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "orbsim", about = "Fixed-step RK4 satellite orbit propagator")]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "leo_boosted.yaml")]
    file_name: String,

    /// Write the trajectory as CSV (t,x,y,z,vx,vy,vz)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run a step-halving convergence study on the scenario
    #[arg(long)]
    convergence: bool,

    /// Number of step sizes in the convergence study
    #[arg(long, default_value_t = 3)]
    levels: usize,

    /// Time single RK4 steps for every force model
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn write_csv(path: &Path, traj: &Trajectory) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "t,x,y,z,vx,vy,vz")?;
    for (t, s) in traj.iter() {
        writeln!(out, "{},{},{},{},{},{},{}", t, s[0], s[1], s[2], s[3], s[4], s[5])?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let traj = scenario.run().context("propagation failed")?;

    if let Some(report) = scenario.report(&traj) {
        info!(
            samples = report.samples,
            final_time = report.final_time,
            energy_drift = report.energy_drift,
            min_radius = report.min_radius,
            max_radius = report.max_radius,
            "propagation complete"
        );
        if let (Some(measured), Some(analytic)) =
            (report.precession_rate, report.analytic_precession_rate)
        {
            info!(
                measured_deg_per_day = measured.to_degrees() * 86_400.0,
                analytic_deg_per_day = analytic.to_degrees() * 86_400.0,
                "nodal precession"
            );
        }
    } else {
        warn!("empty trajectory");
    }

    if let Some(path) = &args.output {
        write_csv(path, &traj)?;
        info!("trajectory written to {}", path.display());
    }

    if args.convergence {
        let rows = convergence_study(
            &scenario.engine.force_model,
            scenario.engine.span(),
            &scenario.initial_state,
            scenario.engine.h0,
            &scenario.parameters,
            args.levels,
        )?;
        println!("h,error_m,ratio");
        for row in rows {
            let ratio = row.ratio.map(|r| format!("{r:.2}")).unwrap_or_default();
            println!("{},{:.6e},{}", row.h, row.error, ratio);
        }
    }

    if args.bench {
        let _rows = bench_rk4_step(&scenario.initial_state, scenario.engine.h0, &scenario.parameters, 100_000);
    }

    Ok(())
}
