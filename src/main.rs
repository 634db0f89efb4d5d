use std::path::PathBuf;

use ascent_simulation::*;
use clap::Parser;

/// Staged ascent followed by a two-burn orbital transfer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Mission file (TOML). The built-in reference mission is used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the exported CSV traces.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Skip writing CSV files.
    #[arg(long)]
    no_export: bool,

    /// Seconds of simulated time between telemetry log lines.
    #[arg(long, default_value_t = 30.0)]
    log_interval: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mission = match &args.config {
        Some(path) => MissionConfig::load(path)?,
        None => MissionConfig::default(),
    };

    let ascent = mission
        .ascent_simulation()
        .run(mission.initial_state(), &mission.stages)?;

    let telemetry = Telemetry::from_trace(&ascent, args.log_interval);
    telemetry.display_data();

    let altitudes = mission.transfer.altitudes;
    let plan = plan_transfer(
        altitudes.initial_orbit,
        altitudes.apoapsis,
        altitudes.final_orbit,
        &mission.transfer.body,
    )?;
    let transfer = simulate_transfer(&plan, mission.transfer.dt, &mission.transfer.vehicle)?;

    TransferReport::new(&plan, &transfer).display_data();

    if !args.no_export {
        let ascent_path = args.output_dir.join("ascent.csv");
        let transfer_path = args.output_dir.join("transfer.csv");
        write_csv_file(&ascent, &ascent_path)?;
        write_csv_file(&transfer, &transfer_path)?;
        println!(
            "\nTraces written to {} and {}",
            ascent_path.display(),
            transfer_path.display()
        );
    }

    Ok(())
}
