// src/main.rs

use std::env;
use std::path::Path;

use anyhow::Context;

use djilog_extract::constants::DEFAULT_LOG_PATH;
use djilog_extract::{count_lines, crate_version, DjiLog};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [input_file.csv]", args[0]);
        std::process::exit(1);
    }
    let input_file = args.get(1).map(String::as_str).unwrap_or(DEFAULT_LOG_PATH);
    let input_path = Path::new(input_file);

    log::info!("djilog_extract {} reading {}", crate_version(), input_path.display());

    let log = DjiLog::new(input_path).with_context(|| format!("cannot open log {}", input_file))?;
    let line_count = count_lines(log.path())?;
    println!("{}: {} lines", input_file, line_count);

    let poses = log.extract_6dof()?;
    println!("6-DoF pose samples:   {}", poses.nrows());

    let velocities = log.extract_vel()?;
    println!("Velocity samples:     {}", velocities.nrows());

    let rc = log.extract_rc()?;
    println!("RC channel samples:   {}", rc.nrows());

    let modes = log.extract_modes()?;
    println!("Flight mode rows:     {}", modes.nrows());

    let currents = log.extract_current()?;
    println!("Current samples:      {}", currents.nrows());

    let (vel_by_second, power_by_second) = log.extract_vel_power()?;
    println!(
        "Velocity/power keys:  {} / {}",
        vel_by_second.len(),
        power_by_second.len()
    );

    let times = log.extract_times()?;
    if let (Some(first), Some(last)) = (times.first(), times.last()) {
        println!("GPS time span:        {} .. {}", first[1], last[1]);
    }

    println!("Takeoffs:             {}", log.get_takeoffs()?);
    let transitions = log.count_flight_transitions()?;
    println!(
        "Transitions:          {} takeoffs, {} landings",
        transitions.takeoffs, transitions.landings
    );

    Ok(())
}

// src/main.rs
