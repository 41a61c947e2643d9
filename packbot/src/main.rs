use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use knapsack_rs::io::ext_repr::{ExtPart, ExtSuitcase};
use knapsack_rs::solver::DPSolver;
use log::{LevelFilter, debug, info};
use packbot::io;
use packbot::io::cli::Cli;
use packbot::reduce::apply_reduction;

fn main() -> Result<()> {
    let args = Cli::parse();
    let log_level = match args.verbose {
        true => args.log_level.max(LevelFilter::Info),
        false => args.log_level,
    };
    io::init_logger(log_level)?;

    let ext_suitcase: ExtSuitcase = serde_json::from_str(&io::fetch_json(&args.suitcase_source)?)
        .with_context(|| format!("incorrect suitcase format: {}", args.suitcase_source))?;
    let ext_parts: Vec<ExtPart> = serde_json::from_str(&io::fetch_json(&args.parts_source)?)
        .with_context(|| format!("incorrect parts list format: {}", args.parts_source))?;

    if args.save_inputs {
        io::write_json(&ext_suitcase, Path::new("suitcase.json"))?;
        io::write_json(&ext_parts, Path::new("parts.json"))?;
    }

    let instance = knapsack_rs::io::import(&ext_suitcase, &ext_parts)?;
    let instance = apply_reduction(instance, args.reduction_factor as usize);

    info!(
        "[MAIN] suitcase volume: {} with #parts: {}",
        instance.capacity,
        instance.parts.len()
    );
    info!(
        "[MAIN] out of total part volume: {}",
        instance.total_part_volume()
    );
    debug!("[MAIN] parts: {:?}", instance.parts);

    let solver = DPSolver::new(instance);
    let solution = solver.solve();

    info!("[MAIN] indices: {:?}", solution.indices);
    info!(
        "[MAIN] used volume: {}/{}",
        solution.volume_used(&solver.instance),
        solver.instance.capacity
    );

    let report = knapsack_rs::io::export(&solver.instance, &solution);
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
