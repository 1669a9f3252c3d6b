use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::HumanCount;
use log::{LevelFilter, debug, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use photo_card_sync::{
    Cli, compute_delta, find_cross_duplicates, find_duplicates, report, scan, stage_delta,
};

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = ConfigBuilder::new()
        .set_time_format_custom(simplelog::format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        ))
        .build();
    TermLogger::init(level, config, TerminalMode::Mixed, ColorChoice::Auto)
        .context("Failed to initialize logger")?;

    info!("Starting photo-card-sync v{}", env!("CARGO_PKG_VERSION"));
    debug!("Command line arguments: {:?}", cli);

    let storage = scan(&cli.storage).context("Failed to scan the storage directory")?;
    let camera = scan(&cli.camera).context("Failed to scan the camera card")?;

    info!(
        "{} images in picture storage",
        HumanCount(storage.len() as u64)
    );
    info!("{} images in camera card", HumanCount(camera.len() as u64));

    let delta = compute_delta(&camera, &storage);
    println!("Files missing from the storage directory: {}", delta.len());

    if cli.verbose >= 2 && !delta.is_empty() {
        report::print_delta(&delta);
    }

    let staging_report = match &cli.staging {
        Some(root) => {
            fs::create_dir_all(root).with_context(|| {
                format!("Failed to create the staging directory '{}'", root.display())
            })?;
            Some(stage_delta(&delta, root))
        }
        None => None,
    };

    let mut groups = Vec::new();
    if cli.check_storage {
        println!("Checking for duplicate photos in storage - this can be very slow...");
        let storage_groups = find_duplicates(&storage);
        println!("Duplicate pictures on the photo storage:");
        report::print_duplicate_groups(&storage_groups);
        groups.extend(storage_groups);
    }
    if cli.check_cross {
        println!("Checking for conflicts between the camera card and storage...");
        let cross_groups = find_cross_duplicates(&camera, &storage);
        report::print_duplicate_groups(&cross_groups);
        groups.extend(cross_groups);
    }

    report::print_failure_summary(&groups, staging_report.as_ref());

    info!(
        "Completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
