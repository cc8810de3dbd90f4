// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use pendulum::{core::Discipline, event::Event, logger::SystemdLogger, Runtime};

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Double pendulum pose daemon", long_about = None)]
struct Args {
    /// Configuration file.
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Event script to replay.
    #[arg(value_name = "SCRIPT", value_hint = ValueHint::FilePath)]
    script: PathBuf,

    /// Posing discipline (FK or IK).
    #[arg(short, long)]
    discipline: Option<Discipline>,

    /// Run as systemd service.
    #[arg(long)]
    systemd: bool,

    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.systemd {
        log::LevelFilter::Info
    } else {
        match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };

    if args.systemd {
        SystemdLogger::init(log_level)?;
    } else {
        let mut log_config = simplelog::ConfigBuilder::new();
        log_config.set_time_offset_to_local().ok();
        log_config.set_time_format_rfc2822();
        log_config.set_target_level(log::LevelFilter::Off);
        log_config.set_location_level(log::LevelFilter::Off);

        simplelog::TermLogger::init(
            log_level,
            log_config.build(),
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )?;
    }

    let mut search_paths = vec![PathBuf::from(pendulum::consts::CONFIG_PATH_GLOBAL)];
    search_paths.push(std::env::current_dir()?.join(pendulum::consts::CONFIG_FILE_LOCAL));
    if let Some(config) = args.config {
        if !config.exists() {
            return Err(anyhow::anyhow!("configuration {} not found", config.display()));
        }
        search_paths = vec![config];
    }

    let mut config = pendulum::Config::try_from_file(search_paths)?;
    if let Some(discipline) = args.discipline {
        config.discipline = discipline;
    }

    log::debug!("Pendulum runtime {}", pendulum::consts::VERSION);
    log::trace!("{}", config);

    let script = std::fs::read_to_string(&args.script)?;
    let events: Vec<Event> = serde_json::from_str(&script)?;

    log::info!(
        "Replaying {} events from {}",
        events.len(),
        args.script.display()
    );

    replay(Runtime::from_config(&config)?, events, config.frame_interval()).await
}

/// Replay the events, one per frame, while the frame clock ticks the animation.
async fn replay(
    mut runtime: Runtime,
    events: Vec<Event>,
    frame_interval: std::time::Duration,
) -> anyhow::Result<()> {
    let start = tokio::time::Instant::now();
    let mut interval = tokio::time::interval(frame_interval);

    for event in events {
        interval.tick().await;

        let timestamp = start.elapsed().as_secs_f64() * 1_000.0;
        runtime.tick(timestamp);
        runtime.dispatch(event);

        let pose = runtime.current_pose();
        let tip = pose.tip().to_cartesian();
        log::debug!(
            "{:8.2}ms {} Tip=({:.2}, {:.2})",
            timestamp,
            pose,
            tip.x,
            tip.y
        );
    }

    let pose = runtime.current_pose();
    log::info!("Final pose: {}", pose);

    println!("{}", serde_json::to_string_pretty(&pose)?);

    Ok(())
}
