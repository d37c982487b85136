// SPDX-FileCopyrightText: Copyright © 2020-2025 Serpent OS Developers
//
// SPDX-License-Identifier: MPL-2.0

use std::{io, path::PathBuf};

use clap::{Args, Parser};
use rtkmon::Settings;
use thiserror::Error;
use tracing::debug;
use tracing_common::LogConfig;

mod replay;
mod show;

#[derive(Debug, Parser)]
#[command(name = "rtkmon", about = "Progress and diagnostic output for GNSS post-processing runs")]
pub struct Command {
    #[command(flatten)]
    pub global: Global,
    #[command(subcommand)]
    pub subcommand: Option<Subcommand>,
}

#[derive(Debug, Args)]
pub struct Global {
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Logging as <level>[:<format>][:<destination>], e.g. debug:json:/tmp/rtkmon.log"
    )]
    pub log: LogConfig,
    #[arg(short, long, global = true, help = "Read settings from this file instead of the user config")]
    pub config: Option<PathBuf>,
    #[arg(short = 'V', long, default_value = "false", global = true)]
    pub version: bool,
}

#[derive(Debug, clap::Subcommand)]
pub enum Subcommand {
    Replay(replay::Command),
    Show(show::Command),
}

pub fn process() -> Result<(), Error> {
    let Command { global, subcommand } = Command::parse();

    tracing_common::init_with_config(global.log).map_err(Error::Log)?;

    if global.version {
        println!("{} {}", rtkmon::NAME, env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let settings = Settings::load(global.config.as_deref())?;
    debug!(?settings, "Loaded settings");

    match subcommand {
        Some(Subcommand::Replay(command)) => replay::handle(command, settings)?,
        Some(Subcommand::Show(command)) => show::handle(command),
        None => (),
    }

    Ok(())
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("log output")]
    Log(#[source] io::Error),
    #[error("settings")]
    Config(#[from] config::Error),
    #[error("replay")]
    Replay(#[from] replay::Error),
}
