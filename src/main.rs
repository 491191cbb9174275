/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Main executable for pseudo-dojo-rs

use clap::Parser;
use pseudo_dojo_rs::cli::{run, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("pseudo-dojo-rs v{}: {:?}", pseudo_dojo_rs::VERSION, cli.command);
    run(cli)
}
