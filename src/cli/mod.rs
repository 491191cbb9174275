/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Command Line Interface (CLI) module
//!
//! This module provides a command-line interface for inspecting atomic
//! configurations and radial functions and for drawing AE vs PP figures.

use crate::atoms::{parse_orbital_token, AtomicConfiguration, QState};
use crate::plot::{plot_aepp, plot_logders, PlotConfig, RMax};
use crate::radial::{RadialFileConfig, RadialFunction, RadialWaveFunction, DEFAULT_SMALL_TOL};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pseudo-dojo", version, about = "Atomic configurations and radial functions for pseudopotential validation")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a configuration such as "[He] 2s2 2p3"
    Config {
        /// Atomic number
        z: u32,
        /// Configuration in spectroscopic notation
        text: String,
        /// Print the tagged JSON dictionary
        #[arg(long)]
        json: bool,
        /// Print the APE input lines
        #[arg(long)]
        ape: bool,
    },

    /// Show the neutral reference configuration of an element
    Neutral {
        /// Chemical symbol or atomic number
        symbol: String,
    },

    /// Summarize a radial function stored in a text file
    Radial {
        file: PathBuf,
        /// Mesh and value columns, e.g. 0,2
        #[arg(long, value_parser = parse_columns, default_value = "0,1")]
        cols: (usize, usize),
        /// Drop the mesh points beyond this radius (Bohr)
        #[arg(long)]
        rmax: Option<f64>,
        /// Tolerance used to locate the tail of the function
        #[arg(long, default_value_t = DEFAULT_SMALL_TOL)]
        tol: f64,
        /// Orbital described by the function, e.g. 2p3, to report boundedness
        #[arg(long)]
        state: Option<String>,
    },

    /// Plot AE wavefunctions, optionally against PP wavefunctions
    PlotAepp {
        /// AE wavefunction as FILE:STATE, e.g. ae_2p.dat:2p3
        #[arg(long = "ae", required = true)]
        ae: Vec<String>,
        /// PP wavefunction as FILE:STATE
        #[arg(long = "pp")]
        pp: Vec<String>,
        /// Outermost radius to plot (Bohr)
        #[arg(long)]
        rmax: Option<f64>,
        #[arg(long)]
        title: Option<String>,
        /// Output figure (.png or .svg)
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Plot AE vs PP logarithmic derivatives
    PlotLogders {
        /// AE logarithmic derivative as FILE:STATE
        #[arg(long = "ae", required = true)]
        ae: Vec<String>,
        /// PP logarithmic derivative as FILE:STATE
        #[arg(long = "pp", required = true)]
        pp: Vec<String>,
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Parse a column pair such as `0,2`
fn parse_columns(arg: &str) -> Result<(usize, usize), String> {
    let (mesh, value) = arg
        .split_once(',')
        .ok_or_else(|| format!("expected MESH,VALUE columns, got '{}'", arg))?;
    let column = |text: &str| {
        text.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid column '{}': {}", text, e))
    };
    Ok((column(mesh)?, column(value)?))
}

/// Split a FILE:STATE argument
pub fn parse_file_state(arg: &str) -> anyhow::Result<(PathBuf, QState)> {
    let (file, state) = arg
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("expected FILE:STATE, got '{}'", arg))?;
    let state = parse_orbital_token(state)?;
    Ok((PathBuf::from(file), state))
}

fn load_wavefunctions(args: &[String]) -> anyhow::Result<Vec<RadialWaveFunction>> {
    args.iter()
        .map(|arg| {
            let (path, state) = parse_file_state(arg)?;
            RadialWaveFunction::from_file(state, &path, &RadialFileConfig::default())
                .with_context(|| format!("loading {}", path.display()))
        })
        .collect()
}

fn load_logders(args: &[String]) -> anyhow::Result<Vec<(QState, RadialFunction)>> {
    args.iter()
        .map(|arg| {
            let (path, state) = parse_file_state(arg)?;
            let func = RadialFunction::from_file(&path, &RadialFileConfig::default())
                .with_context(|| format!("loading {}", path.display()))?;
            Ok((state, func))
        })
        .collect()
}

fn print_configuration(config: &AtomicConfiguration) {
    println!("{}", config);
    println!("Symbol:    {}", config.symbol().unwrap_or("?"));
    println!("Charge:    {}", config.echarge());
    println!("Neutral:   {}", config.is_neutral());
    println!("Spin mode: {}", config.spin_mode());
}

/// Keep the mesh points up to the last one not larger than `rmax`
fn truncate(func: RadialFunction, rmax: Option<f64>) -> anyhow::Result<RadialFunction> {
    match rmax {
        Some(r) if r < func.rmax() => {
            let end = func.ifromr(r)? + 1;
            let (rmesh, values) = func.slice(0..end);
            Ok(RadialFunction::new(func.name(), rmesh.to_owned(), values.to_owned())?)
        }
        _ => Ok(func),
    }
}

/// Summary lines of a radial function
///
/// Spline-based quantities need at least four increasing mesh points; when
/// the spline cannot be built the error is reported in place of the value.
fn radial_summary(func: RadialFunction, tol: f64, state: Option<QState>) -> Vec<String> {
    let (imin, imax) = func.minmax_ridx();
    let mut lines = vec![
        func.to_string(),
        format!("Points:    {}", func.rsize()),
        format!("rmax:      {}", func.rmax()),
        format!("Minimum:   {} at r = {}", func.values()[imin], func.rmesh()[imin]),
        format!("Maximum:   {} at r = {}", func.values()[imax], func.rmesh()[imax]),
        format!("Nodes:     {}", func.inodes().len()),
        format!("ir_small:  {}", func.ir_small(tol)),
    ];

    match func.roots() {
        Ok(roots) => lines.push(format!("Roots:     {:?}", roots)),
        Err(err) => {
            log::warn!("No spline for {}: {}", func.name(), err);
            lines.push(format!("Roots:     unavailable ({})", err));
        }
    }
    match func.integral(None, None) {
        Ok(norm) => lines.push(format!("Integral:  {}", norm)),
        Err(err) => lines.push(format!("Integral:  unavailable ({})", err)),
    }

    if let Some(state) = state {
        let wf = RadialWaveFunction::from_function(state, func);
        lines.push(format!("Bound:     {}", wf.is_bound()));
    }
    lines
}

/// Execute a parsed command line
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Config { z, text, json, ape } => {
            let config = AtomicConfiguration::from_string(z, &text, false, false)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config.to_dict()?)?);
            } else if ape {
                for line in config.to_ape_input()? {
                    println!("{}", line);
                }
            } else {
                print_configuration(&config);
            }
        }
        Commands::Neutral { symbol } => {
            let config = AtomicConfiguration::neutral_from_symbol(&symbol)?;
            print_configuration(&config);
        }
        Commands::Radial {
            file,
            cols,
            rmax,
            tol,
            state,
        } => {
            let state = state.as_deref().map(parse_orbital_token).transpose()?;
            let file_config = RadialFileConfig::with_columns(cols.0, cols.1);
            let func = truncate(RadialFunction::from_file(&file, &file_config)?, rmax)?;
            for line in radial_summary(func, tol, state) {
                println!("{}", line);
            }
        }
        Commands::PlotAepp {
            ae,
            pp,
            rmax,
            title,
            output,
        } => {
            let ae_funcs = load_wavefunctions(&ae)?;
            let pp_funcs = load_wavefunctions(&pp)?;
            let rmax = rmax.map(RMax::Uniform).unwrap_or_default();
            let config = PlotConfig {
                title,
                ..PlotConfig::default()
            };
            let pp_funcs = (!pp_funcs.is_empty()).then_some(pp_funcs.as_slice());
            plot_aepp(&ae_funcs, pp_funcs, &rmax, &output, &config)?;
        }
        Commands::PlotLogders { ae, pp, output } => {
            let ae_logders = load_logders(&ae)?;
            let pp_logders = load_logders(&pp)?;
            plot_logders(&ae_logders, &pp_logders, &output, &PlotConfig::default())?;
        }
    }
    Ok(())
}
