use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::convert::QType;

#[derive(Debug, Parser)]
#[command(
    name = "quijy",
    about = "quijy: build, tensor, and pad quantum states and operators",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct QuijyCli {
    /// Global: path to config (TOML); default: ~/.quijy/config.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: digits after the decimal point (overrides config)
    #[arg(long = "precision", value_name = "N", global = true)]
    pub precision: Option<usize>,

    /// Global: write the result to FILE instead of stdout
    #[arg(short = 'o', long = "out", value_name = "FILE", global = true)]
    pub out: Option<PathBuf>,

    /// Global: snap entries below the configured tolerance to zero before printing
    #[arg(long = "chop", action = ArgAction::SetTrue, global = true)]
    pub chop: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Tensor product of matrices, in order
    ///
    /// Examples:
    ///   quijy kron x i x i
    ///   quijy kron '[[1,0],[0,0]]' h
    Kron {
        /// Gate name (x, y, z, i, h) or JSON literal
        #[arg(value_name = "MAT", required = true, num_args = 1..)]
        mats: Vec<String>,
    },

    /// A matrix tensored with itself PWR times
    Kronpow {
        #[arg(value_name = "MAT")]
        mat: String,
        #[arg(value_name = "PWR")]
        pwr: usize,
    },

    /// Pad an operator with identities to act on chosen subsystems
    ///
    /// Example:
    ///   quijy eyepad x --dims 2,2,2,2 --inds 0,2
    Eyepad {
        #[arg(value_name = "MAT")]
        mat: String,
        /// Subsystem dimensions, comma separated
        #[arg(long = "dims", value_delimiter = ',', required = true)]
        dims: Vec<usize>,
        /// Ascending subsystem indices to act on, comma separated
        #[arg(long = "inds", value_delimiter = ',', required = true)]
        inds: Vec<usize>,
        /// Sparse padding identities (default: follow the operand)
        #[arg(long = "sparse", action = ArgAction::SetTrue, conflicts_with = "dense")]
        sparse: bool,
        /// Dense padding identities; a sparse operand still gives sparse output
        #[arg(long = "dense", action = ArgAction::SetTrue)]
        dense: bool,
        /// Reject layouts whose selected dimensions do not match the operator
        #[arg(long = "check", action = ArgAction::SetTrue)]
        check: bool,
    },

    /// Convert raw data into a ket, bra, or density operator
    Qonvert {
        /// JSON literal: number, list, or list of lists
        #[arg(value_name = "DATA")]
        data: String,
        /// ket|k, bra|b, dop|op|rho|r|d|p
        #[arg(long = "qtype", value_name = "QTYPE")]
        qtype: Option<QType>,
        #[arg(long = "sparse", action = ArgAction::SetTrue)]
        sparse: bool,
        #[arg(long = "normalize", action = ArgAction::SetTrue)]
        normalize: bool,
    },

    /// Shape, classification, hermiticity, trace, and qubit count
    Info {
        #[arg(value_name = "MAT")]
        mat: String,
    },
}
