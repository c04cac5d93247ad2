//! CLI interface for stratgraph
//!
//! Provides subcommands for:
//! - `catalog`: List the component palette
//! - `quick`: Build a strategy from the guided template
//! - `check`: Audit a saved strategy configuration
//! - `demo`: Walk through a full design, save and progress session
//! - `config`: Show configuration

mod catalog;
mod check;
mod demo;
mod quick;

pub use catalog::CatalogArgs;
pub use check::{check_document, CheckArgs, CheckReport};
pub use demo::{DemoArgs, DemoSummary};
pub use quick::{IndicatorArg, QuickArgs};

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stratgraph")]
#[command(about = "Visual trading strategy graph builder")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available components
    Catalog(CatalogArgs),
    /// Build a strategy from the quick template
    Quick(QuickArgs),
    /// Audit a strategy configuration file
    Check(CheckArgs),
    /// Run an end-to-end in-memory session
    Demo(DemoArgs),
    /// Show configuration
    Config,
}
