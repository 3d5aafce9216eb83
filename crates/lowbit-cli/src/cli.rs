use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(visible_alias = "encode")]
    Hide(hide::HideArgs),
    #[command(visible_alias = "decode")]
    Unveil(unveil::UnveilArgs),
    Inspect(inspect::InspectArgs),
}
