use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fnd", about = "Decode structured submission file names")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a file name into its fields
    Decode(DecodeArgs),
    /// Show the fields and compiled rule of the submission schema
    Schema(SchemaArgs),
}

#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    /// File name to decode (not read from disk)
    pub filename: String,

    /// Require the whole file name to match
    #[arg(short, long)]
    pub anchored: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(clap::Args, Debug)]
pub struct SchemaArgs {
    /// Show the anchored variant of the rule
    #[arg(short, long)]
    pub anchored: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}
