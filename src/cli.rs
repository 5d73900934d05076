use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "class-locator")]
#[command(about = "Locate the directory or archive a classpath resource is loaded from")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Classpath to search; defaults to $CLASSPATH
    #[arg(long, value_name = "CLASSPATH", global = true)]
    pub cp: Option<OsString>,

    /// Add every jar/zip under DIR to the classpath
    #[arg(long, value_name = "DIR", global = true)]
    pub scan: Vec<PathBuf>,

    /// Add every jar/zip in the local Maven repository to the classpath
    #[arg(long, global = true)]
    pub m2: bool,

    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Where the first visible copy of RESOURCE comes from
    Source { resource: String },
    /// Where every visible copy of RESOURCE comes from
    Sources { resource: String },
    /// The first of CLASS... that can be found, and where
    Find {
        #[arg(required = true)]
        class_names: Vec<String>,
    },
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}
