//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use smartpaste_llm::ProviderKind;
use std::path::PathBuf;

/// Smart Paste - Fill form fields from pasted text.
#[derive(Debug, Parser)]
#[command(name = "smartpaste")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path (defaults to ~/.smartpaste/config.toml)
    #[arg(short, long, global = true, env = "SMARTPASTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract field values from text
    Extract(ExtractArgs),

    /// Print the JSON Schema compiled from a field list
    Fields(FieldsArgs),

    /// Print the effective configuration
    Config,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// JSON file holding the field descriptors
    #[arg(short, long)]
    pub fields: PathBuf,

    /// Text to extract from (reads stdin when neither --text nor --file is given)
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// File holding the text to extract from
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Provider override
    #[arg(short, long, value_enum)]
    pub provider: Option<ProviderArg>,

    /// Model override
    #[arg(short, long, env = "SMARTPASTE_MODEL")]
    pub model: Option<String>,

    /// Pretty-print the result
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the fields command.
#[derive(Debug, Parser)]
pub struct FieldsArgs {
    /// JSON file holding the field descriptors
    #[arg(short, long)]
    pub fields: PathBuf,
}

/// Provider options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ProviderArg {
    /// Hosted OpenAI API
    Openai,
    /// Local Ollama server
    Ollama,
    /// Canned empty replies, no network
    Mock,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Openai => ProviderKind::OpenAi,
            ProviderArg::Ollama => ProviderKind::Ollama,
            ProviderArg::Mock => ProviderKind::Mock,
        }
    }
}
