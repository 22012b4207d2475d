//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use crate::resources::ResourceTab;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-match")]
#[command(about = "Match your resume's skills against a job description")]
#[command(long_about = "Upload a resume and a job description to a skill-matching service, then review the match score, skill breakdown and suggestions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze how well a resume matches a job description
    Analyze {
        /// Path to resume file (PDF, DOC, DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, DOC, DOCX)
        #[arg(short, long)]
        job: PathBuf,

        /// Base URL of the analysis service
        #[arg(short, long)]
        backend_url: Option<String>,

        /// Show the full skill lists
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Browse interview tips, practice questions and brain teasers
    Resources {
        /// Section to show: tips, questions, brainteasers
        #[arg(short, long, default_value = "tips")]
        tab: String,

        /// Expand an item by its number (repeatable)
        #[arg(short, long)]
        expand: Vec<usize>,

        /// Expand every item
        #[arg(short, long)]
        all: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "backend.base_url")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

pub fn parse_resource_tab(tab: &str) -> Result<ResourceTab, String> {
    match tab.to_lowercase().as_str() {
        "tips" => Ok(ResourceTab::Tips),
        "questions" => Ok(ResourceTab::Questions),
        "brainteasers" | "brain-teasers" | "teasers" => Ok(ResourceTab::Brainteasers),
        _ => Err(format!(
            "Invalid resource section: {}. Supported: tips, questions, brainteasers",
            tab
        )),
    }
}
