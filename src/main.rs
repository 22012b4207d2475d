//! Resume match: compare a resume against a job description using a remote skill-matching service

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_match::analysis::{AnalysisOrchestrator, AnalysisState, HttpTransport};
use resume_match::cli::{self, Cli, Commands, ConfigAction};
use resume_match::config::{Config, OutputFormat};
use resume_match::input::{DocumentFile, DocumentSelector, SlotKind};
use resume_match::output::{AnalysisReport, ReportGenerator, ReportMetadata};
use resume_match::resources::ResourceBrowser;
use resume_match::{Result, ResumeMatchError};
use std::path::Path;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    match run_command(cli.command, config, &config_path).await {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            error!("Command failed: {}", e);
            process::exit(1);
        }
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<i32> {
    match command {
        Commands::Analyze {
            resume,
            job,
            backend_url,
            detailed,
            output,
        } => {
            let format = match output {
                Some(output) => {
                    cli::parse_output_format(&output).map_err(ResumeMatchError::InvalidInput)?
                }
                None => config.output.format,
            };
            let detailed = detailed || config.output.detailed;
            let backend_url = config.resolve_backend_url(backend_url.as_deref());

            analyze(&resume, &job, &backend_url, format, detailed, config.output.color_output).await
        }

        Commands::Resources { tab, expand, all } => {
            let tab = cli::parse_resource_tab(&tab).map_err(ResumeMatchError::InvalidInput)?;
            let mut browser = ResourceBrowser::new(tab);

            if all {
                browser.expand_all();
            }
            for index in expand {
                // Items are numbered from 1 on screen
                if index == 0 || !browser.toggle(index - 1) {
                    return Err(ResumeMatchError::InvalidInput(format!(
                        "No item {} in {}",
                        index, tab
                    )));
                }
            }

            println!("📚 {}", browser.render());
            Ok(0)
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration ({})\n", config_path.display());
                    println!("Backend URL: {}", config.backend.base_url);
                    println!("Effective Backend URL: {}", config.resolve_backend_url(None));
                    println!("Output Format: {:?}", config.output.format);
                    println!("Detailed Output: {}", config.output.detailed);
                    println!("Color Output: {}", config.output.color_output);
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    Config::default().save_to(config_path)?;
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Set { key, value }) => {
                    config.set(&key, &value)?;
                    config.save_to(config_path)?;
                    println!("🔧 Set {} = {}", key, value);
                }
            }
            Ok(0)
        }
    }
}

async fn analyze(
    resume: &Path,
    job: &Path,
    backend_url: &str,
    format: OutputFormat,
    detailed: bool,
    use_colors: bool,
) -> Result<i32> {
    let console = format == OutputFormat::Console;
    info!("Starting resume match analysis against {}", backend_url);

    if console {
        println!("🚀 Resume match analysis");
        println!("📄 Resume: {}", resume.display());
        println!("💼 Job Description: {}", job.display());
    }

    // Both files go through the same type gate before anything is sent
    let mut selector = DocumentSelector::new();
    selector.assign(SlotKind::Resume, DocumentFile::from_path(resume).await?)?;
    selector.assign(SlotKind::JobDescription, DocumentFile::from_path(job).await?)?;

    let transport = HttpTransport::new(backend_url)?;
    let mut orchestrator = AnalysisOrchestrator::new();
    let submission = orchestrator.submit_from(&mut selector)?;
    let resume_name = submission.resume().name().to_string();
    let job_name = submission.job_description().name().to_string();

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.blue} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing your documents...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let completion = tokio::select! {
        completion = submission.dispatch(&transport) => Some(completion),
        _ = tokio::signal::ctrl_c() => None,
    };
    spinner.finish_and_clear();

    match completion {
        Some(completion) => {
            orchestrator.complete(completion);
        }
        None => {
            orchestrator.reset();
            println!("⚠️  Analysis cancelled");
            return Ok(130);
        }
    }

    match orchestrator.state() {
        AnalysisState::Success(result) => {
            let metadata = ReportMetadata::new(&resume_name, &job_name, backend_url);
            let report = AnalysisReport::new(result.clone(), metadata);
            let generator = ReportGenerator::new(use_colors, detailed);
            println!("{}", generator.generate(&report, format)?);
            Ok(0)
        }
        AnalysisState::Failure(reason) => {
            eprintln!("❌ {}", reason);
            eprintln!("💡 Check the files and the backend URL, then try again.");
            Ok(1)
        }
        other => Err(ResumeMatchError::InvalidInput(format!(
            "analysis ended in unexpected state: {}",
            other
        ))),
    }
}
