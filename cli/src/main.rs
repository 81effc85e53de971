//! CLI entrypoint for qa-drill
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use drill_application::{DrillSession, LineAcknowledgements, NoAcknowledgements, SessionConfig};
use drill_domain::{QuestionAnswerSet, Topic};
use drill_infrastructure::{ConfigLoader, FileConfig, TopicFileLoader};
use drill_presentation::{Cli, ConsoleFormatter, ProgressReporter};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines reach the file on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting qa-drill");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&cli, &mut config);
    config.validate()?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("Effective configuration:");
        println!("{}", config.to_toml()?);
        return Ok(());
    }

    let Some(path) = cli.file.as_deref() else {
        bail!("A question file is required. See --help.");
    };

    // === Topic ===
    let topic = TopicFileLoader::new(config.parsing_parameters())
        .load(path)
        .await?;
    let session_config = config.session_config();

    if session_config.mode.is_summary() {
        print_summary(&topic, session_config.color);
        return Ok(());
    }

    info!(
        "Drilling on {}",
        ConsoleFormatter::format_selection(cli.list.as_slice())
    );
    let questions = topic.build_question_set(cli.list.as_slice())?;

    run_session(questions, session_config).await
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr, or to `log_file` when given, so they never mix with
/// the transcript on stdout.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Command-line flags take precedence over every configuration source
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if cli.interactive {
        config.session.interactive = true;
    }
    if let Some(wait_ms) = cli.wait_ms {
        config.session.wait_ms = wait_ms;
    }
    if let Some(mode) = cli.requested_mode() {
        config.session.mode = mode;
    }
    if cli.reversed {
        config.session.reversed = true;
    }
    if let Some(limit) = cli.limit {
        config.session.limit = limit;
    }
    if let Some(seed) = cli.seed {
        config.session.seed = Some(seed);
    }
    if let Some(announce) = &cli.announce {
        config.parsing.announce = announce.clone();
    }
    if let Some(separator) = &cli.separator {
        config.parsing.separator = separator.clone();
    }
    if cli.no_color {
        config.output.color = false;
    }
}

fn print_summary(topic: &Topic, color: bool) {
    let names = topic.subsection_names();
    print!("{}", ConsoleFormatter::format_topic_summary(names.as_slice(), color));
}

async fn run_session(
    questions: QuestionAnswerSet,
    config: SessionConfig,
) -> Result<()> {
    let interactive = config.interactive;
    let session = DrillSession::new(questions, config)?;
    let progress = ProgressReporter::new();

    let output = if interactive {
        let mut acknowledgements = LineAcknowledgements::new(tokio::io::stdin());
        session
            .run_with_progress(&mut acknowledgements, tokio::io::stdout(), &progress)
            .await?
    } else {
        session
            .run_with_progress(&mut NoAcknowledgements, tokio::io::stdout(), &progress)
            .await?
    };

    let report = output.report;
    info!(
        "Session report: {} pair(s) emitted, {} pass(es) completed of {} started, {} acknowledgement(s), limit reached: {}",
        report.pairs_emitted,
        report.passes_completed,
        progress.passes_seen(),
        report.acknowledgements_forwarded,
        report.publisher.limit_reached
    );

    Ok(())
}
