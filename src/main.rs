use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

mod cli;
mod config;
mod semantic;
#[cfg(test)]
mod tests;
mod transfer;

use cli::{CourseArgs, Command};
use config::Config;
use transfer::{CourseInputs, TransferError, TransferReport, TransferService};

fn main() -> ExitCode {
    let args = cli::Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code(&err)
        }
    }
}

/// 2 for bad input, 1 for everything else.
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<TransferError>() {
        Some(e) if e.is_validation() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn init_logging(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: cli::Args) -> Result<()> {
    let config = Config::load_with(&Config::default_base_path()?)?;
    init_logging(&config.log_level);

    match args.command {
        #[cfg(feature = "markdown-docs")]
        Command::MarkdownDocs {} => {
            clap_markdown::print_help_markdown::<cli::Args>();
            Ok(())
        }

        Command::Compare {
            courses,
            json,
            no_prompt,
            model,
        } => {
            let mut embedder = config.embedder.clone();
            if let Some(model) = model {
                embedder.model = model;
            }

            let interactive = !no_prompt && std::io::stdin().is_terminal();
            let inputs = collect_inputs(courses, interactive)?;

            let service = TransferService::new(embedder, config.base_path().to_path_buf());
            log::debug!("using embedding model {}", service.model_name());

            let report = service.compare(&inputs)?;
            print_report(&report, json)
        }

        Command::Score {
            description_similarity,
            title_similarity,
            json,
        } => {
            let description_similarity =
                transfer::validate_similarity("description similarity", description_similarity)?;
            let title_similarity =
                transfer::validate_similarity("title similarity", title_similarity)?;

            let report = TransferReport::from_similarities(description_similarity, title_similarity);
            print_report(&report, json)
        }

        Command::Models {} => {
            for name in semantic::SUPPORTED_MODELS {
                if name.eq_ignore_ascii_case(&config.embedder.model) {
                    println!("{name} (configured)");
                } else {
                    println!("{name}");
                }
            }
            Ok(())
        }
    }
}

fn print_report(report: &TransferReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Fill in fields missing from the command line, prompting when interactive.
/// Whatever is still missing stays empty and fails validation later.
fn collect_inputs(courses: CourseArgs, interactive: bool) -> Result<CourseInputs> {
    let prompt = |value: Option<String>, label: &str, placeholder: &str| -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None if interactive => inquire::Text::new(label)
                .with_placeholder(placeholder)
                .prompt()
                .with_context(|| format!("Failed to read {label}")),
            None => Ok(String::new()),
        }
    };

    Ok(CourseInputs::new(
        prompt(
            courses.description_1,
            "Description 1",
            "Enter first course description...",
        )?,
        prompt(
            courses.description_2,
            "Description 2",
            "Enter second course description...",
        )?,
        prompt(courses.title_1, "Title 1", "Enter first course title...")?,
        prompt(courses.title_2, "Title 2", "Enter second course title...")?,
    ))
}
