mod agent;
mod config;
mod errors;
mod interactive;
mod llm_client;
mod output;
mod parser;

use std::future::Future;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::anyhow;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent::CareerAgent;
use crate::config::Config;
use crate::errors::AppError;

/// Beacon - AI-powered career assistant
#[derive(Parser, Debug)]
#[command(name = "beacon", version, about, long_about = None)]
struct Cli {
    /// AI provider to use (overrides DEFAULT_PROVIDER)
    #[arg(long, global = true, value_parser = ["openai", "anthropic"])]
    provider: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze your resume and get improvement suggestions
    Analyze {
        /// Path to the resume file (defaults to RESUME_PATH)
        #[arg(long)]
        resume_path: Option<PathBuf>,

        /// Produce a shorter summary-level analysis
        #[arg(long)]
        summary: bool,

        /// Save the analysis under the output directory
        #[arg(long)]
        save: bool,
    },

    /// Get personalized career advice
    Advice {
        /// The question to ask
        query: String,

        /// Additional context for the advice
        #[arg(long)]
        context: Option<String>,

        /// Save the advice under the output directory
        #[arg(long)]
        save: bool,
    },

    /// Optimize your resume for a specific job
    Optimize {
        /// File containing the job description (stdin when omitted)
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Save the optimization notes under the output directory
        #[arg(long)]
        save: bool,
    },

    /// Generate a tailored cover letter
    CoverLetter {
        /// File containing the job description (stdin when omitted)
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Company name
        #[arg(long)]
        company: String,

        /// Additional information to include
        #[arg(long)]
        additional_info: Option<String>,

        /// Save the cover letter under the output directory
        #[arg(long)]
        save: bool,
    },

    /// Prepare for job interviews
    Interview {
        /// File containing the job description (stdin when omitted)
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Type of interview
        #[arg(long = "type", value_enum, default_value_t = InterviewType::General)]
        interview_type: InterviewType,

        /// Save the interview prep under the output directory
        #[arg(long)]
        save: bool,
    },

    /// Get skill development suggestions
    Skills {
        /// Target role or career direction
        #[arg(long)]
        target_role: Option<String>,

        /// Save the suggestions under the output directory
        #[arg(long)]
        save: bool,
    },

    /// Interactive menu covering all operations
    Interactive,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InterviewType {
    General,
    Technical,
    Behavioral,
    Panel,
}

impl InterviewType {
    fn as_str(self) -> &'static str {
        match self {
            InterviewType::General => "general",
            InterviewType::Technical => "technical",
            InterviewType::Behavioral => "behavioral",
            InterviewType::Panel => "panel",
        }
    }
}

impl std::fmt::Display for InterviewType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            output::print_error(&format!("{e:#}"));
            std::process::exit(1);
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli, config).await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    let provider = cli.provider.as_deref();

    match cli.command {
        Command::Analyze {
            resume_path,
            summary,
            save,
        } => {
            let mut agent = CareerAgent::new(provider, config)?;
            if let Some(path) = resume_path.as_deref() {
                agent.load_resume(Some(path))?;
            }
            let analysis =
                with_spinner("Analyzing resume...", agent.analyze_resume(!summary)).await?;
            output::print_report("Resume Analysis", &analysis);
            if save {
                output::print_saved(&agent.save_output(&analysis, "resume_analysis.md")?);
            }
        }

        Command::Advice {
            query,
            context,
            save,
        } => {
            let mut agent = CareerAgent::new(provider, config)?;
            let advice = with_spinner(
                "Generating career advice...",
                agent.career_advice(&query, context.as_deref()),
            )
            .await?;
            output::print_report("Career Advice", &advice);
            if save {
                output::print_saved(&agent.save_output(&advice, "career_advice.md")?);
            }
        }

        Command::Optimize { job_file, save } => {
            let job_description = read_job_description(job_file.as_deref())?;
            let mut agent = CareerAgent::new(provider, config)?;
            let optimization = with_spinner(
                "Optimizing resume...",
                agent.optimize_for_job(&job_description),
            )
            .await?;
            output::print_report("Resume Optimization", &optimization);
            if save {
                output::print_saved(&agent.save_output(&optimization, "resume_optimization.md")?);
            }
        }

        Command::CoverLetter {
            job_file,
            company,
            additional_info,
            save,
        } => {
            let job_description = read_job_description(job_file.as_deref())?;
            let mut agent = CareerAgent::new(provider, config)?;
            let letter = with_spinner(
                "Generating cover letter...",
                agent.cover_letter(&job_description, &company, additional_info.as_deref()),
            )
            .await?;
            output::print_report("Cover Letter", &letter);
            if save {
                let filename = format!("cover_letter_{}.md", company.replace(' ', "_"));
                output::print_saved(&agent.save_output(&letter, &filename)?);
            }
        }

        Command::Interview {
            job_file,
            interview_type,
            save,
        } => {
            let job_description = read_job_description(job_file.as_deref())?;
            let mut agent = CareerAgent::new(provider, config)?;
            let prep = with_spinner(
                "Preparing interview questions...",
                agent.interview_prep(&job_description, interview_type.as_str()),
            )
            .await?;
            output::print_report("Interview Preparation", &prep);
            if save {
                let filename = format!("interview_prep_{}.md", interview_type.as_str());
                output::print_saved(&agent.save_output(&prep, &filename)?);
            }
        }

        Command::Skills { target_role, save } => {
            let mut agent = CareerAgent::new(provider, config)?;
            let suggestions = with_spinner(
                "Analyzing skill development opportunities...",
                agent.skill_suggestions(target_role.as_deref()),
            )
            .await?;
            output::print_report("Skill Development Suggestions", &suggestions);
            if save {
                output::print_saved(&agent.save_output(&suggestions, "skill_suggestions.md")?);
            }
        }

        Command::Interactive => interactive::run(provider, config).await?,
    }

    Ok(())
}

/// Runs a provider call behind a spinner, clearing it before the result is
/// printed.
async fn with_spinner<T>(
    message: &'static str,
    call: impl Future<Output = Result<T, AppError>>,
) -> Result<T, AppError> {
    let bar = output::spinner(message);
    let result = call.await;
    bar.finish_and_clear();
    result
}

/// Reads the job description from a file, or from stdin up to EOF.
fn read_job_description(job_file: Option<&Path>) -> Result<String, AppError> {
    let text = match job_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            println!("Paste the job description below, then press Ctrl-D:");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let text = text.trim().to_string();
    if text.is_empty() {
        return Err(AppError::Internal(anyhow!("no job description provided")));
    }
    Ok(text)
}
