use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eduvision_core::Subject;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "eduvision")]
#[command(about = "EduVision - explain diagrams, generate quizzes and visualization guides", long_about = None)]
struct Cli {
    /// Subject framing for the request (defaults to the configured subject)
    #[arg(long, short, global = true)]
    subject: Option<Subject>,

    /// Directory holding config.toml and secret.json
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explain a diagram and/or answer a question about it
    Explain {
        /// Image of the diagram
        #[arg(long, short)]
        image: Option<PathBuf>,
        /// Specific question about the content
        question: Vec<String>,
    },
    /// Generate a short multiple-choice quiz
    Quiz {
        /// Concept to be quizzed on
        concept: Vec<String>,
    },
    /// Describe how to draw a concept
    Visualize {
        /// Concept to visualize
        concept: Vec<String>,
    },
    /// List available subjects
    Subjects,
    /// Show suggested topics for the subject
    Concepts,
    /// Show recent study sessions
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let context = commands::Context::load(cli.config_dir.as_deref(), cli.subject)?;

    let succeeded = match cli.command {
        Commands::Explain { image, question } => {
            commands::ask::explain(&context, image, question.join(" ")).await?
        }
        Commands::Quiz { concept } => commands::ask::quiz(&context, concept.join(" ")).await?,
        Commands::Visualize { concept } => {
            commands::ask::visualize(&context, concept.join(" ")).await?
        }
        Commands::Subjects => commands::catalog::subjects(&context),
        Commands::Concepts => commands::catalog::concepts(&context),
        Commands::History => commands::catalog::history(),
    };

    if !succeeded {
        std::process::exit(1);
    }
    Ok(())
}
