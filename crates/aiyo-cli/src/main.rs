use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aiyo")]
#[command(about = "Aiyo CLI - voice navigation core for the Aiyo learning platform", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a voice command into a navigation decision
    Resolve {
        /// The captured command text
        command: Vec<String>,
    },
    /// List the course catalog
    Courses,
    /// List the news feed
    News,
    /// Ask the lesson chat assistant a question
    Chat {
        /// The student's question
        message: Vec<String>,
        /// Title of the lesson the student is in
        #[arg(long)]
        session_title: Option<String>,
        /// Video reference of the lesson
        #[arg(long)]
        video_src: Option<String>,
        /// Course id to look the lesson up from (with --session)
        #[arg(long)]
        course_id: Option<String>,
        /// 1-based session ordinal within the course (with --course-id)
        #[arg(long)]
        session: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { command } => commands::resolve::run(&command.join(" ")).await?,
        Commands::Courses => commands::courses::run().await?,
        Commands::News => commands::news::run().await?,
        Commands::Chat {
            message,
            session_title,
            video_src,
            course_id,
            session,
        } => {
            commands::chat::run(
                &message.join(" "),
                session_title,
                video_src,
                course_id,
                session,
            )
            .await?
        }
    }

    Ok(())
}
