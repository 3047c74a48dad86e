use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use konsel_storage::repo::Repository;
use konsel_storage::store::FileStore;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Debug, Parser)]
#[command(name = "konsel", version, about = "Konsel mental-health companion")]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the local account and start the free trial.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    /// Show free-trial status.
    Trial,
    /// List counselors.
    Counselors,
    /// Take the SRQ-29 questionnaire.
    Srq,
    /// Show past questionnaire results.
    Results,
    /// Chat with a counselor.
    Chat {
        /// Counselor ID (see `konsel counselors`). Defaults to the last one chosen.
        #[arg(long, conflicts_with = "resume")]
        counselor: Option<String>,
        /// Continue a saved conversation (see `konsel chats`).
        #[arg(long)]
        resume: Option<String>,
    },
    /// List saved conversations.
    Chats,
    /// Show paid counseling packages.
    Packages,
    /// Browse educational articles.
    Articles {
        /// Category filter.
        #[arg(long, default_value = "Semua")]
        category: String,
        /// Open an article by ID.
        #[arg(long)]
        read: Option<u32>,
    },
    /// Browse relaxation tracks.
    Relax {
        /// Category filter.
        #[arg(long, default_value = "Semua")]
        category: String,
        /// Log a finished session for a track ID.
        #[arg(long)]
        done: Option<u32>,
    },
    /// Show achievements, points, and level.
    Achievements,
    /// Mood journal.
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },
}

#[derive(Debug, Subcommand)]
enum JournalAction {
    /// Add an entry.
    Add {
        /// 1 (very sad) to 5 (very happy).
        #[arg(long, default_value_t = 3)]
        mood: u8,
        #[arg(long)]
        note: String,
    },
    /// List entries, newest first.
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let data_dir_override = std::env::var_os(config::DATA_DIR_ENV).map(PathBuf::from);
    let loaded = config::load_config(&config_path, data_dir_override)?;
    let config = loaded.config;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
    if loaded.created {
        tracing::info!(path = %config_path.display(), "wrote default config");
    }
    if let Some(from) = loaded.migrated_from {
        tracing::info!(from, to = config.config_version, "migrated config");
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "loaded config");

    let repo = Repository::new(FileStore::new(&config.data_dir));

    match cli.command {
        Command::Register { name, email } => commands::register(&repo, &name, &email).await,
        Command::Trial => commands::trial_status(&repo).await,
        Command::Counselors => {
            commands::counselors();
            Ok(())
        }
        Command::Srq => commands::srq(&repo).await,
        Command::Results => commands::results(&repo).await,
        Command::Chat { counselor, resume } => match resume {
            Some(id) => commands::resume_chat(&repo, &id).await,
            None => commands::chat(&repo, counselor.as_deref()).await,
        },
        Command::Chats => commands::chats(&repo).await,
        Command::Packages => {
            commands::packages();
            Ok(())
        }
        Command::Articles { category, read } => match read {
            Some(id) => commands::read_article(&repo, id).await,
            None => commands::articles(&category),
        },
        Command::Relax { category, done } => match done {
            Some(id) => commands::relax_done(&repo, id).await,
            None => commands::tracks(&category),
        },
        Command::Achievements => commands::show_achievements(&repo).await,
        Command::Journal { action } => match action {
            JournalAction::Add { mood, note } => commands::journal_add(&repo, mood, &note).await,
            JournalAction::List => commands::journal_list(&repo).await,
        },
    }
}
