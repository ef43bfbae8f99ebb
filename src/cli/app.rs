//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use tasktrack::output::OutputMode;

use super::commands;

/// tasktrack - Track assignments and deadlines from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "tasktrack",
    version,
    about = "Track assignments and deadlines from the terminal",
    long_about = "Track assignments stored in your hosted account.\n\n\
                  Assignments carry a class and a due date; deadlines within\n\
                  the next 24 hours can raise a reminder notification."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configure the hosted store connection
    Init {
        /// Base URL of the hosted store
        #[arg(long)]
        url: String,

        /// Public API key
        #[arg(long)]
        api_key: String,

        /// Access token of the signed-in user
        #[arg(long)]
        access_token: String,

        /// User id stamped on created assignments
        #[arg(long)]
        user_id: String,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Add an assignment
    Add {
        /// Assignment name
        name: String,

        /// Class the assignment belongs to
        #[arg(short, long)]
        class: String,

        /// Due date: RFC 3339, "YYYY-MM-DD HH:MM", or "YYYY-MM-DD"
        #[arg(short, long)]
        due: String,
    },

    /// List assignments grouped by completion
    List {
        /// Only show assignments still to do
        #[arg(long, conflicts_with = "completed")]
        pending: bool,

        /// Only show completed assignments
        #[arg(long)]
        completed: bool,
    },

    /// Mark an assignment as completed
    Done {
        /// Assignment id (unique prefix accepted)
        id: String,
    },

    /// Reopen a completed assignment
    Reopen {
        /// Assignment id (unique prefix accepted)
        id: String,
    },

    /// Delete an assignment
    Remove {
        /// Assignment id (unique prefix accepted)
        id: String,
    },

    /// Check deadlines due in the next 24 hours and raise a reminder
    Remind,

    /// Show a summary of tracked assignments
    Status,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(dispatch(cli.command, output_mode))
}

async fn dispatch(command: Option<Command>, output_mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Some(Command::Init {
            url,
            api_key,
            access_token,
            user_id,
            force,
        }) => commands::init(&url, &api_key, &access_token, &user_id, force, output_mode),
        Some(Command::Add { name, class, due }) => {
            commands::add(&name, &class, &due, output_mode).await
        },
        Some(Command::List { pending, completed }) => {
            commands::list(pending, completed, output_mode).await
        },
        Some(Command::Done { id }) => commands::done(&id, output_mode).await,
        Some(Command::Reopen { id }) => commands::reopen(&id, output_mode).await,
        Some(Command::Remove { id }) => commands::remove(&id, output_mode).await,
        Some(Command::Remind) => commands::remind(output_mode).await,
        Some(Command::Status) => commands::status(output_mode).await,
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("tasktrack v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("tasktrack v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'tasktrack --help' for usage");
                println!("Run 'tasktrack init' to connect your account");
            }
            Ok(())
        },
    }
}
