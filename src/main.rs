use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// recipebox - recipes, ingredients and tags behind a token API
#[derive(Parser)]
#[command(name = "recipebox")]
#[command(about = "Recipe API server and admin commands", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Create the database if needed and run migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
    /// Manage user accounts
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    /// Create an account
    Create {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, default_value = "")]
        name: String,
    },
    /// Activate or suspend an account
    SetState {
        #[arg(long)]
        email: String,

        #[arg(value_enum)]
        state: cli::user::AccountState,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = recipebox::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    recipebox::observability::init_observability(
        "recipebox",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => recipebox::server::serve(config, host, port).await,
        Commands::Migrate => cli::database::migrate(config).await,
        Commands::Reset => cli::database::reset(config).await,
        Commands::User { command } => match command {
            UserCommands::Create {
                email,
                password,
                name,
            } => cli::user::create(config, email, password, name).await,
            UserCommands::SetState { email, state } => {
                cli::user::set_state(config, email, state).await
            }
        },
    }
}
