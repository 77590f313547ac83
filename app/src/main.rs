#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

use command::{
    CommandStrategy, InfoStrategy, InitStrategy, LookupInput, LookupStrategy, RunInput,
    RunStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "mtgcall")]
#[command(about = "Answers [[card name]] calls on Lemmy with Scryfall links", long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the Lemmy bot
    Run {
        /// Instance to connect to (overrides config)
        #[arg(short = 'i', long)]
        instance: Option<String>,

        /// Community to watch, repeatable (overrides config)
        #[arg(short = 'c', long = "community")]
        communities: Vec<String>,
    },
    /// Answer a single message and print the reply
    Lookup {
        /// Message text, e.g. "Is [[Lightning Bolt]] still good?"
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Initialize configuration
    Init,
    /// Show configuration
    Info,
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Run {
            instance,
            communities,
        } => {
            RunStrategy
                .execute(RunInput {
                    instance,
                    communities,
                })
                .await
        }
        Commands::Lookup { text } => {
            LookupStrategy
                .execute(LookupInput {
                    text: text.join(" "),
                })
                .await
        }
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
