use anyhow::Context;
use bookstore_kernel::settings::Settings;
use clap::{Parser, Subcommand};

/// Command-line entrypoint for the bookstore service
#[derive(Debug, Parser)]
#[command(name = "bookstore", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve {
        /// Interface to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overriding configuration
        #[arg(long)]
        port: Option<u16>,
        /// Start with an empty catalogue
        #[arg(long)]
        no_seed: bool,
    },
    /// Print the effective settings as JSON
    Settings,
    /// Print the merged OpenAPI document as JSON
    Openapi,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load().with_context(|| "failed to load bookstore settings")?;

    match cli.command {
        Command::Serve {
            host,
            port,
            no_seed,
        } => {
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            if no_seed {
                settings.books.seed_catalog = false;
            }
            bookstore_app::bootstrap::run(settings).await
        }
        Command::Settings => print_json(&settings),
        Command::Openapi => {
            let registry = bookstore_app::bootstrap::build_registry(&settings);
            print_json(&bookstore_http::router::openapi_document(&registry))
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to render JSON")?;
    println!("{}", rendered);
    Ok(())
}
