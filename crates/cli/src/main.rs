//! Bookstore CLI - inspect and edit the shared cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Show the catalog
//! bookstore-cli catalog
//!
//! # Show the cart
//! bookstore-cli cart list
//!
//! # Add two copies of book 3
//! bookstore-cli cart add 3 --quantity 2
//!
//! # Set, remove and clear
//! bookstore-cli cart set 3 5
//! bookstore-cli cart remove 3
//! bookstore-cli cart clear
//!
//! # Talk to a cart service elsewhere
//! bookstore-cli --endpoint http://cart.internal:4000/graphql cart list
//! ```
//!
//! The endpoint defaults to `CART_API_URL`, then to
//! `http://127.0.0.1:4000/graphql`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use url::Url;

mod commands;

const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:4000/graphql";

#[derive(Parser)]
#[command(name = "bookstore-cli")]
#[command(author, version, about = "Bookstore cart tools")]
struct Cli {
    /// Cart service GraphQL endpoint
    #[arg(long, global = true)]
    endpoint: Option<Url>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the book catalog
    Catalog,
    /// Read or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List the cart contents with totals
    List,
    /// Add a catalog book to the cart
    Add {
        /// Catalog product id
        product_id: String,

        /// Copies to add (sent as-is; the service decides what it accepts)
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i32,
    },
    /// Remove a line from the cart
    Remove {
        /// Cart item id
        id: String,
    },
    /// Overwrite a line's quantity
    Set {
        /// Cart item id
        id: String,

        /// New quantity (sent as-is; the service decides what it accepts)
        #[arg(allow_negative_numbers = true)]
        quantity: i32,
    },
    /// Empty the cart
    Clear,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Catalog => commands::catalog::list(&mut out)?,
        Commands::Cart { action } => {
            let client = commands::cart::client(resolve_endpoint(cli.endpoint)?);
            match action {
                CartAction::List => commands::cart::list(&client, &mut out).await?,
                CartAction::Add {
                    product_id,
                    quantity,
                } => commands::cart::add(&client, &product_id, quantity, &mut out).await?,
                CartAction::Remove { id } => commands::cart::remove(&client, &id, &mut out).await?,
                CartAction::Set { id, quantity } => {
                    commands::cart::set(&client, &id, quantity, &mut out).await?;
                }
                CartAction::Clear => commands::cart::clear(&client, &mut out).await?,
            }
        }
    }
    Ok(())
}

/// Pick the endpoint from the flag, then `CART_API_URL`, then the default.
fn resolve_endpoint(flag: Option<Url>) -> Result<Url, commands::CommandError> {
    if let Some(url) = flag {
        return Ok(url);
    }

    dotenvy::dotenv().ok();
    let raw = std::env::var("CART_API_URL")
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Url::parse(&raw).map_err(|e| commands::CommandError::InvalidEndpoint(raw, e))
}
