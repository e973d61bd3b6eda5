//! GoMarketplace CLI - Inspect and edit a file-backed cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the cart
//! gm-cli show
//!
//! # Add a product (or one more unit of it)
//! gm-cli add --id 1 --title "Cadeira Rivatti" --image-url https://cdn.example.com/1.png --price 400
//!
//! # Change quantities
//! gm-cli increment 1
//! gm-cli decrement 1
//!
//! # Empty the cart
//! gm-cli clear
//! ```
//!
//! Storage location, key and display currency come from the
//! `GO_MARKETPLACE_*` environment variables (a `.env` file is honoured).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gm-cli")]
#[command(author, version, about = "GoMarketplace cart tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart contents and totals
    Show {
        /// Print the persisted JSON list instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a product to the cart, or one more unit if already present
    Add {
        /// Product id
        #[arg(short, long)]
        id: String,

        /// Product title
        #[arg(short, long)]
        title: String,

        /// Product image URL
        #[arg(long, default_value = "")]
        image_url: String,

        /// Unit price (e.g., 19.90)
        #[arg(short, long)]
        price: String,
    },
    /// Add one unit of a product already in the cart
    Increment {
        /// Product id
        id: String,
    },
    /// Remove one unit of a product, dropping it at zero
    Decrement {
        /// Product id
        id: String,
    },
    /// Remove every product from the cart
    Clear,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "go_marketplace_cart=info,gm_cli=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = commands::cart::CartContext::open().await?;

    match cli.command {
        Commands::Show { json } => ctx.show(json)?,
        Commands::Add {
            id,
            title,
            image_url,
            price,
        } => ctx.add(&id, title, image_url, &price).await?,
        Commands::Increment { id } => ctx.increment(&id).await?,
        Commands::Decrement { id } => ctx.decrement(&id).await?,
        Commands::Clear => ctx.clear().await?,
    }
    Ok(())
}
