//! Verde CLI - Command-line shopping client.
//!
//! # Usage
//!
//! ```bash
//! # Authenticate
//! verde auth login -e jo@example.com -p 'hunter2!'
//! verde auth register -e jo@example.com -f Jo -l Woods -p 'hunter2!'
//! verde auth logout
//!
//! # Browse and shop
//! verde products
//! verde cart list
//! verde cart add --product 7 --quantity 2
//! verde cart remove --product 7
//!
//! # Addresses and checkout
//! verde address list
//! verde address add --city Metz --street "Rue Serpenoise 3" --zip 57000
//! verde checkout --method card
//! ```
//!
//! Configuration comes from the environment (see `verde-client`):
//! `VERDE_API_BASE_URL` and `VERDE_DATA_DIR`.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use verde_core::PaymentMethod;

mod commands;

#[derive(Parser)]
#[command(name = "verde")]
#[command(author, version, about = "Verde Market command-line shopping client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in, register, or log out
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// List the product catalog
    Products,
    /// Manage delivery addresses
    Address {
        #[command(subcommand)]
        action: AddressAction,
    },
    /// Inspect and mutate the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Create an order from the cart and pay it
    Checkout {
        /// Payment method (`cash` or `card`)
        #[arg(short, long, default_value = "card")]
        method: PaymentMethod,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in with an existing account
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Register a new account
    Register {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// First name
        #[arg(short, long)]
        first_name: String,

        /// Last name
        #[arg(short, long)]
        last_name: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Forget the persisted credential
    Logout,
}

#[derive(Subcommand)]
enum AddressAction {
    /// List your delivery addresses
    List,
    /// Add a delivery address
    Add {
        /// City name
        #[arg(long)]
        city: String,

        /// Street name and number
        #[arg(long)]
        street: String,

        /// Postal code
        #[arg(long)]
        zip: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and total
    List,
    /// Add a product to the cart
    Add {
        /// Product id
        #[arg(long)]
        product: i32,

        /// Number of units
        #[arg(long, default_value = "1")]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product id
        #[arg(long)]
        product: i32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => commands::auth::login(&email, &password).await?,
            AuthAction::Register {
                email,
                first_name,
                last_name,
                password,
            } => commands::auth::register(&email, &first_name, &last_name, &password).await?,
            AuthAction::Logout => commands::auth::logout().await?,
        },
        Commands::Products => commands::shop::products().await?,
        Commands::Address { action } => match action {
            AddressAction::List => commands::shop::addresses().await?,
            AddressAction::Add { city, street, zip } => {
                commands::shop::add_address(&city, &street, &zip).await?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list().await?,
            CartAction::Add { product, quantity } => {
                commands::cart::add(product, quantity).await?;
            }
            CartAction::Remove { product } => commands::cart::remove(product).await?,
        },
        Commands::Checkout { method } => commands::checkout::run(method).await?,
    }

    Ok(())
}
