//! Shoe shop CLI - catalog, account and pickup point tools.
//!
//! # Usage
//!
//! ```bash
//! # List the catalog as a guest sees it
//! shop-cli catalog
//!
//! # Search and filter as a manager
//! shop-cli catalog --role manager --search nike --size 42
//!
//! # Check a demo account
//! shop-cli login client 123
//!
//! # Show what each role may do
//! shop-cli roles
//!
//! # List pickup points
//! shop-cli pickup
//! ```
//!
//! # Commands
//!
//! - `catalog` - List products through the same access policy as the storefront
//! - `login` - Authenticate against the configured account directory
//! - `roles` - Print the capability matrix
//! - `pickup` - List pickup points

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;

use clap::{Parser, Subcommand};
use secrecy::SecretString;

use shoe_shop_core::{Role, ShoeSize};

mod commands;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "Shoe shop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products visible to a role
    Catalog {
        /// Role to evaluate the catalog for (`guest`, `client`, `manager`, `admin`)
        #[arg(short, long, default_value = "guest")]
        role: Role,

        /// Case-insensitive search over name, brand and description
        #[arg(short, long)]
        search: Option<String>,

        /// Only products available in this size (repeatable)
        #[arg(long = "size")]
        sizes: Vec<ShoeSize>,

        /// Only products in this category
        #[arg(short, long, conflicts_with = "sizes")]
        category: Option<String>,
    },
    /// Check a login and password against the account directory
    Login {
        /// Account login
        login: String,

        /// Account password
        password: String,
    },
    /// Print capabilities and visible tabs for every role
    Roles,
    /// List pickup points
    Pickup,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Catalog {
            role,
            search,
            sizes,
            category,
        } => {
            let args = commands::catalog::CatalogArgs {
                role,
                search: search.unwrap_or_default(),
                sizes,
                category,
            };
            commands::catalog::list(&mut out, &args)?;
        }
        Commands::Login { login, password } => {
            commands::login::check(&mut out, &login, &SecretString::from(password))?;
        }
        Commands::Roles => commands::info::roles(&mut out)?,
        Commands::Pickup => commands::info::pickup(&mut out)?,
    }

    out.flush()?;
    Ok(())
}
