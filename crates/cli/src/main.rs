//! Pet Store CLI - Promotion management over the local store.
//!
//! # Usage
//!
//! ```bash
//! # Seed the store with the default admin and sample promotions
//! petstore seed
//!
//! # Authenticate
//! petstore login -e admin@petstore.com -p admin123
//!
//! # List promotions (all | active | scheduled | expired | trash)
//! petstore promotions list --filter active
//!
//! # Create a promotion through the two-step wizard
//! petstore promotions create --name "Semana del Gato" --description "..." \
//!     --category alimento --discount 20 \
//!     --start-date 2025-09-01 --end-date 2025-09-07 --products 1,2
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed the store with default data
//! - `register` / `login` / `logout` - Credential management
//! - `promotions` - List and manage promotions (create, edit, trash, restore, delete)
//! - `settings` - Accessibility preferences

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

use commands::promotions::{CreateArgs, EditArgs};

#[derive(Parser)]
#[command(name = "petstore")]
#[command(author, version, about = "Pet store promotions admin CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store with the default admin and sample promotions
    Seed,
    /// Register a new admin credential
    Register {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Log in as an admin
    Login {
        /// Admin email address
        #[arg(short, long)]
        email: String,

        /// Admin password
        #[arg(short, long)]
        password: String,
    },
    /// Log out the active admin
    Logout,
    /// Manage promotions
    Promotions {
        #[command(subcommand)]
        action: PromotionAction,
    },
    /// Accessibility settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum PromotionAction {
    /// List promotions by status
    List {
        /// Status filter (`all`, `active`, `scheduled`, `expired`, `trash`)
        #[arg(short, long, default_value = "all")]
        filter: String,
    },
    /// List the products available for a category
    Products {
        /// Category (`alimento`, `juguetes`, `cuidado`, `accesorios`)
        #[arg(short, long)]
        category: String,
    },
    /// Create a promotion through the two-step wizard
    Create(CreateArgs),
    /// Edit a promotion through the wizard, replacing only the given fields
    Edit(EditArgs),
    /// Move a promotion to the trash (soft delete)
    Trash {
        /// Promotion id
        id: String,
    },
    /// Restore a promotion from the trash
    Restore {
        /// Promotion id
        id: String,
    },
    /// Permanently delete a promotion
    Delete {
        /// Promotion id
        id: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Show the stored accessibility settings
    Show,
    /// Update the accessibility settings
    Set {
        /// Contrast slider position (0-100)
        #[arg(long)]
        contrast: Option<u8>,

        /// Font size slider position (0-100)
        #[arg(long)]
        font_size: Option<u8>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = petstore_admin::config::AdminConfig::from_env()?;
    let store = petstore_admin::store::Store::open(config.data_dir)?;

    match cli.command {
        Commands::Seed => commands::seed::run(&store)?,
        Commands::Register { email, password } => {
            commands::auth::register(&store, &email, &password)?;
        }
        Commands::Login { email, password } => commands::auth::login(&store, &email, &password)?,
        Commands::Logout => commands::auth::logout(&store)?,
        Commands::Promotions { action } => match action {
            PromotionAction::List { filter } => commands::promotions::list(&store, &filter)?,
            PromotionAction::Products { category } => commands::promotions::products(&category)?,
            PromotionAction::Create(args) => commands::promotions::create(&store, &args)?,
            PromotionAction::Edit(args) => commands::promotions::edit(&store, &args)?,
            PromotionAction::Trash { id } => commands::promotions::trash(&store, &id)?,
            PromotionAction::Restore { id } => commands::promotions::restore(&store, &id)?,
            PromotionAction::Delete { id } => commands::promotions::delete(&store, &id)?,
        },
        Commands::Settings { action } => match action {
            SettingsAction::Show => commands::settings::show(&store)?,
            SettingsAction::Set {
                contrast,
                font_size,
            } => commands::settings::set(&store, contrast, font_size)?,
        },
    }
    Ok(())
}
