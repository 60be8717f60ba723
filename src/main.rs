//! Pantry CLI entry point.
//!
//! One-shot commands run a single action against the remote store and wait
//! for it to settle; `shell` keeps a session open on stdin.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use pantry::PantryApp;
use pantry::domain::NewIngredient;
use pantry::infra::app_config::{self, AppConfig};
use pantry::ui::shell::{HELP, render_list, run_shell};

#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(version)]
#[command(about = "Keep an ingredient list in sync with a remote JSON store", long_about = None)]
struct Args {
    /// Config file (defaults to PANTRY_CONFIG_PATH or the platform data dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Root URL of the document store
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Collection holding the ingredients
    #[arg(long, global = true)]
    collection: Option<String>,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Drop the local entry even when the delete fails
    #[arg(long, global = true)]
    remove_on_failed_delete: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add an ingredient
    Add {
        title: String,
        amount: String,
    },

    /// Remove an ingredient by id
    Remove {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// List ingredients, optionally only those with this exact title
    Search { filter: Option<String> },

    /// List every ingredient
    List,

    /// Interactive session on stdin (default)
    Shell,

    /// Print the resolved configuration
    Config {
        /// Write it to the config file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(app_config::config_path);
    let config = resolve_config(&args, app_config::load_config_from(&config_path));
    log::debug!("config from {}: {:?}", config_path.display(), config);

    let command = args.command.unwrap_or(Commands::Shell);
    if let Commands::Config { write } = command {
        print!("{}", toml::to_string_pretty(&config)?);
        if write {
            app_config::save_config_to(&config_path, &config)
                .with_context(|| format!("Failed to write {}", config_path.display()))?;
            eprintln!("wrote {}", config_path.display());
        }
        return Ok(());
    }

    let mut app = PantryApp::new(&config)?;

    match command {
        Commands::Add { title, amount } => {
            app.add_ingredient(NewIngredient::new(title, amount))?;
            app.settle().await;
            fail_on_error(&app)?;
            println!("{}", render_list(app.ingredients()));
        }
        Commands::Remove { id } => {
            app.remove_ingredient(&id)?;
            app.settle().await;
            fail_on_error(&app)?;
            println!("removed {id}");
        }
        Commands::Search { filter } => {
            app.search_ingredients(filter.unwrap_or_default());
            app.settle().await;
            fail_on_error(&app)?;
            println!("{}", render_list(app.ingredients()));
        }
        Commands::List => {
            app.search_ingredients("");
            app.settle().await;
            fail_on_error(&app)?;
            println!("{}", render_list(app.ingredients()));
        }
        Commands::Shell => {
            eprintln!("{HELP}");
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            run_shell(&mut app, stdin, &mut stdout).await?;
        }
        Commands::Config { .. } => {}
    }

    Ok(())
}

fn resolve_config(args: &Args, mut config: AppConfig) -> AppConfig {
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if let Some(collection) = &args.collection {
        config.collection = collection.clone();
    }
    if args.timeout.is_some() {
        config.request_timeout_secs = args.timeout;
    }
    if args.remove_on_failed_delete {
        config.remove_on_failed_delete = true;
    }
    config
}

fn fail_on_error(app: &PantryApp) -> Result<()> {
    if let Some(err) = app.error() {
        bail!("{err}");
    }
    Ok(())
}
