//! CLI Adapter.

mod form;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::adapters::{HttpCompletionClient, MinijinjaTemplateRenderer};
use crate::app::AppContext;
use crate::app::commands::{about, generate, prompt};
use crate::app::logging::init_logging;
use crate::domain::{AppError, CompletionConfig, PostResult, load_config, read_api_key};

pub use form::FieldArgs;

#[derive(Parser)]
#[command(name = "projexbuzz")]
#[command(version)]
#[command(about = "Generate professional LinkedIn posts for your tech projects", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a LinkedIn post for a project
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        fields: FieldArgs,
        /// Override the model identifier
        #[arg(short = 'm', long)]
        model: Option<String>,
        /// Path to a projexbuzz.toml configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
    /// Print the prompt that would be sent, without calling the API
    #[clap(visible_alias = "p")]
    Prompt {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Show what this tool does and tips for best results
    About,
}

/// Entry point for the CLI.
pub fn run() {
    // A missing .env is the common case.
    let _ = dotenvy::dotenv();
    init_logging();

    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Generate { fields, model, config } => {
            run_generate(&fields, model, config.as_deref())
        }
        Commands::Prompt { fields } => run_prompt(&fields).map(|_| 0),
        Commands::About => {
            println!("{}", about::ABOUT_TEXT);
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_generate(
    fields: &FieldArgs,
    model: Option<String>,
    config_path: Option<&Path>,
) -> Result<i32, AppError> {
    let config = resolve_completion_config(config_path, model)?;
    let api_key = read_api_key(|key| std::env::var(key).ok())?;

    let Some(request) = form::collect_request(fields)? else {
        return Ok(0);
    };

    let client = HttpCompletionClient::new(api_key, &config)?;
    let ctx = AppContext::new(client, MinijinjaTemplateRenderer::new(), config.model.as_str());

    eprintln!("⏳ Generating your LinkedIn post...");
    match generate::execute(&ctx, &request)? {
        PostResult::Generated(post) => {
            eprintln!("✅ Generated LinkedIn Post\n");
            println!("{}", post);
            Ok(0)
        }
        failed => {
            eprintln!("{}", failed);
            Ok(1)
        }
    }
}

fn run_prompt(fields: &FieldArgs) -> Result<(), AppError> {
    let Some(request) = form::collect_request(fields)? else {
        return Ok(());
    };

    println!("{}", prompt::execute(&MinijinjaTemplateRenderer::new(), &request)?);
    Ok(())
}

/// Defaults, then the config file, then `PROJEXBUZZ_*` variables, then flags.
fn resolve_completion_config(
    config_path: Option<&Path>,
    model: Option<String>,
) -> Result<CompletionConfig, AppError> {
    let work_dir = std::env::current_dir()?;
    let mut config = load_config(config_path, &work_dir)?.completion;
    config.apply_env(|key| std::env::var(key).ok())?;
    if let Some(model) = model {
        config.model = model;
    }
    config.validate()?;
    tracing::debug!(model = %config.model, api_url = %config.api_url, "resolved completion config");
    Ok(config)
}
