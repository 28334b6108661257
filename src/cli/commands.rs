use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_config, resolve_config_path};
use crate::pipeline::{ArtifactStatus, GenerationOptions, Pipeline};
use crate::render::packaged_template_ids;
use crate::schema::{MySqlBackend, NoBackend, SchemaBackend};

/// Command-line interface for crudforge
///
/// Provides commands for scaffolding CRUD artifacts for an entity and for
/// inspecting the packaged template set.
#[derive(Parser)]
#[command(name = "crudforge")]
#[command(about = "crudforge CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for crudforge
#[derive(Subcommand)]
pub enum Commands {
    /// Generate CRUD artifacts for an entity
    Generate {
        /// Entity name (e.g. Invoice or invoice_item)
        entity: String,

        /// Generate the API artifact set (default when neither flag is given)
        #[arg(long, default_value_t = false)]
        api: bool,

        /// Generate the web artifact set (controllers, views, web routes)
        #[arg(long, default_value_t = false)]
        web: bool,

        /// Overwrite existing files without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Skip the shared service/repository/DTO layer
        #[arg(long, default_value_t = false)]
        skip_common: bool,

        /// Skip route registration merging
        #[arg(long, default_value_t = false)]
        skip_routes: bool,

        /// Skip view template generation
        #[arg(long, default_value_t = false)]
        skip_views: bool,

        /// API version segment (defaults to the configured version)
        #[arg(long)]
        api_version: Option<String>,

        /// Path to crudforge.toml (default: <output-root>/crudforge.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Root directory the generated tree is written under
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Database URL for schema introspection (env: DATABASE_URL)
        #[arg(long, env = "DATABASE_URL")]
        database_url: Option<String>,

        /// Emit the result map as JSON instead of the human-readable list
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the packaged template ids that can be overridden
    Templates,
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The config file exists but cannot be parsed
/// - The database connection fails
/// - The entity name is invalid
/// - Any artifact in the run recorded a failure
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Generate {
            entity,
            api,
            web,
            force,
            skip_common,
            skip_routes,
            skip_views,
            api_version,
            config,
            output,
            database_url,
            json,
        } => {
            let output_root = output.unwrap_or_else(|| PathBuf::from("."));
            let config_path = resolve_config_path(config.as_deref(), &output_root);
            let mut config = load_config(&config_path)?.unwrap_or_default();
            config.output_root = output_root;
            if let Some(url) = database_url {
                config.database.url = Some(url);
            }

            let backend: Box<dyn SchemaBackend> = match &config.database.url {
                Some(url) => Box::new(MySqlBackend::connect(url)?),
                None => Box::new(NoBackend),
            };

            let options = GenerationOptions {
                force,
                api_version,
                skip_common,
                skip_routes,
                skip_views,
                // bare `generate Entity` scaffolds the API set
                api: api || !web,
                web,
            };
            let pipeline = Pipeline::new(&config, backend.as_ref());
            let report = pipeline.generate(&entity, &options)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report.to_json())?);
            } else {
                print_report(&report.entity, &report.artifacts);
            }

            if report.is_success() {
                Ok(())
            } else {
                Err("one or more artifacts failed to generate".into())
            }
        }
        Commands::Templates => {
            for id in packaged_template_ids() {
                println!("{id}");
            }
            Ok(())
        }
    }
}

fn print_report(
    entity: &str,
    artifacts: &std::collections::BTreeMap<crate::registry::ArtifactKind, ArtifactStatus>,
) {
    println!("Scaffold results for {entity}:");
    for (kind, status) in artifacts {
        match status {
            ArtifactStatus::Created => println!("  ✅ {} created", kind.key()),
            ArtifactStatus::Skipped => {
                println!("  ⚠️  {} skipped (exists, use --force)", kind.key())
            }
            ArtifactStatus::AlreadyPresent => {
                println!("  ℹ️  {} already registered", kind.key())
            }
            ArtifactStatus::Failed(reason) => println!("  ❌ {} failed: {reason}", kind.key()),
        }
    }
}
