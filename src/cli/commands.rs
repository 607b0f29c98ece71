use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use crate::config::load_effective_config;
use crate::entity::EntitySpec;
use crate::generator::{generate_entity, GenerateOptions, TemplateSet};
use crate::logging::{init_logging, LogConfig};

/// Scaffold the controller, repository, service, DTOs and model of a CRUD resource.
#[derive(Parser, Debug)]
#[command(name = "crudgen", version)]
#[command(about = "Generate a layered CRUD resource from an entity name", long_about = None)]
pub struct Cli {
    /// Entity name, used verbatim as the type name (e.g. `User`, `CarRental`)
    pub entity: String,

    /// Root directory for generated files
    #[arg(short, long, env = "CRUDGEN_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to ./crudgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory with template overrides named like `controller.rs.txt`
    #[arg(short, long)]
    pub templates: Option<PathBuf>,

    /// Render everything but only print the target paths
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Run rustfmt over the generated files
    #[arg(long, default_value_t = false)]
    pub format: bool,
}

/// Run the generator for the parsed command line.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine working directory")?;
    let config = load_effective_config(cli.config.as_deref(), &cwd)?;

    let defaults = LogConfig::default();
    let log_config = LogConfig::from_env_or(LogConfig {
        log_level: config.logging.level.clone().unwrap_or(defaults.log_level),
        format: config.logging.format.unwrap_or(defaults.format),
    });
    if let Err(err) = init_logging(&log_config) {
        eprintln!("Warning: {err:#}");
    }

    let entity = EntitySpec::new(&cli.entity)?;

    let mut templates = TemplateSet::builtin();
    if let Some(dir) = cli.templates.or(config.templates_dir) {
        templates = templates.with_overrides(&dir)?;
    }
    let renderer = templates.compile()?;

    let options = GenerateOptions {
        output_dir: cli
            .output
            .or(config.output_dir)
            .unwrap_or_else(|| PathBuf::from(".")),
        dry_run: cli.dry_run,
        format: cli.format || config.format,
    };
    let artifacts = generate_entity(&entity, &renderer, &options)?;

    println!();
    println!("{}", "=".repeat(40));
    if options.dry_run {
        println!("Dry run complete, no files were written.");
    } else {
        println!("All files generated successfully!");
    }
    println!();
    println!("Generated files for entity '{}':", entity.name());
    for artifact in &artifacts {
        println!("- {}", artifact.path.display());
    }
    Ok(())
}
