use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::WrapErr;
use model_config_validation::{
    log_info,
    util::log::init_logging,
    AiModelsDocument,
    ConfigValidator,
    ConfigurationRecord,
    ModelType,
    ValidationReport,
};

#[derive(Parser)]
#[command(name = "model-config-check")]
#[command(about = "Validate AI model provider configurations", long_about = None)]
struct Cli {
    /// Also write logs to <DIR>/model-config-check.log
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every configuration in a YAML or JSON models document
    Check {
        /// Path to the document
        path: PathBuf,

        /// Model type that must have at least one configuration (repeatable)
        #[arg(short, long = "require", value_parser = parse_model_type)]
        required: Vec<ModelType>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a single configuration given as inline JSON
    Validate {
        /// Model type tag (llm, ocr, embedding, slm, reasoning, multiModal)
        #[arg(short, long)]
        model_type: String,

        /// Configuration object, e.g. '{"apiKey":"...","model":"gpt-4o"}'
        config: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn parse_model_type(s: &str) -> Result<ModelType, String> {
    s.parse()
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _guard = init_logging(cli.log_dir.as_deref()).wrap_err("failed to set up logging")?;

    let valid = match cli.command {
        Commands::Check { path, required, format } => cmd_check(&path, &required, format)?,
        Commands::Validate { model_type, config } => cmd_validate(&model_type, &config)?,
    };

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn cmd_check(
    path: &Path,
    required: &[ModelType],
    format: OutputFormat,
) -> color_eyre::Result<bool> {
    let doc = AiModelsDocument::load_from_path(path)
        .wrap_err_with(|| format!("failed to load {}", path.display()))?;
    let report = doc.validate(required);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }

    log_info!(
        "checked {} configuration(s), {} invalid, {} missing type(s)",
        report.configurations.len(),
        report.invalid().count(),
        report.missing_types.len()
    );

    Ok(report.is_valid())
}

fn cmd_validate(model_type: &str, config: &str) -> color_eyre::Result<bool> {
    let value: serde_json::Value =
        serde_json::from_str(config).wrap_err("config is not valid JSON")?;
    let result = ConfigValidator::validate(model_type, &ConfigurationRecord::from(value));

    match result.message() {
        None => println!("valid"),
        Some(message) => println!("invalid: {}", message),
    }

    Ok(result.is_valid())
}

fn print_report(report: &ValidationReport) {
    for entry in &report.configurations {
        match entry.result.message() {
            None => println!("  ok    {}[{}]", entry.model_type, entry.index),
            Some(message) => println!("  FAIL  {}[{}]: {}", entry.model_type, entry.index, message),
        }
    }

    for model_type in &report.missing_types {
        println!("  FAIL  {}: no saved configuration", model_type);
    }

    println!();
    println!(
        "{} configuration(s), {} invalid, {} missing type(s)",
        report.configurations.len(),
        report.invalid().count(),
        report.missing_types.len()
    );
}
