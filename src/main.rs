//! itsm-assess: IT service-management maturity assessment tool
//!
//! Scores ITIL 4 practice self-assessments and produces gap analyses,
//! improvement roadmaps and executive narratives.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use itsm_assess::{
    cli,
    config::{self, AppConfig, Validatable},
    model::RubricEdition,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with edition info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nRubric Editions:",
        "\n  full: 34 practices, 5 dimensions",
        "\n  poc:  6 practices, 3 dimensions",
        "\n\nOutput Formats:",
        "\n  summary, json, markdown",
        "\n\nNarrative Providers:",
        "\n  gemini (GEMINI_API_KEY), openai (OPENAI_API_KEY), rule-based fallback"
    )
}

#[derive(Parser)]
#[command(name = "itsm-assess")]
#[command(version, long_version = build_long_version())]
#[command(about = "ITSM maturity scoring and gap analysis", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score
    3  Error occurred

EXAMPLES:
    # Score an assessment
    itsm-assess score assessment.json

    # CI gate on the total score
    itsm-assess score assessment.json --min-score 3.0

    # Full analysis as Markdown, rule-based narrative only
    itsm-assess analyze assessment.yaml --offline -o markdown -O report.md")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that reads a rubric and writes a report
#[derive(clap::Args)]
struct ReportArgs {
    /// Output format [default: summary, or the config file value]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Built-in rubric edition
    #[arg(long, value_enum)]
    edition: Option<RubricEdition>,

    /// Custom rubric document (YAML or JSON), overrides --edition
    #[arg(long)]
    rubric: Option<PathBuf>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Assessment file (JSON or YAML)
    input: PathBuf,

    #[command(flatten)]
    report: ReportArgs,

    /// Exit with code 1 if the total score is below this value
    #[arg(long)]
    min_score: Option<f64>,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Assessment file (JSON or YAML)
    input: PathBuf,

    #[command(flatten)]
    report: ReportArgs,

    /// Skip remote providers and use the rule-based narrative
    #[arg(long)]
    offline: bool,

    /// Provider request timeout in seconds
    #[arg(long, env = "ITSM_ASSESS_TIMEOUT")]
    timeout: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an assessment: dimension scores, maturity level and top gaps
    Score(ScoreArgs),

    /// Full analysis: diagnosis, roadmap and executive narrative
    Analyze(AnalyzeArgs),

    /// Print the rubric: dimensions, practices and maturity bands
    Rubric {
        #[command(flatten)]
        report: ReportArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .itsm-assess.yaml in the current directory
    Init,
}

/// CLI overrides layered over the config file.
fn overrides(report: &ReportArgs, no_color: bool) -> AppConfig {
    AppConfig::builder()
        .edition(report.edition.unwrap_or_default())
        .rubric_file(report.rubric.clone())
        .output_format(report.output.unwrap_or_default())
        .output_file(report.output_file.clone())
        .no_color(no_color)
        .build()
}

/// Load the effective configuration and reject invalid values.
fn effective_config(
    cli_config: Option<&std::path::Path>,
    cli_overrides: &AppConfig,
) -> Result<AppConfig> {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli_config, cli_overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Score(args) => {
            let config = effective_config(
                cli.config.as_deref(),
                &overrides(&args.report, cli.no_color),
            )?;
            cli::run_score(&config, &args.input, args.min_score)
        }

        Commands::Analyze(args) => {
            let mut cli_overrides = overrides(&args.report, cli.no_color);
            cli_overrides.narrative.enabled = !args.offline;
            let mut config = effective_config(cli.config.as_deref(), &cli_overrides)?;
            if let Some(secs) = args.timeout {
                config.narrative.timeout_secs = secs.max(1);
            }
            cli::run_analyze(&config, &args.input)
        }

        Commands::Rubric { report } => {
            let config =
                effective_config(cli.config.as_deref(), &overrides(&report, cli.no_color))?;
            cli::run_rubric(&config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "itsm-assess", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            match action {
                ConfigAction::Show => {
                    let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                    if let Some(path) = &loaded_from {
                        eprintln!("# Loaded from: {}", path.display());
                    } else {
                        eprintln!("# No config file found; showing defaults");
                    }
                    let yaml =
                        serde_yaml::to_string(&config).context("failed to serialize config")?;
                    print!("{yaml}");
                }
                ConfigAction::Path => {
                    let search_paths: [Option<String>; 3] = [
                        std::env::current_dir()
                            .ok()
                            .map(|p| p.display().to_string()),
                        config::user_config_dir().map(|p| p.display().to_string()),
                        dirs::home_dir().map(|p| p.display().to_string()),
                    ];
                    eprintln!("Config file search paths (in order):");
                    for path in search_paths.into_iter().flatten() {
                        eprintln!("  {path}");
                    }
                    eprintln!();
                    eprintln!("Recognized file names:");
                    for name in config::CONFIG_FILE_NAMES {
                        eprintln!("  {name}");
                    }
                    eprintln!();
                    match config::discover_config_file(cli.config.as_deref()) {
                        Some(path) => eprintln!("Active config file: {}", path.display()),
                        None => eprintln!("No config file found."),
                    }
                }
                ConfigAction::Init => {
                    let target = std::env::current_dir()
                        .context("cannot determine current directory")?
                        .join(".itsm-assess.yaml");
                    if target.exists() {
                        anyhow::bail!(
                            "{} already exists. Remove it first to re-initialize.",
                            target.display()
                        );
                    }
                    let content = config::generate_full_example_config();
                    std::fs::write(&target, content)
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    eprintln!("Created {}", target.display());
                }
            }
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}
