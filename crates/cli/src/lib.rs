use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use pointer_tokens_build::{BuildConfig, Pipeline, DEFAULT_CONFIG_FILE};
use std::io;
use std::path::{Path, PathBuf};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "pointer-tokens")]
#[command(about = "Build pointer media-query CSS from design tokens", long_about = None)]
#[command(version)]
struct Cli {
    /// Defaults to `build`
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project root; sources and build_path resolve against it
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Configuration file (JSON or TOML). Defaults to pointer-tokens.toml in the root, if present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build build/coarse.css and build/fine.css
    Build(BuildArgs),

    /// Remove the generated files
    Clean,
}

#[derive(Args, Default)]
struct BuildArgs {
    /// Print the build report as JSON on stdout
    #[arg(long)]
    json: bool,
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();
    let command = cli
        .command
        .take()
        .unwrap_or_else(|| Commands::Build(BuildArgs::default()));

    // Keep stdout clean for JSON
    if matches!(&command, Commands::Build(args) if args.json) {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();

    let config = load_config(&cli.root, cli.config.as_deref())?;
    let pipeline = Pipeline::new(config).context("Invalid build configuration")?;

    match command {
        Commands::Build(args) => run_build(&pipeline, &args)?,
        Commands::Clean => run_clean(&pipeline)?,
    }

    Ok(())
}

fn load_config(root: &Path, explicit: Option<&Path>) -> Result<BuildConfig> {
    let config = match explicit {
        Some(path) => {
            let path = if path.is_relative() {
                root.join(path)
            } else {
                path.to_path_buf()
            };
            BuildConfig::from_file(&path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?
        }
        None => {
            let default = root.join(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                BuildConfig::from_file(&default)
                    .with_context(|| format!("Failed to load configuration {}", default.display()))?
            } else {
                log::debug!("No {DEFAULT_CONFIG_FILE} in {}, using defaults", root.display());
                BuildConfig::default()
            }
        }
    };
    Ok(config.rooted_at(root))
}

fn run_build(pipeline: &Pipeline, args: &BuildArgs) -> Result<()> {
    let report = pipeline.build().context("Build failed")?;
    if args.json {
        print_stdout(&serde_json::to_string_pretty(&report)?)?;
    } else {
        log::info!(
            "Built {} files from {} tokens",
            report.files.len(),
            report.tokens
        );
    }
    Ok(())
}

fn run_clean(pipeline: &Pipeline) -> Result<()> {
    let removed = pipeline.clean().context("Clean failed")?;
    log::info!("Removed {} generated files", removed.len());
    Ok(())
}
