/// advpl-outline: function/parameter/variable outline for AdvPL sources
///
/// Commands:
/// - outline: print the outline of one file
/// - goto: print the line a function is declared on
/// - watch: re-print the outline every time the file changes
/// - init-config: write the default configuration file
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use advpl_outline::config::{CONFIG_FILE_NAME, OutlineConfig};
use advpl_outline::outline::{build_outline, render_json, render_text};
use advpl_outline::session::{HostEvent, OutlineSession, read_document};
use advpl_outline::watcher::DocumentWatcher;

#[derive(Parser)]
#[command(name = "advpl-outline")]
#[command(about = "Outline of functions, parameters and variables in AdvPL sources", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./advpl-outline.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Optional log file path for debug logging
    #[arg(short, long, global = true)]
    log: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the outline of a source file
    Outline {
        file: PathBuf,

        /// Emit JSON instead of an indented tree
        #[arg(long)]
        json: bool,
    },

    /// Print the 1-based line where a function is declared
    Goto { file: PathBuf, function: String },

    /// Re-print the outline whenever the file changes
    Watch {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log.as_ref())?;

    match cli.command {
        Commands::InitConfig { force } => init_config(cli.config.as_deref(), force),
        Commands::Outline { file, json } => {
            print_outline(&load_config(cli.config.as_deref())?, &file, json)
        }
        Commands::Goto { file, function } => {
            goto(&load_config(cli.config.as_deref())?, &file, &function)
        }
        Commands::Watch { file, json } => {
            watch(&load_config(cli.config.as_deref())?, &file, json).await
        }
    }
}

/// Load and validate configuration; broken rules are reported here instead
/// of silently yielding an empty outline
fn load_config(path: Option<&Path>) -> Result<OutlineConfig> {
    let config = OutlineConfig::load(path)?;
    config.validate()?;
    Ok(config)
}

/// Initialize logging with optional file output
fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    if let Some(log_file) = log_path {
        // With log file: info+ to file, warn+ to stderr
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        let file_appender = tracing_appender::rolling::never(
            log_file.parent().unwrap_or_else(|| Path::new(".")),
            log_file
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("advpl-outline.log"),
        );

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(file_appender.and(std::io::stderr.with_max_level(tracing::Level::WARN)))
            .init();

        eprintln!("Debug logging enabled: {:?}", log_file);
    } else {
        // No log file: warn+ to stderr only (unless RUST_LOG overrides)
        let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

fn init_config(path: Option<&Path>, force: bool) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    OutlineConfig::default().save(&path)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn render(session: &OutlineSession, json: bool) -> Result<String> {
    let nodes = build_outline(session.tree());
    if json {
        render_json(&nodes)
    } else {
        Ok(render_text(&nodes))
    }
}

fn open_session(config: &OutlineConfig, file: &Path) -> Result<OutlineSession> {
    let document = read_document(file)?;
    let mut session = OutlineSession::new(config);
    if let Some(message) = session.activation_message() {
        info!("{}", message);
        eprintln!("{}", message);
    }
    session.handle(HostEvent::ActiveDocumentChanged(Some(document)));
    Ok(session)
}

fn print_outline(config: &OutlineConfig, file: &Path, json: bool) -> Result<()> {
    let session = open_session(config, file)?;
    print!("{}", render(&session, json)?);
    Ok(())
}

fn goto(config: &OutlineConfig, file: &Path, function: &str) -> Result<()> {
    let session = open_session(config, file)?;
    let symbol = session
        .find(function)
        .with_context(|| format!("Function '{}' not found in {}", function, file.display()))?;

    if let Some(target) = session.navigate(symbol.line_number) {
        debug!("Cursor target: line {} column {}", target.line, target.column);
    }
    println!("{}", symbol.line_number);
    Ok(())
}

async fn watch(config: &OutlineConfig, file: &Path, json: bool) -> Result<()> {
    // Canonical path so the session and watcher agree on the document uri
    let mut watcher = DocumentWatcher::new(file)?;
    let mut session = open_session(config, watcher.path())?;
    print!("{}", render(&session, json)?);

    let mut events = watcher.start_watching()?;
    info!("Watching {} (Ctrl-C to stop)", watcher.path().display());

    loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else { break };
                session.handle(event);
                println!("---");
                print!("{}", render(&session, json)?);
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    watcher.stop();
    info!("{}", session.deactivation_message());
    eprintln!("{}", session.deactivation_message());
    Ok(())
}
