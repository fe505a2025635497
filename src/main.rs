use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use oraclegen::{run, DriverConfig, OracleConfig};
use oraclegen_core::Settings;
use oraclegen_io::LoadOptions;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "oraclegen", version, about = "Generate gold transition oracles from annotated passages")]
struct Cli {
    /// Files or directories to process. If omitted, inputs are discovered
    /// under the data directory.
    paths: Vec<PathBuf>,

    /// Root holding one directory per split
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory receiving the oracle files
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Split directory to process (repeatable)
    #[arg(long = "split")]
    splits: Vec<String>,

    /// Comma-separated settings to apply, or "default" for none
    #[arg(long, default_value = "implicit,linkage")]
    settings: String,

    /// Produce one oracle per valid settings combination (overrides --settings)
    #[arg(long, default_value_t = false)]
    all_settings: bool,

    /// Add normalized-text and position attributes to terminals
    #[arg(long, default_value_t = false)]
    annotate: bool,

    /// Path to a TOML config file
    #[arg(long, default_value = "oraclegen.toml")]
    config: PathBuf,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the effective config as TOML and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    let mut config = OracleConfig::load(&cli.config);
    if let Some(dir) = cli.data_dir {
        config.paths.data_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        config.paths.output_dir = dir;
    }
    if !cli.splits.is_empty() {
        config.paths.splits = cli.splits;
    }
    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let settings: Vec<Settings> = if cli.all_settings {
        Settings::enumerate_all().collect()
    } else {
        vec![cli
            .settings
            .parse()
            .with_context(|| format!("invalid --settings {:?}", cli.settings))?]
    };

    let mut driver = DriverConfig::from(config);
    driver.load = LoadOptions { annotate: cli.annotate };
    driver.inputs = cli.paths;

    let summary = run(&driver, &settings)?;
    if summary.written == 0 {
        tracing::warn!(
            "No oracles written (data dir {}, {} input(s) given)",
            driver.paths.data_dir.display(),
            driver.inputs.len()
        );
    }
    Ok(())
}

fn init_tracing(log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let (file_layer, guard) = match log_file {
        Some(path) => {
            let name = path.file_name().context("--log-file must name a file")?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            let layer = tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oraclegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();
    Ok(guard)
}
