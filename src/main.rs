use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use doodlebot_assets::{ManifestConfig, ManifestExporter};

/// Export and audit the build-a-doodlebot asset manifest.
#[derive(Debug, Parser)]
#[command(name = "doodlebot-assets", version, about)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Directory containing `doodlebot.config.json`. Relative paths from the file and
  /// from `--output`/`--root` resolve against it.
  #[arg(long, global = true, default_value = ".")]
  config_dir: PathBuf,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Resolve the manifest and write it as JSON.
  Manifest {
    /// Prefix applied to every asset path, overriding the config file.
    #[arg(long)]
    base_url: Option<String>,
    /// Output file, overriding the config file.
    #[arg(long, conflicts_with = "stdout")]
    output: Option<PathBuf>,
    /// Print the manifest instead of writing a file.
    #[arg(long)]
    stdout: bool,
  },
  /// Report manifest entries with no file in the local asset tree.
  Audit {
    /// Asset root, overriding the config file.
    #[arg(long)]
    root: Option<PathBuf>,
  },
}

fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  let default_filter = if cli.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

  let config = ManifestConfig::discover(&cli.config_dir)?;

  match cli.command {
    Command::Manifest {
      base_url,
      output,
      stdout,
    } => {
      let config = config.with_overrides(base_url, output, None);
      log::debug!("using configuration {:?}", config);
      let exporter = ManifestExporter::new(&config.resolver());
      if stdout {
        println!("{}", exporter.render_json()?);
      } else {
        exporter.write_json(&config.output_path(&cli.config_dir))?;
      }
      Ok(ExitCode::SUCCESS)
    }
    Command::Audit { root } => {
      let config = config.with_overrides(None, None, root);
      log::debug!("using configuration {:?}", config);
      let report = ManifestExporter::audit(&config.asset_root_path(&cli.config_dir));
      Ok(report.exit_code())
    }
  }
}
