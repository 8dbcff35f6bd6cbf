use anyhow::{Context, bail};
use clap::Parser;
use clap::error::ErrorKind;
use walknet::cli::{Cli, ExitCode, normalize_args};
use walknet::{Converter, Settings, logging};

fn main() -> std::process::ExitCode {
    run().into()
}

fn run() -> ExitCode {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::UsageError,
            };
        }
    };

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e:#}");
            return ExitCode::GeneralError;
        }
    };

    logging::init_with_config(&settings.logging);

    if cli.show_config {
        return match settings.to_toml() {
            Ok(toml_str) => {
                println!("{toml_str}");
                ExitCode::Success
            }
            Err(e) => {
                eprintln!("Error displaying config: {e}");
                ExitCode::GeneralError
            }
        };
    }

    let Some(walks) = cli.walks else {
        // clap enforces -walks unless --show-config was given
        return ExitCode::UsageError;
    };

    // Missing input is reported by the converter before anything else is said
    if cli.file_to_write.is_none() && walks.exists() {
        eprintln!(
            "File to write not set. Writing {} into walk directory.",
            settings.output.file_name
        );
    }

    match Converter::new(&settings).run(&walks, cli.file_to_write.as_deref()) {
        Ok(report) => {
            for failure in &report.ingest.failures {
                eprintln!("{failure}");
            }
            for warning in &report.ingest.warnings {
                eprintln!("WARNING: {warning}");
            }
            eprintln!("{}", report.summary());
            ExitCode::from_report(&report)
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::from_error(&e)
        }
    }
}

/// Explicit `--config` must exist; otherwise the workspace settings (if any) are used.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    match &cli.config {
        Some(path) => {
            if !path.is_file() {
                bail!("settings file not found: {}", path.display());
            }
            Settings::load_from(path)
                .map_err(|e| anyhow::anyhow!("{e}"))
                .with_context(|| format!("cannot load {}", path.display()))
        }
        None => Settings::load()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .context("cannot load workspace settings"),
    }
}
