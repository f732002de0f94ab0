//! Configuration conversion utilities for CLI arguments

use crate::cli::main_impl::{Cli, CliLogFormat, CliOutputFormat};
use crate::{
    config::PickerConfig,
    tracing_config::{events, spans, TracingConfig, TracingFormat, TracingOutput},
};
use anyhow::{Context, Result};

/// Convert CLI arguments to a `PickerConfig`
pub(crate) struct CliConfigBuilder;

impl CliConfigBuilder {
    /// Build the picker configuration: the config file if given, then flag overrides
    pub(crate) fn from_cli(cli: &Cli) -> Result<PickerConfig> {
        let mut config = if let Some(path) = &cli.config {
            let _span = spans::config_loading(path).entered();
            PickerConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config '{}'", path.display()))?
        } else {
            PickerConfig::default()
        };

        if cli.no_alpha {
            config.alpha = false;
        }

        // Inputs on the command line replace any configured initial color.
        config.color = None;

        config.validate().context("Invalid configuration")?;
        Ok(config)
    }

    /// Build the tracing configuration from the logging flags
    pub(crate) fn tracing_config(cli: &Cli) -> Result<TracingConfig> {
        let format = match cli.log_format {
            CliLogFormat::Console => TracingFormat::Console,
            CliLogFormat::Compact => TracingFormat::Compact,
            #[cfg(feature = "tracing-json")]
            CliLogFormat::Json => TracingFormat::Json,
            #[cfg(not(feature = "tracing-json"))]
            CliLogFormat::Json => {
                anyhow::bail!("--log-format json requires the 'tracing-json' feature")
            },
        };

        let output = match &cli.log_file {
            None => TracingOutput::Console,
            #[cfg(feature = "tracing-files")]
            Some(path) => TracingOutput::File(path.clone()),
            #[cfg(not(feature = "tracing-files"))]
            Some(path) => anyhow::bail!(
                "--log-file '{}' requires the 'tracing-files' feature",
                path.display()
            ),
        };

        Ok(TracingConfig::new()
            .with_verbosity(cli.verbose)
            .with_format(format)
            .with_output(output))
    }

    /// Validate CLI arguments for consistency
    pub(crate) fn validate_cli(cli: &Cli) -> Result<()> {
        if let Some(path) = &cli.config {
            if !path.is_file() {
                anyhow::bail!("Config file '{}' does not exist", path.display());
            }
        }

        if cli.input.iter().filter(|i| i.as_str() == "-").count() > 1 {
            anyhow::bail!("stdin (\"-\") can only be given once");
        }

        if cli.no_alpha && matches!(cli.format, CliOutputFormat::Rgba | CliOutputFormat::Hsla) {
            events::warning_with_recommendation(
                "alpha is disabled, every converted color will have alpha 1",
                "use --format rgb or --format hsl",
            );
        }

        Ok(())
    }
}
