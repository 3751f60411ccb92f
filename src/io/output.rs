use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::form::Registration;

use super::DocumentFormat;

/// Where the serialized registrations go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    Stdout,
    File(PathBuf),
}

impl OutputDestination {
    pub fn file(path: impl AsRef<Path>) -> Self {
        OutputDestination::File(path.as_ref().to_path_buf())
    }
}

/// Controls how confirmed registrations are serialized once the UI exits.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub pretty: bool,
    pub destinations: Vec<OutputDestination>,
}

impl OutputOptions {
    pub fn new(format: DocumentFormat) -> Self {
        Self {
            format,
            pretty: true,
            destinations: vec![OutputDestination::Stdout],
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_destinations(mut self, destinations: Vec<OutputDestination>) -> Self {
        self.destinations = destinations;
        self
    }
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self::new(DocumentFormat::Json)
    }
}

// TOML has no top-level arrays, so every format gets a keyed document.
#[derive(Serialize)]
struct RegistrationBatch<'a> {
    registrations: &'a [Registration],
}

/// Serialize the session's registrations and write them to every destination.
pub fn emit_registrations(registrations: &[Registration], options: &OutputOptions) -> Result<()> {
    emit(&RegistrationBatch { registrations }, options)
}

pub fn emit<T: Serialize + ?Sized>(value: &T, options: &OutputOptions) -> Result<()> {
    if options.destinations.is_empty() {
        return Ok(());
    }
    let mut payload = render(value, options.format, options.pretty)?;
    payload.push('\n');
    options
        .destinations
        .iter()
        .try_for_each(|destination| destination.write(&payload))
}

fn render<T: Serialize + ?Sized>(value: &T, format: DocumentFormat, pretty: bool) -> Result<String> {
    let rendered = match (format, pretty) {
        (DocumentFormat::Json, true) => serde_json::to_string_pretty(value)?,
        (DocumentFormat::Json, false) => serde_json::to_string(value)?,
        #[cfg(feature = "yaml")]
        (DocumentFormat::Yaml, _) => serde_yaml::to_string(value)?,
        #[cfg(feature = "toml")]
        (DocumentFormat::Toml, true) => toml::to_string_pretty(value)?,
        #[cfg(feature = "toml")]
        (DocumentFormat::Toml, false) => toml::to_string(value)?,
    };
    Ok(rendered)
}

impl OutputDestination {
    fn write(&self, payload: &str) -> Result<()> {
        match self {
            OutputDestination::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(payload.as_bytes())
                    .and_then(|_| stdout.flush())
                    .context("failed to write to stdout")
            }
            OutputDestination::File(path) => {
                let file = File::create(path)
                    .with_context(|| format!("failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                writer
                    .write_all(payload.as_bytes())
                    .and_then(|_| writer.flush())
                    .with_context(|| format!("failed to write to file {}", path.display()))
            }
        }
    }
}
