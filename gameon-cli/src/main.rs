use std::fmt::{Display, Write as _};
use std::fs::{self, File};
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gameon::{
    Clock, DocumentFormat, FieldStatus, FixedClock, FormBlueprint, OutputDestination,
    OutputOptions, RegistrationDraft, RegistrationUi, SystemClock, UiOptions, bind,
    default_blueprint, emit_registrations, parse_document_str,
    app::DEFAULT_NARROW_BREAKPOINT,
    form::FieldIssue,
};

#[derive(Debug, Parser)]
#[command(
    name = "gameon",
    version,
    about = "Sign up for GameOn tournaments from the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Form blueprint spec: file path, inline payload, or "-" for stdin
    #[arg(long = "form", value_name = "SPEC", global = true)]
    form: Option<String>,

    /// Title shown in the page and modal borders
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations for confirmed registrations ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force", short_alias = 'y', alias = "yes")]
    force: bool,

    /// Terminal width (columns) at or below which the hero yields to the modal
    #[arg(long = "narrow-width", value_name = "COLS", default_value_t = DEFAULT_NARROW_BREAKPOINT)]
    narrow_width: u16,

    /// Hide the key hints in the footer
    #[arg(long = "no-help")]
    no_help: bool,

    /// Quit on the first Ctrl+Q even with unsubmitted input
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// JSON keymap replacing the bundled key bindings
    #[arg(long = "keymap", value_name = "PATH")]
    keymap: Option<PathBuf>,

    /// Write tracing output to this file (filter with RUST_LOG, default info)
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a registration document without opening the UI
    Check {
        /// Registration spec: file path, inline payload, or "-" for stdin
        #[arg(value_name = "SPEC")]
        registration: String,

        /// Evaluate birthdates against this day instead of today
        #[arg(long = "today", value_name = "YYYY-MM-DD")]
        today: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut problems = Problems::default();
    let blueprint = load_blueprint(cli.form.as_deref(), &mut problems);

    match &cli.command {
        Some(Command::Check {
            registration,
            today,
        }) => {
            if cli.form.as_deref() == Some("-") && registration == "-" {
                problems.input(
                    "form/registration",
                    "cannot read the form and the registration from stdin simultaneously",
                );
            }
            let draft = load_draft(registration, &mut problems);
            problems.finish()?;
            let (Some(blueprint), Some(draft)) = (blueprint, draft) else {
                return Err(eyre!("nothing to check"));
            };
            run_check(&blueprint, draft, *today)
        }
        None => {
            let output = build_output_options(&cli, &mut problems);
            problems.finish()?;
            let Some(blueprint) = blueprint else {
                return Err(eyre!("no form blueprint available"));
            };
            run_ui(&cli, blueprint, output)
        }
    }
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // The alternate screen owns stdout, so logs only go to a file.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn run_ui(cli: &Cli, blueprint: FormBlueprint, output: OutputOptions) -> Result<()> {
    let mut options = UiOptions::default()
        .with_help(!cli.no_help)
        .with_narrow_breakpoint(cli.narrow_width)
        .with_confirm_exit(!cli.no_confirm_exit);
    if let Some(path) = &cli.keymap {
        let source = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read keymap {}", path.display()))?;
        options = options.with_keymap_json(&source).map_err(Report::msg)?;
    }

    let mut ui = RegistrationUi::new(blueprint).with_options(options);
    if let Some(title) = &cli.title {
        ui = ui.with_title(title.clone());
    }

    let registrations = ui.run().map_err(Report::msg)?;
    info!(count = registrations.len(), "session finished");
    if registrations.is_empty() {
        return Ok(());
    }
    emit_registrations(&registrations, &output).map_err(Report::msg)
}

fn run_check(blueprint: &FormBlueprint, draft: RegistrationDraft, today: Option<NaiveDate>) -> Result<()> {
    let clock: Box<dyn Clock> = match today {
        Some(day) => Box::new(FixedClock(
            day.and_hms_opt(12, 0, 0)
                .ok_or_else(|| eyre!("invalid --today value"))?,
        )),
        None => Box::new(SystemClock),
    };
    let locations = blueprint
        .field("location")
        .map(|field| field.options.clone())
        .unwrap_or_default();

    let mut report = String::new();
    let mut flagged = 0usize;
    for (id, status) in draft.statuses(&locations, clock.now()) {
        match FieldIssue::for_status(id, status) {
            Some(issue) => {
                flagged += 1;
                let label = match status {
                    FieldStatus::Empty => "empty",
                    FieldStatus::Invalid | FieldStatus::Valid => "invalid",
                };
                let _ = writeln!(report, "{:<10} {label}: {}", id.element_id(), issue.message);
            }
            None => {
                let _ = writeln!(report, "{:<10} valid", id.element_id());
            }
        }
    }
    print!("{report}");

    if flagged > 0 {
        return Err(eyre!("registration rejected: {flagged} field(s) flagged"));
    }
    println!("registration accepted");
    Ok(())
}

fn load_blueprint(spec: Option<&str>, problems: &mut Problems) -> Option<FormBlueprint> {
    let blueprint = match spec {
        None => default_blueprint(),
        Some(raw) => {
            let value = match load_value(raw, "form") {
                Ok(value) => value,
                Err(err) => {
                    problems.input("form", format!("{err:#}"));
                    return None;
                }
            };
            match FormBlueprint::from_value(value) {
                Ok(blueprint) => blueprint,
                Err(err) => {
                    problems.input("form", format!("{err:#}"));
                    return None;
                }
            }
        }
    };
    if let Err(err) = bind(&blueprint) {
        problems.input("form", format!("{err:#}"));
        return None;
    }
    Some(blueprint)
}

fn load_draft(spec: &str, problems: &mut Problems) -> Option<RegistrationDraft> {
    let value = match load_value(spec, "registration") {
        Ok(value) => value,
        Err(err) => {
            problems.input("registration", format!("{err:#}"));
            return None;
        }
    };
    match serde_json::from_value(value) {
        Ok(draft) => Some(draft),
        Err(err) => {
            problems.input("registration", format!("not a registration document: {err}"));
            None
        }
    }
}

/// Where a document argument points.
#[derive(Debug)]
enum Source {
    Stdin,
    File(PathBuf),
    Inline(String),
}

impl Source {
    // A spec that names no existing file is taken as the document itself.
    fn resolve(spec: &str) -> Self {
        let trimmed = spec.trim_start();
        if spec == "-" {
            Source::Stdin
        } else if trimmed.starts_with('{') || trimmed.starts_with('[') || spec.contains('\n') {
            Source::Inline(spec.to_string())
        } else if Path::new(spec).is_file() {
            Source::File(PathBuf::from(spec))
        } else {
            Source::Inline(spec.to_string())
        }
    }

    fn describe(&self, label: &str) -> String {
        match self {
            Source::Stdin => format!("{label} from stdin"),
            Source::File(path) => format!("{label} file {}", path.display()),
            Source::Inline(_) => format!("inline {label}"),
        }
    }

    fn read(self) -> Result<(String, Option<DocumentFormat>)> {
        match self {
            Source::Stdin => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .wrap_err("could not read stdin")?;
                Ok((buffer, None))
            }
            Source::File(path) => {
                let hint = DocumentFormat::from_extension(&path);
                let contents = fs::read_to_string(&path)
                    .wrap_err_with(|| format!("could not read {}", path.display()))?;
                Ok((contents, hint))
            }
            Source::Inline(contents) => Ok((contents, None)),
        }
    }
}

fn load_value(spec: &str, label: &str) -> Result<Value> {
    let source = Source::resolve(spec);
    let what = source.describe(label);
    let (contents, hint) = source.read()?;
    parse_any(&contents, hint.unwrap_or_default())
        .wrap_err_with(|| format!("could not parse {what} as any of {}", format_list()))
}

/// Try `preferred` first, then every other compiled-in format.
fn parse_any(contents: &str, preferred: DocumentFormat) -> Result<Value> {
    let first_error = match parse_document_str(contents, preferred) {
        Ok(value) => return Ok(value),
        Err(err) => err,
    };
    DocumentFormat::available_formats()
        .into_iter()
        .filter(|format| *format != preferred)
        .find_map(|format| parse_document_str(contents, format).ok())
        .ok_or_else(|| Report::msg(format!("{first_error:#}")))
}

fn format_list() -> String {
    DocumentFormat::available_formats()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Every input/output problem found before the UI starts, reported together.
#[derive(Default)]
struct Problems(Vec<String>);

impl Problems {
    fn input(&mut self, label: &str, message: impl Display) {
        self.0.push(format!("input ({label}): {message}"));
    }

    fn output(&mut self, message: impl Display) {
        self.0.push(format!("output: {message}"));
    }

    fn finish(self) -> Result<()> {
        if self.0.is_empty() {
            return Ok(());
        }
        let listing = self
            .0
            .iter()
            .enumerate()
            .fold(String::new(), |mut out, (idx, problem)| {
                let _ = writeln!(out, "  {}. {problem}", idx + 1);
                out
            });
        Err(eyre!("cannot start, fix the following first:\n{listing}"))
    }
}

fn build_output_options(cli: &Cli, problems: &mut Problems) -> OutputOptions {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            problems.output("output destination cannot be empty");
        } else if raw == "-" {
            destinations.push(OutputDestination::Stdout);
        } else {
            destinations.push(OutputDestination::file(raw));
        }
    }
    if cli.outputs.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }

    let mut format: Option<DocumentFormat> = None;
    for destination in &destinations {
        let OutputDestination::File(path) = destination else {
            continue;
        };
        if path.exists() && !cli.force {
            problems.output(format!(
                "file {} already exists (pass --force to overwrite)",
                path.display()
            ));
        }
        match DocumentFormat::from_extension(path) {
            Some(detected) => match format {
                Some(existing) if existing != detected => problems.output(format!(
                    "output file {} uses {detected} but other destinations use {existing}; align extensions",
                    path.display()
                )),
                _ => format = Some(detected),
            },
            None => problems.output(format!(
                "cannot infer format from output file {}; use one of {}",
                path.display(),
                format_list()
            )),
        }
    }

    OutputOptions::new(format.unwrap_or_default())
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations)
}
