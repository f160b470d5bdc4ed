use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use glob::glob;
use log::{LevelFilter, info};
use simpleicon_core::{IconReport, LoadError, SourceError, load_icon_file, render};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SIMPLEICON_BUILD_COMMIT"),
    ", ",
    env!("SIMPLEICON_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "simpleicon")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Decode SimpleIcon files and print them as ASCII art.",
    long_about = None,
    after_help = "Examples:\n  simpleicon show sword.txt\n  simpleicon show 'icons/shield*.txt' --json --pretty\n  simpleicon display sword.txt -o sword.ascii"
)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode an icon file and print it (ASCII art by default).
    #[command(alias = "display")]
    Show {
        /// Path (or glob matching exactly one file) of a SimpleIcon text file
        input: PathBuf,

        /// Emit a JSON summary instead of ASCII art
        #[arg(long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(long, requires = "json")]
        pretty: bool,

        /// Write output to a file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = cli.verbose.log_level_filter();
    env_logger::Builder::new().filter_level(level).init();
    // -q and below also silence status lines
    let quiet = level < LevelFilter::Warn;

    let result = match cli.command {
        Commands::Show {
            input,
            json,
            pretty,
            output,
        } => cmd_show(input, json, pretty, output, quiet),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

impl From<LoadError> for CliError {
    fn from(err: LoadError) -> Self {
        let hint = match &err {
            LoadError::Source(SourceError::NotFound { .. }) => "check the input path",
            LoadError::Source(SourceError::Io(_)) => "the input must be a readable UTF-8 text file",
            LoadError::Decode(_) => {
                "expected <name>;;<version>;;<width>x<height>;;<pixel-data> with version 1 or 2"
            }
        };
        CliError::new(err.to_string(), Some(hint.to_string()))
    }
}

fn cmd_show(
    input: PathBuf,
    json: bool,
    pretty: bool,
    output: Option<PathBuf>,
    quiet: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;
    if let Some(output_path) = output.as_ref() {
        ensure_distinct_output(&resolved_input, output_path)?;
    }

    let icon = load_icon_file(&resolved_input)?;
    info!(
        "decoded {} as '{}' ({}x{}, version {})",
        resolved_input.display(),
        icon.name(),
        icon.width(),
        icon.height(),
        icon.file_version()
    );

    let text = if json {
        serialize_report(&IconReport::from_icon(&icon), pretty)?
    } else {
        let mut buf = Vec::new();
        render::render(&icon, &mut buf).context("rendering failed")?;
        String::from_utf8(buf).context("rendered output is not UTF-8")?
    };

    let Some(output_path) = output else {
        print!("{}", text);
        return Ok(());
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&output_path, text)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;
    if !quiet {
        eprintln!("OK: output written -> {}", output_path.display());
    }
    Ok(())
}

fn serialize_report(report: &IconReport, pretty: bool) -> Result<String, CliError> {
    let json = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
    .context("JSON serialization failed")?;
    Ok(json + "\n")
}

fn ensure_distinct_output(input: &Path, output: &Path) -> Result<(), CliError> {
    let input_abs = fs::canonicalize(input)
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;
    let same = fs::canonicalize(output)
        .map(|output_abs| output_abs == input_abs)
        .unwrap_or(false);
    if same {
        return Err(CliError::new(
            format!("output path must differ from input: {}", output.display()),
            Some("choose a different output path".to_string()),
        ));
    }
    Ok(())
}

fn validate_input_file(input: &Path) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("check the input path".to_string()),
        ));
    }
    if !input.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("pass a SimpleIcon text file".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &Path) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.to_path_buf());
    }

    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    let mut matches = Vec::new();
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    match matches.len() {
        0 => Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern".to_string()),
        )),
        1 => Ok(matches.remove(0)),
        count => {
            let listed = matches
                .iter()
                .take(3)
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            let more = if count > 3 { ", ..." } else { "" };
            Err(CliError::new(
                format!(
                    "multiple files match pattern '{}' ({} matches); matches: {}{}",
                    pattern, count, listed, more
                ),
                Some("pass a single icon file, or run once per file".to_string()),
            ))
        }
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
