use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use guitartube::{
    check_sheet, convert_to_diagram, format_seconds_to_time, is_valid_time_format, parse_shape,
    parse_sheet, parse_time_to_seconds, time_format_suggestion, ChordShape,
};

#[derive(Parser)]
#[command(name = "guitartube", version, about = "Check GuitarTube lesson sheets, timestamps and chord shapes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check every caption and chord shape in a YAML lesson sheet
    Check {
        /// Lesson sheet to check
        sheet: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate timestamps and suggest corrections
    Time {
        #[arg(required = true)]
        values: Vec<String>,
    },
    /// Print the diagram for a library chord or an explicit shape
    Chord {
        /// Chord name from the library
        name: Option<String>,
        /// Comma-separated frets, low E to high E (e.g. X,3,2,0,1,0)
        #[arg(long, value_delimiter = ',', requires = "fingering")]
        frets: Option<Vec<String>>,
        /// Comma-separated fingers, low E to high E (e.g. X,3,2,0,1,0)
        #[arg(long, value_delimiter = ',', requires = "frets")]
        fingering: Option<Vec<String>>,
    },
    /// List the chords in the built-in library
    Chords,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TimeReport<'a> {
    value: &'a str,
    is_valid: bool,
    seconds: Option<u32>,
    normalized: Option<String>,
    suggestion: Option<String>,
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error writing JSON: {}", e);
            process::exit(1);
        }
    }
}

fn check(sheet_path: &Path, output: Option<&Path>) {
    let source = match fs::read_to_string(sheet_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", sheet_path.display(), e);
            process::exit(1);
        }
    };

    let mut sheet = match parse_sheet(&source) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Chords not defined on the sheet come from the library
    for name in sheet.missing_shapes() {
        match guitartube_chords::load_shape(&name) {
            Ok(shape) => {
                tracing::debug!(chord = %name, "using library shape");
                sheet.chords.insert(name, shape);
            }
            Err(e) => tracing::warn!(chord = %name, error = %e, "no shape for chord"),
        }
    }

    let report = check_sheet(&sheet);
    let json = match serde_json::to_string_pretty(&report) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error writing report: {}", e);
            process::exit(1);
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing to '{}': {}", path.display(), e);
                process::exit(1);
            }
            eprintln!("Wrote report to {}", path.display());
        }
        None => println!("{}", json),
    }

    if !report.is_clean() {
        eprintln!(
            "{} of {} captions invalid, {} chords without a shape",
            report.invalid_caption_count(),
            report.captions.len(),
            report.missing_shapes.len()
        );
        process::exit(1);
    }
}

fn time(values: &[String]) {
    let reports: Vec<TimeReport> = values
        .iter()
        .map(|value| {
            let is_valid = is_valid_time_format(value);
            let seconds = is_valid.then(|| parse_time_to_seconds(value));
            TimeReport {
                value,
                is_valid,
                seconds,
                normalized: seconds.map(|s| format_seconds_to_time(i64::from(s))),
                suggestion: (!is_valid).then(|| time_format_suggestion(value)),
            }
        })
        .collect();
    print_json(&reports);
}

fn chord(name: Option<String>, frets: Option<Vec<String>>, fingering: Option<Vec<String>>) {
    let shape = match (name, frets, fingering) {
        (name, Some(frets), Some(fingering)) => {
            let shape = ChordShape::new(frets, fingering);
            match name {
                Some(name) => shape.with_name(name),
                None => shape,
            }
        }
        (Some(name), _, _) => match guitartube_chords::load_shape(&name) {
            Ok(shape) => shape,
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: guitartube chord <name> | --frets <F,...> --fingering <F,...>");
            process::exit(1);
        }
    };

    let diagram = match convert_to_diagram(&shape) {
        Ok(diagram) => diagram,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let check = diagram.check();
    for warning in &check.warnings {
        eprintln!("warning: {}", warning);
    }
    for error in &check.errors {
        eprintln!("error: {}", error);
    }
    print_json(&diagram);

    if !check.is_valid {
        process::exit(1);
    }
}

fn chords() {
    for entry in guitartube_chords::get_all_chords() {
        match parse_shape(&entry.content) {
            Ok(shape) => println!("{:<8} {}", entry.name, shape.frets.join(" ")),
            Err(e) => {
                tracing::warn!(chord = %entry.name, error = %e, "unreadable library shape");
                println!("{}", entry.name);
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { sheet, output } => check(&sheet, output.as_deref()),
        Command::Time { values } => time(&values),
        Command::Chord { name, frets, fingering } => chord(name, frets, fingering),
        Command::Chords => chords(),
    }
}
