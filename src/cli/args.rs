//! CLI argument parsing using clap.
//!
//! Walk corpora tooling traditionally spells flags with a single dash
//! (`-walks`, `-fileToWrite`) and matches them case-insensitively.
//! [`normalize_args`] rewrites those spellings into clap's `--long` form
//! before parsing, so both styles are accepted.

use clap::{
    Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::ffi::OsString;
use std::path::PathBuf;

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

const USAGE: &str = "walknet -walks <walk_file_or_walk_directory> [-fileToWrite <file_to_write>]";

/// Help text in the traditional single-dash layout.
fn create_custom_help() -> String {
    let mut help = String::new();

    help.push_str("walknet: walks to Pajek .net file\n");
    help.push_str("---------------------------------\n\n");
    help.push_str(&format!("Usage: {USAGE}\n\n"));

    help.push_str("-walks <walk_file_or_walk_directory>\n");
    help.push_str("\t[Required parameter] Path to the walk directory or the walk file.\n");
    help.push_str("\tFiles ending in .gz are decompressed while reading.\n\n");

    help.push_str("-fileToWrite <file_to_write>\n");
    help.push_str("\t[Optional parameter] The file that will be written.\n");
    help.push_str("\tDefaults to graph.nt in the walk directory.\n\n");

    help.push_str("-c, --config <CONFIG>\n");
    help.push_str("\tPath to custom settings.toml file\n\n");

    help.push_str("--show-config\n");
    help.push_str("\tPrint the effective settings and exit\n\n");

    help.push_str("-h, -help, --help\n");
    help.push_str("\tPrint this help\n");

    help
}

/// Convert random-walk files into a Pajek graph
#[derive(Parser, Debug)]
#[command(
    name = "walknet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Convert random-walk files into a deduplicated Pajek .net graph",
    override_usage = USAGE,
    styles = clap_cargo_style(),
    override_help = create_custom_help()
)]
pub struct Cli {
    /// Path to the walk directory or the walk file
    #[arg(
        long = "walks",
        value_name = "WALK_FILE_OR_WALK_DIRECTORY",
        required_unless_present = "show_config"
    )]
    pub walks: Option<PathBuf>,

    /// The file that will be written
    #[arg(long = "file-to-write", value_name = "FILE_TO_WRITE")]
    pub file_to_write: Option<PathBuf>,

    /// Path to custom settings.toml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the effective settings and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Accepted flag spellings (lowercase, dashes stripped) and their clap form.
const FLAG_ALIASES: &[(&str, &str)] = &[
    ("walks", "--walks"),
    ("filetowrite", "--file-to-write"),
    ("file-to-write", "--file-to-write"),
    ("c", "--config"),
    ("config", "--config"),
    ("showconfig", "--show-config"),
    ("show-config", "--show-config"),
    ("h", "--help"),
    ("help", "--help"),
    ("version", "--version"),
];

/// Flags whose next argument is a value and must pass through untouched.
const VALUE_FLAGS: &[&str] = &["--walks", "--file-to-write", "--config"];

/// Rewrite single-dash and mixed-case flags into the spelling clap expects.
///
/// The first element (binary name) and flag values are left as they are.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut value_expected = false;

    for arg in args {
        if value_expected {
            value_expected = false;
            normalized.push(arg);
            continue;
        }

        let (arg, takes_value) = normalize_flag(arg);
        value_expected = takes_value;
        normalized.push(arg);
    }

    normalized
}

/// Returns the rewritten argument and whether the following argument is its value.
fn normalize_flag(arg: OsString) -> (OsString, bool) {
    let Some(text) = arg.to_str() else {
        return (arg, false);
    };
    if !text.starts_with('-') || text == "-" || text == "--" {
        return (arg, false);
    }

    let body = text.trim_start_matches('-');
    let (name, inline_value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    let lowered = name.to_ascii_lowercase();
    let Some(&(_, canonical)) = FLAG_ALIASES.iter().find(|(alias, _)| *alias == lowered) else {
        // Unknown single-dash words are long flags too; without this clap would
        // read `-helloWorld` as a cluster of short flags starting with `-h`
        if !text.starts_with("--") && body.chars().count() > 1 {
            return (OsString::from(format!("--{body}")), false);
        }
        return (arg, false);
    };

    match inline_value {
        Some(value) => (OsString::from(format!("{canonical}={value}")), false),
        None => (OsString::from(canonical), VALUE_FLAGS.contains(&canonical)),
    }
}
