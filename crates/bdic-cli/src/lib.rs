// bdic-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use bdic_spell::SpellChecker;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Dictionary file extension.
const BDIC_EXT: &str = "bdic";

/// Environment variable naming a dictionary file or a directory holding one.
pub const DICT_PATH_ENV: &str = "BDIC_DICT_PATH";

/// Environment variable holding log filter directives, e.g. `debug` or
/// `bdic_spell::dictionary=trace`.
pub const LOG_ENV: &str = "BDIC_LOG";

/// Locate a dictionary, read it and create a SpellChecker.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `BDIC_DICT_PATH` environment variable
/// 3. Current working directory
///
/// Each entry may name a `.bdic` file or a directory; in a directory the
/// first `*.bdic` file by name is used. A dictionary that is found but
/// cannot be parsed is an error here, even though the library itself would
/// accept every word with it.
pub fn load_checker(dict_path: Option<&str>) -> Result<(SpellChecker, PathBuf), String> {
    let search_paths = build_search_paths(dict_path);

    for candidate in &search_paths {
        let Some(path) = resolve_dictionary(candidate) else {
            continue;
        };
        let data =
            std::fs::read(&path).map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        log::debug!("loading {} ({} bytes)", path.display(), data.len());

        let checker = SpellChecker::new(data);
        if let Err(e) = checker.initialize() {
            return Err(format!("failed to parse {}: {e}", path.display()));
        }
        return Ok((checker, path));
    }

    Err(format!(
        "could not find a .{} dictionary in any of the search paths:\n{}",
        BDIC_EXT,
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of files or directories to search for a dictionary.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }
    if let Ok(env_path) = std::env::var(DICT_PATH_ENV) {
        paths.push(PathBuf::from(env_path));
    }
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd);
    }

    paths
}

/// A file path is used as is; a directory yields its first `*.bdic` file.
fn resolve_dictionary(path: &Path) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    if !path.is_dir() {
        return None;
    }
    let mut found: Vec<PathBuf> = std::fs::read_dir(path)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && is_bdic(p))
        .collect();
    found.sort();
    found.into_iter().next()
}

fn is_bdic(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(BDIC_EXT))
}

// ---------------------------------------------------------------------------
// Arguments
// ---------------------------------------------------------------------------

/// Command line flags shared by the tools. Each tool reads the ones it
/// supports; anything not starting with `-` is a word.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// `-d PATH`, `--dict-path PATH` or `--dict-path=PATH`
    pub dict_path: Option<String>,
    /// `-h`, `--help`
    pub help: bool,
    /// `-v`, `--verbose`
    pub verbose: bool,
    /// `-s`, `--suggest`
    pub suggest: bool,
    /// `-n N`, `--max-suggestions N` or `--max-suggestions=N`
    pub max_suggestions: Option<usize>,
    pub words: Vec<String>,
}

impl CliArgs {
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut parsed = Self::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let (name, inline) = match arg.split_once('=') {
                Some((name, value)) if name.starts_with("--") => (name, Some(value)),
                _ => (arg.as_str(), None),
            };
            let mut value = || {
                inline
                    .or_else(|| iter.next().map(String::as_str))
                    .ok_or_else(|| format!("{name} requires a value"))
            };

            match name {
                "-h" | "--help" => parsed.help = true,
                "-v" | "--verbose" => parsed.verbose = true,
                "-s" | "--suggest" => parsed.suggest = true,
                "-d" | "--dict-path" => parsed.dict_path = Some(value()?.to_string()),
                "-n" | "--max-suggestions" => {
                    let count = value()?;
                    let count = count
                        .parse()
                        .map_err(|_| format!("invalid number for {name}: {count}"))?;
                    parsed.max_suggestions = Some(count);
                }
                _ if arg.starts_with('-') && arg.len() > 1 => {
                    return Err(format!("unknown option {arg}"));
                }
                _ => parsed.words.push(arg.clone()),
            }
        }

        Ok(parsed)
    }

    /// Parse the process arguments, exiting with a message on bad input.
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Self::parse(&args).unwrap_or_else(|e| fatal(&e))
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "debug" } else { "warn" })
}

/// Build the log filter: `BDIC_LOG` directives when set, otherwise `debug`
/// with `-v` and `warn` without.
pub fn log_filter(verbose: bool, directives: Option<&str>) -> Result<EnvFilter, ParseError> {
    match directives.map(str::trim).filter(|d| !d.is_empty()) {
        Some(directives) => EnvFilter::try_new(directives),
        None => Ok(default_filter(verbose)),
    }
}

/// Install a stderr subscriber. Records from the `log` facade used by the
/// library crates are forwarded to it. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = log_filter(verbose, directives.as_deref()).unwrap_or_else(|e| {
        eprintln!("warning: ignoring {LOG_ENV}: {e}");
        default_filter(verbose)
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
