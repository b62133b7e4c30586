//! Launcher Matrix CLI
//!
//! Entry point for the `launcher-matrix` command-line tool.

use clap::{Args, Parser, Subcommand};
use launcher_matrix::config::{ConfigError, DEFAULT_CONFIG_FILE};
use launcher_matrix::{
    lint_config, JsonLauncher, LauncherMap, LintReport, MatrixConfig, ResolvedConfig,
};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "launcher-matrix")]
#[command(about = "Named browser launchers for remote cross-browser test runs", version)]
struct Cli {
    /// Diagnostic log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that builds a catalog.
#[derive(Args)]
struct MatrixArgs {
    /// Path to config file (default: launchers.toml, if present)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Launcher family for every entry
    #[arg(long)]
    base: Option<String>,

    /// Prefix for every launcher name
    #[arg(long)]
    prefix: Option<String>,

    /// Include mobile device launchers
    #[arg(long, overrides_with = "no_mobile")]
    mobile: bool,

    /// Leave out mobile device launchers, even if the config file enables them
    #[arg(long, overrides_with = "mobile")]
    no_mobile: bool,
}

impl MatrixArgs {
    /// `Some` only when a mobile flag was given; the last one wins.
    fn mobile(&self) -> Option<bool> {
        match (self.mobile, self.no_mobile) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the launcher catalog
    List {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Output descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the final launcher mapping as JSON
    Generate {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Select every catalog launcher (overrides the config file)
        #[arg(long, conflicts_with = "include")]
        all: bool,

        /// Launcher to include (repeatable; replaces configured includes)
        #[arg(long, short = 'i')]
        include: Vec<String>,

        /// Launcher name to exclude (repeatable; replaces configured excludes)
        #[arg(long, short = 'x')]
        exclude: Vec<String>,

        /// Regex of launcher names to exclude (repeatable)
        #[arg(long)]
        exclude_pattern: Vec<String>,

        /// Skip the empty/duplicate checks
        #[arg(long)]
        no_lint: bool,
    },

    /// Check a JSON launcher mapping for emptiness and duplicates
    Lint {
        /// JSON file holding a name -> launcher object
        file: PathBuf,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Show the merged configuration and its sources
    ShowConfig {
        #[command(flatten)]
        matrix: MatrixArgs,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = launcher_matrix::logging::init(&cli.log_level) {
        eprintln!("{}", e);
    }

    match cli.command {
        Commands::List { matrix, json } => {
            run_list(&matrix, json);
        }
        Commands::Generate {
            matrix,
            all,
            include,
            exclude,
            exclude_pattern,
            no_lint,
        } => {
            let spec = spec_overrides(all, include, exclude, exclude_pattern);
            run_generate(&matrix, spec, no_lint);
        }
        Commands::Lint { file, json } => {
            run_lint(&file, json);
        }
        Commands::ShowConfig { matrix } => {
            run_show_config(&matrix);
        }
    }
}

fn run_list(args: &MatrixArgs, json_output: bool) {
    let matrix = load_matrix(args, None);
    let builder = matrix.builder();

    if json_output {
        let catalog: LauncherMap<_> = builder
            .catalog()
            .iter()
            .map(|(name, desc)| (name.clone(), desc.clone()))
            .collect();
        print_json(&catalog);
        return;
    }

    println!(
        "Launcher catalog ({} total, base {}):\n",
        builder.catalog().len(),
        builder.base()
    );
    for (name, desc) in builder.catalog().iter() {
        let mut line = format!("  {:<24} {}", name, desc.browser);
        if let Some(ref v) = desc.browser_version {
            line.push_str(&format!(" {}", v));
        }
        line.push_str(&format!(" on {} {}", desc.os, desc.os_version));
        if let Some(ref device) = desc.device {
            line.push_str(&format!(" ({})", device));
        }
        println!("{}", line);
    }
}

fn run_generate(args: &MatrixArgs, spec: Option<Value>, no_lint: bool) {
    let matrix = load_matrix(args, spec);

    let result = if no_lint {
        matrix.assemble().map_err(|e| e.to_string())
    } else {
        matrix.generate().map_err(|e| e.to_string())
    };

    match result {
        Ok(launchers) => print_json(&launchers),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run_lint(path: &Path, json_output: bool) {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error reading {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let launchers: LauncherMap<JsonLauncher> = match serde_json::from_str(&contents) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error parsing {}: {}", path.display(), e);
            process::exit(1);
        }
    };

    let result = lint_config(&launchers);

    if json_output {
        print_json(&LintReport::from_result(launchers.len(), &result));
    } else {
        match &result {
            Ok(()) => println!(
                "Configuration valid: {} ({} launchers)",
                path.display(),
                launchers.len()
            ),
            Err(e) => eprintln!("Configuration error: {}", e),
        }
    }

    if result.is_err() {
        process::exit(1);
    }
}

fn run_show_config(args: &MatrixArgs) {
    let resolved = match resolve(args, None) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    };

    match resolved.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

/// Build the `spec` CLI layer, if any spec flag was given.
fn spec_overrides(
    all: bool,
    include: Vec<String>,
    exclude: Vec<String>,
    exclude_pattern: Vec<String>,
) -> Option<Value> {
    let mut spec = Map::new();

    if all {
        spec.insert("includes".to_string(), json!("all"));
    } else if !include.is_empty() {
        spec.insert("includes".to_string(), json!(include));
    }

    if !exclude.is_empty() || !exclude_pattern.is_empty() {
        let excludes: Vec<Value> = exclude
            .into_iter()
            .map(Value::String)
            .chain(exclude_pattern.into_iter().map(|p| json!({ "pattern": p })))
            .collect();
        spec.insert("excludes".to_string(), Value::Array(excludes));
    }

    if spec.is_empty() {
        None
    } else {
        Some(Value::Object(spec))
    }
}

/// Build the CLI override layer from flags that were actually set.
fn cli_overrides(args: &MatrixArgs, spec: Option<Value>) -> Option<Value> {
    let mut options = Map::new();
    if let Some(ref base) = args.base {
        options.insert("base".to_string(), json!(base));
    }
    if let Some(ref prefix) = args.prefix {
        options.insert("prefix".to_string(), json!(prefix));
    }
    if let Some(mobile) = args.mobile() {
        options.insert("mobile".to_string(), json!(mobile));
    }

    let mut layer = Map::new();
    if !options.is_empty() {
        layer.insert("options".to_string(), Value::Object(options));
    }
    if let Some(spec) = spec {
        layer.insert("spec".to_string(), spec);
    }

    if layer.is_empty() {
        None
    } else {
        Some(Value::Object(layer))
    }
}

fn resolve(args: &MatrixArgs, spec: Option<Value>) -> Result<ResolvedConfig, ConfigError> {
    let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
    let path = match args.config {
        Some(ref p) => Some(p.as_path()),
        None if default_path.exists() => Some(default_path.as_path()),
        None => None,
    };

    ResolvedConfig::build(path, cli_overrides(args, spec))
}

fn load_matrix(args: &MatrixArgs, spec: Option<Value>) -> MatrixConfig {
    match resolve(args, spec).and_then(|r| r.matrix()) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            process::exit(1);
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}
