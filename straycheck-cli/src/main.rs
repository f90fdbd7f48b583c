//! straycheck CLI - reports unused declarations, under-used struct
//! fields, and repeated defers over parsed syntax forests.
//!
//! The input is one forest JSON document (or a directory searched
//! recursively for `*.json` documents) produced by a frontend that
//! parsed and, optionally, type-resolved a program. Scopes are analyzed
//! independently and in parallel; exit status is 1 when at least one
//! finding is reported.

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use std::path::Path;
use std::process;

use straycheck_core::{
    exit_status, init_structured_logging, load_config, load_forest, load_forest_dir, print_json,
    print_plain, AnalysisOptions, Analyzer, Finding, ScopeForest, StraycheckConfig,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Checker for unused declarations, unused struct fields, and repeated defers"
)]
struct Cli {
    /// Forest JSON file, or directory searched recursively for *.json forests
    #[arg(default_value = ".")]
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Report exported declarations too
    #[arg(short = 'e', long)]
    report_exported: bool,

    /// Minimum use count for struct fields
    #[arg(short = 'n', long, value_name = "N")]
    min_uses: Option<u32>,

    /// Count only assignments to struct fields
    #[arg(short = 'a', long)]
    assignments_only: bool,

    /// Check unused package-level declarations only
    #[arg(long)]
    vars: bool,

    /// Check under-used struct fields only
    #[arg(long)]
    fields: bool,

    /// Check repeated defers only
    #[arg(long)]
    defers: bool,

    /// Subject-name patterns to ignore (regular expressions)
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,
}

/// Merges config-file defaults with CLI flags; flags win.
fn build_options(cli: &Cli, config: Option<&StraycheckConfig>) -> AnalysisOptions {
    let mut options = config
        .and_then(|c| c.analysis.clone())
        .unwrap_or_default();

    // Selecting any pass flag narrows the run to the named passes.
    if cli.vars || cli.fields || cli.defers {
        options.check_decls = cli.vars;
        options.check_fields = cli.fields;
        options.check_defers = cli.defers;
    }
    if cli.report_exported {
        options.report_exported = true;
    }
    if cli.assignments_only {
        options.assignments_only = true;
    }
    if let Some(min_uses) = cli.min_uses {
        options.minimum_use_count = min_uses;
    }
    options.ignore.extend(cli.ignore.iter().cloned());
    options
}

/// Runs the enabled passes over one scope.
fn analyze_scope(scope: &ScopeForest, options: &AnalysisOptions) -> Result<Vec<Finding>> {
    let oracle = scope.resolved_oracle();
    let mut analyzer = Analyzer::new(options.clone());
    if let Some(oracle) = &oracle {
        analyzer = analyzer.with_oracle(oracle);
    }
    analyzer
        .run(&scope.units)
        .with_context(|| format!("analysis failed for scope '{}'", scope.name))
}

fn main() {
    init_structured_logging();

    let cli = Cli::parse();
    // Exit status 1 is reserved for "findings reported"; operational
    // failures exit with 2.
    match run(&cli) {
        Ok(status) => process::exit(status),
        Err(err) => {
            eprintln!("straycheck: {err:#}");
            process::exit(2);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let input = Path::new(&cli.path);

    let config_root = if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or_else(|| Path::new("."))
    };
    let config = load_config(config_root)
        .with_context(|| format!("failed to load config near {}", input.display()))?;
    let options = build_options(cli, config.as_ref());

    let forests = if input.is_dir() {
        load_forest_dir(input)
            .with_context(|| format!("failed to load forests under {}", input.display()))?
    } else {
        vec![load_forest(input)
            .with_context(|| format!("failed to load forest {}", input.display()))?]
    };
    let scopes: Vec<ScopeForest> = forests.into_iter().flat_map(|f| f.scopes).collect();

    let mut findings: Vec<Finding> = scopes
        .par_iter()
        .map(|scope| analyze_scope(scope, &options))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();
    straycheck_core::sort_findings(&mut findings);

    let json = cli.json
        || config
            .as_ref()
            .and_then(|c| c.output.as_ref())
            .and_then(|o| o.format.as_deref())
            == Some("json");
    if json {
        print_json(&findings);
    } else {
        print_plain(&findings);
    }

    Ok(exit_status(&findings))
}
