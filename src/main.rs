//! Circuit Scribe CLI
//!
//! Usage:
//!   circuit-scribe emit -c <NAME> [-a key=value]... [-l X,Y] [--xml-pretty]
//!                       [--xml-out PATH] [--pins-out PATH] [--policy PATH]
//!   circuit-scribe list [-o PATH]
//!
//! `emit` prints one JSON document describing the component; `list` prints
//! the catalog. Exit codes: 0 success, 1 pipeline failure, 2 usage error.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use circuit_scribe::{
    emit_with_config, list_catalog, write_artifact, Catalog, DefaultPolicy, EmitConfig, EmitError,
    EmitRequest, Location,
};

#[derive(Parser)]
#[command(name = "circuit-scribe")]
#[command(about = "Instantiate circuit components and emit their canonical form")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Emit one component as canonical XML plus a JSON geometry report
    Emit {
        /// Component factory name, e.g. "Pin", "AND Gate", "Splitter"
        #[arg(short, long)]
        component: String,

        /// Attribute override (repeatable), e.g. --attr facing=west
        #[arg(short = 'a', long = "attr", value_name = "KEY=VALUE")]
        attrs: Vec<String>,

        /// Location for the component, e.g. 40,30 or (40,30)
        #[arg(short, long, default_value = "0,0")]
        loc: Location,

        /// Pretty-print the component XML (applies to the report and --xml-out)
        #[arg(long)]
        xml_pretty: bool,

        /// Write the component XML fragment to the given file path
        #[arg(long, value_name = "PATH")]
        xml_out: Option<PathBuf>,

        /// Write the pin layout JSON array to the given file path
        #[arg(long, value_name = "PATH")]
        pins_out: Option<PathBuf>,

        /// Replace the built-in default-fallback table with a TOML file
        #[arg(long, value_name = "PATH")]
        policy: Option<PathBuf>,
    },

    /// List every component with its library and default attributes
    List {
        /// Write the listing JSON to the given file path instead of stdout
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    let catalog = Catalog::builtin();

    let code = match cli.command {
        Command::Emit {
            component,
            attrs,
            loc,
            xml_pretty,
            xml_out,
            pins_out,
            policy,
        } => run_emit(
            &catalog, component, attrs, loc, xml_pretty, xml_out, pins_out, policy,
        ),
        Command::List { out } => run_list(&catalog, out),
    };
    process::exit(code);
}

#[allow(clippy::too_many_arguments)]
fn run_emit(
    catalog: &Catalog,
    component: String,
    attrs: Vec<String>,
    loc: Location,
    xml_pretty: bool,
    xml_out: Option<PathBuf>,
    pins_out: Option<PathBuf>,
    policy: Option<PathBuf>,
) -> i32 {
    let policy = match policy {
        Some(path) => match DefaultPolicy::from_file(&path) {
            Ok(policy) => policy,
            Err(e) => {
                eprintln!("Error loading policy '{}': {}", path.display(), e);
                return 1;
            }
        },
        None => DefaultPolicy::default(),
    };

    let request = EmitRequest {
        component,
        overrides: attrs,
        location: loc,
    };
    let config = EmitConfig::new()
        .with_pretty_xml(xml_pretty)
        .with_policy(policy);

    let emission = match emit_with_config(catalog, &request, &config) {
        Ok(emission) => emission,
        Err(e) => return report_error(&e),
    };

    if let Some(path) = &xml_out {
        if let Err(e) = write_artifact(path, &emission.xml) {
            return report_error(&e);
        }
    }
    if let Some(path) = &pins_out {
        let pins = match emission.pins_json() {
            Ok(json) => json,
            Err(e) => return report_error(&e),
        };
        if let Err(e) = write_artifact(path, &pins) {
            return report_error(&e);
        }
    }

    match emission.report_json() {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => report_error(&e),
    }
}

fn run_list(catalog: &Catalog, out: Option<PathBuf>) -> i32 {
    let json = match list_catalog(catalog) {
        Ok(json) => json,
        Err(e) => return report_error(&e),
    };
    match out {
        Some(path) => {
            if let Err(e) = write_artifact(&path, &json) {
                return report_error(&e);
            }
            0
        }
        None => {
            println!("{}", json);
            0
        }
    }
}

/// Print a diagnostic for a failed invocation. Unknown component names also
/// get the full catalog so the caller can pick a valid one.
fn report_error(err: &EmitError) -> i32 {
    match err {
        EmitError::FactoryNotFound { name, available } => {
            eprintln!("Component not found: {}", name);
            eprintln!("Available components:");
            for name in available {
                eprintln!("  - {}", name);
            }
        }
        other => eprintln!("Error: {}", other),
    }
    1
}
