//! typed-href CLI
//!
//! Usage:
//!   typed-href [OPTIONS] <TEMPLATE>
//!
//! Options:
//!   -p, --param <NAME=VALUE>   Single-segment parameter (repeatable)
//!   -l, --list <NAME=A,B,..>   Catch-all parameter (repeatable)
//!       --null <NAME>          Parameter bound to null (repeatable)
//!   -f, --params-file <FILE>   Parameters from a JSON or TOML file
//!   -m, --manifest <FILE>      Route manifest (TOML); TEMPLATE must be listed
//!       --shape                Print the template's parameter shape
//!   -d, --debug                Log resolution steps to stderr
//!   -h, --help                 Print help

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use typed_href::{
    parse, resolve, ParamValue, Params, ResolveError, RouteError, RouteManifest, RouteShape,
};

#[derive(Parser)]
#[command(name = "typed-href")]
#[command(about = "Resolve bracketed route templates into concrete paths")]
struct Cli {
    /// Route template, e.g. /blog/[...slug]
    template: String,

    /// Single-segment parameter as NAME=VALUE
    #[arg(short, long = "param", value_name = "NAME=VALUE", value_parser = parse_key_value)]
    params: Vec<(String, String)>,

    /// Catch-all parameter as NAME=A,B,C (NAME= is an empty list)
    #[arg(short, long = "list", value_name = "NAME=A,B", value_parser = parse_key_value)]
    lists: Vec<(String, String)>,

    /// Parameter explicitly bound to null
    #[arg(long = "null", value_name = "NAME")]
    nulls: Vec<String>,

    /// Parameters from a JSON or TOML file
    #[arg(short = 'f', long)]
    params_file: Option<PathBuf>,

    /// Route manifest (TOML) listing the known routes
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Print the template's parameter shape instead of resolving it
    #[arg(long)]
    shape: bool,

    /// Debug mode: log resolution steps to stderr
    #[arg(short, long)]
    debug: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", s)),
    }
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    // Load manifest
    let manifest = match &cli.manifest {
        Some(path) => match RouteManifest::from_file(path) {
            Ok(m) => Some(m),
            Err(e) => {
                eprintln!("Error loading manifest '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    if cli.shape {
        let shape = match &manifest {
            Some(m) => match m.shape(&cli.template) {
                Some(shape) => shape.clone(),
                None => {
                    eprintln!("Error: unknown route: {}", cli.template);
                    std::process::exit(1);
                }
            },
            None => RouteShape::from_template(parse(&cli.template)),
        };
        print_shape(&shape);
        return;
    }

    let params = build_params(&cli);

    let result = match &manifest {
        Some(m) => m.resolve(&cli.template, Some(&params)),
        None => resolve(&cli.template, Some(&params)).map_err(RouteError::from),
    };

    match result {
        Ok(href) => {
            println!("{}", href);
        }
        Err(RouteError::Resolve(e)) => {
            report(&e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Collect parameters from the file first, then inline flags on top
fn build_params(cli: &Cli) -> Params {
    let mut params = match &cli.params_file {
        Some(path) => match Params::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading params '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Params::new(),
    };

    for (name, value) in &cli.params {
        params.insert(name.as_str(), value.as_str());
    }
    for (name, value) in &cli.lists {
        let items: Vec<&str> = if value.is_empty() {
            Vec::new()
        } else {
            value.split(',').collect()
        };
        params.insert(name.as_str(), items);
    }
    for name in &cli.nulls {
        params.insert(name.as_str(), ParamValue::Null);
    }
    params
}

fn report(err: &ResolveError) {
    eprint!("{}", err.format("template"));
}

fn print_shape(shape: &RouteShape) {
    if !shape.requires_params() {
        println!("{} (static)", shape.key());
        return;
    }
    println!("{}", shape.key());
    for p in &shape.params {
        println!("  {}: {}", p.name, p.kind);
    }
}
