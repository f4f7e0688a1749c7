use anyhow::{Context, Result};
use chartquery::{ChartParser, ParamMap, ParserConfig};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chartquery")]
#[command(about = "Parse chart API query strings into chart specifications", long_about = None)]
struct Args {
    /// Query string (e.g., 'chs=200x150&chd=t:1,2,3|4,5,6&chdl=Power')
    query: String,

    /// Treat the data parameter as X|Y|Z streams
    #[arg(long = "3d")]
    three_d: bool,

    /// JSON parser configuration (parameter names, size bounds, strictness)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            ParserConfig::from_json_str(&json)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => ParserConfig::default(),
    };

    let parser = ChartParser::new(config);
    debug!(config = ?parser.config(), "parser configured");

    let params = ParamMap::from_query(&args.query);
    debug!(params = params.len(), "decoded query string");
    let chart = match parser.parse(&params, args.three_d) {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("error (HTTP {}): {}", e.http_status(), e);
            std::process::exit(2);
        }
    };

    let json = if args.compact {
        serde_json::to_string(&chart)
    } else {
        serde_json::to_string_pretty(&chart)
    }
    .context("Failed to serialize chart")?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", json).context("Failed to write chart to stdout")?;
    handle.flush().context("Failed to flush stdout")?;

    Ok(())
}
