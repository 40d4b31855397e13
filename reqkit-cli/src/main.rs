use clap::Parser;
use colored::Colorize;
use std::process;
use std::time::Duration;
use tracing_subscriber::filter::LevelFilter;

use reqkit_core::{Error, Method, Payload, Query, RequestClient, RequestOptions};

/// reqkit — assemble and send a single HTTP request
#[derive(Parser, Debug)]
#[command(name = "reqkit", version, about = "A one-shot HTTP request tool")]
struct Cli {
    /// Base URL of the target service
    url: String,

    /// HTTP method (GET, POST, PUT, DELETE)
    #[arg(short = 'X', long, default_value = "GET")]
    method: String,

    /// Endpoint path appended to the base URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Query pair as key=value (repeatable, order preserved, not encoded)
    #[arg(short, long = "query")]
    query: Vec<String>,

    /// Bearer token (takes precedence over --user/--password)
    #[arg(short, long)]
    token: Option<String>,

    /// Basic-auth username
    #[arg(short, long)]
    user: Option<String>,

    /// Basic-auth password
    #[arg(short, long)]
    password: Option<String>,

    /// JSON request body
    #[arg(long)]
    json: Option<String>,

    /// Form field as key=value (repeatable)
    #[arg(short, long = "data")]
    data: Vec<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Show debug output (assembled URL, dispatch trace)
    #[arg(short, long)]
    verbose: bool,
}

fn split_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

fn build_options(cli: &Cli) -> Result<RequestOptions, String> {
    let mut options = RequestOptions::default();

    if let Some(ref body) = cli.json {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| format!("invalid JSON body: {}", e))?;
        options = RequestOptions::json(value);
    } else if !cli.data.is_empty() {
        let fields = cli
            .data
            .iter()
            .map(|raw| split_pair(raw))
            .collect::<Result<Vec<_>, _>>()?;
        options = RequestOptions::form(fields);
    }

    if let Some(secs) = cli.timeout {
        options = options.timeout(Duration::from_secs(secs));
    }

    Ok(options)
}

fn print_payload(payload: &Payload) {
    match payload {
        Payload::Empty => println!("{}", "(no content)".dimmed()),
        Payload::Json(value) => {
            let pretty =
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            println!("{}", pretty);
        }
        Payload::Text(text) => println!("{}", text),
    }
}

fn print_error(err: &Error) {
    match err {
        Error::Status { status, .. } if *status < 500 => {
            eprintln!("{} {}", "✖".yellow().bold(), err);
        }
        _ => {
            eprintln!("{} {}", "✖".red().bold(), err);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let method = match cli.method.parse::<Method>() {
        Ok(m) => m,
        Err(()) => {
            eprintln!(
                "{} Unsupported method: {}",
                "✖".red().bold(),
                cli.method.bold()
            );
            process::exit(1);
        }
    };

    let query = if cli.query.is_empty() {
        None
    } else {
        let pairs: Result<Query, String> = cli
            .query
            .iter()
            .map(|raw| split_pair(raw))
            .collect::<Result<Vec<_>, _>>()
            .map(Query::from_iter);
        match pairs {
            Ok(q) => Some(q),
            Err(e) => {
                eprintln!("{} {}", "✖".red().bold(), e);
                process::exit(1);
            }
        }
    };

    let options = match build_options(&cli) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{} {}", "✖".red().bold(), e);
            process::exit(1);
        }
    };

    let mut client = RequestClient::new(cli.url.as_str());
    if let (Some(user), Some(password)) = (&cli.user, &cli.password) {
        client = client.basic_auth(user.as_str(), password.as_str());
    }

    let result = client.request(
        method,
        cli.endpoint.as_deref(),
        query.as_ref(),
        cli.token.as_deref(),
        options,
    );

    match result {
        Ok(payload) => print_payload(&payload),
        Err(e) => {
            print_error(&e);
            process::exit(1);
        }
    }
}
