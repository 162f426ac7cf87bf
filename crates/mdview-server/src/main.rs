use std::env;
use std::net::SocketAddr;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mdview_server::VERSION;
use mdview_server::cli::CliArgs;
use mdview_server::http::{ServerConfig, serve};

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_level.as_deref());

    debug!("mdview-server v{VERSION} starting");

    let root = match args.root {
        Some(root) => root,
        None => env::current_dir()?.to_string_lossy().into_owned(),
    };

    let config = ServerConfig {
        addr: SocketAddr::new(args.host, args.port),
        root,
    };

    serve(config).await
}

fn init_logging(level: Option<&str>) {
    let level = level
        .map(normalize_level)
        .or_else(|| env::var("MDVIEW_LOG_LEVEL").ok().as_deref().map(normalize_level))
        .unwrap_or("info");

    let mut filter = EnvFilter::from_default_env();
    if env::var("RUST_LOG").is_err() {
        filter = filter
            .add_directive(format!("mdview_server={level}").parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap());
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn normalize_level(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        other => {
            eprintln!("invalid log level '{other}', defaulting to info");
            "info"
        }
    }
}
