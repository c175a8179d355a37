//! Entry point for the cloudmgr TUI. Parses args, loads settings, and runs the App.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use cloudmgr::app::App;
use cloudmgr::config::{load_or_default, settings_path};
use cloudmgr::router::Route;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "Usage: {prog} [--route NAME|-r NAME] [--config PATH|-c PATH] [--seed N|-s N] [--log PATH]";

#[derive(Debug, Default, PartialEq)]
struct ParsedArgs {
    route: Option<String>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    log: Option<PathBuf>,
}

fn usage(prog: &str) -> String {
    USAGE.replace("{prog}", prog)
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<ParsedArgs, String> {
    let mut it = args.into_iter();
    let prog = it.next().unwrap_or_else(|| "cloudmgr".into());
    let mut out = ParsedArgs::default();

    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-h" | "--help" => return Err(usage(&prog)),
            "--route" | "-r" => out.route = it.next(),
            "--config" | "-c" => out.config = it.next().map(PathBuf::from),
            "--log" => out.log = it.next().map(PathBuf::from),
            "--seed" | "-s" => {
                let v = it.next().unwrap_or_default();
                out.seed = Some(v.parse().map_err(|_| format!("invalid seed '{v}'\n{}", usage(&prog)))?);
            }
            _ if arg.starts_with("--route=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        out.route = Some(v.to_string());
                    }
                }
            }
            _ if arg.starts_with("--config=") => {
                if let Some((_, v)) = arg.split_once('=') {
                    if !v.is_empty() {
                        out.config = Some(PathBuf::from(v));
                    }
                }
            }
            _ => {
                return Err(format!("Unexpected argument '{arg}'. {}", usage(&prog)));
            }
        }
    }
    Ok(out)
}

// stdout belongs to the TUI, so logs only go to an explicit file
fn init_logging(path: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("CLOUDMGR_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let parsed = match parse_args(env::args()) {
        Ok(v) => v,
        Err(msg) => {
            let help = env::args().any(|a| a == "-h" || a == "--help");
            eprintln!("{msg}");
            if help {
                return Ok(());
            }
            std::process::exit(2);
        }
    };

    init_logging(parsed.log.as_ref())?;

    let config_path = parsed.config.clone().unwrap_or_else(settings_path);
    let settings = load_or_default(&config_path);
    tracing::info!(path = %config_path.display(), "settings loaded");

    // Deep link: a bare name or a path like /control
    let initial = parsed.route.as_deref().map_or(Route::Dashboard, |r| {
        r.parse::<Route>().unwrap_or_else(|_| Route::from_path(r))
    });

    // Ctrl-C arrives as a key press in raw mode
    let mut app = App::new(&settings, initial, parsed.seed);
    app.run().await
}
