//! rollcall - Terminal browser for parliamentary roll-call votes.
//!
//! Fetches votes and contact requests from a portal API and renders them as
//! an interactive, auth-gated TUI: a votes list, a filterable/sortable/
//! paginated per-member vote table, and a leads list.
//!
//! Usage:
//!   rollcall --endpoint https://portal.example.org   # live portal
//!   rollcall --demo                                  # bundled sample data
//!   ROLLCALL_ENDPOINT=... rollcall                   # endpoint from env

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::time::Duration;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use rollcall_core::client::{PortalClient, SampleSource, VoteSource};
use rollcall_core::store::{FileBackend, LocalStore, MemoryBackend, default_store_path};
use rollcall_core::table::{SortField, parse_position_filter};
use rollcall_core::tui::App;

/// Terminal browser for parliamentary roll-call votes.
#[derive(Parser)]
#[command(name = "rollcall", about = "Parliamentary vote browser", version)]
struct Args {
    /// Portal API endpoint, e.g. https://portal.example.org
    #[arg(long, env = "ROLLCALL_ENDPOINT")]
    endpoint: Option<String>,

    /// Use the bundled sample payload instead of a portal.
    #[arg(long)]
    demo: bool,

    /// Path of the local store file.
    /// Default: platform data directory.
    #[arg(long, value_name = "PATH")]
    store_path: Option<String>,

    /// Initial sort column of the member table: name, vote_position,
    /// group, or state.
    #[arg(long, default_value = "name")]
    sort: String,

    /// Initial position filter of the member table: all, for, against,
    /// abstention, or did_not_vote.
    #[arg(long, default_value = "all")]
    position: String,

    /// Rows per member-table page.
    #[arg(long, default_value = "10")]
    page_size: usize,

    /// Tick interval in seconds.
    #[arg(long, default_value = "1")]
    interval: u64,

    /// Increase logging verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode - only log errors.
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(format!("rollcall={}", level).parse().unwrap())
        .add_directive(format!("rollcall_core={}", level).parse().unwrap());

    // stderr belongs to the TUI; logs go to the file RUST_LOG-style tools
    // can tail. Logging is best-effort, the UI runs without it.
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("rollcall.log"))
    else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::sync::Arc::new(log_file))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    if !args.demo && args.endpoint.is_none() {
        eprintln!("Error: either --endpoint (or ROLLCALL_ENDPOINT) or --demo is required");
        eprintln!("Usage: rollcall --endpoint https://portal.example.org");
        eprintln!("       rollcall --demo");
        std::process::exit(1);
    }

    // Payload source
    let source: Box<dyn VoteSource> = if args.demo {
        Box::new(SampleSource)
    } else {
        // Checked above.
        let endpoint = args.endpoint.as_deref().unwrap_or_default();
        match PortalClient::new(endpoint) {
            Ok(client) => Box::new(client),
            Err(e) => {
                eprintln!("Error creating portal client: {}", e);
                std::process::exit(1);
            }
        }
    };

    // Local store; falls back to in-memory when no data dir is available.
    let store = match open_store(args.store_path.as_deref()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Warning: local store unavailable ({}), state will not persist", e);
            LocalStore::new(MemoryBackend::default())
        }
    };

    // Table defaults are validated before the first render; bad values are
    // rejected here rather than coerced.
    let table_config = SortField::parse(&args.sort)
        .and_then(|sort| parse_position_filter(&args.position).map(|pos| (sort, pos)));
    let (sort, position) = match table_config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(source, store);
    if let Err(e) = app.configure_table(sort, position, args.page_size) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = app.run(Duration::from_secs(args.interval.max(1))) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}

fn open_store(path: Option<&str>) -> Result<LocalStore, rollcall_core::store::StoreError> {
    let path = match path {
        Some(p) => p.into(),
        None => default_store_path()?,
    };
    Ok(LocalStore::new(FileBackend::open(path)?))
}
