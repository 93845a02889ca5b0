//! Availability checker
//!
//! Validates a listing's availability windows the way the publish dialog does
//! and reports whether given dates can be booked.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin availability-check -- availability.json 01/05/2024 01/15/2024
//! ```
//!
//! `availability.json` holds a JSON array of `{"start": "MM/DD/YYYY", "end": "MM/DD/YYYY"}`.
//!
//! Settings are read from `airbrb.toml` in the usual locations when present
//! (see `AppConfig::from_default_location`).
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use airbrb::config::AppConfig;
use airbrb::context::{Notifications, Severity};
use airbrb::models::{CalendarDate, DraftRange};
use airbrb::services::{AvailabilityValidator, DateRangeMatcher};

fn main() -> anyhow::Result<ExitCode> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: availability-check <availability.json> [MM/DD/YYYY ...]");
        return Ok(ExitCode::from(2));
    };

    let config = AppConfig::load_or_default().context("failed to load airbrb.toml")?;
    info!("Backend at {}", config.api.base_url);
    let mut notes = Notifications::from_settings(&config.notifications);

    let content =
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
    let drafts: Vec<DraftRange> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of {{start, end}}", path))?;
    info!("Checking {} availability window(s) from {}", drafts.len(), path);

    let set = match AvailabilityValidator::validate(&drafts) {
        Ok(set) => set,
        Err(failure) => {
            notes.error(format!("rejected ({}): {}", failure.kind(), failure.message()));
            print_notices(&mut notes);
            return Ok(ExitCode::FAILURE);
        }
    };
    notes.success(format!("accepted: {}", serde_json::to_string(&set)?));

    let matcher = DateRangeMatcher::new(&set);
    for raw in args {
        let date = CalendarDate::parse(&raw).with_context(|| format!("bad date argument {}", raw))?;
        let verdict = if matcher.is_available(date) {
            "available"
        } else {
            "not available"
        };
        notes.info(format!("{}: {}", date, verdict));
        print_notices(&mut notes);
    }
    print_notices(&mut notes);

    Ok(ExitCode::SUCCESS)
}

fn print_notices(notes: &mut Notifications) {
    for notice in notes.drain() {
        match notice.severity {
            Severity::Error => eprintln!("{}", notice.message),
            Severity::Success | Severity::Info => println!("{}", notice.message),
        }
    }
}
