use std::io::{self, Write};

use spinners_rs::{Spinner, Spinners};
use tracing::{debug, info};

use crate::{
    services::market_data::open_exchange_rates::{fetch_latest_rates, RateSnapshot},
    util::constants::{POLL_INTERVAL, SEPARATOR_WIDTH},
};

/// Runs the fetch-render-sleep loop until a cycle fails. The first fetch
/// fires immediately; every later one waits out the full interval. A failure
/// in any cycle ends the whole session, it does not skip to the next minute.
pub async fn watch() -> anyhow::Result<()> {
    info!("watching exchange rates, one request per {:?}", POLL_INTERVAL);

    loop {
        let mut sp = Spinner::new(Spinners::Point, "Fetching latest exchange rates...");
        sp.start();
        let fetched = fetch_latest_rates().await;
        sp.stop();
        let snapshot = fetched?;

        clear_console();
        print!("{}", render_snapshot(&snapshot));
        io::stdout().flush()?;

        debug!("cycle complete, sleeping");
        tokio::time::sleep(POLL_INTERVAL).await;
    }
}

pub fn render_snapshot(snapshot: &RateSnapshot) -> String {
    let mut output = String::new();
    for (code, rate) in snapshot.entries() {
        output.push_str(&format!("{} | {}\n", code, rate));
    }
    output.push_str(&"=".repeat(SEPARATOR_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Data acquisition time | {}\n",
        snapshot.acquired_at.format("%Y-%m-%d %H:%M:%S")
    ));
    output
}

fn clear_console() {
    // ANSI erase-display plus cursor home, the portable stand-in for cls
    print!("\x1B[2J\x1B[1;1H");
}
