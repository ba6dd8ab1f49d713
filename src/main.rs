mod cli;
mod services;
mod util;

use cli::watch::watch;
use owo_colors::OwoColorize;
use services::shared::{env::check_for_env_variables, logger::init_logger};

async fn run_ratewatch() -> anyhow::Result<()> {
    check_for_env_variables();
    init_logger();
    watch().await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // every failure ends the watch session; the message goes to stdout
    if let Err(error) = run_ratewatch().await {
        println!("{}", error.red());
    }
}
