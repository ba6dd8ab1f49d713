use std::time::Duration;

pub const OXR_HOST: &str = "openexchangerates.org";
pub const OXR_LATEST_PATH: &str = "/api/latest.json";

pub const POLL_INTERVAL: Duration = Duration::from_secs(60);

pub const SEPARATOR_WIDTH: usize = 51;
