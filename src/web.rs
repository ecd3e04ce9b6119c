#![cfg(not(tarpaulin_include))]

use student_finder::{Config, app};

/// Main entry point for the web application
///
/// Starts the student lookup server. The data file and listen address come from
/// `website [data_path] [bind_addr]`, then `STUDENT_FINDER_DATA` /
/// `STUDENT_FINDER_ADDR`, then the built-in defaults.
///
/// # Returns
/// * `Result<(), Box<dyn std::error::Error>>` - Success or error object
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    app::run(config).await
}
