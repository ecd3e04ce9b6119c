use log::warn;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Spreadsheet read when nothing else is configured.
pub const DEFAULT_DATA_PATH: &str = "Sample Copy.xlsx";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

pub const DATA_PATH_ENV: &str = "STUDENT_FINDER_DATA";
pub const BIND_ADDR_ENV: &str = "STUDENT_FINDER_ADDR";

/// Runtime settings for the web server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            bind_addr: default_addr(),
        }
    }
}

impl Config {
    /// Reads `website [data_path] [bind_addr]`, falling back to the environment, then defaults.
    pub fn from_env() -> Config {
        let args: Vec<String> = std::env::args().skip(1).collect();
        Config::from_sources(&args, |key| std::env::var(key).ok())
    }

    /// Positional args win over `env`, which wins over the defaults.
    pub fn from_sources(args: &[String], env: impl Fn(&str) -> Option<String>) -> Config {
        let data_path = args
            .first()
            .cloned()
            .or_else(|| env(DATA_PATH_ENV))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let bind_addr = match args.get(1).cloned().or_else(|| env(BIND_ADDR_ENV)) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!("invalid bind address {:?}, using {}", raw, DEFAULT_BIND_ADDR);
                default_addr()
            }),
            None => default_addr(),
        };

        Config {
            data_path,
            bind_addr,
        }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8501))
}
