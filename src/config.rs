//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup. Every variable has a default, so the
//! service runs out of the box with a `urls.db` file in the working directory.
//!
//! | Variable             | Default        | Meaning                         |
//! |----------------------|----------------|---------------------------------|
//! | `DB_FILE`            | `urls.db`      | SQLite storage file path        |
//! | `LISTEN`             | `0.0.0.0:5000` | Bind address                    |
//! | `DB_MAX_CONNECTIONS` | `5`            | Connection pool size            |
//! | `DB_CONNECT_TIMEOUT` | `30`           | Pool acquire timeout in seconds |
//! | `CODE_LENGTH`        | `6`            | Generated short-code length     |
//! | `RUST_LOG`           | `info`         | Log filter                      |
//! | `LOG_FORMAT`         | `text`         | Log format: `text` or `json`    |

use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the SQLite database file. Created on first start if absent.
    pub db_file: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Length of generated short codes.
    pub code_length: usize,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool.
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds.
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let db_file = env::var("DB_FILE").unwrap_or_else(|_| "urls.db".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let code_length = env::var("CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|&n| (1..=32).contains(&n))
            .unwrap_or(6);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Self {
            db_file,
            listen_addr,
            log_level,
            log_format,
            code_length,
            db_max_connections,
            db_connect_timeout,
        }
    }
}
