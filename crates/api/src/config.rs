use pcbuild_core::config::{
    EngineConfig, BASELINE_OVERHEAD_WATTS, PERFORMANCE_TIER_GAP, PSU_HEADROOM_FACTOR,
};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Compatibility engine parameters.
    pub engine: EngineConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    ///
    /// Engine variables are documented on [`engine_config_from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let engine = engine_config_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            engine,
        }
    }
}

/// Load engine overrides from the environment.
///
/// | Env Var                | Default |
/// |------------------------|---------|
/// | `POWER_BASELINE_WATTS` | `50`    |
/// | `PSU_HEADROOM_FACTOR`  | `1.2`   |
/// | `PERFORMANCE_TIER_GAP` | `2`     |
///
/// Panics at startup on unparseable or out-of-range values.
pub fn engine_config_from_env() -> EngineConfig {
    let baseline_watts: u32 = std::env::var("POWER_BASELINE_WATTS")
        .unwrap_or_else(|_| BASELINE_OVERHEAD_WATTS.to_string())
        .parse()
        .expect("POWER_BASELINE_WATTS must be a valid u32");

    let headroom_factor: f64 = std::env::var("PSU_HEADROOM_FACTOR")
        .unwrap_or_else(|_| PSU_HEADROOM_FACTOR.to_string())
        .parse()
        .expect("PSU_HEADROOM_FACTOR must be a valid f64");

    let performance_tier_gap: u8 = std::env::var("PERFORMANCE_TIER_GAP")
        .unwrap_or_else(|_| PERFORMANCE_TIER_GAP.to_string())
        .parse()
        .expect("PERFORMANCE_TIER_GAP must be a valid u8");

    let engine = EngineConfig {
        baseline_watts,
        headroom_factor,
        performance_tier_gap,
    };
    if let Err(e) = engine.validate() {
        panic!("Invalid engine configuration: {e}");
    }
    engine
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
