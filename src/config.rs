//! Tool configuration.
//!
//! Three knobs: fetch timeout, fetch user agent, and JPEG output quality.
//! Layering (highest priority first): environment (`COVERCROP_*`) → an
//! optional TOML file → built-in defaults. A `--quality` CLI flag overrides
//! everything for that run.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [fetch]
//! timeout_secs = 30
//! user_agent = "covercrop/0.3"
//!
//! [output]
//! quality = 90              # JPEG quality (1-100)
//! ```

use confique::Config;
use std::path::Path;

#[derive(Debug, Clone, Config)]
pub struct AppConfig {
    #[config(nested)]
    pub fetch: FetchConfig,

    #[config(nested)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Config)]
pub struct FetchConfig {
    /// Whole-request timeout for the source fetch.
    #[config(env = "COVERCROP_TIMEOUT_SECS", default = 30)]
    pub timeout_secs: u64,

    #[config(env = "COVERCROP_USER_AGENT", default = "covercrop/0.3")]
    pub user_agent: String,
}

#[derive(Debug, Clone, Config)]
pub struct OutputConfig {
    /// JPEG quality (1-100).
    #[config(env = "COVERCROP_QUALITY", default = 90)]
    pub quality: u32,
}

impl AppConfig {
    /// Load configuration, layering env over an optional file over defaults.
    pub fn load(file: Option<&Path>) -> Result<Self, confique::Error> {
        let mut builder = Self::builder().env();
        if let Some(path) = file {
            builder = builder.file(path);
        }
        builder.load()
    }
}
