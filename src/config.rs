use crate::error::{AppError, AppResult};
use log::LevelFilter;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_EPISODE_LIMIT: u32 = 12;

/// Build-time settings for the front end.
///
/// Read from `PODPLAYER_API_URL`, `PODPLAYER_EPISODE_LIMIT` and `PODPLAYER_LOG`
/// when the crate is compiled.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub episode_limit: u32,
    /// How many episodes the home page shows as cards before the table.
    pub latest_count: usize,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            episode_limit: DEFAULT_EPISODE_LIMIT,
            latest_count: 2,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn new() -> AppResult<Self> {
        Self::from_values(
            option_env!("PODPLAYER_API_URL"),
            option_env!("PODPLAYER_EPISODE_LIMIT"),
            option_env!("PODPLAYER_LOG"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        episode_limit: Option<&str>,
        log_level: Option<&str>,
    ) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(url) = api_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.api_url = url.trim_end_matches('/').to_string();
        }

        if let Some(limit) = episode_limit {
            config.episode_limit = match limit.trim().parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(AppError::Config(format!(
                        "PODPLAYER_EPISODE_LIMIT must be a positive integer, got {:?}",
                        limit
                    )))
                }
            };
        }

        if let Some(level) = log_level {
            config.log_level = level.trim().parse().map_err(|_| {
                AppError::Config(format!("PODPLAYER_LOG is not a log level: {:?}", level))
            })?;
        }

        Ok(config)
    }

    pub fn episodes_url(&self) -> String {
        format!("{}/episodes", self.api_url)
    }

    pub fn episode_url(&self, slug: &str) -> String {
        format!("{}/episodes/{}", self.api_url, slug)
    }
}
