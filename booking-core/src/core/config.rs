use crate::utils::{AppError, AppResult};

/// Booking core configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | run environment |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | rolling log directory |
/// | SLOT_INTERVAL_MINUTES | 30 | spacing of bookable slots |
/// | MAX_PARTY_SIZE | 20 | largest accepted party |
/// | MIN_PHONE_DIGITS | 9 | shortest accepted guest phone |
///
/// # Example
///
/// ```ignore
/// LOG_LEVEL=debug SLOT_INTERVAL_MINUTES=15 cargo run --bin booking-preview
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub slot_interval_minutes: u32,
    pub max_party_size: u32,
    pub min_phone_digits: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            slot_interval_minutes: 30,
            max_party_size: 20,
            min_phone_digits: 9,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            slot_interval_minutes: lookup("SLOT_INTERVAL_MINUTES")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.slot_interval_minutes),
            max_party_size: lookup("MAX_PARTY_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.max_party_size),
            min_phone_digits: lookup("MIN_PHONE_DIGITS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.min_phone_digits),
        }
    }

    /// Reject values the booking flow cannot work with
    pub fn validate(&self) -> AppResult<()> {
        if self.slot_interval_minutes == 0 || self.slot_interval_minutes > 24 * 60 {
            return Err(AppError::config(format!(
                "SLOT_INTERVAL_MINUTES must be between 1 and 1440, got {}",
                self.slot_interval_minutes
            )));
        }
        if self.max_party_size == 0 {
            return Err(AppError::config("MAX_PARTY_SIZE must be at least 1"));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
