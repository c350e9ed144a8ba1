use crate::lockfile::LOCKFILE_NAME;
use std::env;

#[derive(Debug, Clone)]
pub struct LockscopeConfig {
    pub lockfile_name: String,
    pub production: bool,
    pub max_depth: Option<usize>,
    pub verbose: bool,
}

impl Default for LockscopeConfig {
    fn default() -> Self {
        LockscopeConfig {
            lockfile_name: LOCKFILE_NAME.to_string(),
            production: false,
            max_depth: None,
            verbose: false,
        }
    }
}

impl LockscopeConfig {
    pub fn from_env() -> Self {
        let mut config = LockscopeConfig::default();

        if let Ok(value) = env::var("LOCKSCOPE_LOCKFILE") {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                config.lockfile_name = trimmed.to_string();
            }
        }

        if let Ok(value) = env::var("LOCKSCOPE_PRODUCTION") {
            config.production = parse_flag(&value);
        }

        if let Ok(value) = env::var("LOCKSCOPE_MAX_DEPTH") {
            config.max_depth = parse_depth(&value);
        }

        if let Ok(value) = env::var("LOCKSCOPE_VERBOSE") {
            config.verbose = parse_flag(&value);
        }

        config
    }

    pub fn include_dev(&self) -> bool {
        !self.production
    }
}

fn parse_flag(value: &str) -> bool {
    let trimmed = value.trim().to_ascii_lowercase();
    matches!(trimmed.as_str(), "1" | "true" | "yes" | "y" | "on")
}

fn parse_depth(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok()
}
