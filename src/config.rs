use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub default_experiment: Option<String>,
    pub experiments_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            default_experiment: non_empty_var("DEFAULT_EXPERIMENT"),
            experiments_file: non_empty_var("EXPERIMENTS_FILE").map(PathBuf::from),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
