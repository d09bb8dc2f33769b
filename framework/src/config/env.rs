use std::path::{Path, PathBuf};

/// Application environment, taken from `APP_ENV`
///
/// Only used to pick which `.env.*` files are layered on top of `.env`.
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Local,
    Development,
    Staging,
    Production,
    Testing,
    Custom(String),
}

impl Environment {
    /// Detect environment from APP_ENV or default to Local
    pub fn detect() -> Self {
        Self::parse(std::env::var("APP_ENV").ok().as_deref())
    }

    fn parse(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            Some("staging") => Self::Staging,
            Some("development") => Self::Development,
            Some("testing") => Self::Testing,
            Some("local") | None => Self::Local,
            Some(other) => Self::Custom(other.to_string()),
        }
    }

    /// Suffix used in `.env.{suffix}` file names
    pub fn env_file_suffix(&self) -> &str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Development => "development",
            Self::Testing => "testing",
            Self::Custom(name) => name.as_str(),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.env_file_suffix())
    }
}

/// `.env` files to load for `env`, most specific first
///
/// dotenvy never overwrites a variable that is already set, so loading in this
/// order gives: `.env.{env}.local` > `.env.{env}` > `.env.local` > `.env`,
/// with real process variables above all of them.
pub fn dotenv_files(project_root: &Path, env: &Environment) -> Vec<PathBuf> {
    let suffix = env.env_file_suffix();
    vec![
        project_root.join(format!(".env.{}.local", suffix)),
        project_root.join(format!(".env.{}", suffix)),
        project_root.join(".env.local"),
        project_root.join(".env"),
    ]
}

/// Load environment variables from the project's .env files
pub fn load_dotenv(project_root: &Path) -> Environment {
    let env = Environment::detect();

    for path in dotenv_files(project_root, &env) {
        match dotenvy::from_path(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "loaded env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable env file"),
        }
    }

    env
}

/// Get an environment variable with a default value
///
/// Unparseable values fall back to the default.
///
/// # Example
/// ```
/// use cna_db::config::env;
///
/// let echo: bool = env("DB_ECHO", true);
/// ```
pub fn env<T: std::str::FromStr>(key: &str, default: T) -> T {
    env_optional(key).unwrap_or(default)
}

/// Get an optional environment variable
pub fn env_optional<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
