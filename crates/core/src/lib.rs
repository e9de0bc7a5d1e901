pub mod domain;
pub mod export;
pub mod ingest;
pub mod screen;
pub mod time;

pub mod config {
    use anyhow::Context;

    const DEFAULT_PROGRESS_EVERY: usize = 25;

    #[derive(Debug, Clone, Default)]
    pub struct Settings {
        pub sentry_dsn: Option<String>,
        pub progress_every: Option<usize>,
    }

    impl Settings {
        pub fn from_env() -> anyhow::Result<Self> {
            Ok(Self {
                sentry_dsn: non_empty_var("SENTRY_DSN"),
                progress_every: parse_var("SCREENER_PROGRESS_EVERY")?,
            })
        }

        /// Log a progress line every N symbols; 0 disables progress logging.
        pub fn progress_every(&self) -> usize {
            self.progress_every.unwrap_or(DEFAULT_PROGRESS_EVERY)
        }
    }

    fn non_empty_var(key: &str) -> Option<String> {
        std::env::var(key)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    fn parse_var<T>(key: &str) -> anyhow::Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match non_empty_var(key) {
            Some(s) => {
                let v = s
                    .parse::<T>()
                    .with_context(|| format!("{key} is not a valid number: {s}"))?;
                Ok(Some(v))
            }
            None => Ok(None),
        }
    }
}
