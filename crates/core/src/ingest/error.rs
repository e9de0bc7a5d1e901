use std::fmt;

/// Provider-side failure for one symbol, kept structured so callers can report the stage.
#[derive(Debug, Clone)]
pub struct ProviderError {
    pub provider: &'static str,
    pub stage: &'static str,
    pub symbol: String,
    pub detail: String,
}

impl ProviderError {
    pub fn new(
        provider: &'static str,
        stage: &'static str,
        symbol: &str,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            stage,
            symbol: symbol.to_string(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "market data error (provider={}, stage={}, symbol={}): {}",
            self.provider, self.stage, self.symbol, self.detail
        )
    }
}

impl std::error::Error for ProviderError {}
