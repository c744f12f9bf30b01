//! Configuration for the federated `AuthN` module.

use std::time::Duration;

use serde::Deserialize;

/// Configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FederatedAuthnConfig {
    /// Upper bound for a single code-for-token exchange, e.g. `"30s"`.
    ///
    /// Unset means the exchange client's own limits apply.
    pub exchange_timeout: Option<String>,

    /// Send the credential's redirect URL along with the token request.
    pub forward_redirect_uri: bool,
}

impl Default for FederatedAuthnConfig {
    fn default() -> Self {
        Self {
            exchange_timeout: None,
            forward_redirect_uri: true,
        }
    }
}

impl FederatedAuthnConfig {
    /// Parsed [`Self::exchange_timeout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a humantime duration or is zero.
    pub fn exchange_timeout(&self) -> anyhow::Result<Option<Duration>> {
        let Some(raw) = self.exchange_timeout.as_deref() else {
            return Ok(None);
        };

        let timeout = humantime::parse_duration(raw)
            .map_err(|e| anyhow::anyhow!("invalid exchange_timeout '{raw}': {e}"))?;
        if timeout.is_zero() {
            anyhow::bail!("exchange_timeout must be greater than zero");
        }

        Ok(Some(timeout))
    }
}
