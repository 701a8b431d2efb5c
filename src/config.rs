//! Minter configuration, read once from the process environment.

use crate::{
    address::{AddressError, ObjectId},
    ledger_client::rpc_ledger_client::DEFAULT_GAS_BUDGET,
};
use secrecy::{ExposeSecret, Secret};
use std::fmt;
use thiserror::Error;
use url::Url;

/// Hex encoded Ed25519 secret key
pub const PRIVATE_KEY_VAR: &str = "SUI_PRIVATE_KEY";
/// Full node JSON-RPC URL
pub const RPC_URL_VAR: &str = "SUI_RPC_URL";
/// Id of the published package holding the `nft_minter` module
pub const PACKAGE_ID_VAR: &str = "PACKAGE_ID";
/// Optional gas budget in MIST
pub const GAS_BUDGET_VAR: &str = "SUI_GAS_BUDGET";
/// Optional explorer base URL
pub const EXPLORER_URL_VAR: &str = "SUI_EXPLORER_URL";

/// Where minted objects are linked to when no explorer is configured
pub const DEFAULT_EXPLORER_URL: &str = "https://devnet.suivision.xyz";

/// Why the environment could not be turned into a [`MinterConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required variable unset or blank
    #[error("{0} is not set")]
    Missing(&'static str),
    /// A URL variable does not parse
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        /// Name of the variable
        var: &'static str,
        /// Parse failure
        source: url::ParseError,
    },
    /// `PACKAGE_ID` does not parse as an object id
    #[error("PACKAGE_ID is not a valid object id: {0}")]
    InvalidPackageId(AddressError),
    /// Not a positive integer
    #[error("SUI_GAS_BUDGET must be a positive integer, got {0:?}")]
    InvalidGasBudget(String),
}

/// Everything the minter needs from its environment
pub struct MinterConfig {
    private_key: Secret<String>,
    rpc_url: Url,
    package_id: ObjectId,
    gas_budget: u64,
    explorer_url: Url,
}

impl MinterConfig {
    /// Read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let private_key = Secret::new(require(PRIVATE_KEY_VAR)?);
        let rpc_url = parse_url(RPC_URL_VAR, &require(RPC_URL_VAR)?)?;
        let package_id = require(PACKAGE_ID_VAR)?
            .parse()
            .map_err(ConfigError::InvalidPackageId)?;
        let gas_budget = match get(GAS_BUDGET_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(budget) if budget > 0 => budget,
                _ => return Err(ConfigError::InvalidGasBudget(raw)),
            },
            None => DEFAULT_GAS_BUDGET,
        };
        let explorer_url = match get(EXPLORER_URL_VAR) {
            Some(raw) => parse_url(EXPLORER_URL_VAR, &raw)?,
            None => parse_url(EXPLORER_URL_VAR, DEFAULT_EXPLORER_URL)?,
        };

        Ok(MinterConfig {
            private_key,
            rpc_url,
            package_id,
            gas_budget,
            explorer_url,
        })
    }

    /// Hex secret. Only exposed to derive the keypair.
    pub fn private_key_hex(&self) -> &str {
        self.private_key.expose_secret()
    }

    /// Full node JSON-RPC endpoint
    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }

    /// Package holding the `nft_minter` module
    pub fn package_id(&self) -> &ObjectId {
        &self.package_id
    }

    /// In MIST
    pub fn gas_budget(&self) -> u64 {
        self.gas_budget
    }

    /// Base URL minted objects are linked under
    pub fn explorer_url(&self) -> &Url {
        &self.explorer_url
    }
}

impl fmt::Debug for MinterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinterConfig")
            .field("private_key", &"[REDACTED]")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("package_id", &self.package_id)
            .field("gas_budget", &self.gas_budget)
            .field("explorer_url", &self.explorer_url.as_str())
            .finish()
    }
}

fn parse_url(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { var, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const KEY: &str = "0303030303030303030303030303030303030303030303030303030303030303";

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn required() -> HashMap<String, String> {
        vars(&[
            (PRIVATE_KEY_VAR, KEY),
            (RPC_URL_VAR, "https://fullnode.devnet.sui.io:443"),
            (PACKAGE_ID_VAR, "0xc0ffee"),
        ])
    }

    fn load(env: &HashMap<String, String>) -> Result<MinterConfig, ConfigError> {
        MinterConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_fill_optional_values() {
        let config = load(&required()).unwrap();
        assert_eq!(config.private_key_hex(), KEY);
        assert_eq!(config.rpc_url().host_str(), Some("fullnode.devnet.sui.io"));
        assert_eq!(config.package_id(), &"0xc0ffee".parse::<ObjectId>().unwrap());
        assert_eq!(config.gas_budget(), DEFAULT_GAS_BUDGET);
        assert_eq!(config.explorer_url().as_str(), "https://devnet.suivision.xyz/");
    }

    #[test]
    fn optional_values_override_defaults() {
        let mut env = required();
        env.insert(GAS_BUDGET_VAR.to_string(), "2000000".to_string());
        env.insert(
            EXPLORER_URL_VAR.to_string(),
            "https://testnet.suivision.xyz".to_string(),
        );
        let config = load(&env).unwrap();
        assert_eq!(config.gas_budget(), 2_000_000);
        assert_eq!(config.explorer_url().host_str(), Some("testnet.suivision.xyz"));
    }

    #[test]
    fn each_required_var_is_checked() {
        for var in [PRIVATE_KEY_VAR, RPC_URL_VAR, PACKAGE_ID_VAR] {
            let mut env = required();
            env.remove(var);
            assert!(matches!(load(&env), Err(ConfigError::Missing(missing)) if missing == var));

            env.insert(var.to_string(), "  ".to_string());
            assert!(matches!(load(&env), Err(ConfigError::Missing(missing)) if missing == var));
        }
    }

    #[test]
    fn malformed_values_are_rejected() {
        let mut env = required();
        env.insert(RPC_URL_VAR.to_string(), "not a url".to_string());
        assert!(matches!(
            load(&env),
            Err(ConfigError::InvalidUrl { var: RPC_URL_VAR, .. })
        ));

        let mut env = required();
        env.insert(PACKAGE_ID_VAR.to_string(), "0xnope".to_string());
        assert!(matches!(load(&env), Err(ConfigError::InvalidPackageId(_))));

        for budget in ["0", "-1", "lots"] {
            let mut env = required();
            env.insert(GAS_BUDGET_VAR.to_string(), budget.to_string());
            assert!(matches!(load(&env), Err(ConfigError::InvalidGasBudget(_))));
        }
    }

    #[test]
    fn secret_is_not_debug_printed() {
        let config = load(&required()).unwrap();
        assert!(!format!("{:?}", config).contains(KEY));
    }
}
