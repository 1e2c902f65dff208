//! Deployment configuration: where the router and market modules live.

use serde::{Deserialize, Serialize};

use crate::error::BuildError;
use crate::program::constants::{function, MARKET_MODULE, ROUTER_MODULE};
use crate::program::payload::FunctionId;
use crate::shared::AccountAddress;

/// Addresses and module names of the deployed packages.
///
/// The two package addresses identify a concrete deployment and have no
/// default. Module names default to [`ROUTER_MODULE`] and [`MARKET_MODULE`].
/// Deserializable so hosts can load it from their own config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    pub router_address: AccountAddress,
    #[serde(default = "default_router_module")]
    pub router_module: String,
    pub market_address: AccountAddress,
    #[serde(default = "default_market_module")]
    pub market_module: String,
}

fn default_router_module() -> String {
    ROUTER_MODULE.to_string()
}

fn default_market_module() -> String {
    MARKET_MODULE.to_string()
}

impl ProtocolConfig {
    /// Config for a deployment at the given package addresses, with the
    /// standard module names.
    pub fn new(router_address: AccountAddress, market_address: AccountAddress) -> Self {
        Self {
            router_address,
            router_module: default_router_module(),
            market_address,
            market_module: default_market_module(),
        }
    }

    pub fn router_function(&self, name: &str) -> Result<FunctionId, BuildError> {
        FunctionId::new(self.router_address, self.router_module.as_str(), name)
    }

    pub fn market_function(&self, name: &str) -> Result<FunctionId, BuildError> {
        FunctionId::new(self.market_address, self.market_module.as_str(), name)
    }

    /// Check that both module names are valid identifiers.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.router_function(function::SWAP)?;
        self.market_function(function::CREATE_MARKET)?;
        Ok(())
    }
}
