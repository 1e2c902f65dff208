//! Entry-function payloads: the callable-function descriptor handed to a wallet
//! or submission service.
//!
//! The payload serializes to the JSON shape wallet adapters accept:
//!
//! ```json
//! {
//!   "function": "0x…::router::swap",
//!   "typeArguments": [],
//!   "functionArguments": ["0x0102…"]
//! }
//! ```

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::BuildError;
use crate::shared::AccountAddress;

// ─── FunctionId ──────────────────────────────────────────────────────────────

/// Fully-qualified entry function: `address::module::function`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionId {
    pub address: AccountAddress,
    pub module: String,
    pub name: String,
}

impl FunctionId {
    pub fn new(
        address: AccountAddress,
        module: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let module = module.into();
        let name = name.into();
        if !is_identifier(&module) || !is_identifier(&name) {
            return Err(BuildError::InvalidFunctionId(format!(
                "{}::{}::{}",
                address, module, name
            )));
        }
        Ok(Self { address, module, name })
    }
}

/// Move identifiers: ASCII letter or `_` first, then alphanumerics or `_`.
fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.address, self.module, self.name)
    }
}

impl FromStr for FunctionId {
    type Err = BuildError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split("::").collect();
        let [address, module, name] = parts.as_slice() else {
            return Err(BuildError::InvalidFunctionId(s.to_string()));
        };
        let address = AccountAddress::parse(address)
            .map_err(|_| BuildError::InvalidFunctionId(s.to_string()))?;
        Self::new(address, *module, *name)
    }
}

impl Serialize for FunctionId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

// ─── Argument ────────────────────────────────────────────────────────────────

/// One positional entry-function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Argument {
    /// Packed `vector<u8>`; serialized as `0x`-prefixed hex.
    Bytes(Vec<u8>),
    /// Serialized as a decimal string, like every numeric argument.
    U8(u8),
    /// Serialized as a decimal string so large values survive JSON.
    U64(u64),
    Bool(bool),
    Address(AccountAddress),
    String(String),
}

impl Argument {
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Argument::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl Serialize for Argument {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Argument::Bytes(b) => serializer.serialize_str(&format!("0x{}", hex::encode(b))),
            Argument::U8(v) => serializer.collect_str(v),
            Argument::U64(v) => serializer.collect_str(v),
            Argument::Bool(b) => serializer.serialize_bool(*b),
            Argument::Address(a) => a.serialize(serializer),
            Argument::String(s) => serializer.serialize_str(s),
        }
    }
}

// ─── EntryFunctionPayload ────────────────────────────────────────────────────

/// A complete callable-function descriptor.
///
/// `arguments` are positional: their order must match the on-chain function's
/// parameter list exactly. The ledger rejects a mismatch; nothing local can
/// detect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryFunctionPayload {
    #[serde(rename = "function")]
    pub function: FunctionId,
    #[serde(rename = "typeArguments")]
    pub type_arguments: Vec<String>,
    #[serde(rename = "functionArguments")]
    pub arguments: Vec<Argument>,
}

impl EntryFunctionPayload {
    pub fn new(function: FunctionId, arguments: Vec<Argument>) -> Self {
        Self {
            function,
            type_arguments: Vec::new(),
            arguments,
        }
    }

    pub fn with_type_arguments(mut self, type_arguments: Vec<String>) -> Self {
        self.type_arguments = type_arguments;
        self
    }

    /// The packed blob of a single-argument (opaque blob) payload.
    pub fn blob(&self) -> Option<&[u8]> {
        match self.arguments.as_slice() {
            [only] => only.as_bytes(),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_id_parse_and_display() {
        let id: FunctionId = "0x01::coin::transfer".parse().unwrap();
        assert_eq!(id.module, "coin");
        assert_eq!(id.name, "transfer");
        assert_eq!(
            id.to_string(),
            format!("0x{}1::coin::transfer", "0".repeat(63))
        );
    }

    #[test]
    fn test_function_id_rejects_malformed() {
        for bad in [
            "0x01::coin",
            "0x01::coin::transfer::extra",
            "0xzz::coin::transfer",
            "0x1::coin::transfer",
            "0x01::9coin::transfer",
            "0x01::coin::",
        ] {
            assert!(
                matches!(bad.parse::<FunctionId>(), Err(BuildError::InvalidFunctionId(_))),
                "expected error for {bad:?}"
            );
        }
    }

    #[test]
    fn test_payload_json_shape() {
        let function: FunctionId = "0x0a::router::swap".parse().unwrap();
        let payload = EntryFunctionPayload::new(
            function,
            vec![
                Argument::Bytes(vec![0x01, 0xff]),
                Argument::U64(u64::MAX),
                Argument::Bool(true),
                Argument::String("hello".into()),
            ],
        )
        .with_type_arguments(vec!["0x1::aptos_coin::AptosCoin".into()]);

        let json = payload.to_json().unwrap();
        assert_eq!(
            json["function"],
            format!("0x{}a::router::swap", "0".repeat(63))
        );
        assert_eq!(json["typeArguments"][0], "0x1::aptos_coin::AptosCoin");
        assert_eq!(json["functionArguments"][0], "0x01ff");
        assert_eq!(json["functionArguments"][1], "18446744073709551615");
        assert_eq!(json["functionArguments"][2], true);
        assert_eq!(json["functionArguments"][3], "hello");
    }

    #[test]
    fn test_blob_only_for_single_bytes_argument() {
        let function: FunctionId = "0x0a::router::swap".parse().unwrap();
        let blob = EntryFunctionPayload::new(function.clone(), vec![Argument::Bytes(vec![7])]);
        assert_eq!(blob.blob(), Some(&[7u8][..]));

        let typed = EntryFunctionPayload::new(
            function,
            vec![Argument::Bytes(vec![7]), Argument::Bool(false)],
        );
        assert_eq!(typed.blob(), None);
    }
}
