//! Read-only view of the token balance backing a wallet address.
//!
//! Transfers are relayed by the backend; nothing here signs or submits a
//! transaction. The chain is only consulted so the dashboard can show the
//! on-chain balance next to the backend's ledger.

use ethers::contract::abigen;
use ethers::providers::{Http, Provider};
use ethers::types::{Address, U256};
use ethers::utils::format_units;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub const PLASMA_TESTNET_RPC_URL: &str = "https://testnet-rpc.plasma.to";
pub const USDT0_CONTRACT: &str = "0x502012b361aebce43b26ec812b74d9a51db4d412";

/// USDT0's known display decimals, used when the contract will not say.
pub const FALLBACK_DECIMALS: u8 = 6;

abigen!(
    Erc20,
    r#"[
        function balanceOf(address) view returns (uint256)
        function decimals() view returns (uint8)
    ]"#
);

#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Invalid address: {0}")]
    BadAddress(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Contract call failed: {0}")]
    Contract(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenBalance {
    pub raw: U256,
    pub decimals: u8,
}

impl TokenBalance {
    pub fn to_f64(&self) -> f64 {
        format_units(self.raw, u32::from(self.decimals))
            .ok()
            .and_then(|units| units.parse().ok())
            .unwrap_or(0.0)
    }
}

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match format_units(self.raw, u32::from(self.decimals)) {
            Ok(units) => write!(f, "{}", units),
            Err(_) => write!(f, "{}", self.raw),
        }
    }
}

pub struct TokenReader {
    contract: Erc20<Provider<Http>>,
}

impl TokenReader {
    pub fn new(rpc_url: &str, token_address: &str) -> Result<Self, ChainError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| ChainError::Provider(e.to_string()))?;
        let address: Address = token_address
            .parse()
            .map_err(|_| ChainError::BadAddress(token_address.to_string()))?;

        Ok(TokenReader {
            contract: Erc20::new(address, Arc::new(provider)),
        })
    }

    /// Reader against the fixed testnet USDT0 deployment.
    pub fn plasma_testnet() -> Result<Self, ChainError> {
        Self::new(PLASMA_TESTNET_RPC_URL, USDT0_CONTRACT)
    }

    /// Fetch a holder's balance together with the token's display decimals.
    /// A failing `decimals()` call falls back to the known value rather than
    /// failing the whole read.
    pub async fn balance_of(&self, holder: &str) -> Result<TokenBalance, ChainError> {
        let holder: Address = holder
            .parse()
            .map_err(|_| ChainError::BadAddress(holder.to_string()))?;

        let raw = self
            .contract
            .balance_of(holder)
            .call()
            .await
            .map_err(|e| ChainError::Contract(e.to_string()))?;

        let decimals = match self.contract.decimals().call().await {
            Ok(decimals) => decimals,
            Err(err) => {
                log::warn!(
                    "decimals() call failed, assuming {}: {}",
                    FALLBACK_DECIMALS,
                    err
                );
                FALLBACK_DECIMALS
            }
        };

        Ok(TokenBalance { raw, decimals })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_display_units() {
        let balance = TokenBalance {
            raw: U256::from(1_500_000u64),
            decimals: 6,
        };
        assert_eq!(balance.to_f64(), 1.5);
        assert_eq!(balance.to_string(), "1.500000");
    }

    #[test]
    fn zero_balance() {
        let balance = TokenBalance {
            raw: U256::zero(),
            decimals: 6,
        };
        assert_eq!(balance.to_f64(), 0.0);
    }
}
