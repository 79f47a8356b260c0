// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! ERC-20 balance and metadata reads for the connected wallet
//!
//! ```rust,ignore
//! use transferscope::balance::TokenBalanceReader;
//!
//! let reader = TokenBalanceReader::new(provider, token_address);
//! if let Some(balance) = reader.read(&wallet).await? {
//!     println!("{}: {} {}", balance.name, balance.display_balance(), balance.symbol);
//! }
//! ```

use std::marker::PhantomData;

use alloy_erc20_full::LazyToken;
use alloy_network::{Ethereum, Network};
use alloy_primitives::Address;
use alloy_provider::Provider;
use alloy_rpc_types::TransactionTrait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn, Instrument};

use crate::config::constants::DISPLAY_DECIMAL_PLACES;
use crate::errors::RpcError;
use crate::spans;
use crate::types::tokens::{TokenAmount, TokenDecimals};
use crate::wallet::WalletAccount;

/// Holder balance together with the token's metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Balance in base units
    pub balance: TokenAmount,
    /// Decimal precision of the token
    pub decimals: TokenDecimals,
}

impl TokenBalance {
    /// Balance with four fraction digits, `"0.0000"` when empty
    pub fn display_balance(&self) -> String {
        self.balance.to_fixed(self.decimals, DISPLAY_DECIMAL_PLACES)
    }
}

/// Reads a holder's balance of one ERC-20 token
pub struct TokenBalanceReader<P, N = Ethereum> {
    provider: P,
    token: Address,
    _network: PhantomData<N>,
}

impl<P> TokenBalanceReader<P, Ethereum> {
    /// Reader for `token` on an Ethereum-type network
    pub fn new(provider: P, token: Address) -> Self {
        Self::for_network(provider, token)
    }
}

impl<P, N> TokenBalanceReader<P, N> {
    /// Reader for `token` on network `N`
    pub fn for_network(provider: P, token: Address) -> Self {
        Self {
            provider,
            token,
            _network: PhantomData,
        }
    }

    /// Token contract being read
    pub fn token(&self) -> Address {
        self.token
    }
}

impl<P, N> TokenBalanceReader<P, N>
where
    N: Network,
    P: Provider<N> + Clone,
    N::TransactionResponse:
        TransactionTrait + alloy_provider::network::eip2718::Typed2718 + Send + Sync + Clone,
{
    /// Balance of the connected account, `None` when no wallet is connected
    pub async fn read<W: WalletAccount + ?Sized>(
        &self,
        wallet: &W,
    ) -> Result<Option<TokenBalance>, RpcError> {
        let Some(holder) = wallet.address() else {
            debug!(token = %self.token, "No wallet connected, skipping balance read");
            return Ok(None);
        };

        self.balance_of(holder).await.map(Some)
    }

    /// Balance and metadata for `holder`
    pub async fn balance_of(&self, holder: Address) -> Result<TokenBalance, RpcError> {
        let token_address = self.token;
        async move {
            let token = LazyToken::new(token_address, self.provider.clone());

            let name = token
                .name()
                .await
                .map_err(|e| RpcError::call_failed("name", e))?
                .to_string();
            let symbol = token
                .symbol()
                .await
                .map_err(|e| RpcError::call_failed("symbol", e))?
                .to_string();
            let decimals = token
                .decimals()
                .await
                .map_err(|e| RpcError::call_failed("decimals", e))?
                .to_owned();
            let balance = token.balance_of(holder).await.map_err(|e| {
                warn!(?token_address, ?holder, error = ?e, "Failed to fetch token balance");
                RpcError::call_failed("balanceOf", e)
            })?;

            debug!(%name, %symbol, decimals, %balance, "Read token balance");

            Ok(TokenBalance {
                name,
                symbol,
                balance: TokenAmount::new(balance),
                decimals: TokenDecimals::new(decimals),
            })
        }
        .instrument(spans::read_token_balance(token_address, holder))
        .await
    }
}
