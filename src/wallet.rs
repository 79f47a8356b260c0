// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only view of the user's wallet connection
//!
//! Session management belongs to the wallet integration. Views only need to
//! know whether an account is active and which one, so that capability is
//! injected through [`WalletAccount`].

use alloy_primitives::Address;

/// Connection state of the user's wallet
pub trait WalletAccount {
    /// Active account, if any
    fn address(&self) -> Option<Address>;

    /// Whether an account is active
    fn is_connected(&self) -> bool {
        self.address().is_some()
    }
}

/// A point-in-time copy of the wallet state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletSnapshot {
    address: Option<Address>,
}

impl WalletSnapshot {
    /// A connected wallet
    pub fn connected(address: Address) -> Self {
        Self {
            address: Some(address),
        }
    }

    /// No wallet connected
    pub fn disconnected() -> Self {
        Self::default()
    }
}

impl WalletAccount for WalletSnapshot {
    fn address(&self) -> Option<Address> {
        self.address
    }
}

impl<W: WalletAccount + ?Sized> WalletAccount for &W {
    fn address(&self) -> Option<Address> {
        (**self).address()
    }
}

/// What a wallet-gated view should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Ask the user to connect first
    ConnectPrompt {
        /// Card title
        title: String,
        /// Prompt text
        message: String,
    },
    /// Proceed for this account
    Connected(Address),
}

impl Gate {
    /// Whether the view may render its content
    pub fn is_open(&self) -> bool {
        matches!(self, Gate::Connected(_))
    }
}

/// Gate a view named `title` on the wallet being connected
pub fn gate<W: WalletAccount + ?Sized>(wallet: &W, title: &str, prompt: &str) -> Gate {
    match wallet.address() {
        Some(address) => Gate::Connected(address),
        None => Gate::ConnectPrompt {
            title: title.to_string(),
            message: prompt.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_disconnected_wallet_gets_prompt() {
        let gate = gate(
            &WalletSnapshot::disconnected(),
            "Contract Events",
            "Please connect your wallet to view events",
        );
        assert!(!gate.is_open());
        assert_eq!(
            gate,
            Gate::ConnectPrompt {
                title: "Contract Events".to_string(),
                message: "Please connect your wallet to view events".to_string(),
            }
        );
    }

    #[test]
    fn test_connected_wallet_passes() {
        let account = address!("00000000000000000000000000000000000000aa");
        let wallet = WalletSnapshot::connected(account);
        assert!(wallet.is_connected());
        assert_eq!(gate(&wallet, "t", "p"), Gate::Connected(account));
    }
}
