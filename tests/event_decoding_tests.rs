// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for turning raw `Transfer` logs into browsable records

mod helpers;

use alloy_primitives::{address, Address, B256, U256};
use alloy_sol_types::SolEvent;
use helpers::{create_test_log, ALICE, BOB};
use transferscope::events::definitions::{erc20, erc721};
use transferscope::events::{decode_all, decode_nft_transfer, decode_token_transfer};
use transferscope::{EventBrowser, EventFeed, EventKind, FetchState, TransferRecord};

const TOKEN: Address = address!("1111111111111111111111111111111111111111");
const NFT: Address = address!("2222222222222222222222222222222222222222");

#[test]
fn test_both_standards_share_topic0() {
    assert_eq!(erc20::Transfer::SIGNATURE_HASH, erc721::Transfer::SIGNATURE_HASH);
}

#[test]
fn test_token_logs_feed_the_browser() {
    let value = U256::from(2_500_000_000_000_000_000u64);
    let good = create_test_log(
        TOKEN,
        vec![
            erc20::Transfer::SIGNATURE_HASH,
            ALICE.into_word(),
            BOB.into_word(),
        ],
        value.to_be_bytes::<32>().to_vec(),
    );
    // ERC-721 layout on the token stream: no data word, so ERC-20 decoding fails
    let wrong_layout = create_test_log(
        TOKEN,
        vec![
            erc721::Transfer::SIGNATURE_HASH,
            ALICE.into_word(),
            BOB.into_word(),
            B256::from(U256::from(7u64).to_be_bytes::<32>()),
        ],
        vec![],
    );

    let events = decode_all(&[good, wrong_layout], decode_token_transfer);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].amount(), "2.5");

    let mut browser = EventBrowser::new(EventFeed {
        token_events: FetchState::ready(events),
        nft_events: FetchState::Pending,
    });
    browser.set_search_term("2.5");
    assert_eq!(browser.view().filtered_count, 1);
}

#[test]
fn test_nft_logs_decode_token_id() {
    let mint = create_test_log(
        NFT,
        vec![
            erc721::Transfer::SIGNATURE_HASH,
            Address::ZERO.into_word(),
            ALICE.into_word(),
            B256::from(U256::from(42u64).to_be_bytes::<32>()),
        ],
        vec![],
    );

    let events = decode_all(&[mint], decode_nft_transfer);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].token_id.badge(), "#42");
    assert_eq!(events[0].recipient(), Some(ALICE));

    let mut browser = EventBrowser::new(EventFeed {
        token_events: FetchState::Pending,
        nft_events: FetchState::ready(events),
    });
    browser.set_event_kind(EventKind::Nft);
    assert_eq!(browser.view().page_slice.len(), 1);
}
