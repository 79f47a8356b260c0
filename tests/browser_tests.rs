// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the event browser
//!
//! Histories come from [`MockEventSource`] through [`EventFeed::load`], the same
//! path a frontend takes with the RPC-backed source.

mod helpers;

use alloy_primitives::{address, b256, U256};
use helpers::{
    create_token_transfer, init_tracing, nft_history, token_history, tokens, MockEventSource,
    ALICE, BOB,
};
use transferscope::{
    BlockExplorer, BrowserError, BrowserScreen, EmptyState, EventBrowser, EventFeed, EventKind,
    FetchState, TokenAmount, WalletSnapshot,
};

async fn loaded_browser(source: MockEventSource) -> EventBrowser {
    init_tracing();
    EventBrowser::new(EventFeed::load(&source).await)
}

#[tokio::test]
async fn test_amount_search_matches_formatted_value() {
    let mut event = create_token_transfer(
        ALICE,
        BOB,
        TokenAmount::new(U256::from(2_500_000_000_000_000_000u64)),
        100,
    );
    event.transaction_hash =
        b256!("0000000000000000000000000000000000000000000000000000000000000001");
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(vec![event])).await;

    browser.set_search_term("2.5");
    let view = browser.view();

    assert_eq!(view.event_kind, EventKind::Token);
    assert_eq!(view.filtered_count, 1);
    assert_eq!(view.page_slice.len(), 1);
}

#[tokio::test]
async fn test_five_per_page_over_twelve_events() {
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(token_history(12))).await;
    browser.set_page_size(5).unwrap();

    let view = browser.view();
    assert_eq!(view.total_pages, 3);

    browser.set_current_page(3);
    let view = browser.view();
    assert_eq!(view.page_slice.len(), 2);
    assert!(view.has_previous);
    assert!(!view.has_next);
}

#[tokio::test]
async fn test_empty_nft_history_reports_no_events() {
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(token_history(3))).await;
    browser.set_event_kind(EventKind::Nft);

    let view = browser.view();
    assert!(!view.is_loading);
    assert_eq!(view.empty_state, Some(EmptyState::NoEvents(EventKind::Nft)));
    assert_eq!(view.empty_state.unwrap().title(), "No events found");
}

#[tokio::test]
async fn test_hash_substring_search_ignores_case() {
    let mut event = create_token_transfer(ALICE, BOB, tokens(1), 100);
    event.transaction_hash =
        b256!("abcdef0000000000000000000000000000000000000000000000000000c0ffee");
    let mut history = token_history(4);
    history.push(event);
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(history)).await;

    browser.set_search_term("C0FFEE");
    assert_eq!(browser.view().filtered_count, 1);

    browser.set_search_term("0xABCDEF");
    assert_eq!(browser.view().filtered_count, 1);
}

#[tokio::test]
async fn test_address_search_ignores_case() {
    let history = vec![
        create_token_transfer(ALICE, BOB, tokens(1), 100),
        create_token_transfer(
            address!("1234567890123456789012345678901234567890"),
            BOB,
            tokens(1),
            101,
        ),
    ];
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(history)).await;

    browser.set_search_term("0xAAAAAA");
    assert_eq!(browser.view().filtered_count, 1);

    browser.set_search_term("0xbbbb");
    assert_eq!(browser.view().filtered_count, 2);
}

#[tokio::test]
async fn test_nft_search_matches_token_id() {
    let mut browser = loaded_browser(MockEventSource::new().with_nft_events(nft_history(12))).await;
    browser.set_event_kind(EventKind::Nft);

    // Ids 1, 10, 11 and 12 match by id; id 2 matches by its block (201)
    browser.set_search_term("1");
    let ids: Vec<String> = browser
        .view()
        .rows(&BlockExplorer::lisk_sepolia())
        .into_iter()
        .map(|row| row.value)
        .collect();
    assert_eq!(ids, vec!["#1", "#2", "#10", "#11", "#12"]);
}

#[tokio::test]
async fn test_tab_counters_and_pending_feed() {
    let browser = EventBrowser::new(EventFeed::pending());
    let view = browser.view();
    assert!(view.is_loading);
    assert_eq!(view.token_count, 0);
    assert_eq!(view.nft_count, 0);
    assert_eq!(view.empty_state, None);

    let browser = loaded_browser(
        MockEventSource::new()
            .with_token_events(token_history(7))
            .with_nft_events(nft_history(2)),
    )
    .await;
    assert_eq!(browser.token_count(), 7);
    assert_eq!(browser.nft_count(), 2);
}

#[tokio::test]
async fn test_one_failed_history_leaves_the_other() {
    let mut browser = loaded_browser(
        MockEventSource::new()
            .with_token_events(token_history(3))
            .with_nft_error("execution reverted"),
    )
    .await;

    assert_eq!(browser.view().page_slice.len(), 3);

    browser.set_event_kind(EventKind::Nft);
    let view = browser.view();
    assert!(!view.is_loading);
    assert!(view.failure.unwrap().contains("execution reverted"));
    assert_eq!(view.empty_state, None);
}

#[tokio::test]
async fn test_shrinking_search_keeps_page_unclamped() {
    let mut history = token_history(30);
    history.push(create_token_transfer(BOB, ALICE, tokens(9), 999));
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(history)).await;

    browser.set_current_page(4);
    assert_eq!(browser.view().page_slice.len(), 1);

    // The search resets to page 1; jumping back to page 4 is allowed even
    // though the filtered set has a single page.
    browser.set_search_term("999");
    browser.set_current_page(4);
    let view = browser.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 4);
    assert!(view.page_slice.is_empty());
    assert!(view.has_previous);
    assert!(!view.has_next);
    assert_eq!(view.empty_state, Some(EmptyState::NoMatches));

    browser.previous_page();
    assert_eq!(browser.view().current_page, 3);
}

#[tokio::test]
async fn test_invalid_page_size_is_rejected() {
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(token_history(12))).await;
    browser.set_current_page(2);

    assert_eq!(
        browser.set_page_size(15),
        Err(BrowserError::InvalidPageSize { requested: 15 })
    );
    assert_eq!(browser.view().current_page, 2);
    assert_eq!(browser.view().page_size.get(), 10);
}

#[tokio::test]
async fn test_feed_refresh_keeps_view_state() {
    let mut browser = loaded_browser(MockEventSource::new().with_token_events(token_history(12))).await;
    browser.next_page();
    assert_eq!(browser.view().current_page, 2);

    browser.set_feed(EventFeed {
        token_events: FetchState::ready(token_history(25)),
        nft_events: FetchState::ready(vec![]),
    });
    let view = browser.view();
    assert_eq!(view.current_page, 2);
    assert_eq!(view.total_pages, 3);
}

#[tokio::test]
async fn test_rows_link_to_explorer() {
    let browser = loaded_browser(MockEventSource::new().with_token_events(token_history(1))).await;
    let rows = browser.view().rows(&BlockExplorer::lisk_sepolia());

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.value, "1.0000 LSEA");
    assert_eq!(row.block, "100");
    assert!(row
        .tx_url
        .starts_with("https://sepolia-blockscout.lisk.com/tx/0x"));
}

#[tokio::test]
async fn test_screen_is_gated_on_wallet() {
    let browser = loaded_browser(MockEventSource::new()).await;

    match browser.screen(&WalletSnapshot::disconnected()) {
        BrowserScreen::ConnectPrompt { title, message } => {
            assert_eq!(title, "Contract Events");
            assert_eq!(message, "Please connect your wallet to view events");
        }
        other => panic!("expected connect prompt, got {other:?}"),
    }

    let screen = browser.screen(&WalletSnapshot::connected(ALICE));
    assert!(matches!(screen, BrowserScreen::Events(_)));
}
