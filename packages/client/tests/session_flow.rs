//! End-to-end session tests.
//!
//! A `ChatSession` wired to the real HTTP adapter and the fake remote store.

mod fixtures;

use std::{sync::Arc, time::Duration};

use axum::http::StatusCode;
use chrono::FixedOffset;
use fixtures::{TestServer, wait_for_get_count};
use marathon_chat_client::{
    ChatSession, ClientConfig,
    domain::KeyGesture,
    infrastructure::HttpRemoteMessageStore,
    session::KeyOutcome,
    ui::Screen,
    usecase::SendOutcome,
};
use serde_json::json;

const WAIT: Duration = Duration::from_secs(3);

fn session_for(server: &TestServer, poll_interval: Duration) -> ChatSession {
    let config = ClientConfig::new(&server.endpoint())
        .unwrap()
        .with_poll_interval(poll_interval)
        .unwrap();
    let remote = HttpRemoteMessageStore::from_config(&config).expect("Failed to build HTTP client");
    ChatSession::new(Arc::new(remote), config.poll_interval)
}

/// Wait until the session holds exactly `len` messages.
async fn wait_for_messages(session: &ChatSession, len: usize) -> bool {
    let deadline = tokio::time::Instant::now() + WAIT;
    while tokio::time::Instant::now() < deadline {
        if session.messages().await.len() == len {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

fn utc() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

#[tokio::test]
async fn test_identity_confirm_issues_one_immediate_fetch() {
    // テスト項目: 名前 "Mira" の確定で Identified になり、即座に 1 回フェッチされる
    // given (前提条件):
    let server = TestServer::start().await;
    server.store.lock().await.push_message("Ana", "hi");
    let mut session = session_for(&server, Duration::from_secs(60));

    // when (操作):
    session.set_name_input("Mira").await;
    let outcome = session.handle_key(KeyGesture::Confirm).await;

    // then (期待する結果):
    assert!(matches!(outcome, KeyOutcome::IdentityConfirmed(_)));
    assert!(wait_for_messages(&session, 1).await);
    assert_eq!(server.get_count().await, 1);

    session.shutdown().await;
}

#[tokio::test]
async fn test_send_appears_after_immediate_repoll() {
    // テスト項目: 送信成功で下書きが空になり、タイマーを待たずに再フェッチされてメッセージが表示される
    // given (前提条件): ポーリング間隔を長くして定期フェッチが起きないようにする
    let server = TestServer::start().await;
    let mut session = session_for(&server, Duration::from_secs(60));
    session.confirm_identity("Mira").await.unwrap();
    assert!(wait_for_get_count(&server, 1, WAIT).await);
    session.set_draft("hello").await;

    // when (操作):
    let result = session.submit().await;

    // then (期待する結果):
    assert_eq!(result, Ok(SendOutcome::Sent));
    assert_eq!(session.draft().await, "");
    assert_eq!(
        server.posted().await,
        vec![json!({"username": "Mira", "text": "hello"})]
    );
    assert!(wait_for_messages(&session, 1).await);
    assert_eq!(server.get_count().await, 2);

    match session.screen(&utc()).await {
        Screen::Chat(view) => {
            assert_eq!(view.entries.len(), 1);
            assert!(view.entries[0].is_own);
            assert_eq!(view.entries[0].text, "hello");
        }
        other => panic!("expected chat screen, got {other:?}"),
    }

    session.shutdown().await;
}

#[tokio::test]
async fn test_failed_send_keeps_draft_and_skips_repoll() {
    // テスト項目: POST が 500 の場合、下書きは "hello" のままで追加のフェッチも発生しない
    // given (前提条件):
    let server = TestServer::start().await;
    server.store.lock().await.post_status = StatusCode::INTERNAL_SERVER_ERROR;
    let mut session = session_for(&server, Duration::from_secs(60));
    session.confirm_identity("Mira").await.unwrap();
    assert!(wait_for_get_count(&server, 1, WAIT).await);
    session.set_draft("hello").await;

    // when (操作):
    let outcome = session.handle_key(KeyGesture::Confirm).await;
    tokio::time::sleep(Duration::from_millis(200)).await;

    // then (期待する結果):
    assert!(matches!(outcome, KeyOutcome::SendFailed(_)));
    assert_eq!(session.draft().await, "hello");
    assert_eq!(server.get_count().await, 1);

    session.shutdown().await;
}

#[tokio::test]
async fn test_fetch_failure_keeps_stale_messages() {
    // テスト項目: フェッチ失敗時は直前の MessageStore がそのまま残り、回復後に再び同期する
    // given (前提条件):
    let server = TestServer::start().await;
    server.store.lock().await.push_message("Ana", "hi");
    let mut session = session_for(&server, Duration::from_millis(100));
    session.confirm_identity("Mira").await.unwrap();
    assert!(wait_for_messages(&session, 1).await);
    let before = session.messages().await;

    // when (操作): ストアが 503 を返すようになり、その間にメッセージが増える
    {
        let mut state = server.store.lock().await;
        state.get_status = StatusCode::SERVICE_UNAVAILABLE;
        state.push_message("Bo", "yo");
    }
    let failing_since = server.get_count().await;
    assert!(wait_for_get_count(&server, failing_since + 3, WAIT).await);

    // then (期待する結果):
    assert_eq!(session.messages().await, before);
    assert!(session.is_polling());

    // when (操作): ストアが回復する
    server.store.lock().await.get_status = StatusCode::OK;

    // then (期待する結果):
    assert!(wait_for_messages(&session, 2).await);

    session.shutdown().await;
}

#[tokio::test]
async fn test_periodic_poll_picks_up_other_participants() {
    // テスト項目: 操作しなくても他の参加者のメッセージが定期ポーリングで反映される
    // given (前提条件):
    let server = TestServer::start().await;
    let mut session = session_for(&server, Duration::from_millis(100));
    let mut updates = session.subscribe();
    session.confirm_identity("Mira").await.unwrap();

    // when (操作):
    server.store.lock().await.push_message("Ana", "anyone here?");

    // then (期待する結果):
    assert!(wait_for_messages(&session, 1).await);
    assert!(updates.has_changed().unwrap());
    let latest = session.messages().await.latest().cloned().unwrap();
    assert_eq!(latest.author, "Ana");

    session.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_stops_polling() {
    // テスト項目: セッション終了後はフェッチが発生しない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut session = session_for(&server, Duration::from_millis(50));
    session.confirm_identity("Mira").await.unwrap();
    assert!(wait_for_get_count(&server, 2, WAIT).await);

    // when (操作):
    session.shutdown().await;
    tokio::time::sleep(Duration::from_millis(100)).await;
    let after_shutdown = server.get_count().await;
    tokio::time::sleep(Duration::from_millis(300)).await;

    // then (期待する結果):
    assert_eq!(server.get_count().await, after_shutdown);
    assert!(!session.is_polling());
}
