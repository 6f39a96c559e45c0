//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信の前提条件チェック、成功時の下書きクリア、失敗時の下書き保持
//!
//! ### なぜこのテストが必要か
//! - 空の下書きや未確定の名前では何も送らないことを保証
//! - 送信失敗時にユーザーが再送できるよう下書きが残ることを確認
//! - 送信したメッセージをローカルで捏造しないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：2xx 応答
//! - 異常系：500 応答、通信エラー
//! - エッジケース：空白のみの下書き、Anonymous のまま送信

use std::sync::Arc;

use crate::{
    domain::{RemoteMessageStore, SendFailure},
    session::state::SharedSessionState,
};

/// 送信 1 回分の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// リモートストアが 2xx を返し、下書きをクリアした
    Sent,
    /// 前提条件を満たさないため何もしなかった
    Skipped,
}

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// リモートストア（データアクセス層の抽象化）
    repository: Arc<dyn RemoteMessageStore>,
    /// セッション状態
    state: SharedSessionState,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn RemoteMessageStore>, state: SharedSessionState) -> Self {
        Self { repository, state }
    }

    /// メッセージ送信を実行
    ///
    /// 成功しても MessageStore には何も追加しない。正式なコピー（id と
    /// created_at 付き）は次のフェッチで取得する。
    ///
    /// # Returns
    ///
    /// * `Ok(SendOutcome::Sent)` - 送信成功（下書きはクリア済み）
    /// * `Ok(SendOutcome::Skipped)` - 下書きが空、または名前が未確定
    /// * `Err(SendFailure)` - 送信失敗（下書きは保持）
    pub async fn execute(&self) -> Result<SendOutcome, SendFailure> {
        // 1. 前提条件チェック（名前確定済み かつ 下書きが空でない）
        let outgoing = {
            let state = self.state.lock().await;
            state.composer.submission(&state.identity)
        };
        let Some(outgoing) = outgoing else {
            tracing::debug!("Nothing to send");
            return Ok(SendOutcome::Skipped);
        };

        // 2. リモートストアに送信（失敗時はログのみ、下書きは残す）
        self.repository
            .post_message(&outgoing)
            .await
            .map_err(|e| {
                tracing::error!("Failed to send message: {}", e);
                e
            })?;

        // 3. 下書きをクリア
        self.state.lock().await.composer.clear();
        tracing::info!(
            "Sent message from '{}' ({} chars)",
            outgoing.author,
            outgoing.text.as_str().chars().count()
        );

        Ok(SendOutcome::Sent)
    }
}
