//! UseCase: メッセージ一覧の取得とマージ
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - FetchMessagesUseCase::execute() メソッド
//! - スナップショットによる MessageStore の置き換え
//!
//! ### なぜこのテストが必要か
//! - 取得失敗時に MessageStore が変化しないことを保証
//! - 停止済みセッションへの遅延書き込みを防ぐ
//! - Anonymous の間はリモートストアにアクセスしないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：スナップショットの適用、同一スナップショットの再適用
//! - 異常系：取得失敗
//! - エッジケース：エポック無効化後に届いたレスポンス

use std::sync::Arc;

use tokio::sync::watch;

use crate::{
    domain::{FetchFailure, RemoteMessageStore},
    session::state::SharedSessionState,
};

/// フェッチ 1 回分の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// MessageStore が新しいスナップショットに置き換わった
    Updated { revision: u64 },
    /// 取得内容が現在の MessageStore と同一だった
    Unchanged,
    /// セッションが停止済み、または未確定のため破棄した
    Discarded,
}

/// メッセージ一覧取得のユースケース
pub struct FetchMessagesUseCase {
    /// リモートストア（データアクセス層の抽象化）
    repository: Arc<dyn RemoteMessageStore>,
    /// セッション状態
    state: SharedSessionState,
    /// MessageStore の revision 通知
    updates: watch::Sender<u64>,
}

impl FetchMessagesUseCase {
    /// 新しい FetchMessagesUseCase を作成
    pub fn new(
        repository: Arc<dyn RemoteMessageStore>,
        state: SharedSessionState,
        updates: watch::Sender<u64>,
    ) -> Self {
        Self {
            repository,
            state,
            updates,
        }
    }

    /// 取得とマージを実行
    ///
    /// # Arguments
    ///
    /// * `epoch` - フェッチを開始したポーリングのエポック
    ///
    /// # Returns
    ///
    /// * `Ok(FetchOutcome)` - 取得成功（適用・同一・破棄のいずれか）
    /// * `Err(FetchFailure)` - 取得失敗（MessageStore は変化しない）
    pub async fn execute(&self, epoch: u64) -> Result<FetchOutcome, FetchFailure> {
        // 1. 停止済み・未確定のセッションではリモートストアにアクセスしない
        if !self.state.lock().await.accepts_writes_from(epoch) {
            return Ok(FetchOutcome::Discarded);
        }

        // 2. 全件取得（失敗時はログのみ）
        let snapshot = self.repository.fetch_messages().await.map_err(|e| {
            tracing::error!("Failed to fetch messages: {}", e);
            e
        })?;

        // 3. レスポンス待ちの間に停止されていたら書き込まない
        let mut state = self.state.lock().await;
        if !state.accepts_writes_from(epoch) {
            tracing::debug!("Discarding snapshot from stopped polling (epoch {})", epoch);
            return Ok(FetchOutcome::Discarded);
        }

        // 4. スナップショットで置き換え
        let received = snapshot.len();
        if !state.store.replace_with_snapshot(snapshot) {
            tracing::trace!("Snapshot of {} message(s) unchanged", received);
            return Ok(FetchOutcome::Unchanged);
        }

        let revision = state.store.revision();
        tracing::debug!(
            "Applied snapshot of {} message(s) (revision {})",
            state.store.len(),
            revision
        );
        self.updates.send_replace(revision);
        Ok(FetchOutcome::Updated { revision })
    }
}
