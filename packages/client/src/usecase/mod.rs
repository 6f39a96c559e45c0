//! UseCase 層
//!
//! セッションの状態を操作するレイヤー。
//! Session から呼び出され、Domain 層とリモートストアを操作します。

pub mod fetch_messages;
pub mod send_message;

pub use fetch_messages::{FetchMessagesUseCase, FetchOutcome};
pub use send_message::{SendMessageUseCase, SendOutcome};
