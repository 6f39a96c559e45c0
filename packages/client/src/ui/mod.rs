//! Presentation adapters: the chat view model, auto-scroll state and the
//! terminal renderer.

pub mod scroll;
pub mod terminal;
pub mod view;

pub use scroll::{AutoScroll, ScrollAction};
pub use terminal::{TerminalRenderer, outcome_notice};
pub use view::{ChatEntry, ChatHeader, ChatView, Screen};
