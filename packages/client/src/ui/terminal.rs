//! Line-oriented renderer for the terminal client.
//!
//! A terminal cannot redraw a list in place, so each message is printed
//! once, the first time it becomes visible. "Scrolled to the bottom" means
//! new lines are printed as they arrive; while paused they are held back.

use std::collections::HashSet;

use super::{
    scroll::{AutoScroll, ScrollAction},
    view::{ChatEntry, ChatView},
};
use crate::{domain::MessageId, session::KeyOutcome};

pub const EMPTY_PLACEHOLDER: &str = "No messages yet. Be the first!";

#[derive(Debug, Default)]
pub struct TerminalRenderer {
    printed: HashSet<MessageId>,
    placeholder_shown: bool,
    header_shown: bool,
    scroll: AutoScroll,
    held: Option<ChatView>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines to print for `view`.
    pub fn render(&mut self, view: &ChatView) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.header_shown {
            self.header_shown = true;
            lines.push(format!(
                "--- Chat participants --- [{}] {} (Enter sends, /pause, /resume, /quit)",
                view.header.initial, view.header.display_name
            ));
        }

        match self.scroll.on_update(view.revision) {
            ScrollAction::Nothing => {}
            ScrollAction::Hold => {
                self.held = Some(view.clone());
                if self.scroll.unseen_updates() == 1 {
                    lines.push("(new messages waiting, /resume to show them)".to_string());
                }
            }
            ScrollAction::ScrollToBottom => lines.extend(self.flush(view)),
        }
        lines
    }

    /// Stop printing new messages until [`TerminalRenderer::resume`].
    pub fn pause(&mut self) {
        self.scroll.user_scrolled(false);
    }

    /// Print whatever arrived while paused and follow again.
    pub fn resume(&mut self) -> Vec<String> {
        let action = self.scroll.user_scrolled(true);
        match (action, self.held.take()) {
            (ScrollAction::ScrollToBottom, Some(view)) => self.flush(&view),
            _ => Vec::new(),
        }
    }

    pub fn is_paused(&self) -> bool {
        !self.scroll.is_following()
    }

    fn flush(&mut self, view: &ChatView) -> Vec<String> {
        if view.is_empty() {
            if self.placeholder_shown {
                return Vec::new();
            }
            self.placeholder_shown = true;
            return vec![EMPTY_PLACEHOLDER.to_string()];
        }
        view.entries
            .iter()
            .filter(|entry| self.printed.insert(entry.id))
            .map(format_entry)
            .collect()
    }
}

/// `[HH:MM] author: text`, with own messages marked.
pub fn format_entry(entry: &ChatEntry) -> String {
    let time = if entry.time_label.is_empty() {
        "--:--"
    } else {
        entry.time_label.as_str()
    };
    if entry.is_own {
        format!("[{time}] {} (you): {}", entry.author, entry.text)
    } else {
        format!("[{time}] {}: {}", entry.author, entry.text)
    }
}

/// One-line notice for the outcome of a key press, if it needs one.
pub fn outcome_notice(outcome: &KeyOutcome) -> Option<String> {
    match outcome {
        KeyOutcome::IdentityRejected(e) => {
            Some(format!("That name cannot be used ({e}), please pick another one."))
        }
        KeyOutcome::SendFailed(_) => {
            Some("Message not sent, press Enter on an empty line to retry.".to_string())
        }
        KeyOutcome::IdentityConfirmed(_)
        | KeyOutcome::Sent
        | KeyOutcome::SendSkipped
        | KeyOutcome::Ignored => None,
    }
}
