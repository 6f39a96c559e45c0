//! Auto-scroll state for the message list.

/// What the view should do after the store changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAction {
    /// Bring the latest message into view
    ScrollToBottom,
    /// New content arrived while the user reads older messages
    Hold,
    /// The revision was already handled
    Nothing,
}

/// Follows the latest message unless the user scrolled away from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoScroll {
    follow: bool,
    last_revision: Option<u64>,
    unseen_updates: usize,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self {
            follow: true,
            last_revision: None,
            unseen_updates: 0,
        }
    }
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the store revision may have changed.
    pub fn on_update(&mut self, revision: u64) -> ScrollAction {
        if self.last_revision == Some(revision) {
            return ScrollAction::Nothing;
        }
        self.last_revision = Some(revision);
        if self.follow {
            ScrollAction::ScrollToBottom
        } else {
            self.unseen_updates += 1;
            ScrollAction::Hold
        }
    }

    /// The user moved the viewport. Following resumes once they are back
    /// at the bottom.
    pub fn user_scrolled(&mut self, at_bottom: bool) -> ScrollAction {
        let was_following = self.follow;
        self.follow = at_bottom;
        if at_bottom && !was_following {
            self.unseen_updates = 0;
            return ScrollAction::ScrollToBottom;
        }
        ScrollAction::Nothing
    }

    pub fn is_following(&self) -> bool {
        self.follow
    }

    /// Updates received while not following.
    pub fn unseen_updates(&self) -> usize {
        self.unseen_updates
    }
}
