//! Identity gate: the session's display name and whether it is confirmed.

use super::{error::IdentityError, value_object::DisplayName};

/// Two-state gate in front of the chat.
///
/// `Anonymous` is the initial state and `Identified` is terminal for the
/// session; there is no way back and no rename.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IdentityGate {
    #[default]
    Anonymous,
    Identified(DisplayName),
}

impl IdentityGate {
    pub fn new() -> Self {
        Self::Anonymous
    }

    /// Confirm the display name.
    ///
    /// The input is trimmed first. On error the gate is left untouched.
    ///
    /// # Errors
    ///
    /// * `IdentityError::InvalidName` if the trimmed name is empty or too long
    /// * `IdentityError::AlreadyIdentified` if a name was already confirmed
    pub fn confirm(&mut self, input: &str) -> Result<DisplayName, IdentityError> {
        if self.is_identified() {
            return Err(IdentityError::AlreadyIdentified);
        }
        let name = DisplayName::new(input.to_string())?;
        *self = Self::Identified(name.clone());
        Ok(name)
    }

    pub fn is_identified(&self) -> bool {
        matches!(self, Self::Identified(_))
    }

    /// The confirmed name, if any.
    pub fn display_name(&self) -> Option<&DisplayName> {
        match self {
            Self::Identified(name) => Some(name),
            Self::Anonymous => None,
        }
    }
}
