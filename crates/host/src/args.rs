//! Named-argument channel from the host process entry.

use crate::session::SessionHandle;

/// Value carried by a named startup argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArgumentValue {
    /// A session handle, e.g. the instance that started the scripting layer.
    Session(SessionHandle),
    /// Plain text.
    Text(String),
}

impl ArgumentValue {
    pub fn as_session(&self) -> Option<&SessionHandle> {
        match self {
            ArgumentValue::Session(session) => Some(session),
            ArgumentValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ArgumentValue::Text(text) => Some(text),
            ArgumentValue::Session(_) => None,
        }
    }
}

/// Host-owned argument channel, queried once at process entry.
pub trait ArgumentChannel: Send + Sync {
    /// Look up a named argument. `None` when the host did not pass it.
    fn named(&self, name: &str) -> Option<ArgumentValue>;
}
