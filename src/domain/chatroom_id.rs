use std::fmt;

/// Opaque chatroom identifier minted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatroomId(String);

impl ChatroomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatroomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
