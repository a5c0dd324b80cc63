//! The requester as seen by handlers.
use crate::model::user::User;

/// Represents an authenticated user or public access in the depot.
#[derive(Debug, Clone)]
pub enum Viewer {
    /// Authenticated user
    User(User),
    /// Unauthenticated/public access
    Public,
}

impl Viewer {
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Public => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }

    #[must_use]
    pub fn user_id(&self) -> Option<uuid::Uuid> {
        self.user().map(|user| user.id)
    }
}
