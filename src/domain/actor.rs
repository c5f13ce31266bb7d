//! The actor performing the current request.
//!
//! Handlers receive the actor as an explicit argument; nothing reads it from
//! ambient state.

pub const ROLE_SUPERUSER: &str = "superuser";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated { username: String, is_superuser: bool },
}

impl Actor {
    /// Build an authenticated actor from a stored role string
    pub fn from_role(username: impl Into<String>, role: &str) -> Self {
        Actor::Authenticated {
            username: username.into(),
            is_superuser: role == ROLE_SUPERUSER,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::Authenticated { .. })
    }

    pub fn is_superuser(&self) -> bool {
        matches!(
            self,
            Actor::Authenticated {
                is_superuser: true,
                ..
            }
        )
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated { username, .. } => Some(username),
        }
    }

    /// Destructive operations require an authenticated superuser.
    pub fn can_delete(&self) -> bool {
        self.is_authenticated() && self.is_superuser()
    }
}
