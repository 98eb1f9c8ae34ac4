use uuid::Uuid;

/// Interactive session identity, passed explicitly into every operation that
/// needs to know who is acting. Lifecycle: anonymous → authenticated →
/// anonymous again on logout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<Uuid>,
}

impl Session {
    /// Starts an anonymous session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<Uuid> {
        self.user
    }

    /// Marks the session as belonging to `user`.
    pub fn authenticate(&mut self, user: Uuid) {
        self.user = Some(user);
    }

    /// Drops the identity; the next gate check routes back to the auth flow.
    pub fn clear(&mut self) {
        self.user = None;
    }
}
