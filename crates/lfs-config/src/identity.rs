//! Committer and author identity

use crate::config::{Configuration, Source};

/// A `(name, email)` pair. Fields that resolve nowhere are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

/// Which role an identity is resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Committer,
    Author,
}

impl Role {
    fn name_var(self) -> &'static str {
        match self {
            Role::Committer => "GIT_COMMITTER_NAME",
            Role::Author => "GIT_AUTHOR_NAME",
        }
    }

    fn email_var(self) -> &'static str {
        match self {
            Role::Committer => "GIT_COMMITTER_EMAIL",
            Role::Author => "GIT_AUTHOR_EMAIL",
        }
    }
}

impl Configuration {
    /// Identity recorded as committer.
    pub fn current_committer(&self) -> Identity {
        self.identity(Role::Committer)
    }

    /// Identity recorded as author.
    pub fn current_author(&self) -> Identity {
        self.identity(Role::Author)
    }

    /// Resolve each field through its own chain.
    ///
    /// Name: role variable, then `user.name`. Email: role variable, then
    /// `user.email`, then `EMAIL`. A present `user.email`, even empty, stops
    /// the email chain before `EMAIL`.
    pub fn identity(&self, role: Role) -> Identity {
        let name = self.resolve_chain(&[Source::Os(role.name_var()), Source::Git("user.name")]);
        let email = self.resolve_chain(&[
            Source::Os(role.email_var()),
            Source::Git("user.email"),
            Source::Os("EMAIL"),
        ]);

        Identity {
            name: name.unwrap_or_default().to_string(),
            email: email.unwrap_or_default().to_string(),
        }
    }
}
