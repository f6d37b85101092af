//! Session state handed down from the session owner.
//!
//! There is no login flow in this build; the account is seeded at
//! launch and the only transition is logout.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

/// The signed-in visitor, when there is one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Current session, owned by the root component and provided via context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    account: Option<UserAccount>,
}

impl Session {
    pub fn guest() -> Self {
        Self { account: None }
    }

    pub fn signed_in(account: UserAccount) -> Self {
        Self {
            account: Some(account),
        }
    }

    pub fn account(&self) -> Option<&UserAccount> {
        self.account.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.account.is_some()
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self.account.as_ref().map(|a| a.role),
            Some(UserRole::Admin)
        )
    }

    /// Clears the account. Idempotent.
    pub fn logout(&mut self) {
        self.account = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserAccount {
        UserAccount {
            name: "Dorjee".into(),
            email: "dorjee@example.com".into(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn guest_session_has_no_account() {
        let session = Session::guest();
        assert!(!session.is_authenticated());
        assert!(!session.is_admin());
        assert!(session.account().is_none());
    }

    #[test]
    fn logout_clears_account() {
        let mut session = Session::signed_in(admin());
        assert!(session.is_authenticated());
        assert!(session.is_admin());

        session.logout();
        assert!(!session.is_authenticated());

        // Logging out twice is a no-op
        session.logout();
        assert!(!session.is_authenticated());
    }
}
