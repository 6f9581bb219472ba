//! Service implementation for the static login backend plugin.

use std::collections::HashMap;

use login_gate_sdk::VerifyOutcome;
use secrecy::{ExposeSecret, SecretString};

use crate::config::{LoginMode, StaticLoginPluginConfig};

struct UserRecord {
    secret: SecretString,
    local: bool,
}

/// Static login backend service.
///
/// Verifies credentials based on configuration mode:
/// - `static_users`: configured username/secret pairs only
/// - `accept_all`: every attempt
pub struct Service {
    mode: LoginMode,
    users: HashMap<String, UserRecord>,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// Later entries for the same username override earlier ones.
    #[must_use]
    pub fn from_config(cfg: &StaticLoginPluginConfig) -> Self {
        let users = cfg
            .users
            .iter()
            .map(|u| {
                (
                    u.username.clone(),
                    UserRecord {
                        secret: u.secret.clone(),
                        local: u.local,
                    },
                )
            })
            .collect();

        Self {
            mode: cfg.mode.clone(),
            users,
        }
    }

    /// Verify a username/secret pair.
    ///
    /// Empty values get no special treatment: an empty secret only matches
    /// a user configured with an empty secret.
    #[must_use]
    pub fn verify(&self, username: &str, secret: &str) -> VerifyOutcome {
        if self.mode == LoginMode::AcceptAll {
            return VerifyOutcome::Accept;
        }

        let Some(user) = self.users.get(username) else {
            return VerifyOutcome::UserNotFound;
        };

        match (user.secret.expose_secret() == secret, user.local) {
            (true, false) => VerifyOutcome::Accept,
            (true, true) => VerifyOutcome::AcceptLocal,
            (false, false) => VerifyOutcome::Reject,
            (false, true) => VerifyOutcome::RejectLocal,
        }
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::UserEntry;

    fn user(username: &str, secret: &str, local: bool) -> UserEntry {
        UserEntry {
            username: username.to_owned(),
            secret: SecretString::from(secret.to_owned()),
            local,
        }
    }

    fn config(users: Vec<UserEntry>) -> StaticLoginPluginConfig {
        StaticLoginPluginConfig {
            users,
            ..StaticLoginPluginConfig::default()
        }
    }

    #[test]
    fn known_user_with_matching_secret_is_accepted() {
        let service = Service::from_config(&config(vec![user("alice", "pw", false)]));
        assert_eq!(service.verify("alice", "pw"), VerifyOutcome::Accept);
    }

    #[test]
    fn local_user_is_accepted_locally() {
        let service = Service::from_config(&config(vec![user("admin", "admin", true)]));
        assert_eq!(service.verify("admin", "admin"), VerifyOutcome::AcceptLocal);
        assert_eq!(service.verify("admin", "nope"), VerifyOutcome::RejectLocal);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let service = Service::from_config(&config(vec![user("alice", "pw", false)]));
        assert_eq!(service.verify("alice", "PW"), VerifyOutcome::Reject);
    }

    #[test]
    fn unknown_user_is_reported() {
        let service = Service::from_config(&config(vec![user("alice", "pw", false)]));
        assert_eq!(service.verify("bob", "pw"), VerifyOutcome::UserNotFound);
    }

    #[test]
    fn empty_credentials_follow_the_table() {
        let service = Service::from_config(&config(vec![user("", "", false)]));
        assert_eq!(service.verify("", ""), VerifyOutcome::Accept);
        assert_eq!(service.verify("", "x"), VerifyOutcome::Reject);

        let service = Service::from_config(&config(vec![]));
        assert_eq!(service.verify("", ""), VerifyOutcome::UserNotFound);
    }

    #[test]
    fn accept_all_mode_accepts_anything() {
        let cfg = StaticLoginPluginConfig {
            mode: LoginMode::AcceptAll,
            ..config(vec![])
        };
        let service = Service::from_config(&cfg);
        assert_eq!(service.verify("anyone", ""), VerifyOutcome::Accept);
    }

    #[test]
    fn duplicate_usernames_keep_last_entry() {
        let service = Service::from_config(&config(vec![
            user("alice", "old", false),
            user("alice", "new", false),
        ]));
        assert_eq!(service.user_count(), 1);
        assert_eq!(service.verify("alice", "new"), VerifyOutcome::Accept);
        assert_eq!(service.verify("alice", "old"), VerifyOutcome::Reject);
    }
}
