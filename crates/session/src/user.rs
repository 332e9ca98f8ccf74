//! The locally-registered user record.

use serde::{Deserialize, Serialize};

/// The single local account record.
///
/// The design supports one account at a time, not a user directory: the
/// record is persisted under one fixed key and signup overwrites whatever
/// was there. Field names are camelCase on the wire so records written by
/// earlier app versions keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalUser {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    /// Normalized (trimmed, lower-cased) at signup. Profile edits are
    /// stored verbatim.
    pub email: String,
    pub password: String,
}

impl LocalUser {
    /// Display name: first and last name joined, trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Signup request. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub email: String,
    pub password: String,
}

/// Partial profile edit. `None` fields keep their persisted value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileUpdate {
    /// Display name; re-split into first/last on the first space.
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub password: Option<String>,
}

/// Canonical email form used for the stored record and login comparison.
pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Split a display name on the first space: first token becomes the first
/// name, the remainder (verbatim) the last name.
pub(crate) fn split_display_name(name: &str) -> (String, String) {
    match name.trim().split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_matches_legacy_records() {
        let legacy = r#"{"firstName":"Ada","lastName":"Lovelace","mobile":"555","email":"ada@x.com","password":"p"}"#;
        let user: LocalUser = serde_json::from_str(legacy).unwrap();
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");

        let encoded = serde_json::to_string(&user).unwrap();
        assert!(encoded.contains("\"firstName\":\"Ada\""));
        assert!(encoded.contains("\"lastName\":\"Lovelace\""));
    }

    #[test]
    fn partial_legacy_records_still_load() {
        let partial = r#"{"email":"ada@x.com","password":"p"}"#;
        let user: LocalUser = serde_json::from_str(partial).unwrap();
        assert_eq!(user.first_name, "");
        assert_eq!(user.email, "ada@x.com");
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  ADA@X.com "), "ada@x.com");
    }

    #[test]
    fn display_name_splits_on_first_space_only() {
        assert_eq!(
            split_display_name("Ada Augusta Lovelace"),
            ("Ada".to_string(), "Augusta Lovelace".to_string())
        );
        assert_eq!(
            split_display_name("Ada"),
            ("Ada".to_string(), String::new())
        );
    }

    #[test]
    fn full_name_round_trips_through_split() {
        let user = LocalUser {
            first_name: "Ada".to_string(),
            last_name: "Augusta Lovelace".to_string(),
            ..LocalUser::default()
        };
        assert_eq!(
            split_display_name(&user.full_name()),
            ("Ada".to_string(), "Augusta Lovelace".to_string())
        );
    }

    #[test]
    fn full_name_of_single_name_has_no_trailing_space() {
        let user = LocalUser {
            first_name: "Ada".to_string(),
            ..LocalUser::default()
        };
        assert_eq!(user.full_name(), "Ada");
    }
}
