//! The session store state machine.

use std::sync::{Arc, RwLock};

use shopmate_kv::KeyValueStore;
use shopmate_store::{Subscribers, Subscription};
use uuid::Uuid;

use crate::error::SessionError;
use crate::user::{LocalUser, ProfileUpdate, Signup, normalize_email, split_display_name};

/// Persisted key layout.
///
/// These strings are the compatibility surface with records written by
/// earlier app versions; they must not change.
pub mod keys {
    /// Serialized [`crate::LocalUser`] record (JSON).
    pub const LOCAL_USER: &str = "localUser";
    /// Session access token.
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Profile image URI, independent of the user record.
    pub const PROFILE_IMAGE: &str = "profile_image";
}

/// Authentication state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

/// Snapshot of the process-wide session.
///
/// Exactly one session exists per process. The refresh token is held in
/// memory only: after a restart the session restores as `LoggedIn` from
/// the persisted access token with no refresh token, matching the
/// persisted layout in [`keys`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    pub auth_token: Option<String>,
    pub refresh_token: Option<String>,
    pub local_user: Option<LocalUser>,
    pub profile_image_uri: Option<String>,
}

impl Session {
    /// Derived state: logged in exactly when an auth token is held.
    pub fn state(&self) -> SessionState {
        if self.auth_token.is_some() {
            SessionState::LoggedIn
        } else {
            SessionState::LoggedOut
        }
    }
}

/// Owns the authenticated/unauthenticated state machine and the local
/// account record, synchronizing the in-memory session with the durable
/// key-value store.
///
/// Operations suspend at the key-value boundary and provide no mutual
/// exclusion between themselves: callers must keep at most one operation
/// in flight per store (the UI disables the triggering control until the
/// call resolves). Overlapping calls race on last-write-wins at the
/// storage layer.
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
    session: RwLock<Session>,
    subscribers: Subscribers<Session>,
}

impl SessionStore {
    /// Restore the session from the durable store.
    ///
    /// The initial state is derived from what is persisted: `LoggedIn` if
    /// an access token survives from a previous run, else `LoggedOut`.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Result<Self, SessionError> {
        let auth_token = kv.get(keys::ACCESS_TOKEN).await?;
        let local_user = match kv.get(keys::LOCAL_USER).await? {
            Some(raw) => Some(decode_user(&raw)?),
            None => None,
        };
        let profile_image_uri = kv.get(keys::PROFILE_IMAGE).await?;

        let session = Session {
            auth_token,
            refresh_token: None,
            local_user,
            profile_image_uri,
        };

        tracing::info!(state = ?session.state(), "session restored");

        Ok(Self {
            kv,
            session: RwLock::new(session),
            subscribers: Subscribers::new(),
        })
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Session {
        match self.session.read() {
            Ok(session) => session.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Current authentication state.
    pub fn state(&self) -> SessionState {
        self.current().state()
    }

    /// The registered account record, if any.
    pub fn local_user(&self) -> Option<LocalUser> {
        self.current().local_user
    }

    /// Subscribe to session replacements.
    pub fn subscribe(&self) -> Subscription<Session> {
        self.subscribers.subscribe()
    }

    /// Register the local account, overwriting any prior record (single
    /// account model). Does not change the authentication state.
    pub async fn signup(&self, signup: Signup) -> Result<(), SessionError> {
        require("first name", &signup.first_name)?;
        require("last name", &signup.last_name)?;
        require("mobile", &signup.mobile)?;
        require("email", &signup.email)?;
        require("password", &signup.password)?;

        let user = LocalUser {
            first_name: signup.first_name,
            last_name: signup.last_name,
            mobile: signup.mobile,
            email: normalize_email(&signup.email),
            password: signup.password,
        };

        self.kv.set(keys::LOCAL_USER, &encode_user(&user)?).await?;

        let next = Session {
            local_user: Some(user),
            ..self.current()
        };
        self.replace(next);

        tracing::info!("local account registered");
        Ok(())
    }

    /// Verify credentials against the registered account and transition to
    /// `LoggedIn`.
    ///
    /// Verification is local-only: the account record is read back from
    /// the durable store and compared with the normalized email and the
    /// exact password. On success a fresh token pair is issued; the access
    /// token is persisted, the refresh token stays in memory.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        let raw = self
            .kv
            .get(keys::LOCAL_USER)
            .await?
            .ok_or(SessionError::NoAccount)?;
        let user = decode_user(&raw)?;

        if user.email != normalize_email(email) || user.password != password {
            tracing::warn!("login rejected: credentials did not match");
            return Err(SessionError::InvalidCredentials);
        }

        let access_token = Uuid::now_v7().to_string();
        let refresh_token = Uuid::now_v7().to_string();
        self.kv.set(keys::ACCESS_TOKEN, &access_token).await?;

        let next = Session {
            auth_token: Some(access_token),
            refresh_token: Some(refresh_token),
            local_user: Some(user),
            ..self.current()
        };
        self.replace(next);

        tracing::info!("login succeeded");
        Ok(())
    }

    /// Clear the token pair and transition to `LoggedOut`. The account
    /// record and profile image are retained.
    pub async fn logout(&self) -> Result<(), SessionError> {
        self.kv.remove(keys::ACCESS_TOKEN).await?;

        let next = Session {
            auth_token: None,
            refresh_token: None,
            ..self.current()
        };
        self.replace(next);

        tracing::info!("logged out");
        Ok(())
    }

    /// Merge profile edits into the persisted account record.
    ///
    /// Loads the stored record (or starts from an empty one), applies the
    /// provided fields, and writes the result back. The display name is
    /// re-split into first/last on the first space. No authentication
    /// state is required; the record exists independently of the token.
    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<(), SessionError> {
        let mut user = match self.kv.get(keys::LOCAL_USER).await? {
            Some(raw) => decode_user(&raw)?,
            None => LocalUser::default(),
        };

        if let Some(name) = &update.display_name {
            let (first_name, last_name) = split_display_name(name);
            user.first_name = first_name;
            user.last_name = last_name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(mobile) = update.mobile {
            user.mobile = mobile;
        }
        if let Some(password) = update.password {
            user.password = password;
        }

        self.kv.set(keys::LOCAL_USER, &encode_user(&user)?).await?;

        let next = Session {
            local_user: Some(user),
            ..self.current()
        };
        self.replace(next);

        tracing::info!("profile updated");
        Ok(())
    }

    /// Persist the profile image reference, independent of the account
    /// record.
    pub async fn set_profile_image(&self, uri: &str) -> Result<(), SessionError> {
        self.kv.set(keys::PROFILE_IMAGE, uri).await?;

        let next = Session {
            profile_image_uri: Some(uri.to_string()),
            ..self.current()
        };
        self.replace(next);

        Ok(())
    }

    fn replace(&self, next: Session) {
        {
            let mut session = match self.session.write() {
                Ok(session) => session,
                Err(poisoned) => poisoned.into_inner(),
            };
            *session = next.clone();
        }
        self.subscribers.publish(&next);
    }
}

fn require(field: &'static str, value: &str) -> Result<(), SessionError> {
    if value.is_empty() {
        Err(SessionError::Validation(field))
    } else {
        Ok(())
    }
}

fn encode_user(user: &LocalUser) -> Result<String, SessionError> {
    serde_json::to_string(user).map_err(|e| SessionError::InvalidRecord(e.to_string()))
}

fn decode_user(raw: &str) -> Result<LocalUser, SessionError> {
    serde_json::from_str(raw).map_err(|e| SessionError::InvalidRecord(e.to_string()))
}
