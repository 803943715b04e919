//! Typed session over a key-value store.
//!
//! The legacy frontend cached auth/session state under ad hoc localStorage
//! string keys. Here the whole session is one typed object with a defined
//! read/write contract; the key names are kept so an existing browser
//! session survives the rewrite. Storage backends implement [`SessionStore`]: the site
//! crate backs it with `window.localStorage`, native code and tests use
//! [`MemoryStore`].

use std::cell::RefCell;
use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::User;
use crate::wizard::form::HiringIntentForm;

/// The fixed storage key names (legacy frontend wire format).
pub mod keys {
    pub const AUTH_TOKEN: &str = "authToken";
    pub const CURRENT_USER: &str = "currentUser";
    pub const LAST_ORGANIZATION_ID: &str = "lastOrganizationId";
    pub const ORGANIZATION_NAME: &str = "organizationName";
    pub const LAST_TEAM_ID: &str = "lastTeamId";
    pub const TEAM_NAME: &str = "teamName";
    pub const HIRING_INTENT_FORM: &str = "hiringIntentForm";
    pub const ROLE_SELECTION: &str = "roleSelection";
    pub const COMPLETE_ROLE_SELECTION: &str = "completeRoleSelection";

    /// Every key the session owns, for [`super::Session::clear`].
    pub const ALL: &[&str] = &[
        AUTH_TOKEN,
        CURRENT_USER,
        LAST_ORGANIZATION_ID,
        ORGANIZATION_NAME,
        LAST_TEAM_ID,
        TEAM_NAME,
        HIRING_INTENT_FORM,
        ROLE_SELECTION,
        COMPLETE_ROLE_SELECTION,
    ];
}

/// String key-value storage the session persists through.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`] for native code and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.into(), value.into());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// The role the user picked in the Job Persona step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleSelection {
    pub role_id: i64,
    pub title: String,
}

/// Everything the site remembers between page loads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub auth_token: Option<String>,
    pub current_user: Option<User>,
    pub last_organization_id: Option<i64>,
    pub organization_name: Option<String>,
    pub last_team_id: Option<i64>,
    pub team_name: Option<String>,
    pub hiring_intent_draft: Option<HiringIntentForm>,
    pub role_selection: Option<RoleSelection>,
    pub complete_role_selection: bool,
}

impl Session {
    /// Read the whole session. Absent keys become `None`; a value that no
    /// longer parses is dropped rather than wedging the app.
    pub fn load(store: &dyn SessionStore) -> Self {
        Self {
            auth_token: store.get(keys::AUTH_TOKEN),
            current_user: get_json(store, keys::CURRENT_USER),
            last_organization_id: get_parsed(store, keys::LAST_ORGANIZATION_ID),
            organization_name: store.get(keys::ORGANIZATION_NAME),
            last_team_id: get_parsed(store, keys::LAST_TEAM_ID),
            team_name: store.get(keys::TEAM_NAME),
            hiring_intent_draft: get_json(store, keys::HIRING_INTENT_FORM),
            role_selection: get_json(store, keys::ROLE_SELECTION),
            complete_role_selection: store
                .get(keys::COMPLETE_ROLE_SELECTION)
                .is_some_and(|v| v == "true"),
        }
    }

    /// Write the whole session back. `None` fields remove their key so a
    /// cleared value does not resurrect on the next load.
    pub fn save(&self, store: &dyn SessionStore) {
        set_or_remove(store, keys::AUTH_TOKEN, self.auth_token.as_deref());
        set_json(store, keys::CURRENT_USER, self.current_user.as_ref());
        set_or_remove(
            store,
            keys::LAST_ORGANIZATION_ID,
            self.last_organization_id.map(|id| id.to_string()).as_deref(),
        );
        set_or_remove(store, keys::ORGANIZATION_NAME, self.organization_name.as_deref());
        set_or_remove(
            store,
            keys::LAST_TEAM_ID,
            self.last_team_id.map(|id| id.to_string()).as_deref(),
        );
        set_or_remove(store, keys::TEAM_NAME, self.team_name.as_deref());
        set_json(store, keys::HIRING_INTENT_FORM, self.hiring_intent_draft.as_ref());
        set_json(store, keys::ROLE_SELECTION, self.role_selection.as_ref());
        if self.complete_role_selection {
            store.set(keys::COMPLETE_ROLE_SELECTION, "true");
        } else {
            store.remove(keys::COMPLETE_ROLE_SELECTION);
        }
    }

    /// Drop every session key (sign-out).
    pub fn clear(store: &dyn SessionStore) {
        for key in keys::ALL {
            store.remove(key);
        }
    }
}

fn get_json<T: DeserializeOwned>(store: &dyn SessionStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "dropping unparseable session value");
            None
        }
    }
}

fn get_parsed(store: &dyn SessionStore, key: &str) -> Option<i64> {
    let raw = store.get(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, %raw, "dropping non-numeric session id");
            None
        }
    }
}

fn set_or_remove(store: &dyn SessionStore, key: &str, value: Option<&str>) {
    match value {
        Some(value) => store.set(key, value),
        None => store.remove(key),
    }
}

fn set_json<T: Serialize>(store: &dyn SessionStore, key: &str, value: Option<&T>) {
    match value {
        // Serialization of these plain records cannot fail in practice;
        // treat a failure like an absent value.
        Some(value) => match serde_json::to_string(value) {
            Ok(raw) => store.set(key, &raw),
            Err(err) => {
                warn!(key, %err, "failed to encode session value");
                store.remove(key);
            }
        },
        None => store.remove(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_store_loads_default_session() {
        let store = MemoryStore::new();
        assert_eq!(Session::load(&store), Session::default());
    }

    #[test]
    fn round_trips_through_the_store() {
        let store = MemoryStore::new();
        let session = Session {
            auth_token: Some("jwt".into()),
            last_organization_id: Some(7),
            organization_name: Some("Acme Robotics".into()),
            last_team_id: Some(3),
            team_name: Some("Platform".into()),
            role_selection: Some(RoleSelection {
                role_id: 1,
                title: "Software Engineer".into(),
            }),
            complete_role_selection: true,
            ..Default::default()
        };
        session.save(&store);
        assert_eq!(Session::load(&store), session);
    }

    #[test]
    fn uses_the_legacy_key_names_on_the_wire() {
        let store = MemoryStore::new();
        Session {
            auth_token: Some("jwt".into()),
            last_organization_id: Some(7),
            ..Default::default()
        }
        .save(&store);
        assert_eq!(store.get("authToken").as_deref(), Some("jwt"));
        assert_eq!(store.get("lastOrganizationId").as_deref(), Some("7"));
    }

    #[test]
    fn corrupt_values_load_as_absent() {
        let store = MemoryStore::new();
        store.set(keys::CURRENT_USER, "{not json");
        store.set(keys::LAST_TEAM_ID, "three");
        let session = Session::load(&store);
        assert_eq!(session.current_user, None);
        assert_eq!(session.last_team_id, None);
    }

    #[test]
    fn saving_none_removes_the_key() {
        let store = MemoryStore::new();
        store.set(keys::TEAM_NAME, "Platform");
        Session::default().save(&store);
        assert_eq!(store.get(keys::TEAM_NAME), None);
    }

    #[test]
    fn clear_drops_every_session_key() {
        let store = MemoryStore::new();
        Session {
            auth_token: Some("jwt".into()),
            complete_role_selection: true,
            ..Default::default()
        }
        .save(&store);
        Session::clear(&store);
        for key in keys::ALL {
            assert_eq!(store.get(key), None, "{key} should be gone");
        }
    }
}
