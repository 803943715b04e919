//! Browser-backed session storage.
//!
//! Implements the library's [`SessionStore`] contract over
//! `window.localStorage`. Storage can be absent (SSR tooling, privacy modes);
//! every accessor degrades to a no-op so the wizard still renders.

use hireframe::session::SessionStore;
use hireframe::wizard::form::WizardForm;

/// Key for the auto-saved wizard draft (full aggregate, separate from the
/// per-section legacy session keys).
const WIZARD_DRAFT: &str = "onboardingWizardDraft";

/// `localStorage`-backed [`SessionStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Persist the auto-save draft of the whole aggregate.
pub fn save_wizard_draft(form: &WizardForm) {
    if let Ok(raw) = serde_json::to_string(form) {
        BrowserStore.set(WIZARD_DRAFT, &raw);
    }
}

/// Load the auto-save draft, if any parses.
pub fn load_wizard_draft() -> Option<WizardForm> {
    let raw = BrowserStore.get(WIZARD_DRAFT)?;
    serde_json::from_str(&raw).ok()
}

/// Drop the draft once the wizard has submitted everything.
pub fn clear_wizard_draft() {
    BrowserStore.remove(WIZARD_DRAFT);
}
