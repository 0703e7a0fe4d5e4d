//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose contact list, form, delete-prompt and settings use-cases to Dart
//!   via FRB.
//! - Hold the one process-wide store the screen mutates.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call runs to completion under the state lock, so the UI never
//!   observes a half-applied mutation.
//! - State is in-memory only and is lost when the process exits.

use contact_keeper_core::{
    core_version as core_version_inner, default_log_level, init_logging as init_logging_inner,
    ping as ping_inner,
    AppSettings, Category, CommitOutcome, ContactRow, ContactStore, Draft, DraftTarget, SettingKey,
};
use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock};

static KEEPER_STATE: OnceLock<Mutex<KeeperState>> = OnceLock::new();

/// Screen state shared by all exported calls.
#[derive(Default)]
struct KeeperState {
    store: ContactStore,
    settings: AppSettings,
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive); blank
///   selects the build-mode default.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(resolve_log_level(&level), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One list row as rendered by the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactItem {
    pub position: u32,
    /// Stable row key.
    pub contact_id: String,
    pub name: String,
    pub phone: String,
    /// Comma-joined labels or the empty-set placeholder.
    pub categories_label: String,
}

/// Current add/edit form contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    /// Selected labels in vocabulary order.
    pub selected_categories: Vec<String>,
    /// `None` in add mode.
    pub editing_position: Option<u32>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    /// Whether operation took effect.
    pub ok: bool,
    /// Affected list position, when one exists.
    pub position: Option<u32>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl ActionResponse {
    fn success(message: impl Into<String>, position: Option<usize>) -> Self {
        Self {
            ok: true,
            position: position.map(to_u32),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            position: None,
            message: message.into(),
        }
    }
}

/// Settings screen switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsState {
    pub dark_mode: bool,
    pub notifications_enabled: bool,
}

/// Category labels the form offers, in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn category_vocabulary() -> Vec<String> {
    with_state(|state| {
        state
            .store
            .config()
            .vocabulary
            .iter()
            .map(|category| category.label().to_string())
            .collect()
    })
}

/// Lists all contacts in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn contacts_list() -> Vec<ContactItem> {
    with_state(|state| list_rows(&state.store))
}

/// Opens the form in add mode.
#[flutter_rust_bridge::frb(sync)]
pub fn form_begin_add() -> FormState {
    with_state(|state| to_form_state(state.store.begin_add()))
}

/// Opens the form pre-filled from the contact at `position`.
#[flutter_rust_bridge::frb(sync)]
pub fn form_begin_edit(position: u32) -> ActionResponse {
    with_state(|state| begin_edit(&mut state.store, position))
}

/// Returns the open form, or `None` when the form is closed.
#[flutter_rust_bridge::frb(sync)]
pub fn form_state() -> Option<FormState> {
    with_state(|state| state.store.draft().map(to_form_state))
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_set_name(name: String) -> ActionResponse {
    with_state(|state| draft_edit(state.store.set_name(name)))
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_set_phone(phone: String) -> ActionResponse {
    with_state(|state| draft_edit(state.store.set_phone(phone)))
}

/// Toggles one category chip by label.
#[flutter_rust_bridge::frb(sync)]
pub fn form_toggle_category(label: String) -> ActionResponse {
    with_state(|state| toggle_category(&mut state.store, label.as_str()))
}

/// Commits the open form.
///
/// # FFI contract
/// - Rejected commits return `ok = false` and keep the form open.
#[flutter_rust_bridge::frb(sync)]
pub fn form_commit() -> ActionResponse {
    with_state(|state| commit(&mut state.store))
}

#[flutter_rust_bridge::frb(sync)]
pub fn form_cancel() -> ActionResponse {
    with_state(|state| {
        if state.store.cancel() {
            ActionResponse::success("Form closed.", None)
        } else {
            ActionResponse::failure("No form is open.")
        }
    })
}

/// Opens the delete prompt for the contact at `position`.
///
/// On success `message` holds the prompt text naming the contact.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_request(position: u32) -> ActionResponse {
    with_state(|state| request_delete(&mut state.store, position))
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_confirm() -> ActionResponse {
    with_state(|state| confirm_delete(&mut state.store))
}

#[flutter_rust_bridge::frb(sync)]
pub fn delete_cancel() -> ActionResponse {
    with_state(|state| {
        if state.store.cancel_delete() {
            ActionResponse::success("Delete cancelled.", None)
        } else {
            ActionResponse::failure("No delete is pending.")
        }
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn settings_get() -> SettingsState {
    with_state(|state| to_settings_state(&state.settings))
}

/// Flips one switch (`dark_mode` or `notifications`).
#[flutter_rust_bridge::frb(sync)]
pub fn settings_toggle(key: String) -> ActionResponse {
    with_state(|state| toggle_setting(&mut state.settings, key.as_str()))
}

fn resolve_log_level(level: &str) -> &str {
    if level.trim().is_empty() {
        default_log_level()
    } else {
        level
    }
}

fn with_state<T>(f: impl FnOnce(&mut KeeperState) -> T) -> T {
    let mut guard = lock_state();
    f(&mut guard)
}

fn lock_state() -> MutexGuard<'static, KeeperState> {
    KEEPER_STATE
        .get_or_init(|| Mutex::new(KeeperState::default()))
        .lock()
        .unwrap_or_else(|poisoned| {
            // Repository writes are all-or-nothing.
            warn!("event=state_lock module=ffi status=recovered_poison");
            poisoned.into_inner()
        })
}

fn list_rows(store: &ContactStore) -> Vec<ContactItem> {
    store.rows().into_iter().map(to_contact_item).collect()
}

fn begin_edit(store: &mut ContactStore, position: u32) -> ActionResponse {
    if store.begin_edit(position as usize) {
        ActionResponse::success("Editing contact.", Some(position as usize))
    } else {
        ActionResponse::failure(format!("No contact at position {position}."))
    }
}

fn draft_edit(applied: bool) -> ActionResponse {
    if applied {
        ActionResponse::success("Draft updated.", None)
    } else {
        ActionResponse::failure("No form is open.")
    }
}

fn toggle_category(store: &mut ContactStore, label: &str) -> ActionResponse {
    let Some(category) = Category::from_label(label) else {
        return ActionResponse::failure(format!("Unknown category `{}`.", label.trim()));
    };
    if store.toggle_category(category) {
        ActionResponse::success(format!("Toggled {category}."), None)
    } else {
        ActionResponse::failure(format!("Cannot toggle {category}."))
    }
}

fn commit(store: &mut ContactStore) -> ActionResponse {
    match store.commit() {
        CommitOutcome::Added { position, .. } => {
            ActionResponse::success("Contact added.", Some(position))
        }
        CommitOutcome::Replaced { position, .. } => {
            ActionResponse::success("Contact updated.", Some(position))
        }
        CommitOutcome::Rejected(err) => ActionResponse::failure(err.to_string()),
        CommitOutcome::Stale => ActionResponse::failure("Contact no longer exists."),
        CommitOutcome::Failed(err) => ActionResponse::failure(format!("form_commit failed: {err}")),
        CommitOutcome::NoSession => ActionResponse::failure("No form is open."),
    }
}

fn request_delete(store: &mut ContactStore, position: u32) -> ActionResponse {
    match store.request_delete(position as usize) {
        Some(confirmation) => {
            ActionResponse::success(confirmation.prompt(), Some(confirmation.position))
        }
        None => ActionResponse::failure(format!("No contact at position {position}.")),
    }
}

fn confirm_delete(store: &mut ContactStore) -> ActionResponse {
    match store.confirm_delete() {
        Some((position, _)) => ActionResponse::success("Contact deleted.", Some(position)),
        None => ActionResponse::failure("Nothing to delete."),
    }
}

fn toggle_setting(settings: &mut AppSettings, key: &str) -> ActionResponse {
    match SettingKey::from_name(key) {
        Some(key) => {
            let value = settings.toggle(key);
            ActionResponse::success(format!("{} set to {value}.", key_name(key)), None)
        }
        None => ActionResponse::failure(format!("Unknown setting `{}`.", key.trim())),
    }
}

fn key_name(key: SettingKey) -> &'static str {
    match key {
        SettingKey::DarkMode => "dark_mode",
        SettingKey::Notifications => "notifications",
    }
}

fn to_contact_item(row: ContactRow) -> ContactItem {
    ContactItem {
        position: to_u32(row.position),
        contact_id: row.contact_id.to_string(),
        name: row.name,
        phone: row.phone,
        categories_label: row.categories_label,
    }
}

fn to_form_state(draft: &Draft) -> FormState {
    FormState {
        name: draft.name.clone(),
        phone: draft.phone.clone(),
        selected_categories: draft
            .categories
            .iter()
            .map(|category| category.label().to_string())
            .collect(),
        editing_position: match draft.target {
            DraftTarget::New => None,
            DraftTarget::Existing { position, .. } => Some(to_u32(position)),
        },
    }
}

fn to_settings_state(settings: &AppSettings) -> SettingsState {
    SettingsState {
        dark_mode: settings.dark_mode,
        notifications_enabled: settings.notifications_enabled,
    }
}

fn to_u32(position: usize) -> u32 {
    u32::try_from(position).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        begin_edit, commit, confirm_delete, core_version, draft_edit, init_logging, list_rows,
        ping, request_delete, resolve_log_level, to_form_state, toggle_category, toggle_setting,
    };
    use contact_keeper_core::{AppSettings, ContactStore};

    fn add(store: &mut ContactStore, name: &str, phone: &str) {
        store.begin_add();
        store.set_name(name);
        store.set_phone(phone);
        assert!(commit(store).ok);
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn blank_log_level_uses_build_default() {
        let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
        assert_eq!(resolve_log_level("  "), expected);
        assert_eq!(resolve_log_level("warn"), "warn");
    }

    #[test]
    fn commit_rejection_keeps_form_open() {
        let mut store = ContactStore::new();
        store.begin_add();
        store.set_name("Ana");

        let response = commit(&mut store);
        assert!(!response.ok);
        assert!(response.message.contains("phone"));
        assert!(store.is_form_open());
    }

    #[test]
    fn rows_render_placeholder_and_labels() {
        let mut store = ContactStore::new();
        add(&mut store, "Ana", "111");
        store.begin_add();
        store.set_name("Bia");
        store.set_phone("222");
        assert!(toggle_category(&mut store, " work ").ok);
        assert!(!toggle_category(&mut store, "Neighbors").ok);
        assert!(commit(&mut store).ok);

        let rows = list_rows(&store);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].categories_label, "None");
        assert_eq!(rows[1].categories_label, "Work");
        assert_eq!(rows[1].position, 1);
    }

    #[test]
    fn edit_flow_reports_position() {
        let mut store = ContactStore::new();
        add(&mut store, "Ana", "111");

        assert!(!begin_edit(&mut store, 3).ok);
        assert!(begin_edit(&mut store, 0).ok);
        let form = to_form_state(store.draft().unwrap());
        assert_eq!(form.editing_position, Some(0));
        assert_eq!(form.phone, "111");

        assert!(draft_edit(store.set_phone("222")).ok);
        let response = commit(&mut store);
        assert!(response.ok);
        assert_eq!(response.position, Some(0));
        assert_eq!(list_rows(&store)[0].phone, "222");
    }

    #[test]
    fn delete_prompt_names_contact() {
        let mut store = ContactStore::new();
        add(&mut store, "Ana", "111");
        add(&mut store, "Bia", "222");

        let prompt = request_delete(&mut store, 0);
        assert!(prompt.ok);
        assert_eq!(prompt.message, "Remove \"Ana\"?");

        let deleted = confirm_delete(&mut store);
        assert!(deleted.ok);
        assert_eq!(deleted.position, Some(0));
        assert_eq!(list_rows(&store)[0].name, "Bia");
        assert!(!confirm_delete(&mut store).ok);
        assert!(!request_delete(&mut store, 9).ok);
    }

    #[test]
    fn settings_toggle_flips_single_flag() {
        let mut settings = AppSettings::default();
        let response = toggle_setting(&mut settings, "dark_mode");
        assert!(response.ok);
        assert_eq!(response.message, "dark_mode set to true.");
        assert!(settings.notifications_enabled);
        assert!(!toggle_setting(&mut settings, "volume").ok);
    }
}
