//! Durable-storage slots over localStorage.
//! Three independent string-keyed slots: discovered extras, workspace
//! snapshot, last-selected team. Reads always fall back to an empty/default
//! value; a malformed slot is never surfaced to the caller.

use crate::model::SavedNode;
use web_sys::Storage;

pub const KEY_DISCOVERED: &str = "cure_lab_discovered_v1";
pub const KEY_WORKSPACE: &str = "cure_lab_workspace_v1";
pub const KEY_TEAM: &str = "cure_lab_team_v1";

fn local_store() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn read_slot(key: &str) -> Option<String> {
    local_store()?.get_item(key).ok().flatten()
}

fn write_slot(key: &str, value: &str) {
    if let Some(store) = local_store() {
        let _ = store.set_item(key, value);
    }
}

// Pure parse helpers, split out so the fallback behavior is testable on the
// host without a browser.

pub fn parse_extras(raw: &str) -> Vec<String> {
    serde_json::from_str(raw).unwrap_or_default()
}

pub fn parse_workspace(raw: &str) -> Vec<SavedNode> {
    serde_json::from_str(raw).unwrap_or_default()
}

/// Discovered extras (set difference against the base elements).
pub fn load_discovered_extras() -> Vec<String> {
    read_slot(KEY_DISCOVERED)
        .map(|raw| parse_extras(&raw))
        .unwrap_or_default()
}

pub fn save_discovered_extras(extras: &[String]) {
    if let Ok(raw) = serde_json::to_string(extras) {
        write_slot(KEY_DISCOVERED, &raw);
    }
}

/// Workspace snapshot, oldest placement first.
pub fn load_workspace() -> Vec<SavedNode> {
    read_slot(KEY_WORKSPACE)
        .map(|raw| parse_workspace(&raw))
        .unwrap_or_default()
}

pub fn save_workspace(snapshot: &[SavedNode]) {
    if let Ok(raw) = serde_json::to_string(snapshot) {
        write_slot(KEY_WORKSPACE, &raw);
    }
}

pub fn load_team() -> Option<String> {
    read_slot(KEY_TEAM).filter(|t| !t.is_empty())
}

pub fn save_team(team: &str) {
    write_slot(KEY_TEAM, team);
}

/// Wipes the discovery and workspace slots (the team slot survives a reset).
pub fn clear_progress() {
    if let Some(store) = local_store() {
        let _ = store.remove_item(KEY_DISCOVERED);
        let _ = store.remove_item(KEY_WORKSPACE);
    }
}
