use crate::models::{NavigationFormData, NavigationItem};
use crate::tree::{self, MovePlan};
use leptos::prelude::*;

/// Session-scoped application state.
///
/// The menu tree is owned here exclusively. Every mutation goes through
/// the tree module on a snapshot and replaces the held tree wholesale,
/// so a partially applied edit is never observable.
#[derive(Clone)]
pub(crate) struct AppState {
    /// The authoritative menu tree.
    pub items: RwSignal<Vec<NavigationItem>>,

    /// User-facing message for the most recent rejected operation.
    pub notice: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<NavigationItem>) -> Self {
        Self {
            items: RwSignal::new(items),
            notice: RwSignal::new(None),
        }
    }

    pub fn add_item(&self, item: NavigationItem, parent_id: Option<&str>) {
        match tree::add_item(&self.items.get_untracked(), item, parent_id) {
            Ok(next) => {
                self.items.set(next);
                self.notice.set(None);
            }
            Err(e) => self.notice.set(Some(e.to_string())),
        }
    }

    pub fn update_item(&self, id: &str, data: &NavigationFormData) {
        match tree::update_item(&self.items.get_untracked(), id, data) {
            Ok(next) => {
                self.items.set(next);
                self.notice.set(None);
            }
            Err(e) => self.notice.set(Some(e.to_string())),
        }
    }

    pub fn remove_item(&self, id: &str) {
        match tree::remove_item(&self.items.get_untracked(), id) {
            Ok(next) => {
                self.items.set(next);
                self.notice.set(None);
            }
            Err(e) => self.notice.set(Some(e.to_string())),
        }
    }

    pub fn reorder_items(&self, source_id: &str, target_id: Option<&str>) {
        match tree::plan_move(&self.items.get_untracked(), source_id, target_id) {
            Ok(MovePlan::Apply(next)) => {
                self.items.set(next);
                self.notice.set(None);
            }
            Ok(MovePlan::NoOp) => {}
            Err(e) => self.notice.set(Some(e.to_string())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
