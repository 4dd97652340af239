//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. This is the single
//! state object: the public listing snapshot with its filter/page state, the
//! signed-in owner's own listings, and the landing-page load status. Nothing
//! reads listing state from ambient scope or from the DOM.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::listing::Listing;
use crate::models::{Restaurant, RestaurantPatch};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Public listing snapshot plus filter/pagination state
    pub listing: Listing,
    /// Restaurants owned by the signed-in user (profile page)
    pub my_restaurants: Vec<Restaurant>,
    /// Landing grid is waiting on the fetch-all call
    pub listing_loading: bool,
    /// Message from a failed listing load; renders as an inline error state
    pub listing_error: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            listing_loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Write-then-commit: these run only after the backend call succeeded, and
// they keep both caches (public listing, owner's list) in step.

/// Commit a successful listing fetch.
pub fn store_listing_loaded(store: &AppStore, records: Vec<Restaurant>) {
    store.listing().write().replace_all(records);
    store.listing_loading().set(false);
    store.listing_error().set(None);
}

/// Record a failed listing fetch; the snapshot is left untouched.
pub fn store_listing_failed(store: &AppStore, message: String) {
    store.listing_loading().set(false);
    store.listing_error().set(Some(message));
}

/// Commit a successful insert to both caches.
pub fn store_commit_insert(store: &AppStore, record: Restaurant) {
    store.listing().write().insert(record.clone());
    store.my_restaurants().write().push(record);
}

/// Commit a successful partial update to both caches.
pub fn store_commit_update(store: &AppStore, id: u32, patch: &RestaurantPatch) {
    store.listing().write().replace(id, patch);
    if let Some(record) = store.my_restaurants().write().iter_mut().find(|r| r.id == id) {
        record.apply(patch);
    }
}

/// Commit a successful delete to both caches.
pub fn store_commit_remove(store: &AppStore, id: u32) {
    store.listing().write().remove(id);
    store.my_restaurants().write().retain(|r| r.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: u32, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: Some(name.to_string()),
            description: None,
            location: None,
            contact: None,
            opening_hours: None,
            image: None,
            owner_id: 1,
            menu: None,
            rating: None,
        }
    }

    #[test]
    fn test_failed_load_keeps_previous_snapshot() {
        let store = Store::new(AppState::new());
        store_listing_loaded(&store, vec![restaurant(1, "Kept"), restaurant(2, "Also kept")]);

        store_listing_failed(&store, "network down".to_string());

        assert_eq!(store.listing().read().records().len(), 2);
        assert!(!store.listing_loading().get());
        assert_eq!(store.listing_error().get().as_deref(), Some("network down"));
    }

    #[test]
    fn test_successful_load_clears_error_state() {
        let store = Store::new(AppState::new());
        store_listing_failed(&store, "first try failed".to_string());

        store_listing_loaded(&store, vec![restaurant(1, "Fresh")]);

        assert!(store.listing_error().get().is_none());
        assert!(!store.listing_loading().get());
    }

    #[test]
    fn test_commit_update_patches_both_caches() {
        let store = Store::new(AppState::new());
        store_listing_loaded(&store, vec![restaurant(1, "Old"), restaurant(2, "Other")]);
        store.my_restaurants().set(vec![restaurant(1, "Old")]);

        store_commit_update(
            &store,
            1,
            &RestaurantPatch {
                name: Some("New".into()),
                ..Default::default()
            },
        );

        assert_eq!(
            store.listing().read().records()[0].name.as_deref(),
            Some("New")
        );
        assert_eq!(
            store.my_restaurants().read()[0].name.as_deref(),
            Some("New")
        );
        assert_eq!(
            store.listing().read().records()[1].name.as_deref(),
            Some("Other")
        );
    }

    #[test]
    fn test_commit_remove_clears_both_caches() {
        let store = Store::new(AppState::new());
        store_listing_loaded(&store, vec![restaurant(1, "Goes"), restaurant(2, "Stays")]);
        store.my_restaurants().set(vec![restaurant(1, "Goes")]);

        store_commit_remove(&store, 1);

        assert_eq!(store.listing().read().records().len(), 1);
        assert!(store.my_restaurants().read().is_empty());
    }
}
