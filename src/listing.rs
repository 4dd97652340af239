//! Listing State
//!
//! In-memory snapshot of the restaurant collection plus the active search
//! filter and page number. All methods are pure of I/O; the gateway layer
//! fetches and writes, then commits results here. The filter lives here and
//! only here: the search box is a one-way event source, never read back.

use crate::models::{Restaurant, RestaurantPatch};

/// Records shown per page.
pub const PAGE_SIZE: usize = 6;

/// The slice of the filtered collection that is currently visible.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub items: Vec<Restaurant>,
    pub page_number: usize,
    pub total_pages: usize,
}

/// Snapshot of fetched restaurants with filter/pagination state.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    records: Vec<Restaurant>,
    filter: String,
    page: usize,
}

impl Default for Listing {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            filter: String::new(),
            page: 1,
        }
    }
}

impl Listing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot after a successful fetch. Filter stays
    /// active; the page resets to 1 since the old page numbering is stale.
    pub fn replace_all(&mut self, records: Vec<Restaurant>) {
        self.records = records;
        self.page = 1;
    }

    pub fn records(&self) -> &[Restaurant] {
        &self.records
    }

    /// Set the active search term and jump back to page 1. An empty term
    /// matches everything.
    pub fn set_filter(&mut self, term: &str) {
        self.filter = term.to_string();
        self.page = 1;
    }

    fn matches(record: &Restaurant, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .unwrap_or("")
                .to_lowercase()
                .contains(needle)
        };
        contains(&record.name) || contains(&record.description) || contains(&record.location)
    }

    /// Records matching the active filter, in fetch order.
    pub fn filtered(&self) -> Vec<&Restaurant> {
        let needle = self.filter.to_lowercase();
        self.records
            .iter()
            .filter(|r| Self::matches(r, &needle))
            .collect()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered().len().div_ceil(PAGE_SIZE)
    }

    /// The visible window: up to [`PAGE_SIZE`] records starting at
    /// `(page - 1) * PAGE_SIZE` of the filtered set. With zero matches,
    /// `total_pages` is 0 and the caller renders an explicit no-results state.
    pub fn current_page(&self) -> PageView {
        let filtered = self.filtered();
        let total_pages = filtered.len().div_ceil(PAGE_SIZE);
        let items = filtered
            .into_iter()
            .skip((self.page - 1) * PAGE_SIZE)
            .take(PAGE_SIZE)
            .cloned()
            .collect();
        PageView {
            items,
            page_number: self.page,
            total_pages,
        }
    }

    /// Switch pages. Out-of-range targets are silently ignored, keeping the
    /// previously valid page.
    pub fn go_to_page(&mut self, n: usize) {
        if n >= 1 && n <= self.total_pages() {
            self.page = n;
        }
    }

    // Local cache patches, applied only after the backend write succeeded.

    pub fn insert(&mut self, record: Restaurant) {
        self.records.push(record);
    }

    pub fn replace(&mut self, id: u32, patch: &RestaurantPatch) {
        if let Some(record) = self.records.iter_mut().find(|r| r.id == id) {
            record.apply(patch);
        }
    }

    pub fn remove(&mut self, id: u32) {
        self.records.retain(|r| r.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_restaurant(id: u32, name: &str, description: &str, location: &str) -> Restaurant {
        Restaurant {
            id,
            name: Some(name.to_string()),
            description: Some(description.to_string()),
            location: Some(location.to_string()),
            contact: None,
            opening_hours: None,
            image: None,
            owner_id: 1,
            menu: None,
            rating: None,
        }
    }

    fn listing_of(n: u32) -> Listing {
        let mut listing = Listing::new();
        listing.replace_all(
            (1..=n)
                .map(|i| make_restaurant(i, &format!("Place {i}"), "food", "town"))
                .collect(),
        );
        listing
    }

    #[test]
    fn test_filter_matches_name_description_location() {
        let mut listing = Listing::new();
        listing.replace_all(vec![
            make_restaurant(1, "Sushi Bar", "fresh fish", "harbor"),
            make_restaurant(2, "Grill House", "steak and SUSHI sides", "downtown"),
            make_restaurant(3, "Cafe Roma", "espresso", "Sushi Street"),
            make_restaurant(4, "Taqueria", "tacos", "market"),
        ]);

        listing.set_filter("sushi");
        let ids: Vec<u32> = listing.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut listing = listing_of(10);
        listing.set_filter("place 1");
        let once: Vec<u32> = listing.filtered().iter().map(|r| r.id).collect();
        listing.set_filter("place 1");
        let twice: Vec<u32> = listing.filtered().iter().map(|r| r.id).collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        let listing = listing_of(9);
        assert_eq!(listing.filtered().len(), 9);
    }

    #[test]
    fn test_filter_skips_records_with_missing_fields() {
        let mut listing = Listing::new();
        let mut bare = make_restaurant(1, "", "", "");
        bare.name = None;
        bare.description = None;
        bare.location = None;
        listing.replace_all(vec![bare, make_restaurant(2, "Diner", "", "")]);

        listing.set_filter("diner");
        assert_eq!(listing.filtered().len(), 1);
    }

    #[test]
    fn test_pages_partition_filtered_set() {
        let mut listing = listing_of(14);
        assert_eq!(listing.total_pages(), 3);

        let mut seen = Vec::new();
        for page in 1..=3 {
            listing.go_to_page(page);
            let view = listing.current_page();
            assert!(view.items.len() <= PAGE_SIZE);
            seen.extend(view.items.iter().map(|r| r.id));
        }
        assert_eq!(seen, (1..=14).collect::<Vec<u32>>());
    }

    #[test]
    fn test_seven_records_make_two_pages() {
        let mut listing = listing_of(7);
        let first = listing.current_page();
        assert_eq!(first.page_number, 1);
        assert_eq!(first.total_pages, 2);
        assert_eq!(
            first.items.iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![1, 2, 3, 4, 5, 6]
        );

        listing.go_to_page(2);
        let second = listing.current_page();
        assert_eq!(second.items.iter().map(|r| r.id).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_go_to_page_rejects_out_of_range() {
        let mut listing = listing_of(7);
        listing.go_to_page(2);
        listing.go_to_page(0);
        assert_eq!(listing.current_page().page_number, 2);
        listing.go_to_page(3);
        assert_eq!(listing.current_page().page_number, 2);
    }

    #[test]
    fn test_no_matches_yields_zero_pages() {
        let mut listing = listing_of(10);
        listing.set_filter("nothing matches this");
        let view = listing.current_page();
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_set_filter_resets_page() {
        let mut listing = listing_of(13);
        listing.go_to_page(3);
        listing.set_filter("place");
        assert_eq!(listing.current_page().page_number, 1);
    }

    #[test]
    fn test_insert_then_remove_restores_collection() {
        let mut listing = listing_of(5);
        let before = listing.records().to_vec();

        listing.insert(make_restaurant(99, "Pop-up", "temp", "nowhere"));
        listing.remove(99);

        assert_eq!(listing.records(), before.as_slice());
    }

    #[test]
    fn test_replace_merges_patch_into_matching_record() {
        let mut listing = listing_of(5);
        listing.replace(
            3,
            &RestaurantPatch {
                name: Some("New Name".into()),
                ..Default::default()
            },
        );

        let third = &listing.records()[2];
        assert_eq!(third.name.as_deref(), Some("New Name"));
        assert_eq!(third.description.as_deref(), Some("food"));
        assert_eq!(listing.records()[3].name.as_deref(), Some("Place 4"));
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut listing = listing_of(3);
        let before = listing.records().to_vec();
        listing.replace(42, &RestaurantPatch::image_only("x"));
        assert_eq!(listing.records(), before.as_slice());
    }

    #[test]
    fn test_replace_all_resets_page() {
        let mut listing = listing_of(13);
        listing.go_to_page(2);
        listing.replace_all((1..=6).map(|i| make_restaurant(i, "R", "", "")).collect());
        assert_eq!(listing.current_page().page_number, 1);
    }
}
