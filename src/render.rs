//! Listing Renderer
//!
//! Pure record-to-descriptor mapping. Components render these descriptors;
//! every placeholder substitution for missing fields happens here so the view
//! layer never branches on `Option`s.

use crate::listing::PageView;
use crate::models::Restaurant;

pub const CARD_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x300?text=No+Image";
pub const DETAIL_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/800x400?text=No+Image";
/// Stock photo written to rows created without an uploaded image.
pub const DEFAULT_LISTING_IMAGE: &str =
    "https://images.unsplash.com/photo-1555396273-367ea4eb4db5";

const NO_NAME: &str = "Unnamed Restaurant";
const NO_DESCRIPTION: &str = "No description available";
const NO_LOCATION: &str = "Location not specified";
const NOT_SPECIFIED: &str = "Not specified";
/// Display default when no rating is stored; nothing aggregates ratings.
const DEFAULT_RATING: f32 = 5.0;

/// What a grid card shows.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: u32,
    pub image: String,
    pub name: String,
    pub description: String,
    pub location: String,
}

/// What the detail modal shows.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: u32,
    pub image: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub contact: String,
    pub opening_hours: String,
    pub rating: f32,
    /// Menu item names; empty means "no items listed".
    pub menu: Vec<String>,
}

fn text_or(field: &Option<String>, fallback: &str) -> String {
    match field.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn card_view(record: &Restaurant) -> CardView {
    CardView {
        id: record.id,
        image: text_or(&record.image, CARD_PLACEHOLDER_IMAGE),
        name: text_or(&record.name, NO_NAME),
        description: text_or(&record.description, NO_DESCRIPTION),
        location: text_or(&record.location, NO_LOCATION),
    }
}

pub fn detail_view(record: &Restaurant) -> DetailView {
    DetailView {
        id: record.id,
        image: text_or(&record.image, DETAIL_PLACEHOLDER_IMAGE),
        name: text_or(&record.name, NO_NAME),
        description: text_or(&record.description, NO_DESCRIPTION),
        location: text_or(&record.location, NO_LOCATION),
        contact: text_or(&record.contact, NOT_SPECIFIED),
        opening_hours: text_or(&record.opening_hours, NOT_SPECIFIED),
        rating: record.rating.unwrap_or(DEFAULT_RATING),
        menu: record.menu.clone().unwrap_or_default(),
    }
}

/// Map a visible page to card descriptors, preserving order.
pub fn card_views(page: &PageView) -> Vec<CardView> {
    page.items.iter().map(card_view).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(id: u32) -> Restaurant {
        Restaurant {
            id,
            name: None,
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
    fn test_card_substitutes_placeholders() {
        let card = card_view(&bare(4));
        assert_eq!(card.id, 4);
        assert_eq!(card.image, CARD_PLACEHOLDER_IMAGE);
        assert_eq!(card.name, "Unnamed Restaurant");
        assert_eq!(card.description, "No description available");
        assert_eq!(card.location, "Location not specified");
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        let mut r = bare(1);
        r.name = Some(String::new());
        assert_eq!(card_view(&r).name, "Unnamed Restaurant");
    }

    #[test]
    fn test_card_keeps_present_fields() {
        let mut r = bare(2);
        r.name = Some("Noodle Works".into());
        r.image = Some("https://example.com/n.jpg".into());
        let card = card_view(&r);
        assert_eq!(card.name, "Noodle Works");
        assert_eq!(card.image, "https://example.com/n.jpg");
    }

    #[test]
    fn test_detail_defaults_rating_and_menu() {
        let detail = detail_view(&bare(9));
        assert_eq!(detail.rating, 5.0);
        assert!(detail.menu.is_empty());
        assert_eq!(detail.contact, "Not specified");
        assert_eq!(detail.opening_hours, "Not specified");
        assert_eq!(detail.image, DETAIL_PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_detail_keeps_stored_rating() {
        let mut r = bare(9);
        r.rating = Some(3.5);
        r.menu = Some(vec!["Pho".into()]);
        let detail = detail_view(&r);
        assert_eq!(detail.rating, 3.5);
        assert_eq!(detail.menu, vec!["Pho".to_string()]);
    }
}
