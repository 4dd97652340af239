//! Frontend Models
//!
//! Typed records for the hosted backend's tables. The backend schema uses
//! irregular column names (`"Opening hours"`, `authUserId`); serde renames keep
//! that mapping at this boundary so the rest of the crate sees strict fields.

use serde::{Deserialize, Serialize};

/// One restaurant listing row (`Restaurant` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: u32,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Location", default)]
    pub location: Option<String>,
    #[serde(rename = "Contact", default)]
    pub contact: Option<String>,
    #[serde(rename = "Opening hours", default)]
    pub opening_hours: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
    /// Owning `authUsers` row id. Set at creation, never changed here.
    #[serde(rename = "authUserId")]
    pub owner_id: u32,
    #[serde(default)]
    pub menu: Option<Vec<String>>,
    #[serde(default)]
    pub rating: Option<f32>,
}

impl Restaurant {
    /// Merge a partial update into this record, field by field.
    pub fn apply(&mut self, patch: &RestaurantPatch) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(location) = &patch.location {
            self.location = Some(location.clone());
        }
        if let Some(contact) = &patch.contact {
            self.contact = Some(contact.clone());
        }
        if let Some(hours) = &patch.opening_hours {
            self.opening_hours = Some(hours.clone());
        }
        if let Some(image) = &patch.image {
            self.image = Some(image.clone());
        }
    }
}

/// Insert shape for the `Restaurant` table. The backend assigns `id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRestaurant {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Opening hours")]
    pub opening_hours: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "authUserId")]
    pub owner_id: u32,
}

/// Partial update for a `Restaurant` row; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RestaurantPatch {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Contact", skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(rename = "Opening hours", skip_serializing_if = "Option::is_none")]
    pub opening_hours: Option<String>,
    #[serde(rename = "Image", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl RestaurantPatch {
    /// Patch that only swaps the image URL (used after an upload).
    pub fn image_only(url: impl Into<String>) -> Self {
        Self {
            image: Some(url.into()),
            ..Default::default()
        }
    }
}

/// Owner account row (`authUsers` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerProfile {
    pub id: u32,
    /// Auth-service user uuid this row belongs to.
    #[serde(rename = "authId")]
    pub auth_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Insert shape for the `authUsers` table, written right after signup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOwner {
    #[serde(rename = "authId")]
    pub auth_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Account-details update submitted from the profile page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerPatch {
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_maps_irregular_columns() {
        let row = serde_json::json!({
            "id": 7,
            "Name": "Green Bowl",
            "Description": "Salads and grain bowls",
            "Location": "12 Hill St",
            "Contact": "555-0134",
            "Opening hours": "9am - 9pm",
            "Image": "https://example.com/bowl.jpg",
            "authUserId": 3,
            "menu": ["Caesar", "Falafel bowl"],
            "rating": 4.5
        });

        let r: Restaurant = serde_json::from_value(row).unwrap();
        assert_eq!(r.id, 7);
        assert_eq!(r.name.as_deref(), Some("Green Bowl"));
        assert_eq!(r.opening_hours.as_deref(), Some("9am - 9pm"));
        assert_eq!(r.owner_id, 3);
        assert_eq!(r.menu.as_ref().map(|m| m.len()), Some(2));
        assert_eq!(r.rating, Some(4.5));
    }

    #[test]
    fn test_restaurant_tolerates_missing_display_fields() {
        let row = serde_json::json!({ "id": 1, "authUserId": 9 });
        let r: Restaurant = serde_json::from_value(row).unwrap();
        assert!(r.name.is_none());
        assert!(r.image.is_none());
        assert!(r.menu.is_none());
        assert!(r.rating.is_none());
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = RestaurantPatch {
            name: Some("New Name".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "Name": "New Name" }));
    }

    #[test]
    fn test_apply_merges_named_fields_only() {
        let mut r: Restaurant = serde_json::from_value(serde_json::json!({
            "id": 3,
            "Name": "Old",
            "Location": "Somewhere",
            "authUserId": 1
        }))
        .unwrap();

        r.apply(&RestaurantPatch {
            name: Some("New Name".into()),
            ..Default::default()
        });

        assert_eq!(r.name.as_deref(), Some("New Name"));
        assert_eq!(r.location.as_deref(), Some("Somewhere"));
        assert_eq!(r.id, 3);
    }
}
