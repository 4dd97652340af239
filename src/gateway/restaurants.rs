//! Restaurant Table Calls

use super::Gateway;
use crate::error::GatewayError;
use crate::models::{NewRestaurant, Restaurant, RestaurantPatch};

const TABLE: &str = "Restaurant";

impl Gateway {
    /// Fetch-all for the public landing grid.
    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, GatewayError> {
        self.rows_get(TABLE, &[]).await
    }

    /// Listings owned by one `authUsers` row, for the profile page.
    pub async fn restaurants_by_owner(&self, owner_id: u32) -> Result<Vec<Restaurant>, GatewayError> {
        self.rows_get(TABLE, &[("authUserId".to_string(), format!("eq.{owner_id}"))])
            .await
    }

    /// Insert one row and return it with the backend-assigned id.
    pub async fn insert_restaurant(&self, row: &NewRestaurant) -> Result<Restaurant, GatewayError> {
        let rows: Vec<Restaurant> = self.rows_insert(TABLE, &[row]).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| GatewayError::Write("insert returned no row".to_string()))
    }

    pub async fn update_restaurant(
        &self,
        id: u32,
        patch: &RestaurantPatch,
    ) -> Result<(), GatewayError> {
        self.rows_update(TABLE, id, patch).await
    }

    pub async fn delete_restaurant(&self, id: u32) -> Result<(), GatewayError> {
        self.rows_delete(TABLE, id).await
    }
}
