//! Fruit Catalog Endpoints

use basket_rules::Fruit;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /fruits`
    pub async fn list_fruits(&self) -> Result<Vec<Fruit>, ApiError> {
        self.get_json("/fruits").await
    }
}
