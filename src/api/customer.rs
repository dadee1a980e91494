//! Customer Endpoints

use basket_rules::Customer;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /customers`
    pub async fn list_customers(&self) -> Result<Vec<Customer>, ApiError> {
        self.get_json("/customers").await
    }

    /// `GET /customers/{id}`
    pub async fn get_customer(&self, id: u32) -> Result<Customer, ApiError> {
        self.get_json(&format!("/customers/{}", id)).await
    }

    /// `PUT /customers/{id}` with the whole customer as the body
    pub async fn update_customer(&self, customer: &Customer) -> Result<Customer, ApiError> {
        self.put_json(&format!("/customers/{}", customer.id), customer)
            .await
    }
}

/// Customer id from the `:id` route segment
pub fn parse_customer_id(raw: &str) -> Result<u32, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::InvalidId(raw.to_string()))
}
