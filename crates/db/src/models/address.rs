//! Doctor address model and DTO (step 4).

use doconboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `addresses` table (at most one per doctor).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Address {
    pub id: DbId,
    pub country: String,
    pub state: String,
    pub city: String,
    pub pincode: String,
    pub flat_house: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// DTO for creating or replacing a doctor's address.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressInput {
    pub country: String,
    pub state: String,
    pub city: String,
    pub pincode: String,
    pub flat_house: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
