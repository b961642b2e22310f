//! Repository for the `addresses` table.

use doconboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::address::{Address, AddressInput};

/// Column list for `addresses` queries.
const COLUMNS: &str = "id, country, state, city, pincode, flat_house, latitude, longitude";

pub struct AddressRepo;

impl AddressRepo {
    /// Find the address of a doctor, if one was saved.
    pub async fn find_for_doctor(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Option<Address>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM addresses WHERE doctor_id = $1");
        sqlx::query_as::<_, Address>(&query)
            .bind(doctor_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the doctor's address in place, or insert it if absent.
    pub(crate) async fn upsert_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        doctor_id: DbId,
        input: &AddressInput,
    ) -> Result<Address, sqlx::Error> {
        let existing: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM addresses WHERE doctor_id = $1")
                .bind(doctor_id)
                .fetch_optional(&mut **tx)
                .await?;

        let query = if existing.is_some() {
            format!(
                "UPDATE addresses SET \
                    country = $2, state = $3, city = $4, pincode = $5, \
                    flat_house = $6, latitude = $7, longitude = $8, updated_at = NOW() \
                 WHERE doctor_id = $1 \
                 RETURNING {COLUMNS}"
            )
        } else {
            format!(
                "INSERT INTO addresses \
                    (doctor_id, country, state, city, pincode, flat_house, latitude, longitude) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
                 RETURNING {COLUMNS}"
            )
        };

        sqlx::query_as::<_, Address>(&query)
            .bind(doctor_id)
            .bind(&input.country)
            .bind(&input.state)
            .bind(&input.city)
            .bind(&input.pincode)
            .bind(&input.flat_house)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_one(&mut **tx)
            .await
    }
}
