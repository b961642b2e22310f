//! Repository for the `doctor_mobile_numbers` table.

use doconboard_core::types::DbId;
use sqlx::PgPool;

/// Reads and wholesale-replaces a doctor's mobile numbers.
pub struct MobileNumberRepo;

impl MobileNumberRepo {
    /// List a doctor's mobile numbers in insertion order.
    pub async fn list_for_doctor(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT mobile_number FROM doctor_mobile_numbers \
             WHERE doctor_id = $1 \
             ORDER BY id",
        )
        .bind(doctor_id)
        .fetch_all(pool)
        .await
    }

    /// Replace all mobile numbers within an existing transaction.
    ///
    /// An empty slice clears the collection.
    pub(crate) async fn replace_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        doctor_id: DbId,
        mobile_numbers: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM doctor_mobile_numbers WHERE doctor_id = $1")
            .bind(doctor_id)
            .execute(&mut **tx)
            .await?;

        for number in mobile_numbers {
            sqlx::query(
                "INSERT INTO doctor_mobile_numbers (doctor_id, mobile_number) VALUES ($1, $2)",
            )
            .bind(doctor_id)
            .bind(number)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
