//! Repository for the `qualifications` and `specializations` tables.
//!
//! The two lists belong to the same onboarding step and are always
//! replaced together.

use doconboard_core::types::DbId;
use sqlx::PgPool;

pub struct QualificationRepo;

impl QualificationRepo {
    /// List a doctor's qualifications in insertion order.
    pub async fn list_qualifications(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT qualification FROM qualifications WHERE doctor_id = $1 ORDER BY id",
        )
        .bind(doctor_id)
        .fetch_all(pool)
        .await
    }

    /// List a doctor's specializations in insertion order.
    pub async fn list_specializations(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT specialization FROM specializations WHERE doctor_id = $1 ORDER BY id",
        )
        .bind(doctor_id)
        .fetch_all(pool)
        .await
    }

    /// Replace both lists within an existing transaction.
    pub(crate) async fn replace_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        doctor_id: DbId,
        qualifications: &[String],
        specializations: &[String],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM qualifications WHERE doctor_id = $1")
            .bind(doctor_id)
            .execute(&mut **tx)
            .await?;
        sqlx::query("DELETE FROM specializations WHERE doctor_id = $1")
            .bind(doctor_id)
            .execute(&mut **tx)
            .await?;

        for qualification in qualifications {
            sqlx::query("INSERT INTO qualifications (doctor_id, qualification) VALUES ($1, $2)")
                .bind(doctor_id)
                .bind(qualification)
                .execute(&mut **tx)
                .await?;
        }

        for specialization in specializations {
            sqlx::query("INSERT INTO specializations (doctor_id, specialization) VALUES ($1, $2)")
                .bind(doctor_id)
                .bind(specialization)
                .execute(&mut **tx)
                .await?;
        }

        Ok(())
    }
}
