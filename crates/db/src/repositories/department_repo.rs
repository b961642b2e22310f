//! Repository for the `departments` lookup table and the
//! `doctor_departments` link table.

use doconboard_core::search::contains_pattern;
use doconboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::department::Department;

/// Column list for `departments` queries.
const COLUMNS: &str = "id, name, icon_name";

/// Same columns qualified for JOIN queries.
const JOIN_COLUMNS: &str = "d.id, d.name, d.icon_name";

pub struct DepartmentRepo;

impl DepartmentRepo {
    /// List every department ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments ORDER BY name");
        sqlx::query_as::<_, Department>(&query)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on department name.
    pub async fn search(pool: &PgPool, search: &str) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM departments \
             WHERE name ILIKE $1 ESCAPE '\\' \
             ORDER BY name"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(contains_pattern(search))
            .fetch_all(pool)
            .await
    }

    /// List the departments linked to a doctor, ordered by name.
    pub async fn list_for_doctor(
        pool: &PgPool,
        doctor_id: DbId,
    ) -> Result<Vec<Department>, sqlx::Error> {
        let query = format!(
            "SELECT {JOIN_COLUMNS} \
             FROM departments d \
             JOIN doctor_departments dd ON dd.department_id = d.id \
             WHERE dd.doctor_id = $1 \
             ORDER BY d.name"
        );
        sqlx::query_as::<_, Department>(&query)
            .bind(doctor_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a doctor's department links within an existing transaction.
    ///
    /// `department_ids` must already be free of duplicates.
    pub(crate) async fn replace_links_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        doctor_id: DbId,
        department_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM doctor_departments WHERE doctor_id = $1")
            .bind(doctor_id)
            .execute(&mut **tx)
            .await?;

        for department_id in department_ids {
            sqlx::query(
                "INSERT INTO doctor_departments (doctor_id, department_id) VALUES ($1, $2)",
            )
            .bind(doctor_id)
            .bind(department_id)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }
}
