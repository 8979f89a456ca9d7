//! Repository for the `categories` table.

use sqlx::PgPool;

use crate::models::category::Category;

/// Column list for categories queries.
const COLUMNS: &str = "id, type";

/// Read access to the seeded category taxonomy.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by id ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// List only the category display names, ordered by id ascending.
    pub async fn list_types(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT type FROM categories ORDER BY id ASC")
            .fetch_all(pool)
            .await
    }
}
