use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Page {page} has no results")]
    PageOutOfRange { page: i64 },

    #[error("Category {id} is outside the known range 0..={max}")]
    CategoryOutOfRange { id: DbId, max: DbId },
}
