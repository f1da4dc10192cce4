//! HTTP request handlers for the employee resource.
//!
//! One module per interaction, all generic over the store gateway:
//!
//! - [`list`] - `GET /api/redarbor` (all records)
//! - [`read`] - `GET /api/redarbor/{id}`
//! - [`create`] - `POST /api/redarbor`
//! - [`update`] - `PUT /api/redarbor/{id}`
//! - [`delete`] - `DELETE /api/redarbor/{id}`
//! - [`health`] - `GET /health`

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

pub use create::create_handler;
pub use delete::{delete_handler, delete_missing_id_handler};
pub use health::{health_handler, liveness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::{update_handler, update_missing_id_handler};

/// Normalizes an id taken from the URL path, stripping path-separator
/// characters.
pub(crate) fn normalize_id(raw: &str) -> String {
    raw.chars().filter(|c| *c != '/').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_id_strips_separators() {
        assert_eq!(normalize_id("/123"), "123");
        assert_eq!(normalize_id("123/"), "123");
        assert_eq!(normalize_id("123"), "123");
        assert_eq!(normalize_id("/"), "");
    }
}
