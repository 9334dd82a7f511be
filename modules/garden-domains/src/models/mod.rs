pub mod bed;
pub mod garden;
pub mod section;
pub mod user;
pub mod variety;

use garden_core::GardenError;

/// Translate constraint violations into domain errors; everything else becomes
/// a database error.
pub(crate) fn classify(err: sqlx::Error, parent: impl FnOnce() -> String) -> anyhow::Error {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            return GardenError::NotFound(parent()).into();
        }
        if db.is_unique_violation() {
            return GardenError::Validation(already_taken(db.constraint())).into();
        }
    }
    GardenError::Database(err.to_string()).into()
}

// Constraint names stay out of client-facing messages.
fn already_taken(constraint: Option<&str>) -> String {
    let field = match constraint {
        Some("users_username_key") => "username",
        _ => "value",
    };
    format!("{field} already taken")
}
