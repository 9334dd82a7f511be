pub mod models;
#[cfg(feature = "test-utils")]
pub mod testutil;
pub mod validation;

pub use models::bed::Bed;
pub use models::garden::Garden;
pub use models::section::Section;
pub use models::user::User;
pub use models::variety::Variety;

use anyhow::Result;
use sqlx::PgPool;

/// Apply the bundled SQL migrations.
pub async fn migrate(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
