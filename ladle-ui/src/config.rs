//! Runtime settings for ladle-ui
//!
//! Database-first configuration: all runtime settings come from the
//! `settings` table. Missing or NULL values are initialized with built-in
//! defaults and written back so the table is always complete after startup.

use sqlx::SqlitePool;
use std::time::Duration;
use tracing::info;

use ladle_common::{Error, Result};

/// Runtime settings loaded from database
#[derive(Debug, Clone)]
pub struct RuntimeSettings {
    /// Remote recipe listing endpoint
    pub catalog_url: String,

    /// Request timeout for the catalog fetch
    pub catalog_timeout_ms: u64,

    /// Image URL assigned to authored recipes that come without one
    pub default_recipe_image: String,
}

impl RuntimeSettings {
    /// Load runtime settings from database
    ///
    /// For each setting:
    /// 1. Try to read from database
    /// 2. If NULL or missing, use built-in default
    /// 3. Write default back to database for consistency
    pub async fn load(pool: &SqlitePool) -> Result<Self> {
        let parse_string = |s: &str| Ok(s.to_string());
        let parse_u64 = |s: &str| {
            s.parse::<u64>()
                .map_err(|e| Error::Config(format!("Invalid u64: {}", e)))
        };

        let settings = Self {
            catalog_url: get_setting(
                pool,
                "catalog_url",
                "https://dummyjson.com/recipes".to_string(),
                parse_string,
            )
            .await?,
            catalog_timeout_ms: get_setting(pool, "catalog_timeout_ms", 30000, parse_u64).await?,
            default_recipe_image: get_setting(
                pool,
                "default_recipe_image",
                "https://via.placeholder.com/150".to_string(),
                parse_string,
            )
            .await?,
        };

        info!("Loaded runtime settings from database");
        Ok(settings)
    }

    /// Catalog fetch timeout as Duration
    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_millis(self.catalog_timeout_ms)
    }
}

/// Read one setting, falling back to (and persisting) the default
async fn get_setting<T>(
    pool: &SqlitePool,
    key: &str,
    default: T,
    parse: fn(&str) -> Result<T>,
) -> Result<T>
where
    T: ToString + Clone,
{
    let value_opt: Option<(Option<String>,)> =
        sqlx::query_as("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(pool)
            .await?;

    match value_opt {
        Some((Some(value),)) => parse(&value),
        _ => {
            info!(
                "Setting '{}' not found in database, using default: {}",
                key,
                default.to_string()
            );
            sqlx::query(
                "INSERT OR REPLACE INTO settings (key, value, updated_at) VALUES (?, ?, CURRENT_TIMESTAMP)",
            )
            .bind(key)
            .bind(default.to_string())
            .execute(pool)
            .await?;

            Ok(default)
        }
    }
}
