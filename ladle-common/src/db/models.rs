//! Database models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-authored recipe as persisted under the `customRecipes` record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecipe {
    /// Raw identifier (epoch-millis string assigned at authoring)
    pub id: String,
    pub name: String,
    pub description: String,
    /// Category label, lowercased at authoring
    pub category: String,
    pub image: Option<String>,
    /// Owner identifier; `None` for records authored before sign-in existed
    pub owner: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Favorite sets per user: user id -> recipe ids in insertion order
pub type FavoriteSet = BTreeMap<String, Vec<String>>;

/// Ratings per user: user id -> recipe id -> value in 1..=5
pub type RatingMap = BTreeMap<String, BTreeMap<String, u8>>;

/// Currently signed-in identity as persisted under the `currentUser` record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
    pub email: String,
    pub signed_in_at: DateTime<Utc>,
}

/// Row of the `users` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub guid: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing)]
    pub password_salt: String,
}
