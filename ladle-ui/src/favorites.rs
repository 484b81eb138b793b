//! Favorite membership
//!
//! Each user's favorites form an ordered set of recipe identifiers with two
//! states per recipe: absent or present. Toggling flips the state and is the
//! only transition. The whole map lives under the `favorites` key; the key
//! lock makes racing toggles resolve one after the other instead of
//! last-write-wins.

use tracing::info;

use ladle_common::db::models::FavoriteSet;
use ladle_common::db::{keys, RecordStore};
use ladle_common::Result;

/// Flip membership of `recipe_id` in `user`'s favorite set
///
/// Returns the resulting membership state: `true` when the recipe was just
/// added, `false` when it was just removed. Two successive calls therefore
/// alternate rather than repeat.
pub async fn toggle_favorite(store: &RecordStore, user: &str, recipe_id: &str) -> Result<bool> {
    let _guard = store.lock(keys::FAVORITES).await;
    let mut favorites: FavoriteSet = store.get_json(keys::FAVORITES).await?.unwrap_or_default();

    let entry = favorites.entry(user.to_string()).or_default();
    let now_present = match entry.iter().position(|id| id == recipe_id) {
        Some(index) => {
            entry.remove(index);
            false
        }
        None => {
            entry.push(recipe_id.to_string());
            true
        }
    };

    store.set_json(keys::FAVORITES, &favorites).await?;

    info!(user = %user, recipe = %recipe_id, favorite = now_present, "Toggled favorite");
    Ok(now_present)
}

/// The user's favorite recipe identifiers in insertion order
pub async fn favorite_ids(store: &RecordStore, user: &str) -> Result<Vec<String>> {
    let favorites: FavoriteSet = store.get_json(keys::FAVORITES).await?.unwrap_or_default();
    Ok(favorites.get(user).cloned().unwrap_or_default())
}

/// Whether `recipe_id` is currently in `user`'s favorite set
pub async fn is_favorite(store: &RecordStore, user: &str, recipe_id: &str) -> Result<bool> {
    let ids = favorite_ids(store, user).await?;
    Ok(ids.iter().any(|id| id == recipe_id))
}
