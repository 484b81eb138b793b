//! Recipe ratings
//!
//! One integer rating in 1..=5 per (user, recipe) pair, last write wins, no
//! history. Out-of-range input is rejected before any storage access so the
//! stored map is never touched by an invalid request.

use tracing::info;

use ladle_common::db::models::RatingMap;
use ladle_common::db::{keys, RecordStore};
use ladle_common::{Error, Result};

/// Lowest accepted rating value
pub const MIN_RATING: i64 = 1;
/// Highest accepted rating value
pub const MAX_RATING: i64 = 5;

/// Record `user`'s rating for a recipe, replacing any previous value
pub async fn rate(store: &RecordStore, user: &str, recipe_id: &str, value: i64) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(Error::InvalidInput(format!(
            "rating must be between {} and {}, got {}",
            MIN_RATING, MAX_RATING, value
        )));
    }

    let _guard = store.lock(keys::RATINGS).await;
    let mut ratings: RatingMap = store.get_json(keys::RATINGS).await?.unwrap_or_default();
    ratings
        .entry(user.to_string())
        .or_default()
        .insert(recipe_id.to_string(), value as u8);
    store.set_json(keys::RATINGS, &ratings).await?;

    info!(user = %user, recipe = %recipe_id, value, "Recorded rating");
    Ok(())
}

/// The user's rating for a recipe, `None` when unrated
pub async fn rating_of(store: &RecordStore, user: &str, recipe_id: &str) -> Result<Option<u8>> {
    let ratings: RatingMap = store.get_json(keys::RATINGS).await?.unwrap_or_default();
    Ok(ratings
        .get(user)
        .and_then(|per_recipe| per_recipe.get(recipe_id))
        .copied())
}
