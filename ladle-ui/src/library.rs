//! Authored recipe library
//!
//! Create, list and delete the user's own recipe records, persisted as one
//! JSON array under the `customRecipes` key. Every read-modify-write holds
//! the key lock so concurrent saves cannot drop each other's entries.

use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use crate::catalog::LOCAL_ID_PREFIX;
use ladle_common::db::models::{SessionUser, StoredRecipe};
use ladle_common::db::{keys, RecordStore};
use ladle_common::{Error, Result};

/// Form input for a new recipe
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Author a new recipe owned by the current session
///
/// Name, description and category are all required once trimmed; the
/// category is lowercased so it lines up with remote meal-type tags in
/// category filtering.
pub async fn add_recipe(
    store: &RecordStore,
    session: &SessionUser,
    input: NewRecipe,
    default_image: &str,
) -> Result<StoredRecipe> {
    let name = input.name.trim();
    let description = input.description.trim();
    let category = input.category.trim().to_lowercase();

    if name.is_empty() || description.is_empty() || category.is_empty() {
        return Err(Error::InvalidInput(
            "name, description and category are all required".to_string(),
        ));
    }

    let image = input
        .image
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| default_image.to_string());

    let now = Utc::now();
    let recipe = StoredRecipe {
        id: now.timestamp_millis().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        image: Some(image),
        owner: Some(session.email.clone()),
        created_at: now,
    };

    let _guard = store.lock(keys::CUSTOM_RECIPES).await;
    let mut recipes: Vec<StoredRecipe> = store
        .get_json(keys::CUSTOM_RECIPES)
        .await?
        .unwrap_or_default();
    recipes.push(recipe.clone());
    store.set_json(keys::CUSTOM_RECIPES, &recipes).await?;

    info!(id = %recipe.id, name = %recipe.name, "Added recipe");
    Ok(recipe)
}

/// Every stored authored recipe, regardless of owner
///
/// Used as the local batch for catalog reconciliation; malformed entries are
/// the reconciler's problem, not filtered here.
pub async fn custom_recipes(store: &RecordStore) -> Result<Vec<StoredRecipe>> {
    Ok(store
        .get_json(keys::CUSTOM_RECIPES)
        .await?
        .unwrap_or_default())
}

/// The caller's own recipe records
pub async fn user_recipes(store: &RecordStore, session: &SessionUser) -> Result<Vec<StoredRecipe>> {
    let recipes = custom_recipes(store).await?;
    Ok(recipes
        .into_iter()
        .filter(|recipe| recipe.owner.as_deref() == Some(session.email.as_str()))
        .filter(|recipe| !recipe.name.trim().is_empty())
        .collect())
}

/// Delete one of the caller's own records by its display identifier
///
/// Only `local:` identifiers are deletable; remote catalog entries and other
/// users' records are rejected. Unrelated entries (including malformed ones)
/// are written back untouched.
pub async fn delete_recipe(
    store: &RecordStore,
    session: &SessionUser,
    display_id: &str,
) -> Result<()> {
    let Some(raw_id) = display_id.strip_prefix(LOCAL_ID_PREFIX) else {
        return Err(Error::InvalidInput(format!(
            "only locally authored recipes can be deleted: {}",
            display_id
        )));
    };

    let _guard = store.lock(keys::CUSTOM_RECIPES).await;
    let mut recipes: Vec<StoredRecipe> = store
        .get_json(keys::CUSTOM_RECIPES)
        .await?
        .unwrap_or_default();

    let position = recipes
        .iter()
        .position(|recipe| recipe.id == raw_id)
        .ok_or_else(|| Error::NotFound(format!("recipe {}", display_id)))?;

    if recipes[position].owner.as_deref() != Some(session.email.as_str()) {
        return Err(Error::InvalidInput(format!(
            "recipe {} is not owned by the current user",
            display_id
        )));
    }

    recipes.remove(position);
    store.set_json(keys::CUSTOM_RECIPES, &recipes).await?;

    info!(id = %display_id, "Deleted recipe");
    Ok(())
}
