//! Catalog reconciliation
//!
//! Pure functions producing the display collection from a local batch and a
//! remote batch. Locally authored records always precede remote records in
//! the output; a local record with no usable name (a partial write from an
//! earlier failed save) is dropped before it can reach a screen.

use crate::catalog::Recipe;

/// Synthetic category that matches every recipe
pub const ALL_CATEGORY: &str = "All";

/// Merge a local batch and a remote batch into one display sequence
///
/// Local records come first, then remote records, each group preserving its
/// input order. Local records lacking a non-empty name are discarded.
pub fn merge(local: Vec<Recipe>, remote: Vec<Recipe>) -> Vec<Recipe> {
    let mut merged: Vec<Recipe> = local
        .into_iter()
        .filter(|recipe| !recipe.name.trim().is_empty())
        .collect();
    merged.extend(remote);
    merged
}

/// Observable category list for a merged sequence
///
/// `"All"` first, then every local category label and remote meal-type tag
/// in order of first appearance, deduplicated case-sensitively.
pub fn categories(recipes: &[Recipe]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    for recipe in recipes {
        if let Some(category) = &recipe.category {
            push_unique(&mut out, category);
        }
        for tag in &recipe.meal_types {
            push_unique(&mut out, tag);
        }
    }
    out
}

fn push_unique(out: &mut Vec<String>, candidate: &str) {
    if !out.iter().any(|existing| existing == candidate) {
        out.push(candidate.to_string());
    }
}

/// Subsequence of `recipes` matching `category`
///
/// `"All"` is a passthrough. Otherwise a recipe matches when its category
/// label or any of its meal-type tags equals the selection, compared
/// case-insensitively.
pub fn filter_by_category(recipes: Vec<Recipe>, category: &str) -> Vec<Recipe> {
    if category == ALL_CATEGORY {
        return recipes;
    }
    recipes
        .into_iter()
        .filter(|recipe| matches_category(recipe, category))
        .collect()
}

fn matches_category(recipe: &Recipe, category: &str) -> bool {
    recipe
        .category
        .as_deref()
        .is_some_and(|label| label.eq_ignore_ascii_case(category))
        || recipe
            .meal_types
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fetcher::RemoteRecipe;
    use crate::catalog::Recipe;
    use chrono::Utc;
    use ladle_common::db::models::StoredRecipe;

    fn local(id: &str, name: &str, category: &str) -> Recipe {
        Recipe::from_stored(StoredRecipe {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            category: category.to_string(),
            image: None,
            owner: Some("cook@example.com".to_string()),
            created_at: Utc::now(),
        })
    }

    fn remote(id: i64, name: &str, tags: &[&str]) -> Recipe {
        Recipe::from_remote(RemoteRecipe {
            id: Some(id),
            name: Some(name.to_string()),
            meal_type: Some(tags.iter().map(|t| t.to_string()).collect()),
            image: None,
            instructions: None,
        })
    }

    #[test]
    fn test_merge_drops_unnamed_local_records() {
        let locals = vec![
            local("1", "Soup", "lunch"),
            local("2", "", "lunch"),
            local("3", "   ", "dinner"),
        ];
        let merged = merge(locals, vec![remote(7, "Salad", &["lunch"])]);

        let names: Vec<&str> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Salad"]);
    }

    #[test]
    fn test_merge_keeps_unnamed_remote_records() {
        // Only local records are validated; remote ones pass through as-is
        let nameless = Recipe::from_remote(RemoteRecipe {
            id: Some(9),
            name: None,
            meal_type: None,
            image: None,
            instructions: None,
        });
        let merged = merge(vec![], vec![nameless]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_merge_orders_local_before_remote() {
        let merged = merge(
            vec![local("1", "Soup", "lunch"), local("2", "Stew", "dinner")],
            vec![remote(7, "Salad", &["lunch"]), remote(8, "Pasta", &["dinner"])],
        );

        let names: Vec<&str> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Stew", "Salad", "Pasta"]);
    }

    #[test]
    fn test_categories_start_with_all() {
        let merged = merge(vec![local("1", "Soup", "lunch")], vec![]);
        let cats = categories(&merged);
        assert_eq!(cats[0], ALL_CATEGORY);
    }

    #[test]
    fn test_categories_deduplicate_preserving_first_appearance() {
        let merged = merge(
            vec![local("1", "Soup", "lunch"), local("2", "Stew", "dinner")],
            vec![remote(7, "Salad", &["lunch", "snack"])],
        );

        let cats = categories(&merged);
        assert_eq!(cats, vec!["All", "lunch", "dinner", "snack"]);
    }

    #[test]
    fn test_categories_dedup_is_case_sensitive() {
        // "Lunch" and "lunch" are distinct list entries; only exact
        // duplicates collapse
        let merged = merge(
            vec![local("1", "Soup", "lunch")],
            vec![remote(7, "Salad", &["Lunch", "lunch"])],
        );

        let cats = categories(&merged);
        assert_eq!(cats, vec!["All", "lunch", "Lunch"]);
    }

    #[test]
    fn test_filter_all_is_passthrough() {
        let merged = merge(
            vec![local("1", "Soup", "lunch")],
            vec![remote(7, "Salad", &["dinner"])],
        );
        let ids: Vec<String> = merged.iter().map(|r| r.id.clone()).collect();

        let filtered = filter_by_category(merged, ALL_CATEGORY);
        let filtered_ids: Vec<String> = filtered.iter().map(|r| r.id.clone()).collect();
        assert_eq!(filtered_ids, ids);
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        let merged = merge(
            vec![local("1", "Soup", "lunch")],
            vec![remote(7, "Salad", &["LUNCH"])],
        );

        let filtered = filter_by_category(merged, "Lunch");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_by_unknown_category_is_empty() {
        let merged = merge(vec![local("1", "Soup", "lunch")], vec![]);
        let filtered = filter_by_category(merged, "breakfast");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_lunch_catalog_end_to_end() {
        // One authored recipe plus one fetched item, through the whole
        // merge -> categories -> filter pipeline
        let merged = merge(
            vec![local("1700000000000", "Soup", "lunch")],
            vec![remote(7, "Salad", &["lunch", "dinner"])],
        );

        let names: Vec<&str> = merged.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Soup", "Salad"]);

        assert_eq!(categories(&merged), vec!["All", "lunch", "dinner"]);

        let lunch = filter_by_category(merged.clone(), "lunch");
        let lunch_names: Vec<&str> = lunch.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(lunch_names, vec!["Soup", "Salad"]);

        let dinner = filter_by_category(merged, "dinner");
        let dinner_names: Vec<&str> = dinner.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(dinner_names, vec!["Salad"]);
    }
}
