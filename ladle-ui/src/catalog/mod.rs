//! Merged recipe catalog
//!
//! Brings remotely fetched and locally authored recipes into one display
//! collection. Identifiers are namespaced by provenance at ingestion time
//! (`local:<raw>` / `remote:<raw>`) so a remote numeric id can never collide
//! with a locally generated one.

pub mod fetcher;
pub mod reconcile;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::catalog::fetcher::RemoteRecipe;
use ladle_common::db::models::StoredRecipe;

/// Identifier prefix for locally authored records
pub const LOCAL_ID_PREFIX: &str = "local:";
/// Identifier prefix for remotely fetched records
pub const REMOTE_ID_PREFIX: &str = "remote:";

/// Where a catalog entry originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Local,
    Remote,
}

/// One entry of the merged display collection
///
/// Remote entries carry `meal_types` tags and instruction lists; local
/// entries carry a single `category` label and a description. Both shapes
/// flow through the same struct so the reconciler can treat them uniformly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Namespaced identifier, stable across renders
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub instructions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meal_types: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub provenance: Provenance,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Recipe {
    /// Ingest a locally authored record
    pub fn from_stored(stored: StoredRecipe) -> Self {
        let raw = stored.id.trim();
        let id = if raw.is_empty() {
            format!(
                "{}{}",
                LOCAL_ID_PREFIX,
                fallback_digest(&[
                    stored.name.as_str(),
                    stored.image.as_deref().unwrap_or(""),
                    stored.category.as_str(),
                ])
            )
        } else {
            format!("{}{}", LOCAL_ID_PREFIX, raw)
        };

        Self {
            id,
            name: stored.name,
            description: Some(stored.description),
            instructions: Vec::new(),
            category: Some(stored.category),
            meal_types: Vec::new(),
            image: stored.image,
            provenance: Provenance::Local,
            owner: stored.owner,
            created_at: Some(stored.created_at),
        }
    }

    /// Ingest a remotely fetched record
    ///
    /// Remote items sometimes arrive without an id; those get a deterministic
    /// fallback derived from their visible fields, recomputed at each
    /// ingestion and never persisted.
    pub fn from_remote(remote: RemoteRecipe) -> Self {
        let name = remote.name.unwrap_or_default();
        let meal_types = remote.meal_type.unwrap_or_default();
        let id = match remote.id {
            Some(raw) => format!("{}{}", REMOTE_ID_PREFIX, raw),
            None => {
                let tags = meal_types.join(",");
                format!(
                    "{}{}",
                    REMOTE_ID_PREFIX,
                    fallback_digest(&[
                        name.as_str(),
                        remote.image.as_deref().unwrap_or(""),
                        tags.as_str(),
                    ])
                )
            }
        };

        Self {
            id,
            name,
            description: None,
            instructions: remote.instructions.unwrap_or_default(),
            category: None,
            meal_types,
            image: remote.image,
            provenance: Provenance::Remote,
            owner: None,
            created_at: None,
        }
    }

    /// Raw stored id of a locally authored entry, `None` for remote entries
    pub fn raw_local_id(&self) -> Option<&str> {
        self.id.strip_prefix(LOCAL_ID_PREFIX)
    }
}

/// Deterministic fallback identifier: SHA-256 over the visible fields,
/// truncated to 16 hex characters
fn fallback_digest(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update([0x1f]);
    }
    let digest = format!("{:x}", hasher.finalize());
    digest[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: &str, name: &str) -> StoredRecipe {
        StoredRecipe {
            id: id.to_string(),
            name: name.to_string(),
            description: "tasty".to_string(),
            category: "lunch".to_string(),
            image: None,
            owner: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_local_ids_are_namespaced() {
        let recipe = Recipe::from_stored(stored("1700000000000", "Soup"));
        assert_eq!(recipe.id, "local:1700000000000");
        assert_eq!(recipe.raw_local_id(), Some("1700000000000"));
    }

    #[test]
    fn test_remote_ids_are_namespaced() {
        let remote = RemoteRecipe {
            id: Some(7),
            name: Some("Salad".to_string()),
            meal_type: None,
            image: None,
            instructions: None,
        };
        let recipe = Recipe::from_remote(remote);
        assert_eq!(recipe.id, "remote:7");
        assert_eq!(recipe.raw_local_id(), None);
    }

    #[test]
    fn test_fallback_id_is_deterministic() {
        let make = || RemoteRecipe {
            id: None,
            name: Some("Mystery Stew".to_string()),
            meal_type: Some(vec!["dinner".to_string()]),
            image: Some("https://example.com/stew.jpg".to_string()),
            instructions: None,
        };

        let first = Recipe::from_remote(make());
        let second = Recipe::from_remote(make());
        assert_eq!(first.id, second.id, "fallback ids must not churn across ingestions");
        assert!(first.id.starts_with(REMOTE_ID_PREFIX));
    }

    #[test]
    fn test_fallback_id_differs_per_item() {
        let stew = Recipe::from_remote(RemoteRecipe {
            id: None,
            name: Some("Stew".to_string()),
            meal_type: None,
            image: None,
            instructions: None,
        });
        let pie = Recipe::from_remote(RemoteRecipe {
            id: None,
            name: Some("Pie".to_string()),
            meal_type: None,
            image: None,
            instructions: None,
        });
        assert_ne!(stew.id, pie.id);
    }
}
