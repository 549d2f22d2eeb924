use std::collections::BTreeMap;
use std::sync::Arc;

use futures_util::future;
use validator::Validate;

use crate::domain::{AcademicResource, ResourceCategory, ResourceDraft};
use crate::error::{AppError, Result};
use crate::store::{Collection, DocumentStore};

/// Academic resources, grouped by category. The category filter is the one
/// place this crate queries the store by a body field; the field is indexed
/// for exactly this.
pub struct AcademicsService {
    collection: Collection<AcademicResource>,
}

impl AcademicsService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store),
        }
    }

    /// One tab's resources, public page and admin manager alike.
    pub async fn by_category(&self, category: ResourceCategory) -> Result<Vec<AcademicResource>> {
        self.collection.list_where("category", category.as_str()).await
    }

    /// The whole public page: every category fetched concurrently. Results
    /// are keyed by the category that originated each fetch, so completion
    /// order cannot misfile them.
    pub async fn all_by_category(
        &self,
    ) -> Result<BTreeMap<ResourceCategory, Vec<AcademicResource>>> {
        let fetches = ResourceCategory::ALL.into_iter().map(|category| async move {
            let resources = self.by_category(category).await?;
            Ok::<_, AppError>((category, resources))
        });

        let pairs = future::try_join_all(fetches).await?;
        Ok(pairs.into_iter().collect())
    }

    /// All-fields save. Empty semester or department strings are stored as
    /// absent; the two spellings mean the same thing on the wire.
    pub async fn save(&self, id: Option<&str>, draft: ResourceDraft) -> Result<AcademicResource> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let resource = AcademicResource {
            id: String::new(),
            category: draft.category,
            title: draft.title,
            description: draft.description,
            file_url: draft.file_url,
            semester: normalize(draft.semester),
            department: normalize(draft.department),
        };
        self.collection.upsert(id, resource).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.collection.remove(id).await
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
