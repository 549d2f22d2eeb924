use std::sync::Arc;

use validator::Validate;

use crate::data::bundled_department;
use crate::domain::{DepartmentProfile, DepartmentSlug};
use crate::error::{AppError, Result};
use crate::store::{Collection, DocumentStore};

/// How a department profile was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved<T> {
    /// The dynamic record; preferred whenever one exists.
    Dynamic(T),
    /// The bundled static record, served when the dynamic tier has nothing
    /// or cannot be reached. May be staler than an unreachable override.
    Fallback(T),
    /// Neither tier knows the id.
    Missing,
}

impl<T> Resolved<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Resolved::Dynamic(value) | Resolved::Fallback(value) => Some(value),
            Resolved::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolved::Missing)
    }
}

/// Department profiles: a dynamic store collection layered over the bundled
/// static profiles.
pub struct DepartmentService {
    collection: Collection<DepartmentProfile>,
}

impl DepartmentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            collection: Collection::new(store),
        }
    }

    /// Two-tier lookup for the public detail page: dynamic record first,
    /// bundled profile second, missing last. A store failure is logged and
    /// demoted to the fallback tier; the detail page never sees an error.
    pub async fn profile(&self, slug: &str) -> Resolved<DepartmentProfile> {
        match self.collection.get(slug).await {
            Ok(Some(profile)) => return Resolved::Dynamic(profile),
            Ok(None) => {}
            Err(error) => {
                tracing::warn!(slug, %error, "department lookup failed, serving bundled profile");
            }
        }

        match DepartmentSlug::from_str(slug) {
            Some(known) => Resolved::Fallback(bundled_department(known)),
            None => Resolved::Missing,
        }
    }

    /// Editor load for the admin manager: the dynamic record if present,
    /// otherwise a blank scaffold named after the slug. Deliberately not
    /// the bundled profile, so saving a scaffold never silently republishes
    /// fallback text as dynamic content.
    pub async fn editor_profile(&self, slug: DepartmentSlug) -> Result<DepartmentProfile> {
        match self.collection.get(slug.as_str()).await? {
            Some(profile) => Ok(profile),
            None => Ok(DepartmentProfile::scaffold(slug)),
        }
    }

    /// Keyed write of the full profile under its slug.
    pub async fn save_profile(
        &self,
        slug: DepartmentSlug,
        mut profile: DepartmentProfile,
    ) -> Result<DepartmentProfile> {
        profile
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        profile.id = slug.as_str().to_string();
        self.collection.upsert(Some(slug.as_str()), profile).await
    }
}
