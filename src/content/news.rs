use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::domain::{NewsDraft, NewsItem};
use crate::error::{AppError, Result};
use crate::store::{Collection, DocumentStore};

/// News reads and admin writes. All listings fetch the whole collection and
/// filter/sort locally; the stable sort keeps equal-dated items in store
/// order, so re-sorting an already-sorted list changes nothing.
pub struct NewsService {
    collection: Collection<NewsItem>,
    home_count: usize,
}

impl NewsService {
    pub fn new(store: Arc<dyn DocumentStore>, home_count: usize) -> Self {
        Self {
            collection: Collection::new(store),
            home_count,
        }
    }

    /// Public news page: published items only, newest first.
    pub async fn published(&self) -> Result<Vec<NewsItem>> {
        let mut items: Vec<NewsItem> = self
            .collection
            .list_all()
            .await?
            .into_iter()
            .filter(|item| item.published)
            .collect();
        sort_newest_first(&mut items);
        Ok(items)
    }

    /// Home page strip: the newest few published items.
    pub async fn latest(&self) -> Result<Vec<NewsItem>> {
        let mut items = self.published().await?;
        items.truncate(self.home_count);
        Ok(items)
    }

    /// Admin listing: unpublished drafts included, newest first.
    pub async fn all_for_admin(&self) -> Result<Vec<NewsItem>> {
        let mut items = self.collection.list_all().await?;
        sort_newest_first(&mut items);
        Ok(items)
    }

    pub async fn get(&self, id: &str) -> Result<Option<NewsItem>> {
        self.collection.get(id).await
    }

    /// All-fields save: creates on `None`, replaces on `Some`. Either way
    /// the item's date is stamped with the current time, as the admin form
    /// has always done for edits too.
    pub async fn save(&self, id: Option<&str>, draft: NewsDraft) -> Result<NewsItem> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let item = NewsItem {
            id: String::new(),
            title: draft.title,
            content: draft.content,
            image_url: draft.image_url,
            category: draft.category,
            date: Utc::now(),
            published: draft.published,
        };
        self.collection.upsert(id, item).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.collection.remove(id).await
    }
}

fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.date.cmp(&a.date));
}
