pub mod academics;
pub mod departments;
pub mod news;
pub mod placements;

pub use academics::AcademicsService;
pub use departments::{DepartmentService, Resolved};
pub use news::NewsService;
pub use placements::{PlacementsOverview, PlacementsService};

use std::sync::Arc;

use crate::config::ContentConfig;
use crate::store::DocumentStore;

/// Shared context holding one service per content area, all over the same
/// store handle. Pages and admin managers borrow from here.
pub struct ContentContext {
    pub news: NewsService,
    pub academics: AcademicsService,
    pub departments: DepartmentService,
    pub placements: PlacementsService,
}

impl ContentContext {
    pub fn new(store: Arc<dyn DocumentStore>, content: ContentConfig) -> Self {
        Self {
            news: NewsService::new(Arc::clone(&store), content.home_news_count),
            academics: AcademicsService::new(Arc::clone(&store)),
            departments: DepartmentService::new(Arc::clone(&store)),
            placements: PlacementsService::new(store, content),
        }
    }
}
