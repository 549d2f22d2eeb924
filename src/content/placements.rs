use std::sync::Arc;

use validator::Validate;

use crate::config::ContentConfig;
use crate::domain::{
    PlacementDraft, PlacementRecord, PlacementStatistic, Recruiter, RecruiterDraft,
    StatisticDraft, Testimonial, TestimonialDraft,
};
use crate::error::{AppError, Result};
use crate::store::{Collection, DocumentStore};

/// Everything the placements page shows, assembled in one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementsOverview {
    /// The newest statistics block, if any year has been entered.
    pub statistics: Option<PlacementStatistic>,
    pub recruiters: Vec<Recruiter>,
    pub recent_placements: Vec<PlacementRecord>,
    pub testimonials: Vec<Testimonial>,
}

/// The four placement collections behind the placements page and its admin
/// manager. Year labels sort lexicographically, which is chronological for
/// the "2023-24" format in use.
pub struct PlacementsService {
    statistics: Collection<PlacementStatistic>,
    recruiters: Collection<Recruiter>,
    placements: Collection<PlacementRecord>,
    testimonials: Collection<Testimonial>,
    content: ContentConfig,
}

impl PlacementsService {
    pub fn new(store: Arc<dyn DocumentStore>, content: ContentConfig) -> Self {
        Self {
            statistics: Collection::new(Arc::clone(&store)),
            recruiters: Collection::new(Arc::clone(&store)),
            placements: Collection::new(Arc::clone(&store)),
            testimonials: Collection::new(store),
            content,
        }
    }

    /// The public page payload. The four fetches run concurrently and have
    /// no ordering between them; one failure fails the page.
    pub async fn overview(&self) -> Result<PlacementsOverview> {
        let (statistics, recruiters, recent_placements, testimonials) = tokio::try_join!(
            self.latest_statistics(),
            self.recruiters_in_order(),
            self.recent_placements(),
            self.recent_testimonials(),
        )?;

        Ok(PlacementsOverview {
            statistics,
            recruiters,
            recent_placements,
            testimonials,
        })
    }

    /// The statistics block for the newest year.
    pub async fn latest_statistics(&self) -> Result<Option<PlacementStatistic>> {
        let mut all = self.statistics.list_all().await?;
        all.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(all.into_iter().next())
    }

    pub async fn all_statistics(&self) -> Result<Vec<PlacementStatistic>> {
        let mut all = self.statistics.list_all().await?;
        all.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(all)
    }

    /// Recruiter strip, ascending by display order.
    pub async fn recruiters_in_order(&self) -> Result<Vec<Recruiter>> {
        let mut all = self.recruiters.list_all().await?;
        all.sort_by(|a, b| a.order.cmp(&b.order));
        Ok(all)
    }

    /// Newest placement records, capped for the public page.
    pub async fn recent_placements(&self) -> Result<Vec<PlacementRecord>> {
        let mut all = self.placements.list_all().await?;
        all.sort_by(|a, b| b.year.cmp(&a.year));
        all.truncate(self.content.recent_placements);
        Ok(all)
    }

    /// Admin listing: every placement record, newest year first, uncapped.
    pub async fn all_placements(&self) -> Result<Vec<PlacementRecord>> {
        let mut all = self.placements.list_all().await?;
        all.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(all)
    }

    /// Newest testimonials, capped for the public page.
    pub async fn recent_testimonials(&self) -> Result<Vec<Testimonial>> {
        let mut all = self.testimonials.list_all().await?;
        all.sort_by(|a, b| b.year.cmp(&a.year));
        all.truncate(self.content.recent_testimonials);
        Ok(all)
    }

    pub async fn all_testimonials(&self) -> Result<Vec<Testimonial>> {
        let mut all = self.testimonials.list_all().await?;
        all.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(all)
    }

    pub async fn save_statistics(
        &self,
        id: Option<&str>,
        draft: StatisticDraft,
    ) -> Result<PlacementStatistic> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let record = PlacementStatistic {
            id: String::new(),
            year: draft.year,
            placement_rate: draft.placement_rate,
            highest_package: draft.highest_package,
            average_package: draft.average_package,
            companies_visited: draft.companies_visited,
        };
        self.statistics.upsert(id, record).await
    }

    pub async fn save_recruiter(
        &self,
        id: Option<&str>,
        draft: RecruiterDraft,
    ) -> Result<Recruiter> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let record = Recruiter {
            id: String::new(),
            company_name: draft.company_name,
            logo_url: draft.logo_url,
            order: draft.order,
        };
        self.recruiters.upsert(id, record).await
    }

    pub async fn save_placement(
        &self,
        id: Option<&str>,
        draft: PlacementDraft,
    ) -> Result<PlacementRecord> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let record = PlacementRecord {
            id: String::new(),
            student_name: draft.student_name,
            company: draft.company,
            package: draft.package,
            department: draft.department,
            year: draft.year,
            image_url: draft.image_url,
        };
        self.placements.upsert(id, record).await
    }

    pub async fn save_testimonial(
        &self,
        id: Option<&str>,
        draft: TestimonialDraft,
    ) -> Result<Testimonial> {
        draft
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let record = Testimonial {
            id: String::new(),
            student_name: draft.student_name,
            company: draft.company,
            quote: draft.quote,
            image_url: draft.image_url,
            year: draft.year,
        };
        self.testimonials.upsert(id, record).await
    }

    pub async fn delete_recruiter(&self, id: &str) -> Result<()> {
        self.recruiters.remove(id).await
    }

    pub async fn delete_placement(&self, id: &str) -> Result<()> {
        self.placements.remove(id).await
    }

    pub async fn delete_testimonial(&self, id: &str) -> Result<()> {
        self.testimonials.remove(id).await
    }
}
