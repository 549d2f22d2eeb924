use std::sync::Arc;

use campanile::config::ContentConfig;
use campanile::content::PlacementsService;
use campanile::domain::{PlacementDraft, RecruiterDraft, StatisticDraft, TestimonialDraft};
use campanile::store::SqliteDocumentStore;
use sqlx::sqlite::SqlitePoolOptions;

async fn memory_store() -> anyhow::Result<Arc<SqliteDocumentStore>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(Arc::new(SqliteDocumentStore::new(pool)))
}

fn service(store: &Arc<SqliteDocumentStore>) -> PlacementsService {
    PlacementsService::new(store.clone(), ContentConfig::default())
}

#[tokio::test]
async fn test_overview_over_seeded_store() -> anyhow::Result<()> {
    let store = memory_store().await?;
    campanile::seed::run(store.clone()).await?;

    let overview = service(&store).overview().await?;

    let statistics = overview.statistics.expect("seed writes one year");
    assert_eq!(statistics.year, "2023-24");
    assert_eq!(statistics.companies_visited, 150);

    // Recruiter strip comes back in display order.
    let names: Vec<&str> = overview
        .recruiters
        .iter()
        .map(|r| r.company_name.as_str())
        .collect();
    assert_eq!(names[0], "Google");
    assert_eq!(names[9], "Oracle");
    assert!(overview.recruiters.windows(2).all(|w| w[0].order <= w[1].order));

    assert_eq!(overview.recent_placements.len(), 8);
    assert_eq!(overview.testimonials.len(), 4);

    Ok(())
}

#[tokio::test]
async fn test_overview_of_empty_store_is_ready_not_error() -> anyhow::Result<()> {
    let store = memory_store().await?;

    let overview = service(&store).overview().await?;

    assert!(overview.statistics.is_none());
    assert!(overview.recruiters.is_empty());
    assert!(overview.recent_placements.is_empty());
    assert!(overview.testimonials.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_recent_placements_cap_newest_years_first() -> anyhow::Result<()> {
    let store = memory_store().await?;
    campanile::seed::run(store.clone()).await?;
    let service = service(&store);

    // A ninth record from a newer year pushes one seed record off the page.
    service
        .save_placement(
            None,
            PlacementDraft {
                student_name: "Meena Iyer".to_string(),
                company: "Oracle".to_string(),
                package: "12 LPA".to_string(),
                department: "CSE".to_string(),
                year: "2025".to_string(),
                image_url: None,
            },
        )
        .await?;

    let recent = service.recent_placements().await?;
    assert_eq!(recent.len(), 8);
    assert_eq!(recent[0].student_name, "Meena Iyer");

    let all = service.all_placements().await?;
    assert_eq!(all.len(), 9);

    Ok(())
}

#[tokio::test]
async fn test_latest_statistics_picks_newest_year() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = service(&store);

    for year in ["2021-22", "2023-24", "2022-23"] {
        service
            .save_statistics(
                None,
                StatisticDraft {
                    year: year.to_string(),
                    placement_rate: 90.0,
                    highest_package: "40 LPA".to_string(),
                    average_package: "8 LPA".to_string(),
                    companies_visited: 120,
                },
            )
            .await?;
    }

    let latest = service.latest_statistics().await?.unwrap();
    assert_eq!(latest.year, "2023-24");

    let all = service.all_statistics().await?;
    let years: Vec<&str> = all.iter().map(|s| s.year.as_str()).collect();
    assert_eq!(years, vec!["2023-24", "2022-23", "2021-22"]);

    Ok(())
}

#[tokio::test]
async fn test_recruiter_edit_keeps_strip_order() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = service(&store);

    let first = service
        .save_recruiter(
            None,
            RecruiterDraft {
                company_name: "Zoho".to_string(),
                logo_url: "#".to_string(),
                order: 2,
            },
        )
        .await?;
    service
        .save_recruiter(
            None,
            RecruiterDraft {
                company_name: "Google".to_string(),
                logo_url: "#".to_string(),
                order: 1,
            },
        )
        .await?;

    // Moving a company re-sorts the strip.
    service
        .save_recruiter(
            Some(&first.id),
            RecruiterDraft {
                company_name: "Zoho".to_string(),
                logo_url: "#".to_string(),
                order: 0,
            },
        )
        .await?;

    let names: Vec<String> = service
        .recruiters_in_order()
        .await?
        .into_iter()
        .map(|r| r.company_name)
        .collect();
    assert_eq!(names, vec!["Zoho".to_string(), "Google".to_string()]);

    Ok(())
}

#[tokio::test]
async fn test_testimonial_admin_listing_is_uncapped() -> anyhow::Result<()> {
    let store = memory_store().await?;
    let service = service(&store);

    for (n, year) in ["2019", "2020", "2021", "2022", "2023"].iter().enumerate() {
        service
            .save_testimonial(
                None,
                TestimonialDraft {
                    student_name: format!("Alum {}", n + 1),
                    company: "TCS".to_string(),
                    quote: "Great placement support.".to_string(),
                    image_url: None,
                    year: year.to_string(),
                },
            )
            .await?;
    }

    // The public page caps at four, newest years first; admin sees all.
    let recent = service.recent_testimonials().await?;
    assert_eq!(recent.len(), 4);
    assert_eq!(recent[0].year, "2023");

    let all = service.all_testimonials().await?;
    assert_eq!(all.len(), 5);
    assert_eq!(all.last().map(|t| t.year.as_str()), Some("2019"));

    // Removing one drops it from both listings.
    service.delete_testimonial(&all[0].id).await?;
    assert_eq!(service.all_testimonials().await?.len(), 4);
    assert_eq!(service.recent_testimonials().await?[0].year, "2022");

    Ok(())
}

#[tokio::test]
async fn test_deletes_touch_only_their_collection() -> anyhow::Result<()> {
    let store = memory_store().await?;
    campanile::seed::run(store.clone()).await?;
    let service = service(&store);

    service.delete_recruiter("seed-recruiter-2").await?;
    service.delete_placement("seed-placement-1").await?;

    assert_eq!(service.recruiters_in_order().await?.len(), 9);
    assert_eq!(service.all_placements().await?.len(), 7);
    assert_eq!(service.all_testimonials().await?.len(), 4);

    Ok(())
}
