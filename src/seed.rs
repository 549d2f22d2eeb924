//! One-shot population of the store with the bundled department profiles
//! and the illustrative sample content for every other collection.
//!
//! Every record id here is deterministic and every write is a keyed upsert,
//! so running the seed twice converges on the same store instead of
//! appending a second copy of everything.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::data::bundled_departments;
use crate::domain::{
    AcademicResource, DepartmentProfile, NewsCategory, NewsItem, PlacementRecord,
    PlacementStatistic, Recruiter, ResourceCategory, Testimonial,
};
use crate::error::Result;
use crate::store::{Collection, DocumentStore, Record};

/// How many records each collection received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub departments: usize,
    pub news: usize,
    pub academics: usize,
    pub placement_stats: usize,
    pub recruiters: usize,
    pub placements: usize,
    pub testimonials: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.departments
            + self.news
            + self.academics
            + self.placement_stats
            + self.recruiters
            + self.placements
            + self.testimonials
    }
}

/// Writes the whole dataset and reports per-collection counts.
pub async fn run(store: Arc<dyn DocumentStore>) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    report.departments = seed_departments(&store).await?;
    tracing::info!(count = report.departments, "seeded departments");

    report.news = write_all(&store, "news", sample_news()).await?;
    tracing::info!(count = report.news, "seeded news");

    report.academics = write_all(&store, "academic", sample_academics()).await?;
    tracing::info!(count = report.academics, "seeded academic resources");

    report.placement_stats = write_all(&store, "stats", sample_statistics()).await?;
    report.recruiters = write_all(&store, "recruiter", sample_recruiters()).await?;
    report.placements = write_all(&store, "placement", sample_placements()).await?;
    report.testimonials = write_all(&store, "testimonial", sample_testimonials()).await?;
    tracing::info!(
        stats = report.placement_stats,
        recruiters = report.recruiters,
        placements = report.placements,
        testimonials = report.testimonials,
        "seeded placement collections"
    );

    Ok(report)
}

/// Department profiles keep their slug as the id, matching what the public
/// fallback and the admin editor look up.
async fn seed_departments(store: &Arc<dyn DocumentStore>) -> Result<usize> {
    let collection = Collection::<DepartmentProfile>::new(Arc::clone(store));
    let profiles = bundled_departments();
    let count = profiles.len();

    for profile in profiles {
        let slug = profile.id.clone();
        collection.upsert(Some(&slug), profile).await?;
    }

    Ok(count)
}

/// Upserts each record under `seed-<prefix>-<n>`, in order.
async fn write_all<T: Record>(
    store: &Arc<dyn DocumentStore>,
    prefix: &str,
    records: Vec<T>,
) -> Result<usize> {
    let collection = Collection::<T>::new(Arc::clone(store));
    let count = records.len();

    for (index, record) in records.into_iter().enumerate() {
        let id = format!("seed-{}-{}", prefix, index + 1);
        collection.upsert(Some(&id), record).await?;
    }

    tracing::debug!(collection = collection.name(), count, "collection written");
    Ok(count)
}

fn sample_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

fn sample_news() -> Vec<NewsItem> {
    let items = [
        (
            "SVUCE Celebrates 65 Years of Excellence",
            "Sri Venkateswara University College of Engineering marks its 65th anniversary \
             with a grand celebration. The event was attended by distinguished alumni, \
             faculty, and students.",
            "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=800",
            NewsCategory::General,
            sample_date(2024, 1, 15),
        ),
        (
            "CSE Department Hosts National Level Hackathon",
            "The Department of Computer Science & Engineering successfully organized a \
             48-hour hackathon with participation from over 200 students across the country.",
            "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800",
            NewsCategory::Event,
            sample_date(2024, 1, 10),
        ),
        (
            "Students Win First Prize at National Innovation Contest",
            "A team of final-year students from the ECE department won the first prize at \
             the National Innovation Contest held in Delhi.",
            "https://images.unsplash.com/photo-1531482615713-2afd69097998?w=800",
            NewsCategory::Achievement,
            sample_date(2024, 1, 5),
        ),
        (
            "New Research Lab Inaugurated",
            "A state-of-the-art research laboratory for advanced materials was inaugurated \
             by the Vice-Chancellor.",
            "https://images.unsplash.com/photo-1532094349884-543bc11b234d?w=800",
            NewsCategory::Academic,
            sample_date(2023, 12, 20),
        ),
    ];

    items
        .into_iter()
        .map(|(title, content, image_url, category, date)| NewsItem {
            id: String::new(),
            title: title.to_string(),
            content: content.to_string(),
            image_url: Some(image_url.to_string()),
            category,
            date,
            published: true,
        })
        .collect()
}

fn sample_academics() -> Vec<AcademicResource> {
    let resources = [
        (
            ResourceCategory::Courses,
            "B.Tech Programs Overview",
            "Complete list of undergraduate programs offered at SVUCE",
            None,
            Some("All"),
        ),
        (
            ResourceCategory::Calendar,
            "Academic Calendar 2023-24",
            "Academic calendar for the current academic year",
            None,
            Some("All"),
        ),
        (
            ResourceCategory::Regulations,
            "R20 Regulations",
            "Academic regulations for students admitted in 2020 and onwards",
            None,
            Some("All"),
        ),
        (
            ResourceCategory::Syllabus,
            "CSE B.Tech Syllabus",
            "Complete syllabus for Computer Science & Engineering",
            None,
            Some("CSE"),
        ),
        (
            ResourceCategory::Timetables,
            "Semester 1 Timetable",
            "Class schedule for first semester",
            Some("Semester 1"),
            Some("All"),
        ),
    ];

    resources
        .into_iter()
        .map(
            |(category, title, description, semester, department)| AcademicResource {
                id: String::new(),
                category,
                title: title.to_string(),
                description: description.to_string(),
                file_url: "#".to_string(),
                semester: semester.map(str::to_string),
                department: department.map(str::to_string),
            },
        )
        .collect()
}

fn sample_statistics() -> Vec<PlacementStatistic> {
    vec![PlacementStatistic {
        id: String::new(),
        year: "2023-24".to_string(),
        placement_rate: 95.0,
        highest_package: "45 LPA".to_string(),
        average_package: "8.5 LPA".to_string(),
        companies_visited: 150,
    }]
}

fn sample_recruiters() -> Vec<Recruiter> {
    [
        "Google",
        "Microsoft",
        "Amazon",
        "TCS",
        "Infosys",
        "Wipro",
        "Cognizant",
        "Accenture",
        "IBM",
        "Oracle",
    ]
    .into_iter()
    .enumerate()
    .map(|(index, company_name)| Recruiter {
        id: String::new(),
        company_name: company_name.to_string(),
        logo_url: "#".to_string(),
        order: index as i64 + 1,
    })
    .collect()
}

fn sample_placements() -> Vec<PlacementRecord> {
    let records = [
        ("Rajesh Kumar", "Google", "42 LPA", "CSE"),
        ("Priya Sharma", "Microsoft", "38 LPA", "CSE"),
        ("Arun Reddy", "Amazon", "35 LPA", "ECE"),
        ("Sneha Patel", "TCS", "7.5 LPA", "EEE"),
        ("Karthik Rao", "Infosys", "8 LPA", "Mechanical"),
        ("Divya Menon", "Wipro", "7 LPA", "Civil"),
        ("Rahul Verma", "Cognizant", "6.5 LPA", "Chemical"),
        ("Anjali Singh", "Accenture", "9 LPA", "CSE"),
    ];

    records
        .into_iter()
        .map(|(student_name, company, package, department)| PlacementRecord {
            id: String::new(),
            student_name: student_name.to_string(),
            company: company.to_string(),
            package: package.to_string(),
            department: department.to_string(),
            year: "2024".to_string(),
            image_url: Some("#".to_string()),
        })
        .collect()
}

fn sample_testimonials() -> Vec<Testimonial> {
    let entries = [
        (
            "Priya Sharma",
            "Microsoft",
            "SVUCE provided excellent training and placement support. The faculty guided us \
             throughout the placement process.",
        ),
        (
            "Rajesh Kumar",
            "Google",
            "The technical skills and problem-solving abilities I developed at SVUCE helped \
             me crack my dream job at Google.",
        ),
        (
            "Arun Reddy",
            "Amazon",
            "The placement cell at SVUCE is very supportive. They conducted mock interviews \
             and aptitude tests that were very helpful.",
        ),
        (
            "Sneha Patel",
            "TCS",
            "I am grateful to SVUCE for providing me with the right platform and \
             opportunities to launch my career.",
        ),
    ];

    entries
        .into_iter()
        .map(|(student_name, company, quote)| Testimonial {
            id: String::new(),
            student_name: student_name.to_string(),
            company: company.to_string(),
            quote: quote.to_string(),
            image_url: Some("#".to_string()),
            year: "2023".to_string(),
        })
        .collect()
}
