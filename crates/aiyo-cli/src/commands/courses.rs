use anyhow::Result;

use aiyo_core::course::CourseCatalog;
use aiyo_infrastructure::HttpCourseCatalog;

/// Lists the course catalog, newest first.
pub async fn run() -> Result<()> {
    let catalog = HttpCourseCatalog::new(super::api_base_url());
    let courses = catalog.fetch_catalog().await?;

    if courses.is_empty() {
        println!("No courses available.");
        return Ok(());
    }

    for course in courses {
        println!(
            "{} [{:?}] - {} session(s) ({})",
            course.title,
            course.difficulty,
            course.sessions.len(),
            course.id
        );
    }

    Ok(())
}
