use anyhow::{anyhow, Result};

use aiyo_infrastructure::HttpCourseCatalog;
use aiyo_interaction::{ChatAssistant, LessonContext};

/// Sends a question to the lesson chat assistant and prints the reply.
///
/// With `--course-id` and `--session`, the lesson context is looked up
/// from the catalog by the session's 1-based ordinal; otherwise it is
/// taken from `--session-title`/`--video-src` as given.
pub async fn run(
    message: &str,
    session_title: Option<String>,
    video_src: Option<String>,
    course_id: Option<String>,
    session: Option<usize>,
) -> Result<()> {
    let lesson = match (course_id, session) {
        (Some(course_id), Some(ordinal)) => {
            let catalog = HttpCourseCatalog::new(super::api_base_url());
            let course = catalog.fetch_course(&course_id).await?;
            let found = course
                .session_by_ordinal(ordinal)
                .ok_or_else(|| anyhow!("course {} has no session {}", course.title, ordinal))?;
            LessonContext {
                session_title: Some(found.session_title.clone()),
                video_src: found.video_src.clone(),
            }
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(anyhow!("--course-id and --session must be given together"));
        }
        (None, None) => LessonContext {
            session_title,
            video_src,
        },
    };

    let assistant = ChatAssistant::try_from_env()?;
    let reply = assistant.respond(message, &lesson).await?;
    println!("{reply}");
    Ok(())
}
