use std::sync::Arc;

use anyhow::Result;

use aiyo_application::VoiceNavigationService;
use aiyo_infrastructure::HttpCourseCatalog;
use aiyo_interaction::GeminiIntentClassifier;

/// Resolves a captured voice command and prints the decision as JSON.
pub async fn run(command: &str) -> Result<()> {
    let catalog = Arc::new(HttpCourseCatalog::new(super::api_base_url()));
    let classifier = Arc::new(GeminiIntentClassifier::try_from_env()?);

    let service = VoiceNavigationService::new(catalog, classifier);
    let decision = service.resolve(command).await;

    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}
