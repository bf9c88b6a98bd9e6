//! Commands that send a request to the model and render the outcome.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use eduvision_application::{ImagePreprocessor, ImageSource, RequestCoordinator, Submission};
use eduvision_core::{RequestKind, RequestOutcome};
use eduvision_interaction::GeminiApiClient;

use super::Context;

pub async fn explain(context: &Context, image: Option<PathBuf>, question: String) -> Result<bool> {
    let coordinator = build_coordinator(context)?;

    let image = match image {
        Some(path) => match coordinator.load_image(ImageSource::Path(path)).await {
            Ok(image) => Some(image),
            Err(_) => return Ok(render(&coordinator.outcome())),
        },
        None => None,
    };

    run(&coordinator, coordinator.submit(RequestKind::ExplainDiagram, image, question)).await
}

pub async fn quiz(context: &Context, concept: String) -> Result<bool> {
    let coordinator = build_coordinator(context)?;
    run(&coordinator, coordinator.generate_quiz(concept)).await
}

pub async fn visualize(context: &Context, concept: String) -> Result<bool> {
    let coordinator = build_coordinator(context)?;
    run(&coordinator, coordinator.visualize_concept(concept)).await
}

fn build_coordinator(context: &Context) -> Result<RequestCoordinator> {
    let client = GeminiApiClient::try_from_paths(&context.paths)?;
    Ok(RequestCoordinator::new(Arc::new(client))
        .with_preprocessor(ImagePreprocessor::from_config(&context.config.image))
        .with_subject(context.subject))
}

/// Follows the outcome until the request resolves, then prints it.
async fn run(coordinator: &RequestCoordinator, submission: Submission) -> Result<bool> {
    let mut receiver = coordinator.subscribe();

    if !submission.is_accepted() {
        return Ok(render(&receiver.borrow_and_update()));
    }

    loop {
        let outcome = receiver.borrow_and_update().clone();
        match outcome {
            RequestOutcome::InFlight => eprintln!("Thinking..."),
            terminal if terminal.is_terminal() => {
                submission.wait().await;
                return Ok(render(&terminal));
            }
            _ => {}
        }
        receiver
            .changed()
            .await
            .map_err(|_| anyhow!("Request coordinator closed before the request resolved"))?;
    }
}

fn render(outcome: &RequestOutcome) -> bool {
    match outcome {
        RequestOutcome::Succeeded(text) => {
            println!("{text}");
            true
        }
        RequestOutcome::Failed(message) => {
            eprintln!("{message}");
            false
        }
        RequestOutcome::Idle | RequestOutcome::InFlight => false,
    }
}
