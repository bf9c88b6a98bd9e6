//! Request kinds and the immutable prompt request value.

use serde::{Deserialize, Serialize};

use crate::prepared_image::PreparedImage;
use crate::prompt;
use crate::subject::Subject;

/// What the student asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    ExplainDiagram,
    GenerateQuiz,
    VisualizeConcept,
}

/// Everything needed to issue one request.
///
/// Built by the presentation layer and consumed once by the coordinator.
#[derive(Debug, Clone)]
pub struct PromptRequest {
    pub kind: RequestKind,
    pub image: Option<PreparedImage>,
    pub user_text: String,
    pub subject: Subject,
}

impl PromptRequest {
    pub fn new(kind: RequestKind, subject: Subject, user_text: impl Into<String>) -> Self {
        Self {
            kind,
            image: None,
            user_text: user_text.into(),
            subject,
        }
    }

    pub fn with_image(mut self, image: PreparedImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Renders the final prompt text for this request.
    pub fn build_prompt(&self) -> String {
        match self.kind {
            RequestKind::ExplainDiagram => {
                prompt::build_explain_prompt(self.subject, &self.user_text, self.image.is_some())
            }
            RequestKind::GenerateQuiz => prompt::build_quiz_prompt(self.subject, &self.user_text),
            RequestKind::VisualizeConcept => {
                prompt::build_visualize_prompt(self.subject, &self.user_text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_dispatches_on_kind() {
        let quiz = PromptRequest::new(RequestKind::GenerateQuiz, Subject::Math, "Fractions");
        assert!(quiz.build_prompt().starts_with("Based on the concept: \"Fractions\""));

        let explain = PromptRequest::new(RequestKind::ExplainDiagram, Subject::Math, "");
        assert!(explain.build_prompt().starts_with(Subject::Math.explain_preamble()));

        let visualize =
            PromptRequest::new(RequestKind::VisualizeConcept, Subject::History, "Mali Empire");
        assert!(visualize.build_prompt().contains("\"Mali Empire\""));
    }
}
