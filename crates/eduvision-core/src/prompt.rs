//! Prompt builders.
//!
//! Each builder is a pure function of its inputs. The quiz and visualization
//! templates embed a response format that the model is asked to follow, so
//! their wording is fixed and must not drift.

use crate::subject::Subject;

const DEFAULT_EXPLAIN_INSTRUCTION: &str = "Please explain this educational diagram.";

const EXPLAIN_CLOSING: &str = "Provide the explanation in clear, simple language suitable for African students.
If it's a complex concept, break it down into steps.
Use examples relevant to African context when possible.";

/// Builds the prompt for explaining a diagram or answering a question.
///
/// `has_image` does not change the wording; the image travels alongside the
/// text as a separate part.
pub fn build_explain_prompt(subject: Subject, user_text: &str, has_image: bool) -> String {
    tracing::debug!(
        subject = %subject,
        has_image,
        has_question = !user_text.trim().is_empty(),
        "Building explain prompt"
    );

    let instruction = if user_text.trim().is_empty() {
        DEFAULT_EXPLAIN_INSTRUCTION.to_string()
    } else {
        format!("Specific question: {user_text}")
    };

    format!(
        "{preamble}\n\n{instruction}\n\n{EXPLAIN_CLOSING}",
        preamble = subject.explain_preamble()
    )
}

/// Builds the multiple-choice quiz prompt.
///
/// A blank concept falls back to "<subject> Basics".
pub fn build_quiz_prompt(subject: Subject, concept: &str) -> String {
    let concept = non_blank_or(concept, || format!("{} Basics", subject.display_name()));

    format!(
        r#"Based on the concept: "{concept}"

Generate a short quiz with 3 multiple-choice questions to test understanding.
Format each question as:
Q1: [Question text]
A) Option A
B) Option B
C) Option C
D) Option D
Correct: [Correct letter]

Make the questions educational and relevant to the concept."#
    )
}

/// Builds the visualization guide prompt.
///
/// A blank concept falls back to the subject's first quick concept.
pub fn build_visualize_prompt(subject: Subject, concept: &str) -> String {
    let concept = non_blank_or(concept, || subject.quick_concepts()[0].to_string());
    let context = subject.visualization_context();

    format!(
        r#"Create a detailed, vivid visual description for the educational concept: "{concept}"

Context: This is for {context}, specifically for African students.

Please provide a comprehensive visual description that includes:

1. **Overall Layout**: How should the visualization be arranged?
2. **Colors**: Specific color schemes and their meanings
3. **Labels**: What should be labeled and how?
4. **Elements**: Key components and their relationships
5. **Flow**: Direction or sequence if it's a process
6. **African Context**: How to make it relevant to African students

Format your response as:

🎨 VISUALIZATION GUIDE: [Concept Name]

📐 LAYOUT: [Describe the arrangement]

🎨 COLORS: [Color scheme with meanings]

🏷️ LABELS: [What to label and how]

🔗 KEY ELEMENTS: [Main components and connections]

➡️ FLOW/SEQUENCE: [Step-by-step if applicable]

🌍 AFRICAN CONTEXT: [How to make it locally relevant]

💡 STUDY TIPS: [How students can use this visualization]

Make it detailed enough that a student could draw this accurately, but keep the language simple and educational."#
    )
}

fn non_blank_or(text: &str, fallback: impl FnOnce() -> String) -> String {
    if text.trim().is_empty() {
        fallback()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_without_question_uses_default_instruction() {
        for subject in Subject::ALL {
            let prompt = build_explain_prompt(subject, "", true);
            assert!(prompt.contains(subject.explain_preamble()));
            assert!(prompt.contains("Please explain this educational diagram."));
            assert!(!prompt.contains("Specific question:"));
        }
    }

    #[test]
    fn test_explain_whitespace_question_counts_as_blank() {
        let prompt = build_explain_prompt(Subject::Science, "   \t", false);
        assert!(prompt.contains("Please explain this educational diagram."));
    }

    #[test]
    fn test_explain_with_question() {
        for subject in Subject::ALL {
            let prompt = build_explain_prompt(subject, "Why is the sky blue?", false);
            assert!(prompt.contains("Specific question: Why is the sky blue?"));
            assert!(!prompt.contains("Please explain this educational diagram."));
        }
    }

    #[test]
    fn test_explain_exact_layout() {
        let prompt = build_explain_prompt(Subject::General, "", false);
        assert_eq!(
            prompt,
            "Explain this educational content clearly and simply for students.\n\
             \n\
             Please explain this educational diagram.\n\
             \n\
             Provide the explanation in clear, simple language suitable for African students.\n\
             If it's a complex concept, break it down into steps.\n\
             Use examples relevant to African context when possible."
        );
    }

    #[test]
    fn test_quiz_embeds_format_contract() {
        let prompt = build_quiz_prompt(Subject::Math, "Pythagoras");
        assert!(prompt.starts_with("Based on the concept: \"Pythagoras\"\n\n"));
        assert!(prompt.contains(
            "Format each question as:\nQ1: [Question text]\nA) Option A\nB) Option B\nC) Option C\nD) Option D\nCorrect: [Correct letter]\n"
        ));
        assert!(prompt.ends_with("Make the questions educational and relevant to the concept."));
    }

    #[test]
    fn test_quiz_blank_concept_defaults_to_subject_basics() {
        let prompt = build_quiz_prompt(Subject::Geography, "  ");
        assert!(prompt.starts_with("Based on the concept: \"Geography Basics\""));
    }

    #[test]
    fn test_visualize_uses_subject_context_and_sections() {
        let prompt = build_visualize_prompt(Subject::History, "Great Zimbabwe");
        assert!(prompt.starts_with(
            "Create a detailed, vivid visual description for the educational concept: \"Great Zimbabwe\""
        ));
        assert!(prompt.contains(
            "Context: This is for historical timelines and events, specifically for African students."
        ));
        for heading in [
            "🎨 VISUALIZATION GUIDE: [Concept Name]",
            "📐 LAYOUT:",
            "🎨 COLORS:",
            "🏷\u{fe0f} LABELS:",
            "🔗 KEY ELEMENTS:",
            "➡\u{fe0f} FLOW/SEQUENCE:",
            "🌍 AFRICAN CONTEXT:",
            "💡 STUDY TIPS:",
        ] {
            assert!(prompt.contains(heading), "missing heading {heading}");
        }
    }

    #[test]
    fn test_visualize_blank_concept_defaults_to_quick_concept() {
        let prompt = build_visualize_prompt(Subject::Math, "");
        assert!(prompt.contains("\"Algebraic equation solving steps\""));
    }
}
