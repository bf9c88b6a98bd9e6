//! Static suggestion lists and sample study history.

use serde::{Deserialize, Serialize};

use crate::subject::Subject;

/// One-tap quiz topics offered for the selected subject.
pub fn quiz_quick_topics(subject: Subject) -> Vec<String> {
    vec![
        format!("{} Basics", subject.display_name()),
        "Important Formulas".to_string(),
        "Key Concepts".to_string(),
        "Recent Topics".to_string(),
    ]
}

/// A past study session as shown in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub subject: String,
    pub topic: String,
    pub time_label: String,
}

impl StudySession {
    fn new(subject: Subject, topic: &str, time_label: &str) -> Self {
        Self {
            subject: subject.display_name().to_string(),
            topic: topic.to_string(),
            time_label: time_label.to_string(),
        }
    }
}

/// Sample history entries. Study history is not recorded anywhere yet.
pub fn sample_study_history() -> Vec<StudySession> {
    vec![
        StudySession::new(Subject::Math, "Algebra Basics", "2 hours ago"),
        StudySession::new(Subject::Science, "Photosynthesis", "1 day ago"),
        StudySession::new(Subject::History, "African Independence", "3 days ago"),
        StudySession::new(Subject::Geography, "Continents Map", "1 week ago"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_topics_lead_with_subject_basics() {
        let topics = quiz_quick_topics(Subject::Literature);
        assert_eq!(topics[0], "Literature Basics");
        assert_eq!(topics.len(), 4);
    }

    #[test]
    fn test_sample_history() {
        let history = sample_study_history();
        assert_eq!(history.len(), 4);
        assert_eq!(history[0].subject, "Mathematics");
        assert_eq!(history[3].time_label, "1 week ago");
    }
}
