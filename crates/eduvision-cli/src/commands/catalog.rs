use eduvision_core::Subject;
use eduvision_core::catalog::{quiz_quick_topics, sample_study_history};

use super::Context;

pub fn subjects(context: &Context) -> bool {
    for subject in Subject::ALL {
        let marker = if subject == context.subject { "*" } else { " " };
        println!("{marker} {:<12} {}", format!("{subject:?}").to_lowercase(), subject.display_name());
    }
    true
}

pub fn concepts(context: &Context) -> bool {
    println!("Quick Visualizations for {}:", context.subject.display_name());
    for concept in context.subject.quick_concepts() {
        println!("  - {concept}");
    }
    println!();
    println!("Quick Concepts:");
    for topic in quiz_quick_topics(context.subject) {
        println!("  - {topic}");
    }
    true
}

pub fn history() -> bool {
    for session in sample_study_history() {
        println!("{:<12} {:<22} {}", session.subject, session.topic, session.time_label);
    }
    true
}
