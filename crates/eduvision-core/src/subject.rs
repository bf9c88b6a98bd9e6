//! Instructional subjects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EduError;

/// The instructional domain that selects prompt framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Math,
    Science,
    History,
    Literature,
    Geography,
    #[default]
    General,
}

impl Subject {
    /// All subjects, in the order they are offered to the user.
    pub const ALL: [Subject; 6] = [
        Subject::Math,
        Subject::Science,
        Subject::History,
        Subject::Literature,
        Subject::Geography,
        Subject::General,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Subject::Math => "Mathematics",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Literature => "Literature",
            Subject::Geography => "Geography",
            Subject::General => "General",
        }
    }

    /// Opening instruction used when explaining a diagram or question.
    pub fn explain_preamble(self) -> &'static str {
        match self {
            Subject::Math => {
                "Explain this mathematical concept or problem in simple terms suitable for a student. Break it down step by step and provide examples."
            }
            Subject::Science => {
                "Analyze this scientific concept or diagram. Explain it clearly for educational purposes, focusing on key principles and real-world applications."
            }
            Subject::History => {
                "Explain this historical concept, event, or artifact. Provide context, significance, and make it engaging for students."
            }
            Subject::Literature => {
                "Analyze this literary concept or text. Explain themes, context, and provide insights that would help students understand better."
            }
            Subject::Geography => {
                "Explain this geographical concept, map, or diagram. Focus on spatial relationships, processes, and real-world significance."
            }
            Subject::General => "Explain this educational content clearly and simply for students.",
        }
    }

    /// Kind of material a visualization guide is written for.
    pub fn visualization_context(self) -> &'static str {
        match self {
            Subject::Math => "mathematical concepts and diagrams",
            Subject::Science => "scientific processes and biological systems",
            Subject::History => "historical timelines and events",
            Subject::Geography => "geographical maps and spatial relationships",
            Subject::Literature => "literary structures and character relationships",
            Subject::General => "educational concepts and learning frameworks",
        }
    }

    /// Suggested visualization topics for this subject.
    pub fn quick_concepts(self) -> [&'static str; 4] {
        match self {
            Subject::Math => [
                "Algebraic equation solving steps",
                "Geometric shapes and properties",
                "Probability tree diagram",
                "Calculus derivative concept",
            ],
            Subject::Science => [
                "Photosynthesis in African plants",
                "Human circulatory system",
                "Solar system planets alignment",
                "Chemical reaction process",
            ],
            Subject::History => [
                "African independence movements timeline",
                "Ancient Egyptian pyramid construction",
                "Trans-Saharan trade routes",
                "Colonial Africa map changes",
            ],
            Subject::Geography => [
                "African climate zones map",
                "River Nile ecosystem",
                "Sahara desert expansion",
                "African tectonic plates",
            ],
            Subject::Literature => [
                "Story character relationships",
                "Plot structure diagram",
                "Thematic symbolism",
                "African folktale elements",
            ],
            Subject::General => [
                "Learning process flowchart",
                "Study technique visualization",
                "Knowledge connection map",
                "Problem-solving steps",
            ],
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Subject {
    type Err = EduError;

    /// Accepts the variant name or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Subject::ALL
            .into_iter()
            .find(|subject| {
                wanted == subject.display_name().to_lowercase()
                    || wanted == format!("{subject:?}").to_lowercase()
            })
            .ok_or_else(|| EduError::config(format!("Unknown subject: '{}'", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_subject_is_general() {
        assert_eq!(Subject::default(), Subject::General);
    }

    #[test]
    fn test_parse_accepts_variant_and_display_names() {
        assert_eq!("math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!("Mathematics".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!(" GEOGRAPHY ".parse::<Subject>().unwrap(), Subject::Geography);
    }

    #[test]
    fn test_parse_rejects_unknown_subject() {
        let err = "astrology".parse::<Subject>().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_every_subject_has_distinct_preamble() {
        let mut preambles: Vec<_> = Subject::ALL.iter().map(|s| s.explain_preamble()).collect();
        preambles.sort();
        preambles.dedup();
        assert_eq!(preambles.len(), Subject::ALL.len());
    }
}
