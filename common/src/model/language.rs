//! Language entries and the bilingual proficiency taxonomy.
//!
//! Each entry carries both a free-text `level` label and an integer `dots`
//! score (1–5) shown as a discrete control in the editors. The two fields
//! must stay consistent: whenever one side changes, the other is re-derived
//! through the single taxonomy defined here. The taxonomy understands both
//! English and Spanish wording, and each entry keeps whichever vocabulary it
//! already uses — a résumé can mix English and Spanish entries freely.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_dots")]
    pub dots: u8,
}

pub fn default_level() -> String {
    "Beginner".to_string()
}

pub fn default_dots() -> u8 {
    1
}

impl Default for LanguageEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            level: default_level(),
            dots: default_dots(),
        }
    }
}

/// Wording used when deriving a label from a dots score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    English,
    Spanish,
}

const SPANISH_LEVELS: [&str; 7] = [
    "nativo",
    "avanzado",
    "fluido",
    "intermedio",
    "básico",
    "basico",
    "principiante",
];

/// Maps a proficiency label to its 1–5 score. Case-insensitive and total:
/// unrecognized labels score 1.
pub fn dots_for_level(level: &str) -> u8 {
    match level.trim().to_lowercase().as_str() {
        "native" | "nativo" => 5,
        "advanced" | "fluent" | "avanzado" | "fluido" => 4,
        "intermediate" | "conversational" | "competent" | "intermedio" => 3,
        "elementary" | "básico" | "basico" => 2,
        "beginner" | "principiante" => 1,
        _ => 1,
    }
}

/// Maps a dots score back to a label in the given vocabulary. Scores outside
/// 1–5 are clamped.
pub fn level_for_dots(dots: u8, vocabulary: Vocabulary) -> &'static str {
    let english = ["Beginner", "Elementary", "Intermediate", "Advanced", "Native"];
    let spanish = ["Principiante", "Básico", "Intermedio", "Avanzado", "Nativo"];
    let idx = dots.clamp(1, 5) as usize - 1;
    match vocabulary {
        Vocabulary::English => english[idx],
        Vocabulary::Spanish => spanish[idx],
    }
}

/// Guesses the vocabulary of an entry from its existing level label. The
/// check is per entry, never global, so entries written in different
/// languages keep their own wording when edited.
pub fn detect_vocabulary(entry: &LanguageEntry) -> Vocabulary {
    let level = entry.level.trim().to_lowercase();
    if SPANISH_LEVELS.contains(&level.as_str()) {
        Vocabulary::Spanish
    } else {
        Vocabulary::English
    }
}

impl LanguageEntry {
    /// Applies a user-driven dots edit, re-deriving the label in the entry's
    /// own vocabulary so `level` and `dots` never disagree.
    pub fn set_dots(&mut self, dots: u8) {
        let vocabulary = detect_vocabulary(self);
        self.dots = dots.clamp(1, 5);
        self.level = level_for_dots(self.dots, vocabulary).to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_taxonomy_label_maps_to_one_score() {
        let table = [
            ("Native", 5),
            ("Nativo", 5),
            ("Advanced", 4),
            ("Fluent", 4),
            ("Avanzado", 4),
            ("Fluido", 4),
            ("Intermediate", 3),
            ("Conversational", 3),
            ("Competent", 3),
            ("Intermedio", 3),
            ("Elementary", 2),
            ("Básico", 2),
            ("Beginner", 1),
            ("Principiante", 1),
        ];
        for (label, dots) in table {
            assert_eq!(dots_for_level(label), dots, "label {label}");
            assert_eq!(dots_for_level(&label.to_uppercase()), dots);
            assert_eq!(dots_for_level(&label.to_lowercase()), dots);
        }
    }

    #[test]
    fn unrecognized_labels_score_one() {
        assert_eq!(dots_for_level("Klingon"), 1);
        assert_eq!(dots_for_level(""), 1);
        assert_eq!(dots_for_level("  mother tongue "), 1);
    }

    #[test]
    fn dots_edit_keeps_label_consistent() {
        let mut entry = LanguageEntry {
            name: "French".into(),
            level: "Intermediate".into(),
            dots: 3,
        };
        entry.set_dots(5);
        assert_eq!(entry.level, "Native");
        assert_eq!(entry.dots, 5);
    }

    #[test]
    fn spanish_entries_keep_spanish_wording() {
        let mut entry = LanguageEntry {
            name: "Inglés".into(),
            level: "Intermedio".into(),
            dots: 3,
        };
        entry.set_dots(4);
        assert_eq!(entry.level, "Avanzado");
        entry.set_dots(2);
        assert_eq!(entry.level, "Básico");
    }

    #[test]
    fn out_of_range_dots_are_clamped() {
        let mut entry = LanguageEntry::default();
        entry.set_dots(9);
        assert_eq!(entry.dots, 5);
        entry.set_dots(0);
        assert_eq!(entry.dots, 1);
    }
}
