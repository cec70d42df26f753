//! Normalization of raw backend résumé content into the canonical editing
//! shape.
//!
//! Records have been written by several generations of the backend, so the
//! stored content is heterogeneous: experience rows may carry `company` or
//! `companyName`, a prebuilt `date` range or separate `startDate`/`endDate`,
//! achievements may use the legacy `title`/`description` names, languages may
//! be plain strings like `"English (Native)"`, and skills may be a flat
//! category list or nested under `technical`.
//!
//! Every path that hydrates an editor from a backend record goes through
//! [`normalize_resume`] — initial load, post-login recovery, and shared-link
//! viewing alike. There is deliberately a single copy of this logic;
//! normalizing an already-canonical record is a no-op.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::language::{LanguageEntry, default_level, dots_for_level};
use crate::model::resume::ResumeData;
use crate::model::sections::{AchievementEntry, EducationEntry, ExperienceEntry, SkillCategory};

/// Résumé content as stored, with every historical field name accepted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResumeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<Vec<RawExperience>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<RawEducation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<RawAchievement>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<LanguageInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<SkillsInput>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExperience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Legacy name for `companyName`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accomplishment: Option<String>,
    /// Legacy names for `accomplishment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accomplishments: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEducation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAchievement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_achievements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub describe: Option<String>,
    /// Legacy names, used only when the canonical pair is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One stored language entry in any of its three historical shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageInput {
    /// `"English (Native)"` style strings.
    Text(String),
    Entry(RawLanguage),
    /// Anything unrecognizable; normalizes to the default entry.
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawLanguage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Legacy name for `level`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dots: Option<u8>,
}

/// Stored skills: either a flat category list or the older nested shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    Flat(Vec<SkillCategoryInput>),
    Nested { technical: Vec<SkillCategoryInput> },
    Other(Value),
}

/// One stored skill category. Elements are decoded independently so a single
/// malformed one degrades to the placeholder without taking the rest of the
/// list with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillCategoryInput {
    Category(RawSkillCategory),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawSkillCategory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Kept as a raw value: legacy rows hold non-array garbage here, which
    /// degrades to an empty item list instead of rejecting the record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,
}

/// Produces the canonical editing shape from stored content. Total: any
/// input yields a complete `ResumeData` with every collection present.
pub fn normalize_resume(raw: &RawResumeData) -> ResumeData {
    ResumeData {
        name: scalar(&raw.name),
        role: scalar(&raw.role),
        phone: scalar(&raw.phone),
        email: scalar(&raw.email),
        linkedin: scalar(&raw.linkedin),
        location: scalar(&raw.location),
        summary: scalar(&raw.summary),
        experience: raw
            .experience
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_experience)
            .collect(),
        education: raw
            .education
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_education)
            .collect(),
        achievements: raw
            .achievements
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_achievement)
            .collect(),
        languages: raw
            .languages
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(normalize_language)
            .collect(),
        skills: normalize_skills(raw.skills.as_ref()),
    }
}

fn scalar(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Joins a split date range as `"{start} - {end}"` only when both halves are
/// present and non-blank.
fn join_range(start: &Option<String>, end: &Option<String>) -> String {
    match (start, end) {
        (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
            format!("{} - {}", start, end)
        }
        _ => String::new(),
    }
}

fn normalize_experience(raw: &RawExperience) -> ExperienceEntry {
    ExperienceEntry {
        title: scalar(&raw.title),
        company_name: raw
            .company_name
            .clone()
            .or_else(|| raw.company.clone())
            .unwrap_or_default(),
        date: raw
            .date
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| join_range(&raw.start_date, &raw.end_date)),
        company_location: scalar(&raw.company_location),
        accomplishment: raw
            .accomplishment
            .clone()
            .or_else(|| raw.description.clone())
            .or_else(|| raw.accomplishments.clone())
            .unwrap_or_default(),
    }
}

fn normalize_education(raw: &RawEducation) -> EducationEntry {
    EducationEntry {
        degree: scalar(&raw.degree),
        institution: scalar(&raw.institution),
        duration: raw
            .duration
            .clone()
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| join_range(&raw.start_date, &raw.end_date)),
        location: scalar(&raw.location),
    }
}

fn normalize_achievement(raw: &RawAchievement) -> AchievementEntry {
    AchievementEntry {
        key_achievements: raw
            .key_achievements
            .clone()
            .or_else(|| raw.title.clone())
            .unwrap_or_default(),
        describe: raw
            .describe
            .clone()
            .or_else(|| raw.description.clone())
            .unwrap_or_default(),
    }
}

fn normalize_language(raw: &LanguageInput) -> LanguageEntry {
    match raw {
        LanguageInput::Text(text) => parse_language_string(text),
        LanguageInput::Entry(entry) => {
            let level = entry
                .level
                .clone()
                .or_else(|| entry.proficiency.clone())
                .unwrap_or_else(default_level);
            let dots = entry
                .dots
                .map(|d| d.clamp(1, 5))
                .unwrap_or_else(|| dots_for_level(&level));
            LanguageEntry {
                name: scalar(&entry.name),
                level,
                dots,
            }
        }
        LanguageInput::Other(_) => LanguageEntry::default(),
    }
}

static LANGUAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*\S)\s*\(([^()]+)\)\s*$").unwrap());

/// Parses `"<name> (<level>)"` via the trailing-parenthesis pattern. Strings
/// that do not match become a default-proficiency entry named after the whole
/// string.
fn parse_language_string(text: &str) -> LanguageEntry {
    match LANGUAGE_PATTERN.captures(text) {
        Some(caps) => {
            let level = caps[2].trim().to_string();
            let dots = dots_for_level(&level);
            LanguageEntry {
                name: caps[1].trim().to_string(),
                level,
                dots,
            }
        }
        None => LanguageEntry {
            name: text.to_string(),
            ..LanguageEntry::default()
        },
    }
}

fn normalize_skills(raw: Option<&SkillsInput>) -> Vec<SkillCategory> {
    let categories = match raw {
        Some(SkillsInput::Flat(list)) => list,
        Some(SkillsInput::Nested { technical }) => technical,
        _ => return vec![SkillCategory::default()],
    };
    categories
        .iter()
        .map(|element| match element {
            SkillCategoryInput::Category(category) => normalize_skill_category(category),
            SkillCategoryInput::Other(_) => SkillCategory::default(),
        })
        .collect()
}

fn normalize_skill_category(raw: &RawSkillCategory) -> SkillCategory {
    let items = match &raw.items {
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    SkillCategory {
        category: raw
            .category
            .clone()
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| SkillCategory::default().category),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawResumeData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn empty_input_yields_complete_editing_shape() {
        let data = normalize_resume(&RawResumeData::default());
        assert_eq!(data.name, "");
        assert_eq!(data.summary, "");
        assert!(data.experience.is_empty());
        assert!(data.education.is_empty());
        assert!(data.achievements.is_empty());
        assert!(data.languages.is_empty());
        assert_eq!(data.skills, vec![SkillCategory::default()]);
    }

    #[test]
    fn legacy_experience_fields_are_mapped() {
        let data = normalize_resume(&raw(json!({
            "experience": [
                {
                    "title": "Engineer",
                    "company": "Acme",
                    "startDate": "2019",
                    "endDate": "2023",
                    "description": "Shipped things"
                },
                {"companyName": "Initech", "startDate": "2017"}
            ]
        })));
        assert_eq!(data.experience[0].company_name, "Acme");
        assert_eq!(data.experience[0].date, "2019 - 2023");
        assert_eq!(data.experience[0].accomplishment, "Shipped things");
        // A lone start date never synthesizes a range.
        assert_eq!(data.experience[1].company_name, "Initech");
        assert_eq!(data.experience[1].date, "");
    }

    #[test]
    fn legacy_accomplishments_field_is_accepted() {
        let data = normalize_resume(&raw(json!({
            "experience": [{"accomplishments": "Old style"}]
        })));
        assert_eq!(data.experience[0].accomplishment, "Old style");
    }

    #[test]
    fn education_duration_prefers_stored_value() {
        let data = normalize_resume(&raw(json!({
            "education": [
                {"degree": "BSc", "duration": "2014 - 2018"},
                {"institution": "MIT", "startDate": "2010", "endDate": "2014"},
                {"institution": "Dropout U"}
            ]
        })));
        assert_eq!(data.education[0].duration, "2014 - 2018");
        assert_eq!(data.education[1].duration, "2010 - 2014");
        assert_eq!(data.education[2].duration, "");
    }

    #[test]
    fn achievements_accept_both_field_generations() {
        let data = normalize_resume(&raw(json!({
            "achievements": [
                {"keyAchievements": "Award", "describe": "Won it"},
                {"title": "Patent", "description": "Filed it"},
                {"keyAchievements": "Both", "title": "Ignored"}
            ]
        })));
        assert_eq!(data.achievements[0].key_achievements, "Award");
        assert_eq!(data.achievements[1].key_achievements, "Patent");
        assert_eq!(data.achievements[1].describe, "Filed it");
        // Canonical names win when both generations are present.
        assert_eq!(data.achievements[2].key_achievements, "Both");
    }

    #[test]
    fn language_strings_parse_trailing_parenthesis() {
        let data = normalize_resume(&raw(json!({
            "languages": ["English (Native)", "Français (Intermediate)", "Esperanto"]
        })));
        assert_eq!(
            data.languages[0],
            LanguageEntry {
                name: "English".into(),
                level: "Native".into(),
                dots: 5
            }
        );
        assert_eq!(data.languages[1].name, "Français");
        assert_eq!(data.languages[1].dots, 3);
        // No parenthesis: whole string becomes the name, default proficiency.
        assert_eq!(
            data.languages[2],
            LanguageEntry {
                name: "Esperanto".into(),
                level: "Beginner".into(),
                dots: 1
            }
        );
    }

    #[test]
    fn language_objects_accept_proficiency_and_derive_dots() {
        let data = normalize_resume(&raw(json!({
            "languages": [
                {"name": "German", "proficiency": "Fluent"},
                {"name": "Spanish", "level": "Intermedio"},
                {"name": "Dutch", "level": "Advanced", "dots": 2},
                42
            ]
        })));
        assert_eq!(data.languages[0].level, "Fluent");
        assert_eq!(data.languages[0].dots, 4);
        assert_eq!(data.languages[1].dots, 3);
        // Explicit dots win over the derived value.
        assert_eq!(data.languages[2].dots, 2);
        // Unrecognizable entries degrade to the default.
        assert_eq!(data.languages[3], LanguageEntry::default());
    }

    #[test]
    fn nested_skills_unwrap_preserving_order() {
        let data = normalize_resume(&raw(json!({
            "skills": {"technical": [
                {"category": "Languages", "items": ["Rust", "Go", "Rust"]},
                {"items": ["Docker"]},
                {"category": "Tools", "items": "not-a-list"}
            ]}
        })));
        assert_eq!(data.skills.len(), 3);
        assert_eq!(data.skills[0].category, "Languages");
        assert_eq!(data.skills[0].items, vec!["Rust", "Go", "Rust"]);
        assert_eq!(data.skills[1].category, "Skills");
        assert_eq!(data.skills[2].items, Vec::<String>::new());
    }

    #[test]
    fn flat_skills_pass_through_and_junk_degrades_to_placeholder() {
        let flat = normalize_resume(&raw(json!({
            "skills": [{"category": "Core", "items": ["SQL"]}]
        })));
        assert_eq!(flat.skills[0].category, "Core");

        let junk = normalize_resume(&raw(json!({"skills": "rust, go"})));
        assert_eq!(junk.skills, vec![SkillCategory::default()]);
    }

    #[test]
    fn malformed_flat_elements_do_not_drop_valid_categories() {
        let data = normalize_resume(&raw(json!({
            "skills": [
                {"category": "Core", "items": ["SQL"]},
                "junk",
                {"category": "Tools", "items": ["Git"]}
            ]
        })));
        assert_eq!(data.skills.len(), 3);
        assert_eq!(data.skills[0].category, "Core");
        assert_eq!(data.skills[0].items, vec!["SQL"]);
        // The bad element alone degrades to the placeholder.
        assert_eq!(data.skills[1], SkillCategory::default());
        assert_eq!(data.skills[2].category, "Tools");
    }

    #[test]
    fn normalization_is_idempotent() {
        let first = normalize_resume(&raw(json!({
            "name": "Ada",
            "experience": [{"company": "Analytical Engines", "startDate": "1837", "endDate": "1843"}],
            "education": [{"institution": "Home", "startDate": "1825", "endDate": "1835"}],
            "achievements": [{"title": "First program", "description": "Note G"}],
            "languages": ["English (Native)", {"name": "French", "proficiency": "Fluent"}],
            "skills": {"technical": [{"category": "Math", "items": ["Calculus"]}]}
        })));

        // Re-ingest the canonical output as if the backend had stored it.
        let stored = serde_json::to_value(&first).unwrap();
        let second = normalize_resume(&serde_json::from_value(stored).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn canonical_round_trip_preserves_skill_order() {
        let data = normalize_resume(&raw(json!({
            "skills": {"technical": [
                {"category": "B", "items": ["two", "one"]},
                {"category": "A", "items": ["three"]}
            ]}
        })));
        let flattened = serde_json::to_value(&data.skills).unwrap();
        assert_eq!(
            flattened,
            json!([
                {"category": "B", "items": ["two", "one"]},
                {"category": "A", "items": ["three"]}
            ])
        );
    }
}
