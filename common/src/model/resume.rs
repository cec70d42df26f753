use serde::{Deserialize, Serialize};

use crate::model::language::LanguageEntry;
use crate::model::sections::{AchievementEntry, EducationEntry, ExperienceEntry, SkillCategory};
use crate::normalize::{self, RawResumeData};

/// A persisted résumé as the backend stores and returns it.
///
/// `title` is the display name of the document and is independent of the
/// person's `name` inside the content. Content fields are kept in their raw
/// stored shape ([`RawResumeData`]) because older records use legacy field
/// names; editors call [`ResumeRecord::editing_data`] to obtain the canonical
/// shape before touching anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub template: String,
    #[serde(default)]
    pub theme: String,
    /// Unix milliseconds of the last successful write.
    #[serde(default)]
    pub last_modified: i64,
    #[serde(flatten)]
    pub data: RawResumeData,
}

impl ResumeRecord {
    /// Normalizes the stored content into the canonical editing shape.
    pub fn editing_data(&self) -> ResumeData {
        normalize::normalize_resume(&self.data)
    }
}

/// Canonical in-memory editing shape. Every scalar is present (possibly
/// empty) and every collection is an ordered sequence, so editors can always
/// iterate without null checks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub achievements: Vec<AchievementEntry>,
    #[serde(default)]
    pub languages: Vec<LanguageEntry>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}
