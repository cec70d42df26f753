use serde::{Deserialize, Serialize};

/// A single work-history entry. Dates are opaque display strings; the
/// backend never parses or validates them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company_name: String,
    /// Free-text range such as `"2019 - 2023"`.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub company_location: String,
    /// Free text; bullets are separated by newlines.
    #[serde(default)]
    pub accomplishment: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementEntry {
    /// Heading shown above the body text.
    #[serde(default)]
    pub key_achievements: String,
    #[serde(default)]
    pub describe: String,
}

/// An ordered group of skill labels under a display heading. Duplicates
/// are allowed and item order is meaningful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

fn default_category() -> String {
    "Skills".to_string()
}

impl Default for SkillCategory {
    fn default() -> Self {
        Self {
            category: default_category(),
            items: Vec::new(),
        }
    }
}
