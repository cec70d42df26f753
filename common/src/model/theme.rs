//! Template and theme identifiers.
//!
//! The backend persists one canonical theme name per résumé. Each template's
//! editor is free to present its own palette wording (the "aurora" template
//! sells `green` as `emerald`), so every outbound save translates the
//! template-local alias to the canonical name, and every inbound load
//! translates back. Both directions are total: unknown values fall back to
//! defined defaults rather than failing.

pub const THEMES: [&str; 6] = ["blue", "red", "green", "purple", "orange", "teal"];

pub const TEMPLATES: [&str; 2] = ["classic", "aurora"];

pub const DEFAULT_THEME: &str = "blue";
pub const DEFAULT_TEMPLATE: &str = "classic";

/// Alias table for the aurora template, `(alias, canonical)` pairs.
const AURORA_ALIASES: [(&str, &str); 6] = [
    ("navy", "blue"),
    ("crimson", "red"),
    ("emerald", "green"),
    ("violet", "purple"),
    ("amber", "orange"),
    ("lagoon", "teal"),
];

/// Normalizes a template identifier to a backend canonical name.
pub fn canonical_template(template: &str) -> &'static str {
    TEMPLATES
        .iter()
        .find(|t| **t == template)
        .copied()
        .unwrap_or(DEFAULT_TEMPLATE)
}

/// Translates a theme value seen in a given template's UI to the backend
/// canonical name. Accepts canonical names on any template, so records that
/// were already canonical pass through unchanged.
pub fn canonical_theme(template: &str, theme: &str) -> &'static str {
    if let Some(t) = THEMES.iter().find(|t| **t == theme) {
        return t;
    }
    if template == "aurora" {
        if let Some((_, canonical)) = AURORA_ALIASES.iter().find(|(alias, _)| *alias == theme) {
            return canonical;
        }
    }
    DEFAULT_THEME
}

/// Translates a backend canonical theme to the wording a template's UI uses.
/// Unknown backend values map to the template's default.
pub fn editor_theme(template: &str, canonical: &str) -> &'static str {
    let canonical = canonical_theme(template, canonical);
    if template == "aurora" {
        if let Some((alias, _)) = AURORA_ALIASES.iter().find(|(_, c)| *c == canonical) {
            return alias;
        }
    }
    canonical_theme(template, canonical)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_pass_through_on_every_template() {
        for template in TEMPLATES {
            for theme in THEMES {
                assert_eq!(canonical_theme(template, theme), theme);
            }
        }
    }

    #[test]
    fn aurora_aliases_round_trip() {
        for theme in THEMES {
            let alias = editor_theme("aurora", theme);
            assert_ne!(alias, theme, "aurora renames every canonical theme");
            assert_eq!(canonical_theme("aurora", alias), theme);
        }
    }

    #[test]
    fn unknown_values_fall_back_to_defaults() {
        assert_eq!(canonical_theme("classic", "chartreuse"), DEFAULT_THEME);
        assert_eq!(editor_theme("aurora", "chartreuse"), "navy");
        assert_eq!(canonical_template("letterhead"), DEFAULT_TEMPLATE);
    }
}
