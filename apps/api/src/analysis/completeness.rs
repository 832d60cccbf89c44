use crate::analysis::signals::normalize_text;

/// A canonical resume section and the markers that count as its presence.
struct SectionRule {
    markers: &'static [&'static str],
    recommendation: &'static str,
}

/// Checked in this order; output order follows it.
const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        markers: &["education", "degree"],
        recommendation: "Add an Education section (degrees, institutions, graduation years).",
    },
    SectionRule {
        markers: &["project", "projects"],
        recommendation: "Add a Projects section with 1–3 bullet points each (tech used + impact).",
    },
    SectionRule {
        markers: &["experience", "work"],
        recommendation:
            "Add an Experience or Work History section with company, role, dates, and impact.",
    },
];

/// One recommendation per canonical section with none of its markers in the text.
/// Markers are case-insensitive substrings.
pub fn missing_sections(text: &str) -> Vec<String> {
    let normalized = normalize_text(text);
    SECTION_RULES
        .iter()
        .filter(|rule| !rule.markers.iter().any(|m| normalized.contains(m)))
        .map(|rule| rule.recommendation.to_string())
        .collect()
}
