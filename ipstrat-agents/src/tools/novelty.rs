/// Keyword pre-screen of an invention summary against known crowded fields.
///
/// It does not search any patent database; the note it produces is handed to
/// the patent analyst as a starting point.
pub struct PatentNoveltyCheck;

/// Technology areas with dense prior art, matched case-insensitively
const CROWDED_FIELDS: &[(&str, &str)] = &[("blockchain", "blockchain-related technologies")];

impl PatentNoveltyCheck {
    pub const NAME: &'static str = "Patent Novelty Checker";
    pub const DESCRIPTION: &'static str =
        "Checks the novelty of an invention summary against known patent activity (keyword pre-screen).";

    pub fn run(invention_summary: &str) -> String {
        let summary = invention_summary.to_lowercase();
        let finding = CROWDED_FIELDS
            .iter()
            .find(|(keyword, _)| summary.contains(keyword))
            .map(|(_, field)| format!("Potential novelty found in {}.", field))
            .unwrap_or_else(|| {
                "No obvious novelty conflicts detected based on the given summary.".to_string()
            });

        pretty_format(&finding)
    }
}

fn pretty_format(text: &str) -> String {
    format!(
        "# Patent Novelty Check Result\n\n{}\n\n---\n\nPowered by: {}",
        text.trim(),
        PatentNoveltyCheck::NAME
    )
}
