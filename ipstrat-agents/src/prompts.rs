//! Prompt templates for the single-call paths: chat, direct analysis and refinement.

use crate::request::AnalysisInput;

pub fn chat_prompt(user_message: &str) -> String {
    format!(
        r#"You are an expert IP Strategy Assistant helping with intellectual property questions.

User Question: {user_message}

Provide a helpful, professional response about IP strategy, patents, trademarks, or related topics.
Keep your response concise but informative (under 200 words)."#
    )
}

/// Composite prompt asking for the four-part report in one call
pub fn direct_analysis_prompt(input: &AnalysisInput) -> String {
    format!(
        r#"You are an expert IP Portfolio Strategist. Analyze this intellectual property portfolio:

TECHNOLOGY DESCRIPTION:
{technology}

TRADEMARK NAME:
{trademark}

TARGET MARKET:
{market}

ESTIMATED REVENUE POTENTIAL:
{revenue}

BUDGET FOR IP PROTECTION:
{budget}

TIMELINE:
{timeline}

COMPETITORS:
{competitors}

Provide a comprehensive IP strategy analysis covering:

1. PATENT ANALYSIS:
   - Novelty and patentability assessment
   - Recommended patent strategy
   - Potential challenges and solutions
   - International filing considerations

2. TRADEMARK ANALYSIS:
   - Availability and conflict check
   - Distinctiveness assessment
   - Recommended trademark classes
   - Risk mitigation strategies

3. IP VALUATION:
   - Estimated portfolio value
   - Market opportunity analysis
   - Revenue projection from licensing
   - Investment attractiveness

4. STRATEGIC RECOMMENDATIONS:
   - Prioritized action plan
   - Budget allocation recommendations
   - Timeline with milestones
   - Risk assessment

Format your response with clear headings, bullet points, and actionable insights.
Keep it professional but concise."#,
        technology = input.technology_description,
        trademark = input.trademark_name,
        market = input.market_description,
        revenue = input.estimated_revenue,
        budget = input.budget,
        timeline = input.timeline,
        competitors = input.competitor_list,
    )
}

/// Editorial pass over a raw report
pub fn refine_prompt(raw_report: &str) -> String {
    format!(
        r#"You are a senior editor preparing an intellectual property strategy report for a client.

The draft below was produced by an analyst model. It may contain exposed reasoning traces,
thinking notes, tool chatter or repeated sections.

Rewrite it as a clean, concise final report:
- Remove any reasoning traces, "Thought:"/"Action:" lines and notes about the drafting process
- Keep every concrete finding, figure and recommendation
- Use clear headings and bullet points
- Do not add new facts

DRAFT:
{raw_report}

Return only the final report."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> AnalysisInput {
        AnalysisInput {
            technology_description: "Solid-state battery electrolyte".to_string(),
            trademark_name: "VoltCore".to_string(),
            market_description: "EV manufacturers".to_string(),
            estimated_revenue: "$5M".to_string(),
            budget: "$50k".to_string(),
            timeline: "12 months".to_string(),
            competitor_list: "QuantumScape".to_string(),
        }
    }

    #[test]
    fn test_direct_prompt_embeds_every_field() {
        let prompt = direct_analysis_prompt(&input());
        for needle in [
            "TECHNOLOGY DESCRIPTION:\nSolid-state battery electrolyte",
            "TRADEMARK NAME:\nVoltCore",
            "TARGET MARKET:\nEV manufacturers",
            "ESTIMATED REVENUE POTENTIAL:\n$5M",
            "BUDGET FOR IP PROTECTION:\n$50k",
            "TIMELINE:\n12 months",
            "COMPETITORS:\nQuantumScape",
        ] {
            assert!(prompt.contains(needle), "missing {needle:?}");
        }
        for section in [
            "1. PATENT ANALYSIS",
            "2. TRADEMARK ANALYSIS",
            "3. IP VALUATION",
            "4. STRATEGIC RECOMMENDATIONS",
        ] {
            assert!(prompt.contains(section));
        }
    }

    #[test]
    fn test_chat_prompt_embeds_question() {
        let prompt = chat_prompt("Should I trademark before filing a patent?");
        assert!(prompt.contains("User Question: Should I trademark before filing a patent?"));
        assert!(prompt.contains("under 200 words"));
    }

    #[test]
    fn test_refine_prompt_wraps_draft() {
        let prompt = refine_prompt("Thought: consider novelty\n# Report");
        assert!(prompt.contains("DRAFT:\nThought: consider novelty\n# Report"));
        assert!(prompt.contains("Remove any reasoning traces"));
    }
}
