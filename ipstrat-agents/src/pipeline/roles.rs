use crate::request::AnalysisInput;
use crate::tools::PatentNoveltyCheck;

/// A specialist role and the task it runs over a request
pub struct RoleSpec {
    pub key: &'static str,
    pub role: &'static str,
    pub goal: &'static str,
    pub backstory: &'static str,
    pub expected_output: &'static str,
    pub task: fn(&AnalysisInput) -> String,
}

pub static PATENT_ANALYST: RoleSpec = RoleSpec {
    key: "patent_analyzer",
    role: "Senior Patent Analyst",
    goal: "Analyze patentability and provide comprehensive patent strategy",
    backstory: "Expert patent analyst with 15+ years of experience in technology patents",
    expected_output: "Detailed patent analysis report with actionable recommendations",
    task: patent_task,
};

pub static TRADEMARK_ATTORNEY: RoleSpec = RoleSpec {
    key: "trademark_detector",
    role: "Senior Trademark Attorney",
    goal: "Check trademark availability and conflicts",
    backstory: "Experienced trademark attorney specializing in brand protection",
    expected_output: "Trademark conflict analysis with risk assessment",
    task: trademark_task,
};

pub static VALUATION_DIRECTOR: RoleSpec = RoleSpec {
    key: "valuation_estimator",
    role: "IP Valuation Director",
    goal: "Estimate IP value and market potential",
    backstory: "Financial expert in IP valuation with background in venture capital",
    expected_output: "IP valuation report with financial projections",
    task: valuation_task,
};

/// Execution order of the pipeline: patent, then trademark, then valuation
pub static PIPELINE_ROLES: [&RoleSpec; 3] = [&PATENT_ANALYST, &TRADEMARK_ATTORNEY, &VALUATION_DIRECTOR];

fn patent_task(input: &AnalysisInput) -> String {
    format!(
        r#"ANALYZE PATENTABILITY FOR: {technology}

Provide comprehensive analysis including:
1. Novelty and utility assessment
2. Unique aspects and differentiators
3. Patent claims strategy
4. Filing recommendations (provisional vs non-provisional)
5. Potential challenges and solutions
6. International protection considerations

Format with clear sections and bullet points.

Pre-screen note:
{novelty}"#,
        technology = input.technology_description,
        novelty = PatentNoveltyCheck::run(&input.technology_description),
    )
}

fn trademark_task(input: &AnalysisInput) -> String {
    format!(
        r#"CHECK TRADEMARK AVAILABILITY FOR: {trademark}
Industry: {market}

Analyze:
1. Potential conflicts with existing trademarks
2. Distinctiveness and protectability
3. International considerations
4. Recommended trademark classes
5. Risk assessment and mitigation strategies

Provide clear guidance on trademark viability."#,
        trademark = input.trademark_name,
        market = input.market_description,
    )
}

fn valuation_task(input: &AnalysisInput) -> String {
    format!(
        r#"ESTIMATE IP VALUE FOR:
Technology: {technology}
Market: {market}
Revenue: {revenue}

Provide:
1. IP portfolio valuation estimate
2. Market opportunity analysis
3. Revenue potential from IP licensing
4. Competitive advantage assessment
5. Investment recommendations

Include both conservative and optimistic scenarios."#,
        technology = input.technology_description,
        market = input.market_description,
        revenue = input.estimated_revenue,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> AnalysisInput {
        AnalysisInput {
            technology_description: "Blockchain supply-chain ledger".to_string(),
            trademark_name: "ChainTrace".to_string(),
            market_description: "Logistics".to_string(),
            estimated_revenue: "$2M".to_string(),
            budget: "$30k".to_string(),
            timeline: "6 months".to_string(),
            competitor_list: "VeChain".to_string(),
        }
    }

    #[test]
    fn test_role_order() {
        let keys: Vec<&str> = PIPELINE_ROLES.iter().map(|r| r.key).collect();
        assert_eq!(keys, vec!["patent_analyzer", "trademark_detector", "valuation_estimator"]);
    }

    #[test]
    fn test_patent_task_carries_novelty_note() {
        let prompt = (PATENT_ANALYST.task)(&input());
        assert!(prompt.starts_with("ANALYZE PATENTABILITY FOR: Blockchain supply-chain ledger"));
        assert!(prompt.contains("Potential novelty found in blockchain-related technologies."));
    }

    #[test]
    fn test_trademark_and_valuation_tasks_use_their_fields() {
        let trademark = (TRADEMARK_ATTORNEY.task)(&input());
        assert!(trademark.contains("CHECK TRADEMARK AVAILABILITY FOR: ChainTrace"));
        assert!(trademark.contains("Industry: Logistics"));

        let valuation = (VALUATION_DIRECTOR.task)(&input());
        assert!(valuation.contains("Revenue: $2M"));
        assert!(valuation.contains("conservative and optimistic scenarios"));
    }
}
