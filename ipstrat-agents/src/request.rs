use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Field names every analysis request must carry, in report order
pub const REQUIRED_FIELDS: [&str; 7] = [
    "technology_description",
    "trademark_name",
    "market_description",
    "estimated_revenue",
    "budget",
    "timeline",
    "competitor_list",
];

/// Raw `/analyze` body as submitted by the form
///
/// Every field is optional here so that absent, null and empty values all
/// surface through [`AnalysisRequest::validate`] instead of a deserializer error.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalysisRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub technology_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub trademark_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub market_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub estimated_revenue: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub timeline: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub competitor_list: Option<String>,
}

/// A request whose seven fields are all present and non-blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisInput {
    pub technology_description: String,
    pub trademark_name: String,
    pub market_description: String,
    pub estimated_revenue: String,
    pub budget: String,
    pub timeline: String,
    pub competitor_list: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing fields: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl AnalysisRequest {
    fn fields(&self) -> [(&'static str, &Option<String>); 7] {
        [
            (REQUIRED_FIELDS[0], &self.technology_description),
            (REQUIRED_FIELDS[1], &self.trademark_name),
            (REQUIRED_FIELDS[2], &self.market_description),
            (REQUIRED_FIELDS[3], &self.estimated_revenue),
            (REQUIRED_FIELDS[4], &self.budget),
            (REQUIRED_FIELDS[5], &self.timeline),
            (REQUIRED_FIELDS[6], &self.competitor_list),
        ]
    }

    /// Names of required fields that are absent or blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.fields()
            .into_iter()
            .filter(|(_, value)| value.as_deref().map_or(true, |v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect()
    }

    pub fn validate(self) -> Result<AnalysisInput, ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        // All present after the check above
        let take = |v: Option<String>| v.unwrap_or_default();
        Ok(AnalysisInput {
            technology_description: take(self.technology_description),
            trademark_name: take(self.trademark_name),
            market_description: take(self.market_description),
            estimated_revenue: take(self.estimated_revenue),
            budget: take(self.budget),
            timeline: take(self.timeline),
            competitor_list: take(self.competitor_list),
        })
    }
}

/// Accepts strings, numbers, booleans and lists; form clients send revenue and
/// budget either way. Falsy values (`false`, `0`, `[]`, `{}`) count as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(render_value))
}

fn render_value(value: serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Array(items) if items.is_empty() => None,
        Value::Object(map) if map.is_empty() => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(render_value).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        other => Some(other.to_string()),
    }
}
