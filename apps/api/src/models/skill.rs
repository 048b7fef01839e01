use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named competency claimed by a user. `name` is the matching key,
/// compared case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
    pub weight: u32,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Body for adding a skill. Id, weight, verification and timestamp are
/// assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof_url: Option<String>,
}

impl NewSkill {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("skill name cannot be empty".to_string());
        }
        if let Some(url) = self.proof_url.as_deref() {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("proofUrl must be an http(s) URL, got '{url}'"));
            }
        }
        Ok(())
    }
}

/// Aggregate numbers shown above the skills list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub total: usize,
    pub verified: usize,
    pub average_weight: f64,
}

impl SkillSummary {
    pub fn from_skills(skills: &[Skill]) -> Self {
        let total = skills.len();
        let verified = skills.iter().filter(|s| s.verified).count();
        let average_weight = if total > 0 {
            let sum: u64 = skills.iter().map(|s| u64::from(s.weight)).sum();
            ((sum as f64 / total as f64) * 10.0).round() / 10.0
        } else {
            0.0
        };
        Self {
            total,
            verified,
            average_weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(weight: u32, verified: bool) -> Skill {
        Skill {
            id: "s".to_string(),
            name: "Rust".to_string(),
            description: String::new(),
            proof_url: None,
            weight,
            verified,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_of_empty_set_is_zero() {
        let summary = SkillSummary::from_skills(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.verified, 0);
        assert_eq!(summary.average_weight, 0.0);
    }

    #[test]
    fn test_summary_rounds_average_to_one_decimal() {
        let summary = SkillSummary::from_skills(&[skill(85, true), skill(78, true), skill(65, false)]);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.verified, 2);
        // 228 / 3 = 76.0
        assert_eq!(summary.average_weight, 76.0);

        let summary = SkillSummary::from_skills(&[skill(85, true), skill(72, false)]);
        assert_eq!(summary.average_weight, 78.5);
    }

    #[test]
    fn test_new_skill_requires_name() {
        let blank = NewSkill {
            name: "   ".to_string(),
            description: String::new(),
            proof_url: None,
        };
        assert!(blank.validate().is_err());
    }

    #[test]
    fn test_new_skill_rejects_non_http_proof() {
        let bad = NewSkill {
            name: "Rust".to_string(),
            description: String::new(),
            proof_url: Some("ftp://example.com".to_string()),
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_skill_uses_camel_case_on_the_wire() {
        let json = serde_json::to_value(skill(70, false)).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("proofUrl").is_none());
    }
}
