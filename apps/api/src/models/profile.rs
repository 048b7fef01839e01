use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::skill::Skill;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    pub id: String,
    pub from_address: String,
    pub to_address: String,
    pub project_id: String,
    pub message: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEndorsement {
    pub from_address: String,
    pub to_address: String,
    pub project_id: String,
    pub message: String,
    pub rating: u8,
}

impl NewEndorsement {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err(format!("rating must be between 1 and 5, got {}", self.rating));
        }
        if self.message.trim().is_empty() {
            return Err("endorsement message cannot be empty".to_string());
        }
        if self.from_address.eq_ignore_ascii_case(&self.to_address) {
            return Err("an address cannot endorse itself".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub address: String,
    pub skills: Vec<Skill>,
    pub reputation_score: u32,
    pub endorsements: Vec<Endorsement>,
    #[serde(default)]
    pub links: ProfileLinks,
}

/// External links shown on the profile page. Blank entries are stored as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kaggle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl ProfileLinks {
    /// Trims every link and drops blank ones, then checks each is an http(s)
    /// URL on the expected site.
    pub fn normalized(self) -> Result<Self, String> {
        Ok(Self {
            resume: check_link("resume", self.resume, None)?,
            github: check_link("github", self.github, Some("github.com/"))?,
            kaggle: check_link("kaggle", self.kaggle, Some("kaggle.com/"))?,
            portfolio: check_link("portfolio", self.portfolio, None)?,
            linkedin: check_link("linkedin", self.linkedin, Some("linkedin.com/"))?,
        })
    }
}

fn check_link(
    field: &str,
    link: Option<String>,
    host: Option<&str>,
) -> Result<Option<String>, String> {
    let Some(link) = link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty()) else {
        return Ok(None);
    };
    if !(link.starts_with("http://") || link.starts_with("https://")) {
        return Err(format!("{field} link must be an http(s) URL, got '{link}'"));
    }
    if let Some(host) = host {
        if !link.contains(host) {
            return Err(format!("{field} link must point to {host}"));
        }
    }
    Ok(Some(link))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReputationLevel {
    Expert,
    Advanced,
    Intermediate,
    Beginner,
    New,
}

impl ReputationLevel {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 90 => ReputationLevel::Expert,
            s if s >= 75 => ReputationLevel::Advanced,
            s if s >= 50 => ReputationLevel::Intermediate,
            s if s >= 25 => ReputationLevel::Beginner,
            _ => ReputationLevel::New,
        }
    }
}

/// Reputation view: score, level and the counts shown beside it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reputation {
    pub score: u32,
    pub level: ReputationLevel,
    pub verified_skills: usize,
    pub endorsements: usize,
    /// Width of the next-level progress bar, capped at 100.
    pub next_level_progress: u32,
}

impl Reputation {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let score = profile.reputation_score;
        Self {
            score,
            level: ReputationLevel::from_score(score),
            verified_skills: profile.skills.iter().filter(|s| s.verified).count(),
            endorsements: profile.endorsements.len(),
            next_level_progress: (score + 10).min(100),
        }
    }
}
