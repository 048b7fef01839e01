use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::job::{Job, Salary};

static GITHUB_REPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/[\w\-.]+/[\w\-.]+/?$").expect("Invalid GitHub repo regex")
});

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EngagementStatus {
    Applied,
    Interviewing,
    Accepted,
    InProgress,
    Completed,
    Cancelled,
}

impl std::str::FromStr for EngagementStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applied" => Ok(EngagementStatus::Applied),
            "interviewing" => Ok(EngagementStatus::Interviewing),
            "accepted" => Ok(EngagementStatus::Accepted),
            "in-progress" => Ok(EngagementStatus::InProgress),
            "completed" => Ok(EngagementStatus::Completed),
            "cancelled" => Ok(EngagementStatus::Cancelled),
            _ => Err(format!("unknown engagement status '{s}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Partial,
    Completed,
}

/// A job the user has applied to or is working on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentJob {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: Salary,
    pub skills_required: Vec<String>,
    pub status: EngagementStatus,
    pub application_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    /// Percent complete, meaningful while in progress.
    pub progress: u8,
    pub payment_status: PaymentStatus,
    pub total_earned: u64,
    pub last_update: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_feedback: Option<String>,
    /// Catalog job this engagement came from, when it started as an application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<String>,
}

impl CurrentJob {
    /// A fresh `applied` engagement for `job`.
    pub fn from_application(id: String, job: &Job, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary.clone(),
            skills_required: job.skills_required.clone(),
            status: EngagementStatus::Applied,
            application_date: now.date_naive(),
            start_date: None,
            deadline: None,
            progress: 0,
            payment_status: PaymentStatus::Pending,
            total_earned: 0,
            last_update: now,
            client_feedback: None,
            job_id: Some(job.id.clone()),
        }
    }
}

/// Body for applying to a catalog job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub cover_letter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_from: Option<NaiveDate>,
}

impl JobApplication {
    pub fn validate(&self) -> Result<(), String> {
        if self.cover_letter.trim().is_empty() {
            return Err("cover letter cannot be empty".to_string());
        }
        if let Some(url) = self.portfolio_url.as_deref().map(str::trim) {
            if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("portfolioUrl must be an http(s) URL, got '{url}'"));
            }
        }
        Ok(())
    }
}

/// Deliverable handed in for an in-progress engagement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSubmission {
    pub repo_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
}

impl WorkSubmission {
    /// `repo_url` must be a GitHub repository root, e.g.
    /// `https://github.com/user/repo`.
    pub fn validate(&self) -> Result<(), String> {
        let url = self.repo_url.trim();
        if url.is_empty() {
            return Err("repoUrl is required".to_string());
        }
        if !GITHUB_REPO.is_match(url) {
            return Err(format!(
                "repoUrl must look like https://github.com/username/repository, got '{url}'"
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: String,
    pub current_job_id: String,
    pub repo_url: String,
    pub description: String,
    pub notes: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub active_jobs: usize,
    pub completed_jobs: usize,
    pub total_earnings: u64,
}

impl JobStats {
    pub fn from_jobs(jobs: &[CurrentJob]) -> Self {
        Self {
            active_jobs: jobs
                .iter()
                .filter(|j| j.status == EngagementStatus::InProgress)
                .count(),
            completed_jobs: jobs
                .iter()
                .filter(|j| j.status == EngagementStatus::Completed)
                .count(),
            total_earnings: jobs.iter().map(|j| j.total_earned).sum(),
        }
    }
}
