use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::matching::ranker::rank_suggestions;
use crate::models::job::ScoredJob;
use crate::repository::{JobRepository, SkillRepository};

/// Why a suggestion list came back empty, so the caller can show the right
/// empty state.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EmptyReason {
    /// No address given and no wallet connected.
    NotConnected,
    NoSkills,
    NoOpenJobs,
    NoMatches,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestions {
    pub jobs: Vec<ScoredJob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_reason: Option<EmptyReason>,
}

impl Suggestions {
    pub fn not_connected() -> Self {
        Self {
            jobs: Vec::new(),
            empty_reason: Some(EmptyReason::NotConnected),
        }
    }
}

/// Loads the user's skills and the open catalog, then ranks. `max_jobs` must
/// be at least 1; an empty list always carries a reason.
pub async fn suggest_jobs(
    skills: &dyn SkillRepository,
    jobs: &dyn JobRepository,
    address: &str,
    max_jobs: usize,
) -> Result<Suggestions, AppError> {
    if max_jobs == 0 {
        return Err(AppError::Validation("max_jobs must be at least 1".to_string()));
    }

    let (user_skills, open_jobs) = tokio::join!(skills.get_skills(address), jobs.get_open_jobs());
    let (user_skills, open_jobs) = (user_skills?, open_jobs?);

    let ranked = rank_suggestions(&open_jobs, &user_skills, max_jobs);
    debug!(
        "Ranked {} of {} open jobs for {address} ({} skills)",
        ranked.len(),
        open_jobs.len(),
        user_skills.len()
    );

    let empty_reason = if !ranked.is_empty() {
        None
    } else if user_skills.is_empty() {
        Some(EmptyReason::NoSkills)
    } else if open_jobs.is_empty() {
        Some(EmptyReason::NoOpenJobs)
    } else {
        Some(EmptyReason::NoMatches)
    };

    Ok(Suggestions {
        jobs: ranked,
        empty_reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::matcher::tests::{make_job, make_skill};
    use crate::models::job::JobStatus;
    use crate::repository::memory::InMemoryStore;
    use crate::repository::seed;

    const ADDR: &str = "0xfeed";

    #[tokio::test]
    async fn test_seeded_demo_profile_gets_ranked_jobs() {
        let store = InMemoryStore::seeded();
        let result = suggest_jobs(&store, &store, seed::DEMO_ADDRESS, 3).await.unwrap();

        assert_eq!(result.jobs.len(), 3);
        assert!(result.empty_reason.is_none());
        // Full Stack Engineer requires exactly three of the demo skills.
        assert_eq!(result.jobs[0].job.id, "3");
        assert_eq!(result.jobs[0].match_score, 100);
        assert!(result.jobs.iter().all(|j| j.job.is_open()));
    }

    #[tokio::test]
    async fn test_no_skills_reason() {
        let store = InMemoryStore::seeded();
        let result = suggest_jobs(&store, &store, ADDR, 3).await.unwrap();
        assert!(result.jobs.is_empty());
        assert_eq!(result.empty_reason, Some(EmptyReason::NoSkills));
    }

    #[tokio::test]
    async fn test_no_open_jobs_reason() {
        let store = InMemoryStore::new()
            .with_skills(ADDR, vec![make_skill("Rust")])
            .with_jobs(vec![make_job("1", &["Rust"], JobStatus::Closed, 0)]);
        let result = suggest_jobs(&store, &store, ADDR, 3).await.unwrap();
        assert_eq!(result.empty_reason, Some(EmptyReason::NoOpenJobs));
    }

    #[tokio::test]
    async fn test_no_matches_reason() {
        let store = InMemoryStore::new()
            .with_skills(ADDR, vec![make_skill("Rust")])
            .with_jobs(vec![make_job("1", &["Go"], JobStatus::Open, 0)]);
        let result = suggest_jobs(&store, &store, ADDR, 3).await.unwrap();
        assert_eq!(result.empty_reason, Some(EmptyReason::NoMatches));
    }

    #[tokio::test]
    async fn test_zero_limit_is_rejected() {
        let store = InMemoryStore::seeded();
        let err = suggest_jobs(&store, &store, seed::DEMO_ADDRESS, 0).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
