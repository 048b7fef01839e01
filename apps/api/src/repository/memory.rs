use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::current_job::{
    CurrentJob, EngagementStatus, JobApplication, Submission, WorkSubmission,
};
use crate::models::job::Job;
use crate::models::profile::{Endorsement, NewEndorsement, ProfileLinks, UserProfile};
use crate::models::skill::{NewSkill, Skill};
use crate::repository::{
    address_key, seed, JobRepository, ProfileRepository, SkillRepository,
};

/// Weight given to a freshly added, not yet verified skill.
pub const NEW_SKILL_WEIGHT: u32 = 60;

#[derive(Default)]
struct StoreData {
    skills: HashMap<String, Vec<Skill>>,
    jobs: Vec<Job>,
    current_jobs: HashMap<String, Vec<CurrentJob>>,
    endorsements: Vec<Endorsement>,
    reputation: HashMap<String, u32>,
    links: HashMap<String, ProfileLinks>,
    submissions: Vec<Submission>,
}

/// In-memory backing for all three repositories.
#[derive(Default)]
pub struct InMemoryStore {
    data: RwLock<StoreData>,
}

impl InMemoryStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store loaded with the mock dataset, owned by `seed::DEMO_ADDRESS`.
    pub fn seeded() -> Self {
        let owner = address_key(seed::DEMO_ADDRESS);
        let data = StoreData {
            skills: HashMap::from([(owner.clone(), seed::skills())]),
            jobs: seed::jobs(),
            current_jobs: HashMap::from([(owner.clone(), seed::current_jobs())]),
            endorsements: seed::endorsements(),
            reputation: HashMap::from([(owner, seed::DEMO_REPUTATION)]),
            ..StoreData::default()
        };
        Self {
            data: RwLock::new(data),
        }
    }

    #[cfg(test)]
    pub fn with_jobs(self, jobs: Vec<Job>) -> Self {
        let mut data = self.data.into_inner();
        data.jobs = jobs;
        Self {
            data: RwLock::new(data),
        }
    }

    #[cfg(test)]
    pub fn with_skills(self, address: &str, skills: Vec<Skill>) -> Self {
        let mut data = self.data.into_inner();
        data.skills.insert(address_key(address), skills);
        Self {
            data: RwLock::new(data),
        }
    }
}

#[async_trait]
impl SkillRepository for InMemoryStore {
    async fn get_skills(&self, address: &str) -> Result<Vec<Skill>, AppError> {
        let data = self.data.read().await;
        Ok(data
            .skills
            .get(&address_key(address))
            .cloned()
            .unwrap_or_default())
    }

    async fn add_skill(&self, address: &str, skill: NewSkill) -> Result<Skill, AppError> {
        skill.validate().map_err(AppError::Validation)?;

        let created = Skill {
            id: Uuid::new_v4().to_string(),
            name: skill.name.trim().to_string(),
            description: skill.description,
            proof_url: skill.proof_url,
            weight: NEW_SKILL_WEIGHT,
            verified: false,
            created_at: Utc::now(),
        };

        let mut data = self.data.write().await;
        data.skills
            .entry(address_key(address))
            .or_default()
            .push(created.clone());

        info!("Added skill '{}' ({}) for {address}", created.name, created.id);
        Ok(created)
    }

    async fn delete_skill(&self, address: &str, skill_id: &str) -> Result<(), AppError> {
        let mut data = self.data.write().await;
        let not_found = || AppError::NotFound(format!("Skill {skill_id} not found"));
        let skills = data
            .skills
            .get_mut(&address_key(address))
            .ok_or_else(not_found)?;
        let before = skills.len();
        skills.retain(|s| s.id != skill_id);
        if skills.len() == before {
            return Err(not_found());
        }
        info!("Deleted skill {skill_id} for {address}");
        Ok(())
    }
}

#[async_trait]
impl JobRepository for InMemoryStore {
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.data.read().await.jobs.clone())
    }

    async fn get_current_jobs(&self, address: &str) -> Result<Vec<CurrentJob>, AppError> {
        let data = self.data.read().await;
        Ok(data
            .current_jobs
            .get(&address_key(address))
            .cloned()
            .unwrap_or_default())
    }

    async fn apply_to_job(
        &self,
        address: &str,
        job_id: &str,
        application: JobApplication,
    ) -> Result<CurrentJob, AppError> {
        application.validate().map_err(AppError::Validation)?;

        let key = address_key(address);
        let mut guard = self.data.write().await;
        let data = &mut *guard;
        let job = data
            .jobs
            .iter_mut()
            .find(|j| j.id == job_id)
            .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
        if !job.is_open() {
            return Err(AppError::Validation(format!("Job {job_id} is closed")));
        }
        let already_applied = data.current_jobs.get(&key).is_some_and(|jobs| {
            jobs.iter().any(|j| j.job_id.as_deref() == Some(job_id))
        });
        if already_applied {
            return Err(AppError::Validation(format!(
                "{address} has already applied to job {job_id}"
            )));
        }

        job.applicants += 1;
        let engagement =
            CurrentJob::from_application(format!("cj-{}", Uuid::new_v4()), job, Utc::now());
        data.current_jobs
            .entry(key)
            .or_default()
            .push(engagement.clone());

        info!("{address} applied to job {job_id} ({})", engagement.id);
        Ok(engagement)
    }

    async fn submit_work(
        &self,
        address: &str,
        current_job_id: &str,
        submission: WorkSubmission,
    ) -> Result<Submission, AppError> {
        submission.validate().map_err(AppError::Validation)?;

        let mut guard = self.data.write().await;
        let data = &mut *guard;
        let engagement = data
            .current_jobs
            .get_mut(&address_key(address))
            .and_then(|jobs| jobs.iter_mut().find(|j| j.id == current_job_id))
            .ok_or_else(|| AppError::NotFound(format!("Current job {current_job_id} not found")))?;
        if engagement.status != EngagementStatus::InProgress {
            return Err(AppError::Validation(format!(
                "Current job {current_job_id} is not in progress"
            )));
        }

        let now = Utc::now();
        engagement.last_update = now;
        let created = Submission {
            id: Uuid::new_v4().to_string(),
            current_job_id: current_job_id.to_string(),
            repo_url: submission.repo_url.trim().to_string(),
            description: submission.description,
            notes: submission.notes,
            submitted_at: now,
        };
        data.submissions.push(created.clone());

        info!("Submission {} for {current_job_id} from {address}", created.id);
        Ok(created)
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn get_profile(&self, address: &str) -> Result<UserProfile, AppError> {
        let key = address_key(address);
        let data = self.data.read().await;
        debug!("Loading profile for {key}");
        Ok(UserProfile {
            address: address.to_string(),
            skills: data.skills.get(&key).cloned().unwrap_or_default(),
            reputation_score: data.reputation.get(&key).copied().unwrap_or(0),
            endorsements: endorsements_for(&data.endorsements, &key),
            links: data.links.get(&key).cloned().unwrap_or_default(),
        })
    }

    async fn get_endorsements(&self, address: &str) -> Result<Vec<Endorsement>, AppError> {
        let data = self.data.read().await;
        Ok(endorsements_for(&data.endorsements, &address_key(address)))
    }

    async fn add_endorsement(&self, endorsement: NewEndorsement) -> Result<Endorsement, AppError> {
        endorsement.validate().map_err(AppError::Validation)?;

        let created = Endorsement {
            id: Uuid::new_v4().to_string(),
            from_address: endorsement.from_address,
            to_address: endorsement.to_address,
            project_id: endorsement.project_id,
            message: endorsement.message,
            rating: endorsement.rating,
            created_at: Utc::now(),
        };

        self.data.write().await.endorsements.push(created.clone());
        info!(
            "Recorded endorsement {} from {} to {}",
            created.id, created.from_address, created.to_address
        );
        Ok(created)
    }

    async fn update_links(
        &self,
        address: &str,
        links: ProfileLinks,
    ) -> Result<UserProfile, AppError> {
        let links = links.normalized().map_err(AppError::Validation)?;
        self.data
            .write()
            .await
            .links
            .insert(address_key(address), links);
        info!("Updated profile links for {address}");
        self.get_profile(address).await
    }
}

fn endorsements_for(all: &[Endorsement], key: &str) -> Vec<Endorsement> {
    all.iter()
        .filter(|e| address_key(&e.to_address) == key)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const OTHER: &str = "0xabcdef1234567890abcdef1234567890abcdef12";

    #[tokio::test]
    async fn test_seeded_profile_matches_dataset() {
        let store = InMemoryStore::seeded();
        let profile = store.get_profile(seed::DEMO_ADDRESS).await.unwrap();
        assert_eq!(profile.skills.len(), 4);
        assert_eq!(profile.reputation_score, 87);
        assert_eq!(profile.endorsements.len(), 3);
    }

    #[tokio::test]
    async fn test_address_lookup_ignores_case() {
        let store = InMemoryStore::new().with_skills("0xABCDEF", seed::skills());
        assert_eq!(store.get_skills("0xabcdef").await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_address_gets_empty_profile() {
        let store = InMemoryStore::seeded();
        let profile = store.get_profile("0xnobody").await.unwrap();
        assert!(profile.skills.is_empty());
        assert!(profile.endorsements.is_empty());
        assert_eq!(profile.reputation_score, 0);
    }

    #[tokio::test]
    async fn test_add_then_delete_skill() {
        let store = InMemoryStore::new();
        let skill = store
            .add_skill(
                OTHER,
                NewSkill {
                    name: "  Rust ".to_string(),
                    description: "Systems programming".to_string(),
                    proof_url: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.weight, NEW_SKILL_WEIGHT);
        assert!(!skill.verified);
        assert_eq!(store.get_skills(OTHER).await.unwrap().len(), 1);

        store.delete_skill(OTHER, &skill.id).await.unwrap();
        assert!(store.get_skills(OTHER).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_skill_is_not_found() {
        let store = InMemoryStore::seeded();
        let err = store.delete_skill(seed::DEMO_ADDRESS, "nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_add_skill_validates() {
        let store = InMemoryStore::new();
        let err = store
            .add_skill(
                OTHER,
                NewSkill {
                    name: String::new(),
                    description: String::new(),
                    proof_url: None,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_open_jobs_excludes_closed() {
        let store = InMemoryStore::seeded();
        let all = store.list_jobs().await.unwrap();
        let open = store.get_open_jobs().await.unwrap();
        assert!(open.len() < all.len());
        assert!(open.iter().all(Job::is_open));
    }

    #[tokio::test]
    async fn test_get_job_by_id() {
        let store = InMemoryStore::seeded();
        assert!(store.get_job("1").await.unwrap().is_some());
        assert!(store.get_job("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_endorsement_is_visible_to_recipient() {
        let store = InMemoryStore::seeded();
        store
            .add_endorsement(NewEndorsement {
                from_address: OTHER.to_string(),
                to_address: seed::DEMO_ADDRESS.to_string(),
                project_id: "audit".to_string(),
                message: "Solid review".to_string(),
                rating: 4,
            })
            .await
            .unwrap();
        let endorsements = store.get_endorsements(seed::DEMO_ADDRESS).await.unwrap();
        assert_eq!(endorsements.len(), 4);
        assert!(store.get_endorsements(OTHER).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_skill_for_unknown_address_leaves_no_entry() {
        let store = InMemoryStore::new();
        let err = store.delete_skill(OTHER, "1").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(store.data.read().await.skills.is_empty());
    }

    fn application() -> JobApplication {
        JobApplication {
            cover_letter: "Five years of React".to_string(),
            portfolio_url: Some("https://alice.dev".to_string()),
            expected_salary: None,
            available_from: None,
        }
    }

    #[tokio::test]
    async fn test_apply_creates_applied_engagement_once() {
        let store = InMemoryStore::seeded();
        let engagement = store.apply_to_job(OTHER, "2", application()).await.unwrap();
        assert_eq!(engagement.status, EngagementStatus::Applied);
        assert_eq!(engagement.title, "UI/UX Designer");
        assert_eq!(store.get_current_jobs(OTHER).await.unwrap().len(), 1);
        assert_eq!(store.get_job("2").await.unwrap().unwrap().applicants, 13);

        let err = store.apply_to_job(OTHER, "2", application()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_apply_rejects_closed_and_missing_jobs() {
        let store = InMemoryStore::seeded();
        assert!(matches!(
            store.apply_to_job(OTHER, "6", application()).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            store.apply_to_job(OTHER, "404", application()).await,
            Err(AppError::NotFound(_))
        ));
    }

    fn submission() -> WorkSubmission {
        WorkSubmission {
            repo_url: "https://github.com/alice/shop-redesign".to_string(),
            description: "Checkout flow".to_string(),
            notes: String::new(),
        }
    }

    #[tokio::test]
    async fn test_submission_only_for_in_progress_jobs() {
        let store = InMemoryStore::seeded();
        let created = store
            .submit_work(seed::DEMO_ADDRESS, "cj-1", submission())
            .await
            .unwrap();
        assert_eq!(created.current_job_id, "cj-1");

        let err = store
            .submit_work(seed::DEMO_ADDRESS, "cj-2", submission())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = store.submit_work(OTHER, "cj-1", submission()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_links_are_stored_on_profile() {
        let store = InMemoryStore::seeded();
        let profile = store
            .update_links(
                seed::DEMO_ADDRESS,
                ProfileLinks {
                    github: Some("https://github.com/demo".to_string()),
                    ..ProfileLinks::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(profile.links.github.as_deref(), Some("https://github.com/demo"));
        assert_eq!(profile.skills.len(), 4);
    }
}
