//! Data access seams. Handlers and the suggestion engine only see these
//! traits; `memory` backs them with the seeded mock dataset and `http` with
//! the external skills-verification API.
//!
//! Carried in `AppState` as `Arc<dyn ...>`, chosen at startup via `DATA_SOURCE`.

pub mod http;
pub mod memory;
pub mod seed;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::config::{Config, DataSource};
use crate::errors::AppError;
use crate::models::current_job::{CurrentJob, JobApplication, Submission, WorkSubmission};
use crate::models::job::Job;
use crate::models::profile::{Endorsement, NewEndorsement, ProfileLinks, UserProfile};
use crate::models::skill::{NewSkill, Skill};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn get_skills(&self, address: &str) -> Result<Vec<Skill>, AppError>;

    async fn add_skill(&self, address: &str, skill: NewSkill) -> Result<Skill, AppError>;

    /// Fails with `NotFound` when the address has no such skill.
    async fn delete_skill(&self, address: &str, skill_id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// The whole catalog, open and closed, in catalog order.
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError>;

    async fn get_job(&self, id: &str) -> Result<Option<Job>, AppError> {
        Ok(self.list_jobs().await?.into_iter().find(|j| j.id == id))
    }

    async fn get_open_jobs(&self) -> Result<Vec<Job>, AppError> {
        Ok(self
            .list_jobs()
            .await?
            .into_iter()
            .filter(Job::is_open)
            .collect())
    }

    async fn get_current_jobs(&self, address: &str) -> Result<Vec<CurrentJob>, AppError>;

    /// Records an application and returns the new `applied` engagement.
    /// Closed jobs and repeat applications are rejected.
    async fn apply_to_job(
        &self,
        address: &str,
        job_id: &str,
        application: JobApplication,
    ) -> Result<CurrentJob, AppError>;

    /// Only in-progress engagements accept submissions.
    async fn submit_work(
        &self,
        address: &str,
        current_job_id: &str,
        submission: WorkSubmission,
    ) -> Result<Submission, AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Unknown addresses get an empty profile rather than an error.
    async fn get_profile(&self, address: &str) -> Result<UserProfile, AppError>;

    async fn get_endorsements(&self, address: &str) -> Result<Vec<Endorsement>, AppError>;

    async fn add_endorsement(&self, endorsement: NewEndorsement) -> Result<Endorsement, AppError>;

    /// Replaces the profile links and returns the updated profile.
    async fn update_links(
        &self,
        address: &str,
        links: ProfileLinks,
    ) -> Result<UserProfile, AppError>;
}

/// The three repositories handed to `AppState`.
#[derive(Clone)]
pub struct Repositories {
    pub skills: Arc<dyn SkillRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
}

impl Repositories {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        match config.data_source {
            DataSource::Memory => {
                info!("Using seeded in-memory data source");
                Ok(Self::shared(Arc::new(memory::InMemoryStore::seeded())))
            }
            DataSource::Http => {
                info!("Using skills API at {}", config.api_base_url);
                Ok(Self::shared(Arc::new(http::ApiClient::new(
                    &config.api_base_url,
                )?)))
            }
        }
    }

    /// One backend serving all three seams.
    pub fn shared<S>(store: Arc<S>) -> Self
    where
        S: SkillRepository + JobRepository + ProfileRepository + 'static,
    {
        Self {
            skills: store.clone(),
            jobs: store.clone(),
            profiles: store,
        }
    }
}

/// Map key for an address. Addresses compare case-insensitively.
pub(crate) fn address_key(address: &str) -> String {
    address.trim().to_lowercase()
}
