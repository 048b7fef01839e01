//! HTTP client for the external skills-verification API.
//!
//! Endpoints are relative to `API_BASE_URL` (e.g. `http://localhost:3001/api`):
//! `/profile/{address}` (GET, PUT links), `/profile/{address}/skills`,
//! `/profile/{address}/endorsements`, `/endorsements`,
//! `/profile/{address}/reputation`, `/jobs`, `/jobs/{id}`,
//! `/jobs/{id}/applications`, `/profile/{address}/current-jobs` and
//! `/profile/{address}/current-jobs/{id}/submissions`.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::models::current_job::{CurrentJob, JobApplication, Submission, WorkSubmission};
use crate::models::job::Job;
use crate::models::profile::{Endorsement, NewEndorsement, ProfileLinks, UserProfile};
use crate::models::skill::{NewSkill, Skill};
use crate::repository::{JobRepository, ProfileRepository, SkillRepository};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
/// Attempts for idempotent GETs; writes are sent once.
const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Deserialize)]
struct ReputationScore {
    score: u32,
}

#[derive(Serialize)]
struct LinksUpdate<'a> {
    links: &'a ProfileLinks,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ApplicationRequest<'a> {
    address: &'a str,
    #[serde(flatten)]
    application: &'a JobApplication,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("API_BASE_URL is not a valid URL: {base_url}"))?;
        if base_url.cannot_be_a_base() {
            return Err(anyhow!("API_BASE_URL cannot be used as a base: {base_url}"));
        }
        Ok(Self { client, base_url })
    }

    /// Appends `segments` to the base URL, one path segment each. `/`, `%`
    /// and other reserved characters are percent-encoded, so an id can never
    /// address a different resource.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(AppError::Validation(format!("invalid path segment '{bad}'")));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Internal(anyhow!("base URL cannot take path segments")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!("{method} {url}");
        self.client.request(method, url)
    }

    /// GET with retry on connection failures and 5xx, exponential backoff.
    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AppError> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        let mut last_error: Option<AppError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                // 200ms, 400ms
                let delay = Duration::from_millis(200 * (1 << (attempt - 1)));
                warn!(
                    "GET {path} attempt {attempt} failed, retrying after {}ms...",
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.request(Method::GET, url.clone()).send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(e.into());
                    continue;
                }
            };

            if response.status().is_server_error() {
                last_error = Some(AppError::Upstream(format!(
                    "GET {path} returned {}",
                    response.status()
                )));
                continue;
            }

            return decode(response, &path).await;
        }

        Err(last_error.unwrap_or_else(|| AppError::Upstream(format!("GET {path} failed"))))
    }

    /// Sends a JSON body once and decodes the reply.
    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.endpoint(segments)?;
        let path = url.path().to_string();
        let response = self.request(method, url).json(body).send().await?;
        decode(response, &path).await
    }
}

/// Maps upstream status codes onto `AppError` and decodes the JSON body.
async fn decode<T: DeserializeOwned>(response: Response, path: &str) -> Result<T, AppError> {
    check_status(&response, path)?;
    Ok(response.json::<T>().await?)
}

fn check_status(response: &Response, path: &str) -> Result<(), AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::NotFound(format!("{path} not found")));
    }
    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
        return Err(AppError::Validation(format!(
            "skills API rejected {path} ({status})"
        )));
    }
    warn!("Skills API returned {status} for {path}");
    Err(AppError::Upstream(format!("HTTP error! status: {status}")))
}

#[async_trait]
impl SkillRepository for ApiClient {
    async fn get_skills(&self, address: &str) -> Result<Vec<Skill>, AppError> {
        self.get_json(&["profile", address, "skills"]).await
    }

    async fn add_skill(&self, address: &str, skill: NewSkill) -> Result<Skill, AppError> {
        skill.validate().map_err(AppError::Validation)?;
        self.send_json(Method::POST, &["profile", address, "skills"], &skill)
            .await
    }

    async fn delete_skill(&self, address: &str, skill_id: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["profile", address, "skills", skill_id])?;
        let path = url.path().to_string();
        let response = self.request(Method::DELETE, url).send().await?;
        check_status(&response, &path)
    }
}

#[async_trait]
impl JobRepository for ApiClient {
    async fn list_jobs(&self) -> Result<Vec<Job>, AppError> {
        self.get_json(&["jobs"]).await
    }

    async fn get_job(&self, id: &str) -> Result<Option<Job>, AppError> {
        match self.get_json(&["jobs", id]).await {
            Ok(job) => Ok(Some(job)),
            Err(AppError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn get_current_jobs(&self, address: &str) -> Result<Vec<CurrentJob>, AppError> {
        self.get_json(&["profile", address, "current-jobs"]).await
    }

    async fn apply_to_job(
        &self,
        address: &str,
        job_id: &str,
        application: JobApplication,
    ) -> Result<CurrentJob, AppError> {
        application.validate().map_err(AppError::Validation)?;
        let body = ApplicationRequest {
            address,
            application: &application,
        };
        self.send_json(Method::POST, &["jobs", job_id, "applications"], &body)
            .await
    }

    async fn submit_work(
        &self,
        address: &str,
        current_job_id: &str,
        submission: WorkSubmission,
    ) -> Result<Submission, AppError> {
        submission.validate().map_err(AppError::Validation)?;
        self.send_json(
            Method::POST,
            &["profile", address, "current-jobs", current_job_id, "submissions"],
            &submission,
        )
        .await
    }
}

#[async_trait]
impl ProfileRepository for ApiClient {
    async fn get_profile(&self, address: &str) -> Result<UserProfile, AppError> {
        match self.get_json(&["profile", address]).await {
            Ok(profile) => Ok(profile),
            Err(AppError::NotFound(_)) => {
                // The API only knows addresses that have written something.
                let reputation: Option<ReputationScore> = self
                    .get_json(&["profile", address, "reputation"])
                    .await
                    .ok();
                Ok(UserProfile {
                    address: address.to_string(),
                    skills: vec![],
                    reputation_score: reputation.map(|r| r.score).unwrap_or(0),
                    endorsements: vec![],
                    links: ProfileLinks::default(),
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn get_endorsements(&self, address: &str) -> Result<Vec<Endorsement>, AppError> {
        self.get_json(&["profile", address, "endorsements"]).await
    }

    async fn add_endorsement(&self, endorsement: NewEndorsement) -> Result<Endorsement, AppError> {
        endorsement.validate().map_err(AppError::Validation)?;
        self.send_json(Method::POST, &["endorsements"], &endorsement)
            .await
    }

    async fn update_links(
        &self,
        address: &str,
        links: ProfileLinks,
    ) -> Result<UserProfile, AppError> {
        let links = links.normalized().map_err(AppError::Validation)?;
        self.send_json(Method::PUT, &["profile", address], &LinksUpdate { links: &links })
            .await
    }
}
