//! Axum route handlers for the job board and suggestions.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::catalog::{filter_jobs, JobQuery};
use crate::matching::format::{format_address, format_salary};
use crate::matching::matcher::match_job;
use crate::matching::suggestions::{suggest_jobs, Suggestions};
use crate::models::current_job::{CurrentJob, JobApplication};
use crate::models::job::{Job, ScoredJob};
use crate::models::skill::Skill;
use crate::profile::gate::authorize;
use crate::state::AppState;
use crate::wallet::validate_address;

/// Upper bound on `max_jobs` accepted from callers.
const MAX_SUGGESTIONS: usize = 50;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobListParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub level: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
    /// True when search or filters were applied, so an empty list reads
    /// "no jobs found" instead of "no jobs available".
    pub filtered: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetailResponse {
    pub job: Job,
    pub salary_label: String,
    pub posted_by_short: String,
}

#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    pub address: Option<String>,
    pub max_jobs: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct ApplyRequest {
    /// Applicant; defaults to the connected wallet.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(flatten)]
    pub application: JobApplication,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub job: Job,
    pub skills: Vec<Skill>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/jobs
///
/// Open jobs filtered by free-text search, job type and experience level.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListParams>,
) -> Result<Json<JobListResponse>, AppError> {
    let query = JobQuery::from_params(
        params.search.as_deref(),
        params.job_type.as_deref(),
        params.level.as_deref(),
    )
    .map_err(AppError::Validation)?;

    let catalog = state.jobs.list_jobs().await?;
    let jobs: Vec<Job> = filter_jobs(&catalog, &query).into_iter().cloned().collect();

    Ok(Json(JobListResponse {
        total: jobs.len(),
        jobs,
        filtered: !query.is_unfiltered(),
    }))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetailResponse>, AppError> {
    let job = state
        .jobs
        .get_job(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;

    Ok(Json(JobDetailResponse {
        salary_label: format_salary(&job.salary),
        posted_by_short: format_address(&job.posted_by),
        job,
    }))
}

/// GET /api/v1/jobs/suggested
///
/// Ranked suggestions for `address`, or for the connected wallet when no
/// address is given.
pub async fn handle_suggested_jobs(
    State(state): State<AppState>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<Suggestions>, AppError> {
    let max_jobs = params
        .max_jobs
        .unwrap_or(state.config.suggestion_limit)
        .min(MAX_SUGGESTIONS);
    if max_jobs == 0 {
        return Err(AppError::Validation("max_jobs must be at least 1".to_string()));
    }

    let address = match params.address.filter(|a| !a.trim().is_empty()) {
        Some(address) => address,
        None => match state.wallet.account().await {
            Some(account) => account,
            None => return Ok(Json(Suggestions::not_connected())),
        },
    };
    validate_address(&address)?;

    let suggestions =
        suggest_jobs(state.skills.as_ref(), state.jobs.as_ref(), &address, max_jobs).await?;
    Ok(Json(suggestions))
}

/// POST /api/v1/jobs/:id/applications
///
/// Applies on behalf of `address` (or the connected wallet) and returns the
/// new `applied` engagement.
pub async fn handle_apply(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(req): Json<ApplyRequest>,
) -> Result<(StatusCode, Json<CurrentJob>), AppError> {
    let address = match req.address.filter(|a| !a.trim().is_empty()) {
        Some(address) => address,
        None => state.wallet.account().await.ok_or(AppError::Unauthorized)?,
    };
    authorize(&state, &headers, &address)?;
    req.application.validate().map_err(AppError::Validation)?;

    let engagement = state
        .jobs
        .apply_to_job(&address, &id, req.application)
        .await?;
    Ok((StatusCode::CREATED, Json(engagement)))
}

/// POST /api/v1/matches/score
///
/// Scores a single job against an explicit skill list. Bodies without
/// `job.skillsRequired` or `skills` are rejected by the extractor.
pub async fn handle_score_match(Json(request): Json<ScoreRequest>) -> Json<ScoredJob> {
    Json(match_job(&request.job, &request.skills))
}
