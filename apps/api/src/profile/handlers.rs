use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::current_job::{
    CurrentJob, EngagementStatus, JobStats, Submission, WorkSubmission,
};
use crate::models::profile::{
    Endorsement, NewEndorsement, ProfileLinks, Reputation, UserProfile,
};
use crate::models::skill::{NewSkill, Skill, SkillSummary};
use crate::profile::gate::authorize;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CurrentJobsQuery {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub links: ProfileLinks,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentJobsResponse {
    pub jobs: Vec<CurrentJob>,
    /// Computed over all of the user's jobs, not just the filtered ones.
    pub stats: JobStats,
}

/// GET /api/v1/profile/:address
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, AppError> {
    authorize(&state, &headers, &address)?;
    Ok(Json(state.profiles.get_profile(&address).await?))
}

/// PUT /api/v1/profile/:address
///
/// Replaces the profile links; blank links are cleared.
pub async fn handle_update_profile(
    State(state): State<AppState>,
    Path(address): Path<String>,
    headers: HeaderMap,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, AppError> {
    authorize(&state, &headers, &address)?;
    Ok(Json(state.profiles.update_links(&address, req.links).await?))
}

/// GET /api/v1/profile/:address/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<Skill>>, AppError> {
    authorize(&state, &headers, &address)?;
    Ok(Json(state.skills.get_skills(&address).await?))
}

/// GET /api/v1/profile/:address/skills/summary
pub async fn handle_skill_summary(
    State(state): State<AppState>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Result<Json<SkillSummary>, AppError> {
    authorize(&state, &headers, &address)?;
    let skills = state.skills.get_skills(&address).await?;
    Ok(Json(SkillSummary::from_skills(&skills)))
}

/// POST /api/v1/profile/:address/skills
pub async fn handle_add_skill(
    State(state): State<AppState>,
    Path(address): Path<String>,
    headers: HeaderMap,
    Json(req): Json<NewSkill>,
) -> Result<(StatusCode, Json<Skill>), AppError> {
    authorize(&state, &headers, &address)?;
    req.validate().map_err(AppError::Validation)?;
    let skill = state.skills.add_skill(&address, req).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}

/// DELETE /api/v1/profile/:address/skills/:skill_id
pub async fn handle_delete_skill(
    State(state): State<AppState>,
    Path((address, skill_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    authorize(&state, &headers, &address)?;
    state.skills.delete_skill(&address, &skill_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/profile/:address/endorsements
pub async fn handle_list_endorsements(
    State(state): State<AppState>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Vec<Endorsement>>, AppError> {
    authorize(&state, &headers, &address)?;
    Ok(Json(state.profiles.get_endorsements(&address).await?))
}

/// POST /api/v1/endorsements
///
/// The endorser is the gated party: only the connected wallet may sign as
/// `fromAddress`.
pub async fn handle_add_endorsement(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<NewEndorsement>,
) -> Result<(StatusCode, Json<Endorsement>), AppError> {
    authorize(&state, &headers, &req.from_address)?;
    crate::wallet::validate_address(&req.to_address)?;
    req.validate().map_err(AppError::Validation)?;
    let endorsement = state.profiles.add_endorsement(req).await?;
    Ok((StatusCode::CREATED, Json(endorsement)))
}

/// GET /api/v1/profile/:address/reputation
pub async fn handle_reputation(
    State(state): State<AppState>,
    Path(address): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Reputation>, AppError> {
    authorize(&state, &headers, &address)?;
    let profile = state.profiles.get_profile(&address).await?;
    Ok(Json(Reputation::for_profile(&profile)))
}

/// GET /api/v1/profile/:address/current-jobs
pub async fn handle_current_jobs(
    State(state): State<AppState>,
    Path(address): Path<String>,
    Query(params): Query<CurrentJobsQuery>,
    headers: HeaderMap,
) -> Result<Json<CurrentJobsResponse>, AppError> {
    authorize(&state, &headers, &address)?;

    let status = match params.status.as_deref().map(str::trim) {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(
            raw.parse::<EngagementStatus>()
                .map_err(AppError::Validation)?,
        ),
    };

    let all = state.jobs.get_current_jobs(&address).await?;
    let stats = JobStats::from_jobs(&all);
    let jobs = all
        .into_iter()
        .filter(|j| status.map_or(true, |s| j.status == s))
        .collect();

    Ok(Json(CurrentJobsResponse { jobs, stats }))
}

/// POST /api/v1/profile/:address/current-jobs/:job_id/submissions
pub async fn handle_submit_work(
    State(state): State<AppState>,
    Path((address, job_id)): Path<(String, String)>,
    headers: HeaderMap,
    Json(req): Json<WorkSubmission>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    authorize(&state, &headers, &address)?;
    req.validate().map_err(AppError::Validation)?;
    let submission = state.jobs.submit_work(&address, &job_id, req).await?;
    Ok((StatusCode::CREATED, Json(submission)))
}
