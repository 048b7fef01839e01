//! Scores one job against one skill set.
//!
//! A required skill counts as matched when some user skill has the same name
//! after lowercasing. No fuzzy or substring matching.

use std::collections::HashSet;

use crate::models::job::{Job, ScoredJob};
use crate::models::skill::Skill;

/// Lowercased user skill names, built once per ranking call.
pub struct SkillSet {
    names: HashSet<String>,
}

impl SkillSet {
    pub fn new(skills: &[Skill]) -> Self {
        Self {
            names: skills.iter().map(|s| s.name.to_lowercase()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, skill_name: &str) -> bool {
        self.names.contains(&skill_name.to_lowercase())
    }
}

/// Scores `job` against `skills`. Never fails.
pub fn match_job(job: &Job, skills: &[Skill]) -> ScoredJob {
    match_job_with(job, &SkillSet::new(skills))
}

pub fn match_job_with(job: &Job, skill_set: &SkillSet) -> ScoredJob {
    let matched_skills: Vec<String> = job
        .skills_required
        .iter()
        .filter(|required| skill_set.contains(required))
        .cloned()
        .collect();

    ScoredJob {
        match_score: match_score(matched_skills.len(), job.skills_required.len()),
        matched_skills,
        job: job.clone(),
    }
}

/// `round(100 * matched / required)`. A job with no required skills scores 0.
pub fn match_score(matched: usize, required: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    let pct = (matched as f64 / required as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::job::{ExperienceLevel, JobStatus, JobType, Salary, SalaryPeriod};
    use chrono::Utc;

    pub(crate) fn make_skill(name: &str) -> Skill {
        Skill {
            id: name.to_lowercase(),
            name: name.to_string(),
            description: String::new(),
            proof_url: None,
            weight: 70,
            verified: true,
            created_at: Utc::now(),
        }
    }

    pub(crate) fn make_job(id: &str, required: &[&str], status: JobStatus, applicants: u32) -> Job {
        Job {
            id: id.to_string(),
            title: format!("Job {id}"),
            company: "TechCorp".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            salary: Salary {
                min: 100_000,
                max: 150_000,
                currency: "USD".to_string(),
                period: SalaryPeriod::Year,
            },
            description: String::new(),
            requirements: vec![],
            skills_required: required.iter().map(|s| s.to_string()).collect(),
            posted_by: "0xabc".to_string(),
            posted_at: Utc::now(),
            applicants,
            status,
            tags: vec![],
            experience_level: ExperienceLevel::Mid,
        }
    }

    #[test]
    fn test_two_of_three_scores_67() {
        let skills = vec![make_skill("React Development"), make_skill("TypeScript")];
        let job = make_job(
            "J1",
            &["React Development", "TypeScript", "JavaScript"],
            JobStatus::Open,
            23,
        );

        let scored = match_job(&job, &skills);
        assert_eq!(scored.match_score, 67);
        assert_eq!(scored.matched_skills, vec!["React Development", "TypeScript"]);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let skills = vec![make_skill("React Development"), make_skill("TypeScript")];
        let job = make_job("J2", &["UI/UX Design"], JobStatus::Open, 5);

        let scored = match_job(&job, &skills);
        assert_eq!(scored.match_score, 0);
        assert!(scored.matched_skills.is_empty());
    }

    #[test]
    fn test_empty_requirements_scores_zero() {
        let skills = vec![make_skill("TypeScript")];
        let job = make_job("J3", &[], JobStatus::Open, 0);

        let scored = match_job(&job, &skills);
        assert_eq!(scored.match_score, 0);
        assert!(scored.matched_skills.is_empty());
    }

    #[test]
    fn test_matching_ignores_case() {
        let skills = vec![make_skill("React Development")];
        for required in ["react development", "REACT DEVELOPMENT", "React Development"] {
            let job = make_job("J", &[required], JobStatus::Open, 0);
            let scored = match_job(&job, &skills);
            assert_eq!(scored.match_score, 100, "failed for {required}");
            assert_eq!(scored.matched_skills, vec![required]);
        }
    }

    #[test]
    fn test_no_substring_matching() {
        let skills = vec![make_skill("React")];
        let job = make_job("J", &["React Development"], JobStatus::Open, 0);
        assert_eq!(match_job(&job, &skills).match_score, 0);
    }

    #[test]
    fn test_matched_skills_keep_job_order_and_subset() {
        let skills = vec![make_skill("C"), make_skill("A"), make_skill("Z")];
        let job = make_job("J", &["A", "B", "C", "D"], JobStatus::Open, 0);

        let scored = match_job(&job, &skills);
        assert_eq!(scored.matched_skills, vec!["A", "C"]);
        assert!(scored
            .matched_skills
            .iter()
            .all(|m| job.skills_required.contains(m)));
        assert_eq!(scored.match_score, 50);
    }

    #[test]
    fn test_score_bounded() {
        for required in 0..12 {
            for matched in 0..=required {
                let score = match_score(matched, required);
                assert!(score <= 100);
            }
        }
        assert_eq!(match_score(3, 3), 100);
    }

    #[test]
    fn test_empty_skill_set() {
        let job = make_job("J", &["Rust"], JobStatus::Open, 0);
        let scored = match_job(&job, &[]);
        assert_eq!(scored.match_score, 0);
        assert!(SkillSet::new(&[]).is_empty());
    }
}
