//! Picks and orders the suggested jobs.
//!
//! Filter: open jobs with a score above zero.
//! Order: score desc, matched-skill count desc, applicants asc. Ties keep
//! catalog order (`sort_by` is stable).

use std::cmp::Ordering;

use crate::matching::matcher::{match_job_with, SkillSet};
use crate::models::job::{Job, ScoredJob};
use crate::models::skill::Skill;

/// Scores every open job against `skills` and returns at most `max_jobs`
/// of them, best first. Empty skills give an empty list.
pub fn rank_suggestions(jobs: &[Job], skills: &[Skill], max_jobs: usize) -> Vec<ScoredJob> {
    let skill_set = SkillSet::new(skills);
    if skill_set.is_empty() || max_jobs == 0 {
        return Vec::new();
    }

    let mut scored: Vec<ScoredJob> = jobs
        .iter()
        .filter(|job| job.is_open())
        .map(|job| match_job_with(job, &skill_set))
        .filter(|scored| scored.match_score > 0)
        .collect();

    scored.sort_by(compare_scored);
    scored.truncate(max_jobs);
    scored
}

/// Ranking comparator; `Less` means `a` is shown first.
pub fn compare_scored(a: &ScoredJob, b: &ScoredJob) -> Ordering {
    b.match_score
        .cmp(&a.match_score)
        .then_with(|| b.matched_skills.len().cmp(&a.matched_skills.len()))
        .then_with(|| a.job.applicants.cmp(&b.job.applicants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::matcher::tests::{make_job, make_skill};
    use crate::models::job::JobStatus;

    fn ids(ranked: &[ScoredJob]) -> Vec<&str> {
        ranked.iter().map(|s| s.job.id.as_str()).collect()
    }

    #[test]
    fn test_zero_score_jobs_excluded() {
        let skills = vec![make_skill("React Development"), make_skill("TypeScript")];
        let jobs = vec![
            make_job(
                "J1",
                &["React Development", "TypeScript", "JavaScript"],
                JobStatus::Open,
                23,
            ),
            make_job("J2", &["UI/UX Design"], JobStatus::Open, 3),
            make_job("J3", &[], JobStatus::Open, 0),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 10);
        assert_eq!(ids(&ranked), vec!["J1"]);
        assert_eq!(ranked[0].match_score, 67);
    }

    #[test]
    fn test_fewer_applicants_breaks_tie() {
        let skills = vec![make_skill("React Development"), make_skill("TypeScript")];
        let required = ["React Development", "TypeScript", "JavaScript"];
        let jobs = vec![
            make_job("JA", &required, JobStatus::Open, 23),
            make_job("JB", &required, JobStatus::Open, 8),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 5);
        assert_eq!(ids(&ranked), vec!["JB", "JA"]);
    }

    #[test]
    fn test_more_matched_skills_breaks_equal_score() {
        let skills = vec![make_skill("A"), make_skill("B"), make_skill("C")];
        // 1/2 = 50 with one match, 2/4 = 50 with two matches
        let jobs = vec![
            make_job("small", &["A", "X"], JobStatus::Open, 0),
            make_job("large", &["B", "C", "Y", "Z"], JobStatus::Open, 100),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 5);
        assert_eq!(ids(&ranked), vec!["large", "small"]);
    }

    #[test]
    fn test_higher_score_first() {
        let skills = vec![make_skill("A"), make_skill("B")];
        let jobs = vec![
            make_job("half", &["A", "X"], JobStatus::Open, 0),
            make_job("full", &["A", "B"], JobStatus::Open, 500),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 5);
        assert_eq!(ids(&ranked), vec!["full", "half"]);
    }

    #[test]
    fn test_truncates_to_max_jobs() {
        let skills = vec![make_skill("A"), make_skill("B")];
        let jobs = vec![
            make_job("1", &["A", "X", "Y"], JobStatus::Open, 0),
            make_job("2", &["A", "B"], JobStatus::Open, 10),
            make_job("3", &["A", "X"], JobStatus::Open, 2),
            make_job("4", &["A", "B", "X"], JobStatus::Open, 1),
            make_job("5", &["A", "B"], JobStatus::Open, 4),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 3);
        assert_eq!(ranked.len(), 3);
        assert_eq!(ids(&ranked), vec!["5", "2", "4"]);
    }

    #[test]
    fn test_output_length_is_min_of_limit_and_qualifying() {
        let skills = vec![make_skill("A")];
        let jobs = vec![
            make_job("1", &["A"], JobStatus::Open, 0),
            make_job("2", &["A"], JobStatus::Open, 0),
        ];
        assert_eq!(rank_suggestions(&jobs, &skills, 5).len(), 2);
        assert_eq!(rank_suggestions(&jobs, &skills, 1).len(), 1);
        assert!(rank_suggestions(&jobs, &skills, 0).is_empty());
    }

    #[test]
    fn test_closed_jobs_never_suggested() {
        let skills = vec![make_skill("A")];
        let jobs = vec![
            make_job("closed", &["A"], JobStatus::Closed, 0),
            make_job("open", &["A", "B"], JobStatus::Open, 50),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 5);
        assert_eq!(ids(&ranked), vec!["open"]);
    }

    #[test]
    fn test_empty_skills_yield_empty_output() {
        let jobs = vec![make_job("1", &["A"], JobStatus::Open, 0)];
        assert!(rank_suggestions(&jobs, &[], 3).is_empty());
    }

    #[test]
    fn test_full_tie_keeps_input_order() {
        let skills = vec![make_skill("A")];
        let jobs = vec![
            make_job("first", &["A"], JobStatus::Open, 7),
            make_job("second", &["A"], JobStatus::Open, 7),
            make_job("third", &["A"], JobStatus::Open, 7),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 3);
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_output_respects_comparator_pairwise() {
        let skills = vec![make_skill("A"), make_skill("B"), make_skill("C")];
        let jobs = vec![
            make_job("1", &["A", "Q"], JobStatus::Open, 9),
            make_job("2", &["A", "B", "C"], JobStatus::Open, 40),
            make_job("3", &["B", "C", "Q", "R"], JobStatus::Open, 1),
            make_job("4", &["C"], JobStatus::Open, 3),
            make_job("5", &["A", "Q", "R"], JobStatus::Open, 0),
        ];

        let ranked = rank_suggestions(&jobs, &skills, 10);
        for pair in ranked.windows(2) {
            assert_ne!(compare_scored(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}
