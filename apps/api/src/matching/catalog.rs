use crate::models::job::{ExperienceLevel, Job, JobType};

/// Browse filter for the job board. `None` fields do not constrain.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub search: Option<String>,
    pub job_type: Option<JobType>,
    pub level: Option<ExperienceLevel>,
}

impl JobQuery {
    /// Builds a query from raw parameters where `"all"` or blank means "any".
    pub fn from_params(
        search: Option<&str>,
        job_type: Option<&str>,
        level: Option<&str>,
    ) -> Result<Self, String> {
        Ok(Self {
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
            job_type: any_or(job_type)?,
            level: any_or(level)?,
        })
    }

    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none() && self.job_type.is_none() && self.level.is_none()
    }

    pub fn matches(&self, job: &Job) -> bool {
        if !job.is_open() {
            return false;
        }
        if self.job_type.is_some_and(|t| t != job.job_type) {
            return false;
        }
        if self.level.is_some_and(|l| l != job.experience_level) {
            return false;
        }
        match self.search.as_deref() {
            None => true,
            Some(term) => {
                job.title.to_lowercase().contains(term)
                    || job.company.to_lowercase().contains(term)
                    || job
                        .skills_required
                        .iter()
                        .any(|s| s.to_lowercase().contains(term))
                    || job.tags.iter().any(|t| t.to_lowercase().contains(term))
            }
        }
    }
}

fn any_or<T: std::str::FromStr<Err = String>>(raw: Option<&str>) -> Result<Option<T>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("all") => Ok(None),
        Some(v) => v.parse().map(Some),
    }
}

/// Open jobs matching `query`, in catalog order.
pub fn filter_jobs<'a>(jobs: &'a [Job], query: &JobQuery) -> Vec<&'a Job> {
    jobs.iter().filter(|job| query.matches(job)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::matcher::tests::make_job;
    use crate::models::job::JobStatus;

    fn catalog() -> Vec<Job> {
        let mut react = make_job("1", &["React Development", "TypeScript"], JobStatus::Open, 23);
        react.title = "Senior React Developer".to_string();
        react.company = "TechCorp".to_string();
        react.experience_level = ExperienceLevel::Senior;
        react.tags = vec!["frontend".to_string()];

        let mut design = make_job("2", &["UI/UX Design"], JobStatus::Open, 5);
        design.title = "Product Designer".to_string();
        design.company = "DesignHub".to_string();
        design.job_type = JobType::Contract;

        let mut closed = make_job("3", &["React Development"], JobStatus::Closed, 40);
        closed.title = "React Lead".to_string();

        vec![react, design, closed]
    }

    fn ids(jobs: Vec<&Job>) -> Vec<&str> {
        jobs.into_iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_unfiltered_returns_open_jobs_only() {
        let jobs = catalog();
        let query = JobQuery::from_params(None, Some("all"), Some("all")).unwrap();
        assert!(query.is_unfiltered());
        assert_eq!(ids(filter_jobs(&jobs, &query)), vec!["1", "2"]);
    }

    #[test]
    fn test_search_hits_skills_and_tags() {
        let jobs = catalog();
        let by_skill = JobQuery::from_params(Some("typescript"), None, None).unwrap();
        assert_eq!(ids(filter_jobs(&jobs, &by_skill)), vec!["1"]);

        let by_tag = JobQuery::from_params(Some("FRONT"), None, None).unwrap();
        assert_eq!(ids(filter_jobs(&jobs, &by_tag)), vec!["1"]);

        let by_company = JobQuery::from_params(Some("designhub"), None, None).unwrap();
        assert_eq!(ids(filter_jobs(&jobs, &by_company)), vec!["2"]);
    }

    #[test]
    fn test_type_and_level_filters() {
        let jobs = catalog();
        let contract = JobQuery::from_params(None, Some("Contract"), None).unwrap();
        assert_eq!(ids(filter_jobs(&jobs, &contract)), vec!["2"]);

        let senior = JobQuery::from_params(None, None, Some("Senior")).unwrap();
        assert_eq!(ids(filter_jobs(&jobs, &senior)), vec!["1"]);

        let none = JobQuery::from_params(Some("react"), Some("Contract"), None).unwrap();
        assert!(filter_jobs(&jobs, &none).is_empty());
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        assert!(JobQuery::from_params(None, Some("Freelance"), None).is_err());
    }
}
