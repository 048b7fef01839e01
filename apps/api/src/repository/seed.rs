//! The mock dataset served by the in-memory store.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::models::current_job::{CurrentJob, EngagementStatus, PaymentStatus};
use crate::models::job::{ExperienceLevel, Job, JobStatus, JobType, Salary, SalaryPeriod};
use crate::models::profile::Endorsement;
use crate::models::skill::Skill;

/// Address owning the seeded profile.
pub const DEMO_ADDRESS: &str = "0x1234567890123456789012345678901234567890";
pub const DEMO_REPUTATION: u32 = 87;

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .unwrap_or_default()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn usd(min: u64, max: u64, period: SalaryPeriod) -> Salary {
    Salary {
        min,
        max,
        currency: "USD".to_string(),
        period,
    }
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill {
            id: "1".to_string(),
            name: "React Development".to_string(),
            description: "Modern React applications with hooks, context and state management."
                .to_string(),
            proof_url: Some("https://github.com/username/react-project".to_string()),
            weight: 85,
            verified: true,
            created_at: ts(2024, 1, 15, 10, 30),
        },
        Skill {
            id: "2".to_string(),
            name: "TypeScript".to_string(),
            description: "Type-safe JavaScript development.".to_string(),
            proof_url: Some("https://github.com/username/typescript-project".to_string()),
            weight: 78,
            verified: true,
            created_at: ts(2024, 1, 20, 14, 15),
        },
        Skill {
            id: "3".to_string(),
            name: "UI/UX Design".to_string(),
            description: "User-centered designs and prototypes.".to_string(),
            proof_url: None,
            weight: 65,
            verified: false,
            created_at: ts(2024, 2, 1, 9, 45),
        },
        Skill {
            id: "4".to_string(),
            name: "Node.js Backend".to_string(),
            description: "Scalable backend services with Node.js and Express.".to_string(),
            proof_url: Some("https://github.com/username/api-project".to_string()),
            weight: 72,
            verified: true,
            created_at: ts(2024, 2, 10, 16, 20),
        },
    ]
}

pub fn endorsements() -> Vec<Endorsement> {
    vec![
        Endorsement {
            id: "1".to_string(),
            from_address: "0xabcdef1234567890abcdef1234567890abcdef12".to_string(),
            to_address: DEMO_ADDRESS.to_string(),
            project_id: "ecommerce-website".to_string(),
            message: "Excellent work on the e-commerce platform. Delivered on time.".to_string(),
            rating: 5,
            created_at: ts(2024, 1, 25, 12, 0),
        },
        Endorsement {
            id: "2".to_string(),
            from_address: "0x9876543210987654321098765432109876543210".to_string(),
            to_address: DEMO_ADDRESS.to_string(),
            project_id: "mobile-app".to_string(),
            message: "Outstanding React Native skills. The app performance is excellent."
                .to_string(),
            rating: 5,
            created_at: ts(2024, 2, 5, 15, 30),
        },
        Endorsement {
            id: "3".to_string(),
            from_address: "0xfedcba0987654321fedcba0987654321fedcba09".to_string(),
            to_address: DEMO_ADDRESS.to_string(),
            project_id: "dashboard-redesign".to_string(),
            message: "Great collaboration and problem-solving. A beautiful dashboard.".to_string(),
            rating: 4,
            created_at: ts(2024, 2, 15, 11, 45),
        },
    ]
}

pub fn jobs() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Senior React Developer".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: "San Francisco, CA".to_string(),
            job_type: JobType::FullTime,
            salary: usd(120_000, 160_000, SalaryPeriod::Year),
            description: "Build and maintain the customer-facing web platform.".to_string(),
            requirements: strings(&[
                "5+ years of React experience",
                "Strong TypeScript skills",
                "Experience with state management",
            ]),
            skills_required: strings(&["React Development", "TypeScript", "JavaScript"]),
            posted_by: "0xabcdef1234567890abcdef1234567890abcdef12".to_string(),
            posted_at: ts(2024, 2, 20, 10, 0),
            applicants: 23,
            status: JobStatus::Open,
            tags: strings(&["frontend", "react", "typescript"]),
            experience_level: ExperienceLevel::Senior,
        },
        Job {
            id: "2".to_string(),
            title: "UI/UX Designer".to_string(),
            company: "DesignHub".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Contract,
            salary: usd(60, 90, SalaryPeriod::Hour),
            description: "Design flows for a DeFi dashboard.".to_string(),
            requirements: strings(&["Portfolio of shipped products", "Figma proficiency"]),
            skills_required: strings(&["UI/UX Design", "Figma", "Prototyping"]),
            posted_by: "0x9876543210987654321098765432109876543210".to_string(),
            posted_at: ts(2024, 2, 18, 9, 0),
            applicants: 12,
            status: JobStatus::Open,
            tags: strings(&["design", "figma"]),
            experience_level: ExperienceLevel::Mid,
        },
        Job {
            id: "3".to_string(),
            title: "Full Stack Engineer".to_string(),
            company: "Midnight Labs".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::Remote,
            salary: usd(130_000, 170_000, SalaryPeriod::Year),
            description: "Own features end to end across a TypeScript stack.".to_string(),
            requirements: strings(&["Node.js in production", "React on the front end"]),
            skills_required: strings(&["React Development", "Node.js Backend", "TypeScript"]),
            posted_by: "0xfedcba0987654321fedcba0987654321fedcba09".to_string(),
            posted_at: ts(2024, 2, 22, 14, 0),
            applicants: 31,
            status: JobStatus::Open,
            tags: strings(&["fullstack", "web3"]),
            experience_level: ExperienceLevel::Mid,
        },
        Job {
            id: "4".to_string(),
            title: "Smart Contract Auditor".to_string(),
            company: "SecureChain".to_string(),
            location: "New York, NY".to_string(),
            job_type: JobType::Contract,
            salary: usd(8_000, 15_000, SalaryPeriod::Project),
            description: "Review zero-knowledge contract code before launch.".to_string(),
            requirements: strings(&["Audit reports you can share"]),
            skills_required: strings(&["Solidity", "Security Auditing", "Rust"]),
            posted_by: "0xabcdef1234567890abcdef1234567890abcdef12".to_string(),
            posted_at: ts(2024, 2, 10, 8, 30),
            applicants: 8,
            status: JobStatus::Open,
            tags: strings(&["security", "blockchain"]),
            experience_level: ExperienceLevel::Lead,
        },
        Job {
            id: "5".to_string(),
            title: "Frontend Developer".to_string(),
            company: "StartupXYZ".to_string(),
            location: "Austin, TX".to_string(),
            job_type: JobType::PartTime,
            salary: usd(45, 65, SalaryPeriod::Hour),
            description: "Ship landing pages and the onboarding flow.".to_string(),
            requirements: strings(&["2+ years building React apps"]),
            skills_required: strings(&["React Development", "JavaScript", "CSS"]),
            posted_by: "0x9876543210987654321098765432109876543210".to_string(),
            posted_at: ts(2024, 2, 12, 11, 0),
            applicants: 8,
            status: JobStatus::Open,
            tags: strings(&["frontend", "startup"]),
            experience_level: ExperienceLevel::Entry,
        },
        Job {
            id: "6".to_string(),
            title: "Backend API Developer".to_string(),
            company: "DataFlow Inc".to_string(),
            location: "Remote".to_string(),
            job_type: JobType::FullTime,
            salary: usd(110_000, 140_000, SalaryPeriod::Year),
            description: "Position filled.".to_string(),
            requirements: strings(&["REST API design"]),
            skills_required: strings(&["Node.js Backend", "TypeScript"]),
            posted_by: "0xfedcba0987654321fedcba0987654321fedcba09".to_string(),
            posted_at: ts(2024, 1, 28, 13, 0),
            applicants: 45,
            status: JobStatus::Closed,
            tags: strings(&["backend", "api"]),
            experience_level: ExperienceLevel::Mid,
        },
    ]
}

pub fn current_jobs() -> Vec<CurrentJob> {
    vec![
        CurrentJob {
            id: "cj-1".to_string(),
            title: "E-commerce Platform Redesign".to_string(),
            company: "ShopFast".to_string(),
            location: "Remote".to_string(),
            salary: usd(5_000, 8_000, SalaryPeriod::Project),
            skills_required: strings(&["React Development", "TypeScript", "UI/UX Design"]),
            status: EngagementStatus::InProgress,
            application_date: date(2024, 1, 10),
            start_date: Some(date(2024, 1, 20)),
            deadline: Some(date(2024, 3, 20)),
            progress: 65,
            payment_status: PaymentStatus::Partial,
            total_earned: 3_200,
            last_update: ts(2024, 2, 25, 16, 0),
            client_feedback: Some("Great progress so far.".to_string()),
            job_id: None,
        },
        CurrentJob {
            id: "cj-2".to_string(),
            title: "Mobile App Development".to_string(),
            company: "AppWorks".to_string(),
            location: "Remote".to_string(),
            salary: usd(70, 90, SalaryPeriod::Hour),
            skills_required: strings(&["React Development", "TypeScript"]),
            status: EngagementStatus::Completed,
            application_date: date(2023, 11, 5),
            start_date: Some(date(2023, 11, 15)),
            deadline: Some(date(2024, 1, 31)),
            progress: 100,
            payment_status: PaymentStatus::Completed,
            total_earned: 12_600,
            last_update: ts(2024, 2, 2, 10, 0),
            client_feedback: Some("Outstanding work, delivered early.".to_string()),
            job_id: None,
        },
        CurrentJob {
            id: "cj-3".to_string(),
            title: "Senior React Developer".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: "San Francisco, CA".to_string(),
            salary: usd(120_000, 160_000, SalaryPeriod::Year),
            skills_required: strings(&["React Development", "TypeScript", "JavaScript"]),
            status: EngagementStatus::Interviewing,
            application_date: date(2024, 2, 21),
            start_date: None,
            deadline: None,
            progress: 0,
            payment_status: PaymentStatus::Pending,
            total_earned: 0,
            last_update: ts(2024, 2, 24, 9, 0),
            client_feedback: None,
            job_id: Some("1".to_string()),
        },
        CurrentJob {
            id: "cj-4".to_string(),
            title: "API Integration".to_string(),
            company: "DataFlow Inc".to_string(),
            location: "Remote".to_string(),
            salary: usd(3_000, 4_000, SalaryPeriod::Project),
            skills_required: strings(&["Node.js Backend"]),
            status: EngagementStatus::Applied,
            application_date: date(2024, 2, 26),
            start_date: None,
            deadline: None,
            progress: 0,
            payment_status: PaymentStatus::Pending,
            total_earned: 0,
            last_update: ts(2024, 2, 26, 12, 0),
            client_feedback: None,
            job_id: None,
        },
    ]
}
