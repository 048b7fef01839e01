pub mod current_job;
pub mod job;
pub mod profile;
pub mod skill;
