pub mod education;
pub mod profile;
pub mod project;
pub mod skill;
pub mod work;

pub use education::Education;
pub use profile::{Profile, ProfileAggregate};
pub use project::{Project, ProjectSkillRow, ProjectWithSkills};
pub use skill::{Skill, TopSkill};
pub use work::WorkExperience;
