pub mod content;
pub mod geometry;
pub mod section;

pub use content::{
    Certification, Contact, EducationEntry, ExperienceEntry, Profile, Project, SkillCategory,
};
pub use geometry::PageSize;
pub use section::{Section, SectionParseError};
