pub mod resume;

pub use resume::{
    Course, Education, Interest, Language, ResumeDocument, Skill, WorkExperience,
};
