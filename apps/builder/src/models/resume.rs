use serde::{Deserialize, Serialize};

/// The canonical resume record. Field names are the persisted JSON layout and
/// must stay camelCase for compatibility with documents already in storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub languages: Vec<Language>,
    pub work_experience: Vec<WorkExperience>,
    pub courses: Vec<Course>,
    pub interests: Vec<Interest>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    /// Inline `data:` URI, or empty when no picture was chosen.
    pub profile_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
}

/// `location` and `graduation_date` are display-only. The form never fills
/// them but the preview shows them when a stored document carries them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub graduation_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    /// Free text; `"Present"` for a current position.
    pub end_date: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Interest {
    pub name: String,
}

impl Default for WorkExperience {
    /// A blank entry starts with one empty achievement line.
    fn default() -> Self {
        Self {
            position: String::new(),
            company: String::new(),
            location: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            achievements: vec![String::new()],
        }
    }
}

impl ResumeDocument {
    /// The document a fresh build form starts from: blank personal details and
    /// exactly one blank element in every repeating section.
    pub fn blank() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            skills: vec![Skill::default()],
            education: vec![Education::default()],
            languages: vec![Language::default()],
            work_experience: vec![WorkExperience::default()],
            courses: vec![Course::default()],
            interests: vec![Interest::default()],
        }
    }
}
