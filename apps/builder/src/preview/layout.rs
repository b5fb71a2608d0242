//! Pure mapping from a resume to its on-screen layout.
//!
//! Two columns: a sidebar (picture, skills, education, languages, interests)
//! and a main column (header, contact block, experience timeline, courses).
//! Every list keeps document order. There is no pagination.

use serde::Serialize;

use crate::models::ResumeDocument;

const PROFILE_HOST: &str = "linkedin.com/in/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLayout {
    pub sidebar: Sidebar,
    pub main: MainColumn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sidebar {
    pub profile_image: ImageSource,
    pub skills: Vec<String>,
    pub education: Vec<EducationSummary>,
    pub languages: Vec<LanguageLine>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "src", rename_all = "snake_case")]
pub enum ImageSource {
    /// The uploaded picture, as stored.
    Inline(String),
    /// Stand-in reference used when no picture was uploaded.
    Placeholder(String),
}

impl ImageSource {
    pub fn src(&self) -> &str {
        match self {
            ImageSource::Inline(src) | ImageSource::Placeholder(src) => src,
        }
    }
}

/// Graduation year is not part of the summary; location and date are shown
/// (as empty lines) even though the form never fills them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EducationSummary {
    pub degree: String,
    pub institution: String,
    pub location: String,
    pub graduation_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageLine {
    pub name: String,
    pub proficiency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainColumn {
    pub header: Header,
    pub contact: ContactBlock,
    pub experience: Vec<TimelineEntry>,
    pub courses: Vec<CourseLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub name: String,
    pub title: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactBlock {
    pub email: String,
    pub location: String,
    pub phone: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub position: String,
    pub company: String,
    /// `"<start> - <end>"`, verbatim.
    pub period: String,
    pub location: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseLine {
    pub name: String,
    pub provider: String,
}

/// Lower-cases the name and drops its FIRST space only.
///
/// `"Jane Mary Doe"` becomes `"janemary doe"`: later spaces survive. This is
/// the established URL format and is kept as-is.
pub fn profile_slug(name: &str) -> String {
    name.to_lowercase().replacen(' ', "", 1)
}

pub fn profile_url(name: &str) -> String {
    format!("{PROFILE_HOST}{}", profile_slug(name))
}

pub fn render_layout(doc: &ResumeDocument, placeholder_image: &str) -> RenderedLayout {
    let info = &doc.personal_info;

    let profile_image = if info.profile_image.is_empty() {
        ImageSource::Placeholder(placeholder_image.to_string())
    } else {
        ImageSource::Inline(info.profile_image.clone())
    };

    let sidebar = Sidebar {
        profile_image,
        skills: doc.skills.iter().map(|s| s.name.clone()).collect(),
        education: doc
            .education
            .iter()
            .map(|e| EducationSummary {
                degree: e.degree.clone(),
                institution: e.institution.clone(),
                location: e.location.clone().unwrap_or_default(),
                graduation_date: e.graduation_date.clone().unwrap_or_default(),
            })
            .collect(),
        languages: doc
            .languages
            .iter()
            .map(|l| LanguageLine {
                name: l.name.clone(),
                proficiency: l.proficiency.clone(),
            })
            .collect(),
        interests: doc.interests.iter().map(|i| i.name.clone()).collect(),
    };

    let main = MainColumn {
        header: Header {
            name: info.name.clone(),
            title: info.title.clone(),
            summary: info.summary.clone(),
        },
        contact: ContactBlock {
            email: info.email.clone(),
            location: info.location.clone(),
            phone: info.phone.clone(),
            profile_url: profile_url(&info.name),
        },
        experience: doc
            .work_experience
            .iter()
            .map(|w| TimelineEntry {
                position: w.position.clone(),
                company: w.company.clone(),
                period: format!("{} - {}", w.start_date, w.end_date),
                location: w.location.clone(),
                achievements: w.achievements.clone(),
            })
            .collect(),
        courses: doc
            .courses
            .iter()
            .map(|c| CourseLine {
                name: c.name.clone(),
                provider: c.provider.clone(),
            })
            .collect(),
    };

    RenderedLayout { sidebar, main }
}
