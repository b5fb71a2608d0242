//! The closed set of repeating resume sections.
//!
//! Two views of the same thing:
//! - `ListSection` gives typed, compile-time access (`Skill` ↔ `doc.skills`).
//! - `SectionKind` / `SectionItem` name a section at runtime, for events that
//!   arrive from the build screen. An unknown section name fails to
//!   deserialize instead of silently touching nothing.

use serde::{Deserialize, Serialize};

use crate::models::{
    Course, Education, Interest, Language, ResumeDocument, Skill, WorkExperience,
};

/// Maps an element type to the sequence holding it.
pub trait ListSection: Clone + Sized {
    const KIND: SectionKind;

    fn items(doc: &ResumeDocument) -> &Vec<Self>;
    fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<Self>;
}

macro_rules! list_section {
    ($ty:ty, $kind:ident, $field:ident) => {
        impl ListSection for $ty {
            const KIND: SectionKind = SectionKind::$kind;

            fn items(doc: &ResumeDocument) -> &Vec<Self> {
                &doc.$field
            }

            fn items_mut(doc: &mut ResumeDocument) -> &mut Vec<Self> {
                &mut doc.$field
            }
        }
    };
}

list_section!(Skill, Skills, skills);
list_section!(Education, Education, education);
list_section!(Language, Languages, languages);
list_section!(WorkExperience, WorkExperience, work_experience);
list_section!(Course, Courses, courses);
list_section!(Interest, Interests, interests);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Skills,
    Education,
    Languages,
    WorkExperience,
    Courses,
    Interests,
}

impl SectionKind {
    pub const ALL: [SectionKind; 6] = [
        SectionKind::Skills,
        SectionKind::Education,
        SectionKind::Languages,
        SectionKind::WorkExperience,
        SectionKind::Courses,
        SectionKind::Interests,
    ];

    /// Current number of elements of this section in `doc`.
    pub fn len(self, doc: &ResumeDocument) -> usize {
        match self {
            SectionKind::Skills => doc.skills.len(),
            SectionKind::Education => doc.education.len(),
            SectionKind::Languages => doc.languages.len(),
            SectionKind::WorkExperience => doc.work_experience.len(),
            SectionKind::Courses => doc.courses.len(),
            SectionKind::Interests => doc.interests.len(),
        }
    }

    /// The JSON field name, also used in required-field paths.
    pub fn key(self) -> &'static str {
        match self {
            SectionKind::Skills => "skills",
            SectionKind::Education => "education",
            SectionKind::Languages => "languages",
            SectionKind::WorkExperience => "workExperience",
            SectionKind::Courses => "courses",
            SectionKind::Interests => "interests",
        }
    }

    /// The element a fresh "Add ..." button appends.
    pub fn blank_item(self) -> SectionItem {
        match self {
            SectionKind::Skills => SectionItem::Skills(Skill::default()),
            SectionKind::Education => SectionItem::Education(Education::default()),
            SectionKind::Languages => SectionItem::Languages(Language::default()),
            SectionKind::WorkExperience => SectionItem::WorkExperience(WorkExperience::default()),
            SectionKind::Courses => SectionItem::Courses(Course::default()),
            SectionKind::Interests => SectionItem::Interests(Interest::default()),
        }
    }
}

/// One element tagged with the section it belongs to.
///
/// JSON shape: `{"section": "skills", "value": {"name": "Rust"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "section", content = "value", rename_all = "camelCase")]
pub enum SectionItem {
    Skills(Skill),
    Education(Education),
    Languages(Language),
    WorkExperience(WorkExperience),
    Courses(Course),
    Interests(Interest),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_item_json_shape() {
        let item = SectionItem::Skills(Skill {
            name: "Rust".to_string(),
        });
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"section": "skills", "value": {"name": "Rust"}}));

        let parsed: SectionItem = serde_json::from_value(json!({
            "section": "workExperience",
            "value": {
                "position": "Engineer",
                "company": "Acme",
                "location": "Remote",
                "startDate": "2020",
                "endDate": "Present",
                "achievements": ["Shipped"]
            }
        }))
        .unwrap();
        assert!(matches!(parsed, SectionItem::WorkExperience(_)));
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let parsed: Result<SectionItem, _> =
            serde_json::from_value(json!({"section": "hobbies", "value": {"name": "x"}}));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_kind_len_and_typed_access_agree() {
        let doc = ResumeDocument::blank();
        for kind in SectionKind::ALL {
            assert_eq!(kind.len(&doc), 1, "{} should start with one element", kind.key());
        }
        assert_eq!(Skill::items(&doc).len(), SectionKind::Skills.len(&doc));
        assert_eq!(<WorkExperience as ListSection>::KIND, SectionKind::WorkExperience);
    }

    #[test]
    fn test_blank_item_is_tagged_with_its_key() {
        for kind in SectionKind::ALL {
            let value = serde_json::to_value(kind.blank_item()).unwrap();
            assert_eq!(value["section"], kind.key());
        }
    }
}
