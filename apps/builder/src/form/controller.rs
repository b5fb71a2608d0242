use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::AppError;
use crate::form::section::{ListSection, SectionItem, SectionKind};
use crate::form::validation::missing_required_fields;
use crate::models::{ResumeDocument, WorkExperience};
use crate::storage::PersistenceBridge;

/// A leaf of `personalInfo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Title,
    Email,
    Phone,
    Location,
    Summary,
    ProfileImage,
}

/// Where the client should go after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Build,
    Result,
}

impl Screen {
    pub fn path(self) -> &'static str {
        match self {
            Screen::Build => "/",
            Screen::Result => "/result",
        }
    }
}

/// Owns the draft resume while the build screen is open.
///
/// Every primitive either changes the draft and bumps `revision`, or leaves
/// both untouched. Out-of-range indices are no-ops, never errors.
#[derive(Debug, Clone)]
pub struct FormController {
    draft: ResumeDocument,
    revision: u64,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            draft: ResumeDocument::blank(),
            revision: 0,
        }
    }

    pub fn draft(&self) -> &ResumeDocument {
        &self.draft
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // ── scalar fields ───────────────────────────────────────────────────────

    pub fn update_scalar_field(&mut self, field: PersonalField, value: impl Into<String>) {
        let info = &mut self.draft.personal_info;
        let slot = match field {
            PersonalField::Name => &mut info.name,
            PersonalField::Title => &mut info.title,
            PersonalField::Email => &mut info.email,
            PersonalField::Phone => &mut info.phone,
            PersonalField::Location => &mut info.location,
            PersonalField::Summary => &mut info.summary,
            PersonalField::ProfileImage => &mut info.profile_image,
        };
        *slot = value.into();
        self.touch();
    }

    /// Stores an already-encoded `data:` URI as the profile picture.
    pub fn set_profile_image(&mut self, data_uri: String) {
        self.update_scalar_field(PersonalField::ProfileImage, data_uri);
    }

    // ── typed list primitives ───────────────────────────────────────────────

    pub fn add<T: ListSection>(&mut self, item: T) {
        T::items_mut(&mut self.draft).push(item);
        trace!(section = T::KIND.key(), "List item added");
        self.touch();
    }

    /// Replaces the element at `index` wholesale. Returns whether anything changed.
    pub fn update<T: ListSection>(&mut self, index: usize, item: T) -> bool {
        match T::items_mut(&mut self.draft).get_mut(index) {
            Some(slot) => {
                *slot = item;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Removes the element at `index`. Does not protect the last element;
    /// callers check `can_remove` first.
    pub fn remove<T: ListSection>(&mut self, index: usize) -> bool {
        if index >= T::items(&self.draft).len() {
            return false;
        }
        T::items_mut(&mut self.draft).remove(index);
        trace!(section = T::KIND.key(), index, "List item removed");
        self.touch();
        true
    }

    // ── section-tagged list primitives ──────────────────────────────────────

    pub fn add_list_item(&mut self, item: SectionItem) {
        match item {
            SectionItem::Skills(v) => self.add(v),
            SectionItem::Education(v) => self.add(v),
            SectionItem::Languages(v) => self.add(v),
            SectionItem::WorkExperience(v) => self.add(v),
            SectionItem::Courses(v) => self.add(v),
            SectionItem::Interests(v) => self.add(v),
        }
    }

    pub fn update_list_item(&mut self, index: usize, item: SectionItem) -> bool {
        match item {
            SectionItem::Skills(v) => self.update(index, v),
            SectionItem::Education(v) => self.update(index, v),
            SectionItem::Languages(v) => self.update(index, v),
            SectionItem::WorkExperience(v) => self.update(index, v),
            SectionItem::Courses(v) => self.update(index, v),
            SectionItem::Interests(v) => self.update(index, v),
        }
    }

    pub fn remove_list_item(&mut self, section: SectionKind, index: usize) -> bool {
        use crate::models::{Course, Education, Interest, Language, Skill};
        match section {
            SectionKind::Skills => self.remove::<Skill>(index),
            SectionKind::Education => self.remove::<Education>(index),
            SectionKind::Languages => self.remove::<Language>(index),
            SectionKind::WorkExperience => self.remove::<WorkExperience>(index),
            SectionKind::Courses => self.remove::<Course>(index),
            SectionKind::Interests => self.remove::<Interest>(index),
        }
    }

    /// The UI keeps at least one element per section while editing.
    pub fn can_remove(&self, section: SectionKind) -> bool {
        section.len(&self.draft) > 1
    }

    // ── achievements of one work entry ──────────────────────────────────────
    //
    // Each helper builds the replacement entry and goes through `update`, the
    // same way the form merges unchanged fields before replacing an element.

    fn work_entry(&self, entry: usize) -> Option<WorkExperience> {
        self.draft.work_experience.get(entry).cloned()
    }

    pub fn add_achievement(&mut self, entry: usize) -> bool {
        let Some(mut exp) = self.work_entry(entry) else {
            return false;
        };
        exp.achievements.push(String::new());
        self.update(entry, exp)
    }

    pub fn update_achievement(&mut self, entry: usize, index: usize, text: String) -> bool {
        let Some(mut exp) = self.work_entry(entry) else {
            return false;
        };
        let Some(slot) = exp.achievements.get_mut(index) else {
            return false;
        };
        *slot = text;
        self.update(entry, exp)
    }

    pub fn remove_achievement(&mut self, entry: usize, index: usize) -> bool {
        let Some(mut exp) = self.work_entry(entry) else {
            return false;
        };
        if index >= exp.achievements.len() {
            return false;
        }
        exp.achievements.remove(index);
        self.update(entry, exp)
    }

    pub fn can_remove_achievement(&self, entry: usize) -> bool {
        self.draft
            .work_experience
            .get(entry)
            .is_some_and(|exp| exp.achievements.len() > 1)
    }

    // ── whole-draft operations ──────────────────────────────────────────────

    /// Back to blank defaults, as when the build screen is opened.
    pub fn reset(&mut self) {
        self.draft = ResumeDocument::blank();
        self.touch();
    }

    /// Loads a previously stored document into the form.
    pub fn rehydrate(&mut self, document: ResumeDocument) {
        self.draft = document;
        self.touch();
    }

    pub fn missing_required_fields(&self) -> Vec<String> {
        missing_required_fields(&self.draft)
    }

    /// Hands a snapshot of the draft to storage and points the client at the
    /// result screen. Refuses while any required field is empty.
    pub async fn submit(&self, store: &PersistenceBridge) -> Result<Screen, AppError> {
        let missing = self.missing_required_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }
        let snapshot = self.draft.clone();
        store.save(&snapshot).await?;
        Ok(Screen::Result)
    }
}
