use serde::{Deserialize, Serialize};

use crate::form::controller::{FormController, PersonalField};
use crate::form::section::{SectionItem, SectionKind};

/// One user interaction on the build screen.
///
/// JSON shape: `{"op": "update_item", "index": 0, "item": {"section": "skills", "value": {...}}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FormEvent {
    SetField { field: PersonalField, value: String },
    AddItem { item: SectionItem },
    /// Appends the blank element for `section` (the "Add ..." buttons).
    AddBlank { section: SectionKind },
    UpdateItem { index: usize, item: SectionItem },
    RemoveItem { section: SectionKind, index: usize },
    AddAchievement { entry: usize },
    UpdateAchievement { entry: usize, index: usize, text: String },
    RemoveAchievement { entry: usize, index: usize },
    Reset,
}

/// What became of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOutcome {
    Applied,
    /// Index out of range; the draft is unchanged.
    Ignored,
    /// Would have emptied a list the form keeps non-empty.
    Refused,
}

impl FormController {
    /// Dispatches one event. Removal of the last remaining element of a
    /// section or achievement list is refused here, at the caller level.
    pub fn apply(&mut self, event: FormEvent) -> EventOutcome {
        let applied = match event {
            FormEvent::SetField { field, value } => {
                self.update_scalar_field(field, value);
                true
            }
            FormEvent::AddItem { item } => {
                self.add_list_item(item);
                true
            }
            FormEvent::AddBlank { section } => {
                self.add_list_item(section.blank_item());
                true
            }
            FormEvent::UpdateItem { index, item } => self.update_list_item(index, item),
            FormEvent::RemoveItem { section, index } => {
                if index < section.len(self.draft()) && !self.can_remove(section) {
                    return EventOutcome::Refused;
                }
                self.remove_list_item(section, index)
            }
            FormEvent::AddAchievement { entry } => self.add_achievement(entry),
            FormEvent::UpdateAchievement { entry, index, text } => {
                self.update_achievement(entry, index, text)
            }
            FormEvent::RemoveAchievement { entry, index } => {
                let exists = self
                    .draft()
                    .work_experience
                    .get(entry)
                    .is_some_and(|exp| index < exp.achievements.len());
                if exists && !self.can_remove_achievement(entry) {
                    return EventOutcome::Refused;
                }
                self.remove_achievement(entry, index)
            }
            FormEvent::Reset => {
                self.reset();
                true
            }
        };

        if applied {
            EventOutcome::Applied
        } else {
            EventOutcome::Ignored
        }
    }
}
