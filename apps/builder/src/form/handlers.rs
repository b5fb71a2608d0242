use askama::Template;
use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    response::{Html, Redirect},
    Json,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::form::events::{EventOutcome, FormEvent};
use crate::form::image::to_data_uri;
use crate::form::{FormController, Screen, SectionKind};
use crate::models::{ResumeDocument, WorkExperience};
use crate::state::AppState;

/// Multipart field carrying the picture.
const IMAGE_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Views
// ────────────────────────────────────────────────────────────────────────────

/// The draft plus what the UI needs to enforce its keep-one-element policy.
#[derive(Debug, Serialize)]
pub struct DraftView {
    pub revision: u64,
    pub draft: ResumeDocument,
    pub removable_sections: Vec<SectionKind>,
    /// Indices of work entries with more than one achievement.
    pub removable_achievements: Vec<usize>,
}

impl DraftView {
    pub fn of(form: &FormController) -> Self {
        Self {
            revision: form.revision(),
            draft: form.draft().clone(),
            removable_sections: SectionKind::ALL
                .into_iter()
                .filter(|kind| form.can_remove(*kind))
                .collect(),
            removable_achievements: (0..form.draft().work_experience.len())
                .filter(|i| form.can_remove_achievement(*i))
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub outcome: EventOutcome,
    #[serde(flatten)]
    pub view: DraftView,
}

pub struct Removable {
    pub skills: bool,
    pub education: bool,
    pub languages: bool,
    pub work_experience: bool,
    pub courses: bool,
    pub interests: bool,
}

pub struct WorkEntryView<'a> {
    pub index: usize,
    pub exp: &'a WorkExperience,
    pub can_remove_achievement: bool,
}

#[derive(Template)]
#[template(path = "build.html")]
pub struct BuildPage<'a> {
    pub draft: &'a ResumeDocument,
    pub revision: u64,
    pub removable: Removable,
    pub work_entries: Vec<WorkEntryView<'a>>,
}

impl<'a> BuildPage<'a> {
    pub fn new(form: &'a FormController) -> Self {
        let draft = form.draft();
        Self {
            draft,
            revision: form.revision(),
            removable: Removable {
                skills: form.can_remove(SectionKind::Skills),
                education: form.can_remove(SectionKind::Education),
                languages: form.can_remove(SectionKind::Languages),
                work_experience: form.can_remove(SectionKind::WorkExperience),
                courses: form.can_remove(SectionKind::Courses),
                interests: form.can_remove(SectionKind::Interests),
            },
            work_entries: draft
                .work_experience
                .iter()
                .enumerate()
                .map(|(index, exp)| WorkEntryView {
                    index,
                    exp,
                    can_remove_achievement: form.can_remove_achievement(index),
                })
                .collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_build_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let form = state.form.lock().await;
    Ok(Html(BuildPage::new(&form).render()?))
}

/// GET /api/draft
pub async fn handle_get_draft(State(state): State<AppState>) -> Json<DraftView> {
    let form = state.form.lock().await;
    Json(DraftView::of(&form))
}

/// POST /api/draft/events
pub async fn handle_event(
    State(state): State<AppState>,
    payload: Result<Json<FormEvent>, JsonRejection>,
) -> Result<Json<EventResponse>, AppError> {
    let Json(event) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let mut form = state.form.lock().await;
    let outcome = form.apply(event);
    debug!(?outcome, revision = form.revision(), "Form event");

    Ok(Json(EventResponse {
        outcome,
        view: DraftView::of(&form),
    }))
}

/// POST /api/draft/profile-image
///
/// The upload is read to completion before the draft is locked. Anything
/// that is not a readable image leaves the field as it was.
pub async fn handle_profile_image(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Json<DraftView> {
    let data_uri = match multipart {
        Ok(mut multipart) => read_image_upload(&mut multipart).await,
        Err(e) => {
            debug!("Profile image upload rejected: {e}");
            None
        }
    };

    let mut form = state.form.lock().await;
    match data_uri {
        Some(uri) => {
            info!(bytes = uri.len(), "Profile image updated");
            form.set_profile_image(uri);
        }
        None => debug!("Profile image upload ignored"),
    }
    Json(DraftView::of(&form))
}

async fn read_image_upload(multipart: &mut Multipart) -> Option<String> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => return None,
            Err(e) => {
                debug!("Profile image read failed: {e}");
                return None;
            }
        };
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        return match field.bytes().await {
            Ok(bytes) => to_data_uri(content_type.as_deref(), &bytes),
            Err(e) => {
                debug!("Profile image read failed: {e}");
                None
            }
        };
    }
}

/// POST /api/draft/submit
pub async fn handle_submit(State(state): State<AppState>) -> Result<Redirect, AppError> {
    // Snapshot first so the draft is not locked while storage is written.
    let snapshot = state.form.lock().await.clone();
    let screen = snapshot.submit(&state.store).await?;
    info!(
        name = %snapshot.draft().personal_info.name,
        revision = snapshot.revision(),
        "Resume submitted"
    );
    Ok(Redirect::to(screen.path()))
}

/// GET /edit
///
/// Back to the build screen. The form starts blank unless rehydration is
/// switched on in the configuration.
pub async fn handle_edit(State(state): State<AppState>) -> Redirect {
    let stored = if state.config.rehydrate_on_edit {
        match state.store.load().await {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Stored resume unreadable, starting blank: {e}");
                None
            }
        }
    } else {
        None
    };

    let mut form = state.form.lock().await;
    match stored {
        Some(doc) => form.rehydrate(doc),
        None => form.reset(),
    }
    Redirect::to(Screen::Build.path())
}
