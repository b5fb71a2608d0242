// Result screen: the stored resume as a two-column layout, as JSON or HTML.

pub mod handlers;
pub mod layout;

use tracing::warn;

use crate::models::ResumeDocument;
use crate::storage::PersistenceBridge;

/// Reads the submitted resume for the result screen. An unreadable slot is
/// logged and treated like an empty one.
pub async fn load_snapshot(store: &PersistenceBridge) -> Option<ResumeDocument> {
    match store.load().await {
        Ok(doc) => doc,
        Err(e) => {
            warn!(slot = store.slot(), "Stored resume unreadable, treating as missing: {e}");
            None
        }
    }
}
