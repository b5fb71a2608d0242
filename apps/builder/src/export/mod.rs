// PDF download: fixed page placement of the header fields, glyph metrics for
// wrapping the summary, and the lopdf encoder behind GET /result/pdf.

pub mod font_metrics;
pub mod handlers;
pub mod page;
pub mod pdf;

pub use font_metrics::FontFamily;
pub use page::{default_page_config, PageConfig};
