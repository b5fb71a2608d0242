//! Page placement for the exported PDF.
//!
//! Coordinates are millimetres from the top-left corner of the page, `y` being
//! the baseline of the first line, which is how the download has always been
//! laid out. Only the header fields are placed: name, title and the wrapped
//! summary. Experience, education, skills, languages, courses and interests
//! are not part of the export.

use serde::{Deserialize, Serialize};

use crate::export::font_metrics::{get_metrics, FontFamily, PT_PER_MM};
use crate::models::ResumeDocument;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size_pt: f32,
}

/// Layout parameters for the single export page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    pub font: FontFamily,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub name: TextStyle,
    pub title: TextStyle,
    pub summary: TextStyle,
    /// Summary lines wrap at this width.
    pub summary_max_width_mm: f32,
    /// Baseline-to-baseline distance as a multiple of the font size.
    pub line_height_factor: f32,
}

/// A4 portrait, Helvetica, name 20pt / title 14pt / summary 12pt at a 20mm
/// left edge, summary wrapped to 170mm.
pub fn default_page_config(font: FontFamily) -> PageConfig {
    PageConfig {
        font,
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        name: TextStyle {
            x_mm: 20.0,
            y_mm: 20.0,
            font_size_pt: 20.0,
        },
        title: TextStyle {
            x_mm: 20.0,
            y_mm: 30.0,
            font_size_pt: 14.0,
        },
        summary: TextStyle {
            x_mm: 20.0,
            y_mm: 40.0,
            font_size_pt: 12.0,
        },
        summary_max_width_mm: 170.0,
        line_height_factor: 1.15,
    }
}

/// A run of lines set in one font size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedText {
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size_pt: f32,
    /// Baseline advance between consecutive lines, in millimetres.
    pub line_height_mm: f32,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportPage {
    pub width_mm: f32,
    pub height_mm: f32,
    pub font: FontFamily,
    pub blocks: Vec<PlacedText>,
}

pub fn layout_page(doc: &ResumeDocument, config: &PageConfig) -> ExportPage {
    let info = &doc.personal_info;
    let metrics = get_metrics(&config.font);

    let block = |style: &TextStyle, lines: Vec<String>| PlacedText {
        x_mm: style.x_mm,
        y_mm: style.y_mm,
        font_size_pt: style.font_size_pt,
        line_height_mm: style.font_size_pt * config.line_height_factor / PT_PER_MM,
        lines,
    };
    let unwrapped = |text: &str| text.split('\n').map(str::to_string).collect::<Vec<_>>();

    let summary_lines = metrics.wrap(
        &info.summary,
        config.summary.font_size_pt,
        config.summary_max_width_mm * PT_PER_MM,
    );

    ExportPage {
        width_mm: config.page_width_mm,
        height_mm: config.page_height_mm,
        font: config.font,
        blocks: vec![
            block(&config.name, unwrapped(&info.name)),
            block(&config.title, unwrapped(&info.title)),
            block(&config.summary, summary_lines),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PageConfig {
        default_page_config(FontFamily::Helvetica)
    }

    fn document(summary: &str) -> ResumeDocument {
        let mut doc = ResumeDocument::blank();
        doc.personal_info.name = "Ada Lovelace".to_string();
        doc.personal_info.title = "Analyst".to_string();
        doc.personal_info.summary = summary.to_string();
        doc
    }

    #[test]
    fn test_default_page_config_sanity() {
        let config = config();
        assert_eq!(config.page_width_mm, 210.0);
        assert_eq!(config.page_height_mm, 297.0);
        assert!(config.summary.x_mm + config.summary_max_width_mm <= config.page_width_mm);
    }

    #[test]
    fn test_three_blocks_at_fixed_positions() {
        let page = layout_page(&document("Short."), &config());
        assert_eq!(page.blocks.len(), 3);

        let name = &page.blocks[0];
        assert_eq!((name.x_mm, name.y_mm, name.font_size_pt), (20.0, 20.0, 20.0));
        assert_eq!(name.lines, vec!["Ada Lovelace"]);

        let title = &page.blocks[1];
        assert_eq!((title.x_mm, title.y_mm, title.font_size_pt), (20.0, 30.0, 14.0));
        assert_eq!(title.lines, vec!["Analyst"]);

        let summary = &page.blocks[2];
        assert_eq!((summary.x_mm, summary.y_mm, summary.font_size_pt), (20.0, 40.0, 12.0));
        assert_eq!(summary.lines, vec!["Short."]);
    }

    #[test]
    fn test_summary_wraps_and_line_height() {
        let summary = "Designed and shipped ".repeat(20);
        let page = layout_page(&document(&summary), &config());
        let block = &page.blocks[2];
        assert!(block.lines.len() > 1);
        // 12pt * 1.15 = 13.8pt ≈ 4.868mm
        assert!((block.line_height_mm - 4.868).abs() < 1e-2);
    }

    #[test]
    fn test_other_sections_are_not_placed() {
        let mut doc = document("Summary");
        doc.work_experience[0].company = "Engine Works".to_string();
        doc.skills[0].name = "Rust".to_string();
        let page = layout_page(&doc, &config());
        let all_text: Vec<&String> = page.blocks.iter().flat_map(|b| b.lines.iter()).collect();
        assert!(all_text.iter().all(|l| !l.contains("Engine Works") && !l.contains("Rust")));
    }
}
