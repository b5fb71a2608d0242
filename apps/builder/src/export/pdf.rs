use chrono::Utc;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::export::font_metrics::PT_PER_MM;
use crate::export::page::{layout_page, ExportPage, PageConfig};
use crate::models::ResumeDocument;

const FONT_RESOURCE: &str = "F1";
const FILENAME_SUFFIX: &str = "_Resume.pdf";

/// Download name: the person's name with its FIRST space turned into an
/// underscore, then `_Resume.pdf`. Later spaces are kept.
pub fn export_filename(name: &str) -> String {
    format!("{}{FILENAME_SUFFIX}", name.replacen(' ', "_", 1))
}

/// Lays out and encodes the resume as a single-page PDF.
pub fn export_pdf(doc: &ResumeDocument, config: &PageConfig) -> Result<Vec<u8>, lopdf::Error> {
    let page = layout_page(doc, config);
    encode_page(&page, &doc.personal_info.name)
}

/// Writes an `ExportPage` as a PDF. Content streams are left uncompressed.
pub fn encode_page(page: &ExportPage, title: &str) -> Result<Vec<u8>, lopdf::Error> {
    let mut doc = Document::with_version("1.3");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => page.font.base_font(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let content = Content {
        operations: text_operations(page),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let width_pt = page.width_mm * PT_PER_MM;
    let height_pt = page.height_mm * PT_PER_MM;
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::String(utf16_text_string(title), StringFormat::Hexadecimal),
        "Producer" => Object::string_literal(concat!("builder ", env!("CARGO_PKG_VERSION"))),
        "CreationDate" => Object::string_literal(Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// One BT/ET text object per block; each line is placed by moving the text
/// origin down one line height from the previous baseline.
fn text_operations(page: &ExportPage) -> Vec<Operation> {
    let height_pt = page.height_mm * PT_PER_MM;
    let mut ops = Vec::new();

    for block in &page.blocks {
        let x = block.x_mm * PT_PER_MM;
        let y = height_pt - block.y_mm * PT_PER_MM;
        let leading = block.line_height_mm * PT_PER_MM;

        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), block.font_size_pt.into()],
        ));
        ops.push(Operation::new("Td", vec![x.into(), y.into()]));
        for (i, line) in block.lines.iter().enumerate() {
            if i > 0 {
                ops.push(Operation::new("Td", vec![0.into(), (-leading).into()]));
            }
            ops.push(Operation::new(
                "Tj",
                vec![Object::String(win_ansi_bytes(line), StringFormat::Literal)],
            ));
        }
        ops.push(Operation::new("ET", vec![]));
    }
    ops
}

/// Document metadata text string: UTF-16BE behind a byte order mark, so any
/// name survives in the viewer's title bar.
pub fn utf16_text_string(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xfe, 0xff];
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    bytes
}

/// Encodes text for the WinAnsi-encoded base font. Characters the encoding
/// cannot represent become `?`.
pub fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    match c {
        '\u{20}'..='\u{7e}' => c as u8,
        '\u{a0}'..='\u{ff}' => c as u32 as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}
