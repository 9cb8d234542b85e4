//! Implements DocumentExporterPort with printpdf.
//!
//! One paragraph block per "\n\n"-separated segment, built-in Helvetica, A4 pages.
//! Lines are wrapped to the text width and a new page starts when the cursor
//! reaches the bottom margin. The text itself is passed through untouched.

use crate::domain::DomainError;
use crate::ports::DocumentExporterPort;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::{debug, info};

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const PLAN_FILE_NAME: &str = "Workout_Diet_Plan.pdf";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const FONT_SIZE_PT: f32 = 11.0;
const LINE_HEIGHT_MM: f32 = 5.5;
const PARAGRAPH_GAP_MM: f32 = 3.5;
/// Helvetica 11pt averages ~1.9 mm per glyph; 170 mm of text width fits about 88.
const MAX_LINE_CHARS: usize = 88;

/// A line placed on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub y_mm: f32,
    pub bold: bool,
}

/// PDF exporter with library-default styling.
pub struct PdfExporter {
    title: String,
}

impl PdfExporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Page-by-page layout of `text`. Always at least one page.
    pub fn layout(text: &str) -> Vec<Vec<PlacedLine>> {
        let top = PAGE_HEIGHT_MM - MARGIN_MM;
        let mut pages: Vec<Vec<PlacedLine>> = vec![Vec::new()];
        let mut y = top;

        for paragraph in text.split("\n\n") {
            for source_line in paragraph.lines() {
                let bold = is_heading(source_line);
                for line in wrap(source_line) {
                    if y < MARGIN_MM {
                        pages.push(Vec::new());
                        y = top;
                    }
                    if let Some(page) = pages.last_mut() {
                        page.push(PlacedLine {
                            text: line,
                            y_mm: y,
                            bold,
                        });
                    }
                    y -= LINE_HEIGHT_MM;
                }
            }
            y -= PARAGRAPH_GAP_MM;
        }
        pages
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new("Workout & Diet Plan")
    }
}

/// All-caps lines (section headers) are set in bold.
fn is_heading(line: &str) -> bool {
    line.chars().any(char::is_alphabetic) && !line.chars().any(char::is_lowercase)
}

/// Wrap to the text width; words longer than the width are broken.
/// A blank line yields a single empty line.
fn wrap(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }
    textwrap::wrap(line, MAX_LINE_CHARS)
        .into_iter()
        .map(|l| l.into_owned())
        .collect()
}

impl DocumentExporterPort for PdfExporter {
    /// Render `text` with the built-in Helvetica faces. These fonts are WinAnsi
    /// (Windows-1252) encoded, so characters outside that set are dropped from the output.
    fn export(&self, text: &str) -> Result<Vec<u8>, DomainError> {
        let pages = Self::layout(text);
        let (doc, first_page, first_layer) = PdfDocument::new(
            self.title.as_str(),
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DomainError::Export(format!("load font: {}", e)))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DomainError::Export(format!("load font: {}", e)))?;

        for (i, lines) in pages.iter().enumerate() {
            let layer = if i == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
                doc.get_page(page).get_layer(layer)
            };
            for line in lines.iter().filter(|l| !l.text.is_empty()) {
                let font = if line.bold { &bold } else { &regular };
                layer.use_text(
                    line.text.as_str(),
                    FONT_SIZE_PT,
                    Mm(MARGIN_MM),
                    Mm(line.y_mm),
                    font,
                );
            }
            debug!(page = i + 1, lines = lines.len(), "laid out PDF page");
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| DomainError::Export(format!("write PDF: {}", e)))?;
        info!(pages = pages.len(), bytes = bytes.len(), "plan exported to PDF");
        Ok(bytes)
    }

    fn mime_type(&self) -> &'static str {
        PDF_MIME_TYPE
    }

    fn file_name(&self) -> &'static str {
        PLAN_FILE_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pages: &[Vec<PlacedLine>]) -> Vec<&str> {
        pages.iter().flatten().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_layout_short_line_untouched() {
        let pages = PdfExporter::layout("Sleep 7–8 hours");
        assert_eq!(texts(&pages), vec!["Sleep 7–8 hours"]);
    }

    #[test]
    fn test_layout_blank_line_is_one_empty_line() {
        let pages = PdfExporter::layout("Dinner\n\n\nFINAL ADVICE");
        assert_eq!(texts(&pages), vec!["Dinner", "", "FINAL ADVICE"]);
    }

    #[test]
    fn test_layout_wraps_long_line_on_words() {
        let line = vec!["squats"; 40].join(" ");
        let pages = PdfExporter::layout(&line);
        let lines = texts(&pages);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= MAX_LINE_CHARS));
        assert!(lines.iter().all(|l| l.split(' ').all(|w| w == "squats")));
    }

    #[test]
    fn test_layout_breaks_word_longer_than_width() {
        let long = "a".repeat(MAX_LINE_CHARS * 2 + 10);
        let pages = PdfExporter::layout(&format!("x {}", long));
        let lines = texts(&pages);
        assert!(lines.len() >= 3);
        assert!(lines.iter().all(|l| l.chars().count() <= MAX_LINE_CHARS));
        assert_eq!(lines.concat().replace(' ', ""), format!("x{}", long));
    }

    #[test]
    fn test_layout_empty_is_one_page() {
        let pages = PdfExporter::layout("");
        assert_eq!(pages.len(), 1);
        assert!(pages[0].iter().all(|l| l.text.is_empty()));
    }

    #[test]
    fn test_layout_paginates() {
        let text = vec!["A paragraph line."; 200].join("\n\n");
        let pages = PdfExporter::layout(&text);
        assert!(pages.len() > 1);
        for page in &pages {
            for line in page {
                assert!(line.y_mm >= MARGIN_MM);
            }
        }
    }

    #[test]
    fn test_headings_bold() {
        let pages = PdfExporter::layout("DIET PLAN\nBreakfast: oats");
        assert!(pages[0][0].bold);
        assert!(!pages[0][1].bold);
    }

    #[test]
    fn test_export_empty_string_is_valid_pdf() {
        let bytes = PdfExporter::default().export("").unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_plan_text() {
        let exporter = PdfExporter::default();
        let bytes = exporter
            .export("PROFILE OVERVIEW\n\nMonday – Push-ups 3×12.\n\nFINAL ADVICE")
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(exporter.mime_type(), "application/pdf");
        assert_eq!(exporter.file_name(), "Workout_Diet_Plan.pdf");
    }
}
