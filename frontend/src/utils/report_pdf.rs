use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point,
};
use std::io::BufWriter;
use thiserror::Error;

use crate::{
    api::MonthlyReport,
    utils::format::{display_time, format_long_id_date, format_rupiah, month_name_id},
};

pub const A4_WIDTH_MM: f64 = 210.0;
pub const A4_HEIGHT_MM: f64 = 297.0;
pub const REPORT_FILE_NAME: &str = "monthly_report.pdf";

const MARGIN_MM: f64 = 15.0;
const ROW_HEIGHT_MM: f64 = 7.0;
const BODY_SIZE: f32 = 10.0;
const TABLE_COLUMNS: [(&str, f64); 5] = [
    ("Tanggal", MARGIN_MM),
    ("Status", 62.0),
    ("Jam Masuk", 100.0),
    ("Jam Keluar", 130.0),
    ("Potongan", 160.0),
];

#[derive(Debug, Error)]
pub enum ReportExportError {
    #[error("Failed to build PDF: {0}")]
    Pdf(String),
    #[error("Failed to download PDF: {0}")]
    Download(String),
}

/// Something drawn on the report strip. `y` is measured in millimetres from
/// the top of the strip.
#[derive(Debug, Clone, PartialEq)]
pub enum StripItem {
    Text {
        x: f64,
        y: f64,
        size: f32,
        bold: bool,
        text: String,
    },
    Rule {
        x1: f64,
        x2: f64,
        y: f64,
    },
}

impl StripItem {
    fn y(&self) -> f64 {
        match self {
            StripItem::Text { y, .. } | StripItem::Rule { y, .. } => *y,
        }
    }
}

/// The whole report laid out as one A4-wide strip of arbitrary height.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportStrip {
    pub items: Vec<StripItem>,
    pub height: f64,
}

struct StripWriter {
    items: Vec<StripItem>,
    cursor: f64,
}

impl StripWriter {
    fn text(&mut self, x: f64, size: f32, bold: bool, text: impl Into<String>) {
        self.items.push(StripItem::Text {
            x,
            y: self.cursor,
            size,
            bold,
            text: text.into(),
        });
    }

    fn rule(&mut self) {
        self.items.push(StripItem::Rule {
            x1: MARGIN_MM,
            x2: A4_WIDTH_MM - MARGIN_MM,
            y: self.cursor,
        });
    }

    fn advance(&mut self, mm: f64) {
        self.cursor += mm;
    }
}

pub fn layout_report(report: &MonthlyReport, year: i32, month: u32) -> ReportStrip {
    let mut w = StripWriter {
        items: Vec::new(),
        cursor: MARGIN_MM,
    };

    w.advance(6.0);
    w.text(MARGIN_MM, 16.0, true, "Laporan Kehadiran Bulanan");
    w.advance(8.0);
    w.text(
        MARGIN_MM,
        BODY_SIZE,
        false,
        format!("{} - {} {}", report.employee.name, month_name_id(month), year),
    );
    w.advance(10.0);

    for (label, amount) in [
        ("Gaji Bulanan", report.employee.monthly_salary),
        ("Total Potongan", report.total_deduction),
        ("Gaji Akhir", report.final_salary),
    ] {
        w.text(MARGIN_MM, BODY_SIZE, false, label);
        w.text(70.0, BODY_SIZE, true, format_rupiah(amount));
        w.advance(ROW_HEIGHT_MM);
    }
    w.advance(4.0);

    for (title, x) in TABLE_COLUMNS {
        w.text(x, BODY_SIZE, true, title);
    }
    w.advance(2.5);
    w.rule();
    w.advance(ROW_HEIGHT_MM - 2.5);

    for day in &report.daily_reports {
        let cells = [
            format_long_id_date(day.date),
            day.status.clone(),
            display_time(day.check_in.as_deref()),
            display_time(day.check_out.as_deref()),
            format_rupiah(day.deduction),
        ];
        for ((_, x), cell) in TABLE_COLUMNS.iter().zip(cells) {
            w.text(*x, BODY_SIZE, false, cell);
        }
        w.advance(ROW_HEIGHT_MM);
    }

    ReportStrip {
        items: w.items,
        height: w.cursor + MARGIN_MM,
    }
}

/// Vertical offset of the strip on each page: `0, -page, -2*page, ...`,
/// continuing while some of the strip is still left to place.
pub fn page_offsets(content_height: f64, page_height: f64) -> Vec<f64> {
    let mut offsets = vec![0.0];
    if page_height <= 0.0 {
        return offsets;
    }
    let mut remaining = content_height - page_height;
    let mut page = 1.0;
    while remaining > 0.0 {
        offsets.push(-page * page_height);
        remaining -= page_height;
        page += 1.0;
    }
    offsets
}

/// Items that land on the page shifted by `offset`, with page-relative `y`.
pub fn items_on_page(strip: &ReportStrip, offset: f64, page_height: f64) -> Vec<StripItem> {
    strip
        .items
        .iter()
        .filter_map(|item| {
            let y = item.y() + offset;
            if !(0.0..page_height).contains(&y) {
                return None;
            }
            Some(match item.clone() {
                StripItem::Text {
                    x, size, bold, text, ..
                } => StripItem::Text {
                    x,
                    y,
                    size,
                    bold,
                    text,
                },
                StripItem::Rule { x1, x2, .. } => StripItem::Rule { x1, x2, y },
            })
        })
        .collect()
}

fn mm(value: f64) -> Mm {
    Mm(value as f32)
}

fn draw_items(
    layer: &PdfLayerReference,
    items: &[StripItem],
    regular: &IndirectFontRef,
    bold: &IndirectFontRef,
) {
    for item in items {
        match item {
            StripItem::Text {
                x,
                y,
                size,
                bold: is_bold,
                text,
            } => {
                let font = if *is_bold { bold } else { regular };
                layer.use_text(text.as_str(), *size, mm(*x), mm(A4_HEIGHT_MM - y), font);
            }
            StripItem::Rule { x1, x2, y } => {
                layer.set_outline_thickness(0.3);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(mm(*x1), mm(A4_HEIGHT_MM - y)), false),
                        (Point::new(mm(*x2), mm(A4_HEIGHT_MM - y)), false),
                    ],
                    is_closed: false,
                });
            }
        }
    }
}

pub fn render_report_pdf(
    report: &MonthlyReport,
    year: i32,
    month: u32,
) -> Result<Vec<u8>, ReportExportError> {
    let strip = layout_report(report, year, month);
    let offsets = page_offsets(strip.height, A4_HEIGHT_MM);

    let (doc, first_page, first_layer) = PdfDocument::new(
        "Laporan Kehadiran Bulanan",
        mm(A4_WIDTH_MM),
        mm(A4_HEIGHT_MM),
        "Layer 1",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportExportError::Pdf(e.to_string()))?;

    for (index, offset) in offsets.iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page, layer) = doc.add_page(mm(A4_WIDTH_MM), mm(A4_HEIGHT_MM), "Layer 1");
            doc.get_page(page).get_layer(layer)
        };
        let items = items_on_page(&strip, *offset, A4_HEIGHT_MM);
        draw_items(&layer, &items, &regular, &bold);
    }

    let mut writer = BufWriter::new(Vec::new());
    doc.save(&mut writer)
        .map_err(|e| ReportExportError::Pdf(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| ReportExportError::Pdf(e.to_string()))
}

/// Builds the PDF and hands it to the browser as `monthly_report.pdf`.
pub fn export_report_pdf(
    report: &MonthlyReport,
    year: i32,
    month: u32,
) -> Result<(), ReportExportError> {
    let bytes = render_report_pdf(report, year, month)?;
    log::info!(
        "exporting report for {} ({} bytes)",
        report.employee.name,
        bytes.len()
    );
    crate::utils::download::trigger_download(REPORT_FILE_NAME, "application/pdf", &bytes)
        .map_err(ReportExportError::Download)
}
