//! Packing slip generation for shop order exports
//!
//! Turns one or two order-list CSV exports into a printable PDF containing a
//! shipment checklist, per-order packing slips and destination address slips.

pub mod aggregate;
pub mod canvas;
pub mod constants;
pub mod cursor;
pub mod layout;
mod options;
pub mod pipeline;
mod stats;
pub mod tabular;
pub mod text;
mod types;
pub mod validate;

pub use aggregate::aggregate_orders;
pub use canvas::{PageCanvas, PdfCanvas, RecordingCanvas};
pub use cursor::PaginationCursor;
pub use layout::{LayoutSummary, render_document};
pub use options::*;
pub use pipeline::{
    AssetPaths, Assets, FileSource, GenerationReport, MemoryFileSource, PathFileSource,
    SourceFile, estimate, generate, generate_pdf_bytes,
};
pub use stats::{DocumentStatistics, calculate_statistics};
pub use text::{format_postal_code, wrap_text};
pub use types::*;
pub use validate::{parse_line_items, verify_columns, verify_headers};
