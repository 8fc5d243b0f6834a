//! End-to-end generation: source files in, PDF out
//!
//! The only asynchronous work happens here. File and asset reads use tokio,
//! CSV parsing and PDF serialisation run on the blocking pool, and the
//! grouping and layout in between are plain synchronous calls.

use crate::aggregate::aggregate_orders;
use crate::canvas::PdfCanvas;
use crate::layout::{LayoutSummary, render_document};
use crate::options::SlipOptions;
use crate::stats::{DocumentStatistics, calculate_statistics};
use crate::tabular::parse_export;
use crate::types::*;
use crate::validate::parse_line_items;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Title embedded in generated documents
const DOCUMENT_TITLE: &str = "Packing slips";

/// One exported order list
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Supplies the CSV exports for a run, in the order they were chosen
pub trait FileSource: Send + Sync {
    fn files(&self) -> impl Future<Output = Result<Vec<SourceFile>>> + Send;
}

/// Files read from disk
#[derive(Debug, Clone, Default)]
pub struct PathFileSource {
    pub paths: Vec<PathBuf>,
}

impl PathFileSource {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl FileSource for PathFileSource {
    fn files(&self) -> impl Future<Output = Result<Vec<SourceFile>>> + Send {
        async move {
            let mut files = Vec::with_capacity(self.paths.len());
            for path in &self.paths {
                let bytes = tokio::fs::read(path).await?;
                files.push(SourceFile {
                    name: path.display().to_string(),
                    bytes,
                });
            }
            Ok(files)
        }
    }
}

/// Files already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSource {
    pub files: Vec<SourceFile>,
}

impl MemoryFileSource {
    pub fn new(files: Vec<SourceFile>) -> Self {
        Self { files }
    }

    pub fn from_csv(name: &str, csv: &str) -> Self {
        Self::new(vec![SourceFile {
            name: name.to_string(),
            bytes: csv.as_bytes().to_vec(),
        }])
    }
}

impl FileSource for MemoryFileSource {
    fn files(&self) -> impl Future<Output = Result<Vec<SourceFile>>> + Send {
        let files = self.files.clone();
        async move { Ok(files) }
    }
}

/// Where to find the font and logo
#[derive(Debug, Clone, Default)]
pub struct AssetPaths {
    pub font: Option<PathBuf>,
    pub logo: Option<PathBuf>,
}

/// Font and logo bytes
#[derive(Debug, Clone, Default)]
pub struct Assets {
    pub font: Option<Vec<u8>>,
    pub logo: Option<Vec<u8>>,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Result<Self> {
        Ok(Self {
            font: read_asset(paths.font.as_deref()).await?,
            logo: read_asset(paths.logo.as_deref()).await?,
        })
    }
}

async fn read_asset(path: Option<&Path>) -> Result<Option<Vec<u8>>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| SlipError::Asset(format!("{}: {}", path.display(), e)))?;
    log::debug!("Loaded asset {} ({} bytes)", path.display(), bytes.len());
    Ok(Some(bytes))
}

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub output_path: PathBuf,
    pub summary: LayoutSummary,
}

/// Parse every file, then validate and group the combined rows.
///
/// All files are parsed concurrently, but their rows are concatenated in
/// source order before grouping.
async fn load_orders(files: Vec<SourceFile>, options: &SlipOptions) -> Result<Vec<OrderGroup>> {
    let parses: Vec<_> = files
        .into_iter()
        .map(|SourceFile { name, bytes }| {
            // CSV parsing is CPU-bound, spawn blocking
            let parse = tokio::task::spawn_blocking(move || parse_export(&bytes));
            (name, parse)
        })
        .collect();

    let mut records = Vec::new();
    for (name, parse) in parses {
        let mut rows = parse.await??;
        log::info!("Read {} rows from {}", rows.len(), name);
        records.append(&mut rows);
    }

    let items = parse_line_items(&records, &options.ready_status)?;
    let groups = aggregate_orders(items, &options.ready_status, options.sort_key);
    if groups.is_empty() {
        log::warn!("No orders with status {:?}", options.ready_status);
    } else {
        log::info!("Grouped {} orders", groups.len());
    }
    Ok(groups)
}

async fn source_files<S: FileSource>(source: &S) -> Result<Vec<SourceFile>> {
    let files = source.files().await?;
    if files.is_empty() {
        return Err(SlipError::NoFileSelected);
    }
    Ok(files)
}

/// Lay out `groups` as a PDF and return its bytes
pub fn generate_pdf_bytes(
    groups: &[OrderGroup],
    options: &SlipOptions,
    assets: &Assets,
) -> Result<(Vec<u8>, LayoutSummary)> {
    let mut canvas = PdfCanvas::new(DOCUMENT_TITLE, options, assets.font.as_deref())?;
    let logo = assets
        .logo
        .as_deref()
        .map(|bytes| canvas.add_image(bytes))
        .transpose()?;
    let summary = render_document(groups, options, &mut canvas, logo.as_ref())?;
    Ok((canvas.finish(), summary))
}

/// Run the whole pipeline and write the PDF to `output_path`.
///
/// Nothing is written unless every stage succeeds.
pub async fn generate<S: FileSource>(
    source: &S,
    options: &SlipOptions,
    asset_paths: &AssetPaths,
    output_path: impl AsRef<Path>,
) -> Result<GenerationReport> {
    options.validate()?;
    let output_path = output_path.as_ref().to_owned();

    let files = source_files(source).await?;
    let assets = Assets::load(asset_paths).await?;
    let groups = load_orders(files, options).await?;

    let options = options.clone();
    // PDF generation is CPU-bound, spawn blocking
    let (bytes, summary) =
        tokio::task::spawn_blocking(move || generate_pdf_bytes(&groups, &options, &assets))
            .await??;

    tokio::fs::write(&output_path, bytes).await?;
    log::info!("Wrote {}", output_path.display());

    Ok(GenerationReport {
        output_path,
        summary,
    })
}

/// Run the pipeline up to layout and report statistics without writing
pub async fn estimate<S: FileSource>(
    source: &S,
    options: &SlipOptions,
) -> Result<DocumentStatistics> {
    options.validate()?;
    let files = source_files(source).await?;
    let groups = load_orders(files, options).await?;
    calculate_statistics(&groups, options)
}
