mod logger;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use packing_slips::{AssetPaths, LayoutVariant, PathFileSource, SlipOptions, SortKey};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slips", about = "Packing slips from order-list CSV exports", version)]
struct Cli {
    /// Log progress at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the checklist, packing slips and address slips
    Generate {
        /// Order-list CSV export(s), at most two
        #[arg(short, long, num_args = 1..=2)]
        input: Vec<PathBuf>,

        /// Output PDF file
        #[arg(short, long, default_value = "packing-slips.pdf")]
        output: PathBuf,

        /// TrueType/OpenType font with Japanese glyphs
        #[arg(long)]
        font: Option<PathBuf>,

        /// Shop logo (JPEG or PNG) for the slip signature
        #[arg(long)]
        logo: Option<PathBuf>,

        /// JSON options file (see `init-config`)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Document layout
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,

        /// Order in which slips are printed
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Write the default options to a JSON file
    InitConfig {
        /// Output JSON file
        #[arg(short, long, default_value = "slips.json")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    AddressGrid,
    AddressSingle,
    Interleaved,
    NoChecklist,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    OrderIdDesc,
    OrderIdAsc,
    PaymentDateAsc,
    OrderDateAsc,
}

impl From<VariantArg> for LayoutVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::AddressGrid => Self::AddressGrid,
            VariantArg::AddressSingle => Self::AddressSingle,
            VariantArg::Interleaved => Self::Interleaved,
            VariantArg::NoChecklist => Self::NoChecklist,
        }
    }
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::OrderIdDesc => SortKey::ORDER_ID_DESC,
            SortArg::OrderIdAsc => SortKey::new(
                packing_slips::SortField::OrderId,
                packing_slips::SortOrder::Ascending,
            ),
            SortArg::PaymentDateAsc => SortKey::PAYMENT_DATE_ASC,
            SortArg::OrderDateAsc => SortKey::ORDER_DATE_ASC,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logger::StderrLogger::new(level).init()?;

    match cli.command {
        Commands::Generate {
            input,
            output,
            font,
            logo,
            config,
            variant,
            sort,
            stats_only,
        } => {
            if input.len() > 2 {
                bail!("At most two CSV files can be combined, got {}", input.len());
            }

            let mut options = match config {
                Some(path) => SlipOptions::load(&path).await?,
                None => SlipOptions::default(),
            };
            if let Some(variant) = variant {
                options.variant = variant.into();
            }
            if let Some(sort) = sort {
                options.sort_key = sort.into();
            }

            let source = PathFileSource::new(input);

            if stats_only {
                let stats = packing_slips::estimate(&source, &options).await?;
                println!("Slip Statistics ({}):", options.variant.name());
                println!("  Orders: {}", stats.orders);
                println!("  Line items: {}", stats.line_items);
                println!("  Grand total: {}円", stats.grand_total);
                println!("  Checklist pages: {}", stats.checklist_pages);
                println!("  Slip pages: {}", stats.slip_pages);
                println!("  Address pages: {}", stats.address_pages);
                println!("  Total pages (estimated): {}", stats.total_pages);
                return Ok(());
            }

            let assets = AssetPaths { font, logo };
            let report = packing_slips::generate(&source, &options, &assets, &output).await?;
            println!(
                "Generated {} slips on {} pages → {}",
                report.summary.orders,
                report.summary.total_pages,
                report.output_path.display()
            );
        }

        Commands::InitConfig { output } => {
            SlipOptions::default().save(&output).await?;
            println!("Default options → {}", output.display());
        }
    }

    Ok(())
}
