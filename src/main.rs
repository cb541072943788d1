use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod fs;
mod log;
mod logging;
mod model;
mod render;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "gpu-fallback-scan")]
#[command(
    about = "Summarize operators that could not run on GPU from a Spark driver log",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a driver log and report (operator, reason) pairs with their counts.
    Scan {
        #[arg(long)]
        log: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,

        #[arg(long, value_enum, default_value_t = model::SortOrder::Count)]
        sort: model::SortOrder,

        /// Only report operators whose name matches this regex.
        #[arg(long)]
        operator: Option<String>,

        #[arg(long, value_enum, default_value_t = log::MalformedLinePolicy::Stop)]
        on_malformed: log::MalformedLinePolicy,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    match cli.cmd {
        Commands::Scan {
            log: log_path,
            format,
            sort,
            operator,
            on_malformed,
            out,
        } => {
            // 1) Scan the log. Failures are logged and yield partial results.
            let records = log::collect_unsupported_operators(&fs::LocalFs, &log_path, on_malformed);

            // 2) Order, filter and total.
            let data = model::build_report_data(
                &log_path.display().to_string(),
                records,
                sort,
                operator.as_deref(),
            )?;

            // 3) Render.
            let text = match format {
                Format::Table => render::render_table_report(&data),
                Format::Json => render::render_json_report(&data)?,
            };

            match out {
                Some(out) => {
                    std::fs::write(&out, text)?;
                    println!("Wrote {}", out.display());
                }
                None => print!("{}", text),
            }
        }
    }

    Ok(())
}
