use clap::{Parser, ValueEnum};
use reqlat_parser::ClassifyMode;
use reqlat_report::config::DEFAULT_LOG_FILTER;
use reqlat_report::{render_json, render_text, report_file};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "reqlat", about = "Per-method latency statistics from a GET/POST request log")]
struct Args {
    /// Request log: one `GET <latency>` or `POST <latency>` per line.
    path: PathBuf,

    /// Reject lines whose tag is not exactly GET or POST instead of counting them as POST.
    #[arg(long)]
    strict: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also print 10 ms latency histograms for each method.
    #[arg(long)]
    histogram: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mode = if args.strict { ClassifyMode::Strict } else { ClassifyMode::Permissive };

    let report = report_file(&args.path, mode, args.histogram).unwrap_or_else(|e| {
        eprintln!("error: {e}");
        process::exit(e.exit_code());
    });

    let output = match args.format {
        Format::Text => render_text(&report),
        Format::Json => render_json(&report).unwrap_or_else(|e| {
            eprintln!("error: failed to encode report: {e}");
            process::exit(1);
        }),
    };
    print!("{output}");
}
