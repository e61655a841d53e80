use std::path::PathBuf;

use clap::{Parser, Subcommand};
use notebook_helper::{
    app_dashboard_url, decompose,
    logging::init_logging,
    models::{archive::FileStatus, configuration::read_yaml_file},
    providers::{
        downloader::Downloader, extractor::Extractor, tar_gz_extractor::TarGzExtractor,
        unauthenticated_downloader::UnauthenticatedDownloader,
    },
    ArchiveAcquirer, SparkContext,
};

#[derive(Parser)]
#[command(name = "nbhelper", about = "Dataset and dashboard helpers for course notebooks")]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download, verify and unpack the files listed in a manifest.
    Fetch {
        manifest: PathBuf,
        /// Directory that a relative manifest `directory` is resolved against.
        #[arg(long)]
        base_dir: Option<PathBuf>,
    },
    /// Print the Spark application dashboard URL for a master address.
    DashboardUrl {
        #[arg(long, env = "SPARK_MASTER")]
        master: String,
    },
    /// Split a URL into its components and print them as YAML.
    ParseUrl { url: String },
}

async fn fetch(
    manifest_path: PathBuf,
    base_dir: Option<PathBuf>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let manifest = read_yaml_file(&manifest_path).await?;
    let base_dir = match base_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let directory = manifest.resolve_directory(&base_dir);
    let descriptors = manifest.descriptors()?;

    let acquirer = ArchiveAcquirer::new(UnauthenticatedDownloader::new(), TarGzExtractor::new());
    let reports = acquirer
        .acquire_all(&directory, &manifest.base_url, &descriptors, |report| {
            println!("{}: {}", report.filename, report.status)
        })
        .await?;

    Ok(reports.iter().all(|r| r.status == FileStatus::Ok))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(if cli.verbose { "debug" } else { "info" });

    match cli.command {
        Command::Fetch { manifest, base_dir } => {
            if !fetch(manifest, base_dir).await? {
                std::process::exit(1);
            }
        }
        Command::DashboardUrl { master } => {
            println!("{}", app_dashboard_url(&SparkContext::new(master))?);
        }
        Command::ParseUrl { url } => match decompose(&url).into_option() {
            Some(components) => print!("{}", serde_yaml::to_string(&components)?),
            None => {
                eprintln!("{:?} does not look like a URL", url);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
