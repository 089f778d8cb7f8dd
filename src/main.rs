use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use musync::declaration::{append_source, load_library_file};
use musync::error::display_chain;
use musync::prompt::Prompter;
use musync::sync::{LibraryLayout, SourceState};
use musync::tools::{AudioSettings, Ffmpeg, Id3Tagger, YoutubeDl};
use musync::{SyncConfig, SyncPipeline};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "musync")]
#[command(about = "Sync a declared music library from remote sources", long_about = None)]
struct Args {
    /// Verbose logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sync music files
    Sync {
        /// The file describing what to sync
        path: String,

        /// The directory to sync files to
        #[arg(short = 'o', long, default_value = ".")]
        out: String,

        /// Keep going after a source fails instead of stopping the run
        #[arg(long)]
        keep_going: bool,

        /// Media fetcher binary (youtube-dl or a compatible fork)
        #[arg(long, default_value = "youtube-dl")]
        fetcher: String,

        /// ffmpeg binary
        #[arg(long, default_value = "ffmpeg")]
        ffmpeg: String,

        /// Sample rate of the transcoded audio
        #[arg(long, default_value = "44100")]
        sample_rate: u32,

        /// Bitrate of the transcoded audio
        #[arg(long, default_value = "192k")]
        bitrate: String,
    },

    /// Add a new album or song to the syncing file
    Add {
        /// The file containing the sources to sync
        path: String,
    },

    /// Show how far each source has got, without changing anything
    Status {
        /// The file describing what to sync
        path: String,

        /// The directory files are synced to
        #[arg(short = 'o', long, default_value = ".")]
        out: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match args.command {
        Command::Sync {
            path,
            out,
            keep_going,
            fetcher,
            ffmpeg,
            sample_rate,
            bitrate,
        } => {
            let settings = AudioSettings {
                sample_rate,
                bitrate,
                ..AudioSettings::default()
            };
            sync(&expand(&path), &expand(&out), keep_going, &fetcher, &ffmpeg, settings)
        }
        Command::Add { path } => add(&expand(&path)),
        Command::Status { path, out } => status(&expand(&path), &expand(&out)),
    }
}

/// Expand ~ in user-supplied paths
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn sync(
    library_path: &Path,
    out: &Path,
    keep_going: bool,
    fetcher: &str,
    ffmpeg: &str,
    settings: AudioSettings,
) -> Result<()> {
    if !out.is_dir() {
        bail!("Output directory does not exist: {:?}", out);
    }

    log::info!("Loading library from {:?}", library_path);
    let library = load_library_file(library_path).context("Failed to load library")?;
    log::info!("Library loaded: {} sources", library.source_count());
    if library.is_empty() {
        log::warn!("{:?} declares no sources, nothing to sync", library_path);
    }

    // Resolve tools up front so a missing binary fails before any work
    let fetcher = YoutubeDl::locate(fetcher)?;
    let transcoder = Ffmpeg::locate(ffmpeg)?.with_settings(settings);

    let config = SyncConfig::new(out.to_path_buf()).with_continue_on_error(keep_going);
    let pipeline = SyncPipeline::new(config, fetcher, transcoder, Id3Tagger::new());

    let summary = pipeline.sync(&library).context("Sync stopped")?;

    if !summary.is_success() {
        for failure in &summary.failures {
            log::error!("'{}': {}", failure.source_name(), display_chain(failure));
        }
        bail!(
            "{} of {} sources failed",
            summary.failures.len(),
            library.source_count()
        );
    }

    log::info!("Sync completed successfully!");
    Ok(())
}

fn add(library_path: &Path) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let source = prompter
        .prompt_source()
        .context("Failed to read the new source")?;
    append_source(library_path, &source).context("Failed to add source")?;
    Ok(())
}

fn status(library_path: &Path, out: &Path) -> Result<()> {
    let library = load_library_file(library_path).context("Failed to load library")?;
    let layout = LibraryLayout::new(out.to_path_buf());

    let mut incomplete = 0;
    for source in library.sources() {
        let state = SourceState::inspect(&layout, source);
        if state.is_complete() {
            log::info!("{}: {}", source.name, state);
        } else {
            incomplete += 1;
            log::warn!("{}: {}", source.name, state);
        }
    }

    log::info!(
        "{} of {} sources complete",
        library.source_count() - incomplete,
        library.source_count()
    );
    Ok(())
}
