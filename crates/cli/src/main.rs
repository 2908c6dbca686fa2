use std::path::PathBuf;
use std::process;

use clap::Parser;

use speech_corpus_core::audio::infrastructure::audio_toolkit::AudioToolkit;
use speech_corpus_core::audio::infrastructure::hound_wav_probe::HoundWavProbe;
use speech_corpus_core::catalog::domain::dataset::Dataset;
use speech_corpus_core::catalog::domain::dataset_type::DatasetType;
use speech_corpus_core::catalog::domain::missing_audio_policy::MissingAudioPolicy;
use speech_corpus_core::catalog::infrastructure::dataset_factory;
use speech_corpus_core::catalog::infrastructure::jsonl_manifest_writer::write_manifest;
use speech_corpus_core::shared::config::CatalogOptions;

/// Build a WAV/transcript catalog from a speech corpus.
#[derive(Parser)]
#[command(name = "speech-corpus")]
struct Cli {
    /// Corpus layout: commonvoice, librispeech or custom.
    dataset_type: String,

    /// Root directory of the corpus.
    root: PathBuf,

    /// JSON options file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip rows whose source audio or transcript is missing instead of failing.
    #[arg(long)]
    skip_missing: bool,

    /// Sample rate for converted WAV files.
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Print every entry as "<path>\t<transcript>".
    #[arg(long)]
    list: bool,

    /// Print the total speech duration.
    #[arg(long)]
    duration: bool,

    /// Write a JSON Lines manifest to this file.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dataset_type = validate(&cli)?;
    let options = build_options(&cli)?;

    let toolkit = AudioToolkit::ffmpeg();
    let dataset = dataset_factory::create_typed(dataset_type, &cli.root, &toolkit, &options)?;

    println!("{}: {} entries", dataset, dataset.size());

    if cli.list {
        print_entries(dataset.as_ref())?;
    }
    if cli.duration {
        let seconds = dataset.size_seconds(&HoundWavProbe)?;
        println!("Duration: {:.1} s ({:.2} h)", seconds, seconds / 3600.0);
    }
    if let Some(manifest) = &cli.manifest {
        write_manifest(manifest, dataset.as_ref())?;
        log::info!("Manifest written to {}", manifest.display());
    }

    Ok(())
}

fn build_options(cli: &Cli) -> Result<CatalogOptions, Box<dyn std::error::Error>> {
    let mut options = CatalogOptions::load(cli.config.as_deref())?;
    if cli.skip_missing {
        options.missing_audio = MissingAudioPolicy::Skip;
    }
    if let Some(rate) = cli.sample_rate {
        options.format.sample_rate = rate;
    }
    options.validate()?;
    Ok(options)
}

fn validate(cli: &Cli) -> Result<DatasetType, Box<dyn std::error::Error>> {
    let dataset_type = cli.dataset_type.parse()?;
    if !cli.root.is_dir() {
        return Err(format!("Corpus root not found: {}", cli.root.display()).into());
    }
    Ok(dataset_type)
}

fn print_entries(dataset: &dyn Dataset) -> Result<(), Box<dyn std::error::Error>> {
    for index in 0..dataset.size() {
        let entry = dataset.get(index)?;
        println!("{}\t{}", entry.audio_path().display(), entry.transcript());
    }
    Ok(())
}
