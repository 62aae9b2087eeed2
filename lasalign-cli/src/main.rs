//!
//! This binary provides a CLI for generating laser-beam primaries and
//! analyzing simulated tracker hits.
#![allow(clippy::uninlined_format_args, clippy::cast_precision_loss)]

use clap::{Parser, Subcommand};

use lasalign_analysis::{AnalyzerConfig, SimAnalyzer};
use lasalign_beams::{LaserBeamGun, LaserGunConfig};
use lasalign_core::{classify, try_classify, DetId, DetectorRegion, SimHit};
use lasalign_io::{read_analyzer_config, write_analysis_json, DataFileWriter, SimHitFileReader};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Result type for CLI operations.
type Result<T> = std::result::Result<T, CliError>;

/// CLI error types.
#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    LasalignIo(#[from] lasalign_io::Error),

    #[error("Core error: {0}")]
    Core(#[from] lasalign_core::Error),

    #[error("Analysis error: {0}")]
    Analysis(#[from] lasalign_analysis::Error),

    #[error("Generator error: {0}")]
    Beams(#[from] lasalign_beams::Error),
}

/// Laser alignment simulation toolkit.
#[derive(Parser)]
#[command(name = "lasalign")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify simulated hits and fill the analysis histograms
    Analyze {
        /// Binary hit file(s), one event per file
        #[arg(required = true)]
        input: Vec<PathBuf>,

        /// Output JSON file (defaults to the configured output file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Analyzer configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured debug level
        #[arg(long)]
        debug_level: Option<u32>,

        /// Classify hits without checking for non-finite coordinates
        #[arg(long)]
        no_validate: bool,
    },

    /// Generate laser-beam primaries and write them as CSV
    Generate {
        /// Output CSV file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of events
        #[arg(short = 'n', long, default_value = "1")]
        events: u64,

        /// Random seed
        #[arg(long, default_value = "12345")]
        seed: u64,

        /// Photons per gun shot
        #[arg(long, default_value = "1")]
        photons_in_gun: u32,

        /// Gun shots per beam
        #[arg(long, default_value = "1")]
        photons_in_beam: u32,

        /// Photon energy (eV)
        #[arg(long, default_value = "1.15")]
        energy_ev: f64,

        /// Angular divergence sigma (rad)
        #[arg(long, default_value = "0.001")]
        divergence: f64,

        /// Polarization angle (rad)
        #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
        polarization: f64,
    },

    /// Classify a single hit position
    Classify {
        /// Global x position
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Global y position
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Global z position
        #[arg(allow_negative_numbers = true)]
        z: f64,
        /// Region tag (TIB, TOB or TEC)
        #[arg(required_unless_present = "det_id", conflicts_with = "det_id")]
        region: Option<DetectorRegion>,

        /// Raw detector ID to take the region from
        #[arg(long)]
        det_id: Option<u32>,

        /// Reject non-finite coordinates
        #[arg(long)]
        strict: bool,
    },

    /// Show information about a binary hit file
    Info {
        /// Input hit file
        input: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            input,
            output,
            config,
            debug_level,
            no_validate,
        } => {
            let mut analyzer_config = match config {
                Some(path) => {
                    info!("Loading analyzer configuration from {}", path.display());
                    read_analyzer_config(&path)?
                }
                None => AnalyzerConfig::default(),
            };
            if let Some(level) = debug_level {
                analyzer_config = analyzer_config.with_debug_level(level);
            }
            if no_validate {
                analyzer_config = analyzer_config.with_validate_hits(false);
            }
            if let Some(path) = output {
                analyzer_config = analyzer_config.with_output_file(path);
            }
            let output_file = analyzer_config.output_file.clone();

            let start = Instant::now();
            let mut analyzer = SimAnalyzer::new(analyzer_config)?;

            for path in &input {
                debug!("Reading: {}", path.display());
                let reader = SimHitFileReader::open(path)?;
                let hits = reader.read_batch()?;
                analyzer.analyze_event(&hits)?;
            }

            let result = analyzer.finish();
            write_analysis_json(&output_file, &result)?;

            let summary = &result.summary;
            println!(
                "Analyzed {} events in {:.2}s",
                summary.events,
                start.elapsed().as_secs_f64()
            );
            for region in DetectorRegion::ALL {
                let beam_hits: u64 = summary.beam_hits[region.index()].iter().sum();
                println!(
                    "{}: {} hits, {} in beam windows",
                    region,
                    summary.hits_in(region),
                    beam_hits
                );
            }
            println!("Invalid hits skipped: {}", summary.invalid_hits);
            println!("Output: {}", output_file.display());
        }

        Commands::Generate {
            output,
            events,
            seed,
            photons_in_gun,
            photons_in_beam,
            energy_ev,
            divergence,
            polarization,
        } => {
            let config = LaserGunConfig::new()
                .with_seed(seed)
                .with_photons_in_gun(photons_in_gun)
                .with_photons_in_beam(photons_in_beam)
                .with_photon_energy_ev(energy_ev)
                .with_divergence(divergence)
                .with_polarization_angle(polarization);
            let mut gun = LaserBeamGun::new(config)?;
            let mut writer = DataFileWriter::create(&output)?;

            let mut total_photons = 0u64;
            for event_id in 0..events {
                let event = gun.generate_primaries(event_id);
                total_photons = total_photons.saturating_add(event.photon_count());
                writer.write_primaries_csv(&event, event_id == 0)?;
            }
            writer.flush()?;

            println!("Generated {} events, {} photons", events, total_photons);
            println!("Output: {}", output.display());
        }

        Commands::Classify {
            x,
            y,
            z,
            region,
            det_id,
            strict,
        } => {
            let hit = match (region, det_id) {
                (Some(region), _) => SimHit::new(x, y, z, region),
                (None, Some(raw)) => SimHit::from_det_id(x, y, z, DetId(raw)).ok_or_else(|| {
                    lasalign_core::Error::UnknownRegion(format!("detector id {raw:#010x}"))
                })?,
                (None, None) => {
                    return Err(
                        lasalign_core::Error::UnknownRegion("no region given".to_string()).into(),
                    )
                }
            };
            let result = if strict {
                try_classify(&hit)?
            } else {
                classify(&hit)
            };
            println!("region:             {}", result.region);
            println!("radius:             {}", result.radius);
            println!("azimuth:            {}", result.azimuth);
            println!("normalized azimuth: {}", result.normalized_azimuth);
        }

        Commands::Info { input } => {
            let reader = SimHitFileReader::open(&input)?;
            let file_size = reader.file_size();

            println!("File: {}", input.display());
            println!(
                "Size: {} bytes ({:.2} MB)",
                file_size,
                file_size as f64 / 1_000_000.0
            );
            println!("Hits: {}", reader.hit_count());

            let batch = reader.read_batch()?;
            for region in DetectorRegion::ALL {
                println!("  {}: {}", region, batch.count_region(region));
            }

            if !batch.is_empty() {
                let min_z = batch.z.iter().copied().fold(f64::INFINITY, f64::min);
                let max_z = batch.z.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                println!("Z range: {} - {}", min_z, max_z);
            }
        }
    }

    Ok(())
}
