//! The `graymill process` command.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use graymill_core::{Config, DiscoveredFile, FileDiscovery, ImageProcessor};

/// Arguments for the `process` command.
#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Container file or directory to process
    #[arg(required = true)]
    pub input: PathBuf,

    /// Output file (single input) or output directory (directory input)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum output width in pixels (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: Option<u32>,

    /// Maximum output height in pixels (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_height: Option<u32>,

    /// Overwrite existing output files
    #[arg(long)]
    pub overwrite: bool,
}

/// Execute the process command.
pub fn execute(args: ProcessArgs, config: &Config) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!(
            "Input path does not exist: {:?}\n\n  Hint: Check the file path and try again.",
            args.input
        );
    }

    let max_width = args.max_width.unwrap_or(config.limits.max_width);
    let max_height = args.max_height.unwrap_or(config.limits.max_height);
    let overwrite = args.overwrite || config.output.overwrite;
    let processor = ImageProcessor::new(config);

    if args.input.is_file() {
        let out_path = match &args.output {
            Some(path) => path.clone(),
            None => derive_output_path(&args.input, config, None),
        };
        process_file(
            &processor,
            &args.input,
            &out_path,
            max_width,
            max_height,
            overwrite,
        )?;
        println!("Wrote {}", out_path.display());
        return Ok(());
    }

    let files = FileDiscovery::new(config.processing.clone()).discover(&args.input);
    if files.is_empty() {
        anyhow::bail!(
            "No supported container files found at {:?} (extensions: {})",
            args.input,
            config.processing.supported_formats.join(", ")
        );
    }
    process_batch(
        &processor,
        config,
        &files,
        args.output.as_deref(),
        max_width,
        max_height,
        overwrite,
    )
}

/// Process a directory of container files with progress tracking.
fn process_batch(
    processor: &ImageProcessor,
    config: &Config,
    files: &[DiscoveredFile],
    output_dir: Option<&Path>,
    max_width: u32,
    max_height: u32,
    overwrite: bool,
) -> anyhow::Result<()> {
    let total_bytes = FileDiscovery::total_size(files);
    tracing::info!(
        files = files.len(),
        total_bytes,
        max_width,
        max_height,
        "starting batch"
    );

    let progress = create_progress_bar(files.len() as u64);
    let start_time = Instant::now();
    let mut succeeded: u64 = 0;
    let mut failed: u64 = 0;
    let mut skipped: u64 = 0;

    for file in files {
        let out_path = derive_output_path(&file.path, config, output_dir);
        if out_path.exists() && !overwrite {
            skipped += 1;
            progress.inc(1);
            continue;
        }

        match process_file(processor, &file.path, &out_path, max_width, max_height, true) {
            Ok(_) => succeeded += 1,
            Err(e) => {
                tracing::warn!("Failed to process {:?}: {e:#}", file.path);
                failed += 1;
            }
        }
        progress.inc(1);
    }

    let elapsed = start_time.elapsed();
    progress.finish_and_clear();
    print_summary(succeeded, failed, skipped, total_bytes, elapsed);

    if succeeded == 0 && failed > 0 {
        anyhow::bail!("All {failed} files failed to process");
    }
    Ok(())
}

/// Run one file through the pipeline and write the result.
fn process_file(
    processor: &ImageProcessor,
    input: &Path,
    output: &Path,
    max_width: u32,
    max_height: u32,
    overwrite: bool,
) -> anyhow::Result<()> {
    if output.exists() && !overwrite {
        anyhow::bail!(
            "Output already exists: {} (pass --overwrite to replace it)",
            output.display()
        );
    }

    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", input.display()))?;
    let encoded = processor.process_with_bounds(&bytes, max_width, max_height)?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output, &encoded)
        .map_err(|e| anyhow::anyhow!("Cannot write {}: {e}", output.display()))?;

    tracing::debug!(
        input = ?input,
        output = ?output,
        in_bytes = bytes.len(),
        out_bytes = encoded.len(),
        "processed"
    );
    Ok(())
}

/// Where a processed file lands: explicit dir > configured dir > next to
/// the input, with the configured suffix appended to the stem.
fn derive_output_path(input: &Path, config: &Config, dir_override: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match input.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{stem}{}.{ext}", config.output.suffix),
        None => format!("{stem}{}", config.output.suffix),
    };

    let dir = dir_override
        .map(Path::to_path_buf)
        .or_else(|| config.output_dir())
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    dir.join(name)
}

fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

fn print_summary(
    succeeded: u64,
    failed: u64,
    skipped: u64,
    total_bytes: u64,
    elapsed: std::time::Duration,
) {
    let rate = if elapsed.as_secs_f64() > 0.0 {
        succeeded as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    let mb_read = total_bytes as f64 / 1_000_000.0;

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Succeeded:    {:>8}", succeeded);
    if failed > 0 {
        eprintln!("    Failed:       {:>8}", failed);
    }
    if skipped > 0 {
        eprintln!("    Skipped:      {:>8}", skipped);
    }
    eprintln!("    Read:         {:>8.1} MB", mb_read);
    eprintln!("    Elapsed:      {:>8.1?}", elapsed);
    eprintln!("    Rate:         {:>8.1} files/s", rate);
    eprintln!("  ====================================");
}
