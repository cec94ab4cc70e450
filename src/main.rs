/*!
 * Command-line interface for ProjDump
 */

use std::io;
use std::process;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use projdump::config::{Args, Config};
use projdump::dumper::Dumper;
use projdump::error::Result;
use projdump::report::{DumpReport, ReportFormat, Reporter};
use projdump::utils::count_files;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit if requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "projdump", &mut io::stdout());
        return;
    }

    // Create configuration
    let config = Config::from_args(args);

    if let Err(e) = run(config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(config: Config) -> Result<()> {
    // Validate configuration
    config.validate()?;

    // Create progress bar
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) Elapsed: {elapsed_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");

    progress.set_message(format!(
        "📂 Dumping directory: {}",
        config.target_dir.display()
    ));

    // Count files for progress tracking
    let total_files = match count_files(&config.target_dir) {
        Ok(count) => {
            progress.set_message(format!("🔎 Found {} files to process", count));
            count
        }
        Err(e) => {
            progress.set_message(format!("⚠️ Warning: Failed to count files: {}", e));
            0
        }
    };

    progress.set_length(total_files);
    progress.set_prefix("📊 Processing");
    progress.set_message("Starting dump...");

    // Create the dumper and run it
    let dumper = Dumper::new(config.clone(), Arc::new(progress.clone()));

    let start_time = Instant::now();
    let summary = dumper.dump()?;
    let duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare and print the run report
    let report = DumpReport {
        output_file: config.output_file.display().to_string(),
        duration,
        summary,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    Ok(())
}
