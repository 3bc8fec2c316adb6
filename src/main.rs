//! # chatconv CLI
//!
//! Command-line interface for the chatconv library.

use std::process;
use std::time::Instant;

use chatconv::ChatpackError;
use chatconv::cli::{Args, Invocation, parse_invocation};
use chatconv::core::{ConversionPaths, ConversionStats, convert};
use chatconv::logging::{LoggingConfig, init_logging};
use chatconv::progress::{no_progress, stderr_progress};

fn main() {
    let args = match parse_invocation(std::env::args_os()) {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Info(info)) => {
            let _ = info.print();
            process::exit(0);
        }
        Err(e) => {
            eprint!("{}", e);
            process::exit(e.exit_code());
        }
    };

    init_logging(&LoggingConfig::from_verbosity(args.verbose));

    if let Err(e) = run(&args) {
        tracing::debug!(error = ?e, "conversion failed");
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), ChatpackError> {
    let start = Instant::now();

    let parser_config = args.parser_config();
    let render_config = args.render_config()?;
    let progress = if args.progress {
        stderr_progress("Converting to HTML")
    } else {
        no_progress()
    };

    println!("📦 chatconv v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 CSV:     {}", args.csv_output.display());
    println!("🌐 HTML:    {}", args.html_output.display());
    println!();

    let stats = convert(
        ConversionPaths {
            input: &args.input,
            csv: &args.csv_output,
            html: &args.html_output,
        },
        &parser_config,
        &render_config,
        &progress,
    )?;

    print_summary(&stats, start.elapsed().as_secs_f64());
    Ok(())
}

fn print_summary(stats: &ConversionStats, seconds: f64) {
    println!("Conversion completed successfully.");
    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} messages", stats.parsed);
    if stats.skipped_lines > 0 {
        println!("   Skipped:   {} lines without a timestamp", stats.skipped_lines);
    }
    println!(
        "   Rendered:  {} in HTML ({:.1}%)",
        stats.rendered,
        stats.coverage()
    );
    if stats.dropped > 0 {
        println!("   Dropped:   {} from unmapped senders", stats.dropped);
    }
    println!("   Time:      {:.2}s", seconds);
}
