use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use sortdiff::utils::decode_best_effort;
use sortdiff::{build_options, logging, run_sortdiff, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    let opts = build_options(&args)?;

    if args.output_a == args.output_b {
        anyhow::bail!("output_a and output_b cannot be the same file.");
    }

    logging::init(opts.log_format, opts.log_file.as_deref())?;

    let counters = run_sortdiff(
        &args.input_a,
        &args.input_b,
        &args.output_a,
        &args.output_b,
        &opts,
    )?;

    let a = args.input_a.display();
    let b = args.input_b.display();

    println!("== Comparison Results ==");
    println!("Lines read from {a}: {}", counters.total_a);
    println!("Lines read from {b}: {}", counters.total_b);
    println!("Unique lines in {a}: {}", counters.unique_a);
    println!("Unique lines in {b}: {}", counters.unique_b);

    if !opts.quiet {
        for (input, output) in [(&a, &args.output_a), (&b, &args.output_b)] {
            let bytes = fs::read(output)
                .with_context(|| format!("Failed to read back {}", output.display()))?;
            let content = decode_best_effort(&bytes);
            println!();
            println!("== Unique Lines in {input} ==");
            if !content.is_empty() {
                println!("{content}");
            }
        }
    }

    println!();
    println!("Results saved to:");
    println!(" - {}", args.output_a.display());
    println!(" - {}", args.output_b.display());

    Ok(())
}
