//! Command-line front end writing the fixture files.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use ijson_fixtures::boundary;
use ijson_fixtures::config::{
    Config, Effort, DEFAULT_BATCH_LINES, DEFAULT_LINES, DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_QUEUE_DEPTH,
};
use ijson_fixtures::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "ijson-fixtures")]
#[command(author, version, about = "Generate deterministic floating-point test fixtures")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a gzip file of pseudorandom finite doubles, one per line
    Random {
        /// Number of lines to write
        #[arg(long, default_value_t = DEFAULT_LINES)]
        lines: u64,

        /// Four comma-separated 64-bit seed words
        #[arg(long, value_delimiter = ',', default_value = "1,2,3,4")]
        seed: Vec<u64>,

        /// Compressed output file [default: <temp dir>/ijson_random_numbers.txt.gz]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File that receives the absolute output path when done
        #[arg(long)]
        reference: Option<PathBuf>,

        /// Compression effort, 0 (fastest) to 9 (smallest)
        #[arg(long, default_value_t = 9)]
        level: u32,

        /// Log progress every this many lines
        #[arg(long, default_value_t = DEFAULT_PROGRESS_INTERVAL)]
        progress_interval: u64,

        /// Lines per batch handed to the compressor
        #[arg(long, default_value_t = DEFAULT_BATCH_LINES)]
        batch_lines: usize,

        /// Batches allowed to wait for the compressor
        #[arg(long, default_value_t = DEFAULT_QUEUE_DEPTH)]
        queue_depth: usize,
    },

    /// Write the table of bit patterns next to the smallest normal double
    Serial {
        /// Output file
        #[arg(short, long, default_value = boundary::DEFAULT_OUTPUT_NAME)]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Random {
            lines,
            seed,
            output,
            reference,
            level,
            progress_interval,
            batch_lines,
            queue_depth,
        } => {
            let mut builder = Config::builder()
                .seed(seed)
                .lines(lines)
                .effort(Effort::new(level)?)
                .progress_interval(progress_interval)
                .batch_lines(batch_lines)
                .queue_depth(queue_depth);
            if let Some(output) = output {
                builder = builder.output(output);
            }
            if let Some(reference) = reference {
                builder = builder.reference(reference);
            }
            let config = builder.build()?;
            let report = Pipeline::new(config)
                .run()
                .context("pipeline failed")?;
            println!("{}", report.path.display());
        }
        Commands::Serial { output } => {
            boundary::write_table_file(&output)
                .with_context(|| format!("cannot write {}", output.display()))?;
        }
    }
    Ok(())
}
