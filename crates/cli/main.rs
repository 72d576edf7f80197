use std::{
    fs::OpenOptions,
    io::{stdout, BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use synlog_core::Generator;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output file path
    #[arg(long, default_value = "synthetic.log")]
    out: PathBuf,

    /// Number of lines to generate
    #[arg(long, default_value_t = 100_000)]
    lines: u64,

    /// Simulated start timestamp, `YYYY-MM-DD HH:MM:SS`
    #[arg(long, default_value = "2025-01-01 00:00:00")]
    start: String,

    /// Seed the generator for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Build the generator before touching the filesystem; a bad --start
    // must leave the output path alone.
    let mut generator = Generator::new(&args.start, args.seed)?;

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&args.out)
        .with_context(|| format!("cannot open {}", args.out.display()))?;

    let mut stdout = stdout().lock();
    let mut writer = BufWriter::new(file);

    for i in 0..args.lines {
        writeln!(writer, "{}", generator.next_record())?;

        if i % 100_000 == 0 {
            write!(stdout, "\r{}: Wrote {i} lines", args.out.display())?;
            stdout.flush()?;
        }
    }
    writer.flush()?;

    write!(stdout, "\r{}: Wrote {} lines", args.out.display(), args.lines)?;
    stdout.flush()?;
    writeln!(stdout)?;
    Ok(())
}
