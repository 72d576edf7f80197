//! The record engine behind synlog: a simulated clock, a sampled request
//! record, and the loop that streams formatted lines into a writer.

pub mod clock;
pub mod err;
pub mod record;

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use rand::{rngs::SmallRng, SeedableRng};
use rand_distr::Normal;

pub use clock::SimClock;
pub use err::{Error, Result};
pub use record::{Method, Record};

/// Latency distribution parameters, in seconds.
const LATENCY_MEAN: f64 = 0.12;
const LATENCY_STDDEV: f64 = 0.08;

/// Produces an endless stream of [Record]s, pacing them with a [SimClock].
#[derive(Debug)]
pub struct Generator {
    clock: SimClock,
    latency: Normal<f64>,
    rng: SmallRng,
}

impl Generator {
    /// Builds a generator starting at `start` (`YYYY-MM-DD HH:MM:SS`).
    ///
    /// With a seed the stream is reproducible; without one the RNG seeds
    /// from OS entropy.
    pub fn new(start: &str, seed: Option<u64>) -> Result<Self> {
        Ok(Self {
            clock: SimClock::from_start(start)?,
            latency: Normal::new(LATENCY_MEAN, LATENCY_STDDEV).expect("finite latency parameters"),
            rng: match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            },
        })
    }

    /// Advances the clock and samples the next record.
    pub fn next_record(&mut self) -> Record {
        let timestamp = self.clock.advance(&mut self.rng);
        Record::sample(&mut self.rng, timestamp, &self.latency)
    }

    /// Writes exactly `count` newline-terminated lines into `writer`.
    pub fn write_to<W: Write>(&mut self, writer: &mut W, count: u64) -> Result<()> {
        for _ in 0..count {
            writeln!(writer, "{}", self.next_record())?;
        }
        Ok(())
    }
}

impl Iterator for Generator {
    type Item = Record;

    fn next(&mut self) -> Option<Record> {
        Some(self.next_record())
    }
}

/// Creates or truncates the file at `path` and fills it with exactly `count`
/// log lines. The handle is released on every exit path.
pub fn generate(path: &Path, count: u64, generator: &mut Generator) -> Result<()> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    generator.write_to(&mut writer, count)?;
    writer.flush()?;
    Ok(())
}
