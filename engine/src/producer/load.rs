//! `Load` is the first stage of the pipeline: it reads the input file, decodes every line
//! and sends complete trips downstream.
//!

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use tripmeter_formats::Decoder;

use crate::{Aggregator, EngineStatus, Record, Runnable, Stats, Trip};

/// The Load task
///
#[derive(Clone, Debug, PartialEq)]
pub struct Load {
    /// File path
    pub path: PathBuf,
    decoder: Decoder,
}

impl Load {
    #[tracing::instrument]
    pub fn new(path: &Path, decoder: Decoder) -> Self {
        trace!("New Load {}", path.display());
        Load {
            path: path.to_path_buf(),
            decoder,
        }
    }

    /// Read, decode and group.  The file is closed when we return, whatever the outcome.
    ///
    #[tracing::instrument(skip(self, stdout))]
    pub fn execute(&self, stdout: SyncSender<Trip>) -> Result<Stats, EngineStatus> {
        trace!("Load::execute()");

        let fh = File::open(&self.path)
            .map_err(|e| EngineStatus::FileError(self.path.display().to_string(), e))?;
        let bfh = BufReader::new(fh);

        let mut stats = Stats::default();
        let mut agg = Aggregator::new();

        for (n, line) in bfh.lines().enumerate() {
            let line = line.map_err(|source| EngineStatus::Unreadable { line: n + 1, source })?;
            stats.lines += 1;

            let rec = Record::parse(n + 1, &line, &self.decoder)?;
            stats.record(rec.coord.kind());

            if let Some(trip) = agg.push(rec) {
                if stdout.send(trip).is_err() {
                    debug!("downstream is gone, stopping");
                    return Ok(stats);
                }
                stats.trips += 1;
            }
        }

        if let Some(trip) = agg.finish() {
            match stdout.send(trip) {
                Ok(()) => stats.trips += 1,
                Err(_) => debug!("downstream is gone, last trip dropped"),
            }
        }
        Ok(stats)
    }
}

impl Runnable for Load {
    type Input = ();
    type Output = Trip;

    fn run(self, _input: ()) -> (Receiver<Trip>, JoinHandle<Result<Stats, EngineStatus>>) {
        let (stdout, stdin) = sync_channel::<Trip>(0);

        let h = thread::spawn(move || {
            trace!("Runnable(Load)");
            self.execute(stdout)
        });
        (stdin, h)
    }
}
