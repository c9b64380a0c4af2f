//! Job component of the engine
//!
//! A `Job` wires the two stages together with rendezvous channels and acts as the final
//! consumer itself:
//!
//! ```text
//! Load (file -> Trip) ==> Compute (Trip -> Total) ==> sink (caller)
//! ```
//!
//! Every stage runs in its own thread and hands back its `Stats` or its error when joined.
//! Nothing in here ever exits the process, the caller decides what to do with the error.
//!
use std::path::PathBuf;
use std::thread::JoinHandle;

use derive_builder::Builder;
use eyre::Result;
use tracing::{error, info, trace};

use tripmeter_formats::Decoder;

use crate::{Compute, EngineStatus, Load, Options, Runnable, Stats, Total};

/// One run over one input file.
///
#[derive(Builder, Clone, Debug)]
pub struct Job {
    /// Name of the job
    #[builder(default = "String::from(\"trip-distance\")")]
    pub name: String,
    /// Input file
    #[builder(setter(into))]
    pub input: PathBuf,
    /// Runtime options
    #[builder(default)]
    pub opts: Options,
    /// Job State
    #[builder(default = "JobState::Created")]
    pub state: JobState,
}

/// Lifecycle of a `Job`.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub enum JobState {
    /// Just allocated
    #[default]
    Created,
    /// Executing
    Running,
    /// Finished
    Completed,
    /// Failed somewhere
    Zombie,
}

impl Job {
    #[tracing::instrument(skip(self))]
    #[inline]
    pub fn set(&mut self, s: JobState) -> &mut Self {
        self.state = s;
        self
    }

    #[inline]
    pub fn state(&self) -> JobState {
        self.state.clone()
    }

    /// Run the pipeline, every `Total` is handed to `sink` in emission order.
    ///
    /// A failing sink stops the run: its receiver is dropped so upstream sends fail and both
    /// stages wind down.  All stages are always joined.  The first error is returned, sink
    /// first, then stages in pipeline order.
    ///
    #[tracing::instrument(skip(self, sink), fields(name = %self.name))]
    pub fn run<F>(&mut self, mut sink: F) -> Result<Stats>
    where
        F: FnMut(Total) -> Result<()>,
    {
        trace!("Job::run({})", self.input.display());
        self.set(JobState::Running);

        let load = Load::new(&self.input, Decoder::new(self.opts.debug));
        let compute = Compute::new(self.opts.formula, self.opts.radius);

        let (trips, h_load) = load.run(());
        let (totals, h_compute) = compute.run(trips);

        let mut sunk = Ok(());
        for total in totals.iter() {
            if let Err(e) = sink(total) {
                error!("sink: {e}");
                sunk = Err(e);
                break;
            }
        }
        drop(totals);

        let loaded = join("load", h_load);
        let computed = join("compute", h_compute);

        let res = sunk.and_then(|_| Ok(loaded? + computed?));
        match res {
            Ok(stats) => {
                info!("{stats}");
                self.set(JobState::Completed);
                Ok(stats)
            }
            Err(e) => {
                self.set(JobState::Zombie);
                Err(e)
            }
        }
    }
}

/// Wait for a stage, a panic becomes an error.
///
fn join(
    name: &'static str,
    h: JoinHandle<std::result::Result<Stats, EngineStatus>>,
) -> std::result::Result<Stats, EngineStatus> {
    h.join().map_err(|_| EngineStatus::StageFailed(name))?
}
