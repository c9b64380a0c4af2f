//! `Compute` turns every `Trip` it receives into its `Total`.
//!

use std::sync::mpsc::{sync_channel, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

use tracing::{debug, trace};

use tripmeter_formats::{Formula, EARTH_RADIUS};

use crate::{EngineStatus, Runnable, Stats, Total, Trip};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Compute {
    pub formula: Formula,
    pub radius: f64,
}

impl Compute {
    #[tracing::instrument]
    pub fn new(formula: Formula, radius: f64) -> Self {
        Compute { formula, radius }
    }

    #[tracing::instrument(skip(self, stdin, stdout))]
    pub fn execute(
        &self,
        stdin: Receiver<Trip>,
        stdout: SyncSender<Total>,
    ) -> Result<Stats, EngineStatus> {
        trace!("Compute::execute()");

        let mut stats = Stats::default();
        for trip in stdin {
            let total = trip.total(self.formula, self.radius);
            trace!("trip {} points={} distance={}", total.id, total.points, total.distance);

            stats.totals += 1;
            stats.distance += total.distance;
            if stdout.send(total).is_err() {
                debug!("sink is gone, stopping");
                break;
            }
        }
        Ok(stats)
    }
}

impl Default for Compute {
    fn default() -> Self {
        Compute::new(Formula::default(), EARTH_RADIUS)
    }
}

impl Runnable for Compute {
    type Input = Receiver<Trip>;
    type Output = Total;

    fn run(
        self,
        input: Receiver<Trip>,
    ) -> (Receiver<Total>, JoinHandle<Result<Stats, EngineStatus>>) {
        let (stdout, stdin) = sync_channel::<Total>(0);

        let h = thread::spawn(move || {
            trace!("Runnable(Compute)");
            self.execute(input, stdout)
        });
        (stdin, h)
    }
}
