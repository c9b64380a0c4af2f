//! Streaming pipeline turning a log of readings into per-trip distances.
//!
//! Input lines are `<id><TAB><coordinate>`, where the coordinate is any of the formats known
//! to `tripmeter-formats`.  Consecutive lines with the same traveler ID form a `Trip`, each
//! trip gives one `Total`.
//!
//! The `Job` runs the `Load` and `Compute` stages in their own threads, connected by
//! zero-capacity channels so there is at most one item in flight between two stages.
//!

use std::fmt::Debug;
use std::sync::mpsc::Receiver;
use std::thread::JoinHandle;

pub use aggregate::*;
pub use error::*;
pub use job::*;
pub use middle::*;
pub use options::*;
pub use producer::*;
pub use record::*;
pub use stats::*;
pub use trip::*;

mod aggregate;
mod error;
mod job;
mod middle;
mod options;
mod producer;
mod record;
mod stats;
mod trip;

/// A pipeline stage: takes its input, spawns its thread and returns the receiving end of its
/// output along with the handle to join it.
///
pub trait Runnable: Debug {
    type Input;
    type Output: Send + 'static;

    fn run(
        self,
        input: Self::Input,
    ) -> (
        Receiver<Self::Output>,
        JoinHandle<Result<Stats, EngineStatus>>,
    );
}

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
