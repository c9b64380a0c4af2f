//! Streaming group-by on adjacent traveler IDs.
//!
//! Records for a traveler are expected to be contiguous.  If an ID shows up again after
//! another one, it starts a new and separate trip.
//!

use tracing::trace;

use crate::{Record, Trip};

/// Accumulates the trip being built.
///
#[derive(Debug, Default)]
pub struct Aggregator {
    current: Option<Trip>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one record, returns the previous trip when `rec` starts a new one.
    ///
    pub fn push(&mut self, rec: Record) -> Option<Trip> {
        match self.current.as_mut() {
            Some(trip) if trip.id == rec.id => {
                trip.push(rec.coord);
                None
            }
            _ => {
                trace!("new trip {}", rec.id);
                self.current.replace(Trip::new(rec))
            }
        }
    }

    /// End of input, returns the open trip if any.
    ///
    pub fn finish(&mut self) -> Option<Trip> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tripmeter_formats::Geographic;

    fn records(ids: &[i64]) -> Vec<Record> {
        ids.iter()
            .enumerate()
            .map(|(i, &id)| Record {
                id,
                coord: Geographic::new(i as f64, 0.).into(),
            })
            .collect()
    }

    fn group(recs: Vec<Record>) -> Vec<Trip> {
        let mut agg = Aggregator::new();
        let mut all = recs.into_iter().filter_map(|r| agg.push(r)).collect::<Vec<_>>();
        all.extend(agg.finish());
        all
    }

    #[rstest]
    #[case(&[1, 1, 2, 2, 2, 3], &[(1, 2), (2, 3), (3, 1)])]
    #[case(&[], &[])]
    #[case(&[9], &[(9, 1)])]
    #[case(&[1, 2, 1], &[(1, 1), (2, 1), (1, 1)])]
    #[case(&[4, 4, 4, 4], &[(4, 4)])]
    fn test_trips(#[case] ids: &[i64], #[case] want: &[(i64, usize)]) {
        let got = group(records(ids))
            .iter()
            .map(|t| (t.id, t.len()))
            .collect::<Vec<_>>();
        assert_eq!(want.to_vec(), got);
    }

    #[test]
    fn test_trips_keep_order() {
        let all = group(records(&[1, 1, 2, 2, 2, 3]));

        let lats = all[1]
            .points
            .iter()
            .map(|c| c.to_geographic().latitude)
            .collect::<Vec<_>>();
        assert_eq!(vec![2., 3., 4.], lats);
    }

    #[test]
    fn test_aggregator_push_finish() {
        let mut agg = Aggregator::new();
        let mut recs = records(&[1, 1, 2]).into_iter();

        assert!(agg.push(recs.next().unwrap()).is_none());
        assert!(agg.push(recs.next().unwrap()).is_none());

        let first = agg.push(recs.next().unwrap()).unwrap();
        assert_eq!((1, 2), (first.id, first.len()));

        let last = agg.finish().unwrap();
        assert_eq!((2, 1), (last.id, last.len()));
        assert!(agg.finish().is_none());
    }
}
