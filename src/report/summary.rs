use serde::Serialize;

use crate::probe::{Endpoint, ProbeOutcome};

/// Outcome tally for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub run: Endpoint,
    pub total: usize,
    pub succeeded: usize,
    pub http_errors: usize,
    pub transport_errors: usize,
    pub duration_ms: u128,
}

impl RunSummary {
    pub fn new(run: Endpoint) -> Self {
        Self {
            run,
            total: 0,
            succeeded: 0,
            http_errors: 0,
            transport_errors: 0,
            duration_ms: 0,
        }
    }

    pub fn record(&mut self, outcome: &ProbeOutcome) {
        self.total += 1;
        match outcome {
            ProbeOutcome::Success { .. } => self.succeeded += 1,
            ProbeOutcome::HttpError { .. } => self.http_errors += 1,
            ProbeOutcome::TransportError { .. } => self.transport_errors += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tallies_each_outcome() {
        let mut summary = RunSummary::new(Endpoint::IpMonitor);
        summary.record(&ProbeOutcome::HttpError { status: 503 });
        summary.record(&ProbeOutcome::TransportError {
            message: "Request failed".into(),
        });
        summary.record(&ProbeOutcome::HttpError { status: 429 });

        assert_eq!(summary.total, 3);
        assert_eq!(summary.succeeded, 0);
        assert_eq!(summary.http_errors, 2);
        assert_eq!(summary.transport_errors, 1);
    }
}
