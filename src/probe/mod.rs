//! Repeated GET probes against the HK Post endpoints, reported as they land.

pub mod plan;
pub mod snapshot;

use std::io::{self, Write};
use std::time::Duration;

use serde::Serialize;
use tokio::time::Instant;

use crate::http::client::Transport;
use crate::http::request::ProbeRequest;
use crate::report::Reporter;
use crate::report::summary::RunSummary;

use snapshot::{IpMonitorFields, SearchFields, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Endpoint {
    IpMonitor,
    SearchBuildings,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::IpMonitor => "/hk-post/ip-monitor",
            Endpoint::SearchBuildings => "/hk-post/search-buildings",
        }
    }

    pub fn snapshot(self, body: &serde_json::Map<String, serde_json::Value>) -> Snapshot {
        match self {
            Endpoint::IpMonitor => Snapshot::IpMonitor(IpMonitorFields::from_body(body)),
            Endpoint::SearchBuildings => Snapshot::SearchBuildings(SearchFields::from_body(body)),
        }
    }
}

/// One planned request within a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Probe {
    pub query: Option<String>,
    pub params: Vec<(String, String)>,
}

impl Probe {
    pub fn search(term: &str, lang: &str) -> Self {
        Self {
            query: Some(term.to_string()),
            params: vec![
                ("query".to_string(), term.to_string()),
                ("lang".to_string(), lang.to_string()),
            ],
        }
    }
}

/// A sequence of probes against one endpoint with a fixed spacing.
#[derive(Debug, Clone)]
pub struct RunSpec {
    pub endpoint: Endpoint,
    pub timeout: Duration,
    pub delay: Duration,
    pub probes: Vec<Probe>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Success { fields: Snapshot },
    HttpError { status: u16 },
    TransportError { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeRecord {
    pub run: Endpoint,
    /// 1-based.
    pub index: usize,
    pub query: Option<String>,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

/// Performs `runs` in order between the intro banner and the closing notes.
pub async fn run_all<T: Transport, W: Write>(
    transport: &T,
    base_url: &str,
    runs: &[RunSpec],
    reporter: &mut Reporter<W>,
) -> io::Result<Vec<RunSummary>> {
    reporter.intro()?;

    let mut summaries = Vec::with_capacity(runs.len());
    for spec in runs {
        summaries.push(run(transport, base_url, spec, reporter).await?);
    }

    reporter.closing_notes()?;
    Ok(summaries)
}

/// Sends every probe in `spec` one after another, sleeping `spec.delay`
/// between them. Probe failures are reported and never stop the run; only a
/// failure to write the report does.
pub async fn run<T: Transport, W: Write>(
    transport: &T,
    base_url: &str,
    spec: &RunSpec,
    reporter: &mut Reporter<W>,
) -> io::Result<RunSummary> {
    let target = ProbeRequest::new(base_url, spec.endpoint.path(), spec.timeout);
    log::info!("starting {} probes against {}", spec.probes.len(), target.url);
    reporter.run_started(spec.endpoint, &target.url)?;

    let started = Instant::now();
    let mut summary = RunSummary::new(spec.endpoint);

    for (i, probe) in spec.probes.iter().enumerate() {
        let request = target.clone().with_params(probe.params.clone());
        let outcome = probe_once(transport, spec.endpoint, &request).await;
        summary.record(&outcome);

        reporter.probe(&ProbeRecord {
            run: spec.endpoint,
            index: i + 1,
            query: probe.query.clone(),
            outcome,
        })?;

        if i + 1 < spec.probes.len() {
            tokio::time::sleep(spec.delay).await;
        }
    }

    summary.duration_ms = started.elapsed().as_millis();
    reporter.run_finished(&summary)?;
    Ok(summary)
}

async fn probe_once<T: Transport>(transport: &T, endpoint: Endpoint, request: &ProbeRequest) -> ProbeOutcome {
    match transport.get(request).await {
        Ok(response) if response.status == 200 => {
            let body = response.body.unwrap_or_default();
            ProbeOutcome::Success {
                fields: endpoint.snapshot(&body),
            }
        }
        Ok(response) => {
            log::warn!("{} answered HTTP {}", request.url, response.status);
            ProbeOutcome::HttpError {
                status: response.status,
            }
        }
        Err(err) => {
            log::warn!("{} failed: {err}", request.url);
            ProbeOutcome::TransportError {
                message: err.to_string(),
            }
        }
    }
}
