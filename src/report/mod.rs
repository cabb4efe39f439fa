//! Console output for probe runs: human-readable text by default, or one JSON
//! object per line.

pub mod summary;

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::probe::snapshot::{MISSING, Snapshot, preview};
use crate::probe::{Endpoint, ProbeOutcome, ProbeRecord};

use summary::RunSummary;

const BANNER_WIDTH: usize = 60;
const SEPARATOR_WIDTH: usize = 40;
const USER_AGENT_PREVIEW: usize = 50;

pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    runs_started: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            runs_started: 0,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn intro(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(self.out, "Cloudflare Workers IP monitor probe")?;
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))
    }

    pub fn run_started(&mut self, endpoint: Endpoint, url: &str) -> io::Result<()> {
        self.runs_started += 1;
        if self.format == OutputFormat::Json {
            return Ok(());
        }

        if self.runs_started > 1 {
            writeln!(self.out)?;
        }
        let title = match endpoint {
            Endpoint::IpMonitor => "Testing the Cloudflare Workers IP switching mechanism",
            Endpoint::SearchBuildings => "Testing the building search endpoint (with IP logging)",
        };
        writeln!(self.out, "{title}")?;
        writeln!(self.out, "API endpoint: {url}")?;
        writeln!(self.out, "{}", "=".repeat(BANNER_WIDTH))
    }

    pub fn probe(&mut self, record: &ProbeRecord) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.probe_text(record)?,
            OutputFormat::Json => self.json_line(record)?,
        }
        self.out.flush()
    }

    pub fn run_finished(&mut self, summary: &RunSummary) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            #[derive(Serialize)]
            struct SummaryLine<'a> {
                summary: &'a RunSummary,
            }
            return self.json_line(&SummaryLine { summary });
        }

        let title = match summary.run {
            Endpoint::IpMonitor => "IP monitor run complete",
            Endpoint::SearchBuildings => "Building search run complete",
        };
        writeln!(
            self.out,
            "{title}: {}/{} succeeded, {} HTTP errors, {} transport errors ({:.1}s)",
            summary.succeeded,
            summary.total,
            summary.http_errors,
            summary.transport_errors,
            summary.duration_ms as f64 / 1000.0
        )?;
        if summary.run == Endpoint::IpMonitor {
            writeln!(self.out, "Check your log service for the detailed IP change records")?;
        }
        Ok(())
    }

    pub fn closing_notes(&mut self) -> io::Result<()> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }
        writeln!(self.out)?;
        writeln!(self.out, "Summary:")?;
        writeln!(
            self.out,
            "1. The ip-monitor endpoint records the IP information of every request in your log service"
        )?;
        writeln!(self.out, "2. The search-buildings endpoint records IP information on every search too")?;
        writeln!(self.out, "3. Check the event log of your log service for the recorded entries")?;
        writeln!(self.out, "4. Watch for the Cloudflare Workers IP switching pattern and frequency")
    }

    fn probe_text(&mut self, record: &ProbeRecord) -> io::Result<()> {
        let index = record.index;
        let query = record.query.as_deref().unwrap_or(MISSING);

        match (&record.outcome, record.run) {
            (ProbeOutcome::Success { fields: Snapshot::IpMonitor(fields) }, _) => {
                writeln!(self.out, "Request #{index:2}: {}", fields.timestamp)?;
                writeln!(self.out, "  CF-Ray: {}", fields.cf_ray)?;
                writeln!(self.out, "  CF-Connecting-IP: {}", fields.cf_connecting_ip)?;
                writeln!(self.out, "  CF-IPCountry: {}", fields.cf_ipcountry)?;
                writeln!(self.out, "  X-Forwarded-For: {}", fields.x_forwarded_for)?;
                writeln!(
                    self.out,
                    "  User-Agent: {}...",
                    preview(&fields.user_agent, USER_AGENT_PREVIEW)
                )?;
                writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
            }
            (ProbeOutcome::Success { fields: Snapshot::SearchBuildings(fields) }, _) => {
                writeln!(self.out, "Search #{index}: '{query}' - found {} buildings", fields.count)?;
                writeln!(self.out, "  Session ID: {}", fields.session_id)?;
                writeln!(self.out, "  Timestamp: {}", fields.timestamp)?;
                writeln!(self.out, "{}", "-".repeat(SEPARATOR_WIDTH))
            }
            (ProbeOutcome::HttpError { status }, Endpoint::IpMonitor) => {
                writeln!(self.out, "Request #{index:2}: failed - HTTP {status}")
            }
            (ProbeOutcome::HttpError { status }, Endpoint::SearchBuildings) => {
                writeln!(self.out, "Search #{index}: '{query}' - failed HTTP {status}")
            }
            (ProbeOutcome::TransportError { message }, Endpoint::IpMonitor) => {
                writeln!(self.out, "Request #{index:2}: error - {message}")
            }
            (ProbeOutcome::TransportError { message }, Endpoint::SearchBuildings) => {
                writeln!(self.out, "Search #{index}: '{query}' - error {message}")
            }
        }
    }

    fn json_line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value)?;
        writeln!(self.out)
    }
}
