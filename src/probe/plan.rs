//! The two canned runs the binary performs.

use std::time::Duration;

use crate::cli::{Lang, Phase};

use super::{Endpoint, Probe, RunSpec};

pub const DEFAULT_BASE_URL: &str = "https://1cocrawler.rick0j1ang.workers.dev";

pub const IP_MONITOR_PROBES: usize = 20;
const IP_MONITOR_TIMEOUT: Duration = Duration::from_secs(10);
const IP_MONITOR_DELAY: Duration = Duration::from_secs(1);

pub const SEARCH_TERMS: [&str; 5] = ["beneville", "central", "ifc", "landmark", "times square"];
const SEARCH_TIMEOUT: Duration = Duration::from_secs(15);
const SEARCH_DELAY: Duration = Duration::from_secs(2);

pub fn ip_monitor() -> RunSpec {
    RunSpec {
        endpoint: Endpoint::IpMonitor,
        timeout: IP_MONITOR_TIMEOUT,
        delay: IP_MONITOR_DELAY,
        probes: vec![Probe::default(); IP_MONITOR_PROBES],
    }
}

pub fn search_buildings(lang: Lang) -> RunSpec {
    RunSpec {
        endpoint: Endpoint::SearchBuildings,
        timeout: SEARCH_TIMEOUT,
        delay: SEARCH_DELAY,
        probes: SEARCH_TERMS
            .iter()
            .map(|term| Probe::search(term, lang.as_str()))
            .collect(),
    }
}

/// Runs selected by `phase`, in the order they execute.
pub fn runs(phase: Phase, lang: Lang) -> Vec<RunSpec> {
    match phase {
        Phase::All => vec![ip_monitor(), search_buildings(lang)],
        Phase::IpMonitor => vec![ip_monitor()],
        Phase::SearchBuildings => vec![search_buildings(lang)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_monitor_sends_twenty_bare_probes() {
        let run = ip_monitor();
        assert_eq!(run.endpoint, Endpoint::IpMonitor);
        assert_eq!(run.probes.len(), 20);
        assert!(run.probes.iter().all(|probe| probe.params.is_empty() && probe.query.is_none()));
        assert_eq!(run.timeout, Duration::from_secs(10));
        assert_eq!(run.delay, Duration::from_secs(1));
    }

    #[test]
    fn search_rotates_through_terms() {
        let run = search_buildings(Lang::EnUs);
        let queries: Vec<_> = run.probes.iter().filter_map(|probe| probe.query.as_deref()).collect();
        assert_eq!(queries, SEARCH_TERMS);
        assert_eq!(
            run.probes[4].params,
            vec![
                ("query".to_string(), "times square".to_string()),
                ("lang".to_string(), "en_US".to_string()),
            ]
        );
        assert_eq!(run.timeout, Duration::from_secs(15));
        assert_eq!(run.delay, Duration::from_secs(2));
    }

    #[test]
    fn phase_selects_runs() {
        let all: Vec<_> = runs(Phase::All, Lang::EnUs).iter().map(|run| run.endpoint).collect();
        assert_eq!(all, [Endpoint::IpMonitor, Endpoint::SearchBuildings]);

        let search = runs(Phase::SearchBuildings, Lang::ZhTw);
        assert_eq!(search.len(), 1);
        assert_eq!(search[0].probes[0].params[1].1, "zh_TW");
    }
}
