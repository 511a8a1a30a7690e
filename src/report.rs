use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::time::Instant;
use tracing::info;

use crate::error::Result;

/// The `[default, blocking]` pair recorded for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "Vec<f64>")]
pub struct DomainCounts {
    pub default: f64,
    pub blocking: f64,
}

// Decoded through a Vec so that a wrong arity is a data error rather than
// trailing characters in the array.
impl TryFrom<Vec<f64>> for DomainCounts {
    type Error = String;

    fn try_from(counts: Vec<f64>) -> std::result::Result<Self, Self::Error> {
        match counts[..] {
            [default, blocking] => Ok(DomainCounts { default, blocking }),
            _ => Err(format!(
                "expected [default_count, blocking_count], found {} values",
                counts.len()
            )),
        }
    }
}

/// Domain name to counts, iterated in key order.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Report {
    domains: BTreeMap<String, DomainCounts>,
}

impl Report {
    /// Decodes a whole JSON document. Nothing after the closing brace but
    /// whitespace is accepted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let start_time = Instant::now();
        info!(
            action = "start",
            component = "report_decode",
            "Reading report from input"
        );

        let report: Report = serde_json::from_reader(reader)?;

        info!(
            action = "complete",
            component = "report_decode",
            domain_count = report.len(),
            duration_ms = start_time.elapsed().as_millis(),
            "Report decoded"
        );
        Ok(report)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Self::from_reader(input.as_bytes())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DomainCounts)> {
        self.domains.iter().map(|(domain, counts)| (domain.as_str(), counts))
    }

    pub fn get(&self, domain: &str) -> Option<&DomainCounts> {
        self.domains.get(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, DomainCounts)> for Report {
    fn from_iter<I: IntoIterator<Item = (S, DomainCounts)>>(iter: I) -> Self {
        Report {
            domains: iter
                .into_iter()
                .map(|(domain, counts)| (domain.into(), counts))
                .collect(),
        }
    }
}
