use std::fmt;

use crate::report::{DomainCounts, Report};

/// Counts strictly below this flag a domain.
pub const THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Queue {
    Default,
    Blocking,
}

impl Queue {
    pub const ALL: [Queue; 2] = [Queue::Default, Queue::Blocking];

    pub fn label(self) -> &'static str {
        match self {
            Queue::Default => "default",
            Queue::Blocking => "blocking",
        }
    }

    pub fn count(self, counts: &DomainCounts) -> f64 {
        match self {
            Queue::Default => counts.default,
            Queue::Blocking => counts.blocking,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Straggler {
    pub queue: Queue,
    pub domain: String,
}

impl fmt::Display for Straggler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.queue.label(), self.domain)
    }
}

pub fn is_straggler(count: f64) -> bool {
    count < THRESHOLD
}

/// Every straggler in the report, in domain order, `default` before
/// `blocking` for the same domain.
pub fn find_stragglers(report: &Report) -> Vec<Straggler> {
    report
        .iter()
        .flat_map(|(domain, counts)| {
            Queue::ALL
                .into_iter()
                .filter(move |queue| is_straggler(queue.count(counts)))
                .map(move |queue| Straggler {
                    queue,
                    domain: domain.to_string(),
                })
        })
        .collect()
}
