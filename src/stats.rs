use crate::straggler::{Queue, Straggler};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub domains_scanned: usize,
    pub default_stragglers: usize,
    pub blocking_stragglers: usize,
}

impl RunStats {
    pub fn tally(domains_scanned: usize, stragglers: &[Straggler]) -> Self {
        let mut stats = RunStats {
            domains_scanned,
            ..Default::default()
        };
        for straggler in stragglers {
            match straggler.queue {
                Queue::Default => stats.default_stragglers += 1,
                Queue::Blocking => stats.blocking_stragglers += 1,
            }
        }
        stats
    }

    pub fn lines_written(&self) -> usize {
        self.default_stragglers + self.blocking_stragglers
    }
}
