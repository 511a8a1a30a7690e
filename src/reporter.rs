use std::io::{BufWriter, Read, Write};
use std::time::Instant;
use tracing::info;

use crate::error::Result;
use crate::report::Report;
use crate::stats::RunStats;
use crate::straggler::{find_stragglers, Straggler};

pub fn write_stragglers<W: Write>(stragglers: &[Straggler], mut output: W) -> Result<()> {
    for straggler in stragglers {
        writeln!(output, "{}", straggler)?;
    }
    Ok(())
}

/// Decodes the whole report before writing anything, so a bad document
/// leaves `output` untouched.
pub fn run_report<R: Read, W: Write>(input: R, output: W) -> Result<RunStats> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "straggler_report",
        "Starting straggler report"
    );

    let report = Report::from_reader(input)?;
    let stragglers = find_stragglers(&report);

    let mut output = BufWriter::new(output);
    write_stragglers(&stragglers, &mut output)?;
    output.flush()?;

    let stats = RunStats::tally(report.len(), &stragglers);
    info!(
        action = "complete",
        component = "straggler_report",
        domains_scanned = stats.domains_scanned,
        default_stragglers = stats.default_stragglers,
        blocking_stragglers = stats.blocking_stragglers,
        duration_ms = total_start_time.elapsed().as_millis(),
        "Straggler report completed"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReportError;

    fn run(input: &str) -> (Result<RunStats>, String) {
        let mut output = Vec::new();
        let result = run_report(input.as_bytes(), &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn empty_object_prints_nothing() {
        let (result, output) = run("{}");
        assert_eq!(result.unwrap(), RunStats::default());
        assert_eq!(output, "");
    }

    #[test]
    fn prints_one_line_per_straggler() {
        let (result, output) =
            run(r#"{"example.com": [3, 10], "foo.org": [8, 2], "ok.net": [5, 7]}"#);
        let stats = result.unwrap();
        assert_eq!(output, "default: example.com\nblocking: foo.org\n");
        assert_eq!(stats.domains_scanned, 3);
        assert_eq!(stats.default_stragglers, 1);
        assert_eq!(stats.blocking_stragglers, 1);
        assert_eq!(stats.lines_written(), 2);
    }

    #[test]
    fn both_queues_for_one_domain() {
        let (result, output) = run(r#"{"c.com": [2, 2]}"#);
        assert_eq!(result.unwrap().lines_written(), 2);
        assert_eq!(output, "default: c.com\nblocking: c.com\n");
    }

    #[test]
    fn failures_write_nothing() {
        let (result, output) = run("not valid json");
        assert!(matches!(result, Err(ReportError::Parse(_))));
        assert_eq!(output, "");

        let (result, output) = run(r#"{"a.com": [1, 2], "b.com": [1]}"#);
        assert!(matches!(result, Err(ReportError::Structural(_))));
        assert_eq!(output, "");
    }

    #[test]
    fn write_errors_surface_as_io() {
        struct Closed;
        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = run_report(r#"{"a.com": [1, 1]}"#.as_bytes(), Closed);
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
