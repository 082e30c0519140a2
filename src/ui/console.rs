use std::io::{self, Write};

use crate::engine::pipeline::RunResult;
use crate::model::report::{AnalysisOutcome, Recommendation};
use crate::ui::{Presenter, INSUFFICIENT_MESSAGE};

pub const EXIT_OK: u8 = 0;
pub const EXIT_CONFIG: u8 = 1;
pub const EXIT_EXTRACTION_FAILED: u8 = 2;
pub const EXIT_MALFORMED_RESPONSE: u8 = 3;

/// Process exit status for a finished console run.
pub fn exit_code(run: &RunResult) -> u8 {
    match run {
        Ok(_) => EXIT_OK,
        Err(e) if e.is_service_failure() => EXIT_EXTRACTION_FAILED,
        Err(_) => EXIT_MALFORMED_RESPONSE,
    }
}

/// Plain-text renderer: results to `out`, diagnostics to `err`.
pub struct ConsolePresenter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl ConsolePresenter<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<W: Write, E: Write> ConsolePresenter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }

    fn write_recommendations(&mut self, recs: &[Recommendation]) -> io::Result<()> {
        writeln!(self.out, "\nTop Strategic Recommendations:\n")?;
        for rec in recs {
            writeln!(self.out, "{}. {}", rec.rank, rec.way)?;
            writeln!(
                self.out,
                "   Utility Score: {:.2}, Risk Score: {:.2}\n",
                rec.utility_score, rec.risk_score
            )?;
        }
        Ok(())
    }
}

impl<W: Write, E: Write> Presenter for ConsolePresenter<W, E> {
    fn present(&mut self, run: &RunResult) -> io::Result<()> {
        let report = match run {
            Ok(report) => report,
            Err(e) => {
                writeln!(self.err, "error: {e}")?;
                return self.err.flush();
            }
        };

        match &report.outcome {
            AnalysisOutcome::InsufficientElements { ends, means } => {
                writeln!(
                    self.err,
                    "warning: {INSUFFICIENT_MESSAGE} (ends: {ends}, means: {means})"
                )?;
            }
            AnalysisOutcome::Ranked(recs) => {
                self.write_recommendations(recs)?;

                if !report.headlines.is_empty() {
                    writeln!(self.out, "Related Real-Time News:\n")?;
                    for headline in &report.headlines {
                        writeln!(self.out, "{headline}")?;
                    }
                }
            }
        }

        self.out.flush()?;
        self.err.flush()
    }
}
