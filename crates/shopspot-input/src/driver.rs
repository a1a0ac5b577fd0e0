//! Read cases, run them, write reports.

use std::io::{BufRead, Write};

use shopspot_core::grid::GridError;
use shopspot_core::search::OptimalLocation;
use shopspot_core::simulator::Simulator;
use tracing::info;

use crate::error::InputError;
use crate::parser::CaseReader;
use crate::report::CaseReport;

/// How each case's queries are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// One query after another, one row-major scan per query.
    #[default]
    Sequential,
    /// Queries and rows on the rayon thread pool. Falls back to
    /// [`RunMode::Sequential`] when built without the `parallel` feature.
    Parallel,
}

impl RunMode {
    pub fn run(self, sim: &Simulator) -> Vec<OptimalLocation> {
        match self {
            RunMode::Sequential => sim.run(),
            #[cfg(feature = "parallel")]
            RunMode::Parallel => sim.run_par(),
            #[cfg(not(feature = "parallel"))]
            RunMode::Parallel => {
                tracing::warn!("built without the `parallel` feature, running sequentially");
                sim.run()
            }
        }
    }
}

/// Errors that end a driver run.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// A case passed the reader's limits but its grid cannot be built. Only
    /// reachable with limits that skipped [`InputLimits::validate`], such as
    /// a grid size range above [`ShopGrid::MAX_CELLS`] cells.
    ///
    /// [`InputLimits::validate`]: crate::limits::InputLimits::validate
    /// [`ShopGrid::MAX_CELLS`]: shopspot_core::grid::ShopGrid::MAX_CELLS
    #[error("case {case}: {source}")]
    Grid { case: usize, source: GridError },

    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}

/// Process every case from `reader`, writing one report per case to `out`.
/// Returns the number of cases answered.
///
/// Reports for cases read before an input error are written and flushed
/// before the error is returned.
pub fn process_stream<R, W>(
    reader: CaseReader<R>,
    out: &mut W,
    mode: RunMode,
) -> Result<usize, DriverError>
where
    R: BufRead,
    W: Write,
{
    let mut answered = 0;
    for case in reader {
        let case = match case {
            Ok(case) => case,
            Err(e) => {
                out.flush().map_err(DriverError::Output)?;
                return Err(e.into());
            }
        };
        let sim = case.simulator().map_err(|source| DriverError::Grid {
            case: case.number,
            source,
        })?;
        let results = mode.run(&sim);
        write!(out, "{}", CaseReport::new(case.number, &results)).map_err(DriverError::Output)?;
        answered += 1;
    }
    out.flush().map_err(DriverError::Output)?;
    info!(cases = answered, "finished case stream");
    Ok(answered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::limits::{Bounds, InputLimits};

    fn run(input: &str, mode: RunMode) -> (Result<usize, DriverError>, String) {
        let mut out = Vec::new();
        let result = process_stream(CaseReader::new(input.as_bytes()), &mut out, mode);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn answers_every_case() {
        let input = "3 3 1 1\n2 2\n1\n1 1 0 2\n0\n3\n0 0 0 0\n";
        let (result, out) = run(input, RunMode::Sequential);
        assert_eq!(result.unwrap(), 2);
        assert_eq!(out, "\nCase 1:\n1 (2,1)\n\nCase 2:\n0 (1,1)\n0 (1,1)\n");
    }

    #[test]
    fn modes_agree() {
        let input = "5 4 4 3\n1 1\n5 4\n3 2\n3 2\n0\n2\n9\n0 0 0 0\n";
        let (seq, seq_out) = run(input, RunMode::Sequential);
        let (par, par_out) = run(input, RunMode::Parallel);
        assert_eq!(seq.unwrap(), par.unwrap());
        assert_eq!(seq_out, par_out);
    }

    #[test]
    fn oversized_grid_is_an_error_not_an_abort() {
        let limits = InputLimits {
            grid_size: Bounds::new(1, u32::MAX),
            ..InputLimits::default()
        };
        let reader = CaseReader::with_limits("1 3000000000 0 1\n1\n0 0 0 0\n".as_bytes(), limits);
        let mut out = Vec::new();
        let result = process_stream(reader, &mut out, RunMode::Sequential);
        assert!(matches!(
            result,
            Err(DriverError::Grid {
                case: 1,
                source: GridError::TooLarge { .. }
            })
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn keeps_output_before_error() {
        let (result, out) = run("1 1 0 1\n0\n2 2 0 1\n200\n", RunMode::Sequential);
        assert!(matches!(
            result,
            Err(DriverError::Input(InputError::WalkDistanceOutOfRange { .. }))
        ));
        assert_eq!(out, "\nCase 1:\n0 (1,1)\n");
    }
}
