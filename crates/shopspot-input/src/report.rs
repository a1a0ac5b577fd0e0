//! Console report for one case.

use std::fmt;

use shopspot_core::position::GridPosition;
use shopspot_core::search::OptimalLocation;

/// Added to every 0-based position before it is shown.
pub const POSITION_OUTPUT_OFFSET: GridPosition = GridPosition { x: 1, y: 1 };

/// The answers for one case, rendered as
///
/// ```text
///
/// Case 1:
/// 1 (2,1)
/// ```
///
/// with a leading blank line and one `<shops> (<x>,<y>)` line per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseReport<'a> {
    pub number: usize,
    pub results: &'a [OptimalLocation],
}

impl<'a> CaseReport<'a> {
    pub fn new(number: usize, results: &'a [OptimalLocation]) -> Self {
        Self { number, results }
    }
}

impl fmt::Display for CaseReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Case {}:", self.number)?;
        for result in self.results {
            writeln!(
                f,
                "{} {}",
                result.shop_count,
                result.position + POSITION_OUTPUT_OFFSET
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopspot_core::test_utils::pos;

    #[test]
    fn renders_one_based_positions() {
        let results = [
            OptimalLocation::new(1, pos(1, 0)),
            OptimalLocation::new(0, pos(0, 0)),
        ];
        assert_eq!(
            CaseReport::new(1, &results).to_string(),
            "\nCase 1:\n1 (2,1)\n0 (1,1)\n"
        );
    }

    #[test]
    fn renders_case_without_results() {
        assert_eq!(CaseReport::new(7, &[]).to_string(), "\nCase 7:\n");
    }
}
