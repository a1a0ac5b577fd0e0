//! Line-oriented case stream reader.
//!
//! Each case is a header line `width height shops queries`, followed by one
//! `x y` line per shop (1-based) and one walking distance per query. A header
//! of `0 0 0 0` ends the stream. The first problem found ends the stream with
//! an [`InputError`]; cases read before it are still returned.

use std::io::BufRead;

use shopspot_core::grid::GridError;
use shopspot_core::position::GridPosition;
use shopspot_core::simulator::Simulator;
use tracing::{debug, trace};

use crate::error::InputError;
use crate::limits::InputLimits;

/// One validated case. Shop positions are stored 0-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position of the case in the stream.
    pub number: usize,
    pub width: u32,
    pub height: u32,
    pub shops: Vec<GridPosition>,
    pub queries: Vec<u32>,
}

impl TestCase {
    /// Build the simulator for this case.
    pub fn simulator(&self) -> Result<Simulator, GridError> {
        Simulator::new(self.width, self.height, &self.shops, self.queries.clone())
    }
}

/// Reads [`TestCase`]s from a buffered source.
///
/// Iterating yields `Ok` for each valid case, at most one `Err`, and then
/// stops. The terminator line also stops iteration.
#[derive(Debug)]
pub struct CaseReader<R> {
    source: R,
    limits: InputLimits,
    buf: String,
    line: usize,
    next_case: usize,
    done: bool,
}

impl<R: BufRead> CaseReader<R> {
    /// Reader with the default problem limits.
    pub fn new(source: R) -> Self {
        Self::with_limits(source, InputLimits::default())
    }

    pub fn with_limits(source: R, limits: InputLimits) -> Self {
        Self {
            source,
            limits,
            buf: String::new(),
            line: 0,
            next_case: 1,
            done: false,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.line
    }

    /// Read the next case, or `None` once the terminator line is reached.
    pub fn read_case(&mut self) -> Result<Option<TestCase>, InputError> {
        let header_line = self.line + 1;
        let Some(header) = self.next_line()? else {
            return Err(InputError::MissingTerminator { line: header_line });
        };
        let Some([width, height, shop_count, query_count]) = parse_ints::<4>(header) else {
            return Err(InputError::MalformedHeader { line: self.line });
        };

        if width == 0 && height == 0 && shop_count == 0 && query_count == 0 {
            debug!(line = self.line, "reached end of case list");
            return Ok(None);
        }

        let limits = self.limits;
        if !(limits.grid_size.contains(width) && limits.grid_size.contains(height)) {
            return Err(InputError::GridSizeOutOfRange {
                line: self.line,
                width,
                height,
                bounds: limits.grid_size,
            });
        }
        if !limits.shop_count.contains(shop_count) {
            return Err(InputError::ShopCountOutOfRange {
                line: self.line,
                count: shop_count,
                bounds: limits.shop_count,
            });
        }
        if !limits.query_count.contains(query_count) {
            return Err(InputError::QueryCountOutOfRange {
                line: self.line,
                count: query_count,
                bounds: limits.query_count,
            });
        }

        // Range checks above keep these within u32 / usize.
        let width = width as u32;
        let height = height as u32;
        let shop_count = shop_count as usize;
        let query_count = query_count as usize;

        let mut shops = Vec::with_capacity(shop_count);
        for _ in 0..shop_count {
            shops.push(self.read_shop(width, height, shop_count)?);
        }

        let mut queries = Vec::with_capacity(query_count);
        for _ in 0..query_count {
            queries.push(self.read_query(query_count)?);
        }

        let case = TestCase {
            number: self.next_case,
            width,
            height,
            shops,
            queries,
        };
        self.next_case += 1;
        debug!(
            case = case.number,
            width,
            height,
            shops = shop_count,
            queries = query_count,
            "read case"
        );
        Ok(Some(case))
    }

    fn read_shop(
        &mut self,
        width: u32,
        height: u32,
        expected: usize,
    ) -> Result<GridPosition, InputError> {
        let line = self.line + 1;
        let Some(text) = self.next_line()? else {
            return Err(InputError::MissingShops { line, expected });
        };
        let Some([x, y]) = parse_ints::<2>(text) else {
            return Err(InputError::MalformedShop { line });
        };
        let inside = (1..=i64::from(width)).contains(&x) && (1..=i64::from(height)).contains(&y);
        match (i32::try_from(x - 1), i32::try_from(y - 1)) {
            (Ok(col), Ok(row)) if inside => Ok(GridPosition::new(col, row)),
            _ => Err(InputError::ShopOutOfBounds {
                line,
                x,
                y,
                width,
                height,
            }),
        }
    }

    fn read_query(&mut self, expected: usize) -> Result<u32, InputError> {
        let line = self.line + 1;
        let Some(text) = self.next_line()? else {
            return Err(InputError::MissingQueries { line, expected });
        };
        let Some([distance]) = parse_ints::<1>(text) else {
            return Err(InputError::MalformedQuery { line });
        };
        let bounds = self.limits.walk_distance;
        if !bounds.contains(distance) {
            return Err(InputError::WalkDistanceOutOfRange {
                line,
                distance,
                bounds,
            });
        }
        Ok(distance as u32)
    }

    /// The next raw line, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<&str>, InputError> {
        self.buf.clear();
        if self.source.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        trace!(line = self.line, text = self.buf.trim_end(), "read line");
        Ok(Some(self.buf.as_str()))
    }
}

impl<R: BufRead> Iterator for CaseReader<R> {
    type Item = Result<TestCase, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_case() {
            Ok(Some(case)) => Some(Ok(case)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Parse exactly `N` whitespace-separated integers.
fn parse_ints<const N: usize>(text: &str) -> Option<[i64; N]> {
    let mut out = [0i64; N];
    let mut tokens = text.split_whitespace();
    for slot in &mut out {
        *slot = tokens.next()?.parse().ok()?;
    }
    if tokens.next().is_some() {
        return None;
    }
    Some(out)
}
