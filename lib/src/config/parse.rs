//! Reading the initial state from text.
//!
//! The text is a sequence of whitespace-separated integers:
//! the number of rows, the number of columns, the number of generations,
//! and then the coordinates `row column` of each living cell.
//!
//! ```plaintext
//! 5
//! 5
//! 2
//! 1 0
//! 1 1
//! 1 2
//! ```

use super::Config;
use crate::{cells::Coord, error::Error};
use std::str::FromStr;

/// Splits the text into tokens, each with its 1-indexed line number.
fn tokens(s: &str) -> impl Iterator<Item = (usize, &str)> {
    s.lines()
        .enumerate()
        .flat_map(|(i, line)| line.split_whitespace().map(move |t| (i + 1, t)))
}

/// Parses a token as a number.
fn number<T: FromStr>(line: usize, token: &str, what: &str) -> Result<T, Error> {
    token
        .parse()
        .map_err(|_| Error::ParseError(line, format!("expected {}, found '{}'", what, token)))
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = tokens(s);
        let last_line = s.lines().count().max(1);

        let mut header = |what: &str| match tokens.next() {
            Some((line, token)) => number::<isize>(line, token, what).map(|n| (line, n)),
            None => Err(Error::ParseError(last_line, format!("missing {}", what))),
        };
        let (_, rows) = header("the number of rows")?;
        let (_, cols) = header("the number of columns")?;
        let (line, iterations) = header("the number of generations")?;
        if iterations < 0 {
            return Err(Error::ParseError(
                line,
                String::from("the number of generations should not be negative"),
            ));
        }

        let mut alive_cells: Vec<Coord> = Vec::new();
        while let Some((line, token)) = tokens.next() {
            let r: isize = number(line, token, "a row")?;
            let c = match tokens.next() {
                Some((line, token)) => number(line, token, "a column")?,
                None => {
                    return Err(Error::ParseError(
                        line,
                        format!("row {} has no matching column", r),
                    ))
                }
            };
            alive_cells.push((r, c));
        }

        Ok(Config::new(rows, cols, iterations as u64).set_alive_cells(alive_cells))
    }
}
