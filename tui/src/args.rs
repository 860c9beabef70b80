//! Parsing command-line arguments.

use clap::{error::ErrorKind, value_parser, Arg, ArgAction, Command, Error};
use golsim_lib::{Boundary, Speed};
use std::{ffi::OsString, path::PathBuf};

/// A struct to store the parse results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Args {
    pub(crate) input: PathBuf,
    pub(crate) boundary: Boundary,
    pub(crate) show: bool,
    pub(crate) speed: Option<Speed>,
    pub(crate) output: Option<PathBuf>,
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .long_about(
            "Simulating Conway's Game of Life on a finite board\n\
             \n\
             The input file starts with the number of rows, the number of columns \n\
             and the number of generations, followed by the coordinates \n\
             `row column` of each living cell, one pair per line.\n\
             A file ending with .json, .yaml, .yml or .toml is read as a saved \n\
             simulation instead, and the simulation resumes where it stopped.\n\
             \n\
             The board is displayed row by row.\n\
             * Dead cells are represented by `-`;\n\
             * Living cells are represented by `@`.\n",
        )
        .arg(
            Arg::new("FILE")
                .help("Initial state of the board")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("BOUNDARY")
                .help("Boundary of the board [possible values: wrap, nowrap]")
                .long_help(
                    "Boundary of the board\n\
                     \"wrap\" joins each edge to the opposite edge, like a torus.\n\
                     \"nowrap\" treats cells beyond the edges as nonexistent.\n",
                )
                .required(true)
                .index(2)
                .value_parser(|s: &str| s.parse::<Boundary>()),
        )
        .arg(
            Arg::new("SHOW")
                .help("Whether to show every generation")
                .required(true)
                .index(3)
                .value_parser(["show", "hide"]),
        )
        .arg(
            Arg::new("SPEED")
                .help("Frames per second when showing every generation")
                .long_help(
                    "Frames per second when showing every generation\n\
                     \"slow\" is 3, \"med\" is 10, \"fast\" is 30.\n\
                     Any other positive integer is also accepted.\n\
                     Required by \"show\", not allowed with \"hide\".\n",
                )
                .index(4)
                .required_if_eq("SHOW", "show")
                .value_parser(|s: &str| s.parse::<Speed>()),
        )
        .arg(
            Arg::new("OUTPUT")
                .help("Saves the final state to a file")
                .long_help(
                    "Saves the final state to a file\n\
                     The format depends on the extension: .json, .yaml, .yml or .toml; \n\
                     any other extension uses the same plain format as the input.\n",
                )
                .short('o')
                .long("output")
                .action(ArgAction::Set)
                .value_parser(value_parser!(PathBuf)),
        )
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Args::parse_from(std::env::args_os())
    }

    /// Parses the arguments from an iterator.
    pub(crate) fn parse_from<I, T>(itr: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut app = command();
        let matches = app.try_get_matches_from_mut(itr)?;

        let input = matches.get_one::<PathBuf>("FILE").unwrap().clone();
        let boundary = *matches.get_one::<Boundary>("BOUNDARY").unwrap();
        let show = matches.get_one::<String>("SHOW").unwrap() == "show";
        let speed = matches.get_one::<Speed>("SPEED").copied();
        let output = matches.get_one::<PathBuf>("OUTPUT").cloned();

        if !show {
            if let Some(speed) = speed {
                return Err(app.error(
                    ErrorKind::ArgumentConflict,
                    format!("hide does not take a speed parameter '{}'", speed),
                ));
            }
        }

        Ok(Args {
            input,
            boundary,
            show,
            speed,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show() -> Result<(), Error> {
        let args = Args::parse_from(["golsim", "board.txt", "wrap", "show", "med"])?;
        assert_eq!(
            args,
            Args {
                input: PathBuf::from("board.txt"),
                boundary: Boundary::Wrap,
                show: true,
                speed: Some(Speed::Medium),
                output: None,
            }
        );
        let args = Args::parse_from(["golsim", "board.txt", "nowrap", "show", "12"])?;
        assert_eq!(args.boundary, Boundary::Bounded);
        assert_eq!(args.speed, Some(Speed::Fps(12)));
        Ok(())
    }

    #[test]
    fn hide() -> Result<(), Error> {
        let args = Args::parse_from(["golsim", "board.txt", "nowrap", "hide", "-o", "out.json"])?;
        assert!(!args.show);
        assert_eq!(args.speed, None);
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        Ok(())
    }

    #[test]
    fn invalid() {
        let kind = |args: &[&str]| Args::parse_from(args).map(|_| ()).map_err(|e| e.kind());
        assert_eq!(
            kind(&["golsim", "board.txt", "wrap", "show"]),
            Err(ErrorKind::MissingRequiredArgument)
        );
        assert_eq!(
            kind(&["golsim", "board.txt", "wrap", "hide", "fast"]),
            Err(ErrorKind::ArgumentConflict)
        );
        assert_eq!(
            kind(&["golsim", "board.txt", "torus", "hide"]),
            Err(ErrorKind::ValueValidation)
        );
        assert_eq!(
            kind(&["golsim", "board.txt", "wrap", "display"]),
            Err(ErrorKind::InvalidValue)
        );
        assert_eq!(
            kind(&["golsim", "board.txt", "wrap", "show", "medium"]),
            Err(ErrorKind::ValueValidation)
        );
        assert_eq!(
            kind(&["golsim", "board.txt", "wrap", "show", "0"]),
            Err(ErrorKind::ValueValidation)
        );
        assert_eq!(
            kind(&["golsim", "board.txt", "wrap"]),
            Err(ErrorKind::MissingRequiredArgument)
        );
        assert_eq!(
            kind(&["golsim", "board.txt", "wrap", "show", "fast", "extra"]),
            Err(ErrorKind::UnknownArgument)
        );
    }
}
