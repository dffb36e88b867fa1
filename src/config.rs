use crate::error::{DvError, DvResult};
use crate::stream::Input;
use crate::transcoder::Direction;
use clap::{ArgAction, Parser};
use tracing::Level;

// Positionals are taken verbatim, hyphens and "--" included, so that the
// argument count and flag rules are decided here rather than by clap.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    about = "Dvorak encoding transcoder",
    long_about = None,
    override_usage = "dv <-e|-d> [FILE]",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// -e to encode, -d to decode, then an optional input file ("-" reads standard input)
    #[arg(
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "ARGS"
    )]
    pub args: Vec<String>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    #[arg(long, env = "DV_LOG", default_value = "warn", hide = true)]
    pub log_level: String,
}

impl Cli {
    /// Resolves the positional arguments into a direction and an input.
    ///
    /// The count is checked before the mode flag, and the flag before the
    /// path is ever touched.
    pub fn invocation(&self, program: &str) -> DvResult<(Direction, Input)> {
        match self.args.as_slice() {
            [mode] => Ok((parse_mode_flag(mode)?, Input::from_arg(None))),
            [mode, path] => Ok((parse_mode_flag(mode)?, Input::from_arg(Some(path.as_str())))),
            _ => Err(DvError::Usage(program.to_string())),
        }
    }

    /// `None` when `--log-level`/`DV_LOG` is not a tracing level name.
    pub fn max_level(&self) -> Option<Level> {
        self.log_level.parse().ok()
    }
}

pub fn parse_mode_flag(flag: &str) -> DvResult<Direction> {
    match flag {
        "-e" => Ok(Direction::Encode),
        "-d" => Ok(Direction::Decode),
        f if f.starts_with('-') => Err(DvError::UnknownMode(f.to_string())),
        f => Err(DvError::MissingMode(f.to_string())),
    }
}
