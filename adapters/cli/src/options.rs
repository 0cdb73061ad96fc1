use std::path::PathBuf;

use clap::Parser;

/// Reads a maze of `0` (open) and `1` (blocked) cells, where any other
/// character also counts as blocked, and looks for the shortest way from the
/// upper-left to the lower-right corner.
#[derive(Clone, Debug, Default, Parser)]
#[command(name = "mopsolver", version)]
pub(crate) struct Options {
    /// Pretty-print (display) the maze after reading.
    #[arg(short = 'd', long = "display")]
    pub(crate) display: bool,
    /// Print length of shortest path or 'No solution'.
    #[arg(short = 's', long = "steps")]
    pub(crate) steps: bool,
    /// Pretty-print maze with the path, if one exists.
    #[arg(short = 'p', long = "path")]
    pub(crate) path: bool,
    /// Read maze from INFILE instead of stdin.
    #[arg(short = 'i', long = "input", value_name = "INFILE")]
    pub(crate) input: Option<PathBuf>,
    /// Append all output to OUTFILE instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "OUTFILE")]
    pub(crate) output: Option<PathBuf>,
    /// TOML file overriding the characters used to draw the maze.
    #[arg(long = "glyphs", value_name = "FILE")]
    pub(crate) glyphs: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Options::command().debug_assert();
    }

    #[test]
    fn short_flags_combine() {
        let options = Options::try_parse_from(["mopsolver", "-dsp", "-i", "maze.txt"])
            .expect("flags parse");

        assert!(options.display);
        assert!(options.steps);
        assert!(options.path);
        assert_eq!(options.input, Some(PathBuf::from("maze.txt")));
        assert_eq!(options.output, None);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Options::try_parse_from(["mopsolver", "-x"]).is_err());
    }
}
