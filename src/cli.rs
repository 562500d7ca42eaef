use clap::Parser;

use crate::utils::version;

/// Answer two questions, then enjoy the light show. Press Ctrl-C to stop.
#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli() {
        Cli::command().debug_assert();
        assert!(Cli::try_parse_from(["xmas-lights"]).is_ok());
        assert!(Cli::try_parse_from(["xmas-lights", "--lines", "4"]).is_err());
    }
}
