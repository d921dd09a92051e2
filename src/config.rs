// ⚙️ Command-line configuration
//
// facility-records [gym|hospital] [--out-dir <dir>]

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Domain {
    /// Gym members and trainers
    #[default]
    Gym,
    /// Hospital patients and doctors
    Hospital,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Gym => "gym",
            Domain::Hospital => "hospital",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Parser)]
#[command(name = "facility-records")]
#[command(version, about = "Gym and hospital record keeper")]
pub struct AppConfig {
    /// Which record keeper to run
    #[arg(value_enum, ignore_case = true, default_value_t = Domain::Gym)]
    pub domain: Domain,

    /// Directory the dump files are written into (default: current directory)
    #[arg(short, long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Output directory. Empty when not given, so paths print as bare
    /// file names relative to the current directory.
    pub fn output_dir(&self) -> PathBuf {
        self.out_dir.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<AppConfig, clap::Error> {
        AppConfig::try_parse_from(std::iter::once("facility-records").chain(args.iter().copied()))
    }

    #[test]
    fn test_command_definition() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.domain, Domain::Gym);
        assert_eq!(config.output_dir(), PathBuf::new());
    }

    #[test]
    fn test_domain_and_out_dir() {
        let config = parse(&["hospital", "--out-dir", "/tmp/dumps"]).unwrap();
        assert_eq!(config.domain, Domain::Hospital);
        assert_eq!(config.output_dir(), PathBuf::from("/tmp/dumps"));

        let config = parse(&["-o", "out", "GYM"]).unwrap();
        assert_eq!(config.domain, Domain::Gym);
        assert_eq!(config.output_dir(), PathBuf::from("out"));
    }

    #[test]
    fn test_out_dir_with_equals() {
        let config = parse(&["--out-dir=dumps"]).unwrap();
        assert_eq!(config.domain, Domain::Gym);
        assert_eq!(config.output_dir(), PathBuf::from("dumps"));
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = parse(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(parse(&["school"]).unwrap_err().kind(), ErrorKind::InvalidValue);
        assert!(parse(&["--out-dir"]).is_err());
        assert_eq!(parse(&["--verbose"]).unwrap_err().kind(), ErrorKind::UnknownArgument);
        assert!(parse(&["gym", "hospital"]).is_err());
    }

    #[test]
    fn test_domain_names_match_cli_values() {
        for domain in [Domain::Gym, Domain::Hospital] {
            let value = domain.to_possible_value().unwrap();
            assert_eq!(value.get_name(), domain.as_str());
        }
    }
}
