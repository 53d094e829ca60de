//! Command line definition.
//!
//! The parsed [`Cli`] is independent of clap so the rest of the crate never
//! touches `ArgMatches`.

use crate::decode::Decoder;
use crate::error::{AppError, AppResult};
use crate::fixtures::CodeRange;
use crate::format::Variant;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use std::path::PathBuf;

/// Subcommand to run.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Decode one code with one or every strategy
    Decode {
        code: i32,
        strategy: Option<Decoder>,
    },
    /// Decode a range of codes with every strategy
    Table { range: CodeRange, json: bool },
    /// Print formatter output for the configured records
    Format { variant: Option<Variant> },
}

/// Parsed command line.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Cli {
    pub config_dir: Option<PathBuf>,
    pub verbose: bool,
    pub command: Command,
}

/// Build the clap definition.
///
pub fn build() -> App<'static, 'static> {
    App::new("decode-bench")
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true)
                .global(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Enable debug logging")
                .global(true),
        )
        .subcommand(
            SubCommand::with_name("decode")
                .about("Decode a status code")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(
                    Arg::with_name("code")
                        .help("Integer code to decode")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("strategy")
                        .short("s")
                        .long("strategy")
                        .value_name("NAME")
                        .help("Decode with a single strategy")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("table")
                .about("Decode a range of codes with every strategy")
                .setting(AppSettings::AllowNegativeNumbers)
                .arg(
                    Arg::with_name("from")
                        .long("from")
                        .value_name("CODE")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("to")
                        .long("to")
                        .value_name("CODE")
                        .takes_value(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::with_name("json")
                        .long("json")
                        .help("Print the table as JSON"),
                ),
        )
        .subcommand(
            SubCommand::with_name("format")
                .about("Print product and record formatter output")
                .arg(
                    Arg::with_name("variant")
                        .long("variant")
                        .value_name("NAME")
                        .help("Print a single formatter variant")
                        .takes_value(true),
                ),
        )
}

impl Cli {
    /// Convert clap matches into a [`Cli`].
    ///
    pub fn from_matches(matches: &ArgMatches) -> AppResult<Cli> {
        let command = match matches.subcommand() {
            ("decode", Some(sub)) => Command::Decode {
                code: parse_code(sub, "code")?
                    .ok_or_else(|| AppError::Usage("Missing code".to_string()))?,
                strategy: sub
                    .value_of("strategy")
                    .map(str::parse::<Decoder>)
                    .transpose()?,
            },
            ("table", Some(sub)) => {
                let default = CodeRange::with_invalid();
                Command::Table {
                    range: CodeRange::new(
                        parse_code(sub, "from")?.unwrap_or(default.start),
                        parse_code(sub, "to")?.unwrap_or(default.end),
                    ),
                    json: sub.is_present("json"),
                }
            }
            ("format", Some(sub)) => Command::Format {
                variant: sub
                    .value_of("variant")
                    .map(str::parse::<Variant>)
                    .transpose()?,
            },
            (name, _) => return Err(AppError::Usage(format!("Unknown command: {}", name))),
        };

        Ok(Cli {
            config_dir: matches.value_of("config").map(PathBuf::from),
            verbose: matches.is_present("verbose"),
            command,
        })
    }
}

fn parse_code(matches: &ArgMatches, name: &str) -> AppResult<Option<i32>> {
    matches
        .value_of(name)
        .map(|value| {
            value
                .trim()
                .parse::<i32>()
                .map_err(|_| AppError::Usage(format!("Invalid {}: {}", name, value)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{ProductFormatter, RecordFormatter};

    fn parse(args: &[&str]) -> AppResult<Cli> {
        let matches = build()
            .get_matches_from_safe(args.iter().copied())
            .map_err(|e| AppError::Usage(e.to_string()))?;
        Cli::from_matches(&matches)
    }

    #[test]
    fn test_parse_decode() {
        let cli = parse(&["decode-bench", "decode", "61"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Decode {
                code: 61,
                strategy: None
            }
        );
        assert!(!cli.verbose);
        assert_eq!(cli.config_dir, None);
    }

    #[test]
    fn test_parse_decode_negative_with_strategy() {
        let cli = parse(&["decode-bench", "-v", "decode", "-3", "--strategy", "hash-map"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Decode {
                code: -3,
                strategy: Some(Decoder::HashMap)
            }
        );
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_decode_rejects_bad_input() {
        assert!(matches!(
            parse(&["decode-bench", "decode", "abc"]),
            Err(AppError::Usage(_))
        ));
        assert!(matches!(
            parse(&["decode-bench", "decode", "57", "-s", "radix"]),
            Err(AppError::Decode(_))
        ));
    }

    #[test]
    fn test_parse_table_defaults() {
        let cli = parse(&["decode-bench", "table"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Table {
                range: CodeRange::new(52, 71),
                json: false
            }
        );
    }

    #[test]
    fn test_parse_table_with_bounds() {
        let cli = parse(&[
            "decode-bench",
            "--config",
            "/tmp/bench",
            "table",
            "--from",
            "-10",
            "--to",
            "100",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Table {
                range: CodeRange::new(-10, 100),
                json: true
            }
        );
        assert_eq!(cli.config_dir, Some(PathBuf::from("/tmp/bench")));
    }

    #[test]
    fn test_parse_format_variants() {
        let cli = parse(&["decode-bench", "format"]).unwrap();
        assert_eq!(cli.command, Command::Format { variant: None });

        let cli = parse(&["decode-bench", "format", "--variant", "interpolate"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Format {
                variant: Some(Variant::Product(ProductFormatter::Interpolate))
            }
        );

        let cli = parse(&["decode-bench", "format", "--variant", "record-concat"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Format {
                variant: Some(Variant::Record(RecordFormatter::Concat))
            }
        );
    }

    #[test]
    fn test_subcommand_required() {
        assert!(parse(&["decode-bench"]).is_err());
    }
}
