use std::io::{self, BufRead};

use atty::Stream;
use exitstatus::{CliError, ExitStatus};
use strum::IntoEnumIterator;
use thiserror::Error;

use crate::BaseArgs;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to read codes from stdin - {0}")]
    Io(#[from] io::Error),
    #[error("Couldn't parse {0:?} as an exit status code")]
    Parse(String),
    #[error("No exit status codes given")]
    NoCodes,
}

impl CliError for LookupError {
    fn exit_status(&self) -> ExitStatus {
        match self {
            Self::Io(_) => ExitStatus::IoErr,
            Self::Parse(_) => ExitStatus::DataErr,
            Self::NoCodes => ExitStatus::NoInput,
        }
    }
}

pub fn run(args: BaseArgs) -> ExitStatus {
    if args.list {
        print_table(args.json);
        return ExitStatus::Ok;
    }

    let json = args.json;
    let codes = match gather_codes(args.codes) {
        Ok(codes) => codes,
        Err(e) => {
            log::error!("{e}");
            return e.exit_status();
        }
    };

    resolve_codes(&codes, json)
}

/// Codes come from the command line when given, otherwise from stdin so the
/// tool can sit at the end of a pipeline.
fn gather_codes(given: Vec<i32>) -> Result<Vec<i32>, LookupError> {
    if !given.is_empty() {
        return Ok(given);
    }
    if atty::is(Stream::Stdin) {
        return Err(LookupError::NoCodes);
    }

    let codes = parse_codes(io::stdin().lock())?;
    if codes.is_empty() {
        return Err(LookupError::NoCodes);
    }
    Ok(codes)
}

fn parse_codes(reader: impl BufRead) -> Result<Vec<i32>, LookupError> {
    let mut codes = Vec::new();
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            let code = token
                .parse::<i32>()
                .map_err(|_| LookupError::Parse(token.to_string()))?;
            codes.push(code);
        }
    }
    Ok(codes)
}

/// Prints one line per code. Codes outside the table are marked rather than
/// dropped, so output lines stay aligned with the input, and the final exit
/// status reports that at least one code was unrecognized.
fn resolve_codes(codes: &[i32], json: bool) -> ExitStatus {
    let show_code = codes.len() > 1;
    let mut status = ExitStatus::Ok;

    for &raw in codes {
        let resolved = match ExitStatus::try_from(raw) {
            Ok(resolved) => Some(resolved),
            Err(e) => {
                log::debug!("{e}");
                status = ExitStatus::NoSuch;
                None
            }
        };
        println!("{}", format_entry(raw, resolved, show_code, json));
    }

    status
}

fn format_entry(raw: i32, status: Option<ExitStatus>, show_code: bool, json: bool) -> String {
    if json {
        return serde_json::json!({
            "code": raw,
            "name": status.map(ExitStatus::name),
        })
        .to_string();
    }

    let name = match status {
        Some(status) => status.name(),
        None => "<unrecognized>",
    };
    if show_code {
        format!("{raw}: {name}")
    } else {
        name.to_string()
    }
}

fn print_table(json: bool) {
    if json {
        let entries: Vec<serde_json::Value> = ExitStatus::iter()
            .map(|status| {
                serde_json::json!({
                    "code": u8::from(status),
                    "name": status.name(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(entries));
        return;
    }

    for status in ExitStatus::iter() {
        println!("{:>3}: {}", u8::from(status), status.name());
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_whitespace_separated_codes() {
        let codes = parse_codes(Cursor::new("0 124\n193\n")).unwrap();
        assert_eq!(codes, vec![0, 124, 193]);
    }

    #[test]
    fn parses_negative_codes() {
        let codes = parse_codes(Cursor::new("-1\n")).unwrap();
        assert_eq!(codes, vec![-1]);
    }

    #[test]
    fn rejects_tokens_that_are_not_codes() {
        let err = parse_codes(Cursor::new("124 TIMEOUT")).unwrap_err();
        assert_eq!(err.exit_status(), ExitStatus::DataErr);
        assert!(matches!(err, LookupError::Parse(token) if token == "TIMEOUT"));
    }

    #[test]
    fn errors_map_to_their_exit_statuses() {
        assert_eq!(LookupError::NoCodes.exit_status(), ExitStatus::NoInput);
        let io_err = LookupError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(io_err.exit_status(), ExitStatus::IoErr);
    }

    #[test]
    fn formats_known_codes() {
        assert_eq!(
            format_entry(124, Some(ExitStatus::Timeout), false, false),
            "TIMEOUT"
        );
        assert_eq!(
            format_entry(124, Some(ExitStatus::Timeout), true, false),
            "124: TIMEOUT"
        );
        assert_eq!(
            format_entry(124, Some(ExitStatus::Timeout), false, true),
            r#"{"code":124,"name":"TIMEOUT"}"#
        );
    }

    #[test]
    fn marks_unrecognized_codes() {
        assert_eq!(format_entry(9999, None, true, false), "9999: <unrecognized>");
        assert_eq!(format_entry(9999, None, false, true), r#"{"code":9999,"name":null}"#);
    }

    #[test]
    fn resolving_reports_codes_missing_from_the_table() {
        assert_eq!(resolve_codes(&[0, 124], false), ExitStatus::Ok);
        assert_eq!(resolve_codes(&[0, 63], false), ExitStatus::NoSuch);
    }
}
