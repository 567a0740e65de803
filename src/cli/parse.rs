use std::process::ExitCode;

use clap::error::ErrorKind;
use mobiplan_core::error::MobiplanError;
use mobiplan_core::format::OutputFormat;
use mobiplan_core::modes::Preference;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse travel preference from string
pub fn parse_preference(s: &str) -> std::result::Result<Preference, String> {
    s.parse::<Preference>().map_err(|e| e.to_string())
}

/// Parse a non-negative, finite distance
pub fn parse_distance(s: &str) -> std::result::Result<f64, String> {
    let distance: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("not a number: {}", s))?;
    if !distance.is_finite() || distance < 0.0 {
        return Err(format!("distance must be a non-negative number, got {}", s));
    }
    Ok(distance)
}

/// True when the raw arguments ask for JSON output, whether or not they parse
pub fn argv_wants_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--format=json" => return true,
            "--format" => {
                if args.next().is_some_and(|v| v.as_ref() == "json") {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

/// Map a clap failure onto the error taxonomy; `None` for help and version
pub fn parse_failure(err: &clap::Error) -> Option<MobiplanError> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::TooManyValues
        | ErrorKind::TooFewValues
        | ErrorKind::WrongNumberOfValues
        | ErrorKind::NoEquals => Some(MobiplanError::usage(err.to_string().trim_end())),
        _ => Some(MobiplanError::Other(err.to_string().trim_end().to_string())),
    }
}

/// Report a failed parse. Under `--format json` usage failures become the
/// JSON error envelope; everything else is rendered by clap.
pub fn report_parse_failure(err: clap::Error) -> ExitCode {
    if !argv_wants_json(std::env::args().skip(1)) {
        err.exit();
    }
    match parse_failure(&err) {
        Some(error) => {
            eprintln!("{}", error.to_json());
            ExitCode::from(error.exit_code() as u8)
        }
        None => err.exit(),
    }
}
