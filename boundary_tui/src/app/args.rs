use std::path::PathBuf;

pub const USAGE: &str =
    "usage: boundary-viz [--config <path>] [--weights <path>] [--seed <u32>] [--n <count>]";

/// Command line overrides, layered on top of the configuration file.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub config: Option<PathBuf>,
    pub weights: Option<PathBuf>,
    pub seed: Option<u32>,
    pub n: Option<i64>,
}

/// Parses the arguments following the program name.
///
/// # Errors
/// Returns a human-readable message, including the usage line, on unknown
/// flags, missing values or values that do not parse.
pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Args, String> {
    let mut parsed = Args::default();
    let mut args = args.into_iter();

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing value for {flag}\n{USAGE}"))
        };

        match flag.as_str() {
            "--config" => parsed.config = Some(value()?.into()),
            "--weights" => parsed.weights = Some(value()?.into()),
            "--seed" => parsed.seed = Some(number(&flag, value()?)?),
            "--n" => parsed.n = Some(number(&flag, value()?)?),
            other => return Err(format!("unknown argument '{other}'\n{USAGE}")),
        }
    }

    Ok(parsed)
}

fn number<T: std::str::FromStr>(flag: &str, raw: String) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("invalid value '{raw}' for {flag}\n{USAGE}"))
}
