//! Command-line parsing and validation.

use crate::error::CliError;
use geosieve::bbox::BoundingBox;

type CliResult<T> = Result<T, CliError>;

type ApplyFn = fn(Option<&str>, &mut Options) -> CliResult<()>;

enum OptKind {
    Value(ApplyFn),
    Flag(ApplyFn),
}

struct OptionSpec {
    name: &'static str,
    kind: OptKind,
}

/// A fully validated filter invocation.
#[derive(Debug)]
pub struct Job {
    pub path: String,
    pub bbox: BoundingBox,
    pub perf: bool,
}

#[derive(Debug, Default)]
struct Options {
    path: Option<String>,
    bbox: Option<BoundingBox>,
    perf: bool,
}

const OPTION_SPECS: &[OptionSpec] = &[
    OptionSpec {
        name: "path",
        kind: OptKind::Value(|value, options| {
            let v = required_value("path", value)?;
            options.path = Some(v.to_string());
            Ok(())
        }),
    },
    OptionSpec {
        name: "bbox",
        kind: OptKind::Value(|value, options| {
            let v = required_value("bbox", value)?;
            options.bbox = Some(
                v.parse::<BoundingBox>()
                    .map_err(|e| CliError::from(e.to_string()))?,
            );
            Ok(())
        }),
    },
    OptionSpec {
        name: "perf",
        kind: OptKind::Flag(|_, options| {
            options.perf = true;
            Ok(())
        }),
    },
    OptionSpec {
        name: "help",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_help_text()))),
    },
    OptionSpec {
        name: "version",
        kind: OptKind::Flag(|_, _| Err(CliError::Exit(get_version_text()))),
    },
];

/// Parses argv into a [`Job`].
///
/// Both `--option=value` and `--option value` are accepted. Missing or
/// malformed options come back as [`CliError::Message`]; `--help` and
/// `--version` come back as [`CliError::Exit`].
pub fn parse_cli(args: Vec<String>) -> CliResult<Job> {
    let mut options = Options::default();
    let mut iter = args.into_iter().skip(1);

    while let Some(arg) = iter.next() {
        let Some(stripped) = arg.strip_prefix("--") else {
            return Err(format!("Unexpected argument: {}", arg).into());
        };
        let (name, inline) = stripped
            .split_once('=')
            .map(|(n, v)| (n, Some(v.to_string())))
            .unwrap_or((stripped, None));

        let Some(spec) = OPTION_SPECS.iter().find(|s| s.name == name) else {
            return Err(format!("Unknown option: --{}", name).into());
        };

        match spec.kind {
            OptKind::Value(handler) => {
                let resolved = inline.or_else(|| iter.next());
                let value = required_value(spec.name, resolved.as_deref())?;
                handler(Some(value), &mut options)?;
            }
            OptKind::Flag(handler) => {
                if inline.is_some() {
                    return Err(format!("Option --{} does not take a value", spec.name).into());
                }
                handler(None, &mut options)?;
            }
        }
    }

    let path = match options.path {
        Some(path) if !path.is_empty() => path,
        Some(_) => return Err("Option --path must not be empty".into()),
        None => return Err("Option --path is required".into()),
    };

    let bbox = options
        .bbox
        .ok_or_else(|| CliError::from("Option --bbox is required"))?;

    Ok(Job {
        path,
        bbox,
        perf: options.perf,
    })
}

fn required_value<'a>(flag: &'static str, value: Option<&'a str>) -> CliResult<&'a str> {
    value.ok_or_else(|| CliError::from(format!("Option --{} requires a value", flag)))
}

fn get_version_text() -> String {
    format!(
        "geosieve {}\n Build: {} ({})\n Built: {}",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_PROFILE"),
        env!("BUILD_TARGET"),
        env!("BUILD_DATE")
    )
}

pub fn get_help_text() -> String {
    format!(
        r#"geosieve {}
Filters newline-delimited JSON business records by a geographic bounding box.

Usage:
  geosieve --path <file> --bbox <lat_min,lat_max,lng_min,lng_max> [OPTIONS]

Examples:
  geosieve --path business.json --bbox 30,50,-80,-70
  geosieve --path=business.json --bbox=39.5,40.5,-76,-75 > nearby.json
  cat business.json | geosieve --path - --bbox 30,50,-80,-70

Arguments:
  --path <file>      Input file with one JSON record per line.
                     Use - to read from stdin.

  --bbox <bounds>    Four comma-separated decimal bounds, in order:
                     lat_min,lat_max,lng_min,lng_max
                     A record matches when its latitude and longitude fall
                     inside the box, edges included.

Options:
  --perf             Print throughput statistics to stderr.
  --help             Show this help message and exit.
  --version          Print version information and exit.

Matching records are written to stdout exactly as they appear in the input.
Diagnostics go to stderr.
"#,
        env!("CARGO_PKG_VERSION")
    )
}
