mod debug_report;

use chrono::NaiveDateTime;
use numerus::{Context, Extractor, Options};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use debug_report::Kind;

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let extractor = match Extractor::new(&config.locale, config.options) {
        Ok(extractor) => extractor,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    let context = Context { reference_time: config.reference_time.unwrap_or_else(|| Context::default().reference_time) };
    debug_report::print_run(&config.input, &extractor, &context, &config.kinds, config.color);
}

/// Events go to stderr, filtered by `RUST_LOG`; nothing is printed without it.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::registry().with(filter).with(fmt::layer().with_writer(io::stderr)).try_init();
}

struct CliConfig {
    input: String,
    locale: String,
    reference_time: Option<NaiveDateTime>,
    kinds: Vec<Kind>,
    options: Options,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut locale = "en".to_string();
    let mut reference_time = None;
    let mut kinds = Vec::new();
    let mut options = Options::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    let set_input = |input: &mut Option<String>, value: String| {
        if input.is_some() {
            return Err("error: input provided multiple times".to_string());
        }
        *input = Some(value);
        Ok(())
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("numerus {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--long-scale" => options.short_scale = false,
            "--ordinal" => options.prefer_ordinal = true,
            "--integer" => options.integer_only = true,
            "--month-first" => options.prefer_month_before_day = true,
            "--locale" => locale = args.next().ok_or_else(|| "error: --locale expects a value".to_string())?,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_time = Some(parse_reference(&value)?);
            }
            "--kind" => {
                let value = args.next().ok_or_else(|| "error: --kind expects a value".to_string())?;
                kinds.extend(parse_kinds(&value)?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--locale=") => locale = arg.trim_start_matches("--locale=").to_string(),
            _ if arg.starts_with("--reference=") => {
                reference_time = Some(parse_reference(arg.trim_start_matches("--reference="))?);
            }
            _ if arg.starts_with("--kind=") => kinds.extend(parse_kinds(arg.trim_start_matches("--kind="))?),
            _ if arg.starts_with("--input=") => set_input(&mut input, arg.trim_start_matches("--input=").to_string())?,
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    if kinds.is_empty() {
        kinds = vec![Kind::Number, Kind::Duration, Kind::DateTime];
    }
    kinds.sort();
    kinds.dedup();

    Ok(CliConfig { input, locale, reference_time, kinds, options, color })
}

fn parse_kinds(value: &str) -> Result<Vec<Kind>, String> {
    value
        .split(',')
        .map(|kind| match kind.trim() {
            "number" => Ok(Kind::Number),
            "duration" => Ok(Kind::Duration),
            "datetime" => Ok(Kind::DateTime),
            other => Err(format!("error: unknown --kind '{other}' (expected number, duration or datetime)")),
        })
        .collect()
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "numerus {version}

Extract numbers, durations and date/times from text.

Usage:
  numerus [OPTIONS] [--] <input...>
  numerus [OPTIONS] --input <text>

Options:
  -i, --input <text>         Input text. If omitted, reads remaining args
                             or stdin when no args are provided.
  --locale <tag>             Language of the input, e.g. en or en-US.
                             Default: en
  --reference <timestamp>    Reference time in YYYY-MM-DDTHH:MM:SS for
                             relative dates. Default: now
  --kind <kinds>             Comma-separated subset of number, duration,
                             datetime. Default: all three
  --long-scale               Read \"billion\" as 10^12.
  --ordinal                  Prefer ordinals: \"twenty third\" is 23rd.
  --integer                  Only read whole numbers.
  --month-first              Read 4/5 as April 5th.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG=numerus=trace     Print grammar and query events to stderr.

Exit codes:
  0  Success.
  2  Invalid arguments, missing input or unsupported locale.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
