mod report;

use energen::{ContractView, Error, GuestDetails, Options, RangePolicy, normalize_split_verbose};
use std::io::{self, IsTerminal, Read};
use tracing::Level;

const DEBUG_ENV: &str = "ENERGEN_DEBUG";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let level = if std::env::var_os(DEBUG_ENV).is_some() { Level::DEBUG } else { Level::WARN };
    let _ = tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).try_init();
}

enum Mode {
    Split { input: String, tariff: bool },
    Guest { path: String },
}

struct CliConfig {
    mode: Mode,
    options: Options,
    currency: String,
    color: bool,
}

fn run(config: &CliConfig) -> Result<(), Error> {
    match &config.mode {
        Mode::Split { input, tariff } => {
            let details = normalize_split_verbose(Some(input.as_str()), &config.options);
            let label = if *tariff { "tariff" } else { "split" };
            report::print_split(input, label, &details, config.color);
        }
        Mode::Guest { path } => {
            let json = std::fs::read_to_string(path)?;
            let guest = GuestDetails::from_json(&json)?;
            let view = guest.energy().map(|values| ContractView::from_energy(values, &config.currency));
            report::print_contract(&guest, view.as_ref(), config.color);
        }
    }
    Ok(())
}

fn parse_args() -> Result<CliConfig, Error> {
    let mut input: Option<String> = None;
    let mut guest: Option<String> = None;
    let mut tariff = false;
    let mut options = Options::default();
    let mut currency = energen::DEFAULT_CURRENCY.to_string();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    let invalid = |msg: String| Error::InvalidArgument(msg);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("energen {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--tariff" => tariff = true,
            "--clamp" => options.range_policy = RangePolicy::Clamp,
            "--currency" => {
                currency = args.next().ok_or_else(|| invalid("error: --currency expects a value".to_string()))?;
            }
            "--guest" => {
                guest = Some(args.next().ok_or_else(|| invalid("error: --guest expects a file path".to_string()))?);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| invalid("error: --input expects a value".to_string()))?;
                set_input(&mut input, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--currency=") => {
                currency = arg.trim_start_matches("--currency=").to_string();
            }
            _ if arg.starts_with("--guest=") => {
                guest = Some(arg.trim_start_matches("--guest=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                set_input(&mut input, arg.trim_start_matches("--input=").to_string())?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 && !looks_numeric(&arg) => {
                return Err(invalid(format!("error: unknown option '{arg}'")));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    if let Some(path) = guest {
        if input.is_some() {
            return Err(invalid("error: --guest cannot be combined with a value".to_string()));
        }
        return Ok(CliConfig { mode: Mode::Guest { path }, options, currency, color });
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(invalid(format!("error: no input provided\n\n{}", help_text())));
    }

    Ok(CliConfig { mode: Mode::Split { input, tariff }, options, currency, color })
}

fn set_input(slot: &mut Option<String>, value: String) -> Result<(), Error> {
    if slot.is_some() {
        return Err(Error::InvalidArgument("error: input provided multiple times".to_string()));
    }
    *slot = Some(value);
    Ok(())
}

/// Negative values such as `-5%` are input, not options.
fn looks_numeric(arg: &str) -> bool {
    arg[1..].starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn read_stdin_input() -> Result<String, Error> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "energen {version}

Normalize customer-data values into display-ready percentages.

Usage:
  energen [OPTIONS] [--] <value...>
  energen [OPTIONS] --input <value>
  energen [OPTIONS] --guest <file>

Options:
  -i, --input <value>        Raw split value to normalize. If omitted, reads
                             remaining args or stdin when no args are provided.
  --tariff                   Label the value as a tariff.
  --clamp                    Clamp plain numbers outside 0..100 instead of
                             discarding them.
  --guest <file>             Decode a guest-details payload and print its
                             contract view.
  --currency <code>          Currency for balances. Default: {currency}
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {debug_env}=1            Trace normalization to stderr.

Exit codes:
  0  Success.
  1  Runtime error (unreadable file, undecodable payload).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        currency = energen::DEFAULT_CURRENCY,
        debug_env = DEBUG_ENV,
    )
}
