use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use eel_option::{build_info, Optional};

#[derive(Parser)]
#[command(name = "option_demo")]
#[command(about = "Scale an optional integer, falling back to a default when it is absent", long_about = None)]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Input value: an integer, or `null`/`none`/empty for no value
    value: Option<String>,

    /// Multiplier applied when a value is present
    #[arg(long, default_value_t = 2)]
    factor: i64,

    /// Result used when no value is present
    #[arg(long, default_value_t = 0)]
    default: i64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print build information and exit
    #[arg(long)]
    build_info: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if cli.build_info {
        println!("{} {}", build_info::PKG_NAME, build_info::long_version());
        println!("{} {} ({})", build_info::RUSTC_VERSION, build_info::TARGET, build_info::PROFILE);
        return;
    }

    if let Err(e) = run(&cli) {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = parse_value(cli.value.as_deref())?;

    match input {
        Optional::Some(v) => print_info(&format!("Input: {}", v)),
        Optional::None => print_warning(&format!("No input value, using default {}", cli.default)),
    }

    let result = scale_or_default(input, cli.factor, cli.default)?;
    print_success(&format!("Result: {}", result));
    Ok(())
}

/// `value * factor` when present, `default` when absent. Overflow is an error.
fn scale_or_default(input: Optional<i64>, factor: i64, default: i64) -> Result<i64> {
    let scaled = input.flat_map(|x| Optional::from_nullable(x.checked_mul(factor)));

    if let (Optional::Some(v), Optional::None) = (input, scaled) {
        anyhow::bail!("{} * {} overflows a 64-bit integer", v, factor);
    }

    Ok(scaled.get_or_else_value(default))
}

/// Collapses the textual null markers to `Optional::None`.
fn parse_value(raw: Option<&str>) -> Result<Optional<i64>> {
    let raw = Optional::from_nullable(raw)
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("null") && !s.eq_ignore_ascii_case("none"));

    match raw {
        Optional::Some(text) => {
            let value = text
                .parse::<i64>()
                .with_context(|| format!("Invalid integer value: {:?}", text))?;
            Ok(Optional::Some(value))
        }
        Optional::None => Ok(Optional::none()),
    }
}

fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}
