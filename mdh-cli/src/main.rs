// Command-line interface for markdown2html
//
// Converts one Markdown file into one HTML file:
//
//  markdown2html <input> <output> [--config <file>] [-v...]
//
// Exactly two positional arguments are accepted. Anything else prints the usage line and exits 1.
// A missing input prints "Missing <input>" and exits 1 without touching the output.
//
// Configuration is layered: built-in defaults, then ./mdh.toml if present, then --config.
// Logs go to stderr; -v enables info, -vv debug. RUST_LOG takes precedence when set.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use mdh_cli::{convert_file, ensure_input_exists, CliError};
use mdh_config::{Loader, MdhConfig};
use mdh_pipeline::{ConversionRules, Pipeline};
use std::path::Path;

fn build_cli() -> Command {
    Command::new("markdown2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file to HTML")
        .long_about(
            "markdown2html converts a small Markdown subset to HTML, line by line.\n\n\
            Supported syntax:\n  \
            - # .. ######       headings\n  \
            - '- ' / '* '       unordered / ordered list items\n  \
            - **text**, __text__ bold, emphasis\n  \
            - [[text]]          replaced by the MD5 digest of text\n  \
            - ((text))          text with every 'c' and 'C' removed\n\n\
            Examples:\n  \
            markdown2html README.md README.html\n  \
            markdown2html notes.md notes.html --config mdh.toml -v",
        )
        .arg(
            Arg::new("input")
                .help("Markdown file to convert")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("HTML file to write (overwritten if it exists)")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mdh.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = match build_cli().try_get_matches() {
        Ok(m) => m,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => fail(CliError::Usage),
        },
    };

    init_logging(matches.get_count("verbose"));

    if let Err(err) = run(&matches) {
        fail(err);
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let input = Path::new(
        matches
            .get_one::<String>("input")
            .expect("input is required"),
    );
    let output = Path::new(
        matches
            .get_one::<String>("output")
            .expect("output is required"),
    );

    ensure_input_exists(input)?;

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    let pipeline = Pipeline::new(ConversionRules::from(&config))?;

    let summary = convert_file(input, output, &pipeline)?;
    log::info!(
        "converted {} ({} lines) to {} ({} lines)",
        input.display(),
        summary.input_lines,
        output.display(),
        summary.output_lines
    );
    Ok(())
}

fn fail(err: CliError) -> ! {
    eprintln!("{err}");
    std::process::exit(err.exit_code());
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<MdhConfig, CliError> {
    let loader = Loader::new().with_optional_file("mdh.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    Ok(loader.build()?)
}

fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn init_logging(verbosity: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbosity))
        .parse_default_env()
        .init();
}
