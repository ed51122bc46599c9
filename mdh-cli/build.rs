use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("markdown2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert a Markdown file to HTML")
        .arg(
            Arg::new("input")
                .help("Markdown file to convert")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .help("HTML file to write")
                .required(true)
                .index(2)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::Count),
        );

    generate_to(Bash, &mut cmd, "markdown2html", &outdir)?;
    generate_to(Zsh, &mut cmd, "markdown2html", &outdir)?;
    generate_to(Fish, &mut cmd, "markdown2html", &outdir)?;

    Ok(())
}
