use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anchor_lib::{AnchorConfig, HeadingAnchorer};
use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use resolve_path::PathResolveExt;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// HTML fragment to read, or "-" for stdin.
    #[arg(default_value = "-")]
    input: String,

    /// Where to write the transformed fragment, or "-" for stdout.
    #[arg(short, long, default_value = "-")]
    output: String,

    /// Class attribute to put on the injected anchor links.
    #[arg(long)]
    anchor_class: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = if args.input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        buffer
    } else {
        let path: PathBuf = args.input.resolve().into_owned();
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    let mut config = AnchorConfig::default();
    if let Some(class) = args.anchor_class {
        config.anchor_class = class;
    }

    let transformed = HeadingAnchorer::with_config(config).transform(&content);

    if args.output == "-" {
        io::stdout()
            .write_all(transformed.as_bytes())
            .context("failed to write stdout")?;
    } else {
        let path: PathBuf = args.output.resolve().into_owned();
        fs::write(&path, &transformed)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("{} {}", "anchored".green(), path.display());
    }

    Ok(())
}
