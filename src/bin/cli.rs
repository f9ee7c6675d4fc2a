//! `wetext-fst` CLI (spec.md §6): normalizes a single string or the lines
//! of a file, with every toggle `NormalizerConfig` exposes. Argv parsing
//! is hand-rolled (no `clap`), matching the teacher's own dependency
//! stack, which never carries a CLI-parsing crate.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};

use wetext_fst::{Language, Normalizer, NormalizerConfig, Operator};

struct Args {
    text: Option<String>,
    file: Option<PathBuf>,
    config: NormalizerConfig,
}

fn parse_args() -> Result<Args> {
    let mut text = None;
    let mut file = None;
    let mut config = NormalizerConfig::new();

    let mut argv = std::env::args().skip(1);
    while let Some(arg) = argv.next() {
        let mut value = || {
            argv.next()
                .ok_or_else(|| anyhow!("missing value for {arg}"))
        };
        match arg.as_str() {
            "--text" => text = Some(value()?),
            "--file" => file = Some(PathBuf::from(value()?)),
            "--cache_dir" => config = config.with_cache_dir(value()?),
            "--overwrite_cache" => config.overwrite_cache = true,
            "--language" => {
                config.lang = match value()?.as_str() {
                    "zh" => Language::Zh,
                    "en" => Language::En,
                    "ja" => Language::Ja,
                    other => return Err(anyhow!("unknown language '{other}'")),
                }
            }
            "--operator" => {
                config.operator = match value()?.as_str() {
                    "tn" => Operator::Tn,
                    "itn" => Operator::Itn,
                    other => return Err(anyhow!("unknown operator '{other}'")),
                }
            }
            "--enable_standalone_number" => config.enable_standalone_number = parse_bool(&value()?)?,
            "--enable_0_to_9" => config.enable_0_to_9 = parse_bool(&value()?)?,
            "--enable_million" => config.enable_million = parse_bool(&value()?)?,
            "--remove_interjections" => config.remove_interjections = parse_bool(&value()?)?,
            "--remove_erhua" => config.remove_erhua = parse_bool(&value()?)?,
            "--traditional_to_simple" => config.traditional_to_simple = parse_bool(&value()?)?,
            "--remove_puncts" => config.remove_puncts = parse_bool(&value()?)?,
            "--full_to_half" => config.full_to_half = parse_bool(&value()?)?,
            "--tag_oov" => config.tag_oov = parse_bool(&value()?)?,
            "--fix_contractions" => config.fix_contractions = parse_bool(&value()?)?,
            other => return Err(anyhow!("unknown argument '{other}'")),
        }
    }

    Ok(Args { text, file, config })
}

fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!("expected 'true' or 'false', got '{other}'")),
    }
}

fn run() -> Result<()> {
    let args = parse_args()?;
    let mut normalizer = Normalizer::new(args.config);

    match (args.text, args.file) {
        (Some(text), None) => {
            let result = normalizer.normalize(&text)?;
            println!("{result}");
        }
        (None, Some(path)) => {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            for line in contents.lines() {
                println!("{}", normalizer.normalize(line)?);
            }
        }
        (Some(_), Some(_)) => return Err(anyhow!("pass either --text or --file, not both")),
        (None, None) => return Err(anyhow!("one of --text or --file is required")),
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
