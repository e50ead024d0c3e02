// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Benchplot-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Benchplot and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Benchplot CLI entrypoint.
//!
//! By default this compares `benchmark-solve.json` and `benchmark-no-solve.json` in an interactive
//! terminal chart. Use `--text` to print the chart to stdout instead.

use std::error::Error;
use std::path::PathBuf;

use benchplot::plot::PALETTE_ENV;
use benchplot::variant::Variant;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BENCHPLOT_LOG";
const DEFAULT_TEXT_WIDTH: u16 = 100;
const DEFAULT_TEXT_HEIGHT: u16 = 30;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [single|grouped|compare] [--text [--width <cols>] [--height <rows>]] [<report.json>...]\n\nWith no variant, `compare` is used.\nDefault reports: single/grouped read benchmark.json; compare reads benchmark-solve.json (red) and benchmark-no-solve.json (blue).\n\n--text prints the chart to stdout ({DEFAULT_TEXT_WIDTH}x{DEFAULT_TEXT_HEIGHT} unless --width/--height are given) instead of opening the chart window.\n\nEnvironment:\n  {PALETTE_ENV}  comma-separated line colors (#RRGGBB, rgb:RR/GG/BB or names)\n  {LOG_ENV}      log filter (e.g. debug), logs go to stderr"
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    variant: Option<Variant>,
    text: bool,
    width: Option<u16>,
    height: Option<u16>,
    files: Vec<PathBuf>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => {
                if options.text {
                    return Err(());
                }
                options.text = true;
            }
            "--width" => {
                if options.width.is_some() {
                    return Err(());
                }
                options.width = Some(parse_dimension(args.next())?);
            }
            "--height" => {
                if options.height.is_some() {
                    return Err(());
                }
                options.height = Some(parse_dimension(args.next())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => match Variant::from_name(&arg) {
                Some(variant) if options.variant.is_none() && options.files.is_empty() => {
                    options.variant = Some(variant);
                }
                _ => options.files.push(PathBuf::from(arg)),
            },
        }
    }

    if !options.text && (options.width.is_some() || options.height.is_some()) {
        return Err(());
    }

    let variant = options.variant.unwrap_or_default();
    if let Some(max) = variant.max_files() {
        if options.files.len() > max {
            return Err(());
        }
    }

    Ok(options)
}

fn parse_dimension(raw: Option<String>) -> Result<u16, ()> {
    let value: u16 = raw.ok_or(())?.parse().map_err(|_| ())?;
    if value == 0 {
        return Err(());
    }
    Ok(value)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "benchplot".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        let theme = benchplot::plot::Theme::from_env()?;
        let variant = options.variant.unwrap_or_default();
        let spec = benchplot::variant::build_spec(variant, &options.files)?;

        if options.text {
            let text = benchplot::plot::render_text(
                &spec,
                &theme,
                options.width.unwrap_or(DEFAULT_TEXT_WIDTH),
                options.height.unwrap_or(DEFAULT_TEXT_HEIGHT),
            );
            print!("{text}");
            return Ok(());
        }

        benchplot::tui::run(spec, theme)
    })();

    if let Err(err) = result {
        eprintln!("benchplot: {err}");
        std::process::exit(1);
    }
}
