// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mapcheck-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mapcheck and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mapcheck CLI entrypoint.
//!
//! By default this opens the interactive viewer on a report file. `--print` writes the plain-text
//! rendering to stdout instead, and `--schema` prints the JSON Schema of the input format.

use std::error::Error;

use mapcheck::config::{resolve_format_options, DecimalOverrides};
use mapcheck::logging::{self, LogMode};
use mapcheck::model::fixtures::sample_parcels;
use mapcheck::render::{render_report_text, MapcheckView};
use mapcheck::store::{load_report, report_schema};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <report.json> [--print] [--closure-decimals <n>] [--precision-decimals <n>]\n  {program} --demo [--print] [--closure-decimals <n>] [--precision-decimals <n>]\n  {program} --schema\n\n<report.json> is a JSON array of parcels as written by the mapcheck report export.\n--demo shows a built-in two-parcel sample and cannot be combined with <report.json>.\n--print writes the report as plain text to stdout instead of opening the viewer.\n--schema prints the JSON Schema of the report format.\n\nDecimal places default to 3 (misclosure) and 2 (precision); MAPCHECK_CLOSURE_DECIMALS and\nMAPCHECK_PRECISION_DECIMALS set them from the environment. MAPCHECK_LOG sets the log filter and\nMAPCHECK_LOG_FILE the log file."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    report: Option<String>,
    demo: bool,
    print: bool,
    schema: bool,
    closure_decimals: Option<usize>,
    precision_decimals: Option<usize>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--print" => {
                if options.print {
                    return Err(());
                }
                options.print = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--closure-decimals" => {
                if options.closure_decimals.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.closure_decimals = Some(raw.parse().map_err(|_| ())?);
            }
            "--precision-decimals" => {
                if options.precision_decimals.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.precision_decimals = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.report.is_some() {
                    return Err(());
                }
                options.report = Some(arg);
            }
        }
    }

    if options.schema {
        let alone = options == CliOptions { schema: true, ..CliOptions::default() };
        return if alone { Ok(options) } else { Err(()) };
    }

    if options.demo == options.report.is_some() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mapcheck".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&report_schema())?);
            return Ok(());
        }

        logging::init(if options.print {
            LogMode::Batch
        } else {
            LogMode::Interactive
        })?;

        let format = resolve_format_options(DecimalOverrides {
            closure_error_decimals: options.closure_decimals,
            precision_decimals: options.precision_decimals,
        })?;

        let parcels = match &options.report {
            Some(path) => load_report(path)?,
            None => sample_parcels(),
        };
        let view = MapcheckView::new(parcels, format);

        if options.print {
            println!("{}", render_report_text(&view.render()));
            return Ok(());
        }

        mapcheck::tui::run(view)
    })();

    if let Err(err) = result {
        eprintln!("mapcheck: {err}");
        std::process::exit(1);
    }
}
