// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use almanac_engine::merge;
use almanac_model::map::Mapping;
use almanac_model::parse::Almanac;
use serde::Serialize;
use std::{env, fs, fs::File, io::BufWriter, process::ExitCode, time::Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct ComposedEntry {
    source_start: i64,
    source_end: i64,
    destination_start: i64,
    destination_end: i64,
}

#[derive(Debug, Clone, Serialize)]
struct RunReport {
    input: String,
    mapping_count: usize,
    composed_name: String,
    composed_entries: Vec<ComposedEntry>,
    fold_elapsed_ms: u128,
    lowest_location_by_seed: Option<i64>,
    lowest_location_by_seed_range: Option<i64>,
}

fn usage(program: &str) -> String {
    format!("usage: {program} <input-file> [--report <path>]")
}

fn main() -> ExitCode {
    enable_tracing();

    let program = env::args().next().unwrap_or_else(|| "almanac".into());
    let mut args = env::args().skip(1);
    let Some(input_path) = args.next() else {
        eprintln!("{}", usage(&program));
        return ExitCode::FAILURE;
    };
    let report_path = match args.next().as_deref() {
        None => None,
        Some("--report") => match args.next() {
            Some(path) => Some(path),
            None => {
                eprintln!("{}", usage(&program));
                return ExitCode::FAILURE;
            }
        },
        Some(_) => {
            eprintln!("{}", usage(&program));
            return ExitCode::FAILURE;
        }
    };

    let text = match fs::read_to_string(&input_path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("failed to read {input_path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    let almanac: Almanac<i64> = match Almanac::parse(&text) {
        Ok(almanac) => almanac,
        Err(err) => {
            eprintln!("failed to parse {input_path}: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!(
        seeds = almanac.seeds().len(),
        mappings = almanac.mappings().len(),
        "parsed almanac"
    );

    let t0 = Instant::now();
    let mut chain = almanac.mappings().iter();
    let mut composed: Mapping<i64> = match chain.next() {
        Some(first) => first.clone(),
        None => {
            eprintln!("{input_path} contains no mappings");
            return ExitCode::FAILURE;
        }
    };
    for next in chain {
        composed = match merge(&composed, next) {
            Ok(folded) => folded,
            Err(err) => {
                eprintln!("failed to compose {} with {}: {err}", composed.name(), next.name());
                return ExitCode::FAILURE;
            }
        };
        info!(name = composed.name(), entries = composed.len(), "folded mapping");
    }
    let fold_elapsed = t0.elapsed();

    let lowest_by_seed = almanac
        .seeds()
        .iter()
        .map(|&seed| composed.apply(seed))
        .min();
    let seed_ranges = almanac.seed_ranges();
    let lowest_by_range = composed.minimum_destination(&seed_ranges);

    println!("{composed}");
    println!();
    match lowest_by_seed {
        Some(location) => println!("Lowest location over individual seeds: {location}"),
        None => println!("Lowest location over individual seeds: none (no seeds)"),
    }
    match lowest_by_range {
        Some(location) => println!("Lowest location over seed ranges:      {location}"),
        None => println!("Lowest location over seed ranges:      none (no ranges)"),
    }

    if let Some(path) = report_path {
        let report = RunReport {
            input: input_path,
            mapping_count: almanac.mappings().len(),
            composed_name: composed.name().to_string(),
            composed_entries: composed
                .entries()
                .iter()
                .map(|entry| ComposedEntry {
                    source_start: entry.source().start(),
                    source_end: entry.source().end(),
                    destination_start: entry.destination().start(),
                    destination_end: entry.destination().end(),
                })
                .collect(),
            fold_elapsed_ms: fold_elapsed.as_millis(),
            lowest_location_by_seed: lowest_by_seed,
            lowest_location_by_seed_range: lowest_by_range,
        };
        let file = match File::create(&path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("failed to create {path}: {err}");
                return ExitCode::FAILURE;
            }
        };
        let mut writer = BufWriter::new(file);
        if let Err(err) = serde_json::to_writer_pretty(&mut writer, &report) {
            eprintln!("failed to write {path}: {err}");
            return ExitCode::FAILURE;
        }
        println!();
        println!("Wrote: {path}");
    }

    ExitCode::SUCCESS
}
