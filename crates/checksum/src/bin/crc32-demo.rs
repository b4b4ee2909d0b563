//! CRC-32 demonstration.
//!
//! Runs the bitwise engine, the table engine and the streaming hasher over
//! the same bytes, insists they agree, and prints the checksum:
//!
//! ```text
//! $ crc32-demo
//! CRC32: 0x470B99F4
//! $ crc32-demo --hex "2F FF C0 64" --bzip2
//! $ crc32-demo -v
//! 01 02 03 04 05
//! CRC32 (decimal): 1191942644
//! CRC32: 0x470B99F4
//! ```
//!
//! Exit codes: 0 on success, 1 when the engines disagree, 2 for bad
//! arguments or unparseable hex.

use std::{
  env,
  io::{self, Write as _},
  process::ExitCode,
};

use crcduo::{Checksum, Crc32, Crc32Bzip2, hex, verify::Verifier};
use log::{LevelFilter, Log, Metadata, Record};

const SAMPLE: [u8; 5] = [1, 2, 3, 4, 5];

const EXIT_MISMATCH: u8 = 1;
const EXIT_USAGE: u8 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Logging
// ─────────────────────────────────────────────────────────────────────────────

struct StderrLogger;

impl Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata<'_>) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record<'_>) {
    if self.enabled(record.metadata()) {
      let _ = writeln!(io::stderr().lock(), "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }
  }

  fn flush(&self) {
    let _ = io::stderr().flush();
  }
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) {
  if log::set_logger(&LOGGER).is_ok() {
    log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Arguments
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default)]
struct Args {
  hex: Option<String>,
  bzip2: bool,
  verbose: bool,
}

fn parse_args() -> Result<Args, String> {
  let mut args = Args::default();
  let mut it = env::args().skip(1);
  while let Some(arg) = it.next() {
    match arg.as_str() {
      "--" => continue,
      "--hex" => {
        let Some(value) = it.next() else {
          return Err("--hex requires a value".to_owned());
        };
        args.hex = Some(value);
      }
      "--bzip2" => args.bzip2 = true,
      "--verbose" | "-v" => args.verbose = true,
      "--help" | "-h" => {
        print_help();
        return Err(String::new());
      }
      other => return Err(format!("Unknown arg: {other}")),
    }
  }
  Ok(args)
}

fn print_help() {
  eprintln!(
    "\
crc32-demo: compute CRC-32 with both engines and check they agree

USAGE:
  crc32-demo [--hex <BYTES>] [--bzip2] [--verbose]

OPTIONS:
  --hex <BYTES>     Input as hex, e.g. \"2F FF C0 64\" (default: 01 02 03 04 05)
  --bzip2           Also print CRC-32/BZIP2, the MSB-first variant
  -v, --verbose     Also print the input bytes and the decimal checksum, and
                    log engine selection and table builds to stderr
  -h, --help        Show this help
"
  );
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> ExitCode {
  let args = match parse_args() {
    Ok(args) => args,
    Err(msg) => {
      if msg.is_empty() {
        return ExitCode::SUCCESS;
      }
      eprintln!("{msg}");
      return ExitCode::from(EXIT_USAGE);
    }
  };

  init_logging(args.verbose);

  let data = match args.hex.as_deref() {
    Some(text) => match hex::parse_bytes(text) {
      Ok(bytes) => bytes,
      Err(err) => {
        eprintln!("invalid hex input: {err}");
        return ExitCode::from(EXIT_USAGE);
      }
    },
    None => SAMPLE.to_vec(),
  };

  log::debug!("{} input bytes, hasher backend {}", data.len(), Crc32::backend_name());

  let crc = match Verifier::new().verify(&data) {
    Ok(crc) => crc,
    Err(err) => {
      eprintln!("crc32-demo: {err}");
      return ExitCode::from(EXIT_MISMATCH);
    }
  };

  if args.verbose {
    println!("{}", hex::format_bytes(&data));
    println!("CRC32 (decimal): {crc}");
  }
  println!("CRC32: 0x{crc:08X}");
  if args.bzip2 {
    println!("CRC32/BZIP2: 0x{:08X}", Crc32Bzip2::checksum(&data));
  }

  ExitCode::SUCCESS
}
