//! End-to-end checks of the `crc32-demo` binary.

use std::process::{Command, Output};

use crcduo::config::STRATEGY_ENV;

fn demo(args: &[&str], strategy: Option<&str>) -> Output {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_crc32-demo"));
  cmd.args(args).env_remove(STRATEGY_ENV);
  if let Some(value) = strategy {
    cmd.env(STRATEGY_ENV, value);
  }
  cmd.output().expect("spawn crc32-demo")
}

fn stdout(out: &Output) -> String {
  String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
  String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn default_run_prints_sample_checksum() {
  let out = demo(&[], None);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert_eq!(stdout(&out), "CRC32: 0x470B99F4\n");
}

#[test]
fn hex_input_and_bzip2() {
  let out = demo(&["--hex", "2F FF C0 64 00 14 00 00 00 01 81 CD 01 05 12 34 48 65 6C 6C 6F 21", "--bzip2"], None);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert_eq!(stdout(&out), "CRC32: 0xB535F593\nCRC32/BZIP2: 0xEC2AC4DA\n");
}

#[test]
fn invalid_hex_exits_with_usage_code() {
  let out = demo(&["--hex", "01 0g"], None);
  assert_eq!(out.status.code(), Some(2));
  assert!(stderr(&out).contains("invalid hex digit 'g' at offset 4"));
  assert!(stdout(&out).is_empty());
}

#[test]
fn unknown_argument_exits_with_usage_code() {
  let out = demo(&["--frobnicate"], None);
  assert_eq!(out.status.code(), Some(2));
  assert!(stderr(&out).contains("Unknown arg: --frobnicate"));
}

#[test]
fn help_exits_cleanly() {
  let out = demo(&["--help"], None);
  assert!(out.status.success());
  assert!(stderr(&out).contains("USAGE"));
}

#[test]
fn forced_strategies_agree() {
  for strategy in ["bitwise", "table", "auto"] {
    let out = demo(&[], Some(strategy));
    assert!(out.status.success(), "{strategy}: {}", stderr(&out));
    assert_eq!(stdout(&out), "CRC32: 0x470B99F4\n", "{strategy}");
  }
}

#[test]
fn verbose_logs_selected_backend() {
  let out = demo(&["-v"], Some("bitwise"));
  assert!(out.status.success());
  let log = stderr(&out);
  assert!(log.contains("portable/bitwise"), "log: {log}");
  assert!(log.contains("crc32 strategy forced to bitwise"), "log: {log}");
}

#[test]
fn verbose_prints_input_dump_and_decimal() {
  let out = demo(&["-v"], None);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert_eq!(stdout(&out), "01 02 03 04 05\nCRC32 (decimal): 1191942644\nCRC32: 0x470B99F4\n");

  let out = demo(&["--verbose", "--hex", "2fffc064001400000001 81cd0105123448656c6c6f21"], None);
  assert!(out.status.success(), "stderr: {}", stderr(&out));
  assert_eq!(
    stdout(&out),
    "2F FF C0 64 00 14 00 00 00 01 81 CD 01 05 12 34 48 65 6C 6C 6F 21\nCRC32 (decimal): 3040212371\nCRC32: 0xB535F593\n"
  );
}

#[test]
fn unknown_strategy_warns_and_falls_back() {
  let out = demo(&[], Some("simd"));
  assert!(out.status.success());
  assert_eq!(stdout(&out), "CRC32: 0x470B99F4\n");
  assert!(stderr(&out).contains("ignoring CRCDUO_CRC32_STRATEGY"), "stderr: {}", stderr(&out));
}
