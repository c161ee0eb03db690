use bytevm::cli::{
    parse_args, run_file, run_main_with_args, run_source_with_io, Options, EX_DATAERR, EX_IOERR,
    EX_SOFTWARE, EX_USAGE,
};
use std::env;
use std::fs;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|arg| arg.to_string()).collect()
}

fn run_captured(source: &str) -> (Result<(), i32>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = run_source_with_io(source, &mut out, &mut err);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn parse_args_accepts_single_path() {
    assert_eq!(
        parse_args(&args(&["prog.asm"])),
        Some(Options {
            path: "prog.asm".to_string(),
            trace: false,
        })
    );
}

#[test]
fn parse_args_accepts_trace_flag_in_any_position() {
    let expected = Some(Options {
        path: "prog.asm".to_string(),
        trace: true,
    });
    assert_eq!(parse_args(&args(&["--trace", "prog.asm"])), expected);
    assert_eq!(parse_args(&args(&["prog.asm", "--trace"])), expected);
}

#[test]
fn parse_args_rejects_bad_command_lines() {
    assert_eq!(parse_args(&args(&[])), None);
    assert_eq!(parse_args(&args(&["--trace"])), None);
    assert_eq!(parse_args(&args(&["a.asm", "b.asm"])), None);
    assert_eq!(parse_args(&args(&["--verbose", "a.asm"])), None);
}

#[test]
fn run_main_reports_usage_error() {
    assert_eq!(run_main_with_args(&args(&["one", "two"])), Err(EX_USAGE));
}

#[test]
fn run_source_prints_program_output() {
    let (result, out, err) = run_captured("const 2\nconst 3\nimul\nprint\n");
    assert_eq!(result, Ok(()));
    assert_eq!(out, "6\n");
    assert!(err.is_empty());
}

#[test]
fn run_source_reports_assembly_errors() {
    let (result, out, err) = run_captured("const 1\nbogus\n");
    assert_eq!(result, Err(EX_DATAERR));
    assert!(out.is_empty());
    assert_eq!(err, "assembly error: line 2: unknown mnemonic `bogus`\n");
}

#[test]
fn run_source_reports_runtime_faults_with_offset() {
    let (result, out, err) = run_captured("const 1\nprint\nconst 0\nidiv\nprint\n");
    assert_eq!(result, Err(EX_SOFTWARE));
    assert_eq!(out, "1\n");
    assert_eq!(err, "error: division by zero at ip 5\n");
}

#[test]
fn run_file_executes_valid_program() {
    let mut path = env::temp_dir();
    path.push(format!("bytevm_test_{}_ok.asm", std::process::id()));
    fs::write(&path, "const 1\nprint\n").unwrap();

    assert!(run_file(path.to_str().unwrap()).is_ok());

    let _ = fs::remove_file(&path);
}

#[test]
fn run_file_reports_missing_file() {
    let mut path = env::temp_dir();
    path.push(format!("bytevm_test_{}_missing.asm", std::process::id()));

    assert_eq!(run_file(path.to_str().unwrap()), Err(EX_IOERR));
}

#[test]
fn run_file_reports_runtime_fault() {
    let mut path = env::temp_dir();
    path.push(format!("bytevm_test_{}_fault.asm", std::process::id()));
    fs::write(&path, "iadd\n").unwrap();

    assert_eq!(run_file(path.to_str().unwrap()), Err(EX_SOFTWARE));

    let _ = fs::remove_file(&path);
}
