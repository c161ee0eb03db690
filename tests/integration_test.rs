use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_bytevm");

#[test]
fn test_run_branch_demo() {
    let output = Command::new(BIN)
        .arg("demos/branch.asm")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "40\n");
}

#[test]
fn test_run_factorial_demo_with_trace() {
    let output = Command::new(BIN)
        .args(["--trace", "demos/factorial.asm"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "120\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("dispatch"));
}

#[test]
fn test_usage_error_exit_code() {
    let output = Command::new(BIN)
        .args(["one", "two"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(64));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: bytevm"));
}

#[test]
fn test_runtime_fault_exit_code() {
    let mut path = std::env::temp_dir();
    path.push(format!("bytevm_bin_{}_fault.asm", std::process::id()));
    std::fs::write(&path, "const 1\nconst 2\neq\niadd\n").unwrap();

    let output = Command::new(BIN)
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    let _ = std::fs::remove_file(&path);

    assert_eq!(output.status.code(), Some(70));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("error: stack underflow at ip 5"));
}
