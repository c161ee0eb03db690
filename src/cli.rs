use crate::assembler;
use crate::vm::VM;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: bytevm [--trace] <program.asm>";
const DEFAULT_LOG_FILTER: &str = "warn";
const TRACE_LOG_FILTER: &str = "bytevm=trace";

// sysexits(3)
pub const EX_USAGE: i32 = 64;
pub const EX_DATAERR: i32 = 65;
pub const EX_SOFTWARE: i32 = 70;
pub const EX_IOERR: i32 = 74;

static LOG_INIT: Once = Once::new();

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub path: String,
    pub trace: bool,
}

pub fn run_main() -> Result<(), i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    run_main_with_args(&args)
}

pub fn run_main_with_args(args: &[String]) -> Result<(), i32> {
    let options = match parse_args(args) {
        Some(options) => options,
        None => {
            eprintln!("{}", USAGE);
            return Err(EX_USAGE);
        }
    };
    init_logging(options.trace);
    run_file(&options.path)
}

/// Accepts exactly one program path, optionally preceded or followed by `--trace`.
pub fn parse_args(args: &[String]) -> Option<Options> {
    let mut path = None;
    let mut trace = false;
    for arg in args {
        match arg.as_str() {
            "--trace" => trace = true,
            flag if flag.starts_with("--") => return None,
            _ if path.is_some() => return None,
            _ => path = Some(arg.clone()),
        }
    }
    path.map(|path| Options { path, trace })
}

/// Installs the stderr log subscriber once per process.
///
/// The filter comes from `BYTEVM_LOG`, then `RUST_LOG`, then `warn`;
/// `trace` overrides all of them with `bytevm=trace`.
pub fn init_logging(trace: bool) {
    LOG_INIT.call_once(|| {
        let filter = if trace {
            EnvFilter::new(TRACE_LOG_FILTER)
        } else {
            env::var("BYTEVM_LOG")
                .or_else(|_| env::var("RUST_LOG"))
                .ok()
                .and_then(|expr| EnvFilter::try_new(expr).ok())
                .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
        };
        let _ = tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(filter)
            .try_init();
    });
}

pub fn run_file(path: &str) -> Result<(), i32> {
    match fs::read_to_string(path) {
        Ok(source) => {
            let stdout = io::stdout();
            let stderr = io::stderr();
            run_source_with_io(&source, &mut stdout.lock(), &mut stderr.lock())
        }
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path, e);
            Err(EX_IOERR)
        }
    }
}

/// Assembles and runs `source`, sending `PRINT` output to `out` and
/// diagnostics to `err`.
pub fn run_source_with_io<W, E>(source: &str, out: &mut W, err: &mut E) -> Result<(), i32>
where
    W: Write,
    E: Write,
{
    let chunk = match assembler::assemble(source) {
        Ok(chunk) => chunk,
        Err(e) => {
            let _ = writeln!(err, "assembly error: {}", e);
            return Err(EX_DATAERR);
        }
    };
    let result = {
        let mut vm = VM::with_output(chunk, &mut *out);
        vm.run()
    };
    let _ = out.flush();
    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = writeln!(err, "error: {}", e);
            Err(EX_SOFTWARE)
        }
    }
}
