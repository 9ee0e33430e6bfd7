//! Xqci toolchain CLI.
//!
//! This binary provides a single entry point for the fixture tooling. It performs:
//! 1. **Filter:** Rewrite `<unknown>` lines in an objdump listing read from stdin.
//! 2. **Check:** Verify a built artifact contains the fixture encodings verbatim.
//! 3. **Fixture:** Materialize the smoke program as raw bytes or an assembler listing.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use xqdis_core::check;
use xqdis_core::config::Config;
use xqdis_core::filter;
use xqdis_core::fixture;

#[derive(Parser, Debug)]
#[command(
    name = "xqdis",
    author,
    version,
    about = "Xqci custom-instruction smoke fixture and objdump post-processor",
    long_about = "Rewrite undecoded listing lines, check built artifacts, or emit the smoke program.\n\nThe filter reads a disassembler listing on stdin and replaces <unknown> markers with the real vendor mnemonics.\n\nExamples:\n  llvm-objdump -d fixture.o | xqdis filter\n  xqdis check -f fixture.o\n  xqdis fixture --asm"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rewrite undecoded lines in a listing read from stdin.
    Filter {
        /// Print raw x{n} register names instead of ABI names.
        #[arg(long)]
        numeric_regs: bool,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Verify a built artifact contains the fixture byte image.
    Check {
        /// Artifact to scan (ELF or raw binary).
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Materialize the smoke program.
    Fixture {
        /// Emit the `.insn` directive listing instead of raw bytes.
        #[arg(long)]
        asm: bool,

        /// Output path (stdout when omitted).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Filter {
            numeric_regs,
            config,
        }) => cmd_filter(numeric_regs, config),
        Some(Commands::Check { file }) => cmd_check(&file),
        Some(Commands::Fixture { asm, out }) => cmd_fixture(asm, out),
        // Bare invocation behaves as the stdin filter.
        None => cmd_filter(false, None),
    }
}

/// Loads a JSON configuration file, or the defaults when no path is given.
///
/// Exits the process with an error message when the file cannot be read
/// or parsed.
fn load_config(path: Option<PathBuf>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!(
            "\n[!] FATAL: Could not read config '{}': {}",
            path.display(),
            e
        );
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!(
            "\n[!] FATAL: Could not parse config '{}': {}",
            path.display(),
            e
        );
        process::exit(1);
    })
}

/// Runs the stdin-to-stdout listing rewrite loop.
fn cmd_filter(numeric_regs: bool, config_path: Option<PathBuf>) {
    let mut config = load_config(config_path);
    config.disasm.numeric_regs |= numeric_regs;

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = filter::run(stdin.lock(), stdout.lock(), &config) {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Scans a built artifact for the fixture image and reports where it sits.
fn cmd_check(path: &Path) {
    let data = fs::read(path).unwrap_or_else(|e| {
        eprintln!(
            "\n[!] FATAL: Could not read file '{}': {}",
            path.display(),
            e
        );
        process::exit(1);
    });

    match check::check_bytes(&data) {
        Ok(report) => match report.section {
            Some(section) => println!(
                "[*] Fixture image at offset {:#x} in section {}",
                report.offset, section
            ),
            None => println!("[*] Fixture image at offset {:#x}", report.offset),
        },
        Err(e) => {
            eprintln!("[!] Check failed: {e}");
            process::exit(1);
        }
    }
}

/// Writes the smoke program and exits with its arithmetic status.
fn cmd_fixture(asm: bool, out: Option<PathBuf>) {
    let payload = if asm {
        fixture::render_asm().into_bytes()
    } else {
        fixture::image()
    };

    let result = match out {
        Some(path) => fs::write(&path, &payload),
        None => io::stdout()
            .write_all(&payload)
            .and_then(|()| io::stdout().flush()),
    };
    if let Err(e) = result {
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    }
    process::exit(fixture::exit_code());
}
