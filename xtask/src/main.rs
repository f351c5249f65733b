//! Custom cargo commands for the mresult crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)

use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Files whose payload accessors must route through `require_executed`.
const RESULT_FILES: &[&str] = &["src/result0.rs", "src/result1.rs", "src/result2.rs"];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (contract markers + tests + clippy + docs)
  test      Run all Rust tests
  check     Quick check (cargo check + test + clippy)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("mresult Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking execution-contract guards...");
    check_contract_guards()?;
    println!("✓ Every payload accessor is guarded\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet", "--all-features"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running tests without default features...");
    run_cargo(&["test", "--quiet", "--no-default-features", "--lib"])?;
    println!("✓ Core builds without proptest\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

/// Every `#[track_caller]` accessor in a result file must call
/// `require_executed` before touching its fields.
fn check_contract_guards() -> Result<()> {
    let root = project_root()?;

    for file in RESULT_FILES {
        let path = root.join(file);
        let source = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let unguarded = unguarded_accessors(&source);
        if !unguarded.is_empty() {
            bail!(
                "{}: accessors without require_executed: {}",
                display_relative(&root, &path),
                unguarded.join(", ")
            );
        }
    }

    let contracts = fs::read_to_string(root.join("src/verify/contracts.rs"))
        .context("Failed to read verify/contracts.rs")?;
    if !contracts.contains("INVARIANT:") {
        bail!("verify/contracts.rs lost its INVARIANT marker. Someone may have removed the check!");
    }

    Ok(())
}

/// Names of `#[track_caller]` functions whose body never calls `require_executed`.
fn unguarded_accessors(source: &str) -> Vec<String> {
    let mut unguarded = Vec::new();
    let mut lines = source.lines().peekable();

    while let Some(line) = lines.next() {
        if line.trim() != "#[track_caller]" {
            continue;
        }

        let Some(signature) = lines.next() else {
            break;
        };
        let name = signature
            .split("fn ")
            .nth(1)
            .and_then(|rest| rest.split('(').next())
            .unwrap_or("<unknown>")
            .to_string();

        // The first statement of a guarded accessor is the check.
        let guarded = lines
            .peek()
            .is_some_and(|body| body.contains("require_executed("));
        if !guarded {
            unguarded.push(name);
        }
    }

    unguarded
}

fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
