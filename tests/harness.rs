//! Test harness for frisk integration tests

use std::path::Path;
use std::process::Command;

pub use frisk::test_utils::TestDir;

/// Run the frisk binary in `dir` with colors off; returns (stdout, stderr, success).
pub fn run_frisk(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_frisk");
    let output = Command::new(binary)
        .args(args)
        .arg("--color=never")
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run frisk");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/data.bin", 12);
        assert_eq!(std::fs::metadata(file_path).unwrap().len(), 12);
    }
}
