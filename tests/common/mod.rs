#![allow(dead_code, clippy::expect_used)]

use std::path::Path;
use std::process::{Command, Output};

/// Paths the generator writes for an entity whose lower-case name is `lower`.
pub fn expected_paths(lower: &str) -> Vec<String> {
    vec![
        format!("controllers/{lower}_controller.rs"),
        format!("repositories/{lower}/{lower}_repository_interface.rs"),
        format!("repositories/{lower}/{lower}_repository.rs"),
        format!("services/{lower}_service.rs"),
        format!("requests/{lower}.rs"),
        format!("responses/{lower}.rs"),
        format!("models/{lower}.rs"),
    ]
}

/// Run the `crudgen` binary in `dir` with a clean logging environment.
pub fn run_crudgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_crudgen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("CRUDGEN_LOG_LEVEL")
        .env_remove("CRUDGEN_LOG_FORMAT")
        .env_remove("CRUDGEN_OUTPUT_DIR")
        .env_remove("CRUDGEN_RUSTFMT_BIN")
        .args(args)
        .output()
        .expect("run crudgen")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
