#![allow(dead_code)]

use std::{fs, path::PathBuf};

/// Fresh directory under the system temp dir; removed by the caller.
pub fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "joblogger_it_{tag}_{}_{}",
        std::process::id(),
        rand::random::<u64>()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

/// Path under the temp dir that does not exist.
pub fn absent_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("joblogger_it_absent_{tag}_{}", rand::random::<u64>()))
}
