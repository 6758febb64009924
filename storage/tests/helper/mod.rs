// SPDX-FileCopyrightText: 2025 All contributors
//
// SPDX-License-Identifier: GPL-2.0-or-later

#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub fn get_path(folder_name: &str) -> PathBuf {
    std::env::temp_dir().join("takeoff-finder").join(folder_name)
}

pub fn setup_empty_test_folder(folder_name: &str) -> PathBuf {
    let path = get_path(folder_name);
    if let Ok(true) = std::fs::exists(&path) {
        std::fs::remove_dir_all(&path)
            .unwrap_or_else(|_| panic!("Failed to cleanup test dir {}", path.display()));
    }
    std::fs::create_dir_all(&path).unwrap_or_else(|err| {
        panic!(
            "Failed to create test dir for {}. Reason: {err}",
            path.display()
        )
    });
    path
}

pub fn create_file(folder: &Path, name: &str, content: &str) -> PathBuf {
    let file_name = folder.join(name);
    std::fs::write(&file_name, content).unwrap_or_else(|e| {
        panic!(
            "Failed to write test file {}. Error: {e}",
            file_name.display()
        )
    });
    file_name
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}. Error: {e}", path.display()))
}
