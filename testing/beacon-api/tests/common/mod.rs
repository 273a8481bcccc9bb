use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

const PATH_TO_TEST_DATA_FOLDER: &str = "./tests/assets";

pub fn read_asset<P: AsRef<Path>>(file_name: P) -> anyhow::Result<Vec<u8>> {
    Ok(fs::read(PathBuf::from(PATH_TO_TEST_DATA_FOLDER).join(file_name))?)
}

#[allow(dead_code)]
pub fn read_json_file<P: AsRef<Path>>(file_name: P) -> anyhow::Result<Value> {
    Ok(serde_json::from_slice(&read_asset(file_name)?)?)
}
