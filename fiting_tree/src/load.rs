//! Key file loading
//! 键文件加载

use std::{
  fs::File,
  io::{BufRead, BufReader},
  path::Path,
  str::FromStr,
};

use crate::Result;

/// Load keys from a text file, one per line
/// 从文本文件加载键，每行一个
///
/// Non-numeric lines are skipped silently; the returned keys are in file
/// order and not sorted here.
/// 非数字行被静默跳过；返回的键保持文件顺序，此处不排序。
pub fn load_keys<K: FromStr>(path: impl AsRef<Path>) -> Result<Vec<K>> {
  let file = File::open(path)?;
  let mut keys = Vec::new();
  for line in BufReader::new(file).lines() {
    let line = line?;
    if let Ok(key) = line.trim().parse::<K>() {
      keys.push(key);
    }
  }
  Ok(keys)
}
