//! Plain-text model layout
//! 纯文本模型布局
//!
//! Line 1: `error_bound radix_bits`; line 2: knot count K; K lines of
//! `key position`; one line of radix entry count R; R lines of
//! `radix_key first_knot_index`.
//! 第 1 行：`error_bound radix_bits`；第 2 行：结点数 K；K 行 `key position`；
//! 一行基数条目数 R；R 行 `radix_key first_knot_index`。

use std::{
  fs::File,
  io::{BufRead, BufReader, BufWriter, Write},
  path::Path,
};

use crate::{Knot, RadixEntry, RadixSpline, Result, SplineError};

impl RadixSpline {
  /// Save in the plain-text layout
  /// 以纯文本布局保存
  pub fn save_text(&self, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    let mut w = BufWriter::new(file);

    writeln!(w, "{} {}", self.error_bound, self.radix_bits)?;
    writeln!(w, "{}", self.knots.len())?;
    for k in &self.knots {
      writeln!(w, "{} {}", k.key, k.position)?;
    }
    writeln!(w, "{}", self.radix_table.len())?;
    for e in &self.radix_table {
      writeln!(w, "{} {}", e.radix_key, e.knot_idx)?;
    }
    w.flush()?;
    Ok(())
  }

  /// Load from the plain-text layout
  /// 从纯文本布局加载
  pub fn load_text(path: impl AsRef<Path>) -> Result<Self> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = next_line(&mut lines, "missing header")?;
    let mut it = header.split_whitespace();
    let error_bound = parse(it.next(), "error_bound")?;
    let radix_bits: u32 = parse(it.next(), "radix_bits")?;
    if radix_bits == 0 || radix_bits > 64 {
      return Err(SplineError::InvalidRadixBits(radix_bits));
    }

    let count_line = next_line(&mut lines, "missing knot count")?;
    let knot_count: usize = parse(Some(count_line.trim()), "knot count")?;
    let mut knots = Vec::with_capacity(knot_count);
    for _ in 0..knot_count {
      let line = next_line(&mut lines, "missing knot line")?;
      let mut it = line.split_whitespace();
      knots.push(Knot {
        key: parse(it.next(), "knot key")?,
        position: parse(it.next(), "knot position")?,
      });
    }

    let count_line = next_line(&mut lines, "missing radix entry count")?;
    let entry_count: usize = parse(Some(count_line.trim()), "radix entry count")?;
    let mut radix_table = Vec::with_capacity(entry_count);
    for _ in 0..entry_count {
      let line = next_line(&mut lines, "missing radix entry line")?;
      let mut it = line.split_whitespace();
      radix_table.push(RadixEntry {
        radix_key: parse(it.next(), "radix key")?,
        knot_idx: parse(it.next(), "knot index")?,
      });
    }

    Ok(Self {
      error_bound,
      radix_bits,
      knots,
      radix_table,
    })
  }
}

fn next_line(lines: &mut impl Iterator<Item = std::io::Result<String>>, what: &str) -> Result<String> {
  match lines.next() {
    Some(line) => Ok(line?),
    None => Err(SplineError::Parse(what.into())),
  }
}

fn parse<T: std::str::FromStr>(token: Option<&str>, what: &str) -> Result<T> {
  token
    .and_then(|t| t.parse().ok())
    .ok_or_else(|| SplineError::Parse(what.into()))
}
