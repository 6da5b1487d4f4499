use std::io::Write;

use aok::{OK, Void};
use fiting_tree::{FitingTree, FitingTreeData, load_keys};
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn random_sorted(n: usize, max: u64, seed: u64) -> Vec<u64> {
  let mut rng = StdRng::seed_from_u64(seed);
  let mut data: Vec<u64> = (0..n).map(|_| rng.random_range(0..max)).collect();
  data.sort_unstable();
  data.dedup();
  data
}

// ============================================================================
// Build Tests / 构建测试
// ============================================================================

/// Test two linear runs with epsilon 0 yield exactly two segments
/// 测试 epsilon 为 0 时两段线性数据恰好产生两个段
#[test]
fn test_two_segments() -> Void {
  let keys: Vec<u64> = vec![1, 2, 3, 10, 11, 12];
  let positions: Vec<usize> = (0..6).collect();
  let tree = FitingTree::new(&keys, &positions, 0, true)?;

  assert_eq!(tree.segment_count(), 2);

  let s0 = &tree.segments[0];
  assert_eq!(s0.start_key, 1);
  assert!((s0.slope - 1.0).abs() < 1e-9);
  assert!((s0.intercept - (-1.0)).abs() < 1e-9);
  assert_eq!(s0.max_error, 0);
  assert_eq!((s0.start_position, s0.end_position), (0, 2));

  let s1 = &tree.segments[1];
  assert_eq!(s1.start_key, 10);
  assert!((s1.slope - 1.0).abs() < 1e-9);
  assert!((s1.intercept - (-7.0)).abs() < 1e-9);
  assert_eq!(s1.max_error, 0);
  assert_eq!((s1.start_position, s1.end_position), (3, 5));

  info!("two_segments passed");
  OK
}

/// Test segments partition [0, n) with no gaps and increasing start keys
/// 测试段无缝划分 [0, n) 且起始键递增
#[test]
fn test_segment_coverage() -> Void {
  let keys = random_sorted(20_000, u64::MAX / 2, 7);
  let positions: Vec<usize> = (0..keys.len()).collect();

  for &eps in &[0u64, 1, 4, 32, 256] {
    let tree = FitingTree::new(&keys, &positions, eps, true)?;

    let mut expect = 0usize;
    let mut prev_key = None;
    for seg in &tree.segments {
      assert_eq!(seg.start_position, expect, "gap or overlap at eps={eps}");
      assert!(seg.start_position <= seg.end_position);
      if let Some(p) = prev_key {
        assert!(seg.start_key > p, "start keys must increase");
      }
      prev_key = Some(seg.start_key);
      expect = seg.end_position + 1;
    }
    assert_eq!(expect, keys.len());
  }

  info!("segment_coverage passed");
  OK
}

/// Test every trained key's true position lies within the predicted range
/// 测试每个训练键的真实位置都落在预测范围内
#[test]
fn test_error_bound() -> Void {
  let keys = random_sorted(10_000, 1_000_000_000, 42);
  let positions: Vec<usize> = (0..keys.len()).collect();

  for &eps in &[0u64, 1, 4, 32] {
    let tree = FitingTree::new(&keys, &positions, eps, true)?;
    for (i, &k) in keys.iter().enumerate() {
      let (lo, hi) = tree.search_range(k);
      assert!(lo <= i && i <= hi, "eps={eps} key={k} pos={i} range=({lo},{hi})");
      assert!(hi - lo <= 2 * eps as usize, "range wider than 2*eps");
    }
  }

  info!("error_bound passed");
  OK
}

/// Test empty input yields an empty model answering (0, 0)
/// 测试空输入产生空模型，查询返回 (0, 0)
#[test]
fn test_empty_input() -> Void {
  let tree = FitingTree::<u64>::new(&[], &[], 32, true)?;
  assert!(tree.is_empty());
  assert_eq!(tree.segment_count(), 0);
  assert_eq!(tree.len(), 0);
  assert_eq!(tree.search_range(12345), (0, 0));
  OK
}

/// Test key below every trained key returns the degenerate (0, 0)
/// 测试小于所有训练键的键返回退化区间 (0, 0)
#[test]
fn test_below_range() -> Void {
  let keys: Vec<u64> = (100..200).collect();
  let positions: Vec<usize> = (0..100).collect();
  let tree = FitingTree::new(&keys, &positions, 4, true)?;

  assert_eq!(tree.search_range(99), (0, 0));
  assert_eq!(tree.search_range(0), (0, 0));
  OK
}

/// Test lower <= upper for arbitrary probe keys, including out-of-range
/// 测试任意探测键（含超出范围）都满足 lower <= upper
#[test]
fn test_range_always_valid() -> Void {
  let keys = random_sorted(5_000, 1_000_000, 11);
  let positions: Vec<usize> = (0..keys.len()).collect();
  let tree = FitingTree::new(&keys, &positions, 8, true)?;

  let mut rng = StdRng::seed_from_u64(12);
  for _ in 0..10_000 {
    let probe: u64 = rng.random_range(0..2_000_000);
    let (lo, hi) = tree.search_range(probe);
    assert!(lo <= hi, "probe={probe} range=({lo},{hi})");
    assert!(hi < tree.len().max(1));
  }
  OK
}

/// Test length mismatch and unsorted input are rejected
/// 测试长度不匹配与未排序输入被拒绝
#[test]
fn test_invalid_input() -> Void {
  assert!(FitingTree::<u64>::new(&[1, 2, 3], &[0, 1], 4, true).is_err());
  assert!(FitingTree::new(&[3u64, 1, 2], &[0, 1, 2], 4, true).is_err());
  // check_sorted off skips the validation
  // 关闭 check_sorted 则跳过校验
  assert!(FitingTree::new(&[3u64, 1, 2], &[0, 1, 2], 4, false).is_ok());
  OK
}

/// Test duplicate keys are absorbed into segments
/// 测试重复键被段吸收
#[test]
fn test_duplicates() -> Void {
  let keys: Vec<u64> = vec![1, 1, 1, 2, 2, 3, 3, 3, 3];
  let positions: Vec<usize> = (0..keys.len()).collect();
  let tree = FitingTree::new(&keys, &positions, 4, true)?;

  for (i, &k) in keys.iter().enumerate() {
    let (lo, hi) = tree.search_range(k);
    assert!(lo <= i && i <= hi, "key={k} pos={i}");
  }
  OK
}

// ============================================================================
// Persistence Tests / 持久化测试
// ============================================================================

/// Test training twice yields byte-identical models
/// 测试两次训练产生字节相同的模型
#[test]
fn test_determinism() -> Void {
  let keys = random_sorted(3_000, 1_000_000, 99);
  let positions: Vec<usize> = (0..keys.len()).collect();

  let a = FitingTree::new(&keys, &positions, 16, true)?;
  let b = FitingTree::new(&keys, &positions, 16, true)?;
  assert_eq!(serde_json::to_string(&a)?, serde_json::to_string(&b)?);

  info!("determinism passed");
  OK
}

/// Test JSON round-trip preserves every query result
/// 测试 JSON 往返保留所有查询结果
#[test]
fn test_json_round_trip() -> Void {
  let keys = random_sorted(2_000, 1_000_000_000, 5);
  let positions: Vec<usize> = (0..keys.len()).collect();
  let tree = FitingTree::new(&keys, &positions, 32, true)?;

  let dir = tempfile::tempdir()?;
  let path = dir.path().join("fiting_tree_model.json");
  tree.save(&path)?;
  let loaded = FitingTree::<u64>::load(&path)?;

  assert_eq!(loaded.epsilon, tree.epsilon);
  assert_eq!(loaded.segment_count(), tree.segment_count());
  for &k in &keys {
    assert_eq!(loaded.search_range(k), tree.search_range(k));
  }

  info!("json_round_trip passed: {} segments", tree.segment_count());
  OK
}

/// Test loading a key file skips malformed lines silently
/// 测试加载键文件时静默跳过格式错误的行
#[test]
fn test_load_keys_malformed() -> Void {
  let dir = tempfile::tempdir()?;
  let path = dir.path().join("keys.txt");
  let mut f = std::fs::File::create(&path)?;
  writeln!(f, "10")?;
  writeln!(f, "not_a_number")?;
  writeln!(f, "  30  ")?;
  writeln!(f, "")?;
  writeln!(f, "20")?;
  drop(f);

  let keys: Vec<u64> = load_keys(&path)?;
  assert_eq!(keys, vec![10, 30, 20]);
  OK
}

// ============================================================================
// Data-Owning Tests / 持有数据测试
// ============================================================================

/// Test exact lookup through the data-owning wrapper
/// 测试通过持有数据的封装做精确查找
#[test]
fn test_data_get() -> Void {
  let data = random_sorted(10_000, 1_000_000_000, 3);
  let index = FitingTreeData::load(data.clone(), 16, true)?;

  for (i, &k) in data.iter().enumerate() {
    assert_eq!(index.get(k), Some(i), "key={k}");
  }
  assert_eq!(index.get(1_000_000_001), None);

  info!("data_get passed, n={}", data.len());
  OK
}

/// Test lookup misses between present keys
/// 测试存在键之间的未命中查找
#[test]
fn test_data_get_absent() -> Void {
  let data: Vec<u64> = (0..1000).map(|i| i * 2).collect();
  let index = FitingTreeData::load(data, 8, true)?;

  assert_eq!(index.get(0), Some(0));
  assert_eq!(index.get(1), None);
  assert_eq!(index.get(999), None);
  assert_eq!(index.get(998), Some(499));
  OK
}

/// Test range query returns exactly the keys in [lo, hi]
/// 测试范围查询恰好返回 [lo, hi] 内的键
#[test]
fn test_range_query() -> Void {
  let data: Vec<u64> = (0..1000).map(|i| i * 3).collect();
  let index = FitingTreeData::load(data, 8, true)?;

  assert_eq!(index.range_query(30, 45), vec![30, 33, 36, 39, 42, 45]);
  assert_eq!(index.range_query(31, 32), Vec::<u64>::new());
  assert_eq!(index.range_query(45, 30), Vec::<u64>::new());
  assert_eq!(index.range_query(0, 6), vec![0, 3, 6]);
  assert_eq!(index.range_query(2995, 4000), vec![2997]);
  OK
}

#[test]
fn test() -> Void {
  info!("All fiting_tree tests passed!");
  OK
}
