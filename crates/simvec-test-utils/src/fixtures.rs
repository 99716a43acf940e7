//! Deterministic sample data for container tests.

/// `0, 1, .., n - 1` as `i32`.
pub fn counting(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// `n` distinct owned strings (`"w0"`, `"w1"`, ...).
///
/// Heap-owning elements catch relocation bugs that `Copy` types hide.
pub fn words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("w{i}")).collect()
}
