//! Deterministic random number generation for mock data.
//!
//! RULE: Mock data never touches a platform RNG.
//! Every stream is derived from one seed and a stable stream index, so
//! adding a stream never shifts the others.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub struct DeskRng {
    pub name: &'static str,
    inner: Pcg64Mcg,
}

impl DeskRng {
    pub fn new(seed: u64, stream_index: u64) -> Self {
        let derived_seed = seed ^ stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            name: "unnamed",
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    pub fn for_stream(seed: u64, stream: RngStream) -> Self {
        Self::new(seed, stream as u64).with_name(stream.name())
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a u32 in [lo, hi].
    pub fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        lo + self.next_u64_below((hi - lo) as u64 + 1) as u32
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.next_u64_below(items.len() as u64) as usize]
    }

    /// Index into `weights`, chosen proportionally to each weight.
    pub fn weighted_index(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut roll = self.next_f64() * total;
        for (i, w) in weights.iter().enumerate() {
            if roll < *w {
                return i;
            }
            roll -= w;
        }
        weights.len() - 1
    }

    /// `k` distinct items (fewer if `items` is shorter), in draw order.
    pub fn sample<'a, T>(&mut self, items: &'a [T], k: usize) -> Vec<&'a T> {
        let mut idx: Vec<usize> = (0..items.len()).collect();
        let k = k.min(items.len());
        for i in 0..k {
            let j = i + self.next_u64_below((idx.len() - i) as u64) as usize;
            idx.swap(i, j);
        }
        idx[..k].iter().map(|&i| &items[i]).collect()
    }
}

/// Stable stream assignments.
/// NEVER reorder or remove entries; only append.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngStream {
    Employees = 0,
    Tasks = 1,
}

impl RngStream {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Employees => "employees",
            Self::Tasks => "tasks",
        }
    }
}
