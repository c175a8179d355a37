//! Small utilities to manage bounded history buffers for charts.

use std::collections::VecDeque;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if cap == 0 {
        return;
    }
    while dq.len() >= cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

// Score samples for the control center sparkline (values 0..=100)
pub struct ScoreHistory {
    pub samples: VecDeque<u64>,
    cap: usize,
}

impl ScoreHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(cap.min(256)),
            cap,
        }
    }

    pub fn push(&mut self, score: u8) {
        push_capped(&mut self.samples, u64::from(score.min(100)), self.cap);
    }

    pub fn last(&self) -> Option<u64> {
        self.samples.back().copied()
    }

    // Most recent `n` samples, oldest first
    pub fn tail(&self, n: usize) -> Vec<u64> {
        let start = self.samples.len().saturating_sub(n);
        self.samples.iter().skip(start).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_drops_oldest() {
        let mut h = ScoreHistory::new(3);
        for s in [10, 20, 30, 40] {
            h.push(s);
        }
        assert_eq!(h.tail(10), vec![20, 30, 40]);
        assert_eq!(h.tail(2), vec![30, 40]);
        assert_eq!(h.last(), Some(40));
    }

    #[test]
    fn zero_cap_keeps_nothing() {
        let mut dq = VecDeque::new();
        push_capped(&mut dq, 1, 0);
        assert!(dq.is_empty());
    }

    #[test]
    fn large_cap_allocates_lazily() {
        let mut h = ScoreHistory::new(usize::MAX);
        h.push(42);
        assert_eq!(h.last(), Some(42));
    }
}
