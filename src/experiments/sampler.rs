use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Sample points live in `[0, SAMPLE_SPACE)`.
pub const SAMPLE_SPACE: u32 = 100;

pub trait SamplePointSource: Send + Sync {
    fn next_uniform(&self) -> u32;
}

/// Independent uniform draw per call from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSampler;

impl SamplePointSource for ThreadRngSampler {
    fn next_uniform(&self) -> u32 {
        rand::thread_rng().gen_range(0..SAMPLE_SPACE)
    }
}

/// Replays a fixed list of sample points, wrapping around at the end.
pub struct SequenceSampler {
    points: Vec<u32>,
    cursor: AtomicUsize,
}

impl SequenceSampler {
    pub fn new(points: Vec<u32>) -> Self {
        Self {
            points,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl SamplePointSource for SequenceSampler {
    fn next_uniform(&self) -> u32 {
        if self.points.is_empty() {
            return 0;
        }
        let idx = self.cursor.fetch_add(1, Ordering::Relaxed) % self.points.len();
        self.points[idx]
    }
}
