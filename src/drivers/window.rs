use std::collections::VecDeque;

use crate::drivers::ScopeError;

/// Rolling history of the most recent samples.
///
/// Capacity is fixed for the lifetime of the process; once full, each push
/// evicts the oldest entry. Length is always `min(total pushed, capacity)`
/// and iteration order is arrival order.
pub struct SampleWindow {
    data: VecDeque<i16>,
    capacity: usize,
}

impl SampleWindow {
    pub fn with_capacity(capacity: usize) -> Result<Self, ScopeError> {
        if capacity == 0 {
            return Err(ScopeError::InvalidCapacity);
        }
        Ok(Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn push(&mut self, sample: i16) {
        if self.data.len() == self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(sample);
    }

    /// Ordered contents, oldest first, for the render step.
    pub fn snapshot(&self) -> impl Iterator<Item = i16> + '_ {
        self.data.iter().copied()
    }
}
