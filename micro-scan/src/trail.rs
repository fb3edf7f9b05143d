use alloc::{vec, vec::Vec};

#[allow(unused_imports)]
use micromath::F32Ext;

/// Per-segment brightness with multiplicative decay.
///
/// Every value lives in `[0, 1]`. Each frame the whole trail fades by the
/// decay factor and the segment under the scanner is re-lit to full.
pub struct BrightnessTrail {
    values: Vec<f32>,
    decay: f32,
}

impl BrightnessTrail {
    /// `decay` is clamped into `[0, 1]`; an empty trail is allowed but ignores ignition.
    pub fn new(len: usize, decay: f32) -> Self {
        Self {
            values: vec![0.0; len],
            decay: decay.clamp(0.0, 1.0),
        }
    }

    pub fn decay(&mut self) {
        for value in self.values.iter_mut() {
            *value *= self.decay;
        }
    }

    /// Lights the segment nearest `position` and returns its index.
    ///
    /// Ties round up (2.5 lights segment 3). Results outside the trail are
    /// clamped onto the first or last segment.
    pub fn ignite(&mut self, position: f32) -> Option<usize> {
        let index = self.index_for(position)?;
        self.values[index] = 1.0;
        Some(index)
    }

    /// Segment index for a position, or `None` for an empty trail.
    pub fn index_for(&self, position: f32) -> Option<usize> {
        let last = self.values.len().checked_sub(1)?;
        let rounded = (position + 0.5).floor();
        if rounded.is_nan() || rounded <= 0.0 {
            return Some(0);
        }
        Some((rounded as usize).min(last))
    }

    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(|value| *value = 0.0);
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn decay_factor(&self) -> f32 {
        self.decay
    }

    /// Index of the brightest segment; the first one wins on ties.
    pub fn brightest_index(&self) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (i, &value) in self.values.iter().enumerate() {
            match best {
                Some((_, b)) if b >= value => {}
                _ => best = Some((i, value)),
            }
        }
        best.map(|(i, _)| i)
    }
}
