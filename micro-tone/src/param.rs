#[allow(unused_imports)]
use micromath::F32Ext;

/// Audio parameter that approaches its target exponentially.
///
/// `set_target` behaves like a time-constant ramp: after one time constant
/// the value has covered ~63% of the distance to the target.
#[derive(Debug, Clone)]
pub struct SmoothedParam {
    value: f32,
    target: f32,
    time_constant: f32,
}

impl SmoothedParam {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            target: value,
            time_constant: 0.0,
        }
    }

    /// Jumps to `value` immediately.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.time_constant = 0.0;
    }

    /// Starts an approach towards `target`. A non-positive time constant jumps.
    pub fn set_target(&mut self, target: f32, time_constant: f32) {
        self.target = target;
        self.time_constant = time_constant;
        if time_constant <= 0.0 {
            self.value = target;
        }
    }

    pub fn advance(&mut self, seconds: f32) {
        if self.time_constant <= 0.0 {
            self.value = self.target;
            return;
        }
        let remaining = decay_factor(seconds / self.time_constant);
        self.value = self.target + (self.value - self.target) * remaining;
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

/// `e^-x` for `x >= 0`; 1 for non-positive or NaN input.
pub fn decay_factor(x: f32) -> f32 {
    if x.is_nan() || x <= 0.0 {
        return 1.0;
    }
    if x > 80.0 {
        return 0.0;
    }
    (-x).exp()
}
