use super::FloatType;

/// Range of valid ray parameters.
///
/// Both ends are inclusive for `contains`. Renderers keep `min` slightly above zero
/// so that secondary rays do not re-hit the surface they start on.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    pub min: FloatType,
    pub max: FloatType,
}

impl Interval {
    pub const EMPTY: Interval = Interval {
        min: FloatType::INFINITY,
        max: FloatType::NEG_INFINITY,
    };

    pub const UNIVERSE: Interval = Interval {
        min: FloatType::NEG_INFINITY,
        max: FloatType::INFINITY,
    };

    pub fn new(min: FloatType, max: FloatType) -> Interval {
        Interval { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub fn from_min(min: FloatType) -> Interval {
        Interval {
            min,
            max: FloatType::INFINITY,
        }
    }

    pub fn size(&self) -> FloatType {
        self.max - self.min
    }

    /// Closed test, `min <= x <= max`. NaN is never contained.
    pub fn contains(&self, x: FloatType) -> bool {
        self.min <= x && x <= self.max
    }

    /// Open test, `min < x < max`.
    pub fn surrounds(&self, x: FloatType) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: FloatType) -> FloatType {
        x.max(self.min).min(self.max)
    }

    /// Returns the same interval with the upper end replaced.
    pub fn with_max(&self, max: FloatType) -> Interval {
        Interval { min: self.min, max }
    }
}
