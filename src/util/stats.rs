use std::fmt::Display;

use crate::geometry::{FloatType, HitRecord};

/// Running minimum, maximum and average of a series of samples.
#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub count: usize,
    pub min: FloatType,
    pub max: FloatType,
    pub avg: FloatType,
}

impl Stats {
    pub fn new_single(v: FloatType) -> Self {
        Stats {
            count: 1,
            min: v,
            max: v,
            avg: v,
        }
    }

    pub fn add_sample(&mut self, value: FloatType) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.avg += (value - self.avg) / (self.count as FloatType);
    }

    pub fn add_samples(&mut self, values: impl IntoIterator<Item = FloatType>) {
        for value in values {
            self.add_sample(value);
        }
    }

    pub fn merge(&self, other: &Self) -> Self {
        Stats {
            count: self.count + other.count,
            min: self.min.min(other.min),
            max: self.max.max(other.max),
            avg: if self.count > 0 || other.count > 0 {
                (self.avg * self.count as FloatType + other.avg * other.count as FloatType)
                    / (self.count + other.count) as FloatType
            } else {
                0.0
            },
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats {
            count: 0,
            min: FloatType::INFINITY,
            max: FloatType::NEG_INFINITY,
            avg: 0.0,
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.3} - {:.3}; avg {:.3}; {} samples",
            self.min, self.max, self.avg, self.count
        )
    }
}

/// Outcome counts of a batch of traced rays.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HitStats {
    pub rays: usize,
    pub hits: usize,
    pub front_faces: usize,
    pub distance: Stats,
}

impl HitStats {
    pub fn record(&mut self, hit: Option<&HitRecord>) {
        self.rays += 1;
        if let Some(rec) = hit {
            self.hits += 1;
            if rec.front_face {
                self.front_faces += 1;
            }
            self.distance.add_sample(rec.t);
        }
    }

    pub fn merge(&self, other: &Self) -> Self {
        HitStats {
            rays: self.rays + other.rays,
            hits: self.hits + other.hits,
            front_faces: self.front_faces + other.front_faces,
            distance: self.distance.merge(&other.distance),
        }
    }

    pub fn hit_ratio(&self) -> FloatType {
        if self.rays == 0 {
            0.0
        } else {
            self.hits as FloatType / self.rays as FloatType
        }
    }
}

impl Display for HitStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rays: {}", self.rays)?;
        writeln!(
            f,
            "Hits: {} ({:.1}%), {} front faces",
            self.hits,
            self.hit_ratio() * 100.0,
            self.front_faces
        )?;
        write!(f, "Hit distance: {}", self.distance)
    }
}
