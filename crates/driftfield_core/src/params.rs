//! Field generation parameters
//!
//! Ranges that initial spawn and reset draw from. The two presets carry the
//! population sizes and ranges of the snow and circuit-trace effects.

use std::ops::Range;

use serde::{Serialize, Deserialize};

/// Which particle flavor a field animates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMode {
    /// Falling point particles drawn as filled circles
    Snow,
    /// Downward line tracers drawn as fading polylines
    Circuit,
}

impl std::fmt::Display for FieldMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldMode::Snow => write!(f, "snow"),
            FieldMode::Circuit => write!(f, "circuit"),
        }
    }
}

/// Generation ranges for point particles
#[derive(Clone, Debug)]
pub struct PointParams {
    /// Circle radius in pixels
    pub radius: Range<f32>,
    /// Vertical units per frame
    pub speed: Range<f32>,
    /// Horizontal drift units per frame
    pub wind: Range<f32>,
    /// Fill opacity
    pub opacity: Range<f32>,
}

impl Default for PointParams {
    fn default() -> Self {
        Self {
            radius: 1.0..3.0,
            speed: 0.5..1.5,
            wind: -0.25..0.25,
            opacity: 0.2..0.7,
        }
    }
}

/// Generation ranges for trace particles
#[derive(Clone, Debug)]
pub struct TraceParams {
    /// Nominal trace size in pixels
    pub size: Range<f32>,
    /// Vertical units per frame
    pub speed: Range<f32>,
    /// Target history length in samples
    pub trail_len: Range<usize>,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            size: 1.0..3.0,
            speed: 0.5..2.5,
            trail_len: 50..150,
        }
    }
}

/// Variant-specific generation parameters
#[derive(Clone, Debug)]
pub enum KindParams {
    Point(PointParams),
    Trace(TraceParams),
}

impl KindParams {
    /// The mode this parameter set generates
    pub fn mode(&self) -> FieldMode {
        match self {
            KindParams::Point(_) => FieldMode::Snow,
            KindParams::Trace(_) => FieldMode::Circuit,
        }
    }
}

/// Complete construction parameters for a particle field
#[derive(Clone, Debug)]
pub struct FieldParams {
    /// Fixed population size
    pub count: usize,
    /// Variant and its generation ranges
    pub kind: KindParams,
}

impl FieldParams {
    /// Falling snow preset: 100 point particles
    pub fn snow() -> Self {
        Self {
            count: 100,
            kind: KindParams::Point(PointParams::default()),
        }
    }

    /// Circuit-trace preset: 40 trace particles
    pub fn circuit() -> Self {
        Self {
            count: 40,
            kind: KindParams::Trace(TraceParams::default()),
        }
    }

    /// Preset for a mode
    pub fn for_mode(mode: FieldMode) -> Self {
        match mode {
            FieldMode::Snow => Self::snow(),
            FieldMode::Circuit => Self::circuit(),
        }
    }

    /// Override the population size
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// The mode this field animates
    pub fn mode(&self) -> FieldMode {
        self.kind.mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snow_preset() {
        let params = FieldParams::snow();
        assert_eq!(params.count, 100);
        assert_eq!(params.mode(), FieldMode::Snow);
        match params.kind {
            KindParams::Point(p) => {
                assert_eq!(p.radius, 1.0..3.0);
                assert_eq!(p.speed, 0.5..1.5);
                assert_eq!(p.wind, -0.25..0.25);
            }
            KindParams::Trace(_) => panic!("snow preset should generate points"),
        }
    }

    #[test]
    fn test_circuit_preset() {
        let params = FieldParams::circuit();
        assert_eq!(params.count, 40);
        assert_eq!(params.mode(), FieldMode::Circuit);
        match params.kind {
            KindParams::Trace(p) => {
                assert_eq!(p.speed, 0.5..2.5);
                assert_eq!(p.trail_len, 50..150);
            }
            KindParams::Point(_) => panic!("circuit preset should generate traces"),
        }
    }

    #[test]
    fn test_with_count() {
        let params = FieldParams::snow().with_count(7);
        assert_eq!(params.count, 7);
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(FieldMode::Snow.to_string(), "snow");
        assert_eq!(FieldMode::Circuit.to_string(), "circuit");
    }
}
