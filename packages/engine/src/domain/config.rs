//! SimConfig - the only surface the UI collaborator mutates
//!
//! Loaded from JSON (camelCase keys, every field optional) or edited knob by
//! knob through the clamping setters. JSON input is validated and rejected
//! when out of range; setters never fail.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

pub const DEFAULT_CELL_SIZE_PX: u32 = 5;
pub const DEFAULT_TICK_RATE: f32 = 10.0;
pub const DEFAULT_TOPPLE_PROBABILITY: f32 = 0.5;
pub const DEFAULT_BRUSH_RADIUS_PX: f32 = 10.0;
// White in ABGR (little-endian bytes [RR,GG,BB,AA])
pub const DEFAULT_DISPLAY_COLOR: u32 = 0xFFFF_FFFF;
pub const MAX_PHASES_PER_TICK: u32 = 4;

const MIN_TICK_RATE: f32 = 0.001;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub cell_size_px: u32,
    /// Ticks per second.
    pub tick_rate: f32,
    /// User-facing per-tick toppling probability `v`.
    pub topple_probability: f32,
    pub brush_radius_px: f32,
    /// Opaque to the engine; handed back to the display consumer.
    pub display_color: u32,
    pub play: bool,
    pub phases_per_tick: u32,
    pub paint_while_paused: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            cell_size_px: DEFAULT_CELL_SIZE_PX,
            tick_rate: DEFAULT_TICK_RATE,
            topple_probability: DEFAULT_TOPPLE_PROBABILITY,
            brush_radius_px: DEFAULT_BRUSH_RADIUS_PX,
            display_color: DEFAULT_DISPLAY_COLOR,
            play: false,
            phases_per_tick: MAX_PHASES_PER_TICK,
            paint_while_paused: true,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.cell_size_px < 1 {
            let value = self.cell_size_px as f64;
            return Err(EngineError::invalid("cellSizePx", value, "must be >= 1"));
        }
        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            let value = self.tick_rate as f64;
            return Err(EngineError::invalid("tickRate", value, "must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.topple_probability) {
            return Err(EngineError::invalid(
                "toppleProbability",
                self.topple_probability as f64,
                "must be within [0, 1]",
            ));
        }
        if !self.brush_radius_px.is_finite() || self.brush_radius_px < 0.0 {
            return Err(EngineError::invalid(
                "brushRadiusPx",
                self.brush_radius_px as f64,
                "must be finite and >= 0",
            ));
        }
        if !(1..=MAX_PHASES_PER_TICK).contains(&self.phases_per_tick) {
            let value = self.phases_per_tick as f64;
            return Err(EngineError::invalid("phasesPerTick", value, "must be within [1, 4]"));
        }
        Ok(())
    }

    /// Seconds between ticks.
    #[inline]
    pub fn tick_interval(&self) -> f32 {
        1.0 / self.tick_rate
    }

    pub fn set_cell_size_px(&mut self, px: u32) {
        self.cell_size_px = px.max(1);
    }

    pub fn set_tick_rate(&mut self, rate: f32) {
        self.tick_rate = if rate.is_finite() { rate.max(MIN_TICK_RATE) } else { DEFAULT_TICK_RATE };
    }

    pub fn set_topple_probability(&mut self, v: f32) {
        self.topple_probability = if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    }

    pub fn set_brush_radius_px(&mut self, r: f32) {
        self.brush_radius_px = if r.is_finite() { r.max(0.0) } else { 0.0 };
    }

    pub fn set_phases_per_tick(&mut self, n: u32) {
        self.phases_per_tick = n.clamp(1, MAX_PHASES_PER_TICK);
    }
}
