//! SIER3D Web - WASM binding for browser hosts
//!
//! Exposes the fractal generator and rotation state to a JavaScript host
//! that owns the canvas and render loop. The host reads flat position/size
//! arrays, instantiates its own renderable shapes, and calls `tick` each
//! animation frame.

use sier3d_core::{fractal, Placement, Spin};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WebFractal {
    level: u32,
    size: f32,
    placements: Vec<Placement>,
    rotation_y: f32,
    spin: Spin,
}

#[wasm_bindgen]
impl WebFractal {
    #[wasm_bindgen(constructor)]
    pub fn new(level: u32, size: f32) -> Result<WebFractal, JsValue> {
        let placements =
            fractal::generate(level, size).map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(WebFractal {
            level,
            size,
            placements,
            rotation_y: 0.0,
            spin: Spin::default(),
        })
    }

    /// Replace the whole placement set for a new recursion depth.
    pub fn regenerate(&mut self, level: u32) -> Result<(), JsValue> {
        let placements =
            fractal::generate(level, self.size).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.level = level;
        self.placements = placements;
        Ok(())
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn placement_count(&self) -> u32 {
        self.placements.len() as u32
    }

    /// Anchor positions as a flat xyz array, one triple per leaf.
    pub fn positions(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(self.placements.len() * 3);
        for placement in &self.placements {
            flat.push(placement.position.x);
            flat.push(placement.position.y);
            flat.push(placement.position.z);
        }
        flat
    }

    /// Edge lengths, one per leaf, in the same order as `positions`.
    pub fn sizes(&self) -> Vec<f32> {
        self.placements.iter().map(|p| p.size).collect()
    }

    /// Advance the group rotation by one frame of spin.
    pub fn tick(&mut self) {
        if !self.spin.is_paused() {
            self.rotation_y += self.spin.speed();
        }
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.spin = Spin::new(speed);
    }

    pub fn toggle_pause(&mut self) {
        self.spin.toggle_pause();
    }
}
