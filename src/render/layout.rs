/// Random node placement
///
/// Each city gets a uniformly random spot on the canvas the first time it
/// is seen and keeps it until the layout is cleared.

use crate::config::LayoutConfig;
use crate::types::CityId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashMap;

/// Canvas coordinates, origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// City positions on the canvas
#[derive(Debug)]
pub struct Layout {
    positions: HashMap<CityId, Position>,
    rng: StdRng,
    config: LayoutConfig,
}

impl Layout {
    /// Create an empty layout
    ///
    /// Uses `config.seed` when given so that runs are reproducible.
    pub fn new(config: LayoutConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            positions: HashMap::new(),
            rng,
            config,
        }
    }

    /// Get the position of a city, placing it first if it has none
    pub fn place(&mut self, city: &CityId) -> Position {
        if let Some(position) = self.positions.get(city) {
            return *position;
        }

        let position = self.random_position();
        self.positions.insert(city.clone(), position);
        position
    }

    /// Get the position of a city without placing it
    pub fn position(&self, city: &CityId) -> Option<Position> {
        self.positions.get(city).copied()
    }

    /// Forget every position
    pub fn clear(&mut self) {
        self.positions.clear();
    }

    /// Number of placed cities
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if no city has been placed
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Canvas size as (width, height)
    pub fn canvas(&self) -> (f64, f64) {
        (self.config.width as f64, self.config.height as f64)
    }

    fn random_position(&mut self) -> Position {
        let margin = self.config.margin as f64;
        let (width, height) = self.canvas();

        // Degenerate canvases collapse to the margin instead of an empty range
        let max_x = (width - margin).max(margin);
        let max_y = (height - margin).max(margin);

        let x = if max_x > margin { self.rng.gen_range(margin..=max_x) } else { margin };
        let y = if max_y > margin { self.rng.gen_range(margin..=max_y) } else { margin };

        Position { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> LayoutConfig {
        LayoutConfig {
            width: 800,
            height: 600,
            margin: 50,
            seed: Some(seed),
        }
    }

    #[test]
    fn test_positions_within_margins() {
        let mut layout = Layout::new(config(7));

        for i in 0..200 {
            let p = layout.place(&CityId::new(format!("C{}", i)));
            assert!((50.0..=750.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((50.0..=550.0).contains(&p.y), "y out of range: {}", p.y);
        }
        assert_eq!(layout.len(), 200);
    }

    #[test]
    fn test_position_is_stable() {
        let mut layout = Layout::new(config(1));
        let a = CityId::new("A");

        let first = layout.place(&a);
        assert_eq!(layout.place(&a), first);
        assert_eq!(layout.position(&a), Some(first));
        assert_eq!(layout.len(), 1);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut one = Layout::new(config(42));
        let mut two = Layout::new(config(42));

        for label in ["A", "B", "C"] {
            let city = CityId::new(label);
            assert_eq!(one.place(&city), two.place(&city));
        }
    }

    #[test]
    fn test_clear() {
        let mut layout = Layout::new(config(3));
        layout.place(&CityId::new("A"));

        layout.clear();
        assert!(layout.is_empty());
        assert_eq!(layout.position(&CityId::new("A")), None);
    }

    #[test]
    fn test_tiny_canvas() {
        let mut layout = Layout::new(LayoutConfig {
            width: 10,
            height: 10,
            margin: 50,
            seed: Some(0),
        });

        let p = layout.place(&CityId::new("A"));
        assert_eq!(p, Position { x: 50.0, y: 50.0 });
    }
}
