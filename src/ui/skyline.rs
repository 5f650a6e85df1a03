//! Parallax city backdrop: buildings with lit windows and drifting clouds.
//!
//! Purely cosmetic. Owned by the renderer and advanced once per simulated tick;
//! buildings scroll at half the street speed, clouds at a quarter.

use crate::core::constants::{GROUND_LEVEL, SCREEN_WIDTH};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const WINDOW_SIZE: i32 = 12;
const WINDOW_GAP: i32 = 8;
const BUILDING_OVERLAP: i32 = 5;
/// Ticks between chances for a new cloud (5 seconds at 60 Hz).
const CLOUD_SPAWN_TICKS: u32 = 300;
const MAX_CLOUDS: usize = 8;

#[derive(Debug, Clone)]
pub struct Building {
    pub x: i32,
    pub width: i32,
    pub height: i32,
    pub color: (u8, u8, u8),
    /// Row-major lit flags, `window_rows() * window_cols()` long.
    pub windows: Vec<bool>,
}

impl Building {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn top(&self) -> i32 {
        GROUND_LEVEL - self.height
    }

    pub fn window_rows(&self) -> i32 {
        (self.height - 20) / (WINDOW_SIZE + WINDOW_GAP)
    }

    pub fn window_cols(&self) -> i32 {
        (self.width - 20) / (WINDOW_SIZE + WINDOW_GAP)
    }

    /// World rectangle `(x, y, size)` of window `(row, col)`.
    pub fn window_origin(&self, row: i32, col: i32) -> (i32, i32, i32) {
        (
            self.x + 10 + col * (WINDOW_SIZE + WINDOW_GAP),
            self.top() + 20 + row * (WINDOW_SIZE + WINDOW_GAP),
            WINDOW_SIZE,
        )
    }

    pub fn is_lit(&self, row: i32, col: i32) -> bool {
        let index = (row * self.window_cols() + col) as usize;
        self.windows.get(index).copied().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cloud {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

pub struct Skyline {
    pub buildings: Vec<Building>,
    pub clouds: Vec<Cloud>,
    ticks_since_cloud: u32,
    rng: StdRng,
}

impl Skyline {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut buildings = Vec::new();
        let mut x = 0;
        while x < SCREEN_WIDTH * 3 / 2 {
            let mut building = Building {
                x,
                width: rng.gen_range(60..=120),
                height: rng.gen_range(100..=250),
                color: (
                    rng.gen_range(100..180),
                    rng.gen_range(100..180),
                    rng.gen_range(100..180),
                ),
                windows: Vec::new(),
            };
            light_windows(&mut building, &mut rng);
            x += building.width - BUILDING_OVERLAP;
            buildings.push(building);
        }

        let clouds = (0..3)
            .map(|_| {
                let x = rng.gen_range(0..SCREEN_WIDTH);
                random_cloud(&mut rng, x)
            })
            .collect();

        Self {
            buildings,
            clouds,
            ticks_since_cloud: 0,
            rng,
        }
    }

    /// Scroll by one tick at street speed `speed`.
    pub fn advance(&mut self, speed: u32) {
        let building_shift = (speed / 2) as i32;
        for building in &mut self.buildings {
            building.x -= building_shift;
        }
        for i in 0..self.buildings.len() {
            if self.buildings[i].right() < 0 {
                // Recycle behind the rightmost building
                let max_right = self.buildings.iter().map(Building::right).max().unwrap_or(0);
                let building = &mut self.buildings[i];
                building.x = max_right - BUILDING_OVERLAP;
                light_windows(building, &mut self.rng);
            }
        }

        let cloud_shift = (speed / 4) as i32;
        for cloud in &mut self.clouds {
            cloud.x -= cloud_shift;
            if cloud.x + cloud.w < 0 {
                let x = SCREEN_WIDTH + self.rng.gen_range(0..100);
                *cloud = random_cloud(&mut self.rng, x);
            }
        }

        self.ticks_since_cloud += 1;
        if self.ticks_since_cloud >= CLOUD_SPAWN_TICKS
            && self.clouds.len() < MAX_CLOUDS
            && self.rng.gen_ratio(1, 3)
        {
            let x = SCREEN_WIDTH + self.rng.gen_range(0..100);
            let cloud = random_cloud(&mut self.rng, x);
            self.clouds.push(cloud);
            self.ticks_since_cloud = 0;
        }
    }
}

/// Roughly one window in ten is dark.
fn light_windows(building: &mut Building, rng: &mut StdRng) {
    let count = (building.window_rows().max(0) * building.window_cols().max(0)) as usize;
    building.windows = (0..count).map(|_| rng.gen_range(0..10) > 0).collect();
}

/// A cloud starting at column `x` somewhere in the upper sky.
fn random_cloud(rng: &mut StdRng, x: i32) -> Cloud {
    Cloud {
        x,
        y: 20 + rng.gen_range(0..60),
        w: 40 + rng.gen_range(0..60),
        h: 15 + rng.gen_range(0..15),
    }
}
