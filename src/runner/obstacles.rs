//! Street obstacles: kind table, spawning, scrolling, pruning and collision.

use crate::core::constants::{GROUND_LEVEL, SCREEN_WIDTH};
use crate::core::geometry::Hitbox;
use rand::Rng;

/// The closed set of things that can block the sidewalk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    CoffeeCup,
    Briefcase,
    FireHydrant,
    TrashCan,
    Car,
    Bicycle,
    Puddle,
    Dog,
}

/// Fixed per-kind properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindInfo {
    pub width: i32,
    pub height: i32,
    pub name: &'static str,
}

/// Indexed by `ObstacleKind as usize`.
const KIND_TABLE: [KindInfo; ObstacleKind::COUNT] = [
    KindInfo { width: 30, height: 40, name: "Coffee cup" },
    KindInfo { width: 50, height: 30, name: "Briefcase" },
    KindInfo { width: 40, height: 60, name: "Fire hydrant" },
    KindInfo { width: 45, height: 70, name: "Trash can" },
    KindInfo { width: 100, height: 60, name: "Car" },
    KindInfo { width: 70, height: 50, name: "Bicycle" },
    KindInfo { width: 80, height: 5, name: "Puddle" },
    KindInfo { width: 60, height: 40, name: "Dog" },
];

impl ObstacleKind {
    pub const COUNT: usize = 8;

    pub const ALL: [ObstacleKind; Self::COUNT] = [
        ObstacleKind::CoffeeCup,
        ObstacleKind::Briefcase,
        ObstacleKind::FireHydrant,
        ObstacleKind::TrashCan,
        ObstacleKind::Car,
        ObstacleKind::Bicycle,
        ObstacleKind::Puddle,
        ObstacleKind::Dog,
    ];

    pub fn info(&self) -> &'static KindInfo {
        &KIND_TABLE[*self as usize]
    }

    pub fn width(&self) -> i32 {
        self.info().width
    }

    pub fn height(&self) -> i32 {
        self.info().height
    }

    pub fn name(&self) -> &'static str {
        self.info().name
    }

    /// Uniform pick over every kind.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::COUNT)]
    }
}

/// A single obstacle. Only `x` changes after spawning.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub x: f32,
    pub kind: ObstacleKind,
    hitbox: Hitbox,
}

impl Obstacle {
    pub fn new(x: f32, kind: ObstacleKind) -> Self {
        let mut obstacle = Self {
            x,
            kind,
            hitbox: Hitbox::default(),
        };
        obstacle.refresh_hitbox();
        obstacle
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    pub fn advance(&mut self, speed: u32) {
        self.x -= speed as f32;
        self.refresh_hitbox();
    }

    /// The right edge has reached or crossed the left screen boundary.
    pub fn is_off_screen(&self) -> bool {
        self.x + self.kind.width() as f32 <= 0.0
    }

    fn refresh_hitbox(&mut self) {
        let height = self.kind.height();
        self.hitbox = Hitbox::new(
            self.x as i32,
            GROUND_LEVEL - height,
            self.kind.width(),
            height,
        );
    }
}

/// Outcome of one obstacle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Clear,
    /// Index (into the set, after pruning earlier entries) of the obstacle hit.
    Collision(usize),
}

/// Live obstacles in spawn order.
#[derive(Debug, Clone, Default)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Place a new obstacle at the right edge of the visible area.
    pub fn spawn(&mut self, kind: ObstacleKind) -> &Obstacle {
        self.obstacles.push(Obstacle::new(SCREEN_WIDTH as f32, kind));
        &self.obstacles[self.obstacles.len() - 1]
    }

    /// Used by tests and replays to place an obstacle anywhere.
    pub fn insert(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn advance(&mut self, speed: u32) {
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
        }
    }

    pub fn prune(&mut self) {
        self.obstacles.retain(|o| !o.is_off_screen());
    }

    pub fn first_collision(&self, target: &Hitbox) -> Option<usize> {
        self.obstacles
            .iter()
            .position(|o| o.hitbox().intersects(target))
    }

    /// One tick of movement against the player. Each obstacle is advanced,
    /// tested, then pruned if off-screen. The pass stops at the first hit: the
    /// colliding obstacle stays in the set and the ones after it do not move.
    pub fn step(&mut self, speed: u32, player: &Hitbox) -> StepOutcome {
        let mut i = 0;
        while i < self.obstacles.len() {
            let obstacle = &mut self.obstacles[i];
            obstacle.advance(speed);

            if obstacle.hitbox().intersects(player) {
                return StepOutcome::Collision(i);
            }

            if obstacle.is_off_screen() {
                self.obstacles.remove(i);
            } else {
                i += 1;
            }
        }
        StepOutcome::Clear
    }
}
