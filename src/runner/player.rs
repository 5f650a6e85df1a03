//! The runner: vertical physics, jump state machine and run animation.

use crate::core::constants::{
    ANIM_FRAME_TICKS, ANIM_PHASES, APEX_VELOCITY_BAND, GRAVITY, GROUND_LEVEL, JUMP_VELOCITY,
    PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_X,
};
use crate::core::geometry::Hitbox;

/// Vertical position of the player's top edge when standing on the ground.
pub const GROUND_Y: f32 = (GROUND_LEVEL - PLAYER_HEIGHT) as f32;

/// Player state. Grounded and airborne are distinguished by `is_jumping`;
/// `jump_scored` only has meaning while airborne.
#[derive(Debug, Clone)]
pub struct Player {
    pub x: f32,
    /// Top edge in world coordinates. Never greater than [`GROUND_Y`].
    pub y: f32,
    /// Vertical velocity per tick (negative = upward).
    pub velocity: f32,
    pub is_jumping: bool,
    pub jump_scored: bool,
    /// Run animation phase, `0..ANIM_PHASES`.
    pub anim_frame: u32,
    frame_counter: u32,
    hitbox: Hitbox,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// A player standing on the ground in the starting lane.
    pub fn new() -> Self {
        let mut player = Self {
            x: PLAYER_X,
            y: GROUND_Y,
            velocity: 0.0,
            is_jumping: false,
            jump_scored: false,
            anim_frame: 0,
            frame_counter: 0,
            hitbox: Hitbox::default(),
        };
        player.refresh_hitbox();
        player
    }

    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    pub fn is_on_ground(&self) -> bool {
        !self.is_jumping
    }

    /// Advance one tick: animation cadence, then gravity while airborne.
    pub fn update(&mut self) {
        self.frame_counter += 1;
        if self.frame_counter >= ANIM_FRAME_TICKS {
            self.frame_counter = 0;
            self.anim_frame = (self.anim_frame + 1) % ANIM_PHASES;
        }

        if self.is_jumping {
            self.velocity += GRAVITY;
            self.y += self.velocity;

            if self.y >= GROUND_Y {
                self.y = GROUND_Y;
                self.velocity = 0.0;
                self.is_jumping = false;
                self.jump_scored = false;
            }
        }

        self.refresh_hitbox();
    }

    /// Launch a jump. Returns false, changing nothing, when already airborne.
    pub fn jump(&mut self) -> bool {
        if self.is_jumping {
            return false;
        }
        self.is_jumping = true;
        self.velocity = JUMP_VELOCITY;
        self.jump_scored = false;
        true
    }

    /// Fires once per jump, on the first tick the velocity enters the apex band.
    pub fn can_score_jump(&mut self) -> bool {
        if self.is_jumping && !self.jump_scored && self.velocity.abs() < APEX_VELOCITY_BAND {
            self.jump_scored = true;
            return true;
        }
        false
    }

    fn refresh_hitbox(&mut self) {
        self.hitbox = Hitbox::new(self.x as i32, self.y as i32, PLAYER_WIDTH, PLAYER_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run a full jump from launch to landing, returning how many ticks it took
    /// and on how many of them `can_score_jump` fired.
    fn run_jump_arc(player: &mut Player) -> (u32, u32) {
        assert!(player.jump());
        let mut ticks = 0;
        let mut scored = 0;
        while player.is_jumping && ticks < 200 {
            player.update();
            if player.can_score_jump() {
                scored += 1;
            }
            ticks += 1;
        }
        (ticks, scored)
    }

    #[test]
    fn test_new_player_is_grounded() {
        let player = Player::new();
        assert!(player.is_on_ground());
        assert!(!player.jump_scored);
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.y, GROUND_Y);
        assert_eq!(player.hitbox(), Hitbox::new(100, 220, 50, 80));
    }

    #[test]
    fn test_jump_launches_upward() {
        let mut player = Player::new();
        assert!(player.jump());
        assert!(player.is_jumping);
        assert_eq!(player.velocity, JUMP_VELOCITY);

        player.update();
        assert!(player.y < GROUND_Y, "runner should leave the ground");
        assert!(player.hitbox().y < 220);
    }

    #[test]
    fn test_jump_while_airborne_is_ignored() {
        let mut player = Player::new();
        player.jump();
        for _ in 0..6 {
            player.update();
        }
        let (y, velocity) = (player.y, player.velocity);

        assert!(!player.jump());
        assert_eq!(player.y, y);
        assert_eq!(player.velocity, velocity);
    }

    #[test]
    fn test_never_sinks_below_ground() {
        let mut player = Player::new();
        for tick in 0..500 {
            if tick % 37 == 0 {
                player.jump();
            }
            player.update();
            assert!(player.y <= GROUND_Y, "tick {tick}: y = {}", player.y);
            assert!(player.hitbox().bottom() <= GROUND_LEVEL);
        }
    }

    #[test]
    fn test_landing_resets_flags() {
        let mut player = Player::new();
        let (ticks, _) = run_jump_arc(&mut player);

        assert!(ticks < 60, "jump should land within a second, took {ticks}");
        assert!(player.is_on_ground());
        assert!(!player.jump_scored);
        assert_eq!(player.velocity, 0.0);
        assert_eq!(player.y, GROUND_Y);
    }

    #[test]
    fn test_apex_scores_exactly_once_per_jump() {
        let mut player = Player::new();
        let (_, scored) = run_jump_arc(&mut player);
        assert_eq!(scored, 1);

        // A second jump earns its own apex
        let (_, scored) = run_jump_arc(&mut player);
        assert_eq!(scored, 1);
    }

    #[test]
    fn test_apex_fires_near_zero_velocity() {
        let mut player = Player::new();
        player.jump();
        let mut fired_at = None;
        for _ in 0..60 {
            player.update();
            if player.can_score_jump() {
                fired_at = Some(player.velocity);
                break;
            }
        }
        let velocity = fired_at.expect("apex window should be reached");
        assert!(velocity.abs() < APEX_VELOCITY_BAND);
    }

    #[test]
    fn test_cannot_score_on_ground() {
        let mut player = Player::new();
        assert!(!player.can_score_jump());
        player.update();
        assert!(!player.can_score_jump());
    }

    #[test]
    fn test_animation_cadence() {
        let mut player = Player::new();
        for _ in 0..4 {
            player.update();
        }
        assert_eq!(player.anim_frame, 0);
        player.update();
        assert_eq!(player.anim_frame, 1);

        // Four phases wrap back to zero after 20 ticks total
        for _ in 0..15 {
            player.update();
        }
        assert_eq!(player.anim_frame, 0);
    }
}
