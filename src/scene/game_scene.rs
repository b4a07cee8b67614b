//! Gameplay scene
//!
//! Owns the level: player, enemies, potions, the static obstacle set, the
//! camera, and the tilemap. `update` runs the whole per-tick simulation in
//! a fixed order; `draw` renders the resulting state and mutates nothing.

use log::{debug, info, warn};
use macroquad::prelude::*;

use super::{Scene, SceneId};
use crate::game::collision::{self, rects_overlap};
use crate::game::{
    Animation, AnimationSet, BasicCombat, Camera, Combat, CooldownCombat, Direction, Enemy,
    Player, Potion, TILE_SIZE,
};
use crate::input::InputFrame;
use crate::render::{self, Assets, SPRITE_SCALE, VIRTUAL_HEIGHT, VIRTUAL_WIDTH};
use crate::world::{Spritesheet, Tilemap, Tileset, WorldError};

const PLAYER_SPEED: f32 = 2.0;
const ENEMY_SPEED: f32 = 1.0;

const MAP_PATH: &str = "assets/maps/spawn.tmj";
const MAP_DIR: &str = "assets/maps";

pub struct GameScene {
    loaded: bool,
    player: Player,
    enemies: Vec<Enemy>,
    potions: Vec<Potion>,
    obstacles: Vec<Rect>,
    camera: Camera,
    tilemap: Option<Tilemap>,
    tilesets: Vec<Tileset>,
    player_sheet: Spritesheet,
    enemy_sheet: Spritesheet,
}

fn player_animations() -> AnimationSet {
    let mut set = AnimationSet::new();
    set.set(Direction::Right, Animation::new(6, 11, 1, 8.0));
    set.set(Direction::Left, Animation::new(48, 53, 1, 8.0));
    set.set(Direction::Down, Animation::new(26, 30, 3, 8.0));
    set.set(Direction::Up, Animation::new(38, 42, 3, 8.0));
    set.set(Direction::Attack, Animation::new(12, 17, 1, 1.0));
    set
}

fn enemy_animations() -> AnimationSet {
    let mut set = AnimationSet::new();
    for direction in [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ] {
        set.set(direction, Animation::new(7, 12, 1, 8.0));
    }
    set
}

fn spawn_player() -> Player {
    Player::new(vec2(50.0, 50.0), player_animations(), BasicCombat::new(3, 1))
}

fn spawn_enemies() -> Vec<Enemy> {
    vec![
        Enemy::new(
            vec2(150.0, 150.0),
            enemy_animations(),
            CooldownCombat::new(3, 1, 30),
            true,
        ),
        Enemy::new(
            vec2(150.0, 100.0),
            enemy_animations(),
            CooldownCombat::new(3, 1, 30),
            false,
        ),
    ]
}

impl GameScene {
    pub fn new() -> Self {
        Self {
            loaded: false,
            player: spawn_player(),
            enemies: Vec::new(),
            potions: Vec::new(),
            obstacles: Vec::new(),
            camera: Camera::new(0.0, 0.0),
            tilemap: None,
            tilesets: Vec::new(),
            player_sheet: Spritesheet::new(6, 8, 192),
            enemy_sheet: Spritesheet::new(6, 5, 192),
        }
    }
}

impl Default for GameScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for GameScene {
    fn update(&mut self, input: &InputFrame) -> SceneId {
        let clicked = input.attack_pressed;

        // =====================================================================
        // Player movement: recompute velocity from held keys, move one axis
        // at a time with collision resolution in between
        // =====================================================================
        let player = &mut self.player;
        player.sprite.vel = Vec2::ZERO;
        if input.right {
            player.sprite.vel.x += PLAYER_SPEED;
        }
        if input.left {
            player.sprite.vel.x -= PLAYER_SPEED;
        }
        if input.up {
            player.sprite.vel.y -= PLAYER_SPEED;
        }
        if input.down {
            player.sprite.vel.y += PLAYER_SPEED;
        }

        player.sprite.pos.x += player.sprite.vel.x;
        collision::resolve_horizontal(&mut player.sprite, &self.obstacles);
        player.sprite.pos.y += player.sprite.vel.y;
        collision::resolve_vertical(&mut player.sprite, &self.obstacles);

        if let Some(frame) = player.active_animation_mut().map(|anim| {
            anim.update();
            anim.frame()
        }) {
            player.current_frame = frame;
        }

        // =====================================================================
        // Player attack: trigger on the click edge, run until the swing
        // animation reports its last frame
        // =====================================================================
        if clicked {
            player.combat.attack();
            if let Some(anim) = player.attack_animation_mut() {
                anim.reset();
            }
        }
        if player.combat.attacking() {
            let finished = player
                .attack_animation_mut()
                .map(|anim| {
                    anim.update();
                    anim.is_last_frame()
                })
                .unwrap_or(true);
            if finished {
                player.combat.attacking_stop();
            }
        }

        // =====================================================================
        // Enemies: unit step toward the player per axis, then move/collide
        // =====================================================================
        let player_pos = self.player.sprite.pos;
        for enemy in &mut self.enemies {
            enemy.sprite.vel = Vec2::ZERO;
            if enemy.follows_player {
                if enemy.sprite.pos.x < player_pos.x {
                    enemy.sprite.vel.x += ENEMY_SPEED;
                } else if enemy.sprite.pos.x > player_pos.x {
                    enemy.sprite.vel.x -= ENEMY_SPEED;
                }
                if enemy.sprite.pos.y < player_pos.y {
                    enemy.sprite.vel.y += ENEMY_SPEED;
                } else if enemy.sprite.pos.y > player_pos.y {
                    enemy.sprite.vel.y -= ENEMY_SPEED;
                }
            }

            enemy.sprite.pos.x += enemy.sprite.vel.x;
            collision::resolve_horizontal(&mut enemy.sprite, &self.obstacles);
            enemy.sprite.pos.y += enemy.sprite.vel.y;
            collision::resolve_vertical(&mut enemy.sprite, &self.obstacles);

            if let Some(frame) = enemy.active_animation_mut().map(|anim| {
                anim.update();
                anim.frame()
            }) {
                enemy.current_frame = frame;
            }
        }

        // =====================================================================
        // Potions: contact pickup
        // =====================================================================
        let player_rect = self.player.sprite.footprint();
        let player_combat = &mut self.player.combat;
        self.potions.retain(|potion| {
            if rects_overlap(&potion.sprite.footprint(), &player_rect) {
                player_combat.heal(potion.heal_amount);
                info!("picked up a potion, health now {}", player_combat.health());
                false
            } else {
                true
            }
        });

        // =====================================================================
        // Combat: cooldowns, contact damage, click damage, dead compaction
        // =====================================================================
        let cursor = input.cursor - self.camera.offset;
        self.player.combat.update();

        let player_rect = self.player.sprite.footprint();
        let player_power = self.player.combat.attack_power();
        let player_combat = &mut self.player.combat;
        for enemy in &mut self.enemies {
            enemy.combat.update();
            let rect = enemy.sprite.footprint();

            if rects_overlap(&rect, &player_rect) && enemy.combat.attack() {
                player_combat.damage(enemy.combat.attack_power());
                if player_combat.health() <= 0 {
                    warn!("the player has died");
                }
            }

            let cursor_over = cursor.x > rect.x
                && cursor.x < rect.x + rect.w
                && cursor.y > rect.y
                && cursor.y < rect.y + rect.h;
            if cursor_over && clicked {
                enemy.combat.damage(player_power);
                if enemy.combat.health() <= 0 {
                    enemy.dead = true;
                    info!(
                        "enemy at ({}, {}) slain",
                        enemy.sprite.pos.x, enemy.sprite.pos.y
                    );
                }
            }
        }

        // Compact within the same tick so the next tick's checks never see
        // a dead enemy. Stable order.
        self.enemies.retain(|enemy| !enemy.dead);

        // =====================================================================
        // Camera: center on the player's footprint, clamp to the map
        // =====================================================================
        self.camera.follow_target(
            self.player.sprite.pos + vec2(TILE_SIZE / 2.0, TILE_SIZE / 2.0),
            vec2(VIRTUAL_WIDTH, VIRTUAL_HEIGHT),
        );
        if let Some(map) = &self.tilemap {
            self.camera
                .constrain(map.pixel_size(), vec2(VIRTUAL_WIDTH, VIRTUAL_HEIGHT));
        }

        if input.back_pressed {
            SceneId::Start
        } else {
            SceneId::Game
        }
    }

    fn draw(&self, assets: &Assets) {
        clear_background(Color::from_rgba(120, 180, 255, 255));
        let scale = render::screen_scale();
        let cam = self.camera.offset;

        // Tile layers: layer i renders with tileset i. Tall tiles anchor to
        // their bottom row.
        if let Some(map) = &self.tilemap {
            for (layer, tileset) in map.layers.iter().zip(&self.tilesets) {
                for (index, &gid) in layer.data.iter().enumerate() {
                    if gid == 0 {
                        continue;
                    }
                    let Some(tile) = tileset.tile(gid) else {
                        continue;
                    };
                    let Some(texture) = assets.tile_texture(tile.image) else {
                        continue;
                    };
                    let x = (index % layer.width) as f32 * TILE_SIZE;
                    let y = (index / layer.width) as f32 * TILE_SIZE;
                    let dest = (vec2(x, y - (tile.height - TILE_SIZE)) + cam) * scale;
                    draw_texture_ex(
                        texture,
                        dest.x,
                        dest.y,
                        WHITE,
                        DrawTextureParams {
                            dest_size: Some(vec2(tile.width, tile.height) * scale),
                            source: tile.source,
                            ..Default::default()
                        },
                    );
                }
            }
        }

        draw_sheet_sprite(
            &assets.player,
            &self.player_sheet,
            self.player.display_frame(),
            self.player.sprite.pos,
            cam,
            scale,
        );

        for enemy in &self.enemies {
            draw_sheet_sprite(
                &assets.enemy,
                &self.enemy_sheet,
                enemy.display_frame(),
                enemy.sprite.pos,
                cam,
                scale,
            );
        }

        for potion in &self.potions {
            let dest = (potion.sprite.pos + cam) * scale;
            draw_texture_ex(
                &assets.potion,
                dest.x,
                dest.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(
                        vec2(assets.potion.width(), assets.potion.height())
                            * SPRITE_SCALE
                            * scale,
                    ),
                    ..Default::default()
                },
            );
        }

        for rect in &self.obstacles {
            draw_rectangle_lines(
                (rect.x + cam.x) * scale,
                (rect.y + cam.y) * scale,
                rect.w * scale,
                rect.h * scale,
                1.0,
                RED,
            );
        }
    }

    fn first_load(&mut self) -> Result<(), WorldError> {
        let tilemap = Tilemap::load(MAP_PATH)?;
        let tilesets = tilemap.gen_tilesets(MAP_DIR)?;

        self.player = spawn_player();
        self.enemies = spawn_enemies();
        self.potions = vec![Potion::new(vec2(120.0, 120.0), 5)];
        self.obstacles = vec![Rect::new(100.0, 100.0, TILE_SIZE, TILE_SIZE)];
        self.camera = Camera::new(0.0, 0.0);
        self.tilemap = Some(tilemap);
        self.tilesets = tilesets;
        self.loaded = true;

        info!(
            "game scene loaded: {} enemies, {} potions, {} obstacles",
            self.enemies.len(),
            self.potions.len(),
            self.obstacles.len()
        );
        Ok(())
    }

    fn on_enter(&mut self) {
        debug!("entering game scene");
    }

    fn on_exit(&mut self) {
        debug!("leaving game scene");
    }

    fn is_loaded(&self) -> bool {
        self.loaded
    }
}

fn draw_sheet_sprite(
    texture: &Texture2D,
    sheet: &Spritesheet,
    frame: usize,
    pos: Vec2,
    cam: Vec2,
    scale: f32,
) {
    let dest = (pos + cam) * scale;
    let source = sheet.rect(frame);
    draw_texture_ex(
        texture,
        dest.x,
        dest.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(source.w, source.h) * SPRITE_SCALE * scale),
            source: Some(source),
            ..Default::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(right: bool, left: bool, up: bool, down: bool) -> InputFrame {
        InputFrame {
            right,
            left,
            up,
            down,
            ..Default::default()
        }
    }

    /// A click whose cursor lands on the given world position, whatever the
    /// camera currently is (update adjusts the cursor by the offset).
    fn click_at(scene: &GameScene, world: Vec2) -> InputFrame {
        InputFrame {
            attack_pressed: true,
            cursor: world + scene.camera.offset,
            ..Default::default()
        }
    }

    fn lone_enemy(pos: Vec2, follows: bool) -> Enemy {
        Enemy::new(pos, enemy_animations(), CooldownCombat::new(3, 1, 30), follows)
    }

    #[test]
    fn test_player_moves_with_held_keys() {
        let mut scene = GameScene::new();
        scene.update(&held(true, false, false, false));
        assert_eq!(scene.player.sprite.pos, vec2(52.0, 50.0));

        scene.update(&held(false, false, true, false));
        assert_eq!(scene.player.sprite.pos, vec2(52.0, 48.0));
    }

    #[test]
    fn test_idle_player_keeps_position_and_frame() {
        let mut scene = GameScene::new();
        scene.player.current_frame = 9;
        scene.update(&InputFrame::default());
        assert_eq!(scene.player.sprite.pos, vec2(50.0, 50.0));
        assert_eq!(scene.player.display_frame(), 9);
    }

    #[test]
    fn test_player_clamped_against_obstacle() {
        let mut scene = GameScene::new();
        scene.obstacles = vec![Rect::new(100.0, 100.0, 16.0, 16.0)];
        scene.player.sprite.pos = vec2(70.0, 100.0);

        // Hold right into the wall: x never passes the obstacle's left
        // edge minus the footprint.
        for _ in 0..20 {
            scene.update(&held(true, false, false, false));
            assert!(scene.player.sprite.pos.x <= 84.0);
        }
        assert_eq!(scene.player.sprite.pos.x, 84.0);
    }

    #[test]
    fn test_contact_damage_respects_cooldown() {
        let mut scene = GameScene::new();
        scene.player.sprite.pos = vec2(50.0, 50.0);
        scene.enemies = vec![lone_enemy(vec2(58.0, 50.0), false)];

        // Tick 1: overlap, cooldown elapsed, attack lands.
        scene.update(&InputFrame::default());
        assert_eq!(scene.player.combat.health(), 2);

        // Overlap persists for the whole window; nothing more lands.
        for _ in 0..29 {
            scene.update(&InputFrame::default());
            assert_eq!(scene.player.combat.health(), 2);
        }

        // Tick 31: the cooldown has fully elapsed.
        scene.update(&InputFrame::default());
        assert_eq!(scene.player.combat.health(), 1);
    }

    #[test]
    fn test_click_damages_and_compacts_dead_enemy() {
        let mut scene = GameScene::new();
        scene.enemies = vec![lone_enemy(vec2(150.0, 150.0), false)];

        let target = vec2(158.0, 158.0);
        let input = click_at(&scene, target);
        scene.update(&input);
        assert_eq!(scene.enemies[0].combat.health(), 2);

        let input = click_at(&scene, target);
        scene.update(&input);
        assert_eq!(scene.enemies[0].combat.health(), 1);

        // Third hit kills; the enemy is gone before this update returns.
        let input = click_at(&scene, target);
        scene.update(&input);
        assert!(scene.enemies.is_empty());
    }

    #[test]
    fn test_click_outside_enemy_does_nothing() {
        let mut scene = GameScene::new();
        scene.enemies = vec![lone_enemy(vec2(150.0, 150.0), false)];

        let input = click_at(&scene, vec2(10.0, 10.0));
        scene.update(&input);
        assert_eq!(scene.enemies[0].combat.health(), 3);
    }

    #[test]
    fn test_compaction_preserves_order() {
        let mut scene = GameScene::new();
        scene.enemies = vec![
            lone_enemy(vec2(150.0, 150.0), false),
            lone_enemy(vec2(200.0, 150.0), false),
            lone_enemy(vec2(250.0, 150.0), false),
        ];
        scene.enemies[1].combat.damage(2); // one hit from death

        let input = click_at(&scene, vec2(208.0, 158.0));
        scene.update(&input);

        assert_eq!(scene.enemies.len(), 2);
        assert_eq!(scene.enemies[0].sprite.pos.x, 150.0);
        assert_eq!(scene.enemies[1].sprite.pos.x, 250.0);
    }

    #[test]
    fn test_enemy_follows_with_independent_axis_steps() {
        let mut scene = GameScene::new();
        scene.player.sprite.pos = vec2(50.0, 50.0);
        scene.enemies = vec![lone_enemy(vec2(150.0, 140.0), true)];

        scene.update(&InputFrame::default());
        // One unit toward the player on each axis, unnormalized.
        assert_eq!(scene.enemies[0].sprite.pos, vec2(149.0, 139.0));
    }

    #[test]
    fn test_stationary_enemy_stays_put() {
        let mut scene = GameScene::new();
        scene.enemies = vec![lone_enemy(vec2(150.0, 100.0), false)];
        scene.update(&InputFrame::default());
        assert_eq!(scene.enemies[0].sprite.pos, vec2(150.0, 100.0));
    }

    #[test]
    fn test_attack_swing_runs_to_last_frame_then_stops() {
        let mut scene = GameScene::new();

        let input = InputFrame {
            attack_pressed: true,
            cursor: vec2(-100.0, -100.0),
            ..Default::default()
        };
        scene.update(&input);
        assert!(scene.player.combat.attacking());

        // Swing frames 12..=17 at speed 1.0: one advance every second tick,
        // reaching the last frame on the tenth tick overall.
        let mut ticks = 1;
        while scene.player.combat.attacking() {
            let frame = scene.player.display_frame();
            assert!((12..=17).contains(&frame));
            scene.update(&InputFrame::default());
            ticks += 1;
            assert!(ticks < 50, "attack never finished");
        }
        assert_eq!(ticks, 10);
    }

    #[test]
    fn test_attack_retrigger_restarts_swing() {
        let mut scene = GameScene::new();
        let click = InputFrame {
            attack_pressed: true,
            cursor: vec2(-100.0, -100.0),
            ..Default::default()
        };
        scene.update(&click);
        for _ in 0..5 {
            scene.update(&InputFrame::default());
        }
        let mid_swing = scene.player.display_frame();
        assert!(mid_swing > 12);

        // Clicking again resets the swing to its first frame.
        scene.update(&click);
        assert_eq!(scene.player.display_frame(), 12);
    }

    #[test]
    fn test_potion_heals_once_and_disappears() {
        let mut scene = GameScene::new();
        scene.player.sprite.pos = vec2(50.0, 50.0);
        scene.potions = vec![Potion::new(vec2(58.0, 50.0), 5)];

        scene.update(&InputFrame::default());
        assert_eq!(scene.player.combat.health(), 8);
        assert!(scene.potions.is_empty());

        scene.update(&InputFrame::default());
        assert_eq!(scene.player.combat.health(), 8);
    }

    #[test]
    fn test_escape_returns_to_start_scene() {
        let mut scene = GameScene::new();
        let input = InputFrame {
            back_pressed: true,
            ..Default::default()
        };
        assert_eq!(scene.update(&input), SceneId::Start);
        assert_eq!(scene.update(&InputFrame::default()), SceneId::Game);
    }

    #[test]
    fn test_first_load_builds_the_level() {
        let mut scene = GameScene::new();
        scene.first_load().unwrap();
        assert!(scene.is_loaded());
        assert_eq!(scene.enemies.len(), 2);
        assert_eq!(scene.potions.len(), 1);
        assert_eq!(scene.obstacles.len(), 1);
        assert!(scene.tilemap.is_some());
        assert_eq!(scene.tilesets.len(), scene.tilemap.as_ref().unwrap().tilesets.len());
    }

    #[test]
    fn test_camera_clamps_at_world_corners() {
        let mut scene = GameScene::new();
        scene.first_load().unwrap();

        // Player near the origin: the centered offset would be positive,
        // the constraint pins it to zero.
        scene.update(&InputFrame::default());
        assert_eq!(scene.camera.offset, vec2(0.0, 0.0));

        // Far corner: pinned to the world's opposite bound.
        let world = scene.tilemap.as_ref().unwrap().pixel_size();
        scene.player.sprite.pos = world - vec2(20.0, 20.0);
        scene.update(&InputFrame::default());
        assert_eq!(
            scene.camera.offset,
            vec2(VIRTUAL_WIDTH - world.x, VIRTUAL_HEIGHT - world.y)
        );
    }

    #[test]
    fn test_cursor_is_camera_adjusted() {
        let mut scene = GameScene::new();
        scene.enemies = vec![lone_enemy(vec2(150.0, 150.0), false)];
        scene.camera = Camera::new(-40.0, -25.0);

        // Screen cursor that lands on the enemy only after removing the
        // camera offset.
        let input = InputFrame {
            attack_pressed: true,
            cursor: vec2(158.0 - 40.0, 158.0 - 25.0),
            ..Default::default()
        };
        scene.update(&input);
        assert_eq!(scene.enemies[0].combat.health(), 2);
    }
}
