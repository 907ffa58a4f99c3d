//! Decorative background: render profile, cursor tint, parallax and the
//! falling label scene.
//!
//! The background only reads pointer and scroll signals; nothing here feeds
//! back into the page.

use rapier2d::prelude::*;
use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Viewport};
use crate::physics::BackgroundWorld;
use crate::pointer::PointerState;
use crate::tween::Rgb;

/// Rendering quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderQuality {
    Low,
    Medium,
    High,
}

/// How much work the background may do on this device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderProfile {
    pub enable_animations: bool,
    pub frame_rate: u32,
    pub quality: RenderQuality,
}

impl Default for RenderProfile {
    fn default() -> Self {
        Self {
            enable_animations: true,
            frame_rate: 60,
            quality: RenderQuality::High,
        }
    }
}

impl RenderProfile {
    /// Picks a profile from the motion preference and the CPU core count
    /// (`navigator.hardwareConcurrency`, when reported).
    pub fn detect(reduced_motion: bool, hardware_concurrency: Option<u32>) -> Self {
        if reduced_motion {
            return Self {
                enable_animations: false,
                frame_rate: 30,
                quality: RenderQuality::Low,
            };
        }
        match hardware_concurrency {
            Some(cores) if cores > 0 && cores < 4 => Self {
                enable_animations: true,
                frame_rate: 30,
                quality: RenderQuality::Medium,
            },
            _ => Self::default(),
        }
    }

    /// Device pixel ratio to render at.
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        match self.quality {
            RenderQuality::High => device_pixel_ratio.max(1.0),
            RenderQuality::Medium | RenderQuality::Low => 1.0,
        }
    }
}

/// Page base colour (`#1A1A1A`), shown before the background appears.
pub const BASE_COLOR: Rgb = Rgb::new(26, 26, 26);
/// Edge colour of the cursor tint (`#302B63`).
pub const SECONDARY_COLOR: Rgb = Rgb::new(48, 43, 99);
/// Centre colour of the cursor tint (`#453C67`).
pub const ACCENT_COLOR: Rgb = Rgb::new(69, 60, 103);
/// Parallax blob colour (`#00F0FF`).
pub const CYAN_COLOR: Rgb = Rgb::new(0, 240, 255);

/// Backdrop colour for a normalized pointer position: accent at the centre,
/// secondary towards the edges.
pub fn cursor_tint(x: f64, y: f64) -> Rgb {
    let dx = x - 0.5;
    let dy = y - 0.5;
    let dist = (dx.hypot(dy) * 2.0).clamp(0.0, 1.0);
    ACCENT_COLOR.mix(SECONDARY_COLOR, dist)
}

/// Maximum parallax travel of the blob, in pixels.
pub const PARALLAX_RANGE: f64 = 80.0;

/// Blob offset from the viewport centre for a normalized pointer position.
pub fn parallax_offset(pointer: &PointerState) -> Point {
    Point::new(
        (pointer.x - 0.5) * PARALLAX_RANGE,
        (pointer.y - 0.5) * PARALLAX_RANGE,
    )
}

/// Camera pan for a scroll progress in `[0, 1]`, in scene units.
pub fn camera_pan(progress: f64) -> Point {
    Point::new(progress * 10.0, progress * 5.0)
}

/// Pixels per scene unit used when projecting the camera pan.
pub const SCENE_UNIT_PX: f64 = 12.0;

/// A labelled box in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSpec {
    pub label: String,
    pub color: Rgb,
    /// Half extents in pixels.
    pub half_width: f32,
    pub half_height: f32,
}

impl CardSpec {
    /// Sizes the card for `label` at roughly 8px per character.
    pub fn for_label(label: &str, color: Rgb) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let chars = label.chars().count() as f32;
        Self {
            label: label.to_string(),
            color,
            half_width: (chars * 4.0 + 16.0).max(24.0),
            half_height: 14.0,
        }
    }
}

/// Where to draw a card this frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardPose {
    pub label: String,
    pub color: Rgb,
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub half_width: f64,
    pub half_height: f64,
}

/// Speed given to a card right next to a pointer press, in pixels/s.
const PUSH_SPEED: f32 = 900.0;
/// Radius within which a press pushes cards, in pixels.
const PUSH_RADIUS: f32 = 220.0;
const WALL_THICKNESS: f32 = 40.0;

struct Card {
    spec: CardSpec,
    body: RigidBodyHandle,
}

/// Labelled boxes dropping from above the viewport into a walled floor.
pub struct FloatingScene {
    world: BackgroundWorld,
    cards: Vec<Card>,
    viewport: Viewport,
    was_pressed: bool,
}

impl std::fmt::Debug for FloatingScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatingScene")
            .field("world", &self.world)
            .field("cards", &self.cards.len())
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl FloatingScene {
    /// Builds the scene with one card per spec, staggered above the top edge.
    pub fn new(viewport: Viewport, specs: Vec<CardSpec>) -> Self {
        let mut scene = Self {
            world: BackgroundWorld::new(),
            cards: Vec::with_capacity(specs.len()),
            viewport,
            was_pressed: false,
        };
        scene.build_bounds();

        #[allow(clippy::cast_possible_truncation)]
        let width = viewport.width as f32;
        #[allow(clippy::cast_precision_loss)]
        let count = specs.len().max(1) as f32;
        for (index, spec) in specs.into_iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let i = index as f32;
            let x = width * (i + 0.5) / count;
            let y = -80.0 - i * 70.0;
            // Alternate tilt so the stack does not land perfectly flat.
            let angle = if index % 2 == 0 { 0.3 } else { -0.25 };
            let body = scene.world.insert_body(
                RigidBodyBuilder::dynamic()
                    .translation(Vector::new(x, y))
                    .rotation(angle)
                    .linear_damping(0.3)
                    .angular_damping(0.6)
                    .ccd_enabled(true)
                    .build(),
                ColliderBuilder::cuboid(spec.half_width, spec.half_height)
                    .restitution(0.35)
                    .friction(0.6)
                    .density(1.0)
                    .build(),
            );
            scene.cards.push(Card { spec, body });
        }
        tracing::debug!(cards = scene.cards.len(), "background scene built");
        scene
    }

    fn build_bounds(&mut self) {
        #[allow(clippy::cast_possible_truncation)]
        let (w, h) = (self.viewport.width as f32, self.viewport.height as f32);
        let t = WALL_THICKNESS;
        // Walls extend far above the top so falling cards stay inside.
        let wall_half_height = h * 2.0 + 1_000.0;
        let floor = ColliderBuilder::cuboid(w / 2.0 + t, t / 2.0)
            .translation(Vector::new(w / 2.0, h + t / 2.0))
            .friction(0.8)
            .build();
        let left = ColliderBuilder::cuboid(t / 2.0, wall_half_height)
            .translation(Vector::new(-t / 2.0, h - wall_half_height))
            .build();
        let right = ColliderBuilder::cuboid(t / 2.0, wall_half_height)
            .translation(Vector::new(w + t / 2.0, h - wall_half_height))
            .build();
        self.world.replace_bounds([floor, left, right]);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn frame(&self) -> u64 {
        self.world.steps()
    }

    /// Moves the floor and walls to a new viewport size. Cards that end up
    /// outside are dropped back in from the top.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.build_bounds();

        #[allow(clippy::cast_possible_truncation)]
        let (w, h) = (viewport.width as f32, viewport.height as f32);
        for (index, card) in self.cards.iter().enumerate() {
            let Some(body) = self.world.body_mut(card.body) else {
                continue;
            };
            let (x, y) = {
                let pos = body.translation();
                (pos.x, pos.y)
            };
            if x < 0.0 || x > w || y > h {
                let hw = card.spec.half_width;
                #[allow(clippy::cast_precision_loss)]
                let lift = index as f32 * 70.0;
                let x = x.clamp(hw, (w - hw).max(hw));
                body.set_translation(Vector::new(x, -card.spec.half_height * 4.0 - lift), true);
                body.set_linvel(Vector::new(0.0, 0.0), true);
            }
        }
    }

    /// Advances one fixed step. A fresh pointer press pushes nearby cards
    /// away from the pointer.
    pub fn step(&mut self, pointer: &PointerState) {
        if pointer.is_active && !self.was_pressed {
            self.push_from(pointer.position());
        }
        self.was_pressed = pointer.is_active;
        self.world.step();
    }

    fn push_from(&mut self, origin: Point) {
        #[allow(clippy::cast_possible_truncation)]
        let origin = Vector::new(origin.x as f32, origin.y as f32);
        for card in &self.cards {
            let Some(body) = self.world.body_mut(card.body) else {
                continue;
            };
            let delta = {
                let pos = body.translation();
                Vector::new(pos.x - origin.x, pos.y - origin.y)
            };
            let distance = delta.x.hypot(delta.y);
            if distance > PUSH_RADIUS || distance <= f32::EPSILON {
                continue;
            }
            // Impulse scaled by mass so every card gets the same kick.
            let speed = PUSH_SPEED * (1.0 - distance / PUSH_RADIUS);
            let mass = body.mass();
            let impulse = Vector::new(
                delta.x / distance * speed * mass,
                (delta.y / distance * speed - speed * 0.5) * mass,
            );
            body.apply_impulse(impulse, true);
        }
    }

    /// Current position of every card.
    pub fn poses(&self) -> Vec<CardPose> {
        self.cards
            .iter()
            .filter_map(|card| {
                let body = self.world.body(card.body)?;
                let pos = body.translation();
                Some(CardPose {
                    label: card.spec.label.clone(),
                    color: card.spec.color,
                    x: f64::from(pos.x),
                    y: f64::from(pos.y),
                    angle: f64::from(body.rotation().angle()),
                    half_width: f64::from(card.spec.half_width),
                    half_height: f64::from(card.spec.half_height),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    fn specs() -> Vec<CardSpec> {
        ["Rust", "Yew", "TypeScript"]
            .iter()
            .map(|l| CardSpec::for_label(l, CYAN_COLOR))
            .collect()
    }

    #[test]
    fn test_profile_detection() {
        let reduced = RenderProfile::detect(true, Some(16));
        assert!(!reduced.enable_animations);
        assert_eq!(reduced.frame_rate, 30);
        assert_eq!(reduced.quality, RenderQuality::Low);

        let low_end = RenderProfile::detect(false, Some(2));
        assert!(low_end.enable_animations);
        assert_eq!(low_end.frame_rate, 30);
        assert_eq!(low_end.quality, RenderQuality::Medium);

        assert_eq!(RenderProfile::detect(false, Some(8)), RenderProfile::default());
        assert_eq!(RenderProfile::detect(false, None), RenderProfile::default());
    }

    #[test]
    fn test_pixel_ratio_by_quality() {
        assert_eq!(RenderProfile::default().pixel_ratio(2.0), 2.0);
        assert_eq!(RenderProfile::detect(false, Some(2)).pixel_ratio(2.0), 1.0);
    }

    #[test]
    fn test_cursor_tint_center_and_corner() {
        assert_eq!(cursor_tint(0.5, 0.5), ACCENT_COLOR);
        assert_eq!(cursor_tint(0.0, 0.0), SECONDARY_COLOR);
        assert_eq!(cursor_tint(1.0, 0.5), SECONDARY_COLOR);
    }

    #[test]
    fn test_parallax_offset() {
        let centered = PointerState::default();
        assert_eq!(parallax_offset(&centered), Point::new(0.0, 0.0));
        let corner = PointerState {
            x: 1.0,
            y: 0.0,
            ..PointerState::default()
        };
        assert_eq!(parallax_offset(&corner), Point::new(40.0, -40.0));
    }

    #[test]
    fn test_camera_pan() {
        assert_eq!(camera_pan(0.0), Point::new(0.0, 0.0));
        assert_eq!(camera_pan(1.0), Point::new(10.0, 5.0));
    }

    #[test]
    fn test_cards_fall_and_stay_in_bounds() {
        let mut scene = FloatingScene::new(VIEWPORT, specs());
        let start: Vec<f64> = scene.poses().iter().map(|p| p.y).collect();
        assert!(start.iter().all(|y| *y < 0.0));

        let pointer = PointerState::default();
        for _ in 0..600 {
            scene.step(&pointer);
        }

        let poses = scene.poses();
        assert_eq!(poses.len(), 3);
        for pose in poses {
            assert!(pose.y > 0.0, "{} never fell in: {}", pose.label, pose.y);
            assert!(pose.y < 600.0, "{} fell through: {}", pose.label, pose.y);
            assert!(pose.x > 0.0 && pose.x < 800.0, "{} escaped: {}", pose.label, pose.x);
        }
    }

    #[test]
    fn test_resize_moves_floor() {
        let mut scene = FloatingScene::new(VIEWPORT, specs());
        let pointer = PointerState::default();
        for _ in 0..400 {
            scene.step(&pointer);
        }
        scene.resize(Viewport::new(400.0, 300.0));
        for _ in 0..600 {
            scene.step(&pointer);
        }
        for pose in scene.poses() {
            assert!(pose.y < 300.0, "{} below new floor: {}", pose.label, pose.y);
            assert!(pose.x < 400.0, "{} outside new width: {}", pose.label, pose.x);
        }
    }

    #[test]
    fn test_press_pushes_nearby_cards() {
        let mut scene = FloatingScene::new(VIEWPORT, vec![CardSpec::for_label("Rust", CYAN_COLOR)]);
        let idle = PointerState::default();
        for _ in 0..400 {
            scene.step(&idle);
        }
        let rest = scene.poses()[0].clone();

        let pressed = PointerState {
            raw_x: rest.x - 30.0,
            raw_y: rest.y,
            is_active: true,
            ..PointerState::default()
        };
        scene.step(&pressed);
        for _ in 0..5 {
            scene.step(&pressed);
        }
        let pushed = scene.poses()[0].clone();
        assert!(pushed.x > rest.x, "card did not move right: {} -> {}", rest.x, pushed.x);
    }
}
