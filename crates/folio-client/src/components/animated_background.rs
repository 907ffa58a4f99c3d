//! Decorative full-viewport layer beneath the page.
//!
//! A tinted backdrop, a blob that drifts with the pointer and a canvas
//! showing the physics scene of falling technology labels. The layer reads
//! pointer and scroll state and never writes anything back.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::background::{
    BASE_COLOR, CYAN_COLOR, CardPose, SCENE_UNIT_PX, camera_pan, cursor_tint, parallax_offset,
};
use folio_core::content::background_cards;
use folio_core::{
    FloatingScene, FrameLimiter, LoopControl, PointerBus, RenderProfile, Viewport,
    start_frame_loop,
};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};
use yew::prelude::*;

use crate::hooks::{current_scroll_progress, use_pointer_bus, use_reduced_motion};
use crate::services::RafScheduler;
use crate::util::{device_pixel_ratio, hardware_concurrency, window_viewport};

/// Delay before the layer fades in, in milliseconds.
const APPEAR_DELAY_MS: u32 = 100;
const BLOB_RADIUS: f64 = 220.0;

struct Painter {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    backdrop: Option<HtmlElement>,
    pixel_ratio: f64,
    size: Viewport,
}

impl Painter {
    fn new(
        canvas: HtmlCanvasElement,
        backdrop: Option<HtmlElement>,
        profile: &RenderProfile,
    ) -> Option<Self> {
        let context = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas,
            context,
            backdrop,
            pixel_ratio: profile.pixel_ratio(device_pixel_ratio()),
            size: Viewport::new(0.0, 0.0),
        })
    }

    /// Matches the backing store to the window size.
    fn fit(&mut self, viewport: Viewport) {
        if viewport == self.size {
            return;
        }
        self.size = viewport;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((viewport.width * self.pixel_ratio) as u32);
            self.canvas.set_height((viewport.height * self.pixel_ratio) as u32);
        }
    }

    fn paint(&self, pointer: &folio_core::PointerState, poses: &[CardPose], scroll: f64) {
        let ctx = &self.context;
        let Viewport { width, height } = self.size;
        let _ = ctx.set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0);
        ctx.clear_rect(0.0, 0.0, width, height);

        if let Some(backdrop) = &self.backdrop {
            let _ = backdrop
                .style()
                .set_property("background-color", &cursor_tint(pointer.x, pointer.y).to_string());
        }

        // Blob
        let offset = parallax_offset(pointer);
        ctx.save();
        ctx.set_global_alpha(0.12);
        ctx.set_fill_style_str(&CYAN_COLOR.to_string());
        ctx.begin_path();
        let _ = ctx.arc(
            width / 2.0 + offset.x,
            height / 2.0 + offset.y,
            BLOB_RADIUS,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
        ctx.restore();

        // Cards, panned with scroll.
        let pan = camera_pan(scroll);
        ctx.save();
        let _ = ctx.translate(-pan.x * SCENE_UNIT_PX, -pan.y * SCENE_UNIT_PX);
        ctx.set_font("12px monospace");
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        for pose in poses {
            ctx.save();
            let _ = ctx.translate(pose.x, pose.y);
            let _ = ctx.rotate(pose.angle);
            ctx.set_global_alpha(0.25);
            ctx.set_fill_style_str(&pose.color.to_string());
            ctx.fill_rect(
                -pose.half_width,
                -pose.half_height,
                pose.half_width * 2.0,
                pose.half_height * 2.0,
            );
            ctx.set_global_alpha(0.85);
            ctx.set_fill_style_str("#ffffff");
            let _ = ctx.fill_text(&pose.label, 0.0, 0.0);
            ctx.restore();
        }
        ctx.restore();
    }
}

/// Starts the scene; returns the loop handle when animating.
fn start_scene(
    canvas: HtmlCanvasElement,
    backdrop: Option<HtmlElement>,
    profile: RenderProfile,
    bus: PointerBus,
) -> Option<folio_core::FrameHandle> {
    let Some(mut painter) = Painter::new(canvas, backdrop, &profile) else {
        tracing::warn!("2d canvas context unavailable, background disabled");
        return None;
    };
    let viewport = window_viewport();
    painter.fit(viewport);
    let mut scene = FloatingScene::new(viewport, background_cards());

    if !profile.enable_animations {
        // Settle the cards off-screen, then draw a single still frame.
        for _ in 0..240 {
            scene.step(&folio_core::PointerState::default());
        }
        painter.paint(&bus.state(), &scene.poses(), current_scroll_progress());
        return None;
    }

    tracing::debug!(fps = profile.frame_rate, quality = ?profile.quality, "background animating");
    let state = Rc::new(RefCell::new((painter, scene)));
    let mut limiter = FrameLimiter::new(profile.frame_rate);
    Some(start_frame_loop(RafScheduler::shared(), move |timestamp| {
        if !limiter.ready(timestamp) {
            return LoopControl::Continue;
        }
        let pointer = bus.state();
        let viewport = window_viewport();
        let mut guard = state.borrow_mut();
        let (painter, scene) = &mut *guard;
        painter.fit(viewport);
        scene.resize(viewport);
        scene.step(&pointer);
        painter.paint(&pointer, &scene.poses(), current_scroll_progress());
        LoopControl::Continue
    }))
}

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let visible = use_state(|| false);
    let reduced = use_reduced_motion();
    let bus = use_pointer_bus();
    let canvas = use_node_ref();
    let backdrop = use_node_ref();

    {
        let visible = visible.setter();
        use_effect_with((), move |()| {
            let timeout = Timeout::new(APPEAR_DELAY_MS, move || visible.set(true));
            move || drop(timeout)
        });
    }

    {
        let canvas = canvas.clone();
        let backdrop = backdrop.clone();
        use_effect_with((*visible, reduced), move |&(visible, reduced)| {
            let handle = if visible {
                let profile = RenderProfile::detect(reduced, hardware_concurrency());
                canvas
                    .cast::<HtmlCanvasElement>()
                    .and_then(|canvas| start_scene(canvas, backdrop.cast::<HtmlElement>(), profile, bus))
            } else {
                None
            };
            move || drop(handle)
        });
    }

    let style = format!("background-color: {BASE_COLOR};");

    html! {
        <div class="animated-background" style={style} aria-hidden="true">
            if *visible {
                <div ref={backdrop} class="animated-background-tint"></div>
                <canvas ref={canvas} class="animated-background-canvas"></canvas>
            }
        </div>
    }
}
