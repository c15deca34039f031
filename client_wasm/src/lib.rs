//! Browser client for the Pong simulation
//!
//! Owns the simulation world and drives one tick plus one draw per
//! `requestAnimationFrame` callback. The page supplies a canvas, a range
//! slider, and start/stop buttons; this crate exposes a `Game` handle with
//! matching methods. Everything is single-threaded: starting cancels any
//! in-flight scheduled frame before reinitializing, stopping cancels it and
//! recenters the slider, and both are safe to invoke redundantly.

#![cfg(target_arch = "wasm32")]

mod input;
mod renderer;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, Events, GameRng, MatchState, Score};
use hecs::World;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

struct Inner {
    world: World,
    match_state: MatchState,
    score: Score,
    events: Events,
    config: Config,
    rng: GameRng,
    // None when the canvas has no 2d context; the simulation still runs,
    // frames just skip the draw
    ctx: Option<CanvasRenderingContext2d>,
    slider_value: f32,
    player_target_x: f32,
    raf_id: Option<i32>,
}

impl Inner {
    /// One display-refresh callback: tick, then draw
    fn frame(&mut self, now_ms: f64) {
        let Inner {
            world,
            match_state,
            score,
            events,
            config,
            rng,
            player_target_x,
            ..
        } = self;
        game_core::step(
            world,
            match_state,
            score,
            events,
            config,
            rng,
            now_ms,
            *player_target_x,
        );

        if let Some(ctx) = &self.ctx {
            let snap = game_core::snapshot(&mut self.world, &self.score, &self.config);
            renderer::draw(ctx, &snap, &self.config);
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct Game {
    inner: Rc<RefCell<Inner>>,
    raf_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<Game, JsValue> {
        console_error_panic_hook::set_once();

        let ctx = canvas
            .get_context("2d")?
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());

        let config = Config::new();
        let mut world = World::new();
        game_core::create_court(&mut world, &config);

        let player_target_x = input::slider_target(&config, input::SLIDER_CENTER);
        let inner = Rc::new(RefCell::new(Inner {
            world,
            match_state: MatchState::new(),
            score: Score::new(),
            events: Events::new(),
            rng: GameRng::new(js_sys::Date::now() as u64),
            config,
            ctx,
            slider_value: input::SLIDER_CENTER,
            player_target_x,
            raf_id: None,
        }));

        // Self-rescheduling animation-frame loop. The closure lives in
        // `raf_cb` so it survives across matches; only the pending callback
        // id is cancelled and re-requested.
        let raf_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let loop_inner = Rc::clone(&inner);
        let loop_cb = Rc::clone(&raf_cb);
        *raf_cb.borrow_mut() = Some(Closure::new(move |now: f64| {
            let keep_going = {
                let mut inner = loop_inner.borrow_mut();
                inner.raf_id = None;
                inner.frame(now);
                inner.match_state.running
            };
            if keep_going {
                if let Some(cb) = loop_cb.borrow().as_ref() {
                    if let Ok(id) = request_frame(cb) {
                        loop_inner.borrow_mut().raf_id = Some(id);
                    }
                }
            }
        }));

        Ok(Game { inner, raf_cb })
    }

    /// Reinitialize the match and begin ticking. Any in-flight scheduled
    /// frame is cancelled before fresh ones are requested.
    pub fn start(&self) -> Result<(), JsValue> {
        let now = now_ms();
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_frame();

            let Inner {
                world,
                match_state,
                score,
                config,
                rng,
                ..
            } = &mut *inner;
            game_core::start_match(world, match_state, score, config, rng, now);

            let target = input::slider_target(&inner.config, inner.slider_value);
            inner.player_target_x = target;
        }

        if let Some(cb) = self.raf_cb.borrow().as_ref() {
            let id = request_frame(cb)?;
            self.inner.borrow_mut().raf_id = Some(id);
        }
        web_sys::console::log_1(&"match started".into());
        Ok(())
    }

    /// Halt ticking, clear the lifecycle flags, and recenter the slider
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        game_core::stop_match(&mut inner.match_state);
        inner.cancel_frame();
        inner.slider_value = input::SLIDER_CENTER;
        let target = input::slider_target(&inner.config, input::SLIDER_CENTER);
        inner.player_target_x = target;
        web_sys::console::log_1(&"match stopped".into());
    }

    /// Feed the current slider position, in [0, 100]. The paddle follows it
    /// only while the match is running; the step reads whatever value is
    /// current at invocation.
    pub fn set_slider(&self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        let value = input::clamp_slider(value);
        inner.slider_value = value;
        if inner.match_state.running {
            let target = input::slider_target(&inner.config, value);
            inner.player_target_x = target;
        }
    }

    pub fn player_score(&self) -> u32 {
        self.inner.borrow().score.player
    }

    pub fn opponent_score(&self) -> u32 {
        self.inner.borrow().score.opponent
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().match_state.running
    }

    pub fn slider_value(&self) -> f32 {
        self.inner.borrow().slider_value
    }
}

fn request_frame(cb: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    window.request_animation_frame(cb.as_ref().unchecked_ref())
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
