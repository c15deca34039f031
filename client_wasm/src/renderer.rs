//! Canvas-2D presentation: filled court, dashed translucent center line,
//! two paddle rectangles, and the ball. Pure drawing — nothing here feeds
//! back into the simulation.

use game_core::{Config, Snapshot};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

const COURT_FILL: &str = "#101418";
const CENTER_LINE: &str = "rgba(255, 255, 255, 0.35)";
const PADDLE_FILL: &str = "#e8e8e8";
const BALL_FILL: &str = "#f5d90a";

/// Draw one frame from a simulation snapshot
pub fn draw(ctx: &CanvasRenderingContext2d, snap: &Snapshot, config: &Config) {
    let w = config.court_width as f64;
    let h = config.court_height as f64;

    // Court
    ctx.set_fill_style(&JsValue::from_str(COURT_FILL));
    ctx.fill_rect(0.0, 0.0, w, h);

    // Dashed center line across the middle of the court
    let dashes = js_sys::Array::new();
    dashes.push(&JsValue::from_f64(8.0));
    dashes.push(&JsValue::from_f64(8.0));
    let _ = ctx.set_line_dash(&dashes);
    ctx.set_stroke_style(&JsValue::from_str(CENTER_LINE));
    ctx.begin_path();
    ctx.move_to(0.0, h / 2.0);
    ctx.line_to(w, h / 2.0);
    ctx.stroke();

    // Paddles
    ctx.set_fill_style(&JsValue::from_str(PADDLE_FILL));
    ctx.fill_rect(
        snap.player_paddle.x as f64,
        snap.player_paddle.y as f64,
        snap.paddle_size.x as f64,
        snap.paddle_size.y as f64,
    );
    ctx.fill_rect(
        snap.opponent_paddle.x as f64,
        snap.opponent_paddle.y as f64,
        snap.paddle_size.x as f64,
        snap.paddle_size.y as f64,
    );

    // Ball
    ctx.set_fill_style(&JsValue::from_str(BALL_FILL));
    ctx.begin_path();
    let _ = ctx.arc(
        snap.ball_pos.x as f64,
        snap.ball_pos.y as f64,
        snap.ball_radius as f64,
        0.0,
        std::f64::consts::TAU,
    );
    ctx.fill();
}
