//! Glyphbutton demo entry point.
//!
//! Runs circle -> exit -> circle on a simulated 60 fps clock, building a
//! Vello scene every frame, then prints the final layer state as JSON.
//! An optional first argument names a JSON `ButtonConfig` file.

use std::time::Duration;

use glyphbutton_core::{
    ButtonConfig, CLEAR, ConfigError, IconButton, IconButtonError, IconVariant, LayerKind,
    SerializableColor, WHITE,
};
use glyphbutton_render::{RenderContext, Renderer, RendererError, VelloRenderer};
use kurbo::Size;
use serde::Serialize;
use thiserror::Error;

/// One frame at 60 fps.
const FRAME: Duration = Duration::from_micros(16_667);
/// Upper bound on simulated frames per transition.
const MAX_FRAMES: usize = 10_000;

#[derive(Debug, Error)]
enum AppError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Button(#[from] IconButtonError),
    #[error(transparent)]
    Render(#[from] RendererError),
    #[error("Failed to serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct LayerSnapshot {
    kind: LayerKind,
    fill: SerializableColor,
    stroke: SerializableColor,
    line_width: f64,
    frame: [f64; 4],
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = load_config()?;
    let mut button = IconButton::with_config(Size::new(44.0, 44.0), config);
    let mut renderer = VelloRenderer::new();

    button.configure(IconVariant::Circle, CLEAR, WHITE);
    play(&mut button, &mut renderer, IconVariant::Circle, IconVariant::Exit)?;
    play(&mut button, &mut renderer, IconVariant::Exit, IconVariant::Circle)?;

    let snapshot: Vec<LayerSnapshot> = button
        .layers()
        .iter()
        .map(|layer| {
            let frame = layer.frame();
            LayerSnapshot {
                kind: layer.kind(),
                fill: layer.fill_color().into(),
                stroke: layer.stroke_color().into(),
                line_width: layer.line_width(),
                frame: [frame.x0, frame.y0, frame.x1, frame.y1],
            }
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn load_config() -> Result<ButtonConfig, AppError> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            let config = ButtonConfig::from_json(&json)?;
            log::info!("Loaded config from: {}", path);
            Ok(config)
        }
        None => Ok(ButtonConfig::default()),
    }
}

fn play(
    button: &mut IconButton,
    renderer: &mut VelloRenderer,
    from: IconVariant,
    to: IconVariant,
) -> Result<(), AppError> {
    button.animate(from, to)?;
    log::info!("{} -> {}", from, to);

    let mut elapsed = Duration::ZERO;
    let mut frames = 0;
    while button.is_animating() && frames < MAX_FRAMES {
        for event in button.advance(FRAME) {
            log::info!("{:>7.3}s {:?}", elapsed.as_secs_f64(), event);
        }
        renderer.build_scene(&RenderContext::new(button))?;
        elapsed += FRAME;
        frames += 1;
    }
    log::debug!("{} frames, layers now {:?}", frames, button.layer_kinds());
    Ok(())
}
