use crate::config;
use crate::init_config::VisualizerConfig;
use crate::profile_scope;
use crate::renderer::canvas::{Canvas, RecordingCanvas};
use crate::renderer::{FieldMode, FrameStats, Renderer};

pub mod commands;
pub mod dialog;
pub mod input;
pub mod probe;
pub mod state;

pub use commands::{process_command, AppCommand};
pub use dialog::{ChargeDialog, ChargeSpec, DialogField};
pub use input::{handle_pointer, hovered, PointerState};
pub use probe::Probe;
pub use state::AppState;

/// Render one frame of the current state. Charges are only read here.
pub fn frame<C: Canvas + ?Sized>(state: &AppState, renderer: &Renderer, canvas: &mut C) -> FrameStats {
    profile_scope!("frame");
    renderer.draw_frame(state.mode, state.charges.as_slice(), canvas)
}

/// Headless entry point: load the config, render one frame in each mode and
/// report what would have been drawn.
pub fn run(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = match config_path {
        Some(path) => VisualizerConfig::load_from_file(path)?,
        None => VisualizerConfig::load_default()?,
    };
    let renderer = Renderer::new(cfg.render_config()?);
    let mut state = AppState::with_charges(renderer.play_area(), cfg.charge_set()?, cfg.mode());

    println!(
        "Loaded {} charges, play area {}x{}",
        state.charges.len(),
        state.play_area.width,
        state.play_area.height
    );
    for charge in state.charges.iter() {
        println!("  {} at ({}, {})", charge, charge.pos.x, charge.pos.y);
    }

    for _ in 0..2 {
        let mut canvas = RecordingCanvas::new();
        let stats = frame(&state, &renderer, &mut canvas);
        match state.mode {
            FieldMode::Discrete => println!("{}: {} arrows", state.mode.label(), stats.arrows),
            FieldMode::Continuous => println!(
                "{}: {} lines, {} segments, {} truncated at {} steps",
                state.mode.label(),
                stats.trace.lines,
                stats.trace.segments,
                stats.trace.truncated,
                renderer.config.max_trace_steps
            ),
        }
        process_command(AppCommand::ToggleMode, &mut state);
    }

    let probe = Probe::at(state.charges.as_slice(), state.play_area.center());
    println!("Probe {}", probe);
    if let Some(charge) = hovered(&state, state.play_area.center(), config::CHARGE_HALF_EXTENT) {
        println!("Hovering {}", charge);
    }

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().print_and_clear();

    Ok(())
}
