use std::time::Duration;

use anyhow::Result;
use micro_scan_simulator::{
    config::{
        COLOR_MODE, DISPLAY_HEIGHT, DISPLAY_WIDTH, FALLBACK_SAMPLE_RATE, FRAME_DELAY_MS, STRIP_SEGMENTS,
    },
    Controller, Dashboard, SharedTone, ToneOutput,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

type App = Controller<Dashboard, SharedTone>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let output = ToneOutput::open(FALLBACK_SAMPLE_RATE)?;
    let controller = Controller::new(Dashboard::new(STRIP_SEGMENTS, COLOR_MODE), output.tone());
    info!(
        width = DISPLAY_WIDTH,
        height = DISPLAY_HEIGHT,
        silent = output.is_silent(),
        "scanner ready"
    );

    run(controller, &output, Duration::from_millis(FRAME_DELAY_MS))
}

#[cfg(feature = "window")]
fn run(mut controller: App, output: &ToneOutput, delay: Duration) -> Result<()> {
    use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
    use embedded_graphics_simulator::{
        sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
    };
    use micro_scan_simulator::{
        config::{WINDOW_SCALE, WINDOW_TITLE},
        drive, Paced, PanelAction,
    };

    let size = Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let mut display: SimulatorDisplay<Rgb888> = SimulatorDisplay::new(size);
    let mut window = Window::new(
        WINDOW_TITLE,
        &OutputSettingsBuilder::new().scale(WINDOW_SCALE).build(),
    );
    let panel = Dashboard::panel_for(size);
    info!("P toggles power, S toggles sound, C cycles the strip colours, Esc quits");

    let frames = drive(&mut Paced::new(delay), || {
        controller.tick();
        output.pump();
        controller
            .render_dashboard(&mut display)
            .unwrap_or_else(|never| match never {});
        window.update(&display);

        for event in window.events() {
            let action = match event {
                SimulatorEvent::Quit => return false,
                SimulatorEvent::KeyDown { keycode, .. } => match keycode {
                    Keycode::Escape => return false,
                    Keycode::P => Some(PanelAction::TogglePower),
                    Keycode::S => Some(PanelAction::ToggleSound),
                    Keycode::C => {
                        let mode = controller.animation_mut().cycle_color_mode();
                        info!(?mode, "colour mode");
                        None
                    }
                    _ => None,
                },
                SimulatorEvent::MouseButtonUp { point, .. } => panel.hit(point),
                _ => None,
            };
            match action {
                Some(PanelAction::TogglePower) => controller.toggle_power(),
                Some(PanelAction::ToggleSound) => controller.toggle_sound(),
                None => {}
            }
        }
        true
    });

    info!(frames, "window closed");
    Ok(())
}

/// Scripted run without a window: power on, enable sound, cycle the strip colours and the power.
#[cfg(not(feature = "window"))]
fn run(mut controller: App, output: &ToneOutput, delay: Duration) -> Result<()> {
    use micro_scan::FrameBuffer;
    use micro_scan_simulator::{config::HEADLESS_FRAMES, drive, FixedFrames};

    let mut target = FrameBuffer::new(DISPLAY_WIDTH, DISPLAY_HEIGHT);
    let mut frame = 0usize;

    let frames = drive(&mut FixedFrames::new(HEADLESS_FRAMES).with_delay(delay), || {
        match frame {
            0 => controller.toggle_power(),
            60 => controller.toggle_sound(),
            200 | 300 => {
                let mode = controller.animation_mut().cycle_color_mode();
                info!(?mode, "colour mode");
            }
            400 | 450 => controller.toggle_power(),
            _ => {}
        }
        controller.tick();
        output.pump();
        controller
            .render_dashboard(&mut target)
            .unwrap_or_else(|never| match never {});

        if frame % 50 == 0 {
            info!(
                frame,
                lit = target.lit_pixels(),
                power = ?controller.power(),
                tone = ?controller.tone().phase(),
                "frame"
            );
        }
        frame += 1;
        true
    });

    info!(frames, "headless run finished");
    Ok(())
}
