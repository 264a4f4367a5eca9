// Copyright 2025 the Magnify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless viewer session.
//!
//! Drives a [`ZoomController`] with a scripted stream of pointer input
//! (double tap, drag, fling, pinch, double tap back out) at a fixed frame
//! rate and prints the render transform whenever it changes.
//!
//! Run:
//! - `cargo run -p magnify_demos`
//! - `RUST_LOG=magnify=debug cargo run -p magnify_demos` to also see the
//!   controller's own logging.

use std::time::Duration;

use kurbo::{Point, Size};
use magnify::{ControllerConfig, PointerInput, PointerPhase, RenderTransform, ZoomController};

/// One frame at 60 Hz, rounded to whole milliseconds.
const FRAME: Duration = Duration::from_millis(16);

/// A pointer event scheduled at a time since the session started.
struct Scripted {
    at: Duration,
    contact: u32,
    phase: PointerPhase,
    position: Point,
}

fn scripted(at_ms: u64, contact: u32, phase: PointerPhase, x: f64, y: f64) -> Scripted {
    Scripted {
        at: Duration::from_millis(at_ms),
        contact,
        phase,
        position: Point::new(x, y),
    }
}

fn script() -> Vec<Scripted> {
    use PointerPhase::{Down, Move, Up};

    let mut events = vec![
        // Double tap slightly above the middle of the box.
        scripted(100, 0, Down, 150.0, 100.0),
        scripted(140, 0, Up, 150.0, 100.0),
        scripted(220, 0, Down, 150.0, 100.0),
        scripted(260, 0, Up, 150.0, 100.0),
        // Slow drag up and to the left.
        scripted(800, 0, Down, 200.0, 200.0),
    ];
    for step in 1..=10_u32 {
        let t = 800 + 20 * u64::from(step);
        let d = 6.0 * f64::from(step);
        events.push(scripted(t, 0, Move, 200.0 - d, 200.0 - d));
    }
    events.push(scripted(1020, 0, Up, 140.0, 140.0));

    // Fast flick downwards.
    events.push(scripted(1400, 0, Down, 150.0, 60.0));
    events.push(scripted(1410, 0, Move, 150.0, 100.0));
    events.push(scripted(1420, 0, Move, 150.0, 140.0));
    events.push(scripted(1420, 0, Up, 150.0, 140.0));

    // Pinch out around the middle.
    events.push(scripted(2400, 1, Down, 130.0, 150.0));
    events.push(scripted(2405, 2, Down, 170.0, 150.0));
    for step in 1..=8_u32 {
        let t = 2405 + 16 * u64::from(step);
        let spread = 20.0 + 10.0 * f64::from(step);
        events.push(scripted(t, 1, Move, 150.0 - spread, 150.0));
        events.push(scripted(t, 2, Move, 150.0 + spread, 150.0));
    }
    events.push(scripted(2600, 1, Up, 50.0, 150.0));
    events.push(scripted(2610, 2, Up, 250.0, 150.0));

    // Double tap to return to rest.
    events.extend([
        scripted(3000, 0, Down, 150.0, 150.0),
        scripted(3040, 0, Up, 150.0, 150.0),
        scripted(3120, 0, Down, 150.0, 150.0),
        scripted(3160, 0, Up, 150.0, 150.0),
    ]);
    events
}

fn main() {
    env_logger::init();

    let config = ControllerConfig::default().with_double_tap_zoom(2.5);
    println!(
        "config: {}",
        serde_json::to_string(&config).unwrap_or_else(|e| format!("<unserializable: {e}>"))
    );

    let image = Size::new(800.0, 1200.0);
    let view = Size::new(300.0, 300.0);
    let mut viewer = match ZoomController::<u32>::with_config(image, view, config) {
        Ok(viewer) => viewer,
        Err(err) => {
            log::error!("rejected configuration: {err}");
            return;
        }
    };
    println!(
        "image {}x{} fitted to {}x{} in a {}x{} box",
        image.width,
        image.height,
        viewer.geometry().fitted_size().width,
        viewer.geometry().fitted_size().height,
        view.width,
        view.height,
    );

    let mut pending = script().into_iter().peekable();
    let mut now = Duration::ZERO;
    let end = Duration::from_millis(4000);
    let mut last = RenderTransform::IDENTITY;

    while now <= end {
        while let Some(event) = pending.next_if(|e| e.at <= now) {
            let input = PointerInput::new(event.contact, event.phase, event.position, event.at);
            for gesture in viewer.handle_pointer(input) {
                println!("{:>5} ms  {gesture:?}", event.at.as_millis());
            }
        }
        if let Some(gesture) = viewer.poll(now) {
            println!("{:>5} ms  {gesture:?}", now.as_millis());
        }
        viewer.tick(now);

        let transform = viewer.render_transform();
        if transform != last {
            println!(
                "{:>5} ms  scale {:.3}  offset ({}, {})",
                now.as_millis(),
                transform.scale,
                transform.pixel_offset_x,
                transform.pixel_offset_y,
            );
            last = transform;
        }
        now += FRAME;
    }

    log::info!("final state: {:?}", viewer.state().debug_info());
}
