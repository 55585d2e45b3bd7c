//! Mode-7 style bus driving demo.
//!
//! Controls  W = throttle · A/D = steer · Esc = quit
//!
//! ```bash
//! cargo run --release -- --assets res
//! ```

use anyhow::Context;
use clap::Parser;
use minifb::{Key, ScaleMode, Window, WindowOptions};
use std::time::{Duration, Instant};

use murder_bus::{
    config::Config,
    renderer::{RendererExt, Scene, Software, cockpit},
    sim::{Controls, FrameClock, Tuning, Vehicle},
    world::{Assets, Camera},
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = Config::parse();
    let (w, h) = cfg.size();

    let assets = Assets::load(&cfg.assets)
        .with_context(|| format!("failed to load assets from {}", cfg.assets.display()))?;

    let mut win = Window::new(
        "Murder Bus",
        w,
        h,
        WindowOptions {
            resize: true,
            scale_mode: ScaleMode::Stretch,
            ..WindowOptions::default()
        },
    )
    .context("failed to create window")?;
    if cfg.fps > 0 {
        win.set_target_fps(cfg.fps);
    }

    let tuning = Tuning::default();
    let fog = cfg.fog();
    let mut bus = Vehicle::default();
    let mut camera = Camera::new(bus.pos, glam::vec2(0.0, 1.0), cfg.fov, bus.height);
    let mut renderer = Software::default();
    let mut clock = FrameClock::new();

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    log::info!("{w}x{h}, fog density {}, fov {}", fog.density, cfg.fov);

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = clock.tick();
        let t0 = Instant::now(); // ┌─ frame timer start

        bus.step(read_controls(&win), dt, &tuning);
        camera.follow(&bus);

        let sprites = cockpit(&assets, bus.steer_angle, w, h);
        let scene = Scene {
            camera: &camera,
            floor: &assets.road,
            fog: &fog,
            sprites: &sprites,
        };

        renderer
            .draw_frame(w, h, &scene, |fb, fw, fh| {
                acc_time += t0.elapsed();
                acc_frames += 1;
                win.update_with_buffer(fb, fw, fh)
            })
            .context("failed to present frame")?;

        // ─────────── accumulate & report every ~3 s ────────────────────
        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            log::info!("avg render: {avg_ms:.2} ms  ({:.1} FPS)", 1000.0 / avg_ms);
            log::debug!(
                "bus pos {:?} vel {:?} wheel {:.1}°",
                bus.pos,
                bus.vel,
                bus.steer_angle
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

fn read_controls(win: &Window) -> Controls {
    let mut c = Controls::empty();
    c.set(Controls::FORWARD, win.is_key_down(Key::W));
    c.set(Controls::LEFT, win.is_key_down(Key::A));
    c.set(Controls::RIGHT, win.is_key_down(Key::D));
    c
}
