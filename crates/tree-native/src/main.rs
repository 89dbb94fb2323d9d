use anyhow::{Context, Result};
use std::thread;
use std::time::Duration;
use tree_core::{advance, FrameClock, FrameInput, PoseSlot, Scene, SceneEvent};

mod settings;
mod tracker;

use settings::Settings;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

// Scripted wishes: (seconds after start, text)
const SCRIPT: &[(f32, &str)] = &[
    (0.5, "peace"),
    (1.2, "snow on christmas morning"),
    (1.3, "   "),
    (3.0, "everyone home safe"),
    (5.5, "one more"),
];

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = Settings::from_env()?;
    log::info!(
        "[native] seed={} seconds={:.1} particles={}",
        settings.seed,
        settings.seconds,
        settings.config.particle_count
    );
    let open_threshold = settings.config.open_threshold;
    let mut scene =
        Scene::new(settings.config, settings.seed).context("building scene")?;
    scene.sync_photos(&["family.jpg".to_string(), "dog.png".to_string()]);

    let slot = PoseSlot::new();
    let tracker = tracker::spawn(slot.clone(), open_threshold);

    run(&mut scene, &slot, settings.seconds);

    drop(tracker);
    Ok(())
}

fn run(scene: &mut Scene, slot: &PoseSlot, seconds: f32) {
    let mut clock = FrameClock::new();
    let mut script = SCRIPT.iter().peekable();
    let mut next_report = 1.0;
    let mut frames = 0u64;
    let mut impacts = 0usize;

    loop {
        let (elapsed, delta) = clock.tick();
        if elapsed >= seconds {
            break;
        }
        while let Some((_, text)) = script.next_if(|(at, _)| *at <= elapsed) {
            match scene.submit_wish(text) {
                Some(id) => log::info!("[native] wish {} sent: {:?}", id.0, text),
                None => log::info!("[native] blank wish ignored"),
            }
        }

        let input = FrameInput {
            elapsed,
            delta,
            pose: slot.latest(),
        };
        if let Some(report) = advance(Some(scene), &input) {
            for ev in &report.events {
                if let SceneEvent::Impact { wish, position, .. } = ev {
                    impacts += 1;
                    log::info!(
                        "[native] wish {} landed at ({:.1},{:.1},{:.1})",
                        wish.0,
                        position.x,
                        position.y,
                        position.z
                    );
                }
            }
            if elapsed >= next_report {
                next_report += 1.0;
                let eye = scene.rig.camera.eye;
                log::info!(
                    "[native] t={:.1}s frames={} flying={} explosions={} flash={:.2} unleash={:.2} mode={:?} eye=({:.1},{:.1},{:.1})",
                    elapsed,
                    frames,
                    report.flying,
                    report.explosions,
                    report.flash,
                    report.unleash,
                    scene.rig.mode(),
                    eye.x,
                    eye.y,
                    eye.z
                );
            }
        }
        frames += 1;
        thread::sleep(FRAME_INTERVAL);
    }
    log::info!("[native] done: frames={} impacts={}", frames, impacts);
}
