//! Sky Stacker entry point
//!
//! The windowed front end lives in a separate view crate. This binary runs a
//! headless autoplay session against the simulation core and records the
//! result in the score table, which doubles as a smoke test of the stack.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use sky_stacker::highscores::{format_age, now_timestamp};
    use sky_stacker::platform::clamp_dt;
    use sky_stacker::renderer::FrameView;
    use sky_stacker::sim::{GameEvent, GameState, TickInput, tick};
    use sky_stacker::{HighScores, Settings, Tuning};

    /// Simulated frame rate for the headless run
    const FRAME_DT: f32 = 1.0 / 60.0;
    /// Stop the demo after this many simulated seconds
    const DEMO_SECONDS: f32 = 60.0;

    env_logger::init();
    log::info!("Sky Stacker (headless) starting...");

    let data_dir = std::env::var_os("SKY_STACKER_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let settings = Settings::load(&data_dir.join("settings.json"));
    let scores_path = data_dir.join("highscores.json");
    let mut high_scores = HighScores::load(&scores_path);

    let tuning = match std::fs::read_to_string(data_dir.join("tuning.json")) {
        Ok(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring tuning.json: {e}");
            Tuning::default()
        }),
        Err(_) => Tuning::default(),
    };

    let seed = now_timestamp() as u64;
    let mut state = GameState::with_tuning(seed, tuning).unwrap_or_else(|e| {
        log::warn!("Rejected tuning.json: {e}; using defaults");
        GameState::new(seed)
    });
    log::info!("Game initialized with seed: {}", seed);

    let (min_dt, max_dt) = settings.frame_dt_bounds();
    let input = TickInput {
        autoplay: true,
        ..Default::default()
    };

    let mut elapsed = 0.0;
    let mut final_score = None;
    while elapsed < DEMO_SECONDS && final_score.is_none() {
        let dt = clamp_dt(FRAME_DT, min_dt, max_dt);
        tick(&mut state, &input, dt);
        elapsed += dt;

        for event in state.drain_events() {
            match event {
                GameEvent::BlockPlaced { score, .. } => log::debug!("Score: {score}"),
                GameEvent::GameOver { score, .. } => final_score = Some(score),
                GameEvent::Dropped | GameEvent::Restarted => {}
            }
        }
    }

    let view = FrameView::capture(&state, &settings);
    log::info!(
        "Frame: {} instances, camera offset {:.2}",
        view.instance_count(),
        state.camera_offset()
    );

    let score = final_score.unwrap_or(state.score());
    println!("{} stacked {} blocks", settings.player_name, score);

    if let Some(rank) = high_scores.add_score(&settings.player_name, score, now_timestamp()) {
        println!("New high score! Rank #{rank}");
        if let Err(e) = high_scores.save(&scores_path) {
            log::error!("Could not save high scores: {e}");
        }
    }

    let now = now_timestamp();
    for (i, entry) in high_scores.entries.iter().enumerate() {
        println!(
            "{:>2}. {:<16} {:>5}  {}",
            i + 1,
            entry.name,
            entry.score,
            format_age(entry.timestamp, now)
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web front end drives the library directly
}
