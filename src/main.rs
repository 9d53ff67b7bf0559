//! Court Pong entry point
//!
//! The playable build is the wasm library; this binary runs a short headless
//! simulation so the rules can be exercised natively.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use court_pong::config::CourtConfig;
    use court_pong::sim::{GameState, HeldKeys, tick};

    env_logger::init();
    log::info!("Court Pong (native) starting...");
    log::info!("Build with `wasm-pack build --target web` and serve index.html to play");

    let config = CourtConfig::load();
    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, &config);
    // Park the paddles clear of the serve line; centered paddles would
    // deflect the serve at x = 7.8 and no point would land
    state.left_paddle.z = config.paddle_range;
    state.right_paddle.z = config.paddle_range;
    let keys = HeldKeys::default();

    // With nobody guarding, the serve reaches the goal plane in 120 frames
    for _ in 0..120 {
        tick(&mut state, &keys, &config);
    }

    println!("After 120 unattended frames: {}", state.score.label());
    assert_eq!(state.score.player1 + state.score.player2, 1);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry points are the exported run_game / run_text_demo functions
}
