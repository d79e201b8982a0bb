use directory_business::{Dataset, DirectoryConfig, DirectoryState};
use directory_states::{StateCtx, Time};

/// The main application state.
pub struct State {
    /// Owner of every typed state (config, clock, directory).
    pub ctx: StateCtx,
    /// Whether the app moves [`Time`] to the wall clock each frame.
    ///
    /// Test states leave this off and advance the clock by hand.
    pub live_clock: bool,
}

impl Default for State {
    fn default() -> Self {
        let config = DirectoryConfig::init();
        let directory = DirectoryState::load(&config);

        Self::with_parts(config, directory, true)
    }
}

impl State {
    /// A state over `dataset` with a frozen clock.
    pub fn test(dataset: Dataset) -> Self {
        Self::test_with_config(dataset, DirectoryConfig::default())
    }

    pub fn test_with_config(dataset: Dataset, config: DirectoryConfig) -> Self {
        let directory = DirectoryState::new(dataset, &config);

        Self::with_parts(config, directory, false)
    }

    fn with_parts(config: DirectoryConfig, directory: DirectoryState, live_clock: bool) -> Self {
        let mut ctx = StateCtx::new();

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(directory);

        Self { ctx, live_clock }
    }

    pub fn tick(&mut self) {
        if self.live_clock {
            self.ctx.update::<Time>(|time| *time.as_mut() = chrono::Utc::now());
        }
    }
}
