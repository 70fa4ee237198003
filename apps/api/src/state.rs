use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::store::DataStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: DataStore,
    /// Random source for response flavor text and server-assigned event ids.
    /// Seeded from `INSIGHT_SEED` when set, so responses can be reproduced.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rng = match config.insight_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            store: DataStore::new(&config.data_dir),
            config,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}
