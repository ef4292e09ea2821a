use rand::rngs::StdRng;
use rand::SeedableRng;

// Installs env_logger once per test binary; later calls are no-ops.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Seeded generator so network initialization is reproducible across runs.
#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
