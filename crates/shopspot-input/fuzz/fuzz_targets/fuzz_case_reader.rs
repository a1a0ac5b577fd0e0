#![no_main]
use libfuzzer_sys::fuzz_target;
use shopspot_input::{Bounds, CaseReader, InputLimits};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to the case reader and run every case it accepts.
    // Must not panic -- returning Err is fine. Small limits keep each run fast.
    let limits = InputLimits {
        grid_size: Bounds::new(1, 16),
        walk_distance: Bounds::new(0, 16),
        ..InputLimits::default()
    };
    for case in CaseReader::with_limits(data, limits) {
        let Ok(case) = case else { break };
        if let Ok(sim) = case.simulator() {
            let _ = sim.run();
        }
    }
});
