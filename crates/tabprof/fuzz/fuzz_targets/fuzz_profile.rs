//! Fuzz target for the full profiling pipeline.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(result) = tabprof::profile(data) {
        assert_eq!(result.column_info.len(), result.columns);
        for info in result.column_info.values() {
            assert_eq!(info.non_null + info.null, result.rows);
        }
        for r in result.correlation.matrix.iter().flatten().flatten() {
            assert!((-1.0..=1.0).contains(r));
        }
    }
});
