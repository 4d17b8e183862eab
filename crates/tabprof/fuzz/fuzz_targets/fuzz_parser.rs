//! Fuzz target for the delimited parser.
//!
//! The parser must never panic: every input either yields a rectangular
//! table or a malformed-input error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tabprof::{Parser, ParserConfig};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    for delimiter in [b',', b'\t', b';'] {
        let parser = Parser::with_config(ParserConfig::default().with_delimiter(delimiter));
        if let Ok((table, source)) = parser.parse_bytes(data) {
            assert_eq!(table.column_count(), source.column_count);
            for column in &table.columns {
                assert_eq!(column.len(), table.row_count());
            }
        }
    }
});
