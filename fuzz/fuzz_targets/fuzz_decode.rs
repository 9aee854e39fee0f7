//! Fuzz target for SARIF document decoding.
//!
//! Goal: the decoder should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_decode
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(log) = sarif_codec::decode(data) {
        // Anything that decodes must render and re-encode without panicking.
        for result in log.results() {
            if let Some(loc) = result.primary_location() {
                let _ = loc.to_string();
            }
        }
        let _ = log.find_rule("");
        let _ = sarif_codec::encode(&log);
    }
});
