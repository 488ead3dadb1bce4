#![no_main]

use libfuzzer_sys::fuzz_target;
use query_errors::Catalog;

fuzz_target!(|data: &[u8]| {
    let pattern = String::from_utf8_lossy(data);
    let results = Catalog::standard().search(&pattern);

    for pair in results.windows(2) {
        assert!(pair[0].code() < pair[1].code());
    }
    for entry in &results {
        assert!(entry.contains(&pattern));
    }
});
