#![no_main]

use libfuzzer_sys::fuzz_target;
use query_errors::ErrorRecord;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(record) = ErrorRecord::from_json(text) else {
        return;
    };

    // Everything a decoded record offers must be total.
    let rendered = record.to_string();
    let _ = record.contains_text(&rendered);
    let _ = record.has_cause(record.code());
    let _ = record.has_icause(record.code());

    let mut line = String::new();
    let _ = record.log_entry().write_to(&mut line);

    if let Ok(json) = record.to_json()
        && let Ok(again) = ErrorRecord::from_json(&json)
    {
        assert_eq!(again.code(), record.code());
        assert_eq!(again.message(), record.message());
        assert_eq!(again.translation_key(), record.translation_key());
    }
});
