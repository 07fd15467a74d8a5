#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode must never panic. Cap the plane so hostile headers can't
    // make the fuzzer allocate gigabytes.
    let limits = zencool::Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    let _ = zencool::probe(data);
    let _ = zencool::DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable);
});
