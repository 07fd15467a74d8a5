#![no_main]
use libfuzzer_sys::fuzz_target;
use zencool::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 24),
        ..Default::default()
    };
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let reencoded = encode(
        decoded.pixels(),
        decoded.width as i32,
        decoded.height as i32,
        enough::Unstoppable,
    );
    let Ok(reencoded) = reencoded else { return };
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
    assert_eq!(decoded.width, decoded2.width);
    assert_eq!(decoded.height, decoded2.height);
});
