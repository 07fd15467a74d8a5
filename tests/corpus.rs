//! Test corpus: roundtrip tests with various patterns, sizes, and strides.

use enough::Unstoppable;
use zencool::*;

fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h];
    for y in 0..h {
        for x in 0..w {
            pixels[y * w + x] = if (x + y) % 2 == 0 { 0xDB } else { 0x24 };
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

// ── Size sweep ───────────────────────────────────────────────────────

#[test]
fn every_padding_class_roundtrips() {
    for w in 1..=9 {
        for h in [1, 2, 3, 17] {
            let pixels = noise_pattern(w, h);
            let encoded = encode(&pixels, w as i32, h as i32, Unstoppable).unwrap();
            let stride = (w + 3) & !3;
            assert_eq!(encoded.len(), 10 + stride * h, "{w}x{h}");
            let decoded = decode(&encoded, Unstoppable).unwrap();
            assert_eq!(decoded.pixels(), &pixels[..], "{w}x{h}");
        }
    }
}

#[test]
fn padding_is_zero() {
    let pixels = vec![0xFFu8; 5 * 4];
    let encoded = encode(&pixels, 5, 4, Unstoppable).unwrap();
    for row in encoded[10..].chunks_exact(8) {
        assert_eq!(&row[..5], &[0xFF; 5]);
        assert_eq!(&row[5..], &[0, 0, 0]);
    }
}

#[test]
fn wide_image_roundtrip() {
    let pixels = checkerboard(1021, 3);
    let encoded = encode(&pixels, 1021, 3, Unstoppable).unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

#[test]
fn tall_image_roundtrip() {
    let pixels = noise_pattern(2, 300);
    let encoded = encode(&pixels, 2, 300, Unstoppable).unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &pixels[..]);
}

// ── Strided planes ───────────────────────────────────────────────────

#[test]
fn padded_source_plane() {
    let w = 6;
    let h = 4;
    let stride = 16;
    let packed = noise_pattern(w, h);
    let mut padded = vec![0x77u8; stride * h];
    for y in 0..h {
        padded[y * stride..y * stride + w].copy_from_slice(&packed[y * w..(y + 1) * w]);
    }

    let plane = Plane::new(&padded, w as u32, h as u32, stride as isize).unwrap();
    let frame = encode_plane(plane, w as i32, h as i32, Unstoppable).unwrap();
    assert_eq!(frame.bytes(), &encode(&packed, w as i32, h as i32, Unstoppable).unwrap()[..]);
}

#[test]
fn flipped_source_plane_encodes_upside_down() {
    let pixels = checkerboard(4, 3);
    let flipped = Plane::new(&pixels, 4, 3, -4).unwrap();
    let frame = encode_plane(flipped, 4, 3, Unstoppable).unwrap();
    // A bottom-up file of a flipped plane stores memory rows top-down.
    assert_eq!(&frame.bytes()[10..], &pixels[..]);
}

#[test]
fn decode_into_strided_plane() {
    let pixels = noise_pattern(5, 3);
    let encoded = encode(&pixels, 5, 3, Unstoppable).unwrap();

    let mut buf = vec![0u8; 8 * 3];
    let mut plane = PlaneMut::new(&mut buf, 5, 3, 8).unwrap();
    let (info, consumed) = decode_into(&encoded, &mut plane, Unstoppable).unwrap();
    assert_eq!(consumed, encoded.len());
    assert_eq!((info.width, info.height), (5, 3));
    for y in 0..3 {
        assert_eq!(&buf[y * 8..y * 8 + 5], &pixels[y * 5..(y + 1) * 5]);
        assert_eq!(&buf[y * 8 + 5..y * 8 + 8], &[0, 0, 0]);
    }
}

#[test]
fn decode_into_negative_stride_plane() {
    let pixels = checkerboard(3, 4);
    let encoded = encode(&pixels, 3, 4, Unstoppable).unwrap();

    let mut buf = vec![0u8; 3 * 4];
    let mut plane = PlaneMut::new(&mut buf, 3, 4, -3).unwrap();
    decode_into(&encoded, &mut plane, Unstoppable).unwrap();
    let reversed: Vec<u8> = pixels.chunks_exact(3).rev().flatten().copied().collect();
    assert_eq!(buf, reversed);
}

// ── Malformed input ──────────────────────────────────────────────────

#[test]
fn header_only_inputs() {
    for len in 0..10 {
        let data = &b"co\x01\x00\x00\x00\x01\x00\x00\x00"[..len];
        assert!(
            matches!(
                decode(data, Unstoppable),
                Err(CoolError::InsufficientData { needed: 10, .. })
            ),
            "len {len}"
        );
    }
}

#[test]
fn empty_image_rejected() {
    for (w, h) in [(0i32, 1i32), (1, 0), (0, 0)] {
        let mut data = b"co".to_vec();
        data.extend_from_slice(&w.to_le_bytes());
        data.extend_from_slice(&h.to_le_bytes());
        data.extend_from_slice(&[0; 4]);
        assert!(
            matches!(decode(&data, Unstoppable), Err(CoolError::InvalidDimensions { .. })),
            "{w}x{h}"
        );
    }
}

#[test]
fn huge_dimensions_without_data() {
    let mut data = b"co".to_vec();
    data.extend_from_slice(&i32::MAX.to_le_bytes());
    data.extend_from_slice(&i32::MIN.to_le_bytes());
    assert!(decode(&data, Unstoppable).is_err());
}

#[test]
fn every_truncation_rejected() {
    let pixels = noise_pattern(6, 5);
    let encoded = encode(&pixels, 6, 5, Unstoppable).unwrap();
    // Unpadded rows need 30 bytes; anything shorter fails.
    for len in 10..=encoded.len() {
        let result = decode(&encoded[..len], Unstoppable);
        if len - 10 >= 30 {
            assert!(result.is_ok(), "len {len}");
        } else {
            assert!(
                matches!(result, Err(CoolError::InsufficientData { needed: 30, .. })),
                "len {len}"
            );
        }
    }
}

#[test]
fn error_messages_carry_counts() {
    let data = b"co\x04\x00\x00\x00\x02\x00\x00\x00\x01";
    let err = decode(data, Unstoppable).unwrap_err();
    assert!(matches!(
        err,
        CoolError::InsufficientData {
            needed: 8,
            actual: 1
        }
    ));
    assert_eq!(err.to_string(), "not enough data: need 8 bytes, got 1");
}
