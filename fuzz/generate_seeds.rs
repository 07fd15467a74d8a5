#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn cool(width: i32, height: i32, rows: &[u8]) -> Vec<u8> {
    let mut data = b"co".to_vec();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(rows);
    data
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // 2x1 bottom-up, padded
    fs::write(format!("{dir}/cool_2x1.cool"), cool(2, 1, &[0xaa, 0xbb, 0, 0])).unwrap();

    // 3x2 top-down, padded
    fs::write(
        format!("{dir}/cool_3x2_topdown.cool"),
        cool(3, -2, &[1, 2, 3, 0, 4, 5, 6, 0]),
    )
    .unwrap();

    // 3x2 without row padding (unaligned fallback)
    fs::write(format!("{dir}/cool_3x2_unpadded.cool"), cool(3, 2, &[1, 2, 3, 4, 5, 6])).unwrap();

    // Negative width
    fs::write(format!("{dir}/cool_negwidth.cool"), cool(-4, 1, &[9, 8, 7, 6])).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"co").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();
    fs::write(format!("{dir}/header_only.bin"), cool(16, 16, &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
