//! Persist an encoded array to disk and read it back under several views

use std::time::Instant;

use bepc::{read_buffer, write_buffer, TypedBuffer};

fn main() -> bepc::Result<()> {
    let samples: Vec<f64> = (0..1_000_000).map(|i| (i as f64 * 0.001).sin()).collect();

    let start = Instant::now();
    let buffer = TypedBuffer::new(&samples)?;
    println!("Encoded {} samples in {:?}", samples.len(), start.elapsed());

    let path = std::env::temp_dir().join("samples.bepc");
    write_buffer(&path, &buffer)?;
    println!("Wrote {} bytes to {}", buffer.len(), path.display());

    let start = Instant::now();
    let loaded = read_buffer(&path)?;
    let decoded: Vec<f64> = loaded.get()?;
    println!("Read back {} samples in {:?}", decoded.len(), start.elapsed());
    assert_eq!(decoded, samples);

    // The same bytes reinterpreted as other widths
    let first: f64 = loaded.get()?;
    let words: Vec<i32> = loaded.get()?;
    println!("first sample: {first}");
    println!("as i32 words: {} (first two: {:?})", words.len(), &words[..2]);

    // Boxed views substitute nothing: every element is present
    let boxed: Vec<Option<f64>> = loaded.get()?;
    assert!(boxed.iter().all(Option::is_some));

    std::fs::remove_file(&path)?;
    Ok(())
}
