use bitpitch::bacf::PitchDetector;
use bitpitch::common::Frequency;

fn main() {
    let loop_count: u128 = 200;
    let sample_rate = 44100.0;
    let mut detector = PitchDetector::new(
        sample_rate,
        Frequency::from_hz(80.0),
        Frequency::from_hz(800.0),
    )
    .unwrap();

    // One second of a pure tone at 220 Hz.
    let samples: Vec<f32> = (0..44100)
        .map(|i| (2.0 * std::f32::consts::PI * 220.0 * (i as f32) / sample_rate).sin())
        .collect();

    println!("Processing {} seconds of audio.", loop_count);
    println!(
        "Window size {}, sample rate {} Hz.",
        detector.window_size(),
        sample_rate
    );

    let start = std::time::Instant::now();
    let mut reading_count: usize = 0;
    for _ in 0..loop_count {
        detector.process(&samples[..], |_| reading_count += 1);
    }
    let time_us = start.elapsed().as_micros();
    println!(
        "Completed in {} μs ({} μs/second of audio, {} readings).",
        time_us,
        time_us / loop_count,
        reading_count
    );
    println!("");
    println!("NOTE: This example is meant for profiling.");
    println!("For performance benchmarks, run 'cargo bench'.");
}
