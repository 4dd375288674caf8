use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bitpitch::bacf::Bitstream;
use bitpitch::bacf::PitchDetector;
use bitpitch::bacf::PitchProcessor;
use bitpitch::common::Frequency;

fn run_correlation_benchmark(id: &str, c: &mut Criterion, window_size: usize) {
    let mut bitstream = Bitstream::new(2 * window_size);
    // A square wave with a period of 100 bits.
    for i in 0..bitstream.bit_count() {
        bitstream.set(i, (i / 50) % 2 == 0);
    }
    c.bench_function(id, |b| {
        b.iter(|| {
            let mut total = 0u32;
            for lag in 1..window_size {
                total += bitstream.autocorrelate(black_box(lag));
            }
            total
        })
    });
}
fn correlation_benchmarks(c: &mut Criterion) {
    run_correlation_benchmark("Full lag scan, window 256", c, 256);
    run_correlation_benchmark("Full lag scan, window 512", c, 512);
    run_correlation_benchmark("Full lag scan, window 1024", c, 1024);
    run_correlation_benchmark("Full lag scan, window 2048", c, 2048);
    run_correlation_benchmark("Full lag scan, window 4096", c, 4096);
}

fn sine_second(sample_rate: f32, frequency: f32) -> Vec<f32> {
    (0..(sample_rate as usize))
        .map(|i| (2.0 * std::f32::consts::PI * frequency * (i as f32) / sample_rate).sin())
        .collect()
}

fn run_detector_benchmark(id: &str, c: &mut Criterion, lowest_hz: f32, highest_hz: f32) {
    let sample_rate = 44100.0;
    let mut detector = PitchDetector::new(
        sample_rate,
        Frequency::from_hz(lowest_hz),
        Frequency::from_hz(highest_hz),
    )
    .unwrap();
    let input_buffer = sine_second(sample_rate, 220.0);

    c.bench_function(id, |b| {
        b.iter(|| detector.process(black_box(&input_buffer[..]), |_| {}))
    });
}
fn detector_benchmarks(c: &mut Criterion) {
    run_detector_benchmark("Detector, range 40-400 Hz", c, 40.0, 400.0);
    run_detector_benchmark("Detector, range 80-800 Hz", c, 80.0, 800.0);
    run_detector_benchmark("Detector, range 160-1600 Hz", c, 160.0, 1600.0);
}

fn run_processor_benchmark(id: &str, c: &mut Criterion, lowest_hz: f32, highest_hz: f32) {
    let sample_rate = 44100.0;
    let mut processor = PitchProcessor::new(
        sample_rate,
        Frequency::from_hz(lowest_hz),
        Frequency::from_hz(highest_hz),
    )
    .unwrap();
    let input_buffer = sine_second(sample_rate, 220.0);

    c.bench_function(id, |b| {
        b.iter(|| processor.process(black_box(&input_buffer[..]), |_| {}))
    });
}
fn processor_benchmarks(c: &mut Criterion) {
    run_processor_benchmark("Full pipeline, range 80-800 Hz", c, 80.0, 800.0);
}

criterion_group!(
    benches,
    correlation_benchmarks,
    detector_benchmarks,
    processor_benchmarks
);
criterion_main!(benches);
