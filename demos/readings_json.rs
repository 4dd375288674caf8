use serde::Serialize;

use bitpitch::bacf::PitchProcessor;
use bitpitch::common::Frequency;

#[derive(Serialize)]
struct ReadingRecord {
    time_s: f32,
    frequency_hz: f32,
    periodicity: f32,
}

fn main() {
    let sample_rate = 44100.0;

    // Half a second each of A2 and A3.
    let mut samples: Vec<f32> = Vec::new();
    for (frequency, sample_count) in [(110.0_f32, 22050), (220.0, 22050)] {
        for i in 0..sample_count {
            let phase = 2.0 * std::f32::consts::PI * frequency * (i as f32) / sample_rate;
            samples.push(0.5 * phase.sin());
        }
    }

    let mut processor = PitchProcessor::new(
        sample_rate,
        Frequency::from_hz(80.0),
        Frequency::from_hz(800.0),
    )
    .unwrap();

    // One JSON record per line, written as the readings arrive.
    processor.process(&samples[..], |reading| {
        let record = ReadingRecord {
            time_s: (reading.sample_index as f32) / sample_rate,
            frequency_hz: reading.frequency.as_hz(),
            periodicity: reading.periodicity,
        };
        println!("{}", serde_json::to_string(&record).unwrap());
    });
}
