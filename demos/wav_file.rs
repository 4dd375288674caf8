use std::env;
use std::fs;

use dev_helpers::note_name;
use dev_helpers::read_wav;
use dev_helpers::write_wav;

use bitpitch::bacf::PitchProcessor;
use bitpitch::common::Frequency;

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            println!("Usage: wav_file <path to a mono 16 bit wav file>");
            return;
        }
    };

    let (channel_count, sample_rate, samples) = read_wav(&path).unwrap();
    if channel_count != 1 {
        println!("Expected a mono file, got {} channels.", channel_count);
        return;
    }
    println!("Read {} samples at {} Hz.", samples.len(), sample_rate);

    // A range wide enough for guitar and most singing voices.
    let mut processor = PitchProcessor::new(
        sample_rate as f32,
        Frequency::from_hz(70.0),
        Frequency::from_hz(1000.0),
    )
    .unwrap();

    let mut csv = String::new();
    let mut conditioned = vec![0.0; samples.len()];
    processor.process_into(&samples[..], &mut conditioned[..], |reading| {
        let time_s = (reading.sample_index as f32) / (sample_rate as f32);
        if reading.frequency.is_zero() {
            println!("t = {:.3} s | -", time_s);
        } else {
            println!(
                "t = {:.3} s | {} | {:.2} Hz | periodicity {:.3}",
                time_s,
                note_name(reading.frequency.as_hz()),
                reading.frequency.as_hz(),
                reading.periodicity
            );
        }
        csv.push_str(&format!(
            "{},{}\n",
            reading.frequency.as_hz(),
            reading.periodicity
        ));
    });

    let base = path.trim_end_matches(".wav");
    let csv_path = format!("{}.readings.csv", base);
    fs::write(&csv_path, csv).unwrap();
    println!("Wrote readings to {}", csv_path);

    let wav_path = format!("{}.conditioned.wav", base);
    write_wav(&wav_path, sample_rate, 1, &conditioned[..]).unwrap();
    println!("Wrote conditioned signal to {}", wav_path);
}
