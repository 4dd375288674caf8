use hound;

/// Reads a 16 bit WAV file. Returns the channel count, the sample rate in Hz
/// and the samples scaled to [-1, 1]. Samples of multichannel files are
/// interleaved.
pub fn read_wav(path: &str) -> Result<(u16, u32, Vec<f32>), hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let scale = 1. / (i16::MAX as f32);
    let samples: Result<Vec<f32>, hound::Error> = reader
        .samples::<i16>()
        .map(|sample| sample.map(|value| (value as f32) * scale))
        .collect();
    Ok((spec.channels, spec.sample_rate, samples?))
}

/// Writes samples in [-1, 1] to a 16 bit WAV file. Out of range samples are
/// clamped.
pub fn write_wav(
    path: &str,
    sample_rate: u32,
    channel_count: u16,
    buffer: &[f32],
) -> Result<(), hound::Error> {
    let spec = hound::WavSpec {
        channels: channel_count,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)?;
    let amplitude = i16::MAX as f32;
    for sample in buffer.iter() {
        let clamped_sample = sample.clamp(-1.0, 1.0);
        writer.write_sample((clamped_sample * amplitude) as i16)?;
    }
    writer.finalize()
}
