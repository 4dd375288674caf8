mod wav;

pub use wav::read_wav;
pub use wav::write_wav;

/// Formats a frequency in Hz as the nearest note name with a cent offset,
/// for example "    A-4 | +02 cents" for a slightly sharp 440 Hz.
pub fn note_name(frequency_hz: f32) -> String {
  let note_names = [
      "    A",
      "A#/B♭",
      "    B",
      "    C",
      "C#/D♭",
      "    D",
      "D#/E♭",
      "    E",
      "    F",
      "F#/G♭",
      "    G",
      "G#/A♭"
  ];
  let note_number = 69.0 + 12.0 * (frequency_hz / 440.0).log2();
  let a0_number = 21;
  let nearest_midi_note = (note_number.round() as usize).max(a0_number);
  let octave_index = (nearest_midi_note - a0_number) / 12;
  let note_in_octave = (nearest_midi_note - a0_number) - 12 * octave_index;
  let cent_offset = (100.0 * (note_number - (nearest_midi_note as f32))).round() as i32;
  let cent_sign = if cent_offset > 0 { "+" } else { "-" };
  return format!("{}-{} | {}{:02} cents", note_names[note_in_octave], octave_index, cent_sign, cent_offset.abs())
}
