pub mod skin_tone;
