#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! Monophonic pitch detection based on bitstream autocorrelation (BACF),
//! along with the signal conditioning needed to run it on real world input.
//!
//! The crate is split into three modules:
//! * [bacf] contains the bitstream autocorrelation detector and the
//!   [bacf::PitchProcessor] pipeline, which is the main entry point.
//! * [cond] contains the signal conditioning building blocks: band-pass
//!   filtering, envelope following, noise gating and compression.
//! * [common] contains small shared types like [common::Frequency].
//!
//! No memory is allocated after initialization, and the crate is no_std
//! compatible, making it usable on embedded targets with an allocator.

extern crate alloc;

pub mod bacf;
pub mod common;
pub mod cond;
mod error;

pub use error::ConfigError;
