//! LAUNCHBOARD figure shaping
//!
//! Turns the core's derived views into serializable figure view models
//! for a rendering collaborator. Drawing, layout, and widget handling
//! stay outside this crate.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod figure;
pub mod pie;
pub mod scatter;

pub use self::figure::{PieFigure, PieSegment, ScatterFigure, ScatterPoint};
