//! Real-time consumers of the timeline: the playback cursor, per-game
//! display phases and the animation capability.

pub mod animations;
pub mod cursor;
pub mod phase;

pub use animations::{dispatch_update, Animations, LogAnimations};
pub use cursor::{CursorOutput, CursorState, PlaybackCursor, PlaybackInput};
pub use phase::{display_phase, display_phases, DisplayPhase};
