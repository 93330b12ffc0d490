//! Ringview widget library
//!
//! CPU-rendered circular progress ring for embedding in a host surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    widgets/                         │
//! │          CircularProgress, color palette            │
//! │           (widget state + draw routine)             │
//! ├─────────────────────────────────────────────────────┤
//! │              geometry, animation                    │
//! │     sweep angles, ring bounds, eased timelines      │
//! ├─────────────────────────────────────────────────────┤
//! │                    canvas                           │
//! │              tiny-skia pixmap surface               │
//! │               (drawing primitives)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The host owns the frame clock: it calls [`CircularProgress::tick`] with
//! the current instant, renders into a [`Canvas`], and presents or encodes
//! the pixels. All state lives on the host thread; there is no internal
//! concurrency.

pub mod animation;
pub mod canvas;
pub mod geometry;
pub mod widgets;

// Re-export commonly used types
pub use animation::ProgressAnimation;
pub use canvas::{Canvas, CanvasError};
pub use widgets::{CircularProgress, CircularProgressConfig, colors};

// Re-export tiny_skia Color for external use
pub use tiny_skia::Color;
