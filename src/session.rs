//! Recorded drawing sessions.
//!
//! A session is an ordered log of the events that drove an accumulator:
//! completed strokes, mode switches, and undos. Replaying the log rebuilds
//! the accumulator deterministically, which is what makes the stroke history
//! auditable after the interactive session has ended.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::accumulator::{RegionAccumulator, Sign};
use crate::error::MaskError;
use crate::geometry::Polygon;

/// Errors that can occur while loading or replaying a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A recorded event could not be applied, e.g. an undo with no strokes.
    /// A session that underflows its own history is corrupt.
    #[error("invalid event sequence: {0}")]
    Replay(#[from] MaskError),
}

/// One recorded event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A completed freehand stroke, filed under the mode active at the time.
    Stroke {
        /// Polygon vertices in image coordinates (x, y)
        vertices: Vec<(f32, f32)>,
    },
    /// Drawing mode switch.
    SetSign { sign: Sign },
    /// Undo of the most recent stroke.
    Undo,
}

/// A recorded drawing session bound to an image shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Image height in pixels
    pub rows: usize,
    /// Image width in pixels
    pub cols: usize,
    /// Events in the order they happened
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

impl Session {
    /// Create an empty session bound to an image shape (rows, cols).
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            events: Vec::new(),
        }
    }

    /// Append an event to the log.
    pub fn push(&mut self, event: SessionEvent) {
        self.events.push(event);
    }

    /// Serialize the session to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SessionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a session from JSON.
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay the event log into a fresh accumulator.
    ///
    /// Strokes are rasterized against the session's image shape, so shape
    /// mismatches cannot occur; the only replay failure is an undo that
    /// underflows the history.
    pub fn replay(&self) -> Result<RegionAccumulator, SessionError> {
        let mut accumulator = RegionAccumulator::new(self.rows, self.cols);
        for event in &self.events {
            match event {
                SessionEvent::Stroke { vertices } => {
                    let polygon = Polygon::from_vertices(vertices.iter().copied());
                    if !polygon.is_valid() {
                        log::warn!(
                            "Replaying degenerate stroke with {} vertices",
                            vertices.len()
                        );
                    }
                    let membership = polygon.membership((self.rows, self.cols));
                    let sign = accumulator.sign();
                    accumulator.add_stroke(membership, sign)?;
                }
                SessionEvent::SetSign { sign } => accumulator.set_sign(*sign),
                SessionEvent::Undo => accumulator.undo()?,
            }
        }
        log::info!(
            "Replayed {} events: {} regions, {} holes",
            self.events.len(),
            accumulator.region_count(),
            accumulator.hole_count()
        );
        Ok(accumulator)
    }
}

// ============================================================================
// Tests
// ============================================================================
