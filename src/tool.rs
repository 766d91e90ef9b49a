//! The interactive mask tool.
//!
//! [`MaskTool`] is a thin adapter between a GUI toolkit and the
//! [`RegionAccumulator`] core: it consumes [`ToolMessage`]s (already
//! abstracted pointer/key events), tracks the freehand stroke in progress,
//! and turns completed strokes into membership arrays filed under the
//! current drawing mode. It holds no toolkit types, so it can be driven by
//! any event loop and tested headlessly.

use ndarray::Array2;

use crate::accumulator::{RegionAccumulator, Sign};
use crate::config::ToolConfig;
use crate::error::MaskError;
use crate::geometry::{Point, Polygon, MIN_POLYGON_VERTICES};
use crate::keybindings::{KeyBindings, ToolAction};
use crate::labeling::{self, Connectivity};
use crate::message::ToolMessage;

/// State of the freehand stroke currently being drawn.
#[derive(Debug, Clone, Default)]
pub enum DrawingState {
    /// Not currently drawing anything.
    #[default]
    Idle,
    /// Capturing a freehand stroke - stores vertices added so far.
    Freehand {
        vertices: Vec<Point>,
    },
}

impl DrawingState {
    /// Check if a stroke is currently being captured.
    pub fn is_drawing(&self) -> bool {
        !matches!(self, DrawingState::Idle)
    }
}

/// Freehand ROI drawing tool bound to a fixed image shape.
#[derive(Debug, Clone)]
pub struct MaskTool {
    accumulator: RegionAccumulator,
    bindings: KeyBindings,
    connectivity: Connectivity,
    drawing: DrawingState,
}

impl MaskTool {
    /// Create a tool bound to an image shape (rows, cols), with default
    /// keybindings and 4-neighborhood labeling.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            accumulator: RegionAccumulator::new(rows, cols),
            bindings: KeyBindings::default(),
            connectivity: Connectivity::default(),
            drawing: DrawingState::Idle,
        }
    }

    /// Create a tool configured from a [`ToolConfig`].
    pub fn with_config(rows: usize, cols: usize, config: &ToolConfig) -> Self {
        let mut tool = Self::new(rows, cols);
        tool.accumulator.set_sign(config.preferences.default_sign);
        tool.connectivity = config.preferences.connectivity;
        tool.bindings = config.keybindings.clone();
        tool
    }

    /// The underlying accumulator (read-only).
    pub fn accumulator(&self) -> &RegionAccumulator {
        &self.accumulator
    }

    /// The active keybindings.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Mutable access to the keybindings, for rebinding at runtime.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// The current drawing mode.
    pub fn sign(&self) -> Sign {
        self.accumulator.sign()
    }

    /// The vertices of the stroke in progress, for drawing live feedback.
    pub fn current_stroke(&self) -> Option<&[Point]> {
        match &self.drawing {
            DrawingState::Idle => None,
            DrawingState::Freehand { vertices } => Some(vertices),
        }
    }

    /// Process one tool message.
    ///
    /// Errors surface the core's failures ([`MaskError::EmptyHistory`] on
    /// undo with no strokes); the tool's own state is consistent either way.
    pub fn update(&mut self, message: ToolMessage) -> Result<(), MaskError> {
        match message {
            ToolMessage::PointerPressed { x, y } => {
                if self.drawing.is_drawing() {
                    // A second press can only mean the release event was
                    // lost; drop the half-captured stroke.
                    log::warn!("Pointer pressed while drawing, discarding stroke in progress");
                }
                self.drawing = DrawingState::Freehand {
                    vertices: vec![Point::new(x, y)],
                };
                Ok(())
            }
            ToolMessage::PointerDragged { x, y } => {
                if let DrawingState::Freehand { vertices } = &mut self.drawing {
                    vertices.push(Point::new(x, y));
                }
                Ok(())
            }
            ToolMessage::PointerReleased => self.finish_stroke(),
            ToolMessage::KeyPressed(key) => match self.bindings.action_for_key(key) {
                Some(ToolAction::AddMode) => {
                    self.accumulator.set_sign(Sign::Add);
                    Ok(())
                }
                Some(ToolAction::SubtractMode) => {
                    self.accumulator.set_sign(Sign::Subtract);
                    Ok(())
                }
                Some(ToolAction::Undo) => self.accumulator.undo(),
                Some(ToolAction::Clear) => {
                    self.accumulator.clear();
                    Ok(())
                }
                None => {
                    log::debug!("Unbound key '{}' ignored", key);
                    Ok(())
                }
            },
            ToolMessage::SetSign(sign) => {
                self.accumulator.set_sign(sign);
                Ok(())
            }
            ToolMessage::Undo => self.accumulator.undo(),
            ToolMessage::ClearAll => {
                self.accumulator.clear();
                Ok(())
            }
        }
    }

    /// Record an externally rasterized membership array.
    ///
    /// For GUI layers that compute polygon membership themselves (e.g. on
    /// the GPU), this is the direct data contract into the core.
    pub fn add_stroke(&mut self, membership: Array2<bool>, sign: Sign) -> Result<(), MaskError> {
        self.accumulator.add_stroke(membership, sign)
    }

    /// Undo the most recently recorded stroke.
    pub fn undo(&mut self) -> Result<(), MaskError> {
        self.accumulator.undo()
    }

    /// The combined boolean mask.
    pub fn mask(&self) -> Array2<bool> {
        self.accumulator.mask()
    }

    /// Connected-component labeling of the mask, using the configured
    /// connectivity.
    pub fn label_array(&self) -> Array2<u32> {
        let (labels, _count) = labeling::label(&self.accumulator.mask().view(), self.connectivity);
        labels
    }

    /// Per-stroke labeling of the recorded regions.
    pub fn label_by_stroke(&self) -> Array2<u32> {
        self.accumulator.label_by_stroke()
    }

    /// Close the stroke in progress and file it under the current mode.
    fn finish_stroke(&mut self) -> Result<(), MaskError> {
        let finished = std::mem::take(&mut self.drawing);
        let DrawingState::Freehand { vertices } = finished else {
            return Ok(());
        };

        if vertices.len() < MIN_POLYGON_VERTICES {
            log::debug!(
                "Discarding stroke with {} vertices (need at least {})",
                vertices.len(),
                MIN_POLYGON_VERTICES
            );
            return Ok(());
        }

        let polygon = Polygon { vertices };
        let membership = polygon.membership(self.accumulator.shape());
        let sign = self.accumulator.sign();
        self.accumulator.add_stroke(membership, sign)
    }
}

// ============================================================================
// Tests
// ============================================================================
