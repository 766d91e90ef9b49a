//! RMASK - Freehand ROI Mask Tool
//!
//! A toolkit-agnostic core for drawing freehand regions of interest over an
//! image and deriving boolean/labeled masks from the drawn shapes, with
//! undo and an additive/subtractive drawing mode.

pub mod accumulator;
pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod keybindings;
pub mod labeling;
pub mod message;
pub mod session;
pub mod tool;

pub use accumulator::{or_reduce, RegionAccumulator, Sign};
pub use config::{LogLevel, Preferences, ToolConfig, CONFIG_VERSION};
pub use error::MaskError;
pub use export::{save_labels_npy, save_mask_npy, save_mask_png, ExportError};
pub use geometry::{Point, Polygon, MIN_POLYGON_VERTICES};
pub use keybindings::{KeyBindings, ToolAction};
pub use labeling::{label, Connectivity};
pub use message::ToolMessage;
pub use session::{Session, SessionError, SessionEvent};
pub use tool::{DrawingState, MaskTool};
