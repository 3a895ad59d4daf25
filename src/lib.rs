//! MouseOverlayRust library
//!
//! This library instruments pointer input on a host surface. It marks every
//! observed pointer position, measures the time between consecutive move events,
//! and keeps a running input-frequency estimate next to a live strip chart of the
//! measured deltas. It includes:
//!
//! - `sample_buffer`: Bounded, drop-from-front buffer of inter-event deltas
//! - `sampler`: Timing sampler turning raw move events into filtered deltas and a frequency estimate
//! - `layering`: Z-order baseline computation so the overlay sits above the host
//! - `surface`: Overlay surface geometry and the `HostSurface` seam
//! - `point_layer`: Fixed-size RGBA raster that move and click marks are stamped into
//! - `chart` / `readout`: Strip-chart display list and status text
//! - `overlay`: The controller owning all state and dispatching host events
//! - `export`: PNG snapshots of the chart display list
//! - `gui`: eframe/egui binding hosting the overlay in a native window
//!
//! # Example
//!
//! ```rust,ignore
//! use MouseOverlayRust::config::OverlayConfig;
//! use MouseOverlayRust::draw::Point;
//! use MouseOverlayRust::overlay::Overlay;
//!
//! let mut overlay = Overlay::initialize(&OverlayConfig::default(), &host);
//! overlay.on_move(0.0, Point::new(10.0, 10.0));
//! overlay.on_move(16.0, Point::new(12.0, 11.0));
//! println!("{}", overlay.readout());
//! ```

pub mod chart;
pub mod config;
pub mod draw;
pub mod export;
pub mod gui;
pub mod layering;
pub mod logging;
pub mod overlay;
pub mod point_layer;
pub mod readout;
pub mod sample_buffer;
pub mod sampler;
pub mod surface;
