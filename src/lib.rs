//! # stepmeans
//!
//! An interactive, steppable k-means clustering engine for 2-D labeled
//! points. Instead of running Lloyd's algorithm to completion, the engine
//! performs exactly one assignment + update iteration per explicit `step`
//! call, keeps a full-state undo history so any step can be walked back,
//! and reports convergence so callers know when stepping is done.
//!
//! ## Features
//!
//! - **Explicit stepping**: one Lloyd iteration per
//!   [`step`](IterationController::step) call, with per-axis convergence
//!   detection at a configurable tolerance
//! - **One-step undo**: every step pushes a deep snapshot, and
//!   [`revert`](IterationController::revert) restores it exactly
//! - **Deterministic sessions**: seed centroids and the k distinct cluster
//!   colors both derive from a single RNG seed
//! - **Serializable views**: a flat [`SessionView`] snapshot for rendering
//!   frontends
//!
//! ## Example
//!
//! ```rust
//! use stepmeans::{Centroid, ClusterStore, IterationController};
//!
//! let mut store = ClusterStore::new();
//! store.add_point(0.0, 0.0);
//! store.add_point(0.0, 1.0);
//! store.add_point(10.0, 10.0);
//! store.add_point(10.0, 11.0);
//!
//! let mut controller = IterationController::new();
//! controller.initialize_with(
//!     &mut store,
//!     vec![Centroid::new(0.0, 0.0), Centroid::new(10.0, 10.0)],
//! )?;
//!
//! let outcome = controller.step(&mut store)?;
//! assert_eq!(outcome.iteration, 1);
//! assert_eq!(store.centroids()[0], Centroid::new(0.0, 0.5));
//!
//! controller.revert(&mut store)?;
//! assert_eq!(store.iterations(), 0);
//! assert_eq!(store.centroids()[0], Centroid::new(0.0, 0.0));
//! # Ok::<(), stepmeans::EngineError>(())
//! ```
//!
//! Sampled initialization works the same way, with the seed centroids
//! chosen from the store's points:
//!
//! ```rust
//! use stepmeans::{ClusterStore, EngineConfig, IterationController};
//!
//! let mut store = ClusterStore::new();
//! for i in 0..8 {
//!     store.add_point(i as f64, (i * i) as f64);
//! }
//!
//! let mut controller = IterationController::with_config(EngineConfig::new().with_seed(42));
//! controller.initialize(&mut store, 2)?;
//! controller.step(&mut store)?;
//!
//! let view = store.view();
//! assert_eq!(view.points.len(), 8);
//! assert_eq!(view.colors.len(), 2);
//! assert!(view.can_revert);
//! # Ok::<(), stepmeans::EngineError>(())
//! ```

mod algorithm;
mod color;
mod config;
mod distance;
mod engine;
mod error;
mod point;
mod store;
mod view;

pub use color::ClusterColor;
pub use config::EngineConfig;
pub use engine::{IterationController, StepOutcome};
pub use error::EngineError;
pub use point::{Centroid, ClusterState, Point};
pub use store::ClusterStore;
pub use view::SessionView;
