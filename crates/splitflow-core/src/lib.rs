//! # splitflow-core: split-limited transshipment models
//!
//! Generates a mixed-integer linear program for a two-layer transshipment
//! network and serializes it in the CPLEX LP text format.
//!
//! ```text
//!   sources        transit        destinations
//!     i ──── c[i,k] ──── k ──── d[k,j] ──── j
//!
//!   x[i,k,j]  flow on path i→k→j          (continuous, ≥ 0)
//!   u[i,k,j]  path i→k→j is active         (binary)
//!   r         max aggregate transit load   (minimized)
//! ```
//!
//! Every demand pair `(i, j)` is routed over exactly `splits` transit nodes,
//! each carrying `demand(i, j) / splits`, and the objective balances load
//! across transit nodes by minimizing the bottleneck `r`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use splitflow_core::{emit, DemandMatrix, Dimensions, LpModel, ModelSpec};
//! use std::path::Path;
//!
//! let dims = Dimensions::new(3, 4, 3)?;
//! let spec = ModelSpec::new(dims)
//!     .with_splits(2)
//!     .with_demand(DemandMatrix::uniform(10.0)?);
//!
//! let model = LpModel::build(&spec)?;
//! println!("{} constraints", model.stats().constraints());
//! emit::write_lp_file(&model, Path::new("flow.lp"))?;
//! # Ok::<(), splitflow_core::ModelError>(())
//! ```

pub mod constraints;
pub mod emit;
pub mod error;
pub mod index;
pub mod linear;
pub mod model;
pub mod naming;
pub mod problem;

pub use error::{ModelError, ModelResult};
pub use index::IndexSpace;
pub use linear::{Bound, BoundStyle, LinearExpr, Row, Sense};
pub use model::{LpModel, ModelStats};
pub use naming::{NamingScheme, VarKind, VarRef};
pub use problem::{DemandMatrix, Dimensions, ModelSpec, DEFAULT_SPLITS};
