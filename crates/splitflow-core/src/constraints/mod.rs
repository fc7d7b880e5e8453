//! Constraint generators.
//!
//! Each family is produced by an independent, stateless function that reads
//! only the [`ModelSpec`](crate::ModelSpec) and returns its rows in a fixed
//! iteration order. Families share no state, so they can be generated in any
//! order (or concurrently) and merged by section.
//!
//! | Family | Rows | Row shape |
//! |---|---|---|
//! | demand | `S·D` | `Σ_k x[i,k,j] = demand(i,j)` |
//! | capacity (source side) | `S·T` | `Σ_j x[i,k,j] - c[i,k] = 0` |
//! | capacity (dest side) | `T·D` | `Σ_i x[i,k,j] - d[k,j] = 0` |
//! | split limit | `S·D` | `Σ_k u[i,k,j] = splits` |
//! | half flow | `S·T·D` | `splits·x[i,k,j] - demand(i,j)·u[i,k,j] = 0` |
//! | auxiliary | `T` | `Σ_{i,j} x[i,k,j] - r <= 0` |

pub mod auxiliary;
pub mod bounds;
pub mod capacity;
pub mod demand;
pub mod half_flow;
pub mod split;

pub use bounds::Declarations;
pub use capacity::CapacityRows;
