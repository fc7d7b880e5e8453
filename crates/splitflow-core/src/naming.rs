//! Variable identities and their rendered names.
//!
//! Every decision variable in the model is addressed by a [`VarRef`]: a kind
//! plus an ordered index tuple. A [`NamingScheme`] turns that key into the
//! identifier written to the LP file.
//!
//! ```text
//!   VarRef::flow(1, 2, 3)
//!     ├─ Legacy     → x123      (digit concatenation, indices 1..=9)
//!     └─ Separated  → x_1_2_3   (any index ≥ 1)
//! ```
//!
//! The legacy scheme is kept byte-compatible with existing model files. It
//! aliases as soon as an index has two digits (`x1_11` and `x11_1` both become
//! `x111`), so it refuses such indices instead of emitting a broken model.

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// The five variable families of the transshipment model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    /// `x[i,k,j]`: flow from source i through transit k to destination j.
    Flow,
    /// `u[i,k,j]`: binary path selection.
    Select,
    /// `c[i,k]`: aggregate load on the source→transit link.
    SourceLink,
    /// `d[k,j]`: aggregate load on the transit→destination link.
    DestLink,
    /// `r`: bottleneck bound on transit throughput.
    Bottleneck,
}

impl VarKind {
    /// Name prefix used by every scheme.
    pub fn prefix(&self) -> &'static str {
        match self {
            VarKind::Flow => "x",
            VarKind::Select => "u",
            VarKind::SourceLink => "c",
            VarKind::DestLink => "d",
            VarKind::Bottleneck => "r",
        }
    }

    /// Number of indices a variable of this kind carries.
    pub fn arity(&self) -> usize {
        match self {
            VarKind::Flow | VarKind::Select => 3,
            VarKind::SourceLink | VarKind::DestLink => 2,
            VarKind::Bottleneck => 0,
        }
    }
}

/// Structured key of a single decision variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarRef {
    kind: VarKind,
    idx: [u32; 3],
}

impl VarRef {
    /// `x[i,k,j]`
    pub fn flow(source: u32, transit: u32, dest: u32) -> Self {
        Self {
            kind: VarKind::Flow,
            idx: [source, transit, dest],
        }
    }

    /// `u[i,k,j]`
    pub fn select(source: u32, transit: u32, dest: u32) -> Self {
        Self {
            kind: VarKind::Select,
            idx: [source, transit, dest],
        }
    }

    /// `c[i,k]`
    pub fn source_link(source: u32, transit: u32) -> Self {
        Self {
            kind: VarKind::SourceLink,
            idx: [source, transit, 0],
        }
    }

    /// `d[k,j]`
    pub fn dest_link(transit: u32, dest: u32) -> Self {
        Self {
            kind: VarKind::DestLink,
            idx: [transit, dest, 0],
        }
    }

    /// `r`
    pub fn bottleneck() -> Self {
        Self {
            kind: VarKind::Bottleneck,
            idx: [0; 3],
        }
    }

    pub fn kind(&self) -> VarKind {
        self.kind
    }

    /// The index tuple, in declaration order.
    pub fn indices(&self) -> &[u32] {
        &self.idx[..self.kind.arity()]
    }
}

/// How a [`VarRef`] is rendered into an LP identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingScheme {
    /// Digit concatenation (`x123`). Only unique for indices 1..=9.
    #[default]
    Legacy,
    /// Indices joined with `_` (`x_1_2_3`).
    Separated,
}

impl NamingScheme {
    /// Largest index the legacy scheme can encode.
    pub const LEGACY_MAX_INDEX: u32 = 9;

    /// Largest index this scheme accepts.
    pub fn max_index(&self) -> u32 {
        match self {
            NamingScheme::Legacy => Self::LEGACY_MAX_INDEX,
            NamingScheme::Separated => u32::MAX,
        }
    }

    /// Reject `index` unless it lies in `1..=max_index()`.
    pub fn check_index(&self, what: &str, index: u32) -> ModelResult<()> {
        let max = self.max_index();
        if index == 0 || index > max {
            return Err(ModelError::Dimension {
                what: what.to_string(),
                index,
                max,
                scheme: *self,
            });
        }
        Ok(())
    }

    /// Render the identifier for `var`.
    pub fn name(&self, var: &VarRef) -> ModelResult<String> {
        let prefix = var.kind().prefix();
        let indices = var.indices();
        for &index in indices {
            self.check_index(prefix, index)?;
        }

        let mut name = String::with_capacity(prefix.len() + indices.len() * 2);
        name.push_str(prefix);
        for index in indices {
            if *self == NamingScheme::Separated {
                name.push('_');
            }
            name.push_str(&index.to_string());
        }
        Ok(name)
    }
}

impl std::fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingScheme::Legacy => write!(f, "legacy"),
            NamingScheme::Separated => write!(f, "separated"),
        }
    }
}

impl std::str::FromStr for NamingScheme {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" | "compact" => Ok(NamingScheme::Legacy),
            "separated" => Ok(NamingScheme::Separated),
            _ => Err(ModelError::input(format!("unknown naming scheme `{s}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_legacy_names() {
        let scheme = NamingScheme::Legacy;
        assert_eq!(scheme.name(&VarRef::flow(1, 2, 3)).unwrap(), "x123");
        assert_eq!(scheme.name(&VarRef::select(9, 1, 4)).unwrap(), "u914");
        assert_eq!(scheme.name(&VarRef::source_link(2, 5)).unwrap(), "c25");
        assert_eq!(scheme.name(&VarRef::dest_link(5, 2)).unwrap(), "d52");
        assert_eq!(scheme.name(&VarRef::bottleneck()).unwrap(), "r");
    }

    #[test]
    fn test_separated_names() {
        let scheme = NamingScheme::Separated;
        assert_eq!(scheme.name(&VarRef::flow(1, 11, 3)).unwrap(), "x_1_11_3");
        assert_eq!(scheme.name(&VarRef::dest_link(10, 2)).unwrap(), "d_10_2");
        assert_eq!(scheme.name(&VarRef::bottleneck()).unwrap(), "r");
    }

    #[test]
    fn test_legacy_rejects_two_digit_index() {
        let err = NamingScheme::Legacy
            .name(&VarRef::flow(1, 10, 1))
            .unwrap_err();
        assert!(err.is_dimension());
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_zero_index_rejected_by_every_scheme() {
        for scheme in [NamingScheme::Legacy, NamingScheme::Separated] {
            assert!(scheme.name(&VarRef::source_link(0, 1)).is_err());
        }
    }

    #[test]
    fn test_legacy_names_are_unique() {
        let scheme = NamingScheme::Legacy;
        let mut seen = HashSet::new();
        let mut total = 0;
        for a in 1..=9 {
            for b in 1..=9 {
                for name in [
                    scheme.name(&VarRef::source_link(a, b)).unwrap(),
                    scheme.name(&VarRef::dest_link(a, b)).unwrap(),
                ] {
                    seen.insert(name);
                    total += 1;
                }
                for c in 1..=9 {
                    seen.insert(scheme.name(&VarRef::flow(a, b, c)).unwrap());
                    seen.insert(scheme.name(&VarRef::select(a, b, c)).unwrap());
                    total += 2;
                }
            }
        }
        seen.insert(scheme.name(&VarRef::bottleneck()).unwrap());
        total += 1;
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_separated_avoids_legacy_aliasing() {
        let scheme = NamingScheme::Separated;
        let a = scheme.name(&VarRef::flow(1, 11, 1)).unwrap();
        let b = scheme.name(&VarRef::flow(11, 1, 1)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_scheme_from_str() {
        assert_eq!("Legacy".parse::<NamingScheme>().unwrap(), NamingScheme::Legacy);
        assert_eq!(
            "separated".parse::<NamingScheme>().unwrap(),
            NamingScheme::Separated
        );
        assert!("dotted".parse::<NamingScheme>().is_err());
    }
}
