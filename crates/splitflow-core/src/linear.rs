//! Linear rows and bound declarations in LP text form.

use std::collections::HashMap;
use std::fmt;

/// One `coef · var` term.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    pub coef: f64,
    pub var: String,
}

/// Ordered sum of terms. Term order is preserved verbatim in the output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<Term>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, coef: f64, var: impl Into<String>) {
        self.terms.push(Term {
            coef,
            var: var.into(),
        });
    }

    pub fn with(mut self, coef: f64, var: impl Into<String>) -> Self {
        self.push(coef, var);
        self
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluate against a variable assignment. Missing variables count as 0.
    pub fn evaluate(&self, values: &HashMap<String, f64>) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coef * values.get(&t.var).copied().unwrap_or(0.0))
            .sum()
    }
}

/// Unit-coefficient sum of the given variable names.
impl FromIterator<String> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().map(|var| Term { coef: 1.0, var }).collect(),
        }
    }
}

impl fmt::Display for LinearExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, term) in self.terms.iter().enumerate() {
            let negative = term.coef < 0.0;
            match (idx, negative) {
                (0, false) => {}
                (0, true) => write!(f, "- ")?,
                (_, false) => write!(f, " + ")?,
                (_, true) => write!(f, " - ")?,
            }
            let magnitude = term.coef.abs();
            if magnitude != 1.0 {
                write!(f, "{} ", Num(magnitude))?;
            }
            write!(f, "{}", term.var)?;
        }
        Ok(())
    }
}

/// Relational operator of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Le,
    Ge,
    Eq,
}

impl Sense {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sense::Le => "<=",
            Sense::Ge => ">=",
            Sense::Eq => "=",
        }
    }
}

/// `<expr> <sense> <rhs>`
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub expr: LinearExpr,
    pub sense: Sense,
    pub rhs: f64,
}

impl Row {
    pub fn equals(expr: LinearExpr, rhs: f64) -> Self {
        Self {
            expr,
            sense: Sense::Eq,
            rhs,
        }
    }

    pub fn at_most(expr: LinearExpr, rhs: f64) -> Self {
        Self {
            expr,
            sense: Sense::Le,
            rhs,
        }
    }

    /// Check the row against an assignment within `tol`.
    pub fn is_satisfied_by(&self, values: &HashMap<String, f64>, tol: f64) -> bool {
        let lhs = self.expr.evaluate(values);
        match self.sense {
            Sense::Le => lhs <= self.rhs + tol,
            Sense::Ge => lhs >= self.rhs - tol,
            Sense::Eq => (lhs - self.rhs).abs() <= tol,
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.expr, self.sense.as_str(), Num(self.rhs))
    }
}

/// Which side of the inequality the variable is written on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundStyle {
    /// `var >= lower`
    Trailing,
    /// `lower <= var`
    Leading,
}

/// Lower-bound declaration for the `Bounds` section.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound {
    pub var: String,
    pub lower: f64,
    pub style: BoundStyle,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            BoundStyle::Trailing => write!(f, "{} >= {}", self.var, Num(self.lower)),
            BoundStyle::Leading => write!(f, "{} <= {}", Num(self.lower), self.var),
        }
    }
}

/// Shortest decimal form: integral values print without a fraction.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // -0.0 would otherwise print as "-0"
        let v = if self.0 == 0.0 { 0.0 } else { self.0 };
        write!(f, "{v}")
    }
}
