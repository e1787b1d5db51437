// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! OGC CQL2 abstract syntax model and its text rendering.
//!
//! The model is one closed sum type, [`Expr`], combined with the operator
//! enumeration [`Op`]. Values are immutable once constructed: the parser and
//! the JSON decoder create them, the serializers consume them, and the whole
//! tree is a plain value with derived structural equality.
//!
//! `Display` on [`Expr`] IS the text serializer. It is deliberately
//! opinionated rather than faithful to the input spelling:
//!
//! * property names always come out double-quoted,
//! * comparisons and arithmetic always come out parenthesized,
//! * timestamps carry exactly 6 fractional-second digits,
//! * integral numbers carry a trailing `.0`,
//! * embedded apostrophes come out as `\'`,
//! * negated predicates use their inline spelling (`NOT LIKE`,
//!   `IS NOT NULL`, ...) rather than a leading `NOT (...)`.
//!
//! Re-parsing rendered text therefore yields the original tree even though
//! the rendered text may differ from what was originally parsed.
//!

use crate::{error::Cql2Error, geom::G, op::Op};
use core::fmt;
use jiff::{Timestamp, civil::Date, tz::TimeZone};

/// Expression variants...
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Boolean literal.
    Bool(bool),
    /// Numeric literal. All numerics are IEEE-754 doubles; `1` and `1.0`
    /// are indistinguishable once parsed.
    Num(f64),
    /// Character literal, unescaped.
    Str(String),
    /// Calendar date.
    Date(Date),
    /// UTC instant w/ sub-second precision.
    Timestamp(Timestamp),
    /// The `..` open-end sentinel, valid only as an interval endpoint.
    Unbounded,
    /// Temporal interval w/ two endpoints.
    Interval(Box<Expr>, Box<Expr>),
    /// Spatial literal.
    Spatial(G),
    /// Property name, stored unquoted.
    Id(String),
    /// Function call.
    Function(Call),
    /// List value; the right-hand side of `IN` and `BETWEEN`, array-predicate
    /// operands, and nested lists thereof.
    Array(Vec<Expr>),
    /// Single-operand operation: `NOT`, `IS NULL`, `CASEI`, `ACCENTI`.
    Monadic(Op, Box<Expr>),
    /// Two-operand operation: comparisons, `LIKE`, `BETWEEN`, `IN`,
    /// arithmetic, spatial, temporal and array predicates.
    Dyadic(Op, Box<Expr>, Box<Expr>),
    /// Flattened n-ary `AND` / `OR` w/ at least 2 operands.
    Variadic(Op, Vec<Expr>),
}

/// Function call w/ a case-sensitive name and positional arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Call {
    /// Function name as written.
    pub name: String,
    /// Positional arguments.
    pub args: Vec<Expr>,
}

impl Call {
    /// Constructor.
    pub fn new<S: Into<String>>(name: S, args: Vec<Expr>) -> Self {
        Call {
            name: name.into(),
            args,
        }
    }
}

impl Expr {
    /// Build an n-ary conjunction. Fails unless at least 2 operands are
    /// given.
    pub fn and(args: Vec<Expr>) -> Result<Self, Cql2Error> {
        Self::connective(Op::And, args)
    }

    /// Build an n-ary disjunction. Fails unless at least 2 operands are
    /// given.
    pub fn or(args: Vec<Expr>) -> Result<Self, Cql2Error> {
        Self::connective(Op::Or, args)
    }

    fn connective(op: Op, args: Vec<Expr>) -> Result<Self, Cql2Error> {
        if args.len() < 2 {
            return Err(Cql2Error::Structure(
                format!("'{op}' needs at least 2 operands, found {}", args.len()).into(),
            ));
        }
        Ok(Expr::Variadic(op, args))
    }

    /// Build a negation.
    pub fn not(x: Expr) -> Self {
        Expr::Monadic(Op::Not, Box::new(x))
    }

    /// Build a null check.
    pub fn is_null(x: Expr) -> Self {
        Expr::Monadic(Op::IsNull, Box::new(x))
    }

    /// Build a case-insensitive wrapper.
    pub fn casei(x: Expr) -> Self {
        Expr::Monadic(Op::CaseI, Box::new(x))
    }

    /// Build an accent-insensitive wrapper.
    pub fn accenti(x: Expr) -> Self {
        Expr::Monadic(Op::AccentI, Box::new(x))
    }

    /// Build a binary comparison. Fails when `op` is not one of
    /// `= <> < > <= >=`.
    pub fn compare(op: Op, left: Expr, right: Expr) -> Result<Self, Cql2Error> {
        if !op.comparison() {
            return Err(Cql2Error::Structure(
                format!("'{op}' is not a comparison operator").into(),
            ));
        }
        Ok(Expr::Dyadic(op, Box::new(left), Box::new(right)))
    }

    /// Build an arithmetic operation. Fails when `op` is not arithmetic.
    pub fn arith(op: Op, left: Expr, right: Expr) -> Result<Self, Cql2Error> {
        if !op.arithmetic() {
            return Err(Cql2Error::Structure(
                format!("'{op}' is not an arithmetic operator").into(),
            ));
        }
        Ok(Expr::Dyadic(op, Box::new(left), Box::new(right)))
    }

    /// Build a `LIKE` predicate. The pattern must reduce to a character
    /// literal, possibly wrapped in `CASEI` / `ACCENTI`.
    pub fn like(expr: Expr, pattern: Expr) -> Result<Self, Cql2Error> {
        fn reduces_to_str(e: &Expr) -> bool {
            match e {
                Expr::Str(_) => true,
                Expr::Monadic(Op::CaseI | Op::AccentI, inner) => reduces_to_str(inner),
                _ => false,
            }
        }
        if !reduces_to_str(&pattern) {
            return Err(Cql2Error::Structure(
                "a LIKE pattern must reduce to a character literal".into(),
            ));
        }
        Ok(Expr::Dyadic(Op::IsLike, Box::new(expr), Box::new(pattern)))
    }

    /// Build a `BETWEEN` predicate.
    pub fn between(value: Expr, low: Expr, high: Expr) -> Self {
        Expr::Dyadic(
            Op::IsBetween,
            Box::new(value),
            Box::new(Expr::Array(vec![low, high])),
        )
    }

    /// Build an `IN` predicate.
    pub fn in_list(value: Expr, list: Vec<Expr>) -> Self {
        Expr::Dyadic(Op::IsInList, Box::new(value), Box::new(Expr::Array(list)))
    }

    /// Build a spatial predicate. Fails when `op` is not an `S_` operator.
    pub fn spatial(op: Op, left: Expr, right: Expr) -> Result<Self, Cql2Error> {
        if !op.spatial() {
            return Err(Cql2Error::Structure(
                format!("'{op}' is not a spatial operator").into(),
            ));
        }
        Ok(Expr::Dyadic(op, Box::new(left), Box::new(right)))
    }

    /// Build a temporal predicate. Fails when `op` is not a `T_` operator.
    pub fn temporal(op: Op, left: Expr, right: Expr) -> Result<Self, Cql2Error> {
        if !op.temporal() {
            return Err(Cql2Error::Structure(
                format!("'{op}' is not a temporal operator").into(),
            ));
        }
        Ok(Expr::Dyadic(op, Box::new(left), Box::new(right)))
    }

    /// Build an array predicate. Fails when `op` is not an `A_` operator.
    pub fn array_op(op: Op, left: Expr, right: Expr) -> Result<Self, Cql2Error> {
        if !op.array() {
            return Err(Cql2Error::Structure(
                format!("'{op}' is not an array operator").into(),
            ));
        }
        Ok(Expr::Dyadic(op, Box::new(left), Box::new(right)))
    }

    /// Return this expression's property name if it is one, `None` otherwise.
    pub fn as_id(&self) -> Option<&str> {
        match self {
            Expr::Id(x) => Some(x),
            _ => None,
        }
    }

    /// Return the pieces of a two-operand operation, `None` otherwise.
    pub fn as_dyadic(&self) -> Option<(Op, &Expr, &Expr)> {
        match self {
            Expr::Dyadic(op, a, b) => Some((*op, a, b)),
            _ => None,
        }
    }

    /// Return the spatial literal if this is one, `None` otherwise.
    pub fn as_spatial(&self) -> Option<&G> {
        match self {
            Expr::Spatial(x) => Some(x),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn as_str(&self) -> Option<&str> {
        match self {
            Expr::Str(x) => Some(x),
            _ => None,
        }
    }

    #[cfg(test)]
    pub(crate) fn as_array(&self) -> Option<&Vec<Expr>> {
        match self {
            Expr::Array(x) => Some(x),
            _ => None,
        }
    }
}

/// Render a double the way the text encoding wants it: exact integers carry
/// a trailing `.0`, everything else uses the shortest representation that
/// round-trips.
pub(crate) fn fmt_num(x: f64) -> String {
    if x.is_finite() && x.fract() == 0.0 {
        format!("{x:.1}")
    } else {
        format!("{x}")
    }
}

/// Render a UTC instant w/ exactly 6 fractional-second digits, zero-padded.
pub(crate) fn fmt_timestamp(ts: &Timestamp) -> String {
    let z = ts.to_zoned(TimeZone::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:06}Z",
        z.year(),
        z.month(),
        z.day(),
        z.hour(),
        z.minute(),
        z.second(),
        z.subsec_nanosecond() / 1_000
    )
}

// On output embedded apostrophes are always escaped w/ a backslash, never
// doubled.
fn escape_quotes(s: &str) -> String {
    s.replace('\'', "\\'")
}

// Operands of `IS NULL` and of the inline negated predicates would change
// meaning if they were themselves connectives; parenthesize those.
fn fmt_operand(f: &mut fmt::Formatter<'_>, e: &Expr) -> fmt::Result {
    match e {
        Expr::Variadic(_, _) | Expr::Monadic(Op::Not, _) => write!(f, "({e})"),
        _ => write!(f, "{e}"),
    }
}

// `INTERVAL` endpoints render as bare quoted strings, not as the standalone
// DATE(...) / TIMESTAMP(...) constructors.
fn fmt_instant_parameter(f: &mut fmt::Formatter<'_>, e: &Expr) -> fmt::Result {
    match e {
        Expr::Date(d) => write!(f, "'{d}'"),
        Expr::Timestamp(t) => write!(f, "'{}'", fmt_timestamp(t)),
        other => write!(f, "{other}"),
    }
}

fn fmt_between(
    f: &mut fmt::Formatter<'_>,
    value: &Expr,
    bounds: &Expr,
    negated: bool,
) -> fmt::Result {
    fmt_operand(f, value)?;
    f.write_str(if negated { " NOT BETWEEN " } else { " BETWEEN " })?;
    match bounds {
        Expr::Array(xs) if xs.len() == 2 => write!(f, "{} AND {}", xs[0], xs[1]),
        other => write!(f, "{other}"),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Bool(x) => f.write_str(if *x { "TRUE" } else { "FALSE" }),
            Expr::Num(x) => f.write_str(&fmt_num(*x)),
            Expr::Str(s) => write!(f, "'{}'", escape_quotes(s)),
            Expr::Date(d) => write!(f, "DATE('{d}')"),
            Expr::Timestamp(t) => write!(f, "TIMESTAMP('{}')", fmt_timestamp(t)),
            Expr::Unbounded => f.write_str("'..'"),
            Expr::Interval(a, b) => {
                f.write_str("INTERVAL(")?;
                fmt_instant_parameter(f, a)?;
                f.write_str(", ")?;
                fmt_instant_parameter(f, b)?;
                f.write_str(")")
            }
            Expr::Spatial(g) => write!(f, "{g}"),
            Expr::Id(name) => write!(f, "\"{name}\""),
            Expr::Function(c) => {
                let args: Vec<String> = c.args.iter().map(|x| x.to_string()).collect();
                write!(f, "{}({})", c.name, args.join(", "))
            }
            Expr::Array(xs) => {
                let items: Vec<String> = xs.iter().map(|x| x.to_string()).collect();
                write!(f, "({})", items.join(", "))
            }
            // inline negative spellings invert the parser's NOT pull-up and
            // keep round-trips stable...
            Expr::Monadic(Op::Not, x) => match &**x {
                Expr::Dyadic(Op::IsLike, a, b) => {
                    fmt_operand(f, a)?;
                    write!(f, " NOT LIKE {b}")
                }
                Expr::Dyadic(Op::IsBetween, v, bounds) => fmt_between(f, v, bounds, true),
                Expr::Dyadic(Op::IsInList, v, xs) => {
                    fmt_operand(f, v)?;
                    write!(f, " NOT IN {xs}")
                }
                Expr::Monadic(Op::IsNull, v) => {
                    fmt_operand(f, v)?;
                    f.write_str(" IS NOT NULL")
                }
                inner @ Expr::Variadic(_, _) => write!(f, "NOT ({inner})"),
                inner => write!(f, "NOT {inner}"),
            },
            Expr::Monadic(Op::IsNull, x) => {
                fmt_operand(f, x)?;
                f.write_str(" IS NULL")
            }
            Expr::Monadic(op, x) => write!(f, "{op}({x})"),
            Expr::Dyadic(Op::IsLike, a, b) => {
                fmt_operand(f, a)?;
                write!(f, " LIKE {b}")
            }
            Expr::Dyadic(Op::IsBetween, v, bounds) => fmt_between(f, v, bounds, false),
            Expr::Dyadic(Op::IsInList, v, xs) => {
                fmt_operand(f, v)?;
                write!(f, " IN {xs}")
            }
            Expr::Dyadic(op, a, b) if op.comparison() || op.arithmetic() => {
                write!(f, "({a} {op} {b})")
            }
            Expr::Dyadic(op, a, b) => write!(f, "{op}({a}, {b})"),
            Expr::Variadic(op, xs) => {
                let mut first = true;
                for x in xs {
                    if !first {
                        write!(f, " {op} ")?;
                    }
                    first = false;
                    match x {
                        Expr::Variadic(_, _) => write!(f, "({x})")?,
                        _ => write!(f, "{x}")?,
                    }
                }
                Ok(())
            }
        }
    }
}
