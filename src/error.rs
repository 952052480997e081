//! .
//!
//! Generation and label updates never fail; errors only come from validating hand-built
//! configurations, from the strict update variant and from [`check_layout`].
//!
//! [`check_layout`]: crate::solver::check_layout

use std::fmt;

/// Convenient wrapper around `std::Result`.
pub use anyhow::Result;

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
  InvalidConfig(String),
  UnknownOrnament(usize),
  LayoutViolation(String),
}

impl fmt::Display for ErrorKind {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use ErrorKind::*;
    match *self {
      InvalidConfig(ref s) => write!(fmt, "invalid configuration: {}", s),
      UnknownOrnament(id) => write!(fmt, "no ornament with id {}", id),
      LayoutViolation(ref s) => write!(fmt, "layout violation: {}", s),
    }
  }
}

impl std::error::Error for ErrorKind {}
