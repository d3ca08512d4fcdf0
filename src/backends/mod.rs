//! Backends that consume a compiled [`Grammar`](crate::grammar::Grammar).

pub mod json;
