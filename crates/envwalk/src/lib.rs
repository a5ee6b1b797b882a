//! In-place `$VAR` substitution over arbitrary data structures.
//!
//! A walk visits every reachable string of a value and replaces strings of
//! the exact form `$NAME` with the value of the variable `NAME`. Everything
//! else is left alone: other strings, non-string leaves and map keys.
//!
//! Walk order:
//! 1. Follow references (`Option`, `Box`, `&mut`); `None` ends the branch
//! 2. Substitute string leaves
//! 3. Recurse into record fields marked writable, in declaration order
//! 4. Recurse into sequence elements by ascending index
//! 5. Rewrite map values one whole entry at a time (see [`mapping`])
//!
//! Types join the walk by implementing [`Substitute`], normally through the
//! [`record!`] macro for structs.

#[macro_use]
mod record;

mod document;
pub mod env;
pub mod error;
pub mod mapping;
pub mod rule;
mod sequence;
pub mod shape;
pub mod walk;

#[cfg(feature = "secrecy")]
mod secret;

pub use {
    env::{DotenvEnv, Environment, ProcessEnv},
    error::{Error, Result},
    mapping::MapStorage,
    rule::{TRIGGER, reference_name, substitute},
    shape::{Access, Field, Mapping, Record, Sequence, Shape, StringSlot, Substitute},
    walk::{Options, Report, Walker, run, run_with},
};
