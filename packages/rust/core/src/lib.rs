//! Blueprint library document generation for bpdocs.
//!
//! This crate ties the catalog providers and the Markdown builder together:
//! group the catalog by category, render it, and write (or check) the
//! output file.

pub mod assembler;
pub mod grouping;
pub mod pipeline;
