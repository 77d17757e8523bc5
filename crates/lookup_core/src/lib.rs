//! Public library API for decomposing runtime objects into inspectable member trees.

/// Object decomposition engine, descriptors, evaluated-value containers, and diagnostics.
pub mod inspect;
