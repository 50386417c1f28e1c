pub mod affine;
pub mod builder;
pub mod compiled;
pub mod op;
