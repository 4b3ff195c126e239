//! arrowc Code Generation - target dialect output

pub mod js;

pub use js::generate as generate_js;
