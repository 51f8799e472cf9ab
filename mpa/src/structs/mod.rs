//! Data structures representing format components.
//!
//! Contains structured representations of bitstream elements: frame headers,
//! side information, and the scale factors and spectral lines of main data.

pub mod frame;
pub mod header;
pub mod main_data;
pub mod side_info;
