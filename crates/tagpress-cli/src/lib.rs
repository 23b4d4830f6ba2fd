//! Library components of the tagpress station binary.

pub mod logging;
