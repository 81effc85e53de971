//! Progress reporting for drill sessions

pub mod reporter;
