#![allow(dead_code)]

pub mod mock_transport;
pub mod strategies;

pub use mock_transport::*;
pub use strategies::*;
