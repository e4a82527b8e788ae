#![allow(clippy::wildcard_imports)]

pub mod albums;
pub mod artists;
pub mod members;
pub mod songs;
