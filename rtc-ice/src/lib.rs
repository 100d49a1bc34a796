#![warn(rust_2018_idioms)]
#![allow(dead_code)]

pub mod candidate;
pub mod network;
pub mod rand;
