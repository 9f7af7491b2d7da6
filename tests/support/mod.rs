#![allow(dead_code)]

pub mod stubs;
