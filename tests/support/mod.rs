#![allow(dead_code)]

pub mod assertions;
pub mod competition;
pub mod fixtures;
