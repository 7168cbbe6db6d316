#![allow(dead_code)]

pub mod detector_server;
