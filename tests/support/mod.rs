#![allow(dead_code)]

pub mod classifier_server;
pub mod reconocimiento_env;
