//! survival-predictor - validates clinical features and serves a
//! pre-trained survival classifier over HTTP

pub mod api;
pub mod cli;
pub mod http_server;
pub mod logging;
pub mod model;
pub mod schema;
