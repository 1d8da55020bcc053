//! diet-api - HTTP/JSON API over a relational diet-template schema
//!
//! The core is the hierarchical assembler, which rebuilds the four-level
//! template document (template → days → meals → items) through a serialized
//! single-connection query gate, plus a bulk-insert coordinator for the
//! benchmarking endpoint. Everything else is flat single-query handlers over
//! the same gate.

pub mod benchmark;
pub mod config;
pub mod db;
pub mod http_server;
pub mod records;
pub mod templates;
