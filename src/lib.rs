//! bqs-adapter - BQS query compiler and DAG record converter
//!
//! Translates Boolean Query Syntax trees into catalog filter trees and
//! converts catalog records to and from the attribute graph used on the wire.

pub mod cli;
pub mod config;
pub mod convert;
pub mod dag;
pub mod filter;
pub mod geometry;
pub mod observability;
pub mod query;
pub mod record;
pub mod schema;
