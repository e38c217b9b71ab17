#![allow(missing_docs, dead_code)]
//! Shared benchmark support: registry, page-set and option generators.

pub mod generators;
