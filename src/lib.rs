//! # class-locator
//!
//! Finds the directory or archive a classpath resource is loaded from.
//!
//! ## Architecture
//!
//! - **locator**: source lookups for a resource name and first-match class discovery
//! - **loader**: the `ResourceLoader` trait the locator reads from
//! - **classpath**: a `ResourceLoader` over directories and jar/zip archives
//! - **url**: location handles and their conversion to code-source paths
//! - **scan**: archive discovery under a directory tree, class name mapping
//! - **error**: conversion error kinds
//! - **cli** / **config**: command-line front end

pub mod classpath;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod locator;
pub mod scan;
pub mod url;
