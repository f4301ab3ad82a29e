//! @ai:module:intent Annotation rewriter library for instrumenting public methods
//! @ai:module:layer infrastructure
//! @ai:module:public_api config, matcher, newline, rewriter, runner, output, error
//! @ai:module:stateless true
//!
//! # AutoAnnotate
//!
//! A library for batch-rewriting source files: inserting a metrics annotation
//! above every public non-static method, replacing the annotation's import
//! line, or stripping previously inserted annotations.
//!
//! ## Example
//!
//! ```rust,no_run
//! use autoannotate::{config, output, runner};
//! use std::path::Path;
//!
//! // Load the key=value configuration and rewrite every file it points at.
//! let config = config::load_config(Path::new("config.txt")).unwrap();
//! let report = runner::run(&config).unwrap();
//! println!("{}", output::format_run_report(&report, output::OutputFormat::Text));
//! ```

pub mod config;
pub mod error;
pub mod matcher;
pub mod newline;
pub mod output;
pub mod rewriter;
pub mod runner;

pub use config::{load_config, parse_properties, Config, Mode};
pub use error::{Error, Result};
pub use matcher::MethodMatcher;
pub use newline::{split_lines, LineEnding};
pub use output::{format_run_report, OutputFormat};
pub use rewriter::{rewrite_lines, InsertedAnnotation, RewriteOutcome};
pub use runner::{run, RunReport};
