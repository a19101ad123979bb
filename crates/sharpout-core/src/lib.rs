//! Sharpout Core
//!
//! Renders C# syntax trees back to source text. Layout decisions are taken
//! from a [`FormattingPolicy`]; the printer emits discrete write events into
//! a chain of [`TokenWriter`] stages that end in plain text.

pub mod ast;
pub mod config;
pub mod error;
pub mod literal;
pub mod policy;
pub mod printer;
pub mod result;
pub mod sink;

// Re-export commonly used types
pub use ast::{NodeKind, NodeRef, SyntaxTree};
pub use config::{
    ConfigLoader, FormatterConfiguration, SharpoutConfig, json_schema as config_schema,
};
pub use error::{ErrorKind, SharpoutError};
pub use policy::{
    BlankLineSettings, BraceSettings, BraceStyle, FormattingPolicy, IndentStyle,
    IndentationSettings, NewLine, Preset, SpacingSettings, Wrapping, WrappingSettings,
};
pub use printer::{Printer, print, print_node, print_to, print_with_map};
pub use result::Result;
pub use sink::{
    NodeSpan, PositionTracker, RequiredSpaces, TextLocation, TextSink, TokenClass, TokenRole,
    TokenWriter,
};

/// Initialize the tracing subscriber for logging.
///
/// Events go to stderr so rendered source on stdout stays clean.
pub fn init_tracing() {
    use std::io::IsTerminal;
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sharpout=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
