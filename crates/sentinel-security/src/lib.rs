//! PII detection and redaction engine

pub mod patterns;
pub mod redactor;

pub use patterns::{BUILTIN_PATTERNS, PatternRegistry, effective_patterns, is_builtin};
pub use redactor::{CompiledRule, MASK_CHAR, Redaction, Redactor, compile_rule, detect_and_redact, mask};
