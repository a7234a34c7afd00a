#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the unindent project.

Do NOT depend on this crate directly.
Use `unindent-io` instead.
"#]

pub mod lines;
pub mod report;
pub mod strip;
