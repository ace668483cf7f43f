//! Use-Cases der Application-Layer-Orchestrierung.

pub mod document;
pub mod file_io;
pub mod pointer;
pub mod properties;
