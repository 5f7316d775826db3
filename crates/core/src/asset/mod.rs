//! Asset index implementations.
//!
//! The index itself is an external collaborator (see `mapshelf_plugin::AssetIndex`).
//! This module provides the filesystem-backed index used by the CLI.

pub mod filesystem;

pub use filesystem::{FilesystemAssetIndex, FilesystemIndexProvider, classify_extension};
