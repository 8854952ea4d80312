//! Checkout operations
//!
//! This module handles moving the working directory between commits by:
//! - Scanning for untracked files the move would clobber
//! - Planning and executing file system changes
//!
//! Migrations are designed to be safe, detecting conflicts before making any
//! changes to the working directory. Both `checkout <branch>` and `reset`
//! drive the same migration.

pub mod migration;
