//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (SHA-256, random tokens, constant-time compare)
//! - Password digest policy
//! - Signed access-token codec
//! - Bearer header extraction

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod token;
