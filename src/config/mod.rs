//! Configuration for wallet-cli
//!
//! Currently limited to path management; the ledger itself carries no
//! tunable settings.

pub mod paths;

pub use paths::WalletPaths;
