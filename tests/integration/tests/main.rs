//! End-to-End Integration Tests
//!
//! These tests exercise profiles the way a consumer sees them: populated by
//! a collaborator through `pk-model`, then read through the typed
//! accessors of `pk-profile`.

mod accessors;
mod normalization;
mod variants;
