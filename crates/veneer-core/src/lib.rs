// veneer-core/src/lib.rs
// ============================================================================
// Module: Veneer Core Library
// Description: Public API surface for the Veneer core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{audit, core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Veneer builds class-level decorators that uniformly rewrite every method
//! declared by a named interface. Given an interface description and a
//! method decorator factory, [`ClassDecorator::build`] validates the
//! interface shape and captures its member set; applying the resulting
//! decorator rebinds exactly those members on a target class with callables
//! freshly produced by the factory. It integrates through explicit
//! interfaces rather than embedding into any class machinery.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use audit::DecorationAuditEvent;
pub use audit::DecorationAuditSink;
pub use audit::MemoryAuditSink;
pub use audit::StderrAuditSink;
pub use interfaces::FactoryError;
pub use interfaces::InterfaceSource;
pub use interfaces::MethodDecoratorFactory;
pub use runtime::ClassDecorator;
pub use runtime::InterfaceShapeError;
