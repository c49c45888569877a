// veneer-core/src/runtime/mod.rs
// ============================================================================
// Module: Veneer Runtime
// Description: Decorator build and application runtime.
// Purpose: Expose the class decorator entry points.
// Dependencies: crate::core, crate::interfaces
// ============================================================================

//! ## Overview
//! The runtime turns validated interface descriptions into reusable class
//! decorators and applies them to method classes.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod decorator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use decorator::ClassDecorator;
pub use decorator::InterfaceShapeError;
