// veneer-core/src/core/mod.rs
// ============================================================================
// Module: Veneer Core Types
// Description: Canonical interface, class, and argument structures.
// Purpose: Provide stable, serializable types for interface-driven decoration.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! Veneer core types define interface descriptions, the dynamic class model
//! whose method slots decorators rebind, and the argument carrier forwarded
//! to method decorator factories.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod args;
pub mod class;
pub mod identifiers;
pub mod interface;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use args::FactoryArgs;
pub use class::CallError;
pub use class::ClassAttribute;
pub use class::Instance;
pub use class::MethodClass;
pub use class::MethodError;
pub use class::MethodFn;
pub use identifiers::ClassName;
pub use identifiers::DecoratorName;
pub use identifiers::InterfaceName;
pub use identifiers::MemberName;
pub use interface::InterfaceDescription;
pub use interface::MemberKind;
