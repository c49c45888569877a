// veneer-core/src/interfaces/mod.rs
// ============================================================================
// Module: Veneer Interfaces
// Description: Collaborator contracts for interface sources and method factories.
// Purpose: Define the seams through which external systems feed decoration.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Veneer integrates with its two collaborators: the
//! interface description system that enumerates and classifies members, and
//! the caller-supplied method decorator factory that produces replacement
//! callables. Implementations must enumerate deterministically and fail
//! closed on members they cannot classify.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::args::FactoryArgs;
use crate::core::class::MethodFn;
use crate::core::identifiers::InterfaceName;
use crate::core::identifiers::MemberName;
use crate::core::interface::MemberKind;

// ============================================================================
// SECTION: Interface Source
// ============================================================================

/// Source of interface member names and classifications.
///
/// Repeated enumeration of the same source must yield the same member set;
/// ordering may vary, completeness may not. Members the source cannot
/// classify are treated as non-methods by decorator builds.
pub trait InterfaceSource {
    /// Returns the interface name.
    fn interface_name(&self) -> &InterfaceName;

    /// Enumerates the declared member names.
    fn member_names(&self) -> Vec<MemberName>;

    /// Classifies a member, or returns `None` when the member is unknown.
    fn classify(&self, member: &MemberName) -> Option<MemberKind>;
}

// ============================================================================
// SECTION: Method Decorator Factory
// ============================================================================

/// Method decorator factory errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FactoryError {
    /// Factory reported an error.
    #[error("method decorator factory error: {0}")]
    Factory(String),
}

/// Caller-supplied factory producing a replacement callable per method name.
///
/// The factory receives the method name first and the forwarded extras from
/// [`ClassDecorator::build`] alongside it, once per interface member. The
/// produced callable is assigned directly into the class attribute slot; its
/// argument arity is not validated against anything the slot held before.
///
/// [`ClassDecorator::build`]: crate::runtime::ClassDecorator::build
pub trait MethodDecoratorFactory: Send + Sync {
    /// Produces the replacement callable for one method name.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] when the factory cannot produce a callable;
    /// the failure propagates unmodified to the code applying the decorator.
    fn decorate(
        &self,
        method_name: &MemberName,
        args: &FactoryArgs,
    ) -> Result<MethodFn, FactoryError>;
}

impl<F> MethodDecoratorFactory for F
where
    F: Fn(&MemberName, &FactoryArgs) -> Result<MethodFn, FactoryError> + Send + Sync,
{
    fn decorate(
        &self,
        method_name: &MemberName,
        args: &FactoryArgs,
    ) -> Result<MethodFn, FactoryError> {
        self(method_name, args)
    }
}
