// crates/veneer-core/examples/minimal.rs
// ============================================================================
// Module: Veneer Minimal Example
// Description: Minimal end-to-end interface decoration walkthrough.
// Purpose: Demonstrate decorator build, application, and decorated calls.
// Dependencies: veneer-core
// ============================================================================

//! ## Overview
//! Builds a tracing-flavored class decorator from a two-method interface,
//! applies it to a class, and calls the decorated methods through an
//! instance. Suitable for quick verification.

use std::sync::Arc;

use serde_json::Value;
use serde_json::json;
use veneer_core::ClassDecorator;
use veneer_core::FactoryArgs;
use veneer_core::FactoryError;
use veneer_core::Instance;
use veneer_core::InterfaceDescription;
use veneer_core::MemberName;
use veneer_core::MethodClass;
use veneer_core::MethodDecoratorFactory;
use veneer_core::MethodError;
use veneer_core::MethodFn;
use veneer_core::StderrAuditSink;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Factory producing callables that record the call count per member name.
fn tally_factory() -> Arc<dyn MethodDecoratorFactory> {
    Arc::new(
        |method_name: &MemberName, _args: &FactoryArgs| -> Result<MethodFn, FactoryError> {
            let field = format!("{method_name}_calls");
            let label = method_name.to_string();
            let method: MethodFn = Arc::new(
                move |instance: &mut Instance, _args: &[Value]| -> Result<Value, MethodError> {
                    let count = instance.field(&field).and_then(Value::as_i64).unwrap_or(0);
                    instance.set_field(field.clone(), json!(count + 1));
                    Ok(json!({ "method": label, "calls": count + 1 }))
                },
            );
            Ok(method)
        },
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let iface = InterfaceDescription::new("ILifecycle")
        .with_method("start")
        .with_method("stop");

    let decorator = ClassDecorator::build("tally", &iface, tally_factory(), FactoryArgs::empty())?
        .with_audit_sink(Arc::new(StderrAuditSink));

    let mut class = MethodClass::new("Worker");
    decorator.apply(&mut class)?;

    let mut instance = Instance::new(Arc::new(class));
    let started = instance.call(&MemberName::new("start"), &[])?;
    let stopped = instance.call(&MemberName::new("stop"), &[])?;

    if started["method"] != json!("start") || stopped["method"] != json!("stop") {
        return Err(Box::new(ExampleError("decorated methods misbehaved")));
    }
    Ok(())
}
