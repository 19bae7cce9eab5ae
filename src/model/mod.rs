//! Data model shared by the lowering passes and the emitter.

mod members;
pub mod pretty;
mod registry;
mod signature;
mod types;
mod vtable;

pub use members::{ClassRecord, ConstructorDecl, FieldDecl, FieldKind, MethodDecl};
pub use registry::{ClassId, ObjectRepresentation, Registry};
pub use signature::{CLASS_ACCESSOR, CallSignature, SlotInitializer};
pub use types::{
    Access, BASE_CLASS, CLASS_CLASS, Modifiers, Parameter, RECEIVER_NAME, STRING_CLASS, TypeRef,
};
pub use vtable::{SlotField, SlotKind, TYPE_IDENTITY_SLOT, VSlot, VTable, VTableSlot};
