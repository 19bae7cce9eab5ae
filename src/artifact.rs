//! JSON artifact handed to the external emitter.

use serde::Serialize;

use crate::lowering::LoweredProgram;
use crate::model::{ClassRecord, ObjectRepresentation, SlotField, SlotInitializer, VTableSlot};

pub const ARTIFACT_VERSION: &str = "0.1";

#[derive(Debug, Serialize)]
pub struct ProgramArtifact<'a> {
    pub version: &'static str,
    pub package: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_class: Option<&'a str>,
    pub classes: Vec<ClassArtifact<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ClassArtifact<'a> {
    pub name: &'a str,
    pub parent: Option<&'a str>,
    #[serde(flatten)]
    pub record: &'a ClassRecord,
    /// Fingerprint of the table layout; changes whenever any slot does.
    pub vtable_version: u64,
    pub vtable: Vec<SlotArtifact<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SlotArtifact<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub field: &'a SlotField,
    pub pointer_type: String,
    pub initializer: &'a SlotInitializer,
    /// Target-side text of the initializer.
    pub rendered: String,
}

impl<'a> ProgramArtifact<'a> {
    #[must_use]
    pub fn new(program: &'a LoweredProgram) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            package: program.package(),
            entry_class: program.entry_class(),
            classes: program
                .classes()
                .map(|rep| ClassArtifact::new(rep, program.parent_of(rep)))
                .collect(),
        }
    }

    /// # Errors
    /// Fails only if serialization itself fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> ClassArtifact<'a> {
    fn new(rep: &'a ObjectRepresentation, parent: Option<&'a ObjectRepresentation>) -> Self {
        Self {
            name: &rep.name,
            parent: parent.map(|parent| parent.name.as_str()),
            record: &rep.record,
            vtable_version: rep.vtable.fingerprint(&rep.name),
            vtable: rep
                .vtable
                .slots()
                .iter()
                .enumerate()
                .map(|(index, slot)| SlotArtifact::new(index, slot))
                .collect(),
        }
    }
}

impl<'a> SlotArtifact<'a> {
    fn new(index: usize, slot: &'a VTableSlot) -> Self {
        Self {
            index,
            field: &slot.field,
            pointer_type: slot.field.signature.pointer_type(),
            initializer: &slot.method.initializer,
            rendered: slot.method.initializer.to_string(),
        }
    }
}
