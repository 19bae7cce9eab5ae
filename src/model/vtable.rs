use blake3::Hasher;
use serde::Serialize;

use super::signature::{CallSignature, SlotInitializer};
use super::types::{Access, TypeRef};

/// Bare name of the reserved type-identity slot.
pub const TYPE_IDENTITY_SLOT: &str = "__is_a";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlotKind {
    /// Bound to the owning class's metadata accessor; never overridden.
    TypeIdentity,
    Method,
}

/// Declaration half of a slot: the typed function-pointer field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotField {
    pub access: Access,
    pub is_static: bool,
    pub kind: SlotKind,
    /// Bare method name.
    pub name: String,
    pub signature: CallSignature,
    /// Class whose implementation this slot targets. `None` on untagged
    /// bootstrap slots, which resolve to the universal base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherited_from: Option<String>,
}

impl SlotField {
    #[must_use]
    pub fn return_type(&self) -> &TypeRef {
        &self.signature.return_type
    }
}

/// Initialization half of a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VSlot {
    pub access: Access,
    pub is_static: bool,
    pub name: String,
    pub initializer: SlotInitializer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VTableSlot {
    pub field: SlotField,
    pub method: VSlot,
}

impl VTableSlot {
    /// A slot whose implementation lives in `class`.
    #[must_use]
    pub fn direct(access: Access, class: &str, name: &str, signature: CallSignature) -> Self {
        Self {
            field: SlotField {
                access,
                is_static: false,
                kind: SlotKind::Method,
                name: name.to_string(),
                signature,
                inherited_from: Some(class.to_string()),
            },
            method: VSlot {
                access,
                is_static: false,
                name: name.to_string(),
                initializer: SlotInitializer::direct(class, name),
            },
        }
    }

    /// The type-identity slot of `class`.
    #[must_use]
    pub fn type_identity(class: &str, class_type: TypeRef) -> Self {
        Self {
            field: SlotField {
                access: Access::Public,
                is_static: false,
                kind: SlotKind::TypeIdentity,
                name: TYPE_IDENTITY_SLOT.to_string(),
                signature: CallSignature::accessor(class_type),
                inherited_from: Some(class.to_string()),
            },
            method: VSlot {
                access: Access::Public,
                is_static: false,
                name: TYPE_IDENTITY_SLOT.to_string(),
                initializer: SlotInitializer::type_identity(class),
            },
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.field.name
    }
}

/// A class's virtual method table. Field and method halves of each slot are
/// stored together, so the parallel views returned by [`VTable::fields`] and
/// [`VTable::methods`] are always index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VTable {
    slots: Vec<VTableSlot>,
}

impl VTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, slot: VTableSlot) {
        self.slots.push(slot);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[VTableSlot] {
        &self.slots
    }

    pub fn fields(&self) -> impl Iterator<Item = &SlotField> {
        self.slots.iter().map(|slot| &slot.field)
    }

    pub fn methods(&self) -> impl Iterator<Item = &VSlot> {
        self.slots.iter().map(|slot| &slot.method)
    }

    pub fn slot(&self, name: &str) -> Option<&VTableSlot> {
        self.slots.iter().find(|slot| slot.name() == name)
    }

    pub fn slot_index(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.slot_index(name).is_some()
    }

    /// Stable digest of the table layout for `class`. Any change to a slot's
    /// position, name, signature or target changes the value.
    #[must_use]
    pub fn fingerprint(&self, class: &str) -> u64 {
        let mut hasher = Hasher::new();
        hasher.update(class.as_bytes());
        for (index, slot) in self.slots.iter().enumerate() {
            hasher.update(&(index as u64).to_le_bytes());
            hasher.update(slot.field.name.as_bytes());
            hasher.update(&[Self::kind_tag(slot.field.kind)]);
            hasher.update(slot.field.signature.pointer_type().as_bytes());
            hasher.update(slot.method.initializer.to_string().as_bytes());
        }
        let digest = hasher.finalize();
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&digest.as_bytes()[..8]);
        u64::from_le_bytes(buf)
    }

    const fn kind_tag(kind: SlotKind) -> u8 {
        match kind {
            SlotKind::TypeIdentity => 1,
            SlotKind::Method => 2,
        }
    }
}

impl FromIterator<VTableSlot> for VTable {
    fn from_iter<T: IntoIterator<Item = VTableSlot>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}
