use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Identity of a field's Rust type, used to decide assignment compatibility.
///
/// Two tags are equal when they describe the same concrete type. The type
/// name is carried for diagnostics only.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// Tag for the concrete type `T`.
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// A value tagged `self` can be stored in a field tagged `target` without
    /// conversion.
    pub fn is_assignable_to(&self, target: &TypeTag) -> bool {
        self.id == target.id
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Whether a field always carries a value or may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain field, always present.
    Value,
    /// `Option<T>` field. `None` means "leave the destination alone".
    Optional,
}

/// Static description of one visible field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name exactly as declared (raw identifiers without `r#`).
    pub name: &'static str,
    pub kind: FieldKind,
    /// Declared type of the field, `Option<T>` included for optional fields.
    pub type_tag: TypeTag,
}

impl FieldDescriptor {
    pub fn new(name: &'static str, kind: FieldKind, type_tag: TypeTag) -> Self {
        Self {
            name,
            kind,
            type_tag,
        }
    }
}

/// Borrowed view of one source field at mapping time.
pub struct FieldValue<'a> {
    pub descriptor: FieldDescriptor,
    value: Option<&'a dyn Any>,
    value_type: TypeTag,
}

impl<'a> FieldValue<'a> {
    /// A plain field; the carried value has the declared type.
    pub fn present<T: Any>(descriptor: FieldDescriptor, value: &'a T) -> Self {
        Self {
            descriptor,
            value: Some(value as &dyn Any),
            value_type: TypeTag::of::<T>(),
        }
    }

    /// An optional field; when set, the carried value is the inner `T`.
    pub fn optional<T: Any>(descriptor: FieldDescriptor, value: Option<&'a T>) -> Self {
        Self {
            descriptor,
            value: value.map(|value| value as &dyn Any),
            value_type: TypeTag::of::<T>(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.descriptor.name
    }

    /// The carried value, `None` for an absent optional field.
    pub fn value(&self) -> Option<&'a dyn Any> {
        self.value
    }

    /// Type of the carried value (the inner type for optional fields).
    pub fn value_type(&self) -> TypeTag {
        self.value_type
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValue")
            .field("descriptor", &self.descriptor)
            .field("present", &self.value.is_some())
            .field("value_type", &self.value_type)
            .finish()
    }
}

/// A struct whose fields can be enumerated and assigned by name.
///
/// Implemented with `#[derive(Record)]`; hand-written impls must keep
/// `descriptors`, `values` and `assign` consistent with each other.
pub trait Record {
    /// Name of the record type, used in diagnostics.
    fn record_name(&self) -> &'static str;

    /// Visible fields in declaration order.
    fn descriptors(&self) -> Vec<FieldDescriptor>;

    /// Current values of the visible fields in declaration order.
    fn values(&self) -> Vec<FieldValue<'_>>;

    /// Store a clone of `value` into `field`.
    ///
    /// Returns `false` without touching the record when the field does not
    /// exist or `value` is not of the field's declared type.
    fn assign(&mut self, field: &str, value: &dyn Any) -> bool;
}
