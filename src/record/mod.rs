//! Capability interface for records with encryptable string fields.
//!
//! Instead of runtime type introspection, record types expose their members
//! through [`Protected::fields_mut`]: a list of writable string fields (each
//! carrying its protected flag) and nested records. Protection is declared
//! alongside the field, once per type — by hand or via the
//! [`impl_protected!`](crate::impl_protected) helper — and the traversal in
//! [`Service`](crate::Service) resolves everything through plain trait
//! dispatch.

pub(crate) mod transform;

/// Which way a record transform runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Mutable access to one enumerated member of a record.
pub enum FieldMut<'a> {
    /// A writable string member.
    Text {
        /// Declared field name, used for name-driven lookup.
        name: &'static str,
        /// Whether the field is flagged for protection in tag-driven mode.
        protected: bool,
        value: &'a mut String,
    },
    /// A nested record; tag-driven traversal recurses into it.
    Record {
        name: &'static str,
        value: &'a mut dyn Protected,
    },
}

impl FieldMut<'_> {
    /// The declared name of this member.
    pub fn name(&self) -> &'static str {
        match self {
            FieldMut::Text { name, .. } => name,
            FieldMut::Record { name, .. } => name,
        }
    }
}

/// A composite value whose string fields can be selectively encrypted.
///
/// # Contract
///
/// - Members are enumerated in declaration order, each exactly once, so a
///   traversal is deterministic and total over the record tree. Record types
///   are expected to be acyclic trees of owned values.
/// - Only writable string members and nested records are enumerated.
///   Non-string or read-only members are simply not exposed, which makes a
///   protection flag on them a silent no-op rather than an error.
/// - Both transform entry points take `&mut`: the caller's value is mutated
///   in place. Passing a copy transforms the copy — the original is left
///   untouched, which is a caller error, not library behaviour.
pub trait Protected {
    /// Enumerate the members of this record, in declaration order.
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Implement [`Protected`] for a struct by listing its members in
/// declaration order.
///
/// Each member is one of:
/// - `protected` — a `String` field transformed by tag-driven calls;
/// - `plain` — a `String` field left alone unless named explicitly;
/// - `nested` — a member that itself implements [`Protected`].
///
/// ```
/// use fieldseal::impl_protected;
///
/// struct User {
///     email: String,
///     name: String,
/// }
///
/// impl_protected!(User {
///     email: protected,
///     name: plain,
/// });
/// ```
#[macro_export]
macro_rules! impl_protected {
    ($ty:ty { $($field:ident : $kind:ident),* $(,)? }) => {
        impl $crate::record::Protected for $ty {
            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::record::FieldMut<'_>> {
                ::std::vec![
                    $( $crate::impl_protected!(@field self, $field, $kind) ),*
                ]
            }
        }
    };
    (@field $self:ident, $field:ident, protected) => {
        $crate::record::FieldMut::Text {
            name: stringify!($field),
            protected: true,
            value: &mut $self.$field,
        }
    };
    (@field $self:ident, $field:ident, plain) => {
        $crate::record::FieldMut::Text {
            name: stringify!($field),
            protected: false,
            value: &mut $self.$field,
        }
    };
    (@field $self:ident, $field:ident, nested) => {
        $crate::record::FieldMut::Record {
            name: stringify!($field),
            value: &mut $self.$field,
        }
    };
}
