//! Shape categories a walk can dispatch on, and the handles each one exposes.

use std::borrow::Cow;

/// A value the walker can visit.
///
/// Implementors describe themselves as one [`Shape`]; the walker does the
/// rest. Scalars report [`Shape::Opaque`].
pub trait Substitute {
    fn shape(&mut self) -> Shape<'_>;
}

/// The closed set of shapes the walker distinguishes.
pub enum Shape<'a> {
    /// Pointer-like wrapper. `None` stops the walk along this branch.
    Reference(Option<&'a mut dyn Substitute>),
    /// String leaf, the only place substitution happens.
    String(&'a mut dyn StringSlot),
    /// Struct with named fields.
    Record(&'a mut dyn Record),
    /// Index-addressable collection.
    Sequence(&'a mut dyn Sequence),
    /// Key/value table, rewritten one whole entry at a time.
    Mapping(&'a mut dyn Mapping),
    /// Anything else. Never touched.
    Opaque,
}

/// Read/overwrite handle for a string leaf.
pub trait StringSlot {
    fn read(&self) -> &str;
    fn write(&mut self, value: String);
}

/// Whether the walker may descend into a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Writable,
    ReadOnly,
}

/// One member slot of a [`Record`].
pub struct Field<'a> {
    pub name: &'static str,
    pub access: Access,
    pub value: &'a mut dyn Substitute,
}

impl<'a> Field<'a> {
    pub fn new(name: &'static str, access: Access, value: &'a mut dyn Substitute) -> Self {
        Self {
            name,
            access,
            value,
        }
    }

    pub fn is_writable(&self) -> bool {
        self.access == Access::Writable
    }
}

/// Struct schema: the member slots in declaration order.
///
/// Usually implemented with [`record!`](crate::record). A slot that is not
/// returned here is invisible to the walker.
pub trait Record {
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Ordered collection addressed by position.
pub trait Sequence {
    fn len(&self) -> usize;

    fn element(&mut self, index: usize) -> Option<&mut dyn Substitute>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Key/value table whose values are replaced, never mutated in place.
///
/// `rewrite_values` hands the walker an owned copy of each value and stores
/// the copy back under the same key once the walker returns. Keys are only
/// used for lookup: they are never visited and never change.
pub trait Mapping {
    fn entry_count(&self) -> usize;

    fn rewrite_values(
        &mut self,
        visit: &mut dyn FnMut(&mut dyn Substitute) -> crate::Result<()>,
    ) -> crate::Result<()>;
}

impl<T: Substitute + ?Sized> Substitute for Box<T> {
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Substitute> Substitute for Option<T> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Reference(self.as_mut().map(|value| value as &mut dyn Substitute))
    }
}

impl<T: Substitute + ?Sized> Substitute for &mut T {
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

impl StringSlot for String {
    fn read(&self) -> &str {
        self
    }

    fn write(&mut self, value: String) {
        *self = value;
    }
}

impl Substitute for String {
    fn shape(&mut self) -> Shape<'_> {
        Shape::String(self)
    }
}

impl StringSlot for Cow<'static, str> {
    fn read(&self) -> &str {
        self
    }

    fn write(&mut self, value: String) {
        *self = Cow::Owned(value);
    }
}

impl Substitute for Cow<'static, str> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::String(self)
    }
}

macro_rules! opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Substitute for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Opaque
                }
            }
        )*
    };
}

opaque!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    std::path::PathBuf,
    std::time::Duration,
);
