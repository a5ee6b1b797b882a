/// Implement [`Substitute`](crate::Substitute) and [`Record`](crate::Record)
/// for a struct with named fields.
///
/// Fields are visited in the order they are listed. Mark a field
/// `#[read_only]` to keep the walker out of it; unlisted fields are never
/// visited either.
///
/// ```
/// use envwalk::record;
///
/// struct Database {
///     url: String,
///     pool_size: u32,
///     fingerprint: String,
/// }
///
/// record!(Database {
///     url,
///     pool_size,
///     #[read_only]
///     fingerprint,
/// });
/// ```
#[macro_export]
macro_rules! record {
    ($name:ident { $( $(#[$access:ident])? $field:ident ),* $(,)? }) => {
        impl $crate::Substitute for $name {
            fn shape(&mut self) -> $crate::Shape<'_> {
                $crate::Shape::Record(self)
            }
        }

        impl $crate::Record for $name {
            fn fields(&mut self) -> ::std::vec::Vec<$crate::Field<'_>> {
                let $name { $( $field, )* .. } = self;
                ::std::vec![
                    $(
                        $crate::Field::new(
                            ::std::stringify!($field),
                            $crate::record!(@access $($access)?),
                            $field,
                        ),
                    )*
                ]
            }
        }
    };
    (@access) => {
        $crate::Access::Writable
    };
    (@access read_only) => {
        $crate::Access::ReadOnly
    };
}
