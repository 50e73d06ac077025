/// A compile-time key bound to a [`Field`](crate::Field).
///
/// A tag is a zero-sized marker type carrying its key as an associated
/// constant, so `Field<i32, Id>` and `Field<i32, Name>` are distinct types and
/// the key is known before any value exists.
///
/// `TEXT` must not be empty. Prefer [`define_tags!`](crate::define_tags),
/// which checks this at compile time, over implementing the trait by hand.
///
/// # Examples
///
/// ```
/// use kie_json::{Tag, define_tags};
///
/// define_tags! {
///     /// Key of the user id.
///     pub UserId = "user_id";
/// }
///
/// assert_eq!(UserId::TEXT, "user_id");
/// ```
pub trait Tag: 'static {
    /// The JSON object key.
    const TEXT: &'static str;
}

/// Declares one or more [`Tag`] marker types.
///
/// Each entry is `[attributes] [visibility] Name = "text";`.
/// An empty text is rejected at compile time.
///
/// ```compile_fail
/// kie_json::define_tags! {
///     Empty = "";
/// }
/// ```
#[macro_export]
macro_rules! define_tags {
    ($($(#[$meta:meta])* $vis:vis $name:ident = $text:literal;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
            $vis struct $name;

            impl $crate::Tag for $name {
                const TEXT: &'static str = $text;
            }

            const _: () = ::core::assert!(
                !<$name as $crate::Tag>::TEXT.is_empty(),
                "tag text must not be empty"
            );
        )*
    };
}

// -----------------------------------------------------------------------------
// Tests
