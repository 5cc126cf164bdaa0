//! Macros for defining string-backed enumerations.

/// Macro to define a closed enumeration whose members are backed by fixed string
/// tokens.
///
/// This generates a fieldless enum with:
/// - An `ALL` constant listing members in declaration order
/// - `as_str()` returning the member's token
/// - `parse()` accepting exactly one of the tokens
/// - `Display`, `FromStr` and `TryFrom<&str>` implementations
/// - Equality against `str`, `&str` and `String` in both directions
/// - `Serialize` and `Deserialize` implementations using the token
///
/// # Example
///
/// ```ignore
/// string_enum! {
///     /// Traffic light colour.
///     pub enum Light {
///         Red => "red",
///         Green => "green",
///     }
/// }
///
/// assert_eq!(Light::parse("red")?, Light::Red);
/// assert!(Light::Green == "green");
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Every accepted token, in declaration order.
            pub const TOKENS: &'static [&'static str] = &[$($token),+];

            /// Returns the string token for this member.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Iterates over every member in declaration order.
            pub fn iter() -> impl Iterator<Item = Self> {
                Self::ALL.iter().copied()
            }

            /// Parses a member from its exact token.
            pub fn parse(s: &str) -> Result<Self, $crate::ValidationError> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err($crate::ValidationError::UnknownVariant {
                        type_name: stringify!($name),
                        value: s.to_string(),
                        expected: Self::TOKENS,
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = $crate::ValidationError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<String> for $name {
            fn eq(&self, other: &String) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl PartialEq<$name> for str {
            fn eq(&self, other: &$name) -> bool {
                self == other.as_str()
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }

        impl PartialEq<$name> for String {
            fn eq(&self, other: &$name) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
