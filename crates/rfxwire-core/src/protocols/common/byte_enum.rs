/// Declare a closed byte-enum with an `Unknown(u8)` fallback.
///
/// Generates `from_byte` (total), `to_byte` (total, `Unknown(b)` gives back
/// `b`), `name`, `from_name`, `DEFINED`, the `u8` conversions, `Display` and
/// a `Serialize` impl writing the protocol name.
macro_rules! byte_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code with no defined symbol; the received byte is kept.
            Unknown(u8),
        }

        impl $name {
            /// Every defined symbol, in declaration order.
            pub const DEFINED: &'static [$name] = &[$($name::$variant),+];

            pub fn from_byte(code: u8) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Unknown(other),
                }
            }

            pub fn to_byte(self) -> u8 {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unknown(code) => code,
                }
            }

            /// Protocol name, `UNKNOWN` for the fallback.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Unknown(_) => "UNKNOWN",
                }
            }

            /// Look up a defined symbol by protocol name, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<Self> {
                Self::DEFINED
                    .iter()
                    .copied()
                    .find(|symbol| symbol.name().eq_ignore_ascii_case(name.trim()))
            }

            pub fn is_unknown(self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl From<u8> for $name {
            fn from(code: u8) -> Self {
                $name::from_byte(code)
            }
        }

        impl From<$name> for u8 {
            fn from(symbol: $name) -> Self {
                symbol.to_byte()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                match self {
                    $name::Unknown(code) => write!(f, "UNKNOWN(0x{:02X})", code),
                    other => f.write_str(other.name()),
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.name())
            }
        }
    };
}

pub(crate) use byte_enum;
