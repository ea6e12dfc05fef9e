/// Declares one vocabulary axis: the enum, its code table, and a
/// case-insensitive index that also knows the deprecated aliases.
macro_rules! subtag_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $code:literal,)+
        }
        aliases {
            $($alias:literal => $target:ident,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                #[doc = concat!("`", $code, "`")]
                $variant,
            )+
        }

        impl $name {
            /// Every registered value, in registry order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The registered code in canonical casing.
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Resolves a subtag case-insensitively, reporting whether a
            /// deprecated alias was followed to reach the result.
            pub fn lookup(code: &str) -> Option<$crate::Lookup<Self>> {
                static INDEX: std::sync::LazyLock<
                    std::collections::HashMap<String, $crate::Lookup<$name>>,
                > = std::sync::LazyLock::new(|| {
                    $crate::build_index(
                        $name::ALL.iter().map(|&value| (value.code(), value)),
                        &[$(($alias, $name::$target)),*],
                    )
                });
                INDEX.get(&code.to_ascii_lowercase()).copied()
            }

            /// Resolves a subtag case-insensitively, following deprecated
            /// aliases transparently.
            pub fn from_code(code: &str) -> Option<Self> {
                Self::lookup(code).map($crate::Lookup::value)
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.code()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}
