//! Text-backed enums shared by the domain model and the database layer.
//!
//! Every status, priority and kind in shiftdesk is stored as the exact text the
//! facility staff see ("In Progress", "On-Duty", ...). The [`text_enum!`]
//! macro generates the mapping in both directions so the strings live in one
//! place per type.

use thiserror::Error;

/// Raised when stored or user-supplied text names no known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Declares a fieldless enum together with its canonical text form.
///
/// Generates `as_str`, `from_db_str`, `ALL`, `Display` and `FromStr`.
/// `FromStr` also accepts the variant text case-insensitively so command-line
/// input like `urgent` or `in-progress` resolves.
#[macro_export]
macro_rules! text_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* #[serde(rename = $text)] $variant ),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn from_db_str(value: &str) -> Option<Self> {
                match value {
                    $($text => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::libs::variant::UnknownVariant;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                if let Some(found) = Self::from_db_str(value) {
                    return Ok(found);
                }
                let wanted = $crate::libs::variant::normalize(value);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::libs::variant::normalize(v.as_str()) == wanted)
                    .ok_or_else(|| $crate::libs::variant::UnknownVariant {
                        kind: $kind,
                        value: value.to_string(),
                    })
            }
        }
    };
}

/// Lowercases and strips separators: `"In Progress"`, `"in-progress"` and
/// `"IN_PROGRESS"` all become `"inprogress"`.
#[doc(hidden)]
pub fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
