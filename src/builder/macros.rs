//! Macros for ergonomic machine construction.

/// Generate a Status trait implementation for simple enums.
///
/// # Example
///
/// ```
/// use episodic::status_enum;
///
/// status_enum! {
///     pub enum PipelineStatus {
///         Watching,
///         Warning,
///         Alerting,
///     }
/// }
/// ```
#[macro_export]
macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Status for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
