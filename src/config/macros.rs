/// Configuration macros for single-declaration config sections
///
/// `config_struct!` defines a section with its field types and default
/// values in one place, and generates:
/// - The struct with public fields
/// - The `Default` implementation from the declared values
/// - Serde support with `#[serde(default)]`, so any field may be omitted
///   from the JSON file
///
/// # Example
/// ```ignore
/// config_struct! {
///     pub struct CollectionConfig {
///         name: String = "Bullievers".to_string(),
///         mint_amount: u64 = 1,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }
    };
}
