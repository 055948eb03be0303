//! Options builders
//!
//! Every service operation takes one `<Operation>Options` value. The
//! `watson_options!` macro generates the struct, a `new` constructor taking
//! the required parameters, one fluent setter per optional parameter and a
//! `header` method for per-call headers.
//!
//! Optional parameters are stored as `Option<T>`; use `i64`/`f64` for numbers
//! so integer and float literals convert without annotations.

macro_rules! watson_options {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident : $rty:ty ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident : $oty:ty ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $name {
            $( $(#[$rmeta])* pub $rfield: $rty, )*
            $( $(#[$ometa])* pub $ofield: Option<$oty>, )*
            /// Headers sent with this call only
            pub headers: std::collections::HashMap<String, String>,
        }

        impl $name {
            /// Create the options with every required parameter
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $rfield: impl Into<$rty> ),*) -> Self {
                Self {
                    $( $rfield: $rfield.into(), )*
                    ..Default::default()
                }
            }

            $(
                $(#[$ometa])*
                pub fn $ofield(mut self, value: impl Into<$oty>) -> Self {
                    self.$ofield = Some(value.into());
                    self
                }
            )*

            /// Add a header to this call
            pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }
    };
}

pub(crate) use watson_options;
