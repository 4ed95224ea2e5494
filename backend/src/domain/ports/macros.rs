//! Helper macro generating the error enums of the read-only driven ports.
//!
//! Every content-store port fails in one of two ways: the store cannot be
//! reached, or a query (including row decoding) fails. The macro emits both
//! variants with `impl Into<String>` constructors so adapters can write
//! `HotelRepositoryError::query("...")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident : $subject:literal;
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            /// The content store could not be reached.
            #[error("{subject} connection failed: {message}", subject = $subject)]
            Connection { message: String },
            /// A query failed during execution or row conversion.
            #[error("{subject} query failed: {message}", subject = $subject)]
            Query { message: String },
        }

        impl $name {
            pub fn connection(message: impl Into<String>) -> Self {
                Self::Connection {
                    message: message.into(),
                }
            }

            pub fn query(message: impl Into<String>) -> Self {
                Self::Query {
                    message: message.into(),
                }
            }
        }
    };
}

pub(crate) use define_port_error;
