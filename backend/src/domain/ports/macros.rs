//! Helper macro generating port error enums with snake_case constructors.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            #[doc = concat!("Construct [`Self::", stringify!($variant), "`].")]
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Constructor generation checks.

    use rstest::rstest;

    define_port_error! {
        pub enum SamplePortError {
            Offline => "offline",
            Rejected { reason: String } => "rejected: {reason}",
            Missing { id: i64 } => "missing {id}",
            Partial { reason: String, id: i64 } => "partial {id}: {reason}",
        }
    }

    #[rstest]
    fn unit_variants_get_argumentless_constructors() {
        assert_eq!(SamplePortError::offline(), SamplePortError::Offline);
    }

    #[rstest]
    fn string_fields_accept_borrowed_text() {
        let err = SamplePortError::rejected("price below zero");
        assert_eq!(err.to_string(), "rejected: price below zero");
    }

    #[rstest]
    fn numeric_fields_accept_convertible_values() {
        let err = SamplePortError::missing(7_i32);
        assert_eq!(err.to_string(), "missing 7");
    }

    #[rstest]
    fn mixed_fields_keep_declaration_order() {
        let err = SamplePortError::partial("lost", 3_i64);
        assert_eq!(err.to_string(), "partial 3: lost");
    }
}
