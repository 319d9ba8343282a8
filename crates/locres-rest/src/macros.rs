//! Macros that capture the raising site's file and line.

/// Build a client-caused [`StructuredError`](crate::StructuredError) at the current location.
///
/// # Examples
///
/// ```rust
/// use locres_common::ResourceKey;
/// use locres_rest::client_error;
///
/// const APPROVAL: ResourceKey = ResourceKey::from_static("efast.err.in.approval");
///
/// let err = client_error!("eofs", APPROVAL);
/// assert!(err.is_client());
/// assert_eq!(err.line(), line!() - 2);
/// ```
#[macro_export]
macro_rules! client_error {
    ($tag:expr, $key:expr $(,)?) => {
        $crate::StructuredError::client(file!(), line!(), $tag, $key)
    };
}

/// Build a server-caused [`StructuredError`](crate::StructuredError) at the current location.
#[macro_export]
macro_rules! server_error {
    ($tag:expr, $key:expr $(,)?) => {
        $crate::StructuredError::server(file!(), line!(), $tag, $key)
    };
}

/// Build a conflict (client-caused) [`StructuredError`](crate::StructuredError) at the current location.
#[macro_export]
macro_rules! conflict_error {
    ($tag:expr, $key:expr $(,)?) => {
        $crate::StructuredError::conflict(file!(), line!(), $tag, $key)
    };
}

/// Return early with a client-caused error.
///
/// # Examples
///
/// ```rust
/// use locres_common::ResourceKey;
/// use locres_rest::{bail_client, StructuredResult};
///
/// const INVALID_AMOUNT: ResourceKey = ResourceKey::from_static("efast.err.in.amount");
///
/// fn check_amount(amount: i64) -> StructuredResult<i64> {
///     if amount < 0 {
///         bail_client!("amount", INVALID_AMOUNT);
///     }
///     Ok(amount)
/// }
///
/// assert!(check_amount(-1).unwrap_err().is_client());
/// ```
#[macro_export]
macro_rules! bail_client {
    ($tag:expr, $key:expr $(,)?) => {
        return Err($crate::client_error!($tag, $key).into())
    };
}

/// Return early with a server-caused error.
#[macro_export]
macro_rules! bail_server {
    ($tag:expr, $key:expr $(,)?) => {
        return Err($crate::server_error!($tag, $key).into())
    };
}
