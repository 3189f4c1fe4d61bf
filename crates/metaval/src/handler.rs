//! The capability contract every type handler implements.

use crate::error::{DeserializeError, SerializeError};
use crate::value::{MetaValue, NumericValue};

/// The storable representation of a value. Strings are the only storage
/// form; binary payloads are base64-wrapped by their handlers.
pub type SerializedForm = String;

/// A stateless strategy that validates, serializes, deserializes, and
/// projects values of one declared type.
///
/// Contract:
/// - [`data_type`](TypeHandler::data_type) is a fixed tag; exactly one
///   handler claims each tag in a registry.
/// - [`can_handle`](TypeHandler::can_handle) is total and exact: values
///   that merely coerce are rejected (numeric strings are not numbers,
///   integers are not floats, `1`/`0`/`""`/`[]`/null are not booleans).
/// - [`serialize`](TypeHandler::serialize) fails iff `can_handle` is false.
/// - [`unserialize`](TypeHandler::unserialize) fails on malformed input and
///   otherwise reconstructs a value equal to the original under the
///   handler's idempotence contract.
/// - The complex-indexing flag is threaded into
///   [`string_value`](TypeHandler::string_value) explicitly; it never
///   affects `serialize`/`unserialize`.
pub trait TypeHandler: Send + Sync + std::fmt::Debug {
    /// The fixed tag stored alongside serialized payloads.
    fn data_type(&self) -> &'static str;

    /// Whether this handler owns `value`. Total; never fails.
    fn can_handle(&self, value: &MetaValue) -> bool;

    /// Converts an owned value to its storable form.
    fn serialize(&self, value: &MetaValue) -> Result<SerializedForm, SerializeError>;

    /// Reconstructs a value from its storable form.
    fn unserialize(&self, form: &str) -> Result<MetaValue, DeserializeError>;

    /// Best-effort numeric projection; `None` when no meaningful numeric
    /// representation exists.
    fn numeric_value(&self, value: &MetaValue) -> Option<NumericValue>;

    /// String projection for indexing/search. `index_complex_types` is the
    /// process-wide policy flag, snapshotted by the caller at projection
    /// time.
    fn string_value(&self, value: &MetaValue, index_complex_types: bool) -> Option<String>;

    /// True iff `unserialize(serialize(v))` is strictly equal to `v` for
    /// every accepted `v`. A fixed per-handler constant.
    fn is_idempotent(&self) -> bool {
        true
    }
}
