pub mod error;
pub mod gstin;
pub mod jurisdiction;

// Flat public surface for reference data and identifiers.
pub use error::{GstError, TdsError};
pub use gstin::{is_valid_gstin, state_from_gstin, Gstin};
pub use jurisdiction::{
    codes_for_state, indian_locations, is_indian_location, is_ut_with_ugst, normalize_state_name,
    state_codes, state_name, GST_STATE_CODES, UT_WITH_UGST,
};
