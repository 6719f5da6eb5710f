//! GST split and TDS gross-up calculations for Indian commercial transactions.
//!
//! ```
//! use gstc::{calculate_gst_from_gstin, calculate_tds, GstDirection, DEFAULT_GST_RATE};
//! use rust_decimal_macros::dec;
//!
//! let sale = calculate_gst_from_gstin(
//!     "33ABCDE1234F1Z5", // Tamil Nadu
//!     "04ABCDE5678K1Z1", // Chandigarh
//!     dec!(1500),
//!     DEFAULT_GST_RATE,
//!     GstDirection::Output,
//! )?;
//! assert_eq!(sale.gst.igst, dec!(270));
//! assert_eq!(sale.gst.gross_amount, dec!(1770));
//!
//! let receipt = calculate_tds(dec!(9800), dec!(2))?;
//! assert_eq!(receipt.gross, dec!(10000));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod core;
pub mod tax;

pub use crate::core::{GstError, Gstin, TdsError};
pub use crate::tax::{
    calculate_gst, calculate_gst_from_gstin, calculate_tds, GstDirection, GstRegime, GstResult,
    GstinGstResult, TdsResult, DEFAULT_GST_RATE, DEFAULT_TDS_PERCENT,
};
