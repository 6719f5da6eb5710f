pub mod gst;
pub mod tds;

pub use gst::{
    calculate_gst, calculate_gst_from_gstin, GstDirection, GstRegime, GstResult, GstinGstResult,
    DEFAULT_GST_RATE,
};
pub use tds::{calculate_tds, TdsResult, DEFAULT_TDS_PERCENT};
