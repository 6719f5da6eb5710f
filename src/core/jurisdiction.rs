//! Indian states and union territories as they appear in GST registrations.

use std::collections::BTreeSet;
use std::sync::LazyLock;

/// GST state codes, as encoded in the first two digits of a GSTIN.
///
/// Codes 25 and 26 keep their pre-merger names, and 28 and 37 both resolve to
/// Andhra Pradesh (28 predates the bifurcation).
pub static GST_STATE_CODES: [(&str, &str); 38] = [
    ("01", "Jammu and Kashmir"),
    ("02", "Himachal Pradesh"),
    ("03", "Punjab"),
    ("04", "Chandigarh"),
    ("05", "Uttarakhand"),
    ("06", "Haryana"),
    ("07", "Delhi"),
    ("08", "Rajasthan"),
    ("09", "Uttar Pradesh"),
    ("10", "Bihar"),
    ("11", "Sikkim"),
    ("12", "Arunachal Pradesh"),
    ("13", "Nagaland"),
    ("14", "Manipur"),
    ("15", "Mizoram"),
    ("16", "Tripura"),
    ("17", "Meghalaya"),
    ("18", "Assam"),
    ("19", "West Bengal"),
    ("20", "Jharkhand"),
    ("21", "Odisha"),
    ("22", "Chhattisgarh"),
    ("23", "Madhya Pradesh"),
    ("24", "Gujarat"),
    ("25", "Daman and Diu"),
    ("26", "Dadra and Nagar Haveli"),
    ("27", "Maharashtra"),
    ("28", "Andhra Pradesh"),
    ("29", "Karnataka"),
    ("30", "Goa"),
    ("31", "Lakshadweep"),
    ("32", "Kerala"),
    ("33", "Tamil Nadu"),
    ("34", "Puducherry"),
    ("35", "Andaman and Nicobar Islands"),
    ("36", "Telangana"),
    ("37", "Andhra Pradesh"),
    ("38", "Ladakh"),
];

/// Union territories without a legislature. Intra-UT supplies here levy UGST
/// in place of SGST.
pub static UT_WITH_UGST: [&str; 5] = [
    "Andaman and Nicobar Islands",
    "Lakshadweep",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Chandigarh",
    "Ladakh",
];

/// Distinct recognised names, in code-table order, followed by any UGST
/// territory the code table does not name.
static INDIAN_LOCATIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut names: Vec<&'static str> = Vec::new();
    for name in GST_STATE_CODES.iter().map(|(_, name)| *name).chain(UT_WITH_UGST) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
});

static NORMALIZED_LOCATIONS: LazyLock<BTreeSet<String>> = LazyLock::new(|| {
    INDIAN_LOCATIONS
        .iter()
        .map(|name| normalize_state_name(name))
        .collect()
});

static NORMALIZED_UGST_TERRITORIES: LazyLock<BTreeSet<String>> = LazyLock::new(|| {
    UT_WITH_UGST
        .iter()
        .map(|name| normalize_state_name(name))
        .collect()
});

/// Canonicalise a free-text state name for comparison.
///
/// Lowercases, replaces `&` with `and`, collapses whitespace and capitalises
/// the first character of every word, so `"  tamil   NADU "` becomes
/// `"Tamil Nadu"` and `"Jammu & Kashmir"` becomes `"Jammu And Kashmir"`.
/// Normalising an already normalised name leaves it unchanged.
pub fn normalize_state_name(name: &str) -> String {
    let lowered = name.to_lowercase().replace('&', "and");
    lowered
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

// Only uppercase a leading character whose uppercase lowercases back to it;
// `ß` would otherwise become `SS` and then `Ss` on the next pass.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let upper: String = first.to_uppercase().collect();
            let mut capitalized = if upper.to_lowercase().chars().eq([first]) {
                upper
            } else {
                first.to_string()
            };
            capitalized.push_str(chars.as_str());
            capitalized
        }
        None => String::new(),
    }
}

/// Whether `name` is a recognised Indian state or union territory.
pub fn is_indian_location(name: &str) -> bool {
    NORMALIZED_LOCATIONS.contains(&normalize_state_name(name))
}

/// Whether `name` is a union territory that levies UGST instead of SGST.
pub fn is_ut_with_ugst(name: &str) -> bool {
    NORMALIZED_UGST_TERRITORIES.contains(&normalize_state_name(name))
}

/// Look up the state registered under a two-digit GST state code.
pub fn state_name(code: &str) -> Option<&'static str> {
    GST_STATE_CODES
        .iter()
        .find_map(|(c, name)| if *c == code { Some(*name) } else { None })
}

/// All state codes that resolve to `name` (compared after normalisation).
pub fn codes_for_state(name: &str) -> Vec<&'static str> {
    let wanted = normalize_state_name(name);
    GST_STATE_CODES
        .iter()
        .filter(|(_, n)| normalize_state_name(n) == wanted)
        .map(|(code, _)| *code)
        .collect()
}

/// Iterate over the `(code, name)` reference table.
pub fn state_codes() -> impl Iterator<Item = (&'static str, &'static str)> {
    GST_STATE_CODES.iter().copied()
}

/// Distinct recognised state and union territory names.
pub fn indian_locations() -> &'static [&'static str] {
    &INDIAN_LOCATIONS
}
