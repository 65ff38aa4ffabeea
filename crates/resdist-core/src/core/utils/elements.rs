use phf::{Map, phf_map};

/// Standard atomic weights keyed by upper-case element symbol.
static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "H" => 1.00794, "D" => 2.014101779, "HE" => 4.002602,
    "LI" => 6.941, "BE" => 9.012182, "B" => 10.811, "C" => 12.0107,
    "N" => 14.0067, "O" => 15.9994, "F" => 18.9984032, "NE" => 20.1797,
    "NA" => 22.98976928, "MG" => 24.3050, "AL" => 26.9815386, "SI" => 28.0855,
    "P" => 30.973762, "S" => 32.065, "CL" => 35.453, "AR" => 39.948,
    "K" => 39.0983, "CA" => 40.078, "SC" => 44.955912, "TI" => 47.867,
    "V" => 50.9415, "CR" => 51.9961, "MN" => 54.938045, "FE" => 55.845,
    "CO" => 58.933195, "NI" => 58.6934, "CU" => 63.546, "ZN" => 65.38,
    "GA" => 69.723, "GE" => 72.64, "AS" => 74.92160, "SE" => 78.96,
    "BR" => 79.904, "KR" => 83.798, "RB" => 85.4678, "SR" => 87.62,
    "Y" => 88.90585, "ZR" => 91.224, "MO" => 95.96, "RU" => 101.07,
    "RH" => 102.90550, "PD" => 106.42, "AG" => 107.8682, "CD" => 112.411,
    "IN" => 114.818, "SN" => 118.710, "SB" => 121.760, "TE" => 127.60,
    "I" => 126.90447, "XE" => 131.293, "CS" => 132.9054519, "BA" => 137.327,
    "LA" => 138.90547, "GD" => 157.25, "YB" => 173.054, "W" => 183.84,
    "RE" => 186.207, "OS" => 190.23, "IR" => 192.217, "PT" => 195.084,
    "AU" => 196.966569, "HG" => 200.59, "TL" => 204.3833, "PB" => 207.2,
    "BI" => 208.98040, "U" => 238.02891,
};

/// Looks up the standard atomic weight of an element symbol (case-insensitive).
pub fn atomic_mass(symbol: &str) -> Option<f64> {
    ATOMIC_MASSES
        .get(symbol.trim().to_ascii_uppercase().as_str())
        .copied()
}

pub fn is_known_element(symbol: &str) -> bool {
    atomic_mass(symbol).is_some()
}

/// Guesses the element of an atom from its raw, column-aligned PDB name field.
///
/// PDB aligns one-letter elements to column 14, so a name whose first column is
/// a letter (e.g. `"FE  "`) names a multi-letter element, unless the remainder is
/// a numeric suffix (e.g. `"HG21"`). Otherwise the first letter of the trimmed name,
/// skipping a leading digit (e.g. `"1HB "`), is the element.
pub fn infer_element_from_atom_name(raw_name: &str) -> Option<String> {
    let trimmed = raw_name.trim();
    if trimmed.is_empty() {
        return None;
    }

    let first = raw_name.chars().next()?;
    let suffix = raw_name.get(2..).unwrap_or("").trim();
    let suffix_is_numeric = !suffix.is_empty() && suffix.chars().all(|c| c.is_ascii_digit());

    let candidate = if first.is_ascii_alphabetic() && !suffix_is_numeric {
        trimmed.to_string()
    } else {
        let mut chars = trimmed.chars();
        let lead = chars.next()?;
        let symbol = if lead.is_ascii_digit() {
            chars.next()?
        } else {
            lead
        };
        symbol.to_string()
    };

    let candidate = candidate.to_ascii_uppercase();
    is_known_element(&candidate).then_some(candidate)
}
