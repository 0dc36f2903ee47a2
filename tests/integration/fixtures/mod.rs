// Test fixtures with known glossaries, inputs and expected matches
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// Place names with nested and overlapping entries
pub const CITY_GLOSSARY: &[&str] = &[
    "New York",
    "New York City",
    "York",
    "San Francisco",
    "Los Angeles",
    "Angeles",
];

/// Text mentioning several glossary entries, some nested
pub const CITY_TEXT: &str = "Flights from New York City to San Francisco \
    and then Los Angeles via new york";

/// Expected matches for CITY_TEXT with ngrams=3, case-insensitive
/// Format: value<TAB>(start,end); width-1 hits first, then width 2, then width 3
pub const CITY_EXPECTED: &str = "York\t(3,4)
Angeles\t(11,12)
York\t(14,15)
New York\t(2,4)
San Francisco\t(6,8)
Los Angeles\t(10,12)
New York\t(13,15)
New York City\t(2,5)";
