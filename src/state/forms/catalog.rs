//! The property attribute fields collected by the prediction form

use super::field::FieldDeclaration;
use std::collections::HashMap;

const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const NEIGHBOURHOODS: &[&str] = &[
    "Charleswood",
    "Crescentwood",
    "East Kildonan",
    "Fort Garry",
    "Fort Richmond",
    "Garden City",
    "Osborne Village",
    "River Heights",
    "St. Boniface",
    "St. James",
    "St. Vital",
    "Transcona",
    "Tuxedo",
    "West Kildonan",
    "Wolseley",
];

const ZONES: &[&str] = &["R1-L", "R1-M", "R1-S", "R2", "RMF-S", "RMF-M", "PR1", "M1"];

const STREET_TYPES: &[&str] = &[
    "Avenue",
    "Bay",
    "Boulevard",
    "Court",
    "Cove",
    "Crescent",
    "Drive",
    "Lane",
    "Place",
    "Road",
    "Street",
    "Way",
];

const BUILDING_TYPES: &[&str] = &[
    "Bi-Level",
    "Bungalow",
    "Cabover",
    "One & 1/2 Storey",
    "Split Level",
    "Three Storey",
    "Two & 1/2 Storey",
    "Two Storey",
];

const MARKET_REGIONS: &[&str] = &[
    "Central Winnipeg",
    "North East Winnipeg",
    "North West Winnipeg",
    "South East Winnipeg",
    "South West Winnipeg",
];

const PROPERTY_USE_CODES: &[&str] = &[
    "RESDU - DUPLEX",
    "RESMB - RESIDENTIAL MULTIPLE BUILDINGS",
    "RESSD - DETACHED SINGLE DWELLING",
    "RESSS - SIDE BY SIDE",
];

/// All fields in display order: checkboxes, then numeric inputs, then dropdowns.
pub fn property_fields() -> Vec<FieldDeclaration> {
    vec![
        FieldDeclaration::boolean("Pool"),
        FieldDeclaration::boolean("Basement"),
        FieldDeclaration::boolean("Basement Finish"),
        FieldDeclaration::boolean("Fireplace"),
        FieldDeclaration::boolean("Attached Garage"),
        FieldDeclaration::boolean("Detached Garage"),
        FieldDeclaration::boolean("Air Conditioning"),
        FieldDeclaration::boolean("Multiple Residences"),
        FieldDeclaration::numeric("Rooms", 0, Some(100)),
        FieldDeclaration::numeric("Year Built", 1850, Some(2022)),
        FieldDeclaration::numeric("Total Living Area (sq.ft)", 0, None),
        FieldDeclaration::numeric("Assessed Land Area (sq.ft)", 0, None),
        FieldDeclaration::numeric("Total Assessed Value", 0, None),
        FieldDeclaration::numeric("Sewer Frontage Measurement", 0, None),
        FieldDeclaration::numeric("Water Frontage Measurement", 0, None),
        FieldDeclaration::categorical("Neighbourhood Area", NEIGHBOURHOODS),
        FieldDeclaration::categorical("Zoning", ZONES),
        FieldDeclaration::categorical("Sale Month", MONTHS),
        FieldDeclaration::categorical("Street Type", STREET_TYPES),
        FieldDeclaration::categorical("Building Type", BUILDING_TYPES),
        FieldDeclaration::categorical("Market Region", MARKET_REGIONS),
        FieldDeclaration::categorical("Property Use Code", PROPERTY_USE_CODES),
    ]
}

/// The property fields with categorical suggestion lists replaced from
/// configuration. Overrides naming unknown fields are skipped.
pub fn property_fields_with_options(
    overrides: &HashMap<String, Vec<String>>,
) -> Vec<FieldDeclaration> {
    let mut fields = property_fields();
    for (name, options) in overrides {
        match fields.iter_mut().find(|f| &f.name == name) {
            Some(field) => field.set_options(options.clone()),
            None => tracing::warn!("Ignoring option override for unknown field {name:?}"),
        }
    }
    fields
}
