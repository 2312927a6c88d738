//! The field dictionary for one filled Licence 'A' instrument.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Every named datum interpolated into the licence.
///
/// Field names match the placeholders used by the text templates, so the
/// record serializes straight into a template context. All fields are
/// required; deserializing a dictionary with a missing key fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseFields {
    // Licensee (2nd Party)
    pub licensee_name: String,
    pub licensee_address: String,

    // Plot
    pub plot_area: String,
    pub plot_number: String,
    pub survey_sheet_number: String,

    // Boundaries
    pub north_boundary: String,
    pub south_boundary: String,
    pub east_boundary: String,
    pub west_boundary: String,

    // Administrative references
    pub police_station: String,
    pub territorial_division: String,
    pub land_size: String,
    pub deh: String,

    // KPT lease registration
    pub sub_registrar: String,
    pub kpt_book_no: String,
    pub kpt_book_date: NaiveDate,
    pub kpt_mf_roll_no: String,
    pub kpt_mf_roll_date: NaiveDate,

    // Payment
    pub premium_rate: Decimal,
    pub ground_rent_rate: Decimal,

    // Allotment / transfer
    pub transfer_order_no: String,
    pub transfer_order_date: NaiveDate,

    // Witnesses
    pub witness1_name: String,
    pub witness1_address: String,
    pub witness1_cnic: String,
    pub witness2_name: String,
    pub witness2_address: String,
    pub witness2_cnic: String,
}

impl LicenseFields {
    /// The form's default values, with every date set to `today`.
    pub fn sample(today: NaiveDate) -> Self {
        Self {
            licensee_name: "Muhammad Ahmed".to_string(),
            licensee_address: "House No. 123, Street 45\nPhase 6, DHA\nKarachi, Pakistan"
                .to_string(),
            plot_area: "500".to_string(),
            plot_number: "A-123".to_string(),
            survey_sheet_number: "SS-456".to_string(),
            north_boundary: "Plot A-124".to_string(),
            south_boundary: "Road 5".to_string(),
            east_boundary: "Plot A-122".to_string(),
            west_boundary: "30ft Road".to_string(),
            police_station: "Defence Police Station".to_string(),
            territorial_division: "South District".to_string(),
            land_size: "0.25".to_string(),
            deh: "Defence Phase 6".to_string(),
            sub_registrar: "DHA Sub-Registrar Office".to_string(),
            kpt_book_no: "KPT-2024-001".to_string(),
            kpt_book_date: today,
            kpt_mf_roll_no: "MF-2024-001".to_string(),
            kpt_mf_roll_date: today,
            premium_rate: Decimal::new(500_000, 2),
            ground_rent_rate: Decimal::new(5_000, 2),
            transfer_order_no: "TO-2024-001".to_string(),
            transfer_order_date: today,
            witness1_name: "Muhammad Ali".to_string(),
            witness1_address: "456 DHA Phase 2\nKarachi, Pakistan".to_string(),
            witness1_cnic: "42201-1234567-8".to_string(),
            witness2_name: "Ahmed Khan".to_string(),
            witness2_address: "789 DHA Phase 3\nKarachi, Pakistan".to_string(),
            witness2_cnic: "42201-8765432-1".to_string(),
        }
    }

    /// All free-text fields paired with their names, in form order.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("licensee_name", &self.licensee_name),
            ("licensee_address", &self.licensee_address),
            ("plot_area", &self.plot_area),
            ("plot_number", &self.plot_number),
            ("survey_sheet_number", &self.survey_sheet_number),
            ("north_boundary", &self.north_boundary),
            ("south_boundary", &self.south_boundary),
            ("east_boundary", &self.east_boundary),
            ("west_boundary", &self.west_boundary),
            ("police_station", &self.police_station),
            ("territorial_division", &self.territorial_division),
            ("land_size", &self.land_size),
            ("deh", &self.deh),
            ("sub_registrar", &self.sub_registrar),
            ("kpt_book_no", &self.kpt_book_no),
            ("kpt_mf_roll_no", &self.kpt_mf_roll_no),
            ("transfer_order_no", &self.transfer_order_no),
            ("witness1_name", &self.witness1_name),
            ("witness1_address", &self.witness1_address),
            ("witness1_cnic", &self.witness1_cnic),
            ("witness2_name", &self.witness2_name),
            ("witness2_address", &self.witness2_address),
            ("witness2_cnic", &self.witness2_cnic),
        ]
    }

    /// Checks that every required field carries a value.
    ///
    /// No cross-field checks are made; boundary descriptions are taken as
    /// given.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyField` for the first blank text field,
    /// or `ValidationError::InvalidFormat` for a negative rate.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some((name, _)) = self
            .text_fields()
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
        {
            return Err(ValidationError::empty_field(name));
        }

        for (name, rate) in [
            ("premium_rate", self.premium_rate),
            ("ground_rent_rate", self.ground_rent_rate),
        ] {
            if rate.is_sign_negative() && !rate.is_zero() {
                return Err(ValidationError::invalid_format(name, "must not be negative"));
            }
        }

        Ok(())
    }
}
