use super::errors::ValidationError;
use crate::services::client::{BloodGroup, Donor, DonorDetails};

/// Controlled state shared by the add and edit dialogs
#[derive(Clone, PartialEq, Debug, Default)]
pub struct DonorForm {
    pub name: String,
    pub blood_group: Option<BloodGroup>,
    pub phone_number: String,
}

impl DonorForm {
    /// Edit dialog starts from the donor's current details
    pub fn from_donor(donor: &Donor) -> Self {
        Self {
            name: donor.name.clone(),
            blood_group: Some(donor.blood_group),
            phone_number: donor.phone_number.clone(),
        }
    }

    /// Select value for the blood group (`""` when nothing is picked)
    pub fn blood_group_value(&self) -> &'static str {
        self.blood_group.map(BloodGroup::as_wire).unwrap_or("")
    }

    pub fn set_blood_group(&mut self, value: &str) {
        self.blood_group = value.parse().ok();
    }

    /// Add dialog: every field is required
    pub fn validate_new(&self) -> Result<DonorDetails, ValidationError> {
        let name = self.name.trim();
        let phone_number = self.phone_number.trim();
        match self.blood_group {
            Some(blood_group) if !name.is_empty() && !phone_number.is_empty() => Ok(DonorDetails {
                name: name.to_string(),
                blood_group,
                phone_number: phone_number.to_string(),
            }),
            _ => Err(ValidationError::MissingDonorFields),
        }
    }

    /// Edit dialog: name and phone are checked one at a time
    pub fn validate_edit(&self) -> Result<DonorDetails, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        let phone_number = self.phone_number.trim();
        if phone_number.is_empty() {
            return Err(ValidationError::MissingPhoneNumber);
        }
        let blood_group = self.blood_group.ok_or(ValidationError::MissingDonorFields)?;
        Ok(DonorDetails {
            name: name.to_string(),
            blood_group,
            phone_number: phone_number.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client::{DonorId, DonorStatus};

    #[test]
    fn test_new_donor_requires_every_field() {
        let mut form = DonorForm {
            name: "Saman".to_string(),
            blood_group: None,
            phone_number: "0712345678".to_string(),
        };
        assert_eq!(form.validate_new(), Err(ValidationError::MissingDonorFields));

        form.set_blood_group("B_neg");
        let details = form.validate_new().unwrap();
        assert_eq!(details.blood_group, BloodGroup::BNegative);

        form.phone_number = "   ".to_string();
        assert_eq!(form.validate_new(), Err(ValidationError::MissingDonorFields));
    }

    #[test]
    fn test_edit_trims_and_reports_first_missing_field() {
        let donor = Donor {
            id: DonorId(3),
            name: "Saman".to_string(),
            blood_group: BloodGroup::OPositive,
            phone_number: "0712345678".to_string(),
            status: DonorStatus::Active,
            call_count: 2,
            last_called_date: None,
        };
        let mut form = DonorForm::from_donor(&donor);
        assert_eq!(form.blood_group_value(), "O_pos");

        form.name = "  Saman Kumara ".to_string();
        assert_eq!(form.validate_edit().unwrap().name, "Saman Kumara");

        form.name = " ".to_string();
        form.phone_number = String::new();
        assert_eq!(form.validate_edit(), Err(ValidationError::MissingName));

        form.name = "Saman".to_string();
        assert_eq!(form.validate_edit(), Err(ValidationError::MissingPhoneNumber));
    }

    #[test]
    fn test_unknown_select_value_clears_group() {
        let mut form = DonorForm::default();
        form.set_blood_group("A_pos");
        assert_eq!(form.blood_group, Some(BloodGroup::APositive));
        form.set_blood_group("");
        assert_eq!(form.blood_group, None);
        assert_eq!(form.blood_group_value(), "");
    }
}
