use std::fmt;

use serde::Deserialize;

use crate::{errors::SubmissionError, utils};

/// Raw card values as typed in the form. Never persisted.
#[derive(Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CardFields {
    pub number: String,
    /// `MM/YY`
    pub expiry: String,
    pub cvc: String,
}

impl fmt::Debug for CardFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardFields")
            .field("number", &utils::mask_tail(&self.number_digits()))
            .field("expiry", &self.expiry)
            .field("cvc", &"***")
            .finish()
    }
}

impl CardFields {
    pub fn new(number: &str, expiry: &str, cvc: &str) -> Self {
        Self {
            number: number.to_string(),
            expiry: expiry.to_string(),
            cvc: cvc.to_string(),
        }
    }

    /// Card number without the spaces the input widget groups digits with
    pub fn number_digits(&self) -> String {
        self.number.replace(' ', "")
    }

    /// Splits `MM/YY` into `(month, year)`
    pub fn expiry_parts(&self) -> Result<(String, String), SubmissionError> {
        let (month, year) = self.expiry.split_once('/').ok_or_else(|| {
            SubmissionError::InvalidCardFields(format!(
                "expiry must look like MM/YY, got {:?}",
                self.expiry
            ))
        })?;

        let (month, year) = (month.trim(), year.trim());
        if month.is_empty() || year.is_empty() {
            return Err(SubmissionError::InvalidCardFields(
                "expiry month and year are required".into(),
            ));
        }

        Ok((month.to_string(), year.to_string()))
    }

    /// Key/value pairs of the `application/x-www-form-urlencoded` token request
    pub fn to_form_pairs(&self) -> Result<Vec<(&'static str, String)>, SubmissionError> {
        let (exp_month, exp_year) = self.expiry_parts()?;

        Ok(vec![
            ("card[number]", self.number_digits()),
            ("card[exp_month]", exp_month),
            ("card[exp_year]", exp_year),
            ("card[cvc]", self.cvc.clone()),
        ])
    }
}

/// What the card input widget reports on every change
#[derive(Deserialize, Debug, Clone, Default)]
pub struct CardFormInput {
    pub values: CardFields,
    #[serde(default)]
    pub valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_pairs_strip_spaces_and_split_expiry() {
        let card = CardFields::new("4242 4242 4242 4242", "12/29", "123");

        let pairs = card.to_form_pairs().unwrap();

        assert_eq!(
            pairs,
            vec![
                ("card[number]", "4242424242424242".to_string()),
                ("card[exp_month]", "12".to_string()),
                ("card[exp_year]", "29".to_string()),
                ("card[cvc]", "123".to_string()),
            ]
        );
    }

    #[test]
    fn test_expiry_parts_trims_whitespace() {
        let card = CardFields::new("4242424242424242", " 01 / 30 ", "123");
        assert_eq!(card.expiry_parts().unwrap(), ("01".into(), "30".into()));
    }

    #[test]
    fn test_expiry_without_separator_is_rejected() {
        let card = CardFields::new("4242424242424242", "1229", "123");
        assert!(matches!(
            card.to_form_pairs(),
            Err(SubmissionError::InvalidCardFields(_))
        ));
    }

    #[test]
    fn test_expiry_with_empty_year_is_rejected() {
        let card = CardFields::new("4242424242424242", "12/", "123");
        assert!(card.expiry_parts().is_err());
    }

    #[test]
    fn test_debug_hides_number_and_cvc() {
        let card = CardFields::new("4242 4242 4242 4242", "12/29", "987");
        let debug = format!("{:?}", card);

        assert!(!debug.contains("4242424242424242"));
        assert!(!debug.contains("987"));
        assert!(debug.contains("************4242"));
    }

    #[test]
    fn test_form_input_deserialization() {
        let json = r#"{"values":{"number":"4242 4242 4242 4242","expiry":"12/29","cvc":"123"},"valid":true}"#;
        let input: CardFormInput = serde_json::from_str(json).unwrap();

        assert!(input.valid);
        assert_eq!(input.values.expiry, "12/29");
    }
}
