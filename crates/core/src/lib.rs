pub mod fuel {
    use std::fmt;

    use chrono::Local;
    use serde::{Deserialize, Serialize};
    use thiserror::Error;

    /// Ethanol is worth buying while it costs at most this fraction of the
    /// gasoline price; above it the lower energy content per liter eats the
    /// discount.
    pub const ADVANTAGE_RATIO: f64 = 0.7;

    /// Which of the two price fields an input error refers to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Field {
        Ethanol,
        Gasoline,
    }

    impl fmt::Display for Field {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Field::Ethanol => f.write_str("ethanol"),
                Field::Gasoline => f.write_str("gasoline"),
            }
        }
    }

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum CompareError {
        #[error("{0} price is empty")]
        Empty(Field),
        #[error("{0} price is not a number")]
        NotANumber(Field),
        #[error("{0} price must be greater than zero")]
        NotPositive(Field),
    }

    /// Verdict of one comparison. Serializes as the verdict sentence stored
    /// in the history file.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub enum Outcome {
        #[serde(rename = "Ethanol is the better buy")]
        Ethanol,
        #[serde(rename = "Gasoline is the better buy")]
        Gasoline,
    }

    impl Outcome {
        pub fn label(self) -> &'static str {
            match self {
                Outcome::Ethanol => "Ethanol is the better buy",
                Outcome::Gasoline => "Gasoline is the better buy",
            }
        }
    }

    fn parse_price(raw: &str, field: Field) -> Result<f64, CompareError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CompareError::Empty(field));
        }
        // Pump prices are often typed with a decimal comma.
        let v: f64 = s
            .replace(',', ".")
            .parse()
            .map_err(|_| CompareError::NotANumber(field))?;
        if !v.is_finite() || v <= 0.0 {
            return Err(CompareError::NotPositive(field));
        }
        Ok(v)
    }

    /// Compare two pump prices as entered by the user.
    ///
    /// Both inputs are validated before the ratio is taken; an invalid
    /// field is reported instead of silently producing no verdict. The
    /// boundary is inclusive: a ratio of exactly [`ADVANTAGE_RATIO`] still
    /// favors ethanol.
    pub fn compare(ethanol: &str, gasoline: &str) -> Result<Outcome, CompareError> {
        let e = parse_price(ethanol, Field::Ethanol)?;
        let g = parse_price(gasoline, Field::Gasoline)?;
        if e / g <= ADVANTAGE_RATIO {
            Ok(Outcome::Ethanol)
        } else {
            Ok(Outcome::Gasoline)
        }
    }

    /// One past comparison, in the shape it is stored on disk.
    ///
    /// Prices keep the text the user entered; `recorded_at` is a local
    /// date-time string fixed at creation. Records are never mutated after
    /// construction.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ComparisonRecord {
        #[serde(rename = "alcool")]
        pub ethanol: String,
        #[serde(rename = "gasolina")]
        pub gasoline: String,
        #[serde(rename = "resultado")]
        pub outcome: Outcome,
        #[serde(rename = "data")]
        pub recorded_at: String,
    }

    impl ComparisonRecord {
        /// Build a record stamped with the current local time.
        pub fn new(ethanol: &str, gasoline: &str, outcome: Outcome) -> Self {
            Self {
                ethanol: ethanol.trim().to_string(),
                gasoline: gasoline.trim().to_string(),
                outcome,
                recorded_at: Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
            }
        }
    }
}
