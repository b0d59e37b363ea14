//! The eight numeric health-indicator inputs and their coercion rules.

use serde::Serialize;

/// Identifier for one of the eight form fields, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    /// Number of pregnancies.
    Pregnancies,
    /// Plasma glucose concentration.
    Glucose,
    /// Diastolic blood pressure.
    BloodPressure,
    /// Triceps skin fold thickness.
    SkinThickness,
    /// Serum insulin.
    Insulin,
    /// Body mass index.
    Bmi,
    /// Diabetes pedigree function.
    DiabetesPedigreeFunction,
    /// Age in years.
    Age,
}

impl FieldId {
    /// All fields in the order they appear on the form.
    pub const ALL: [FieldId; 8] = [
        FieldId::Pregnancies,
        FieldId::Glucose,
        FieldId::BloodPressure,
        FieldId::SkinThickness,
        FieldId::Insulin,
        FieldId::Bmi,
        FieldId::DiabetesPedigreeFunction,
        FieldId::Age,
    ];

    /// Display label, identical to the JSON key expected by the service.
    pub fn label(self) -> &'static str {
        match self {
            FieldId::Pregnancies => "Pregnancies",
            FieldId::Glucose => "Glucose",
            FieldId::BloodPressure => "BloodPressure",
            FieldId::SkinThickness => "SkinThickness",
            FieldId::Insulin => "Insulin",
            FieldId::Bmi => "BMI",
            FieldId::DiabetesPedigreeFunction => "DiabetesPedigreeFunction",
            FieldId::Age => "Age",
        }
    }
}

/// The eight numeric inputs submitted to the prediction service.
///
/// Every field always holds a finite number; raw user input only replaces a
/// value after it passes [`parse_input`]. Serializes to the exact JSON object
/// the service expects, one key per field.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FormState {
    #[serde(rename = "Pregnancies")]
    pregnancies: f64,
    #[serde(rename = "Glucose")]
    glucose: f64,
    #[serde(rename = "BloodPressure")]
    blood_pressure: f64,
    #[serde(rename = "SkinThickness")]
    skin_thickness: f64,
    #[serde(rename = "Insulin")]
    insulin: f64,
    #[serde(rename = "BMI")]
    bmi: f64,
    #[serde(rename = "DiabetesPedigreeFunction")]
    diabetes_pedigree_function: f64,
    #[serde(rename = "Age")]
    age: f64,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            pregnancies: 1.0,
            glucose: 100.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 80.0,
            bmi: 25.0,
            diabetes_pedigree_function: 0.5,
            age: 30.0,
        }
    }
}

impl FormState {
    /// Current value of a field.
    pub fn value(&self, field: FieldId) -> f64 {
        match field {
            FieldId::Pregnancies => self.pregnancies,
            FieldId::Glucose => self.glucose,
            FieldId::BloodPressure => self.blood_pressure,
            FieldId::SkinThickness => self.skin_thickness,
            FieldId::Insulin => self.insulin,
            FieldId::Bmi => self.bmi,
            FieldId::DiabetesPedigreeFunction => self.diabetes_pedigree_function,
            FieldId::Age => self.age,
        }
    }

    /// Replace the value of one field, leaving the others untouched.
    pub fn set(&mut self, field: FieldId, value: f64) {
        match field {
            FieldId::Pregnancies => self.pregnancies = value,
            FieldId::Glucose => self.glucose = value,
            FieldId::BloodPressure => self.blood_pressure = value,
            FieldId::SkinThickness => self.skin_thickness = value,
            FieldId::Insulin => self.insulin = value,
            FieldId::Bmi => self.bmi = value,
            FieldId::DiabetesPedigreeFunction => self.diabetes_pedigree_function = value,
            FieldId::Age => self.age = value,
        }
    }
}

/// Coerce raw textual input into a field value.
///
/// Standard decimal parsing on the trimmed input; the form constrains inputs
/// to a minimum of 0, so negative values are rejected along with anything
/// non-finite. `None` means the caller keeps the previous value.
pub fn parse_input(raw: &str) -> Option<f64> {
    let value: f64 = raw.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}
