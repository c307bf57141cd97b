use serde::Deserialize;

use fittrack_model::calculator::{ActivityLevel, CalculatorInput, CalculatorResult, Sex};

const PROTEIN_SHARE: f64 = 0.30;
const CARBS_SHARE: f64 = 0.40;
const FAT_SHARE: f64 = 0.30;

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

const DEFICIT_KCAL: i64 = 500;
const SURPLUS_KCAL: i64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("{0} must be a number")]
    NotNumeric(&'static str),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("unknown sex: {0}")]
    UnknownSex(String),
    #[error("unknown activity level: {0}")]
    UnknownActivityLevel(String),
}

/// Raw string-typed calculator fields, as submitted by a caller. All
/// validation happens in [`CalculatorForm::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculatorForm {
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub activity: Option<String>,
}

impl CalculatorForm {
    pub fn validate(&self) -> Result<CalculatorInput, ValidationError> {
        let age = parse_positive_int(&self.age, "age")?;
        let sex_raw = required(&self.sex, "sex")?;
        let sex = sex_raw
            .parse::<Sex>()
            .map_err(|_| ValidationError::UnknownSex(sex_raw.to_string()))?;
        let weight_kg = parse_positive_float(&self.weight, "weight")?;
        let height_cm = parse_positive_float(&self.height, "height")?;
        let activity_raw = required(&self.activity, "activity")?;
        let activity = activity_raw
            .parse::<ActivityLevel>()
            .map_err(|_| ValidationError::UnknownActivityLevel(activity_raw.to_string()))?;

        Ok(CalculatorInput {
            age,
            sex,
            weight_kg,
            height_cm,
            activity,
        })
    }
}

fn required<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ValidationError> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(ValidationError::MissingField(name))
}

fn parse_positive_int(
    field: &Option<String>,
    name: &'static str,
) -> Result<u32, ValidationError> {
    let value: u32 = required(field, name)?
        .parse()
        .map_err(|_| ValidationError::NotNumeric(name))?;
    if value == 0 {
        return Err(ValidationError::NotPositive(name));
    }
    Ok(value)
}

fn parse_positive_float(
    field: &Option<String>,
    name: &'static str,
) -> Result<f64, ValidationError> {
    let value: f64 = required(field, name)?
        .parse()
        .map_err(|_| ValidationError::NotNumeric(name))?;
    if !value.is_finite() {
        return Err(ValidationError::NotNumeric(name));
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive(name));
    }
    Ok(value)
}

/// Compute daily energy and macro targets from validated biometrics.
///
/// BMR follows the Mifflin-St Jeor equation; TDEE scales it by the
/// activity multiplier. Deterministic and side-effect free.
pub fn compute(input: &CalculatorInput) -> CalculatorResult {
    let bmr = basal_metabolic_rate(input);
    let tdee = bmr * input.activity.multiplier();

    let protein_g = tdee * PROTEIN_SHARE / KCAL_PER_G_PROTEIN;
    let carbs_g = tdee * CARBS_SHARE / KCAL_PER_G_CARBS;
    let fat_g = tdee * FAT_SHARE / KCAL_PER_G_FAT;

    let tdee_rounded = tdee.round() as i64;
    CalculatorResult {
        bmr: bmr.round() as i64,
        tdee: tdee_rounded,
        deficit_target: tdee_rounded - DEFICIT_KCAL,
        surplus_target: tdee_rounded + SURPLUS_KCAL,
        protein_g: protein_g.round() as i64,
        carbs_g: carbs_g.round() as i64,
        fat_g: fat_g.round() as i64,
        input: *input,
    }
}

fn basal_metabolic_rate(input: &CalculatorInput) -> f64 {
    let base = 10.0 * input.weight_kg + 6.25 * input.height_cm - 5.0 * input.age as f64;
    match input.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}
