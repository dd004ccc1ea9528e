use crate::constants::FEATURE_COUNT;
use crate::schema::FeatureSchema;
use crate::types::{EmbarkPort, PassengerInput, Sex, Title};

/// An encoded feature vector: `columns[i]` names `values[i]`, in the order
/// the schema declared. Built by `encode`, consumed by the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Look up a value by column name. Linear scan; vectors are short.
    pub fn value(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Encode a validated passenger into the model's feature space, projected
/// onto `schema`.
///
/// Pure and total over the validated input domain: derivation never fails,
/// and reconciliation zero-fills schema columns the derivation did not
/// produce while dropping derived columns the schema does not list. The
/// output's column set and order always equal the schema's.
pub fn encode(input: &PassengerInput, schema: &FeatureSchema) -> FeatureVector {
    let derived = derive(input);
    let values = schema
        .columns()
        .iter()
        .map(|col| {
            derived
                .iter()
                .find(|(name, _)| *name == col.as_str())
                .map_or(0.0, |&(_, v)| v)
        })
        .collect();
    FeatureVector {
        columns: schema.columns().to_vec(),
        values,
    }
}

/// Derive the canonical feature columns from raw attributes, in
/// `FEATURE_COLUMNS` order.
fn derive(input: &PassengerInput) -> [(&'static str, f64); FEATURE_COUNT] {
    // Stratum 1–6 proxies passenger class: low strata travel third.
    let pclass = match input.stratum {
        0..=2 => 3.0,
        3..=4 => 2.0,
        _ => 1.0,
    };

    let sex_male = if input.sex == Sex::Male { 1.0 } else { 0.0 };
    let embarked_q = if input.embarked == EmbarkPort::Q { 1.0 } else { 0.0 };
    let embarked_s = if input.embarked == EmbarkPort::S { 1.0 } else { 0.0 };

    let fare_log = input.fare.ln_1p();

    // Counts are capped before anything downstream uses them; FamilySize
    // and IsAlone come from the cleaned counts, not the raw ones.
    let sibsp_clean = f64::from(input.siblings_spouses.min(3));
    let parch_clean = f64::from(input.parents_children.min(2));
    let family_size = sibsp_clean + parch_clean;
    let is_alone = if family_size == 0.0 { 1.0 } else { 0.0 };

    let one_hot = |t: Title| if input.title == t { 1.0 } else { 0.0 };

    // Half-open intervals, inclusive-low; an exhaustive partition of the
    // non-negative ages, so exactly one indicator fires.
    let age = input.age;
    let age_child = if age < 12 { 1.0 } else { 0.0 };
    let age_teen = if (12..18).contains(&age) { 1.0 } else { 0.0 };
    let age_young_adult = if (18..35).contains(&age) { 1.0 } else { 0.0 };
    let age_adult = if (35..60).contains(&age) { 1.0 } else { 0.0 };
    let age_senior = if age >= 60 { 1.0 } else { 0.0 };

    [
        ("Pclass", pclass),
        ("Sex_male", sex_male),
        ("Embarked_Q", embarked_q),
        ("Embarked_S", embarked_s),
        ("Fare_log", fare_log),
        ("SibSp_clean", sibsp_clean),
        ("Parch_clean", parch_clean),
        ("Title_Mr", one_hot(Title::Mr)),
        ("Title_Mrs", one_hot(Title::Mrs)),
        ("Title_Miss", one_hot(Title::Miss)),
        ("Title_Master", one_hot(Title::Master)),
        ("Title_Rare", one_hot(Title::Rare)),
        ("AgeGroup_Child", age_child),
        ("AgeGroup_Teen", age_teen),
        ("AgeGroup_YoungAdult", age_young_adult),
        ("AgeGroup_Adult", age_adult),
        ("AgeGroup_Senior", age_senior),
        ("FamilySize", family_size),
        ("IsAlone", is_alone),
    ]
}
