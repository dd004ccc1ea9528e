/// Number of columns in the canonical training schema.
pub const FEATURE_COUNT: usize = 19;

/// Canonical feature columns, in the order the bundled model was trained on.
/// A schema artifact on disk may reorder or subset these; the encoder always
/// projects onto whatever schema it is handed.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "Pclass",
    "Sex_male",
    "Embarked_Q",
    "Embarked_S",
    "Fare_log",
    "SibSp_clean",
    "Parch_clean",
    "Title_Mr",
    "Title_Mrs",
    "Title_Miss",
    "Title_Master",
    "Title_Rare",
    "AgeGroup_Child",      // [0, 12)
    "AgeGroup_Teen",       // [12, 18)
    "AgeGroup_YoungAdult", // [18, 35)
    "AgeGroup_Adult",      // [35, 60)
    "AgeGroup_Senior",     // [60, ∞)
    "FamilySize",
    "IsAlone",
];
