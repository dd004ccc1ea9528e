use proptest::prelude::*;

use crate::*;

const AGE_GROUPS: [&str; 5] = [
    "AgeGroup_Child",
    "AgeGroup_Teen",
    "AgeGroup_YoungAdult",
    "AgeGroup_Adult",
    "AgeGroup_Senior",
];

#[test]
fn exactly_one_age_group_for_every_age() {
    let schema = FeatureSchema::default();
    for age in 0..=100u8 {
        let input = PassengerInput {
            age,
            ..PassengerInput::default()
        };
        let v = encode(&input, &schema);
        let fired: f64 = AGE_GROUPS.iter().map(|c| v.value(c).unwrap()).sum();
        assert_eq!(fired, 1.0, "age {age}");
    }
}

proptest! {
    #[test]
    fn family_size_identity(sibsp in 0u8..=10, parch in 0u8..=10) {
        let input = PassengerInput {
            siblings_spouses: sibsp,
            parents_children: parch,
            ..PassengerInput::default()
        };
        let v = encode(&input, &FeatureSchema::default());
        let sibsp_clean = v.value("SibSp_clean").unwrap();
        let parch_clean = v.value("Parch_clean").unwrap();
        prop_assert_eq!(sibsp_clean, f64::from(sibsp.min(3)));
        prop_assert_eq!(parch_clean, f64::from(parch.min(2)));
        let family = v.value("FamilySize").unwrap();
        prop_assert_eq!(family, sibsp_clean + parch_clean);
        let is_alone = v.value("IsAlone").unwrap();
        prop_assert_eq!(is_alone, if family == 0.0 { 1.0 } else { 0.0 });
    }

    #[test]
    fn fare_log_is_monotone(a in 0.0f64..=600.0, b in 0.0f64..=600.0) {
        let schema = FeatureSchema::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let v_lo = encode(
            &PassengerInput { fare: lo, ..PassengerInput::default() },
            &schema,
        );
        let v_hi = encode(
            &PassengerInput { fare: hi, ..PassengerInput::default() },
            &schema,
        );
        prop_assert!(v_lo.value("Fare_log").unwrap() <= v_hi.value("Fare_log").unwrap());
    }

    #[test]
    fn output_always_matches_schema(
        mut columns in proptest::collection::vec("[A-Za-z_]{1,12}", 1..24)
    ) {
        columns.sort();
        columns.dedup();
        let schema = FeatureSchema::new(columns.clone()).unwrap();
        let v = encode(&PassengerInput::default(), &schema);
        prop_assert_eq!(v.columns(), columns.as_slice());
        prop_assert_eq!(v.len(), schema.len());
    }

    #[test]
    fn probability_stays_in_unit_interval(
        stratum in 1u8..=6,
        fare in 0.0f64..=600.0,
        age in 0u8..=100,
        sibsp in 0u8..=10,
        parch in 0u8..=10,
    ) {
        let predictor =
            Predictor::new(SurvivalModel::default(), FeatureSchema::default()).unwrap();
        let input = PassengerInput {
            stratum,
            fare,
            age,
            siblings_spouses: sibsp,
            parents_children: parch,
            ..PassengerInput::default()
        };
        let p = predictor.predict(&input).unwrap();
        prop_assert!((0.0..=1.0).contains(&p.probability));
        prop_assert_eq!(p.survived, p.probability >= 0.5);
    }
}
