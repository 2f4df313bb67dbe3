//! Integration Tests for the Encoding Pipeline
//!
//! Checks the schema-fidelity properties of the full record-to-vector path,
//! group by group, rather than individual helpers.

#[cfg(test)]
mod integration_tests {
    use crate::logic::features::{
        encode::encode,
        layout::{FEATURE_COUNT, FEATURE_LAYOUT},
        vector::FeatureVector,
    };
    use crate::logic::record::{BloodPressure, BmiCategory, Gender, Occupation, RawRecord};

    fn record(
        gender: Gender,
        occupation: Occupation,
        bmi: BmiCategory,
        bp: BloodPressure,
    ) -> RawRecord {
        RawRecord {
            age: 42,
            gender,
            occupation,
            sleep_duration: 6.5,
            quality_of_sleep: 7,
            physical_activity_level: 45,
            stress_level: 4,
            bmi_category: bmi,
            blood_pressure: bp,
            heart_rate: 68,
            daily_steps: 8000,
        }
    }

    fn group_sum(vector: &FeatureVector, prefix: &str) -> f32 {
        FEATURE_LAYOUT
            .iter()
            .zip(vector.as_slice())
            .filter(|(name, _)| name.starts_with(prefix))
            .map(|(_, value)| *value)
            .sum()
    }

    /// Every valid record yields exactly 45 slots in schema order
    #[test]
    fn test_vector_shape_is_fixed() {
        let vector = encode(&record(
            Gender::Female,
            Occupation::Nurse,
            BmiCategory::Obese,
            BloodPressure::Bp140_95,
        ));
        assert_eq!(vector.as_slice().len(), FEATURE_COUNT);
        assert_eq!(vector.feature_names(), FEATURE_LAYOUT);
        assert!(vector.validate().is_ok());
    }

    /// In-domain categoricals set exactly one indicator per group
    /// (Gender is the exception: only the Male column survived training)
    #[test]
    fn test_one_hot_per_group() {
        for occupation in Occupation::KNOWN {
            for bmi in BmiCategory::KNOWN {
                let vector = encode(&record(
                    Gender::Male,
                    *occupation,
                    *bmi,
                    BloodPressure::Bp118_76,
                ));
                assert_eq!(group_sum(&vector, "Occupation_"), 1.0);
                assert_eq!(group_sum(&vector, "BMI Category_"), 1.0);
                assert_eq!(group_sum(&vector, "Blood Pressure_"), 1.0);
                assert_eq!(group_sum(&vector, "Gender_"), 1.0);
            }
        }
    }

    /// Each blood pressure value lights up its own column only
    #[test]
    fn test_blood_pressure_column_selection() {
        for bp in BloodPressure::KNOWN {
            let vector = encode(&record(
                Gender::Male,
                Occupation::Doctor,
                BmiCategory::Overweight,
                *bp,
            ));
            let expected = format!("Blood Pressure_{}", bp.label().unwrap());
            assert_eq!(vector.get_by_name(&expected), Some(1.0));
            assert_eq!(group_sum(&vector, "Blood Pressure_"), 1.0);
        }
    }

    /// An out-of-domain reading leaves all 24 blood pressure columns zero
    #[test]
    fn test_unknown_blood_pressure_degrades_silently() {
        let vector = encode(&record(
            Gender::Male,
            Occupation::Teacher,
            BmiCategory::NormalWeight,
            BloodPressure::Unknown,
        ));
        assert_eq!(group_sum(&vector, "Blood Pressure_"), 0.0);
        // The rest of the vector is unaffected
        assert_eq!(vector.get_by_name("Age"), Some(42.0));
        assert_eq!(vector.get_by_name("Occupation_Teacher"), Some(1.0));
    }

    /// The reference example, checked slot by slot
    #[test]
    fn test_reference_example_vector() {
        let vector = encode(&RawRecord {
            age: 30,
            gender: Gender::Male,
            occupation: Occupation::Engineer,
            sleep_duration: 7.0,
            quality_of_sleep: 6,
            physical_activity_level: 30,
            stress_level: 5,
            bmi_category: BmiCategory::NormalWeight,
            blood_pressure: BloodPressure::Bp120_80,
            heart_rate: 70,
            daily_steps: 5000,
        });

        let expected_nonzero = [
            ("Age", 30.0),
            ("Sleep Duration", 7.0),
            ("Quality of Sleep", 6.0),
            ("Physical Activity Level", 30.0),
            ("Stress Level", 5.0),
            ("Heart Rate", 70.0),
            ("Daily Steps", 5000.0),
            ("Gender_Male", 1.0),
            ("Occupation_Engineer", 1.0),
            ("BMI Category_Normal Weight", 1.0),
            ("Blood Pressure_120/80", 1.0),
        ];

        for (name, value) in vector.feature_names().iter().zip(vector.as_slice()) {
            match expected_nonzero.iter().find(|(n, _)| n == name) {
                Some((_, expected)) => assert_eq!(value, expected, "{}", name),
                None => assert_eq!(*value, 0.0, "{} should be 0", name),
            }
        }
    }

    /// Encoding is deterministic
    #[test]
    fn test_encode_deterministic() {
        let input = record(
            Gender::Female,
            Occupation::Scientist,
            BmiCategory::Obese,
            BloodPressure::Bp131_86,
        );
        assert_eq!(encode(&input), encode(&input));
    }
}
