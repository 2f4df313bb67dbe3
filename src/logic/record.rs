//! Raw Patient Record - Input Boundary Types
//!
//! One record per prediction request, immutable once built.
//! Categorical fields are closed domains fixed at training time; any value
//! outside a domain deserializes to the `Unknown` variant instead of failing,
//! so the encoder can apply the all-zero indicator rule (see `features::encode`).
//!
//! Field keys mirror the labels the form surface uses ("Sleep Duration",
//! "BMI Category", ...), spaces included.

use serde::{Deserialize, Serialize};

// ============================================================================
// NUMERIC RANGES
// ============================================================================

pub const AGE_RANGE: (u32, u32) = (18, 100);
pub const SLEEP_DURATION_RANGE: (f32, f32) = (0.0, 24.0);
pub const QUALITY_OF_SLEEP_RANGE: (u32, u32) = (1, 10);
pub const PHYSICAL_ACTIVITY_RANGE: (u32, u32) = (0, 300);
pub const STRESS_LEVEL_RANGE: (u32, u32) = (1, 10);
pub const HEART_RATE_RANGE: (u32, u32) = (40, 150);
pub const DAILY_STEPS_RANGE: (u32, u32) = (0, 30_000);

// ============================================================================
// CATEGORICAL DOMAINS
// ============================================================================

macro_rules! categorical_domain {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Value outside the training-time domain
            Unknown,
        }

        impl $name {
            /// All values enumerated at training time (excludes `Unknown`)
            pub const KNOWN: &'static [$name] = &[$($name::$variant),+];

            /// Domain label as seen at training time, `None` for out-of-domain
            pub fn label(&self) -> Option<&'static str> {
                match self {
                    $($name::$variant => Some($label),)+
                    $name::Unknown => None,
                }
            }

            pub fn parse(value: &str) -> Self {
                match value {
                    $($label => $name::$variant,)+
                    _ => $name::Unknown,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::parse(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().unwrap_or("Unknown").to_string()
            }
        }
    };
}

categorical_domain! {
    /// Patient gender. Only `Gender_Male` survived into the trained schema,
    /// so `Female` produces no indicator column.
    Gender {
        Male => "Male",
        Female => "Female",
    }
}

categorical_domain! {
    /// Occupation as recorded in the training data
    Occupation {
        Doctor => "Doctor",
        Engineer => "Engineer",
        Lawyer => "Lawyer",
        Manager => "Manager",
        Nurse => "Nurse",
        SalesRepresentative => "Sales Representative",
        Salesperson => "Salesperson",
        Scientist => "Scientist",
        SoftwareEngineer => "Software Engineer",
        Teacher => "Teacher",
    }
}

categorical_domain! {
    /// BMI category
    BmiCategory {
        NormalWeight => "Normal Weight",
        Overweight => "Overweight",
        Obese => "Obese",
    }
}

categorical_domain! {
    /// Blood pressure reading (mmHg). The training data contained exactly
    /// these 24 systolic/diastolic strings; anything else is `Unknown` and
    /// encodes as an all-zero indicator group.
    BloodPressure {
        Bp115_78 => "115/78",
        Bp117_76 => "117/76",
        Bp118_75 => "118/75",
        Bp118_76 => "118/76",
        Bp119_77 => "119/77",
        Bp120_80 => "120/80",
        Bp121_79 => "121/79",
        Bp122_80 => "122/80",
        Bp125_80 => "125/80",
        Bp125_82 => "125/82",
        Bp126_83 => "126/83",
        Bp128_84 => "128/84",
        Bp128_85 => "128/85",
        Bp129_84 => "129/84",
        Bp130_85 => "130/85",
        Bp130_86 => "130/86",
        Bp131_86 => "131/86",
        Bp132_87 => "132/87",
        Bp135_88 => "135/88",
        Bp135_90 => "135/90",
        Bp139_91 => "139/91",
        Bp140_90 => "140/90",
        Bp140_95 => "140/95",
        Bp142_92 => "142/92",
    }
}

// ============================================================================
// RAW RECORD
// ============================================================================

/// User-supplied patient metrics for one prediction request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Occupation")]
    pub occupation: Occupation,
    #[serde(rename = "Sleep Duration")]
    pub sleep_duration: f32,
    #[serde(rename = "Quality of Sleep")]
    pub quality_of_sleep: u32,
    #[serde(rename = "Physical Activity Level")]
    pub physical_activity_level: u32,
    #[serde(rename = "Stress Level")]
    pub stress_level: u32,
    #[serde(rename = "BMI Category")]
    pub bmi_category: BmiCategory,
    #[serde(rename = "Blood Pressure")]
    pub blood_pressure: BloodPressure,
    #[serde(rename = "Heart Rate")]
    pub heart_rate: u32,
    #[serde(rename = "Daily Steps")]
    pub daily_steps: u32,
}

impl RawRecord {
    /// Clamp all numeric fields into their documented ranges.
    /// This is the only input validation the form surface gets.
    pub fn clamped(mut self) -> Self {
        self.age = self.age.clamp(AGE_RANGE.0, AGE_RANGE.1);
        self.sleep_duration = self
            .sleep_duration
            .clamp(SLEEP_DURATION_RANGE.0, SLEEP_DURATION_RANGE.1);
        self.quality_of_sleep = self
            .quality_of_sleep
            .clamp(QUALITY_OF_SLEEP_RANGE.0, QUALITY_OF_SLEEP_RANGE.1);
        self.physical_activity_level = self
            .physical_activity_level
            .clamp(PHYSICAL_ACTIVITY_RANGE.0, PHYSICAL_ACTIVITY_RANGE.1);
        self.stress_level = self
            .stress_level
            .clamp(STRESS_LEVEL_RANGE.0, STRESS_LEVEL_RANGE.1);
        self.heart_rate = self.heart_rate.clamp(HEART_RATE_RANGE.0, HEART_RATE_RANGE.1);
        self.daily_steps = self
            .daily_steps
            .clamp(DAILY_STEPS_RANGE.0, DAILY_STEPS_RANGE.1);
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
