//! Demographic answers and their fixed enumeration tables.
//!
//! Every categorical answer maps to one ordinal code. The codes are part of
//! the classifier's training schema and must never be renumbered. Option
//! labels are presentation text: both wordings the survey form has used are
//! accepted and resolve to the same code.

/// A closed set of form options with a fixed ordinal encoding.
pub trait Categorical: Copy + Sized + 'static {
    /// Form field name, used in error messages.
    const FIELD: &'static str;

    /// Every option in code order.
    const ALL: &'static [Self];

    /// Ordinal code fed to the classifier.
    fn code(self) -> u8;

    /// Canonical option label.
    fn label(self) -> &'static str;

    /// Alternative labels that resolve to the same option.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Resolve an option from its label or one of its aliases.
    ///
    /// Matching ignores case, quotes, surrounding whitespace and the
    /// en-dash/hyphen distinction.
    fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize_label(label);
        Self::ALL.iter().copied().find(|opt| {
            normalize_label(opt.label()) == wanted
                || opt.aliases().iter().any(|a| normalize_label(a) == wanted)
        })
    }

    /// Resolve an option from its ordinal code.
    fn from_code(code: i64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|opt| i64::from(opt.code()) == code)
    }
}

fn normalize_label(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '\'' && *c != '"')
        .map(|c| if c == '–' || c == '—' { '-' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Gender {
    Female = 0,
    Male = 1,
}

impl Categorical for Gender {
    const FIELD: &'static str = "gender";
    const ALL: &'static [Self] = &[Self::Female, Self::Male];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// Age bracket. Codes start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AgeBracket {
    From18To24 = 1,
    From25To34 = 2,
    From35To44 = 3,
    From45To54 = 4,
    From55To64 = 5,
    Over65 = 6,
}

impl Categorical for AgeBracket {
    const FIELD: &'static str = "age";
    const ALL: &'static [Self] = &[
        Self::From18To24,
        Self::From25To34,
        Self::From35To44,
        Self::From45To54,
        Self::From55To64,
        Self::Over65,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::From18To24 => "18-24",
            Self::From25To34 => "25-34",
            Self::From35To44 => "35-44",
            Self::From45To54 => "45-54",
            Self::From55To64 => "55-64",
            Self::Over65 => "65+",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MaritalStatus {
    NotDisclosed = 0,
    LivingAlone = 1,
    LivingWithPartner = 2,
    CivilPartnership = 3,
    Married = 4,
    Divorced = 5,
    Widowed = 6,
}

impl Categorical for MaritalStatus {
    const FIELD: &'static str = "marital_status";
    const ALL: &'static [Self] = &[
        Self::NotDisclosed,
        Self::LivingAlone,
        Self::LivingWithPartner,
        Self::CivilPartnership,
        Self::Married,
        Self::Divorced,
        Self::Widowed,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotDisclosed => "Preferred not to answer",
            Self::LivingAlone => "Living alone",
            Self::LivingWithPartner => "Living with a partner",
            Self::CivilPartnership => "Registered civil partnership",
            Self::Married => "Married",
            Self::Divorced => "Divorced",
            Self::Widowed => "Widowed",
        }
    }
}

/// Highest completed education, German school system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Education {
    NotDisclosed = 0,
    NoEducation = 1,
    Hauptschule = 2,
    MittlereReife = 3,
    Fachhochschulreife = 4,
    Abitur = 5,
    VocationalTraining = 6,
    UniversityDegree = 7,
}

impl Categorical for Education {
    const FIELD: &'static str = "education";
    const ALL: &'static [Self] = &[
        Self::NotDisclosed,
        Self::NoEducation,
        Self::Hauptschule,
        Self::MittlereReife,
        Self::Fachhochschulreife,
        Self::Abitur,
        Self::VocationalTraining,
        Self::UniversityDegree,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotDisclosed => "Preferred not to answer",
            Self::NoEducation => "No education",
            Self::Hauptschule => "Hauptschule",
            Self::MittlereReife => "Mittlere Reife",
            Self::Fachhochschulreife => "Fachhochschulreife",
            Self::Abitur => "Abitur",
            Self::VocationalTraining => "Vocational training",
            Self::UniversityDegree => "University degree",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Hauptschule => &["'Hauptschule'(completed 9ᵗʰ grade)"],
            Self::MittlereReife => &["'Mittlere Reife'(completed 10ᵗʰ grade)"],
            Self::Fachhochschulreife => &["'Fachhochschulreife'(completed 12ᵗʰ grade)"],
            Self::Abitur => &["Abitur (High School Diploma)"],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Employment {
    NotDisclosed = 0,
    Unemployed = 1,
    Retired = 2,
    Homemaker = 3,
    InEducation = 4,
    UniversityStudent = 5,
    SelfEmployed = 6,
    Employed = 7,
}

impl Categorical for Employment {
    const FIELD: &'static str = "employment";
    const ALL: &'static [Self] = &[
        Self::NotDisclosed,
        Self::Unemployed,
        Self::Retired,
        Self::Homemaker,
        Self::InEducation,
        Self::UniversityStudent,
        Self::SelfEmployed,
        Self::Employed,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotDisclosed => "Preferred not to answer",
            Self::Unemployed => "Unemployed",
            Self::Retired => "Retired",
            Self::Homemaker => "Houseman/housewife",
            Self::InEducation => "In education",
            Self::UniversityStudent => "Studying at a university",
            Self::SelfEmployed => "Self-employed",
            Self::Employed => "Employed",
        }
    }
}

/// Monthly household income after taxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Income {
    NotDisclosed = 0,
    Below750 = 1,
    From750To1250 = 2,
    From1250To2000 = 3,
    From2000To3500 = 4,
    From3500To5000 = 5,
    Above5000 = 6,
}

impl Categorical for Income {
    const FIELD: &'static str = "income";
    const ALL: &'static [Self] = &[
        Self::NotDisclosed,
        Self::Below750,
        Self::From750To1250,
        Self::From1250To2000,
        Self::From2000To3500,
        Self::From3500To5000,
        Self::Above5000,
    ];

    fn code(self) -> u8 {
        self as u8
    }

    fn label(self) -> &'static str {
        match self {
            Self::NotDisclosed => "Preferred not to answer",
            Self::Below750 => "Less than EUR 750",
            Self::From750To1250 => "EUR 750–1250",
            Self::From1250To2000 => "EUR 1250–2000",
            Self::From2000To3500 => "EUR 2000–3500",
            Self::From3500To5000 => "EUR 3500–5000",
            Self::Above5000 => ">EUR 5000",
        }
    }
}

/// The six demographic columns of the feature schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Demographic {
    Gender,
    Age,
    MaritalStatus,
    Education,
    Employment,
    Income,
}

impl Demographic {
    pub const ALL: [Demographic; 6] = [
        Self::Gender,
        Self::Age,
        Self::MaritalStatus,
        Self::Education,
        Self::Employment,
        Self::Income,
    ];

    /// Trained column name.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Gender => "D_1_GENDER",
            Self::Age => "A_1_AGE",
            Self::MaritalStatus => "D_2_FAMILY",
            Self::Education => "D_3_EDUCATION",
            Self::Employment => "D_4_EMPLOYMENT",
            Self::Income => "D_6_INCOME",
        }
    }

    /// Form field name.
    pub fn field_name(self) -> &'static str {
        match self {
            Self::Gender => Gender::FIELD,
            Self::Age => AgeBracket::FIELD,
            Self::MaritalStatus => MaritalStatus::FIELD,
            Self::Education => Education::FIELD,
            Self::Employment => Employment::FIELD,
            Self::Income => Income::FIELD,
        }
    }

    /// `(code, label)` pairs of this field's enumeration table.
    pub fn options(self) -> Vec<(u8, &'static str)> {
        match self {
            Self::Gender => table::<Gender>(),
            Self::Age => table::<AgeBracket>(),
            Self::MaritalStatus => table::<MaritalStatus>(),
            Self::Education => table::<Education>(),
            Self::Employment => table::<Employment>(),
            Self::Income => table::<Income>(),
        }
    }
}

fn table<T: Categorical>() -> Vec<(u8, &'static str)> {
    T::ALL.iter().map(|o| (o.code(), o.label())).collect()
}

/// Demographic answers for one customer. `None` means not yet answered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerProfile {
    pub gender: Option<Gender>,
    pub age: Option<AgeBracket>,
    pub marital_status: Option<MaritalStatus>,
    pub education: Option<Education>,
    pub employment: Option<Employment>,
    pub income: Option<Income>,
}

impl CustomerProfile {
    /// Ordinal code of one answer, if given.
    pub fn code(&self, field: Demographic) -> Option<u8> {
        match field {
            Demographic::Gender => self.gender.map(Categorical::code),
            Demographic::Age => self.age.map(Categorical::code),
            Demographic::MaritalStatus => self.marital_status.map(Categorical::code),
            Demographic::Education => self.education.map(Categorical::code),
            Demographic::Employment => self.employment.map(Categorical::code),
            Demographic::Income => self.income.map(Categorical::code),
        }
    }
}
