use std::fmt;

/// One of the six primary drivetrain parameters.
///
/// Exactly one core field may be left empty for the solver to resolve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoreField {
    /// Rated motor power (advisory, never solved for).
    MotorPower,
    /// Motor shaft speed.
    MotorSpeed,
    /// Diameter of the pulley on the motor shaft.
    MotorPulleyDiameter,
    /// Diameter of the pulley on the roller shaft.
    RollerPulleyDiameter,
    /// Diameter of the roller driving the belt.
    RollerDiameter,
    /// Linear speed of the belt.
    BeltSpeed,
}

impl CoreField {
    /// All core fields, in form order.
    pub const ALL: [Self; 6] = [
        Self::MotorPower,
        Self::MotorSpeed,
        Self::MotorPulleyDiameter,
        Self::RollerPulleyDiameter,
        Self::RollerDiameter,
        Self::BeltSpeed,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::MotorPower => "motor power",
            Self::MotorSpeed => "motor speed",
            Self::MotorPulleyDiameter => "motor pulley diameter",
            Self::RollerPulleyDiameter => "roller pulley diameter",
            Self::RollerDiameter => "roller diameter",
            Self::BeltSpeed => "belt speed",
        }
    }
}

impl fmt::Display for CoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any drivetrain input, including the secondary-stage pulleys.
///
/// Used to name the prerequisite behind an [`InputError`](super::InputError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// One of the six core fields.
    Core(CoreField),
    /// Secondary-stage pulley driven by the motor belt.
    SecondaryMotorSide,
    /// Secondary-stage pulley driving the roller belt.
    SecondaryRollerSide,
}

impl From<CoreField> for Parameter {
    fn from(field: CoreField) -> Self {
        Self::Core(field)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(field) => fmt::Display::fmt(field, f),
            Self::SecondaryMotorSide => f.write_str("secondary motor-side pulley diameter"),
            Self::SecondaryRollerSide => f.write_str("secondary roller-side pulley diameter"),
        }
    }
}
