//! Rules shared by create, full update and the patched display form

use super::dto::{CreateHabitDto, FrequencyDto, HabitDto, TargetDto, UpdateHabitDto};
use crate::shared::validation::{ValidationErrors, ValidationRules};

const NAME: ValidationRules = ValidationRules::required().with_max_length(100);
const DESCRIPTION: ValidationRules = ValidationRules::none().with_max_length(500);
const TIMES_PER_PERIOD: ValidationRules = ValidationRules::none().with_min(1);
const TARGET_VALUE: ValidationRules = ValidationRules::none().with_min(0);
const TARGET_UNIT: ValidationRules = ValidationRules::none().with_max_length(100);
const MILESTONE_TARGET: ValidationRules = ValidationRules::none().with_min(1);
const MILESTONE_CURRENT: ValidationRules = ValidationRules::none().with_min(0);

fn check_common(
    errors: &mut ValidationErrors,
    name: &str,
    description: Option<&str>,
    frequency: &FrequencyDto,
    target: &TargetDto,
    milestone_target: Option<i32>,
) {
    NAME.check_string(errors, "name", name);
    if let Some(description) = description {
        DESCRIPTION.check_string(errors, "description", description);
    }
    TIMES_PER_PERIOD.check_number(
        errors,
        "frequency.timesPerPeriod",
        frequency.times_per_period.into(),
    );
    TARGET_VALUE.check_number(errors, "target.value", target.value.into());
    TARGET_UNIT.check_string(errors, "target.unit", &target.unit);
    if let Some(milestone_target) = milestone_target {
        MILESTONE_TARGET.check_number(errors, "milestone.target", milestone_target.into());
    }
}

impl CreateHabitDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_common(
            &mut errors,
            &self.name,
            self.description.as_deref(),
            &self.frequency,
            &self.target,
            self.milestone.map(|m| m.target),
        );
        errors.into_result()
    }
}

impl UpdateHabitDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_common(
            &mut errors,
            &self.name,
            self.description.as_deref(),
            &self.frequency,
            &self.target,
            self.milestone.map(|m| m.target),
        );
        errors.into_result()
    }
}

impl HabitDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_common(
            &mut errors,
            &self.name,
            self.description.as_deref(),
            &self.frequency,
            &self.target,
            self.milestone.map(|m| m.target),
        );
        if let Some(milestone) = self.milestone {
            MILESTONE_CURRENT.check_number(&mut errors, "milestone.current", milestone.current.into());
        }
        errors.into_result()
    }
}
