use std::fmt;
use std::sync::{Arc, LazyLock};

use serde::{Deserialize, Serialize};

use crate::validator::holidayvalidator::HolidayValidator;

use super::ruleset::RuleSet;
use super::{trnc, turkey};

static TURKEY_RULES: LazyLock<Arc<RuleSet>> = LazyLock::new(|| {
    Arc::new(RuleSet::new(
        turkey::NAME,
        turkey::FIXED_HOLIDAYS.to_vec(),
        turkey::LUNAR_ANCHORS.to_vec()
    ))
});

static TRNC_RULES: LazyLock<Arc<RuleSet>> = LazyLock::new(|| {
    Arc::new(TURKEY_RULES.extend(
        trnc::NAME,
        trnc::FIXED_HOLIDAYS.iter().cloned(),
        trnc::LUNAR_ANCHORS.iter().cloned()
    ))
});

/// Built-in holiday profiles.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Jurisdiction {
    Turkey,
    #[serde(rename = "TRNC")]
    Trnc
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 2] = [Jurisdiction::Turkey, Jurisdiction::Trnc];

    pub fn name(&self) -> &'static str {
        match self {
            Jurisdiction::Turkey => turkey::NAME,
            Jurisdiction::Trnc => trnc::NAME
        }
    }

    /// Shared, process-wide rule set; built on first use and never mutated.
    pub fn rule_set(&self) -> Arc<RuleSet> {
        match self {
            Jurisdiction::Turkey => Arc::clone(&*TURKEY_RULES),
            Jurisdiction::Trnc => Arc::clone(&*TRNC_RULES)
        }
    }

    pub fn validator(&self, include_saturday_as_weekend: bool) -> HolidayValidator {
        HolidayValidator::with_rules(self.rule_set(), include_saturday_as_weekend)
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
