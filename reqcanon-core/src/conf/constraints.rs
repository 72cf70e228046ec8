use crate::conf::NormalizerConfig;

#[derive(Debug, Clone)]
pub struct RangeConstraint<T> {
    pub min: T,
    pub max: T,
    pub label: &'static str,
    pub units: Option<&'static str>,
}

pub const MAX_HTTP_BODY_SIZE: RangeConstraint<usize> = RangeConstraint {
    min: 1,
    max: 64 * 1024 * 1024,
    label: "max_http_body_size",
    units: Some(" chars"),
};

pub const MAX_VARIABLE_SIZE: RangeConstraint<usize> = RangeConstraint {
    min: 16,
    max: 1024 * 1024,
    label: "max_variable_size",
    units: Some(" chars"),
};

pub const MAX_DICTIONARY_ITEMS: RangeConstraint<usize> = RangeConstraint {
    min: 1,
    max: 10_000,
    label: "max_dictionary_items",
    units: None,
};

pub const MAX_QUERY_STRING_SIZE: RangeConstraint<usize> = RangeConstraint {
    min: 16,
    max: 1024 * 1024,
    label: "max_query_string_size",
    units: Some(" chars"),
};

pub const MAX_FRAGMENT_SIZE: RangeConstraint<usize> = RangeConstraint {
    min: 16,
    max: 64 * 1024,
    label: "max_fragment_size",
    units: Some(" chars"),
};

pub const MAX_TRIM_DEPTH: RangeConstraint<usize> = RangeConstraint {
    min: 1,
    max: 64,
    label: "max_trim_depth",
    units: None,
};

pub fn validate_range<T>(value: T, constraint: &RangeConstraint<T>, errors: &mut Vec<String>)
where
    T: PartialOrd + std::fmt::Display,
{
    if value < constraint.min || value > constraint.max {
        let units = constraint.units.unwrap_or("");
        errors.push(format!(
            "invalid {}: {}{} (must be between {}{} and {}{})",
            constraint.label, value, units, constraint.min, units, constraint.max, units
        ));
    }
}

/// Range-checks every limit, collecting all violations.
pub fn validate_limits(cfg: &NormalizerConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_range(cfg.max_http_body_size, &MAX_HTTP_BODY_SIZE, &mut errors);
    validate_range(cfg.max_variable_size, &MAX_VARIABLE_SIZE, &mut errors);
    validate_range(cfg.max_dictionary_items, &MAX_DICTIONARY_ITEMS, &mut errors);
    validate_range(cfg.max_query_string_size, &MAX_QUERY_STRING_SIZE, &mut errors);
    validate_range(cfg.max_fragment_size, &MAX_FRAGMENT_SIZE, &mut errors);
    validate_range(cfg.max_trim_depth, &MAX_TRIM_DEPTH, &mut errors);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
