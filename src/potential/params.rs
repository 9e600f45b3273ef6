//! Validated physical parameters
//!
//! Each model freezes its physical parameters once at construction:
//! required names are checked for presence and finiteness, scale/shape
//! parameters for positivity, the resolved gravitational constant is
//! recorded under `"G"`, and the result is immutable for the model's
//! lifetime. All values are expressed in one unit system; mixing unit
//! systems across calls is undefined.

use std::collections::BTreeMap;

use crate::error::PotentialError;

/// Declares one parameter a kernel consumes: its name, an optional default
/// (None means required), and whether it must be strictly positive.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub default: Option<f64>,
    pub positive: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            positive: false,
        }
    }

    pub const fn required_positive(name: &'static str) -> Self {
        Self {
            name,
            default: None,
            positive: true,
        }
    }

    pub const fn optional(name: &'static str, default: f64) -> Self {
        Self {
            name,
            default: Some(default),
            positive: false,
        }
    }
}

/// Immutable name -> value mapping, validated at construction.
/// Holds the raw physical parameters plus the resolved `"G"`.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalParameters {
    values: BTreeMap<String, f64>,
}

impl PhysicalParameters {
    /// Validate `raw` against `specs` and freeze the result.
    ///
    /// Every spec'd name must be present (or defaulted) and finite;
    /// names flagged positive must be > 0. Unknown extra names in `raw`
    /// are rejected so typos fail loudly instead of silently defaulting.
    pub fn resolve(
        g: f64,
        raw: &BTreeMap<String, f64>,
        specs: &[ParamSpec],
    ) -> Result<Self, PotentialError> {
        let mut values = BTreeMap::new();

        for spec in specs {
            let v = match raw.get(spec.name) {
                Some(v) => *v,
                None => spec.default.ok_or_else(|| PotentialError::InvalidParameter {
                    name: spec.name.into(),
                    reason: "required parameter is missing".into(),
                })?,
            };
            if !v.is_finite() {
                return Err(PotentialError::InvalidParameter {
                    name: spec.name.into(),
                    reason: format!("must be finite, got {v}"),
                });
            }
            if spec.positive && v <= 0.0 {
                return Err(PotentialError::InvalidParameter {
                    name: spec.name.into(),
                    reason: format!("must be > 0, got {v}"),
                });
            }
            values.insert(spec.name.to_owned(), v);
        }

        for name in raw.keys() {
            if !specs.iter().any(|s| s.name == name.as_str()) {
                return Err(PotentialError::InvalidParameter {
                    name: name.clone(),
                    reason: "unknown parameter for this kernel".into(),
                });
            }
        }

        if !g.is_finite() {
            return Err(PotentialError::InvalidParameter {
                name: "G".into(),
                reason: format!("must be finite, got {g}"),
            });
        }
        values.insert("G".to_owned(), g);

        Ok(Self { values })
    }

    /// Look up a validated parameter. Names come from the kernel's own
    /// `ParamSpec` list, so a miss cannot happen for spec'd names; an
    /// unknown name yields NaN rather than a panic.
    #[inline]
    pub fn get(&self, name: &str) -> f64 {
        self.values.get(name).copied().unwrap_or(f64::NAN)
    }

    /// Read-only snapshot for reporting. Mutating the returned map has no
    /// effect on the model that produced it.
    pub fn as_map(&self) -> BTreeMap<String, f64> {
        self.values.clone()
    }
}
