//! Parameter values supplied to a route template
//!
//! A parameter is either a scalar (bound to a `[name]` placeholder), an
//! ordered list of scalars (bound to a `[...name]` placeholder), or an
//! explicit null. Parameters can be built in code or loaded from JSON/TOML.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading parameter files
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Failed to read params file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse params JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Failed to parse params TOML: {0}")]
    TomlError(#[from] toml::de::Error),
    #[error("Unsupported params file format: {path} (expected .json or .toml)")]
    UnsupportedFormat { path: String },
}

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// String form used for substitution
    ///
    /// Whole floats print without a fraction, negative zero prints as `0`,
    /// magnitudes of at least 1e21 or below 1e-6 use exponent form (`1e+21`),
    /// and non-finite floats print as `NaN` / `Infinity` / `-Infinity`.
    pub fn to_path_string(&self) -> String {
        match self {
            Scalar::String(s) => s.clone(),
            Scalar::Integer(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Float(f) => format_float(*f),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if f == 0.0 {
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        // Exponent form with an explicit sign: 1e+21, 1.5e-7
        let exp = format!("{:e}", f);
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => {
                format!("{}e+{}", mantissa, power)
            }
            _ => exp,
        }
    } else {
        f.to_string()
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_path_string())
    }
}

/// The value bound to a parameter name
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl ParamValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ParamValue::List(_))
    }

    /// Short name of the value's shape, for error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Scalar(_) => "scalar",
            ParamValue::List(_) => "list",
        }
    }
}

macro_rules! scalar_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    Scalar::$variant(v.into())
                }
            }

            impl From<$ty> for ParamValue {
                fn from(v: $ty) -> Self {
                    ParamValue::Scalar(v.into())
                }
            }
        )*
    };
}

scalar_from! {
    String => String,
    &str => String,
    &String => String,
    bool => Bool,
    i8 => Integer,
    i16 => Integer,
    i32 => Integer,
    i64 => Integer,
    u8 => Integer,
    u16 => Integer,
    u32 => Integer,
    f32 => Float,
    f64 => Float,
}

// Integers that may not fit in i64 keep their exact decimal text
macro_rules! scalar_from_wide {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from(v: $ty) -> Self {
                    match i64::try_from(v) {
                        Ok(n) => Scalar::Integer(n),
                        Err(_) => Scalar::String(v.to_string()),
                    }
                }
            }

            impl From<$ty> for ParamValue {
                fn from(v: $ty) -> Self {
                    ParamValue::Scalar(v.into())
                }
            }
        )*
    };
}

scalar_from_wide!(u64, usize, isize, i128, u128);

impl From<Scalar> for ParamValue {
    fn from(v: Scalar) -> Self {
        ParamValue::Scalar(v)
    }
}

impl<T: Into<Scalar>> From<Vec<T>> for ParamValue {
    fn from(items: Vec<T>) -> Self {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for ParamValue {
    fn from(items: [T; N]) -> Self {
        ParamValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar> + Clone> From<&[T]> for ParamValue {
    fn from(items: &[T]) -> Self {
        ParamValue::List(items.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

/// Mapping from parameter name to value
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Params(HashMap<String, ParamValue>);

impl Params {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value with the same name
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameter names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.0.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merge another mapping into this one; entries from `other` win
    pub fn extend(&mut self, other: Params) {
        self.0.extend(other.0);
    }

    /// Load parameters from a JSON object
    pub fn from_json_str(content: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load parameters from a TOML table
    pub fn from_toml_str(content: &str) -> Result<Self, ParamsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load parameters from a `.json` or `.toml` file
    pub fn from_file(path: &Path) -> Result<Self, ParamsError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
            Some("toml") => Self::from_toml_str(&std::fs::read_to_string(path)?),
            _ => Err(ParamsError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
