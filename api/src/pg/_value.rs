use chrono::{NaiveDate, NaiveDateTime};

/// A dynamically typed property value, attached to a node or relationship.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A string
    String(String),
    /// A 32-bit integer
    Int(i32),
    /// A 64-bit integer
    Long(i64),
    /// A 32-bit float
    Float(f32),
    /// A 64-bit float
    Double(f64),
    /// A boolean
    Boolean(bool),
    /// A calendar date
    Date(NaiveDate),
    /// A date and time, without timezone
    DateTime(NaiveDateTime),
    /// A homogeneous array of values
    Array(Vec<PropertyValue>),
    /// A byte array
    Bytes(Vec<u8>),
}

impl PropertyValue {
    /// A short name for the kind of this value, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "string",
            PropertyValue::Int(_) => "int",
            PropertyValue::Long(_) => "long",
            PropertyValue::Float(_) => "float",
            PropertyValue::Double(_) => "double",
            PropertyValue::Boolean(_) => "boolean",
            PropertyValue::Date(_) => "date",
            PropertyValue::DateTime(_) => "datetime",
            PropertyValue::Array(_) => "array",
            PropertyValue::Bytes(_) => "bytes",
        }
    }

    /// The string content of this value, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(txt) => Some(txt.as_str()),
            _ => None,
        }
    }

    /// Exact-match equality, as used by index lookups.
    ///
    /// Integers compare numerically regardless of their width,
    /// and so do floats, at `f32` precision as soon as one side is a `Float`;
    /// integers never match floats.
    /// Arrays match element-wise.
    pub fn matches(&self, other: &PropertyValue) -> bool {
        use PropertyValue::*;
        match (self, other) {
            (Int(_) | Long(_), Int(_) | Long(_)) => self.as_i64() == other.as_i64(),
            (Float(a), Float(b)) => a == b,
            (Float(a), Double(b)) | (Double(b), Float(a)) => *a == *b as f32,
            (Double(a), Double(b)) => a == b,
            (Array(a), Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.matches(y))
            }
            _ => self == other,
        }
    }

    fn as_i64(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(i64::from(*i)),
            PropertyValue::Long(i) => Some(*i),
            _ => None,
        }
    }
}

macro_rules! from_native {
    ($native:ty, $variant:ident) => {
        impl From<$native> for PropertyValue {
            fn from(other: $native) -> Self {
                PropertyValue::$variant(other)
            }
        }
    };
}

from_native!(String, String);
from_native!(i32, Int);
from_native!(i64, Long);
from_native!(f32, Float);
from_native!(f64, Double);
from_native!(bool, Boolean);
from_native!(NaiveDate, Date);
from_native!(NaiveDateTime, DateTime);

impl From<&str> for PropertyValue {
    fn from(other: &str) -> Self {
        PropertyValue::String(other.to_string())
    }
}

impl<T: Into<PropertyValue>> From<Vec<T>> for PropertyValue {
    fn from(other: Vec<T>) -> Self {
        PropertyValue::Array(other.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(PropertyValue::Int(1941), PropertyValue::Long(1941), true; "int matches long")]
    #[test_case(PropertyValue::Long(1941), PropertyValue::Long(1942), false; "different longs")]
    #[test_case(PropertyValue::Float(0.5), PropertyValue::Double(0.5), true; "float matches double")]
    #[test_case(PropertyValue::Float(3.14), PropertyValue::Double(3.14), true; "float matches double at float precision")]
    #[test_case(PropertyValue::Double(3.14), PropertyValue::Double(3.140000104904175), false; "doubles at full precision")]
    #[test_case(PropertyValue::Int(1), PropertyValue::Double(1.0), false; "int never matches float")]
    #[test_case(PropertyValue::from("1941"), PropertyValue::Long(1941), false; "string never matches int")]
    #[test_case(PropertyValue::from(vec![1_i64, 2]), PropertyValue::from(vec![1_i32, 2]), true; "arrays match element-wise")]
    #[test_case(PropertyValue::Boolean(true), PropertyValue::Boolean(true), true; "booleans")]
    fn exact_match(a: PropertyValue, b: PropertyValue, expected: bool) {
        assert_eq!(a.matches(&b), expected);
        assert_eq!(b.matches(&a), expected);
    }

    #[test]
    fn from_vec_of_str() {
        let v = PropertyValue::from(vec!["Suzy"]);
        assert_eq!(v, PropertyValue::Array(vec![PropertyValue::from("Suzy")]));
        assert_eq!(v.kind_name(), "array");
    }
}
