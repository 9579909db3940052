use serde_json::{Map, Number, Value};
use std::{
	cmp::Ordering,
	collections::BTreeMap,
	fmt::{Debug, Display},
	hash::Hash,
};

/// A property value or feature id.
///
/// Mirrors the JSON value space, with numbers split into unsigned, signed and
/// floating-point variants so ids and counters survive a round trip unchanged.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Array(Vec<GeoValue>),
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	Object(BTreeMap<String, GeoValue>),
	String(String),
	UInt(u64),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
		}
	}
}

impl GeoValue {
	/// Returns `true` for strings and numbers, the value kinds GeoJSON allows as feature id.
	pub fn is_id(&self) -> bool {
		matches!(
			self,
			GeoValue::String(_) | GeoValue::Double(_) | GeoValue::Int(_) | GeoValue::UInt(_)
		)
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}

	pub fn to_json(&self) -> Value {
		match self {
			GeoValue::Array(list) => Value::Array(list.iter().map(GeoValue::to_json).collect()),
			GeoValue::Bool(v) => Value::Bool(*v),
			GeoValue::Double(v) => Number::from_f64(*v).map_or(Value::Null, Value::Number),
			GeoValue::Int(v) => Value::from(*v),
			GeoValue::Null => Value::Null,
			GeoValue::Object(map) => Value::Object(map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect::<Map<_, _>>()),
			GeoValue::String(v) => Value::String(v.clone()),
			GeoValue::UInt(v) => Value::from(*v),
		}
	}

	fn variant_order(&self) -> u8 {
		match self {
			GeoValue::String(_) => 0,
			GeoValue::Double(_) => 1,
			GeoValue::Int(_) => 2,
			GeoValue::UInt(_) => 3,
			GeoValue::Bool(_) => 4,
			GeoValue::Array(_) => 5,
			GeoValue::Object(_) => 6,
			GeoValue::Null => 7,
		}
	}
}

impl From<&Value> for GeoValue {
	fn from(value: &Value) -> Self {
		match value {
			Value::Null => GeoValue::Null,
			Value::Bool(v) => GeoValue::Bool(*v),
			Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					GeoValue::UInt(v)
				} else if let Some(v) = n.as_i64() {
					GeoValue::Int(v)
				} else {
					GeoValue::Double(n.as_f64().unwrap_or(f64::NAN))
				}
			}
			Value::String(v) => GeoValue::String(v.clone()),
			Value::Array(list) => GeoValue::Array(list.iter().map(GeoValue::from).collect()),
			Value::Object(map) => GeoValue::Object(map.iter().map(|(k, v)| (k.clone(), GeoValue::from(v))).collect()),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		if value < 0 {
			GeoValue::Int(value as i64)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		GeoValue::Int(value)
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl Eq for GeoValue {}

impl Hash for GeoValue {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		core::mem::discriminant(self).hash(state);
		match self {
			GeoValue::Array(v) => v.hash(state),
			GeoValue::Bool(v) => v.hash(state),
			GeoValue::Double(v) => v.to_bits().hash(state),
			GeoValue::Int(v) => v.hash(state),
			GeoValue::Null => (),
			GeoValue::Object(v) => v.hash(state),
			GeoValue::String(v) => v.hash(state),
			GeoValue::UInt(v) => v.hash(state),
		}
	}
}

impl PartialOrd for GeoValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for GeoValue {
	fn cmp(&self, other: &Self) -> Ordering {
		use GeoValue::*;
		match (self, other) {
			(String(a), String(b)) => a.cmp(b),
			(Double(a), Double(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
			(Int(a), Int(b)) => a.cmp(b),
			(UInt(a), UInt(b)) => a.cmp(b),
			(Bool(a), Bool(b)) => a.cmp(b),
			(Array(a), Array(b)) => a.cmp(b),
			(Object(a), Object(b)) => a.cmp(b),
			_ => self.variant_order().cmp(&other.variant_order()),
		}
	}
}

impl Display for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::Array(_) | GeoValue::Object(_) => write!(f, "{}", self.to_json()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn ordering_within_and_across_variants() {
		assert!(GeoValue::from("a") < GeoValue::from("b"));
		assert!(GeoValue::from(1.0) < GeoValue::from(2.0));
		assert!(GeoValue::from(-2) < GeoValue::from(-1));
		assert!(GeoValue::from(1u64) < GeoValue::from(2u64));
		assert!(GeoValue::from(false) < GeoValue::from(true));

		assert!(GeoValue::from("a") < GeoValue::from(1.0));
		assert!(GeoValue::from(1u64) < GeoValue::from(false));
		assert!(GeoValue::from(true) < GeoValue::Null);
	}

	#[test]
	fn from_json_picks_number_variant() {
		assert_eq!(GeoValue::from(&json!(7)), GeoValue::UInt(7));
		assert_eq!(GeoValue::from(&json!(-7)), GeoValue::Int(-7));
		assert_eq!(GeoValue::from(&json!(7.5)), GeoValue::Double(7.5));
	}

	#[test]
	fn nested_json_round_trip() {
		let input = json!({"name": "Nice", "tags": [1, "two", null], "nested": {"ok": true}});
		let value = GeoValue::from(&input);
		assert_eq!(value.to_json(), input);
	}

	#[test]
	fn is_id() {
		assert!(GeoValue::from("abc").is_id());
		assert!(GeoValue::from(12).is_id());
		assert!(!GeoValue::Null.is_id());
		assert!(!GeoValue::from(true).is_id());
	}

	#[test]
	fn display() {
		assert_eq!(GeoValue::from("x").to_string(), "x");
		assert_eq!(GeoValue::from(3).to_string(), "3");
		assert_eq!(GeoValue::Null.to_string(), "null");
		assert_eq!(GeoValue::from(&json!([1, 2])).to_string(), "[1,2]");
	}
}
