//! Conversion boundary for curves that live outside this crate.
//!
//! Two entry points feed the same validated build path as [`Curve::new`]:
//! - [`curve_from_source`] reads any [`CurveSource`] (an editor or host curve type that
//!   exposes its keys and wrap modes);
//! - [`parse_stored_curve_json`] reads the StoredCurve JSON format:
//!
//! ```json
//! {
//!   "name": "blink",
//!   "preWrap": "clamp",
//!   "postWrap": "pingPong",
//!   "keys": [
//!     { "time": 0.0, "value": 0.0, "inTangent": 0.0, "outTangent": "inf" },
//!     { "time": 0.5, "value": 1.0 }
//!   ]
//! }
//! ```
//!
//! JSON has no infinity literal, so tangents also accept the strings `"inf"`, `"-inf"`,
//! `"Infinity"` and `"-Infinity"`. Missing tangents default to 0, missing wraps to clamp.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::keyframe::Keyframe;
use crate::wrap::WrapMode;

/// Read access to an external curve representation.
pub trait CurveSource {
    fn key_count(&self) -> usize;
    /// Keyframe at `index`, for `index < key_count()`.
    fn key_at(&self, index: usize) -> Keyframe;
    fn pre_wrap(&self) -> WrapMode;
    fn post_wrap(&self) -> WrapMode;
}

/// Build a validated [`Curve`] from an external curve representation.
pub fn curve_from_source<S: CurveSource + ?Sized>(source: &S) -> Result<Curve, CurveError> {
    Curve::new(
        (0..source.key_count()).map(|i| source.key_at(i)),
        source.pre_wrap(),
        source.post_wrap(),
    )
}

/// Parse StoredCurve JSON into a validated [`Curve`].
pub fn parse_stored_curve_json(s: &str) -> Result<Curve, CurveError> {
    let stored: StoredCurve =
        serde_json::from_str(s).map_err(|e| CurveError::Parse(e.to_string()))?;
    curve_from_source(&stored)
}

/// Serialize a curve back into StoredCurve JSON.
pub fn to_stored_curve_json(curve: &Curve) -> Result<String, CurveError> {
    let stored = StoredCurve::from_curve(curve)?;
    serde_json::to_string(&stored).map_err(|e| CurveError::Parse(e.to_string()))
}

// ----- JSON schema (serde) -----

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredCurve {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub pre_wrap: WrapMode,
    #[serde(default)]
    pub post_wrap: WrapMode,
    pub keys: Vec<StoredKey>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredKey {
    pub time: f32,
    pub value: f32,
    #[serde(default, with = "tangent_json")]
    pub in_tangent: f32,
    #[serde(default, with = "tangent_json")]
    pub out_tangent: f32,
}

impl StoredCurve {
    /// Snapshot a live curve.
    pub fn from_curve(curve: &Curve) -> Result<Self, CurveError> {
        let keys = curve
            .keyframes()?
            .iter()
            .map(|k| StoredKey {
                time: k.time,
                value: k.value,
                in_tangent: k.in_tangent,
                out_tangent: k.out_tangent,
            })
            .collect();
        Ok(Self {
            id: None,
            name: None,
            pre_wrap: curve.pre_wrap(),
            post_wrap: curve.post_wrap(),
            keys,
        })
    }
}

impl CurveSource for StoredCurve {
    fn key_count(&self) -> usize {
        self.keys.len()
    }

    fn key_at(&self, index: usize) -> Keyframe {
        let k = &self.keys[index];
        Keyframe::new(k.time, k.value, k.in_tangent, k.out_tangent)
    }

    fn pre_wrap(&self) -> WrapMode {
        self.pre_wrap
    }

    fn post_wrap(&self) -> WrapMode {
        self.post_wrap
    }
}

/// Tangents as JSON numbers, with infinities spelled as strings.
mod tangent_json {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize, Serialize)]
    #[serde(untagged)]
    enum RawTangent {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(v: &f32, s: S) -> Result<S::Ok, S::Error> {
        let raw = if v.is_infinite() {
            RawTangent::Text(if *v > 0.0 { "inf" } else { "-inf" }.to_string())
        } else {
            RawTangent::Number(f64::from(*v))
        };
        raw.serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f32, D::Error> {
        match RawTangent::deserialize(d)? {
            RawTangent::Number(n) => Ok(n as f32),
            RawTangent::Text(s) => match s.as_str() {
                "inf" | "+inf" | "Infinity" | "+Infinity" => Ok(f32::INFINITY),
                "-inf" | "-Infinity" => Ok(f32::NEG_INFINITY),
                other => Err(D::Error::custom(format!(
                    "invalid tangent '{other}': expected a number or \"inf\"/\"-inf\""
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EditorCurve {
        times: Vec<f32>,
        values: Vec<f32>,
    }

    impl CurveSource for EditorCurve {
        fn key_count(&self) -> usize {
            self.times.len()
        }
        fn key_at(&self, index: usize) -> Keyframe {
            Keyframe::flat(self.times[index], self.values[index])
        }
        fn pre_wrap(&self) -> WrapMode {
            WrapMode::Loop
        }
        fn post_wrap(&self) -> WrapMode {
            WrapMode::PingPong
        }
    }

    #[test]
    fn builds_from_external_source() {
        let src = EditorCurve {
            times: vec![0.0, 1.0, 2.0],
            values: vec![0.0, 1.0, 0.0],
        };
        let c = curve_from_source(&src).unwrap();
        assert_eq!(c.count(), 3);
        assert_eq!(c.pre_wrap(), WrapMode::Loop);
        assert_eq!(c.post_wrap(), WrapMode::PingPong);
        assert_eq!(c.evaluate(1.0), 1.0);
    }

    #[test]
    fn external_source_is_validated() {
        let src = EditorCurve {
            times: vec![1.0, 0.5, 2.0],
            values: vec![0.0, 1.0, 0.0],
        };
        assert!(curve_from_source(&src).unwrap_err().is_validation());
    }

    #[test]
    fn parses_string_infinities() {
        let json = r#"{
            "postWrap": "loop",
            "keys": [
                { "time": 0, "value": 2, "outTangent": "inf" },
                { "time": 1, "value": 5, "inTangent": "-Infinity" }
            ]
        }"#;
        let c = parse_stored_curve_json(json).unwrap();
        assert_eq!(c.pre_wrap(), WrapMode::Clamp);
        assert_eq!(c.post_wrap(), WrapMode::Loop);
        assert_eq!(c.get(0).unwrap().out_tangent, f32::INFINITY);
        assert_eq!(c.get(1).unwrap().in_tangent, f32::NEG_INFINITY);
        assert_eq!(c.evaluate(0.5), 2.0);
    }

    #[test]
    fn rejects_bad_tangent_text() {
        let json = r#"{ "keys": [ { "time": 0, "value": 0, "inTangent": "steep" } ] }"#;
        assert!(matches!(
            parse_stored_curve_json(json),
            Err(CurveError::Parse(_))
        ));
    }

    #[test]
    fn writes_infinities_as_strings() {
        let c = Curve::new(
            [Keyframe::stepped(0.0, 1.0), Keyframe::flat(1.0, 0.0)],
            WrapMode::Clamp,
            WrapMode::Clamp,
        )
        .unwrap();
        let json = to_stored_curve_json(&c).unwrap();
        assert!(json.contains("\"outTangent\":\"inf\""), "{json}");
        let back = parse_stored_curve_json(&json).unwrap();
        assert_eq!(back, c);
    }
}
