use js_sys::JSON;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use vizij_curve_core::{
    bake_curve, parse_stored_curve_json, to_stored_curve_json, BakingConfig, Config, Curve,
    Keyframe, WrapMode,
};

/// JS handle owning one immutable curve.
///
/// Call `dispose()` when done; it frees the keyframes and a second call throws. Any
/// sampling or indexing after `dispose()` throws instead of returning garbage.
#[wasm_bindgen]
pub struct VizijCurve {
    core: Curve,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

fn parse_config<T: DeserializeOwned>(config: JsValue) -> Result<Option<T>, JsError> {
    if jsvalue_is_undefined_or_null(&config) {
        return Ok(None);
    }
    swb::from_value(config)
        .map(Some)
        .map_err(|e| JsError::new(&format!("config error: {e}")))
}

/// Wrap modes given by the caller; absent fields keep the stored curve's modes.
#[derive(Deserialize)]
struct WrapOverride {
    #[serde(default, alias = "preWrap")]
    pre_wrap: Option<WrapMode>,
    #[serde(default, alias = "postWrap")]
    post_wrap: Option<WrapMode>,
}

#[wasm_bindgen]
impl VizijCurve {
    /// Build a curve from a StoredCurve JSON object.
    ///
    /// `config` (optional) overrides the stored wrap modes field by field, e.g.
    /// `{ preWrap: "loop" }` keeps the stored `postWrap`.
    #[wasm_bindgen(constructor)]
    pub fn new(data_json: JsValue, config: JsValue) -> Result<VizijCurve, JsError> {
        console_error_panic_hook::set_once();

        if jsvalue_is_undefined_or_null(&data_json) {
            return Err(JsError::new("VizijCurve: data_json is null/undefined"));
        }
        // Stringify the JS object so we can reuse the core parser (expects &str)
        let s = JSON::stringify(&data_json)
            .map_err(|e| JsError::new(&format!("VizijCurve stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("VizijCurve: stringify produced non-string"))?;
        let parsed =
            parse_stored_curve_json(&s).map_err(|e| JsError::new(&format!("VizijCurve: {e}")))?;

        let core = match parse_config::<WrapOverride>(config)? {
            None => parsed,
            Some(over) => {
                let pre = over.pre_wrap.unwrap_or(parsed.pre_wrap());
                let post = over.post_wrap.unwrap_or(parsed.post_wrap());
                let keys = parsed
                    .keyframes()
                    .map_err(|e| JsError::new(&e.to_string()))?
                    .to_vec();
                Curve::new(keys, pre, post).map_err(|e| JsError::new(&e.to_string()))?
            }
        };
        Ok(VizijCurve { core })
    }

    /// Build a curve from parallel arrays (typed arrays or plain number arrays).
    #[wasm_bindgen(js_name = fromKeys)]
    pub fn from_keys(
        times: &[f32],
        values: &[f32],
        in_tangents: &[f32],
        out_tangents: &[f32],
        config: JsValue,
    ) -> Result<VizijCurve, JsError> {
        console_error_panic_hook::set_once();

        let n = times.len();
        if values.len() != n || in_tangents.len() != n || out_tangents.len() != n {
            return Err(JsError::new(&format!(
                "fromKeys: array lengths differ (times={n}, values={}, inTangents={}, outTangents={})",
                values.len(),
                in_tangents.len(),
                out_tangents.len()
            )));
        }
        let keys = (0..n)
            .map(|i| Keyframe::new(times[i], values[i], in_tangents[i], out_tangents[i]));
        let cfg: Config = parse_config(config)?.unwrap_or_default();
        let core = Curve::with_config(keys, &cfg).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(VizijCurve { core })
    }

    /// Sample the curve at time `t`.
    pub fn evaluate(&self, t: f32) -> Result<f32, JsError> {
        self.core
            .try_evaluate(t)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Sample the curve at every time in `times`; returns a Float32Array.
    #[wasm_bindgen(js_name = evaluateMany)]
    pub fn evaluate_many(&self, times: &[f32]) -> Result<Vec<f32>, JsError> {
        let mut out = vec![0.0; times.len()];
        self.core
            .sample_into(times, &mut out)
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(out)
    }

    /// Number of keyframes (0 after dispose).
    pub fn count(&self) -> usize {
        self.core.count()
    }

    #[wasm_bindgen(js_name = startTime)]
    pub fn start_time(&self) -> f32 {
        self.core.start_time()
    }

    #[wasm_bindgen(js_name = endTime)]
    pub fn end_time(&self) -> f32 {
        self.core.end_time()
    }

    pub fn duration(&self) -> f32 {
        self.core.duration()
    }

    /// Keyframe at `index` as `{ time, value, inTangent, outTangent }`.
    pub fn get(&self, index: usize) -> Result<JsValue, JsError> {
        let key = self
            .core
            .get(index)
            .map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&key).map_err(|e| JsError::new(&format!("keyframe error: {e}")))
    }

    /// Bake samples; `cfg` is optional JSON matching BakingConfig.
    pub fn bake(&self, cfg: JsValue) -> Result<JsValue, JsError> {
        let cfg: BakingConfig = if jsvalue_is_undefined_or_null(&cfg) {
            BakingConfig::default()
        } else {
            swb::from_value(cfg).map_err(|e| JsError::new(&format!("baking cfg error: {e}")))?
        };
        let baked = bake_curve(&self.core, &cfg).map_err(|e| JsError::new(&e.to_string()))?;
        swb::to_value(&baked).map_err(|e| JsError::new(&format!("baked output error: {e}")))
    }

    /// StoredCurve JSON string for this curve.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        to_stored_curve_json(&self.core).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Free the keyframes. Throws if already disposed.
    pub fn dispose(&mut self) -> Result<(), JsError> {
        self.core
            .release()
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// False once `dispose()` has run.
    #[wasm_bindgen(js_name = isCreated)]
    pub fn is_created(&self) -> bool {
        self.core.is_created()
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
