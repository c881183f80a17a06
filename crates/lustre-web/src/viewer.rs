//! Binding to the external real-time viewer.
//!
//! Rendering, post-processing and asset import all live on the JS side behind
//! a small glue module; this crate only hands over configuration values and
//! mutates camera/object state through the narrow surface bound here.

use fnv::FnvHashMap;
use glam::Vec3;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use lustre_core::{
    AnimError, ModelSpec, SceneSink, Srgb, GEM_MATERIAL, GOLD_MATERIAL, RING_OBJECT,
    SILVER_MATERIAL,
};

// Pipeline configuration handed to the viewer at startup. The plugins belong
// to the viewer; these are just the values the showcase tunes.
pub const BLOOM_ITERATIONS: u32 = 2;
pub const SSAO_SAMPLES: u32 = 4;
pub const SSR_LOW_QUALITY_FRAMES: u32 = 0;
pub const SSR_MOBILE_STEP_DIVISOR: u32 = 2;
pub const PROGRESSIVE_FRAMES: u32 = 32;

// Vignette snippet appended to the viewer's tonemap pass.
pub const TONEMAP_VIGNETTE_DECL: &str = r#"
vec4 vignette(vec4 color, vec2 uv, float offset, float darkness){
    uv = ( uv - vec2( 0.5 ) ) * vec2( offset );
    return vec4( mix( color.rgb, vec3( 0.17, 0.00, 0.09 ), dot( uv, uv ) ), color.a );
}"#;
pub const TONEMAP_VIGNETTE_CALL: &str = "gl_FragColor = vignette(gl_FragColor, vUv, 1.1, 0.8);";

#[wasm_bindgen(module = "/js/viewer.js")]
extern "C" {
    /// Glue class over the viewer SDK. Owns the render pipeline and the asset
    /// importer; exposes only state mutation and the render-dirty flag.
    pub type ShowcaseViewer;

    #[wasm_bindgen(static_method_of = ShowcaseViewer, js_name = create)]
    fn create_js(canvas: &web::HtmlCanvasElement, options: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(static_method_of = ShowcaseViewer, js_name = isMobileDevice)]
    pub fn is_mobile_device() -> bool;

    /// Resolves a scene object by name; null when absent.
    #[wasm_bindgen(method, js_name = findObjectByName)]
    pub fn find_object_by_name(this: &ShowcaseViewer, name: &str) -> JsValue;

    #[wasm_bindgen(method, js_name = setCameraPosition)]
    pub fn set_camera_position(this: &ShowcaseViewer, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method, js_name = setCameraTarget)]
    pub fn set_camera_target(this: &ShowcaseViewer, x: f32, y: f32, z: f32);

    #[wasm_bindgen(method, js_name = cameraPosition)]
    pub fn camera_position_js(this: &ShowcaseViewer) -> Vec<f32>;

    #[wasm_bindgen(method, js_name = cameraTarget)]
    pub fn camera_target_js(this: &ShowcaseViewer) -> Vec<f32>;

    #[wasm_bindgen(method, js_name = setObjectRotation)]
    pub fn set_object_rotation_js(this: &ShowcaseViewer, object: &JsValue, x: f32, y: f32, z: f32);

    /// Color components are linear-light; decoding happens on the Rust side.
    #[wasm_bindgen(method, js_name = setMaterialColor)]
    pub fn set_material_color_js(this: &ShowcaseViewer, object: &JsValue, r: f32, g: f32, b: f32);

    #[wasm_bindgen(method, js_name = setBackground)]
    pub fn set_background_js(this: &ShowcaseViewer, r: f32, g: f32, b: f32);

    /// Raise the render-dirty flag; the viewer re-renders on its next frame.
    #[wasm_bindgen(method, js_name = setDirty)]
    pub fn set_dirty(this: &ShowcaseViewer);

    #[wasm_bindgen(method, js_name = setOrbitControls)]
    pub fn set_orbit_controls(
        this: &ShowcaseViewer,
        enabled: bool,
        auto_rotate: bool,
        min_distance: f32,
        max_distance: f32,
        enable_pan: bool,
    );

    /// Kicks off one sequential asset load; resolves when the scene is fully
    /// populated, rejects on fetch/parse failure.
    #[wasm_bindgen(method, js_name = loadModel)]
    pub fn load_model(this: &ShowcaseViewer, path: &str) -> js_sys::Promise;

    #[wasm_bindgen(method, js_name = unloadModels)]
    pub fn unload_models(this: &ShowcaseViewer);

    #[wasm_bindgen(method, js_name = onImportStart)]
    pub fn on_import_start(this: &ShowcaseViewer, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = onImportProgress)]
    pub fn on_import_progress(this: &ShowcaseViewer, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = onImportLoad)]
    pub fn on_import_load(this: &ShowcaseViewer, callback: &js_sys::Function);

    #[wasm_bindgen(method, js_name = onImportError)]
    pub fn on_import_error(this: &ShowcaseViewer, callback: &js_sys::Function);
}

impl ShowcaseViewer {
    pub fn camera_position(&self) -> Vec3 {
        vec3_from(self.camera_position_js())
    }

    pub fn camera_target(&self) -> Vec3 {
        vec3_from(self.camera_target_js())
    }

    pub fn set_background(&self, color: Srgb) {
        let linear = color.to_linear();
        self.set_background_js(linear.x, linear.y, linear.z);
    }
}

#[inline]
fn vec3_from(components: Vec<f32>) -> Vec3 {
    if components.len() == 3 {
        Vec3::new(components[0], components[1], components[2])
    } else {
        Vec3::ZERO
    }
}

/// Startup options: pipeline values plus the mobile downgrades.
pub fn viewer_options(is_mobile: bool, display_scaling: f64) -> js_sys::Object {
    let options = js_sys::Object::new();
    let set = |key: &str, value: JsValue| {
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &value);
    };
    set("useGBufferDepth", JsValue::TRUE);
    set("isAntialiased", JsValue::FALSE);
    set("displayCanvasScaling", JsValue::from_f64(display_scaling));
    set("progressiveFrames", JsValue::from(PROGRESSIVE_FRAMES));
    set("bloomIterations", JsValue::from(BLOOM_ITERATIONS));
    set("ssaoSamples", JsValue::from(SSAO_SAMPLES));
    set("ssrLowQualityFrames", JsValue::from(SSR_LOW_QUALITY_FRAMES));
    set("tonemapVignetteDecl", JsValue::from_str(TONEMAP_VIGNETTE_DECL));
    set("tonemapVignetteCall", JsValue::from_str(TONEMAP_VIGNETTE_CALL));
    set("mobile", JsValue::from_bool(is_mobile));
    if is_mobile {
        set(
            "fovDegrees",
            JsValue::from_f64(lustre_core::MOBILE_FOV_DEGREES as f64),
        );
        set("ssrStepDivisor", JsValue::from(SSR_MOBILE_STEP_DIVISOR));
        set("bloomEnabled", JsValue::FALSE);
    }
    options
}

/// Create the viewer and wait for its pipeline to come up.
pub async fn create(
    canvas: &web::HtmlCanvasElement,
    is_mobile: bool,
    display_scaling: f64,
) -> anyhow::Result<ShowcaseViewer> {
    let options = viewer_options(is_mobile, display_scaling);
    let promise = ShowcaseViewer::create_js(canvas, &options);
    let value = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow::anyhow!("viewer init failed: {:?}", e))?;
    Ok(value.unchecked_into::<ShowcaseViewer>())
}

/// Maps the logical scene names the timelines use onto live viewer objects.
///
/// Rebuilt after every model load; a missing name is surfaced as
/// `ObjectNotFound` right away instead of a null dereference frames later.
pub struct ViewerScene {
    viewer: ShowcaseViewer,
    objects: FnvHashMap<&'static str, Vec<JsValue>>,
}

impl ViewerScene {
    pub fn new(viewer: ShowcaseViewer) -> Self {
        Self {
            viewer,
            objects: FnvHashMap::default(),
        }
    }

    pub fn viewer(&self) -> &ShowcaseViewer {
        &self.viewer
    }

    /// Current camera pose, read back from the viewer.
    pub fn camera_pose(&self) -> (Vec3, Vec3) {
        (self.viewer.camera_position(), self.viewer.camera_target())
    }

    /// Re-resolve every named object after a (re)load.
    pub fn rebind(&mut self, model: &ModelSpec) -> Result<(), AnimError> {
        self.objects.clear();
        let root = self.lookup(model.root_object)?;
        let silver = self.lookup(model.silver_object)?;
        let gold = self.lookup(model.gold_object)?;
        let gems = model
            .gem_objects
            .iter()
            .map(|name| self.lookup(name))
            .collect::<Result<Vec<_>, _>>()?;
        self.objects.insert(RING_OBJECT, vec![root]);
        self.objects.insert(SILVER_MATERIAL, vec![silver]);
        self.objects.insert(GOLD_MATERIAL, vec![gold]);
        self.objects.insert(GEM_MATERIAL, gems);
        log::info!(
            "[viewer] bound {} scene objects for {}",
            self.objects.values().map(Vec::len).sum::<usize>(),
            model.asset_path
        );
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<JsValue, AnimError> {
        let object = self.viewer.find_object_by_name(name);
        if object.is_null() || object.is_undefined() {
            Err(AnimError::ObjectNotFound(name.to_string()))
        } else {
            Ok(object)
        }
    }

    fn handles(&self, name: &str) -> Result<&[JsValue], AnimError> {
        self.objects
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| AnimError::ObjectNotFound(name.to_string()))
    }
}

impl SceneSink for ViewerScene {
    fn set_camera_position(&mut self, position: Vec3) {
        self.viewer
            .set_camera_position(position.x, position.y, position.z);
    }

    fn set_camera_target(&mut self, target: Vec3) {
        self.viewer.set_camera_target(target.x, target.y, target.z);
    }

    fn set_object_rotation(&mut self, name: &str, euler: Vec3) -> Result<(), AnimError> {
        for handle in self.handles(name)? {
            self.viewer
                .set_object_rotation_js(handle, euler.x, euler.y, euler.z);
        }
        Ok(())
    }

    fn set_material_color(&mut self, name: &str, color: Srgb) -> Result<(), AnimError> {
        let linear = color.to_linear();
        for handle in self.handles(name)? {
            self.viewer
                .set_material_color_js(handle, linear.x, linear.y, linear.z);
        }
        Ok(())
    }
}
