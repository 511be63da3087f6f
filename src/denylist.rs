//! Graphics-library element names that are never tagged.
//!
//! `THREE_FIBER_ELEMENTS` lists the react-three-fiber intrinsic primitives,
//! `DREI_ELEMENTS` the drei component library. Matching is exact and
//! case-sensitive.

use lazy_static::lazy_static;
use std::collections::HashSet;

pub const THREE_FIBER_ELEMENTS: [&str; 139] = [
    "object3D",
    "audioListener",
    "positionalAudio",
    "mesh",
    "batchedMesh",
    "instancedMesh",
    "scene",
    "sprite",
    "lOD",
    "skinnedMesh",
    "skeleton",
    "bone",
    "lineSegments",
    "lineLoop",
    "points",
    "group",
    "camera",
    "perspectiveCamera",
    "orthographicCamera",
    "cubeCamera",
    "arrayCamera",
    "instancedBufferGeometry",
    "bufferGeometry",
    "boxBufferGeometry",
    "circleBufferGeometry",
    "coneBufferGeometry",
    "cylinderBufferGeometry",
    "dodecahedronBufferGeometry",
    "extrudeBufferGeometry",
    "icosahedronBufferGeometry",
    "latheBufferGeometry",
    "octahedronBufferGeometry",
    "planeBufferGeometry",
    "polyhedronBufferGeometry",
    "ringBufferGeometry",
    "shapeBufferGeometry",
    "sphereBufferGeometry",
    "tetrahedronBufferGeometry",
    "torusBufferGeometry",
    "torusKnotBufferGeometry",
    "tubeBufferGeometry",
    "wireframeGeometry",
    "tetrahedronGeometry",
    "octahedronGeometry",
    "icosahedronGeometry",
    "dodecahedronGeometry",
    "polyhedronGeometry",
    "tubeGeometry",
    "torusKnotGeometry",
    "torusGeometry",
    "sphereGeometry",
    "ringGeometry",
    "planeGeometry",
    "latheGeometry",
    "shapeGeometry",
    "extrudeGeometry",
    "edgesGeometry",
    "coneGeometry",
    "cylinderGeometry",
    "circleGeometry",
    "boxGeometry",
    "capsuleGeometry",
    "material",
    "shadowMaterial",
    "spriteMaterial",
    "rawShaderMaterial",
    "shaderMaterial",
    "pointsMaterial",
    "meshPhysicalMaterial",
    "meshStandardMaterial",
    "meshPhongMaterial",
    "meshToonMaterial",
    "meshNormalMaterial",
    "meshLambertMaterial",
    "meshDepthMaterial",
    "meshDistanceMaterial",
    "meshBasicMaterial",
    "meshMatcapMaterial",
    "lineDashedMaterial",
    "lineBasicMaterial",
    "primitive",
    "light",
    "spotLightShadow",
    "spotLight",
    "pointLight",
    "rectAreaLight",
    "hemisphereLight",
    "directionalLightShadow",
    "directionalLight",
    "ambientLight",
    "lightShadow",
    "ambientLightProbe",
    "hemisphereLightProbe",
    "lightProbe",
    "spotLightHelper",
    "skeletonHelper",
    "pointLightHelper",
    "hemisphereLightHelper",
    "gridHelper",
    "polarGridHelper",
    "directionalLightHelper",
    "cameraHelper",
    "boxHelper",
    "box3Helper",
    "planeHelper",
    "arrowHelper",
    "axesHelper",
    "texture",
    "videoTexture",
    "dataTexture",
    "dataTexture3D",
    "compressedTexture",
    "cubeTexture",
    "canvasTexture",
    "depthTexture",
    "raycaster",
    "vector2",
    "vector3",
    "vector4",
    "euler",
    "matrix3",
    "matrix4",
    "quaternion",
    "bufferAttribute",
    "float16BufferAttribute",
    "float32BufferAttribute",
    "float64BufferAttribute",
    "int8BufferAttribute",
    "int16BufferAttribute",
    "int32BufferAttribute",
    "uint8BufferAttribute",
    "uint16BufferAttribute",
    "uint32BufferAttribute",
    "instancedBufferAttribute",
    "color",
    "fog",
    "fogExp2",
    "shape",
    "colorShiftMaterial",
];

pub const DREI_ELEMENTS: [&str; 119] = [
    "AsciiRenderer",
    "Billboard",
    "Clone",
    "ComputedAttribute",
    "Decal",
    "Edges",
    "Effects",
    "GradientTexture",
    "Image",
    "MarchingCubes",
    "Outlines",
    "PositionalAudio",
    "Sampler",
    "ScreenSizer",
    "ScreenSpace",
    "Splat",
    "Svg",
    "Text",
    "Text3D",
    "Trail",
    "CubeCamera",
    "OrthographicCamera",
    "PerspectiveCamera",
    "CameraControls",
    "FaceControls",
    "KeyboardControls",
    "MotionPathControls",
    "PresentationControls",
    "ScrollControls",
    "DragControls",
    "GizmoHelper",
    "Grid",
    "Helper",
    "PivotControls",
    "TransformControls",
    "CubeTexture",
    "Fbx",
    "Gltf",
    "Ktx2",
    "Loader",
    "Progress",
    "ScreenVideoTexture",
    "Texture",
    "TrailTexture",
    "VideoTexture",
    "WebcamVideoTexture",
    "CycleRaycast",
    "DetectGPU",
    "Example",
    "FaceLandmarker",
    "Fbo",
    "Html",
    "Select",
    "SpriteAnimator",
    "StatsGl",
    "Stats",
    "Wireframe",
    "CurveModifier",
    "AdaptiveDpr",
    "AdaptiveEvents",
    "BakeShadows",
    "Bvh",
    "Detailed",
    "Instances",
    "Merged",
    "meshBounds",
    "PerformanceMonitor",
    "Points",
    "Preload",
    "Segments",
    "Fisheye",
    "Hud",
    "Mask",
    "MeshPortalMaterial",
    "RenderCubeTexture",
    "RenderTexture",
    "View",
    "MeshDiscardMaterial",
    "MeshDistortMaterial",
    "MeshReflectorMaterial",
    "MeshRefractionMaterial",
    "MeshTransmissionMaterial",
    "MeshWobbleMaterial",
    "PointMaterial",
    "shaderMaterial",
    "SoftShadows",
    "CatmullRomLine",
    "CubicBezierLine",
    "Facemesh",
    "Line",
    "Mesh",
    "QuadraticBezierLine",
    "RoundedBox",
    "ScreenQuad",
    "AccumulativeShadows",
    "Backdrop",
    "BBAnchor",
    "Bounds",
    "CameraShake",
    "Caustics",
    "Center",
    "Cloud",
    "ContactShadows",
    "Environment",
    "Float",
    "Lightformer",
    "MatcapTexture",
    "NormalTexture",
    "RandomizedLight",
    "Resize",
    "ShadowAlpha",
    "Shadow",
    "Sky",
    "Sparkles",
    "SpotLightShadow",
    "SpotLight",
    "Stage",
    "Stars",
    "OrbitControls",
];

lazy_static! {
    static ref THREE_FIBER_SET: HashSet<&'static str> =
        THREE_FIBER_ELEMENTS.into_iter().collect();
    static ref DREI_SET: HashSet<&'static str> = DREI_ELEMENTS.into_iter().collect();
}

/// True when `tag_name` belongs to either 3D list.
pub fn is_3d_element(tag_name: &str) -> bool {
    THREE_FIBER_SET.contains(tag_name) || DREI_SET.contains(tag_name)
}
