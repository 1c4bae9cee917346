/// Lit sphere shader: ambient, one directional and up to two point lights,
/// with a metalness/roughness/emissive surface.
pub const SHADER_SPHERE: &str = r#"
struct Globals {
    view_proj: mat4x4<f32>,
    camera_pos: vec4<f32>,
    ambient: vec4<f32>,
    directional: vec4<f32>,
    point_lights: array<vec4<f32>, 2>,
};

@group(0) @binding(0) var<uniform> globals: Globals;

struct VertexIn {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceIn {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
    @location(7) material: vec4<f32>,
};

struct VsOut {
    @builtin(position) clip: vec4<f32>,
    @location(0) world_pos: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) color: vec3<f32>,
    @location(3) material: vec3<f32>,
};

@vertex
fn vs_main(v: VertexIn, inst: InstanceIn) -> VsOut {
    let model = mat4x4<f32>(inst.model_0, inst.model_1, inst.model_2, inst.model_3);
    let world = model * vec4<f32>(v.position, 1.0);

    var out: VsOut;
    out.clip = globals.view_proj * world;
    out.world_pos = world.xyz;
    // Rotation + uniform scale only, so the model matrix is fine for normals
    out.normal = normalize((model * vec4<f32>(v.normal, 0.0)).xyz);
    out.color = inst.color.rgb;
    out.material = inst.material.xyz;
    return out;
}

fn shade(
    n: vec3<f32>,
    view_dir: vec3<f32>,
    light_dir: vec3<f32>,
    intensity: f32,
    albedo: vec3<f32>,
    metalness: f32,
    roughness: f32,
) -> vec3<f32> {
    let n_dot_l = max(dot(n, light_dir), 0.0);
    let half_dir = normalize(light_dir + view_dir);
    let shininess = mix(256.0, 8.0, roughness);
    let highlight = pow(max(dot(n, half_dir), 0.0), shininess) * (1.0 - roughness);
    let f0 = mix(vec3<f32>(0.04), albedo, metalness);
    let diffuse = albedo * (1.0 - metalness) * n_dot_l;
    let specular = f0 * highlight * n_dot_l;
    return (diffuse + specular + albedo * metalness * 0.25 * n_dot_l) * intensity;
}

@fragment
fn fs_main(frag: VsOut) -> @location(0) vec4<f32> {
    let n = normalize(frag.normal);
    let view_dir = normalize(globals.camera_pos.xyz - frag.world_pos);
    let albedo = frag.color;
    let metalness = frag.material.x;
    let roughness = frag.material.y;
    let emissive = frag.material.z;

    var color = albedo * globals.ambient.x;

    if (globals.directional.w > 0.0) {
        color += shade(n, view_dir, normalize(globals.directional.xyz), globals.directional.w,
                       albedo, metalness, roughness);
    }

    for (var i = 0u; i < 2u; i = i + 1u) {
        let light = globals.point_lights[i];
        if (light.w > 0.0) {
            let light_dir = normalize(light.xyz - frag.world_pos);
            color += shade(n, view_dir, light_dir, light.w, albedo, metalness, roughness);
        }
    }

    color += albedo * emissive;
    return vec4<f32>(color, 1.0);
}
"#;
