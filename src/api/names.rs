/// Human readable name for an API identifier, e.g. "gles2" => "OpenGL ES".
///
/// Lookup is case-insensitive; unknown identifiers come back upper-cased.
pub fn api_name(api: &str) -> String {
    let api = api.to_lowercase();
    let name = match api.as_str() {
        "egl" => "EGL",
        "gl" => "OpenGL",
        "gles1" | "gles2" => "OpenGL ES",
        "glsc2" => "OpenGL SC",
        "glx" => "GLX",
        "wgl" => "WGL",
        _ => return api.to_uppercase(),
    };
    name.to_string()
}
