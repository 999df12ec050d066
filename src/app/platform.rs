// src/app/platform.rs
//
// OS chrome integration. The dark-title-bar wish lives in AppState; this is
// the single place that talks to the platform about it.

use nannou::window::Window;

/// Push the requested title-bar theme to the window. Returns true when the
/// platform accepted the change; the caller tracks applied/unsupported.
#[cfg(target_os = "windows")]
pub(crate) fn apply_dark_title_bar(window: &Window, dark: bool) -> bool {
    use nannou::winit::platform::windows::WindowExtWindows;
    use windows_sys::Win32::Graphics::Dwm::{
        DwmSetWindowAttribute, DWMWA_USE_IMMERSIVE_DARK_MODE,
    };

    let hwnd = window.winit_window().hwnd() as isize;
    let value: i32 = if dark { 1 } else { 0 };
    // DWM reads the BOOL by pointer; the value only needs to live for the
    // duration of the call.
    let result = unsafe {
        DwmSetWindowAttribute(
            hwnd,
            DWMWA_USE_IMMERSIVE_DARK_MODE,
            &value as *const i32 as *const core::ffi::c_void,
            std::mem::size_of::<i32>() as u32,
        )
    };
    if result == 0 {
        true
    } else {
        tracing::warn!(dark, hresult = result, "DwmSetWindowAttribute refused the title bar theme");
        false
    }
}

#[cfg(not(target_os = "windows"))]
pub(crate) fn apply_dark_title_bar(_window: &Window, dark: bool) -> bool {
    tracing::debug!(dark, "dark title bar is not supported on this platform");
    false
}
